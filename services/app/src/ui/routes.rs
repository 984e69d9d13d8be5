//! services/app/src/ui/routes.rs
//!
//! The three logical views of the recipe box and how paths map onto them.

use recipe_box_core::domain::RecipeId;

/// A parsed navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`, the searchable recipe list.
    List,
    /// `/add`, the new-recipe form.
    Add,
    /// `/recipe/<id>`, one recipe with its edit form.
    Detail(RecipeId),
    /// Anything else.
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        let segments: Vec<&str> = normalized
            .trim_start_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Route::List,
            ["add"] => Route::Add,
            ["recipe", id] => Route::Detail(RecipeId::from(*id)),
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Add => "/add".to_string(),
            Route::Detail(id) => format!("/recipe/{}", id),
            Route::NotFound(path) => path.clone(),
        }
    }
}
