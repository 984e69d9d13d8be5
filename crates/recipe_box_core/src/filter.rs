//! crates/recipe_box_core/src/filter.rs
//!
//! Search over the recipe list. Everything here is a pure function of its
//! inputs; the source list is never modified.

use std::fmt;
use std::str::FromStr;

use crate::domain::Recipe;

/// Which recipe field the search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchField {
    #[default]
    Name,
    Ingredients,
    Cuisine,
}

impl SearchField {
    pub const ALL: [SearchField; 3] = [SearchField::Name, SearchField::Ingredients, SearchField::Cuisine];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Ingredients => "ingredients",
            SearchField::Cuisine => "cuisine",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search field '{0}', expected name, ingredients or cuisine")]
pub struct ParseSearchFieldError(pub String);

impl FromStr for SearchField {
    type Err = ParseSearchFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SearchField::Name),
            "ingredients" => Ok(SearchField::Ingredients),
            "cuisine" => Ok(SearchField::Cuisine),
            _ => Err(ParseSearchFieldError(s.to_string())),
        }
    }
}

/// The list view's search settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeQuery {
    pub term: String,
    pub field: SearchField,
    pub favorites_only: bool,
}

impl RecipeQuery {
    pub fn new(term: impl Into<String>, field: SearchField) -> Self {
        Self {
            term: term.into(),
            field,
            favorites_only: false,
        }
    }

    pub fn favorites_only(mut self, favorites_only: bool) -> Self {
        self.favorites_only = favorites_only;
        self
    }

    pub fn accepts(&self, recipe: &Recipe) -> bool {
        if self.favorites_only && !recipe.is_favorite {
            return false;
        }
        matches(recipe, self.field, &self.term)
    }
}

/// Case-insensitive substring match of `term` against one field of `recipe`.
/// For ingredients any single ingredient may match. An empty term matches.
pub fn matches(recipe: &Recipe, field: SearchField, term: &str) -> bool {
    let needle = term.to_lowercase();
    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);
    match field {
        SearchField::Name => contains(&recipe.name),
        SearchField::Cuisine => contains(&recipe.cuisine),
        SearchField::Ingredients => {
            needle.is_empty() || recipe.ingredients.iter().any(|i| contains(i))
        }
    }
}

/// Returns the recipes accepted by `query`, in source order.
pub fn filter_recipes<'a>(recipes: &'a [Recipe], query: &RecipeQuery) -> Vec<&'a Recipe> {
    recipes.iter().filter(|r| query.accepts(r)).collect()
}
