//! services/app/src/ui/session.rs
//!
//! Defines the presentation session: the state one running UI keeps around
//! the recipe store (search settings and the printer) and the mapping from
//! routes to views.

use recipe_box_core::domain::{Recipe, RecipeId};
use recipe_box_core::filter::{filter_recipes, RecipeQuery, SearchField};
use recipe_box_core::ports::{PortError, PrintReceipt, PrintService};
use recipe_box_core::store::RecipeStore;
use std::sync::Arc;
use tracing::{error, warn};

use crate::ui::forms::{DraftForm, FormError};
use crate::ui::routes::Route;

//=========================================================================================
// Views
//=========================================================================================

/// What a route resolves to, borrowed from the session.
#[derive(Debug)]
pub enum View<'a> {
    /// The store has not finished loading.
    Loading,
    List {
        recipes: Vec<&'a Recipe>,
        query: &'a RecipeQuery,
        /// A recoverable store condition worth telling the user about.
        notice: Option<String>,
    },
    Add {
        form: DraftForm,
    },
    Detail {
        recipe: &'a Recipe,
    },
    NotFound {
        path: String,
    },
}

/// The result of asking for a recipe to be printed.
#[derive(Debug)]
pub enum PrintOutcome {
    Printed(PrintReceipt),
    NoSuchRecipe,
    Failed(PortError),
}

//=========================================================================================
// UiSession
//=========================================================================================

/// The state for one running UI, created once at startup.
pub struct UiSession {
    store: RecipeStore,
    query: RecipeQuery,
    printer: Arc<dyn PrintService>,
}

impl UiSession {
    pub fn new(store: RecipeStore, printer: Arc<dyn PrintService>) -> Self {
        Self {
            store,
            query: RecipeQuery::default(),
            printer,
        }
    }

    pub fn store(&self) -> &RecipeStore {
        &self.store
    }

    pub fn query(&self) -> &RecipeQuery {
        &self.query
    }

    pub fn resolve(&self, route: &Route) -> View<'_> {
        if self.store.is_loading() {
            return View::Loading;
        }
        match route {
            Route::List => View::List {
                recipes: filter_recipes(self.store.list(), &self.query),
                query: &self.query,
                notice: self.notice(),
            },
            Route::Add => View::Add {
                form: DraftForm::default(),
            },
            Route::Detail(id) => match self.store.get(id) {
                Some(recipe) => View::Detail { recipe },
                None => View::NotFound { path: route.path() },
            },
            Route::NotFound(path) => View::NotFound { path: path.clone() },
        }
    }

    /// A user-facing message for the store's outstanding error, if any.
    pub fn notice(&self) -> Option<String> {
        self.store.error().map(|e| e.to_string())
    }

    //=====================================================================================
    // Search
    //=====================================================================================

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.term = term.into();
    }

    pub fn set_search_field(&mut self, field: SearchField) {
        self.query.field = field;
    }

    pub fn set_favorites_only(&mut self, favorites_only: bool) {
        self.query.favorites_only = favorites_only;
    }

    //=====================================================================================
    // Actions
    //=====================================================================================

    /// Submits the add form. Returns the stored recipe.
    pub fn submit_new(&mut self, form: DraftForm) -> Result<Recipe, FormError> {
        let draft = form.into_draft()?;
        Ok(self.store.add(draft))
    }

    /// Submits the edit form for `id`. `Ok(false)` means the recipe is gone.
    pub fn submit_edit(&mut self, id: &RecipeId, form: DraftForm) -> Result<bool, FormError> {
        let draft = form.into_draft()?;
        Ok(self.store.update(id, draft))
    }

    pub fn delete(&mut self, id: &RecipeId) -> bool {
        self.store.delete(id)
    }

    pub fn toggle_favorite(&mut self, id: &RecipeId) -> bool {
        self.store.toggle_favorite(id)
    }

    /// Sends one recipe to the printer. Failures are logged and handed back,
    /// never retried.
    pub async fn print(&self, id: &RecipeId) -> PrintOutcome {
        let Some(recipe) = self.store.get(id) else {
            warn!(%id, "Print requested for unknown recipe");
            return PrintOutcome::NoSuchRecipe;
        };
        match self.printer.print(recipe).await {
            Ok(receipt) => PrintOutcome::Printed(receipt),
            Err(e) => {
                error!(%id, error = %e, "Failed to print recipe");
                PrintOutcome::Failed(e)
            }
        }
    }
}
