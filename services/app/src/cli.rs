//! services/app/src/cli.rs
//!
//! The command line of the terminal host. `Cli` is parsed once in the binary;
//! `execute` runs the chosen command against the session and returns the text
//! to show on stdout.

use clap::{Args, Parser, Subcommand};
use recipe_box_core::{RecipeId, SearchField};
use tracing::info;

use crate::error::AppError;
use crate::ui::{render_view, DraftForm, PrintOutcome, Route, UiSession};

#[derive(Debug, Parser)]
#[command(
    name = "recipe_box",
    about = "Keep, search and print your recipes",
    long_about = "Keep, search and print your recipes. With no command, lists every recipe."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a page: `/`, `/add` or `/recipe/<id>`
    Show {
        #[arg(default_value = "/")]
        path: String,
    },

    /// List the recipes matching a search
    Search {
        /// name, ingredients or cuisine
        field: SearchField,

        /// Case-insensitive text to look for
        #[arg(default_value = "")]
        term: String,

        /// Only list favorites
        #[arg(long)]
        favorites: bool,
    },

    /// Add a recipe; unset fields take the blank form's defaults
    Add {
        #[command(flatten)]
        fields: RecipeFields,
    },

    /// Change some fields of an existing recipe
    Edit {
        id: String,

        #[command(flatten)]
        fields: RecipeFields,
    },

    /// Flip a recipe's favorite flag
    Favorite { id: String },

    /// Delete a recipe
    Delete { id: String },

    /// Write a printable HTML page for a recipe
    Print { id: String },
}

/// Form fields settable from the command line. Values stay as typed; the form
/// layer validates them.
#[derive(Debug, Default, Args)]
pub struct RecipeFields {
    #[arg(long)]
    pub name: Option<String>,

    /// One ingredient; repeat in order. Replaces the whole list when given.
    #[arg(long = "ingredient")]
    pub ingredients: Vec<String>,

    #[arg(long)]
    pub instructions: Option<String>,

    #[arg(long)]
    pub cuisine: Option<String>,

    /// Image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Minutes
    #[arg(long)]
    pub cooking_time: Option<String>,

    /// easy, medium or hard
    #[arg(long)]
    pub difficulty: Option<String>,
}

impl RecipeFields {
    /// Overwrites the fields that were given, leaving the rest of `form` alone.
    pub fn apply_to(self, mut form: DraftForm) -> DraftForm {
        if let Some(name) = self.name {
            form.name = name;
        }
        if !self.ingredients.is_empty() {
            form.ingredients = self.ingredients.join("\n");
        }
        if let Some(instructions) = self.instructions {
            form.instructions = instructions;
        }
        if let Some(cuisine) = self.cuisine {
            form.cuisine = cuisine;
        }
        if let Some(image) = self.image {
            form.image = image;
        }
        if let Some(cooking_time) = self.cooking_time {
            form.cooking_time = cooking_time;
        }
        if let Some(difficulty) = self.difficulty {
            form.difficulty = difficulty;
        }
        form
    }
}

fn no_such_recipe(id: &RecipeId) -> String {
    format!("No recipe with id {}\n", id)
}

/// Runs one command. Unknown ids are reported in the returned text; invalid
/// form input and print failures come back as errors.
pub async fn execute(session: &mut UiSession, command: Option<Command>) -> Result<String, AppError> {
    let route = match command {
        None => Route::List,
        Some(Command::Show { path }) => Route::parse(&path),
        Some(Command::Search { field, term, favorites }) => {
            session.set_search_field(field);
            session.set_search_term(term);
            session.set_favorites_only(favorites);
            Route::List
        }
        Some(Command::Add { fields }) => {
            let recipe = session.submit_new(fields.apply_to(DraftForm::default()))?;
            info!(id = %recipe.id, "Added recipe");
            Route::Detail(recipe.id)
        }
        Some(Command::Edit { id, fields }) => {
            let id = RecipeId::from(id);
            let Some(form) = session.store().get(&id).map(DraftForm::from_recipe) else {
                return Ok(no_such_recipe(&id));
            };
            if !session.submit_edit(&id, fields.apply_to(form))? {
                return Ok(no_such_recipe(&id));
            }
            info!(%id, "Updated recipe");
            Route::Detail(id)
        }
        Some(Command::Favorite { id }) => {
            let id = RecipeId::from(id);
            if !session.toggle_favorite(&id) {
                return Ok(no_such_recipe(&id));
            }
            Route::Detail(id)
        }
        Some(Command::Delete { id }) => {
            let id = RecipeId::from(id);
            if !session.delete(&id) {
                return Ok(no_such_recipe(&id));
            }
            let list = render_view(&session.resolve(&Route::List));
            return Ok(format!("Recipe deleted successfully\n{}", list));
        }
        Some(Command::Print { id }) => {
            return match session.print(&RecipeId::from(id)).await {
                PrintOutcome::Printed(receipt) => Ok(format!("{}\n", receipt.location.display())),
                PrintOutcome::NoSuchRecipe => Ok("Recipe not found\n".to_string()),
                PrintOutcome::Failed(e) => Err(e.into()),
            };
        }
    };

    Ok(render_view(&session.resolve(&route)))
}
