//! services/app/src/ui/render.rs
//!
//! Plain-text rendering of views for the terminal host.

use recipe_box_core::domain::Recipe;
use std::fmt::Write as _;

use crate::ui::session::View;

const IMAGE_PLACEHOLDER: &str = "[no image]";

pub fn render_view(view: &View<'_>) -> String {
    let mut out = String::new();
    match view {
        View::Loading => out.push_str("Loading recipes...\n"),
        View::List { recipes, query, notice } => {
            if let Some(notice) = notice {
                let _ = writeln!(out, "! {}", notice);
            }
            let _ = write!(out, "Search {}: \"{}\"", query.field, query.term);
            if query.favorites_only {
                out.push_str(" (favorites only)");
            }
            out.push('\n');
            if recipes.is_empty() {
                out.push_str("No recipes found. Try adjusting your search criteria.\n");
            }
            for recipe in recipes {
                out.push_str(&summary_line(recipe));
                out.push('\n');
            }
        }
        View::Add { form } => {
            out.push_str("Add New Recipe\n");
            let _ = writeln!(out, "  --name          {}", form.name);
            let _ = writeln!(out, "  --cuisine       {}", form.cuisine);
            let _ = writeln!(out, "  --image         {}", form.image);
            let _ = writeln!(out, "  --cooking-time  {} minutes", form.cooking_time);
            let _ = writeln!(out, "  --difficulty    {} (easy, medium or hard)", form.difficulty);
            let _ = writeln!(out, "  --ingredient    one per flag, in order");
            for ingredient in form.ingredients.lines() {
                let _ = writeln!(out, "                  {}", ingredient);
            }
            let _ = writeln!(out, "  --instructions  {}", form.instructions);
        }
        View::Detail { recipe } => {
            let _ = writeln!(out, "{}{}", recipe.name, if recipe.is_favorite { " ♥" } else { "" });
            let image = recipe.image.trim();
            let _ = writeln!(out, "{}", if image.is_empty() { IMAGE_PLACEHOLDER } else { image });
            let _ = writeln!(out, "Cuisine: {}", recipe.cuisine);
            let _ = writeln!(out, "Cooking Time: {} minutes", recipe.cooking_time);
            let _ = writeln!(out, "Difficulty: {}", recipe.difficulty.label());
            out.push_str("\nIngredients\n");
            for ingredient in &recipe.ingredients {
                let _ = writeln!(out, "  • {}", ingredient);
            }
            out.push_str("\nInstructions\n");
            for line in recipe.instructions.lines() {
                let _ = writeln!(out, "  {}", line);
            }
        }
        View::NotFound { path } => {
            let _ = writeln!(out, "404 Page Not Found: {}", path);
        }
    }
    out
}

fn summary_line(recipe: &Recipe) -> String {
    format!(
        "{} {}  [{}]  {} mins  {}  ({})",
        if recipe.is_favorite { "♥" } else { " " },
        recipe.name,
        recipe.cuisine,
        recipe.cooking_time,
        recipe.difficulty.label(),
        recipe.id,
    )
}
