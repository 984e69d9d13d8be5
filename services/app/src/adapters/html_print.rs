//! services/app/src/adapters/html_print.rs
//!
//! This module contains the print adapter. It implements the `PrintService`
//! port from the `core` crate by rendering a standalone HTML page for one
//! recipe and writing it into the configured print directory, ready to be
//! opened and printed from any browser.

use async_trait::async_trait;
use chrono::Utc;
use html_escape::encode_text;
use recipe_box_core::domain::Recipe;
use recipe_box_core::ports::{PortError, PortResult, PrintReceipt, PrintService};
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::info;

const PRINT_STYLE: &str = r#"
    @media print { @page { margin: 2cm; } }
    body { font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; line-height: 1.6; }
    .recipe-header { border-bottom: 2px solid #333; padding-bottom: 1rem; margin-bottom: 2rem; }
    h1 { color: #333; margin: 0 0 0.5rem 0; }
    .meta { color: #666; margin-bottom: 2rem; display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
    .meta-item { padding: 0.5rem; background: #f5f5f5; border-radius: 4px; }
    .ingredients { margin-bottom: 2rem; }
    .ingredients h2, .instructions h2 { color: #444; border-bottom: 1px solid #ddd; padding-bottom: 0.5rem; }
    .ingredients ul { list-style-type: disc; padding-left: 1.5rem; }
    .ingredients li { margin-bottom: 0.5rem; }
    .instructions div { white-space: pre-line; }
    footer { margin-top: 2rem; text-align: center; color: #666; font-size: 0.9rem; }
"#;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements the `PrintService` port with static HTML files.
#[derive(Clone, Debug)]
pub struct HtmlPrintAdapter {
    output_dir: PathBuf,
}

impl HtmlPrintAdapter {
    /// Creates a new `HtmlPrintAdapter` writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

/// Renders the printable document for `recipe`. Every piece of recipe text
/// is escaped; ingredients keep their order and instructions keep their line
/// breaks.
pub fn render_print_document(recipe: &Recipe) -> String {
    let name = encode_text(&recipe.name);

    let mut ingredients = String::new();
    for ingredient in &recipe.ingredients {
        let _ = write!(ingredients, "\n        <li>{}</li>", encode_text(ingredient));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>{name} - Recipe</title>
  <style>{style}</style>
</head>
<body>
  <div class="recipe-header">
    <h1>{name}</h1>
  </div>
  <div class="meta">
    <div class="meta-item"><strong>Cuisine:</strong> {cuisine}</div>
    <div class="meta-item"><strong>Cooking Time:</strong> {minutes} minutes</div>
    <div class="meta-item"><strong>Difficulty:</strong> {difficulty}</div>
  </div>
  <div class="ingredients">
    <h2>Ingredients</h2>
    <ul>{ingredients}
    </ul>
  </div>
  <div class="instructions">
    <h2>Instructions</h2>
    <div>{instructions}</div>
  </div>
  <footer>
    <p>Printed from Recipe Box</p>
  </footer>
</body>
</html>
"#,
        name = name,
        style = PRINT_STYLE,
        cuisine = encode_text(&recipe.cuisine),
        minutes = recipe.cooking_time,
        difficulty = recipe.difficulty.label(),
        ingredients = ingredients,
        instructions = encode_text(&recipe.instructions),
    )
}

/// Print files are named after the recipe id, so only ids made of ASCII
/// letters, digits, `-` and `_` are accepted. Generated ids always are; ids
/// read back from storage might not be.
fn print_file_name(recipe: &Recipe) -> PortResult<String> {
    let id = recipe.id.as_str();
    let safe = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !safe {
        return Err(PortError::Unexpected(format!(
            "recipe id '{}' cannot be used as a file name",
            id
        )));
    }
    Ok(format!("{}.html", id))
}

//=========================================================================================
// `PrintService` Trait Implementation
//=========================================================================================

#[async_trait]
impl PrintService for HtmlPrintAdapter {
    async fn print(&self, recipe: &Recipe) -> PortResult<PrintReceipt> {
        let file_name = print_file_name(recipe)?;
        let document = render_print_document(recipe);

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| PortError::Unavailable(format!("{}: {}", self.output_dir.display(), e)))?;

        let location = self.output_dir.join(file_name);
        tokio::fs::write(&location, document)
            .await
            .map_err(|e| PortError::Unavailable(format!("{}: {}", location.display(), e)))?;

        info!(id = %recipe.id, path = %location.display(), "Wrote print document");
        Ok(PrintReceipt {
            recipe_id: recipe.id.clone(),
            location,
            printed_at: Utc::now(),
        })
    }
}
