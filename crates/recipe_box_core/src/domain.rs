//! crates/recipe_box_core/src/domain.rs
//!
//! Defines the core data structures for the recipe box.
//! The serde attributes pin the persisted JSON layout (camelCase field names,
//! lowercase difficulty), which must stay readable across releases.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque, unique identifier of a recipe. Assigned by the store, never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    /// Generates a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecipeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecipeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How hard a recipe is to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The lowercase form used in storage and forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Capitalized form for display ("Easy", "Medium", "Hard").
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty '{0}', expected easy, medium or hard")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// A single recipe as held by the store and persisted to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    /// Display and print order.
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub cuisine: String,
    pub image: String,
    /// Minutes.
    pub cooking_time: i32,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Recipe {
    /// Attaches an id to a draft.
    pub fn from_draft(id: RecipeId, draft: RecipeDraft) -> Self {
        Self {
            id,
            name: draft.name,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            cuisine: draft.cuisine,
            image: draft.image,
            cooking_time: draft.cooking_time,
            difficulty: draft.difficulty,
            is_favorite: draft.is_favorite,
        }
    }

    /// Replaces every field except the id.
    pub fn apply(&mut self, draft: RecipeDraft) {
        self.name = draft.name;
        self.ingredients = draft.ingredients;
        self.instructions = draft.instructions;
        self.cuisine = draft.cuisine;
        self.image = draft.image;
        self.cooking_time = draft.cooking_time;
        self.difficulty = draft.difficulty;
        self.is_favorite = draft.is_favorite;
    }

    /// Copies the editable fields into a draft, e.g. to prefill an edit form.
    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            name: self.name.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
            cuisine: self.cuisine.clone(),
            image: self.image.clone(),
            cooking_time: self.cooking_time,
            difficulty: self.difficulty,
            is_favorite: self.is_favorite,
        }
    }
}

/// A recipe without an id: the input to `add` and `update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub cuisine: String,
    pub image: String,
    pub cooking_time: i32,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            ingredients: Vec::new(),
            instructions: String::new(),
            cuisine: String::new(),
            image: String::new(),
            cooking_time: 30,
            difficulty: Difficulty::Medium,
            is_favorite: false,
        }
    }
}
