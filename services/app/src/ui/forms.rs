//! services/app/src/ui/forms.rs
//!
//! Turns raw add/edit form input into recipe drafts.

use recipe_box_core::domain::{Difficulty, Recipe, RecipeDraft};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Cooking time must be a whole number of minutes, got '{0}'")]
    InvalidCookingTime(String),
    #[error("Cooking time must be at least one minute, got {0}")]
    NonPositiveCookingTime(i32),
    #[error("Unknown difficulty '{0}'")]
    InvalidDifficulty(String),
}

/// Form fields exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftForm {
    pub name: String,
    /// One ingredient per line.
    pub ingredients: String,
    pub instructions: String,
    pub cuisine: String,
    pub image: String,
    pub cooking_time: String,
    pub difficulty: String,
    pub is_favorite: bool,
}

impl Default for DraftForm {
    /// A blank add form: 30 minutes, medium.
    fn default() -> Self {
        Self::from_draft(&RecipeDraft::default())
    }
}

impl DraftForm {
    fn from_draft(draft: &RecipeDraft) -> Self {
        Self {
            name: draft.name.clone(),
            ingredients: draft.ingredients.join("\n"),
            instructions: draft.instructions.clone(),
            cuisine: draft.cuisine.clone(),
            image: draft.image.clone(),
            cooking_time: draft.cooking_time.to_string(),
            difficulty: draft.difficulty.as_str().to_string(),
            is_favorite: draft.is_favorite,
        }
    }

    /// Prefills the edit form from a stored recipe.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self::from_draft(&recipe.to_draft())
    }

    pub fn into_draft(self) -> Result<RecipeDraft, FormError> {
        let cooking_time = self
            .cooking_time
            .trim()
            .parse::<i32>()
            .map_err(|_| FormError::InvalidCookingTime(self.cooking_time.clone()))?;
        if cooking_time <= 0 {
            return Err(FormError::NonPositiveCookingTime(cooking_time));
        }

        let difficulty = self
            .difficulty
            .parse::<Difficulty>()
            .map_err(|e| FormError::InvalidDifficulty(e.0))?;

        Ok(RecipeDraft {
            name: self.name.trim().to_string(),
            ingredients: parse_ingredients(&self.ingredients),
            instructions: self.instructions,
            cuisine: self.cuisine.trim().to_string(),
            image: self.image.trim().to_string(),
            cooking_time,
            difficulty,
            is_favorite: self.is_favorite,
        })
    }
}

/// Splits the ingredients box into one entry per non-blank line, in order.
pub fn parse_ingredients(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_box_core::domain::RecipeId;

    #[test]
    fn blank_lines_are_dropped() {
        assert_eq!(
            parse_ingredients("flour\n\n  water \r\n   \nsalt"),
            ["flour", "water", "salt"]
        );
    }

    #[test]
    fn default_form_matches_new_recipe_defaults() {
        let form = DraftForm::default();
        assert_eq!(form.cooking_time, "30");
        assert_eq!(form.difficulty, "medium");
        assert!(!form.is_favorite);
    }

    #[test]
    fn edit_form_round_trips_recipe() {
        let draft = RecipeDraft {
            name: "Ramen".to_string(),
            ingredients: vec!["noodles".to_string(), "broth".to_string()],
            instructions: "Simmer\nServe".to_string(),
            cooking_time: 45,
            difficulty: Difficulty::Hard,
            is_favorite: true,
            ..RecipeDraft::default()
        };
        let recipe = Recipe::from_draft(RecipeId::from("r"), draft.clone());
        assert_eq!(DraftForm::from_recipe(&recipe).into_draft(), Ok(draft));
    }

    #[test]
    fn bad_numbers_and_difficulties_are_rejected() {
        let mut form = DraftForm {
            cooking_time: "soon".to_string(),
            ..DraftForm::default()
        };
        assert_eq!(
            form.clone().into_draft(),
            Err(FormError::InvalidCookingTime("soon".to_string()))
        );

        form.cooking_time = "0".to_string();
        assert_eq!(
            form.clone().into_draft(),
            Err(FormError::NonPositiveCookingTime(0))
        );

        form.cooking_time = " -15 ".to_string();
        assert_eq!(
            form.clone().into_draft(),
            Err(FormError::NonPositiveCookingTime(-15))
        );

        form.cooking_time = "10".to_string();
        form.difficulty = "brutal".to_string();
        assert_eq!(
            form.into_draft(),
            Err(FormError::InvalidDifficulty("brutal".to_string()))
        );
    }
}
