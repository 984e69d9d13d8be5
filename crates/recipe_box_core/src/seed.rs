//! crates/recipe_box_core/src/seed.rs
//!
//! The built-in example recipes the store falls back to when storage holds
//! nothing usable. Ids are generated on first access and stay the same for
//! the rest of the process; a new process gets new ids.

use std::sync::OnceLock;

use crate::domain::{Difficulty, Recipe, RecipeId};

static DEFAULT_RECIPES: OnceLock<Vec<Recipe>> = OnceLock::new();

/// Returns a copy of the seed set.
pub fn default_recipes() -> Vec<Recipe> {
    DEFAULT_RECIPES.get_or_init(build_default_recipes).clone()
}

fn build_default_recipes() -> Vec<Recipe> {
    vec![
        seed(
            "Classic Margherita Pizza",
            &[
                "2 cups all-purpose flour",
                "1 cup warm water",
                "2 1/4 tsp active dry yeast",
                "Fresh mozzarella",
                "Fresh basil leaves",
                "Tomato sauce",
                "Olive oil",
                "Salt",
            ],
            "1. Make the dough by mixing flour, water, yeast, and salt\n\
             2. Let it rise for 1 hour\n\
             3. Stretch the dough and add toppings\n\
             4. Bake at 450°F for 12-15 minutes\n\
             5. Garnish with fresh basil",
            "Italian",
            "https://images.unsplash.com/photo-1574071318508-1cdbab80d002",
            90,
            Difficulty::Medium,
        ),
        seed(
            "Chicken Teriyaki",
            &[
                "4 chicken breasts",
                "1/2 cup soy sauce",
                "1/4 cup mirin",
                "1/4 cup sake",
                "3 tbsp brown sugar",
                "Ginger",
                "Garlic",
                "Green onions",
            ],
            "1. Mix soy sauce, mirin, sake, and sugar for the sauce\n\
             2. Cut chicken into bite-sized pieces\n\
             3. Cook chicken until golden\n\
             4. Add sauce and simmer until thickened\n\
             5. Serve with rice and garnish with green onions",
            "Japanese",
            "https://ohsweetbasil.com/wp-content/uploads/easy-teriyaki-chicken-recipe-2-scaled.jpg",
            30,
            Difficulty::Easy,
        ),
        seed(
            "Chocolate Chip Cookies",
            &[
                "2 1/4 cups all-purpose flour",
                "1 cup butter",
                "3/4 cup sugar",
                "3/4 cup brown sugar",
                "2 eggs",
                "2 cups chocolate chips",
                "1 tsp vanilla extract",
                "1 tsp baking soda",
            ],
            "1. Cream butter and sugars until fluffy\n\
             2. Beat in eggs and vanilla\n\
             3. Mix in dry ingredients\n\
             4. Fold in chocolate chips\n\
             5. Bake at 375°F for 10-12 minutes",
            "American",
            "https://images.unsplash.com/photo-1499636136210-6f4ee915583e",
            25,
            Difficulty::Easy,
        ),
    ]
}

fn seed(
    name: &str,
    ingredients: &[&str],
    instructions: &str,
    cuisine: &str,
    image: &str,
    cooking_time: i32,
    difficulty: Difficulty,
) -> Recipe {
    Recipe {
        id: RecipeId::generate(),
        name: name.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        instructions: instructions.to_string(),
        cuisine: cuisine.to_string(),
        image: image.to_string(),
        cooking_time,
        difficulty,
        is_favorite: false,
    }
}
