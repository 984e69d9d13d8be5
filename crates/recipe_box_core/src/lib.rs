pub mod domain;
pub mod filter;
pub mod memory;
pub mod ports;
pub mod seed;
pub mod store;

pub use domain::{Difficulty, Recipe, RecipeDraft, RecipeId};
pub use filter::{filter_recipes, matches, RecipeQuery, SearchField};
pub use memory::InMemoryStorage;
pub use ports::{KeyValueStorage, PortError, PortResult, PrintReceipt, PrintService};
pub use seed::default_recipes;
pub use store::{DataSource, RecipeStore, StoreError, STORAGE_KEY};
