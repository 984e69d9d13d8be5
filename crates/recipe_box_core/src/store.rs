//! crates/recipe_box_core/src/store.rs
//!
//! The recipe store: the single owner of the recipe list. Every mutation
//! updates the in-memory list and then writes the whole list back to storage
//! under one key. Storage failures never undo a mutation; they are recorded
//! and exposed through the error accessors so the presentation can tell the
//! user the data is not being saved.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::{Recipe, RecipeDraft, RecipeId};
use crate::ports::KeyValueStorage;
use crate::seed::default_recipes;

/// The storage key holding the serialized recipe list.
pub const STORAGE_KEY: &str = "recipes";

/// A recoverable condition the store ran into.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Storage could not be read at startup.
    #[error("Could not read saved recipes: {0}")]
    Load(String),
    /// Storage held something that is not a recipe list.
    #[error("Saved recipes are corrupt: {0}")]
    Corrupt(String),
    /// The latest write to storage failed; changes live in memory only.
    #[error("Could not save recipes: {0}")]
    Save(String),
}

/// Where the current list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Nothing loaded yet.
    Unloaded,
    /// The built-in example recipes.
    Seed,
    /// The list read back from storage.
    Persisted,
}

/// Owns the canonical recipe list and keeps storage in step with it.
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    storage: Arc<dyn KeyValueStorage>,
    loading: bool,
    source: DataSource,
    load_error: Option<StoreError>,
    save_error: Option<StoreError>,
}

impl RecipeStore {
    /// Creates an empty store that has not read storage yet.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            recipes: Vec::new(),
            storage,
            loading: true,
            source: DataSource::Unloaded,
            load_error: None,
            save_error: None,
        }
    }

    /// Creates a store and loads it from storage.
    pub fn open(storage: Arc<dyn KeyValueStorage>) -> Self {
        let mut store = Self::new(storage);
        store.load();
        store
    }

    /// Reads the saved list, falling back to the seed recipes when storage is
    /// empty, unreadable or corrupt.
    ///
    /// Legitimately empty storage gets the seed list written back. After a
    /// read or parse failure storage is left alone until the next mutation.
    pub fn load(&mut self) {
        self.loading = true;
        self.load_error = None;

        match self.read_saved() {
            Ok(Some(recipes)) => {
                info!(count = recipes.len(), "Loaded recipes from storage");
                self.recipes = recipes;
                self.source = DataSource::Persisted;
            }
            Ok(None) => {
                info!("No saved recipes, starting from the example set");
                self.recipes = default_recipes();
                self.source = DataSource::Seed;
                self.persist();
            }
            Err(e) => {
                warn!(error = %e, "Falling back to the example recipes");
                self.recipes = default_recipes();
                self.source = DataSource::Seed;
                self.load_error = Some(e);
            }
        }

        self.loading = false;
    }

    fn read_saved(&self) -> Result<Option<Vec<Recipe>>, StoreError> {
        let raw = self
            .storage
            .get(STORAGE_KEY)
            .map_err(|e| StoreError::Load(e.to_string()))?;

        let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
            return Ok(None);
        };

        let recipes: Vec<Recipe> =
            serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt(e.to_string()))?;

        if recipes.is_empty() {
            Ok(None)
        } else {
            Ok(Some(recipes))
        }
    }

    /// Writes the whole list under `STORAGE_KEY`.
    fn persist(&mut self) {
        let result = serde_json::to_string(&self.recipes)
            .map_err(|e| e.to_string())
            .and_then(|payload| {
                self.storage
                    .set(STORAGE_KEY, &payload)
                    .map_err(|e| e.to_string())
            });

        match result {
            Ok(()) => self.save_error = None,
            Err(e) => {
                warn!(error = %e, "Recipes kept in memory only");
                self.save_error = Some(StoreError::Save(e));
            }
        }
    }

    //=====================================================================================
    // Reads
    //=====================================================================================

    /// The current list, in insertion order.
    pub fn list(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| &r.id == id)
    }

    /// Favorite recipes, in list order.
    pub fn favorites(&self) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| r.is_favorite).collect()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// True only while `load` is running (or before it has run).
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn data_source(&self) -> DataSource {
        self.source
    }

    /// The most relevant outstanding condition: a failed save outranks a
    /// failed load.
    pub fn error(&self) -> Option<&StoreError> {
        self.save_error.as_ref().or(self.load_error.as_ref())
    }

    pub fn load_error(&self) -> Option<&StoreError> {
        self.load_error.as_ref()
    }

    pub fn save_error(&self) -> Option<&StoreError> {
        self.save_error.as_ref()
    }

    /// Dismisses both error flags, e.g. once the user has been told.
    pub fn clear_error(&mut self) {
        self.load_error = None;
        self.save_error = None;
    }

    //=====================================================================================
    // Mutations
    //=====================================================================================

    /// Appends a new recipe with a fresh id and returns it.
    pub fn add(&mut self, draft: RecipeDraft) -> Recipe {
        let mut id = RecipeId::generate();
        while self.get(&id).is_some() {
            id = RecipeId::generate();
        }
        let recipe = Recipe::from_draft(id, draft);
        debug!(id = %recipe.id, name = %recipe.name, "Adding recipe");
        self.recipes.push(recipe.clone());
        self.persist();
        recipe
    }

    /// Replaces every field but the id, keeping the recipe's position.
    /// Returns `false` and changes nothing if the id is unknown.
    pub fn update(&mut self, id: &RecipeId, draft: RecipeDraft) -> bool {
        let Some(recipe) = self.recipes.iter_mut().find(|r| &r.id == id) else {
            debug!(%id, "Update skipped, no such recipe");
            return false;
        };
        recipe.apply(draft);
        debug!(%id, "Updated recipe");
        self.persist();
        true
    }

    /// Removes a recipe. Returns `false` and changes nothing if the id is unknown.
    pub fn delete(&mut self, id: &RecipeId) -> bool {
        let Some(index) = self.recipes.iter().position(|r| &r.id == id) else {
            debug!(%id, "Delete skipped, no such recipe");
            return false;
        };
        self.recipes.remove(index);
        debug!(%id, "Deleted recipe");
        self.persist();
        true
    }

    /// Flips the favorite flag. Returns `false` and changes nothing if the id
    /// is unknown.
    pub fn toggle_favorite(&mut self, id: &RecipeId) -> bool {
        let Some(recipe) = self.recipes.iter_mut().find(|r| &r.id == id) else {
            debug!(%id, "Favorite toggle skipped, no such recipe");
            return false;
        };
        recipe.is_favorite = !recipe.is_favorite;
        debug!(%id, favorite = recipe.is_favorite, "Toggled favorite");
        self.persist();
        true
    }
}

impl std::fmt::Debug for RecipeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeStore")
            .field("recipe_count", &self.recipes.len())
            .field("loading", &self.loading)
            .field("source", &self.source)
            .field("load_error", &self.load_error)
            .field("save_error", &self.save_error)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Difficulty;
    use crate::memory::InMemoryStorage;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn tacos() -> RecipeDraft {
        RecipeDraft {
            name: "Tacos".to_string(),
            ingredients: vec!["tortilla".to_string(), "beef".to_string()],
            instructions: String::new(),
            cuisine: "Mexican".to_string(),
            image: String::new(),
            cooking_time: 20,
            difficulty: Difficulty::Easy,
            is_favorite: false,
        }
    }

    fn seeded() -> (Arc<InMemoryStorage>, RecipeStore) {
        let storage = Arc::new(InMemoryStorage::new());
        let store = RecipeStore::open(storage.clone());
        (storage, store)
    }

    fn saved(storage: &InMemoryStorage) -> Vec<Recipe> {
        let raw = storage.peek(STORAGE_KEY).expect("list should be saved");
        serde_json::from_str(&raw).unwrap()
    }

    // -----------------------------------------------------------------------
    // Loading
    // -----------------------------------------------------------------------

    #[test]
    fn new_store_is_loading_until_loaded() {
        let mut store = RecipeStore::new(Arc::new(InMemoryStorage::new()));
        assert!(store.is_loading());
        assert_eq!(store.data_source(), DataSource::Unloaded);
        store.load();
        assert!(!store.is_loading());
    }

    #[test]
    fn empty_storage_falls_back_to_seed_without_error() {
        let (storage, store) = seeded();
        assert_eq!(store.list(), default_recipes().as_slice());
        assert_eq!(store.data_source(), DataSource::Seed);
        assert!(store.error().is_none());
        assert_eq!(saved(&storage), store.list());
    }

    #[test]
    fn empty_array_counts_as_empty_storage() {
        let storage = Arc::new(InMemoryStorage::with_entry(STORAGE_KEY, "[]"));
        let store = RecipeStore::open(storage);
        assert_eq!(store.len(), 3);
        assert!(store.load_error().is_none());
    }

    #[test]
    fn corrupt_payload_falls_back_to_seed_with_error() {
        let storage = Arc::new(InMemoryStorage::with_entry(STORAGE_KEY, "definitely not json"));
        let store = RecipeStore::open(storage.clone());

        assert_eq!(store.list(), default_recipes().as_slice());
        let error = store.error().expect("error flag should be set");
        assert!(matches!(error, StoreError::Corrupt(_)));
        assert!(!error.to_string().is_empty());
        assert_eq!(storage.peek(STORAGE_KEY).as_deref(), Some("definitely not json"));
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn unreadable_storage_falls_back_to_seed_with_error() {
        let storage = Arc::new(InMemoryStorage::new());
        storage.fail_reads(true);
        let store = RecipeStore::open(storage);
        assert_eq!(store.len(), 3);
        assert!(matches!(store.load_error(), Some(StoreError::Load(_))));
    }

    #[test]
    fn persisted_list_is_used_as_is() {
        let (storage, mut store) = seeded();
        store.add(tacos());
        let first = store.list()[0].id.clone();
        store.delete(&first);

        let reopened = RecipeStore::open(storage);
        assert_eq!(reopened.data_source(), DataSource::Persisted);
        assert_eq!(reopened.list(), store.list());
        assert!(reopened.get(&first).is_none());
    }

    #[test]
    fn out_of_range_cooking_time_is_kept_not_reseeded() {
        let raw = r#"[{"id":"neg","name":"Leftovers","ingredients":["rice"],
            "instructions":"","cuisine":"Any","image":"",
            "cookingTime":-1,"difficulty":"easy","isFavorite":true}]"#;
        let storage = Arc::new(InMemoryStorage::with_entry(STORAGE_KEY, raw));
        let store = RecipeStore::open(storage.clone());

        assert_eq!(store.data_source(), DataSource::Persisted);
        assert!(store.load_error().is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].cooking_time, -1);
        assert_eq!(storage.write_count(), 0);
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    #[test]
    fn add_appends_with_fresh_id() {
        let (storage, mut store) = seeded();
        let seed_ids: HashSet<_> = store.list().iter().map(|r| r.id.clone()).collect();

        let added = store.add(tacos());

        assert_eq!(store.len(), 4);
        let last = store.list().last().unwrap();
        assert_eq!(last.name, "Tacos");
        assert_eq!(last, &added);
        assert!(!seed_ids.contains(&added.id));
        assert_eq!(saved(&storage), store.list());
    }

    #[test]
    fn first_add_keeps_seed_recipes() {
        let (_, mut store) = seeded();
        let seed = store.list().to_vec();
        store.add(tacos());
        assert_eq!(&store.list()[..3], seed.as_slice());
    }

    #[test]
    fn update_replaces_in_place() {
        let (storage, mut store) = seeded();
        let id = store.list()[1].id.clone();

        assert!(store.update(&id, tacos()));

        assert_eq!(store.list()[1].id, id);
        assert_eq!(store.list()[1].name, "Tacos");
        assert_eq!(store.len(), 3);
        assert_eq!(saved(&storage), store.list());
    }

    #[test]
    fn toggle_favorite_twice_restores_value() {
        let (_, mut store) = seeded();
        let before = store.list().to_vec();
        let id = before[0].id.clone();

        assert!(store.toggle_favorite(&id));
        assert!(store.list()[0].is_favorite);
        assert_eq!(store.favorites().len(), 1);

        assert!(store.toggle_favorite(&id));
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn favorites_keep_list_order() {
        let (_, mut store) = seeded();
        let ids: Vec<_> = store.list().iter().map(|r| r.id.clone()).collect();
        store.toggle_favorite(&ids[2]);
        store.toggle_favorite(&ids[0]);
        let favorites: Vec<_> = store.favorites().iter().map(|r| r.id.clone()).collect();
        assert_eq!(favorites, [ids[0].clone(), ids[2].clone()]);
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let (storage, mut store) = seeded();
        let before = store.list().to_vec();
        let writes = storage.write_count();
        let unknown = RecipeId::from("no-such-recipe");

        assert!(!store.update(&unknown, tacos()));
        assert!(!store.delete(&unknown));
        assert!(!store.toggle_favorite(&unknown));

        assert_eq!(store.list(), before.as_slice());
        assert_eq!(storage.write_count(), writes);
    }

    #[test]
    fn delete_removes_from_storage() {
        let (storage, mut store) = seeded();
        let id = store.list()[0].id.clone();
        assert!(store.delete(&id));
        assert_eq!(store.len(), 2);
        assert!(saved(&storage).iter().all(|r| r.id != id));
    }

    #[test]
    fn save_failure_keeps_memory_and_flags_error() {
        let (storage, mut store) = seeded();
        storage.fail_writes(true);

        store.add(tacos());

        assert_eq!(store.len(), 4);
        assert!(matches!(store.error(), Some(StoreError::Save(_))));
        assert_eq!(saved(&storage).len(), 3);

        storage.fail_writes(false);
        let id = store.list()[3].id.clone();
        store.toggle_favorite(&id);
        assert!(store.save_error().is_none());
        assert_eq!(saved(&storage), store.list());
    }

    #[test]
    fn clear_error_dismisses_flags() {
        let storage = Arc::new(InMemoryStorage::with_entry(STORAGE_KEY, "{"));
        let mut store = RecipeStore::open(storage);
        assert!(store.error().is_some());
        store.clear_error();
        assert!(store.error().is_none());
    }

    #[test]
    fn serialized_list_round_trips() {
        let (_, mut store) = seeded();
        store.add(tacos());
        let json = serde_json::to_string(store.list()).unwrap();
        let back: Vec<Recipe> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_slice(), store.list());
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]

        #[test]
        fn ids_stay_unique_across_adds(count in 1usize..40) {
            let (_, mut store) = seeded();
            for n in 0..count {
                store.add(RecipeDraft { name: format!("Recipe {n}"), ..RecipeDraft::default() });
            }
            let ids: HashSet<_> = store.list().iter().map(|r| r.id.clone()).collect();
            prop_assert_eq!(ids.len(), store.len());
        }

        #[test]
        fn update_never_moves_entries(extra in 0usize..6, pick in any::<prop::sample::Index>()) {
            let (_, mut store) = seeded();
            for _ in 0..extra {
                store.add(tacos());
            }
            let index = pick.index(store.len());
            let id = store.list()[index].id.clone();
            store.update(&id, RecipeDraft::default());
            prop_assert_eq!(&store.list()[index].id, &id);
        }
    }
}
