//! crates/recipe_box_core/src/ports.rs
//!
//! Defines the service contracts (traits) the recipe box core depends on.
//! These traits form the boundary of the hexagonal architecture, so the store
//! can run against a browser-style local storage, a JSON file, or an in-memory
//! fake without changing.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

use crate::domain::{Recipe, RecipeId};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external collaborators (disk, display).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Service unavailable: {0}")]
    Unavailable(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// String key-value storage, the equivalent of a browser's local storage.
///
/// Calls are synchronous: the store persists inside each mutation and must
/// not yield halfway through one.
pub trait KeyValueStorage: Send + Sync {
    /// Returns the value stored under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> PortResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> PortResult<()>;
}

/// Where a print job ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintReceipt {
    pub recipe_id: RecipeId,
    pub location: PathBuf,
    pub printed_at: DateTime<Utc>,
}

#[async_trait]
pub trait PrintService: Send + Sync {
    /// Produces a human-readable static document for one recipe.
    async fn print(&self, recipe: &Recipe) -> PortResult<PrintReceipt>;
}
