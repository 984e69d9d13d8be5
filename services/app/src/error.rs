//! services/app/src/error.rs
//!
//! Defines the primary error type for the recipe box application.

use crate::config::ConfigError;
use crate::ui::forms::FormError;
use recipe_box_core::ports::PortError;

/// The primary error type for the `app` service.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from one of the core service ports.
    #[error("Service Port Error: {0}")]
    Port(#[from] PortError),

    /// Represents a standard Input/Output error (e.g., creating the data directory).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Add/edit input that could not be turned into a recipe.
    #[error("Invalid recipe: {0}")]
    Form(#[from] FormError),
}
