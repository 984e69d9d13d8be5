//! services/app/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::path::PathBuf;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// JSON file standing in for the browser's local storage.
    pub data_path: PathBuf,
    /// Directory the printable documents are written to.
    pub print_dir: PathBuf,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_path = path_var(&lookup, "RECIPE_BOX_DATA_PATH", "./recipe_box.json")?;
        let print_dir = path_var(&lookup, "RECIPE_BOX_PRINT_DIR", "./prints")?;

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            data_path,
            print_dir,
            log_level,
        })
    }
}

fn path_var<F>(lookup: &F, key: &str, default: &str) -> Result<PathBuf, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(PathBuf::from(default)),
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidValue(
            key.to_string(),
            "path must not be empty".to_string(),
        )),
        Some(value) => Ok(PathBuf::from(value)),
    }
}
