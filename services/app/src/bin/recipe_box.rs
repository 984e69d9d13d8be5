//! services/app/src/bin/recipe_box.rs
//!
//! Terminal host for the recipe box. Run with `--help` for the commands.

use app_lib::{
    adapters::{FileStorage, HtmlPrintAdapter},
    cli::{execute, Cli},
    config::Config,
    error::AppError,
    ui::UiSession,
};
use clap::Parser;
use recipe_box_core::RecipeStore;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    info!("Configuration loaded.");

    // --- 2. Open Storage & Load Recipes ---
    let storage = Arc::new(FileStorage::open(&config.data_path)?);
    info!("Using storage file {}", storage.path().display());
    let store = RecipeStore::open(storage);

    // --- 3. Build the Session ---
    let printer = Arc::new(HtmlPrintAdapter::new(&config.print_dir));
    let mut session = UiSession::new(store, printer);

    // --- 4. Run the Requested Command ---
    let output = execute(&mut session, cli.command).await?;
    print!("{}", output);
    Ok(())
}
