//! CLI command definitions and dispatch.

pub mod lang;
pub mod project;
pub mod show;
pub mod tree;

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::output::OutputFormat;
use synapse_core::config::AppConfig;
use synapse_core::error::AppError;
use synapse_data::{DataStore, source};
use synapse_view::locale::PreferenceStore;

/// Synapse: engineering document explorer
#[derive(Debug, Parser)]
#[command(name = "synapse", version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file (defaults to config/default.toml plus the SYNAPSE_ENV overlay)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the explorer tree of the active project
    Tree(tree::TreeArgs),
    /// Show what the workspace displays for a node
    Show(show::ShowArgs),
    /// Project listing and creation
    Project(project::ProjectArgs),
    /// Interface language
    Lang(lang::LangArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = load_config(self.config.as_deref())?;
        match &self.command {
            Commands::Tree(args) => tree::execute(args, &config, self.format).await,
            Commands::Show(args) => show::execute(args, &config, self.format).await,
            Commands::Project(args) => project::execute(args, &config, self.format).await,
            Commands::Lang(args) => lang::execute(args, &config, self.format),
        }
    }
}

/// Helper: load configuration from an explicit file or the default layering
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, AppError> {
    match config_path {
        Some(path) => AppConfig::load_file(path),
        None => {
            let env = std::env::var("SYNAPSE_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)
        }
    }
}

/// Helper: connect the configured source and load it into a store.
///
/// A failed load is logged and returned inside the store's `Failed` state.
pub async fn open_store(config: &AppConfig) -> Result<DataStore, AppError> {
    let mut store = DataStore::new(source::connect(&config.backend)?);
    if let Err(e) = store.load().await {
        warn!(error = %e, "Project load failed");
    }
    Ok(store)
}

/// Helper: preference store for the configured locale settings
pub fn preferences(config: &AppConfig) -> PreferenceStore {
    PreferenceStore::from_config(&config.locale)
}
