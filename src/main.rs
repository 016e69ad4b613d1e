//! Synapse shell: engineering document explorer.
//!
//! Wires configuration, logging, the project store and the view state
//! together and prints one frame of the three-pane layout.

use tracing_subscriber::{EnvFilter, fmt};

use synapse_core::config::AppConfig;
use synapse_core::error::AppError;
use synapse_data::{DataStore, source};
use synapse_view::NavigationState;
use synapse_view::locale::PreferenceStore;
use synapse_view::shell::ShellFrame;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Shell error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from an explicit file or the default layering
fn load_configuration() -> Result<AppConfig, AppError> {
    match std::env::var("SYNAPSE_CONFIG") {
        Ok(path) => AppConfig::load_file(path),
        Err(_) => {
            let env = std::env::var("SYNAPSE_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)
        }
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Load the project and print the initial frame
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Synapse v{}", env!("CARGO_PKG_VERSION"));

    let mut store = DataStore::new(source::connect(&config.backend)?);
    // A failed load is shown in the explorer pane.
    if let Err(e) = store.load().await {
        tracing::warn!(error = %e, "Continuing without a project");
    }

    let nav = NavigationState::from_config(&config.ui);
    let locale = PreferenceStore::from_config(&config.locale).locale();

    let frame = ShellFrame::compose(&store, &nav, &locale, config.ui.explorer_collapsed);
    print!("{}", frame.render(&locale));
    Ok(())
}
