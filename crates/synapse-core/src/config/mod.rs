//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every section falls back to its defaults when absent.

pub mod backend;
pub mod locale;
pub mod logging;
pub mod ui;

use std::path::Path;

use serde::{Deserialize, Serialize};

use self::backend::{ApiConfig, BackendConfig};
use self::locale::LocaleConfig;
use self::logging::LoggingConfig;
use self::ui::UiConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration
/// (default.toml + environment overlay + `SYNAPSE__*` variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Project data source settings.
    #[serde(default)]
    pub backend: BackendConfig,
    /// Document REST API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Language settings.
    #[serde(default)]
    pub locale: LocaleConfig,
    /// Explorer and navigation settings.
    #[serde(default)]
    pub ui: UiConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default.toml` with `config/{env}.toml` and environment
    /// variables prefixed with `SYNAPSE__`. Missing files are skipped.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false));
        Self::finish(builder)
    }

    /// Load configuration from one explicit file plus the environment.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AppError::configuration(format!(
                "Configuration file '{}' does not exist",
                path.display()
            )));
        }
        let builder = config::Config::builder().add_source(config::File::from(path));
        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, AppError> {
        let config = builder
            .add_source(
                config::Environment::with_prefix("SYNAPSE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
