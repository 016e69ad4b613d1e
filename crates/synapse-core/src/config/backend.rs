//! Data source and REST API configuration.

use serde::{Deserialize, Serialize};

/// Which project source backs the data store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Built-in fixture project.
    #[default]
    Fixture,
    /// Hosted relational backend reached over its REST interface.
    Remote,
}

/// Hosted backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Source selection.
    #[serde(default)]
    pub source: SourceKind,
    /// Backend base URL (e.g. `https://xyz.supabase.co`).
    #[serde(default)]
    pub url: Option<String>,
    /// Anonymous API key sent as `apikey` and bearer token.
    #[serde(default)]
    pub anon_key: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Also fetch `extracted_data` rows to populate document metadata.
    #[serde(default)]
    pub load_extracted_data: bool,
}

impl BackendConfig {
    /// Return `(url, key)` when both credentials are present and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let url = self.url.as_deref().filter(|u| !u.trim().is_empty())?;
        let key = self.anon_key.as_deref().filter(|k| !k.trim().is_empty())?;
        Some((url, key))
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            url: None,
            anon_key: None,
            timeout_seconds: default_timeout(),
            load_extracted_data: false,
        }
    }
}

/// Document-processing REST API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the document API.
    #[serde(default = "default_api_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}
