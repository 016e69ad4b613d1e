//! Localization configuration.

use serde::{Deserialize, Serialize};

/// Language selection and persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Language tag used when no preference has been stored (`"en"` or `"ru"`).
    #[serde(default = "default_language")]
    pub default_language: String,
    /// File holding the persisted language preference.
    #[serde(default = "default_preference_file")]
    pub preference_file: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            preference_file: default_preference_file(),
        }
    }
}

fn default_language() -> String {
    "ru".to_string()
}

fn default_preference_file() -> String {
    "data/language".to_string()
}
