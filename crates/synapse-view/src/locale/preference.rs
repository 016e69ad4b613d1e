//! Persisted language preference.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use synapse_core::config::locale::LocaleConfig;
use synapse_core::error::{AppError, ErrorKind};
use synapse_core::result::AppResult;

use super::{Language, Locale};

/// Client-local file holding the selected language code.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
    default: Language,
}

impl PreferenceStore {
    /// Create a store at `path`, using `default` when nothing usable is stored.
    pub fn new(path: impl Into<PathBuf>, default: Language) -> Self {
        Self {
            path: path.into(),
            default,
        }
    }

    /// Create a store from configuration. An invalid default falls back to Russian.
    pub fn from_config(config: &LocaleConfig) -> Self {
        let default = config.default_language.parse().unwrap_or_else(|e: AppError| {
            warn!(error = %e.message, "Invalid default language; using ru");
            Language::default()
        });
        Self::new(&config.preference_file, default)
    }

    /// Path of the preference file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored language.
    ///
    /// A missing or unreadable file, or an unknown value, yields the default.
    pub fn load(&self) -> Language {
        match fs::read_to_string(&self.path) {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(path = %self.path.display(), value = %raw.trim(), "Unknown stored language");
                self.default
            }),
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "No stored language");
                self.default
            }
        }
    }

    /// Locale for the stored language.
    pub fn locale(&self) -> Locale {
        Locale::new(self.load())
    }

    /// Persist a language selection.
    pub fn save(&self, language: Language) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create '{}': {e}", parent.display()),
                    e,
                )
            })?;
        }
        fs::write(&self.path, language.code()).map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write '{}': {e}", self.path.display()),
                e,
            )
        })?;
        debug!(path = %self.path.display(), language = %language, "Language saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = PreferenceStore::new(dir.path().join("language"), Language::Ru);
        assert_eq!(store.load(), Language::Ru);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = PreferenceStore::new(dir.path().join("nested/language"), Language::Ru);
        store.save(Language::En).expect("save");
        assert_eq!(store.load(), Language::En);
        assert_eq!(store.locale().t("Upload"), "Upload");
    }

    #[test]
    fn test_garbage_value_uses_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("language");
        fs::write(&path, "klingon").expect("write");
        assert_eq!(PreferenceStore::new(&path, Language::En).load(), Language::En);
    }

    #[test]
    fn test_from_config_invalid_default() {
        let config = LocaleConfig {
            default_language: "fr".into(),
            preference_file: "does/not/exist".into(),
        };
        assert_eq!(PreferenceStore::from_config(&config).load(), Language::Ru);
    }
}
