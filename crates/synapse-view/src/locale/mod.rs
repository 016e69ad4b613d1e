//! Localization lookup.
//!
//! Two languages ship: English and Russian, Russian being the default.
//! [`Locale::t`] returns the active table's string or the key itself.

mod preference;
mod tables;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use synapse_core::error::AppError;

pub use preference::PreferenceStore;

/// A supported interface language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Ru,
}

impl Language {
    /// Two-letter language code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::En => tables::EN,
            Self::Ru => tables::RU,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ru" => Ok(Self::Ru),
            other => Err(AppError::validation(format!("Unsupported language '{other}'"))),
        }
    }
}

/// The active language and its lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Locale {
    language: Language,
}

impl Locale {
    /// Create a locale for a language.
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch the active language.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Translate `key`, falling back to the key when it has no entry.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.language
            .table()
            .iter()
            .find(|(k, _)| *k == key)
            .map_or(key, |(_, v)| *v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_per_language() {
        let ru = Locale::default();
        assert_eq!(ru.language(), Language::Ru);
        assert_eq!(ru.t("Upload"), "Загрузить");
        assert_eq!(ru.t("КМ"), "КМ - Металлические конструкции");

        let en = Locale::new(Language::En);
        assert_eq!(en.t("КМ"), "КМ - Metal Structures");
        assert_eq!(en.t("completed"), "Completed");
    }

    #[test]
    fn test_unknown_key_returns_key() {
        let locale = Locale::new(Language::Ru);
        assert_eq!(locale.t("Nonexistent key"), "Nonexistent key");
        assert_eq!(Locale::new(Language::En).t(""), "");
    }

    #[test]
    fn test_tables_cover_same_keys() {
        let en: Vec<&str> = tables::EN.iter().map(|(k, _)| *k).collect();
        let ru: Vec<&str> = tables::RU.iter().map(|(k, _)| *k).collect();
        assert_eq!(en, ru);
    }

    #[test]
    fn test_language_parse() {
        assert_eq!(" EN ".parse::<Language>().unwrap(), Language::En);
        assert!("de".parse::<Language>().is_err());
    }
}
