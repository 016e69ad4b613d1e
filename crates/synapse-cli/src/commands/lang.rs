//! Language preference commands.

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::output::{self, OutputFormat};
use synapse_core::config::AppConfig;
use synapse_core::error::AppError;
use synapse_view::locale::{Language, PreferenceStore};

/// Arguments for language commands
#[derive(Debug, Args)]
pub struct LangArgs {
    /// Language subcommand
    #[command(subcommand)]
    pub command: LangCommand,
}

/// Language subcommands
#[derive(Debug, Subcommand)]
pub enum LangCommand {
    /// Print the active language
    Get,
    /// Persist a language (`en` or `ru`)
    Set {
        /// Language code
        code: String,
    },
}

#[derive(Debug, Serialize)]
struct LanguageOutput {
    language: Language,
    preference_file: String,
}

/// Execute language commands
pub fn execute(args: &LangArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let prefs = super::preferences(config);
    match &args.command {
        LangCommand::Get => {
            let current = LanguageOutput {
                language: prefs.load(),
                preference_file: prefs.path().display().to_string(),
            };
            match format {
                OutputFormat::Table => {
                    output::print_kv("Language", current.language.code());
                    output::print_kv("Preference file", &current.preference_file);
                }
                OutputFormat::Json => output::print_json(&current, "{}"),
            }
        }
        LangCommand::Set { code } => {
            let language = set(&prefs, code)?;
            output::print_success(&format!("Language set to '{language}'"));
        }
    }
    Ok(())
}

fn set(prefs: &PreferenceStore, code: &str) -> Result<Language, AppError> {
    let language: Language = code.parse()?;
    prefs.save(language)?;
    Ok(language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_persists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let prefs = PreferenceStore::new(dir.path().join("language"), Language::Ru);

        assert_eq!(set(&prefs, " EN ").expect("set"), Language::En);
        assert_eq!(prefs.load(), Language::En);
    }

    #[test]
    fn test_set_unknown_leaves_file_alone() {
        let dir = tempfile::tempdir().expect("tempdir");
        let prefs = PreferenceStore::new(dir.path().join("language"), Language::Ru);

        assert!(set(&prefs, "de").is_err());
        assert!(!prefs.path().exists());
    }
}
