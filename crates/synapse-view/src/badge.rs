//! Status badges shared by the tree and the workspace.

use synapse_entity::document::DocumentStatus;

use crate::locale::Locale;

/// Color family of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Amber,
    Blue,
    Red,
}

impl Tone {
    /// Tone used for a document status.
    pub fn for_status(status: DocumentStatus) -> Self {
        match status {
            DocumentStatus::Completed => Self::Green,
            DocumentStatus::Processing => Self::Amber,
            DocumentStatus::Uploaded => Self::Blue,
            DocumentStatus::Error => Self::Red,
        }
    }
}

/// Compact status glyph shown next to a document in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    /// Localized glyph.
    pub glyph: String,
    pub tone: Tone,
}

impl StatusBadge {
    /// Badge for a status, with the glyph passed through localization.
    pub fn new(status: DocumentStatus, locale: &Locale) -> Self {
        let key = match status {
            DocumentStatus::Completed => "✓",
            DocumentStatus::Processing => "...",
            DocumentStatus::Uploaded => "○",
            DocumentStatus::Error => "✗",
        };
        Self {
            glyph: locale.t(key).to_string(),
            tone: Tone::for_status(status),
        }
    }
}

/// Worded status shown on cards and in the detail header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLabel {
    /// Localized status name.
    pub text: String,
    pub tone: Tone,
}

impl StatusLabel {
    /// Label for a status in the active language.
    pub fn new(status: DocumentStatus, locale: &Locale) -> Self {
        Self {
            text: locale.t(status.as_str()).to_string(),
            tone: Tone::for_status(status),
        }
    }
}
