//! Navigation tree node kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use synapse_core::error::AppError;

/// Discriminator for the four levels of the navigation tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// The project root.
    Project,
    /// A discipline section.
    Section,
    /// A folder, stored or virtual.
    Folder,
    /// A document leaf.
    Document,
}

impl NodeKind {
    /// Whether nodes of this kind can be expanded to reveal children.
    pub fn is_container(&self) -> bool {
        !matches!(self, Self::Document)
    }

    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Section => "section",
            Self::Folder => "folder",
            Self::Document => "document",
        }
    }

    /// Localization key naming this kind.
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Project => "Project",
            Self::Section => "Section",
            Self::Folder => "Folder",
            Self::Document => "Document",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "project" => Ok(Self::Project),
            "section" => Ok(Self::Section),
            "folder" => Ok(Self::Folder),
            "document" => Ok(Self::Document),
            other => Err(AppError::validation(format!("Unknown node kind '{other}'"))),
        }
    }
}
