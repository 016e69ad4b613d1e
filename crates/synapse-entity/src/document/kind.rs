//! Document type classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use synapse_core::error::AppError;

/// Category of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// Design documentation (input).
    Design,
    /// Executive documentation (output).
    Executive,
    /// Legacy project drawing tag.
    Project,
    /// Legacy template tag.
    Template,
    /// Legacy generated report tag.
    Report,
}

impl DocumentType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Design => "design",
            Self::Executive => "executive",
            Self::Project => "project",
            Self::Template => "template",
            Self::Report => "report",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "design" => Ok(Self::Design),
            "executive" => Ok(Self::Executive),
            "project" => Ok(Self::Project),
            "template" => Ok(Self::Template),
            "report" => Ok(Self::Report),
            other => Err(AppError::validation(format!(
                "Unrecognized document type '{other}'"
            ))),
        }
    }
}
