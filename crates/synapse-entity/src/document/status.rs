//! Document processing status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use synapse_core::error::AppError;

/// Processing state of an uploaded document.
///
/// States advance `Uploaded → Processing → Completed`, or end in `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// File received but not processed.
    Uploaded,
    /// Analysis in progress.
    Processing,
    /// Analysis finished successfully.
    Completed,
    /// Processing failed.
    Error,
}

impl DocumentStatus {
    /// Position in the processing order.
    fn rank(&self) -> u8 {
        match self {
            Self::Uploaded => 0,
            Self::Processing => 1,
            Self::Completed | Self::Error => 2,
        }
    }

    /// Check if the status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Error)
    }

    /// Whether a document may move from this status to `next`.
    ///
    /// Staying put is allowed; regressing or leaving a terminal state is not.
    pub fn can_transition_to(&self, next: DocumentStatus) -> bool {
        if *self == next {
            return true;
        }
        !self.is_terminal() && next.rank() > self.rank()
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uploaded => "uploaded",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uploaded" => Ok(Self::Uploaded),
            "processing" => Ok(Self::Processing),
            "completed" => Ok(Self::Completed),
            "error" => Ok(Self::Error),
            other => Err(AppError::validation(format!(
                "Unrecognized document status '{other}'"
            ))),
        }
    }
}
