//! Envelope types returned by the document REST API.

use serde::{Deserialize, Serialize};

/// Machine-readable error body of a failed API call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Error code such as `NETWORK_ERROR`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional structured details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiErrorBody {
    /// Create an error body without details.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }
}

/// Outcome of a document API call: either a payload or an error body.
///
/// Serializes as `{ "data": ... }` or `{ "error": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiResponse<T> {
    /// Successful payload.
    Data(T),
    /// Failure description.
    Error(ApiErrorBody),
}

impl<T> ApiResponse<T> {
    /// Return the payload, if any.
    pub fn data(self) -> Option<T> {
        match self {
            Self::Data(data) => Some(data),
            Self::Error(_) => None,
        }
    }

    /// Return the error body, if any.
    pub fn error(&self) -> Option<&ApiErrorBody> {
        match self {
            Self::Data(_) => None,
            Self::Error(err) => Some(err),
        }
    }

    /// Check whether the call succeeded.
    pub fn is_data(&self) -> bool {
        matches!(self, Self::Data(_))
    }
}
