//! Convenience result type alias for Synapse.

use crate::error::AppError;

/// A specialized `Result` type for Synapse operations.
pub type AppResult<T> = Result<T, AppError>;
