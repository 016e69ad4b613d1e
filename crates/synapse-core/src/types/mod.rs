//! Core type definitions used across the Synapse workspace.

pub mod id;
pub mod response;

pub use id::*;
pub use response::{ApiErrorBody, ApiResponse};
