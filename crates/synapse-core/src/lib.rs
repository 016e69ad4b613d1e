//! # synapse-core
//!
//! Core crate for the Synapse document shell. Contains configuration
//! schemas, typed identifiers, the REST error envelope, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other Synapse crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
