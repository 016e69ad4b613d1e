//! # synapse-data
//!
//! Data layer of the Synapse shell. A [`source::ProjectSource`] produces
//! the project graph (from the built-in fixture or from the hosted
//! backend's REST tables), the [`store::DataStore`] holds it as an
//! immutable [`aggregate::ProjectAggregate`] and answers lookups, and
//! [`api::ApiClient`] is the typed client for the document-processing API.
//!
//! Sources are injected into the store as `Arc<dyn ProjectSource>`, so the
//! store never knows which backend it talks to.

pub mod aggregate;
pub mod api;
pub mod source;
pub mod store;
pub mod virtual_folder;

pub use aggregate::ProjectAggregate;
pub use api::ApiClient;
pub use source::{ProjectGraph, ProjectSource};
pub use store::{DataStore, LoadState};
