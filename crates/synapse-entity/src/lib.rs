//! # synapse-entity
//!
//! Domain entity models for the Synapse document shell. The aggregate is a
//! strict tree: a [`project::Project`] owns its sections, a section owns its
//! folders, a folder owns its documents. Every struct derives `Debug`,
//! `Clone`, `Serialize`, and `Deserialize`.

pub mod document;
pub mod folder;
pub mod metadata;
pub mod node;
pub mod project;
pub mod section;

pub use node::NodeKind;
