//! Document domain entities.

pub mod kind;
pub mod model;
pub mod status;

pub use kind::DocumentType;
pub use model::Document;
pub use status::DocumentStatus;
