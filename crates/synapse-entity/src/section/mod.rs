//! Section domain entities.

pub mod category;
pub mod model;

pub use category::SectionCategory;
pub use model::Section;
