//! # synapse-view
//!
//! View-model layer of the Synapse shell. Three owned containers feed the
//! render functions by reference:
//!
//! - [`navigation::NavigationState`]: selection and expansion
//! - [`synapse_data::DataStore`]: the loaded project aggregate
//! - [`locale::Locale`]: the active language
//!
//! [`tree`] turns the aggregate into explorer rows, [`workspace`] decides
//! what the central pane shows, and [`shell`] composes both with the
//! toolbar and AI console into one text frame.

pub mod badge;
pub mod locale;
pub mod navigation;
pub mod shell;
pub mod tree;
pub mod workspace;

pub use locale::{Language, Locale};
pub use navigation::NavigationState;
