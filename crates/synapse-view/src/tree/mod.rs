//! Explorer tree.
//!
//! [`TreeNode::from_project`] builds the full view model from the aggregate,
//! [`visible_rows`] flattens it against the navigation state, and
//! [`render_rows`] prints the rows as text.

mod interaction;
mod node;
mod render;
mod row;

pub use interaction::TreeInteraction;
pub use node::TreeNode;
pub use render::render_rows;
pub use row::{Chevron, INDENT_UNITS, Icon, TreeRow, visible_rows};
