//! Explorer and navigation presentation settings.

use serde::{Deserialize, Serialize};

/// Node ids expanded when a session starts.
pub const DEFAULT_EXPANDED_NODES: [&str; 2] = ["project-1", "section-km"];

/// Shell presentation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Node ids expanded in a fresh navigation state.
    #[serde(default = "default_initially_expanded")]
    pub initially_expanded: Vec<String>,
    /// Whether the explorer starts minimized to the icon rail.
    #[serde(default)]
    pub explorer_collapsed: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            initially_expanded: default_initially_expanded(),
            explorer_collapsed: false,
        }
    }
}

fn default_initially_expanded() -> Vec<String> {
    DEFAULT_EXPANDED_NODES.iter().map(|id| id.to_string()).collect()
}
