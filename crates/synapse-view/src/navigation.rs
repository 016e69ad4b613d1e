//! Selection and expansion state of the explorer.

use std::collections::HashSet;

use synapse_core::config::ui::{DEFAULT_EXPANDED_NODES, UiConfig};
use synapse_entity::NodeKind;

/// The currently selected node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Node id.
    pub id: String,
    /// Node kind.
    pub kind: NodeKind,
}

/// Which node is selected and which nodes are expanded.
///
/// Selection is exclusive. Expansion is an independent set of ids; selecting
/// a node never changes it and toggling never changes the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    selection: Option<Selection>,
    expanded: HashSet<String>,
}

impl NavigationState {
    /// Fresh state with the default nodes expanded and nothing selected.
    pub fn new() -> Self {
        Self::with_expanded(DEFAULT_EXPANDED_NODES)
    }

    /// Fresh state with exactly the given nodes expanded.
    pub fn with_expanded<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selection: None,
            expanded: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Fresh state using the configured initial expansion.
    pub fn from_config(config: &UiConfig) -> Self {
        Self::with_expanded(config.initially_expanded.iter().cloned())
    }

    /// Select a node, replacing any previous selection.
    pub fn select_node(&mut self, id: impl Into<String>, kind: NodeKind) {
        self.selection = Some(Selection {
            id: id.into(),
            kind,
        });
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// The current selection.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Whether `id` is the selected node.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.as_ref().is_some_and(|s| s.id == id)
    }

    /// Flip the expansion of a node. Returns whether it is now expanded.
    pub fn toggle_node_expansion(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        }
    }

    /// Whether a node is expanded.
    pub fn is_node_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let nav = NavigationState::new();
        assert!(nav.selection().is_none());
        assert!(nav.is_node_expanded("project-1"));
        assert!(nav.is_node_expanded("section-km"));
        assert!(!nav.is_node_expanded("section-kzh"));
    }

    #[test]
    fn test_selection_is_exclusive() {
        let mut nav = NavigationState::new();
        nav.select_node("folder-km-proekt", NodeKind::Folder);
        nav.select_node("doc-km-ar", NodeKind::Document);

        let selected = nav.selection().expect("selection");
        assert_eq!(selected.id, "doc-km-ar");
        assert_eq!(selected.kind, NodeKind::Document);
        assert!(!nav.is_selected("folder-km-proekt"));

        nav.clear_selection();
        assert!(nav.selection().is_none());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut nav = NavigationState::new();
        for id in ["project-1", "folder-km-proekt"] {
            let before = nav.is_node_expanded(id);
            assert_eq!(nav.toggle_node_expansion(id), !before);
            nav.toggle_node_expansion(id);
            assert_eq!(nav.is_node_expanded(id), before);
        }
    }

    #[test]
    fn test_selection_and_expansion_independent() {
        let mut nav = NavigationState::new();
        nav.select_node("section-km", NodeKind::Section);
        nav.toggle_node_expansion("section-km");
        assert!(nav.is_selected("section-km"));
        assert!(!nav.is_node_expanded("section-km"));
    }

    #[test]
    fn test_from_config() {
        let nav = NavigationState::from_config(&UiConfig {
            initially_expanded: vec!["p".into()],
            explorer_collapsed: false,
        });
        assert!(nav.is_node_expanded("p"));
        assert!(!nav.is_node_expanded("project-1"));
    }
}
