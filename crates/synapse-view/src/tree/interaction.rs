//! Click handling for explorer rows.

use synapse_core::error::AppError;
use synapse_core::result::AppResult;

use super::node::TreeNode;
use crate::navigation::NavigationState;

/// Applies row and chevron clicks to the navigation state.
#[derive(Debug, Clone, Copy)]
pub struct TreeInteraction<'a> {
    root: &'a TreeNode,
}

impl<'a> TreeInteraction<'a> {
    pub fn new(root: &'a TreeNode) -> Self {
        Self { root }
    }

    fn node(&self, id: &str) -> AppResult<&'a TreeNode> {
        self.root
            .find(id)
            .ok_or_else(|| AppError::not_found(format!("Node '{id}' is not in the tree")))
    }

    /// Select the clicked node; containers with children also toggle.
    pub fn click_row(&self, nav: &mut NavigationState, id: &str) -> AppResult<()> {
        let node = self.node(id)?;
        nav.select_node(node.id.as_str(), node.kind);
        if node.is_expandable() {
            nav.toggle_node_expansion(&node.id);
        }
        Ok(())
    }

    /// Toggle expansion only; selection is left alone.
    ///
    /// Returns whether the node is expanded afterwards. Rows without a
    /// chevron are left unchanged.
    pub fn click_chevron(&self, nav: &mut NavigationState, id: &str) -> AppResult<bool> {
        let node = self.node(id)?;
        if !node.is_expandable() {
            return Ok(nav.is_node_expanded(&node.id));
        }
        Ok(nav.toggle_node_expansion(&node.id))
    }
}

#[cfg(test)]
mod tests {
    use synapse_core::error::ErrorKind;
    use synapse_data::source::fixture::fixture_project;
    use synapse_entity::NodeKind;

    use super::*;

    #[test]
    fn test_click_row_selects_and_toggles() {
        let root = TreeNode::from_project(&fixture_project());
        let tree = TreeInteraction::new(&root);
        let mut nav = NavigationState::new();

        tree.click_row(&mut nav, "folder-km-proekt").expect("click");
        assert!(nav.is_selected("folder-km-proekt"));
        assert_eq!(nav.selection().map(|s| s.kind), Some(NodeKind::Folder));
        assert!(nav.is_node_expanded("folder-km-proekt"));

        tree.click_row(&mut nav, "doc-km-ar").expect("click");
        assert!(nav.is_selected("doc-km-ar"));
        assert!(!nav.is_node_expanded("doc-km-ar"));
    }

    #[test]
    fn test_click_chevron_does_not_select() {
        let root = TreeNode::from_project(&fixture_project());
        let tree = TreeInteraction::new(&root);
        let mut nav = NavigationState::new();

        assert!(!tree.click_chevron(&mut nav, "section-km").expect("click"));
        assert!(nav.selection().is_none());
        assert!(tree.click_chevron(&mut nav, "section-km").expect("click"));
    }

    #[test]
    fn test_unknown_node() {
        let root = TreeNode::from_project(&fixture_project());
        let mut nav = NavigationState::new();
        let err = TreeInteraction::new(&root)
            .click_row(&mut nav, "nope")
            .unwrap_err();
        assert!(err.is(ErrorKind::NotFound));
    }
}
