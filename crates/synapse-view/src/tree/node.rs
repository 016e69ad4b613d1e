//! Tree view model built from the project aggregate.

use synapse_entity::NodeKind;
use synapse_entity::document::DocumentStatus;
use synapse_entity::project::Project;

/// One node of the explorer tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub id: String,
    pub label: String,
    /// `label` is a localization key rather than stored text.
    pub localized: bool,
    pub kind: NodeKind,
    /// Number of documents, set for folders only.
    pub document_count: Option<usize>,
    /// Processing status, set for documents only.
    pub status: Option<DocumentStatus>,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Build the tree for a project. Pure; child order follows the aggregate.
    pub fn from_project(project: &Project) -> Self {
        let sections = project
            .sections
            .iter()
            .map(|section| {
                let folders = section
                    .folders
                    .iter()
                    .map(|folder| {
                        let documents = folder
                            .documents
                            .iter()
                            .map(|doc| TreeNode {
                                id: doc.id.to_string(),
                                label: doc.name.clone(),
                                localized: false,
                                kind: NodeKind::Document,
                                document_count: None,
                                status: Some(doc.status),
                                children: Vec::new(),
                            })
                            .collect();
                        TreeNode {
                            id: folder.id.to_string(),
                            label: folder.name.clone(),
                            localized: folder.is_virtual,
                            kind: NodeKind::Folder,
                            document_count: Some(folder.document_count()),
                            status: None,
                            children: documents,
                        }
                    })
                    .collect();
                TreeNode::container(section.id.as_str(), &section.name, NodeKind::Section, folders)
            })
            .collect();

        TreeNode::container(project.id.as_str(), &project.name, NodeKind::Project, sections)
    }

    fn container(id: &str, label: &str, kind: NodeKind, children: Vec<TreeNode>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            localized: false,
            kind,
            document_count: None,
            status: None,
            children,
        }
    }

    /// Whether the node has any children.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether the node shows a chevron and can be expanded.
    pub fn is_expandable(&self) -> bool {
        self.kind.is_container() && self.has_children()
    }

    /// Depth-first search for a node by id.
    pub fn find(&self, id: &str) -> Option<&TreeNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

#[cfg(test)]
mod tests {
    use synapse_data::source::fixture::fixture_project;

    use super::*;

    #[test]
    fn test_structure_mirrors_aggregate() {
        let root = TreeNode::from_project(&fixture_project());
        assert_eq!(root.id, "project-1");
        assert_eq!(root.kind, NodeKind::Project);
        assert_eq!(root.children.len(), 2);

        let folder = root.find("folder-km-proekt").expect("folder");
        assert_eq!(folder.kind, NodeKind::Folder);
        assert_eq!(folder.document_count, Some(3));
        let labels: Vec<&str> = folder.children.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["КМ-АР.pdf", "КМ-Ведомость.xlsx", "КМ-Узлы.pdf"]);

        let doc = root.find("doc-km-uzly").expect("doc");
        assert_eq!(doc.status, Some(DocumentStatus::Processing));
        assert!(!doc.is_expandable());
    }

    #[test]
    fn test_build_is_pure() {
        let project = fixture_project();
        assert_eq!(TreeNode::from_project(&project), TreeNode::from_project(&project));
    }
}
