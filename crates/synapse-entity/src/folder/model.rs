//! Folder entity model.

use serde::{Deserialize, Serialize};
use synapse_core::types::{FolderId, SectionId};

use crate::document::Document;

/// Prefix of ids synthesized for virtual folders.
pub const VIRTUAL_FOLDER_PREFIX: &str = "folder-";

/// A grouping of documents inside a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// Display name.
    pub name: String,
    /// Owning section.
    pub section_id: SectionId,
    /// Documents in display order.
    #[serde(default)]
    pub documents: Vec<Document>,
    /// Whether the folder was derived from a section rather than stored.
    #[serde(default)]
    pub is_virtual: bool,
}

impl Folder {
    /// Id of the virtual folder derived from a section.
    pub fn virtual_id(section_id: &SectionId) -> FolderId {
        FolderId::new(format!("{VIRTUAL_FOLDER_PREFIX}{section_id}"))
    }

    /// Number of immediate child documents.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}
