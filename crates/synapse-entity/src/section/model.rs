//! Section entity model.

use serde::{Deserialize, Serialize};
use synapse_core::types::{ProjectId, SectionId};

use super::category::SectionCategory;
use crate::folder::Folder;

/// A discipline section of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Unique section identifier.
    pub id: SectionId,
    /// Display name.
    pub name: String,
    /// Section code such as `КМ`.
    pub code: String,
    /// Owning project.
    pub project_id: ProjectId,
    /// Folders in display order.
    #[serde(default)]
    pub folders: Vec<Folder>,
}

impl Section {
    /// Discipline derived from the section code.
    pub fn category(&self) -> Option<SectionCategory> {
        SectionCategory::from_code(&self.code)
    }

    /// Number of documents across all folders.
    pub fn document_count(&self) -> usize {
        self.folders.iter().map(|f| f.documents.len()).sum()
    }
}
