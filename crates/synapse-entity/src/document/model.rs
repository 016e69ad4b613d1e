//! Document entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use synapse_core::error::AppError;
use synapse_core::types::{DocumentId, FolderId, SectionId};

use super::kind::DocumentType;
use super::status::DocumentStatus;
use crate::metadata::DocumentMetadata;

/// A document attached to a project section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique document identifier.
    pub id: DocumentId,
    /// File name including extension.
    pub name: String,
    /// Document category.
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    /// When the file was uploaded.
    pub upload_date: DateTime<Utc>,
    /// Processing state.
    pub status: DocumentStatus,
    /// Folder listing this document (virtual folders included).
    pub folder_id: FolderId,
    /// Section owning the folder.
    pub section_id: SectionId,
    /// Path of the file in object storage, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<String>,
    /// Extracted metadata, present once analysis has produced it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DocumentMetadata>,
}

impl Document {
    /// Get the file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.name)
            .map(|ext| ext.to_lowercase())
    }

    /// Move the document to a later processing status.
    pub fn advance_status(&mut self, next: DocumentStatus) -> Result<(), AppError> {
        if !self.status.can_transition_to(next) {
            return Err(AppError::validation(format!(
                "Document '{}' cannot move from {} to {}",
                self.id, self.status, next
            )));
        }
        self.status = next;
        Ok(())
    }
}
