//! Request and response bodies of the document API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use synapse_core::types::{DocumentId, FolderId, ProjectId, SectionId};
use synapse_entity::document::Document;
use synapse_entity::metadata::DocumentMetadata;

/// File upload into a folder. Sent as a multipart form.
#[derive(Debug, Clone)]
pub struct UploadDocumentRequest {
    /// File name including extension.
    pub file_name: String,
    /// Raw file contents.
    pub content: Vec<u8>,
    /// Target project.
    pub project_id: ProjectId,
    /// Target section.
    pub section_id: SectionId,
    /// Target folder.
    pub folder_id: FolderId,
}

/// Result of an upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadDocumentResponse {
    pub document_id: DocumentId,
    /// Initial processing status.
    pub status: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Result of a document analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeDocumentResponse {
    pub document_id: DocumentId,
    pub metadata: DocumentMetadata,
    /// Confidence score in `0..=1`.
    pub confidence: f64,
    pub analyzed_at: DateTime<Utc>,
}

/// Fill a template with extracted metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDocumentRequest {
    pub template_id: DocumentId,
    pub metadata: DocumentMetadata,
}

/// Result of a document generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDocumentResponse {
    pub document_id: DocumentId,
    pub download_url: String,
    pub generated_at: DateTime<Utc>,
}

/// Documents of one folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetDocumentsResponse {
    pub documents: Vec<Document>,
}

/// Partial project update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
}
