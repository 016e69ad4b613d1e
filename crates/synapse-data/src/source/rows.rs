//! Raw table rows of the hosted backend and their validation.
//!
//! Rows are deserialized loosely (enum columns as plain strings) and then
//! parsed into domain entities. An unrecognized status or type fails the
//! whole load instead of leaking an invalid value into the view layer.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use synapse_core::error::AppError;
use synapse_core::result::AppResult;
use synapse_core::types::{DocumentId, ProjectId, SectionId};
use synapse_entity::document::{Document, DocumentStatus, DocumentType};
use synapse_entity::folder::Folder;
use synapse_entity::metadata::DocumentMetadata;
use synapse_entity::project::{Project, ProjectSummary};
use synapse_entity::section::Section;

use crate::virtual_folder::derive_folders;

/// A row of the `projects` table.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ProjectRow {
    /// Listing row for the project selector.
    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary {
            id: ProjectId::new(self.id.clone()),
            name: self.name.clone(),
            created_at: self.created_at,
        }
    }
}

/// A row of the `sections` table.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionRow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    pub project_id: String,
}

/// A row of the `documents` table.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentRow {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub section_id: String,
    #[serde(default)]
    pub storage_path: Option<String>,
}

impl DocumentRow {
    /// Parse the row, rejecting unknown status or type values.
    pub fn parse(self) -> AppResult<Document> {
        let status: DocumentStatus = self
            .status
            .parse()
            .map_err(|e: AppError| AppError::validation(format!("Document '{}': {}", self.id, e.message)))?;
        let doc_type: DocumentType = self
            .doc_type
            .parse()
            .map_err(|e: AppError| AppError::validation(format!("Document '{}': {}", self.id, e.message)))?;
        let section_id = SectionId::new(self.section_id);

        Ok(Document {
            id: DocumentId::new(self.id),
            name: self.name,
            doc_type,
            upload_date: self.created_at,
            status,
            folder_id: Folder::virtual_id(&section_id),
            section_id,
            storage_path: self.storage_path,
            metadata: None,
        })
    }
}

/// A row of the `extracted_data` table.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractedDataRow {
    pub document_id: String,
    pub data: serde_json::Value,
    #[serde(default)]
    pub confidence_score: Option<f64>,
}

impl ExtractedDataRow {
    /// Parse the JSON payload into document metadata.
    pub fn parse(self) -> AppResult<(DocumentId, DocumentMetadata)> {
        let metadata: DocumentMetadata = serde_json::from_value(self.data).map_err(|e| {
            AppError::validation(format!(
                "Extracted data for document '{}' is malformed: {e}",
                self.document_id
            ))
        })?;
        Ok((DocumentId::new(self.document_id), metadata))
    }
}

/// Join fetched rows into the active project's aggregate shape.
///
/// Sections keep their fetched order; documents keep their fetched order
/// within a section. A document pointing at a section that was not fetched
/// for this project is a data error.
pub fn assemble(
    project: &ProjectRow,
    sections: Vec<SectionRow>,
    documents: Vec<DocumentRow>,
    mut metadata: HashMap<DocumentId, DocumentMetadata>,
) -> AppResult<Project> {
    let mut by_section: HashMap<String, Vec<Document>> = sections
        .iter()
        .map(|s| (s.id.clone(), Vec::new()))
        .collect();

    for row in documents {
        let mut doc = row.parse()?;
        doc.metadata = metadata.remove(&doc.id);
        let bucket = by_section.get_mut(doc.section_id.as_str()).ok_or_else(|| {
            AppError::validation(format!(
                "Document '{}' references unknown section '{}'",
                doc.id, doc.section_id
            ))
        })?;
        bucket.push(doc);
    }

    let sections = sections
        .into_iter()
        .map(|row| {
            if row.project_id != project.id {
                return Err(AppError::validation(format!(
                    "Section '{}' belongs to project '{}', not '{}'",
                    row.id, row.project_id, project.id
                )));
            }
            let section_id = SectionId::new(row.id);
            let docs = by_section.remove(section_id.as_str()).unwrap_or_default();
            Ok(Section {
                folders: derive_folders(&section_id, docs),
                id: section_id,
                name: row.name,
                code: row.code.unwrap_or_default(),
                project_id: ProjectId::new(row.project_id),
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Project {
        id: ProjectId::new(project.id.clone()),
        name: project.name.clone(),
        address: project.address.clone(),
        client: project.client.clone(),
        created_at: project.created_at,
        sections,
    })
}
