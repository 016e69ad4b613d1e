//! Project entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use synapse_core::types::ProjectId;

use crate::document::Document;
use crate::section::Section;

/// The root of the navigation aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique project identifier.
    pub id: ProjectId,
    /// Display name.
    pub name: String,
    /// Construction site address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Client organization name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    /// When the project was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Sections in display order.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Project {
    /// Every document of the project, section by section, folder by folder.
    pub fn documents(&self) -> impl Iterator<Item = &Document> + '_ {
        self.sections
            .iter()
            .flat_map(|s| s.folders.iter())
            .flat_map(|f| f.documents.iter())
    }

    /// Condensed listing row for this project.
    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            created_at: self.created_at,
        }
    }
}

/// A row of the project list, without its sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    /// Project identifier.
    pub id: ProjectId,
    /// Display name.
    pub name: String,
    /// When the project was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Data required to create a new project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProject {
    /// Display name.
    pub name: String,
}
