//! Hosted backend source over its REST table interface.
//!
//! A load is three sequential reads joined client-side:
//!
//! | Step | Request |
//! |------|---------|
//! | 1 | `GET /rest/v1/projects?select=*&order=created_at.desc` |
//! | 2 | `GET /rest/v1/sections?select=*&project_id=eq.{head}` |
//! | 3 | `GET /rest/v1/documents?select=*&section_id=in.({ids})` |
//!
//! plus `GET /rest/v1/extracted_data?document_id=in.(...)` when metadata
//! loading is enabled. Creating a project is one `POST /rest/v1/projects`.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use synapse_core::error::{AppError, ErrorKind};
use synapse_core::result::AppResult;
use synapse_core::types::DocumentId;
use synapse_entity::metadata::DocumentMetadata;
use synapse_entity::project::CreateProject;

use super::rows::{self, DocumentRow, ExtractedDataRow, ProjectRow, SectionRow};
use super::{ProjectGraph, ProjectSource};

/// REST path prefix of the table interface.
const REST_PREFIX: &str = "rest/v1";

/// Project source backed by the hosted relational backend.
#[derive(Debug, Clone)]
pub struct RemoteSource {
    http: Client,
    base_url: String,
    api_key: String,
    load_extracted_data: bool,
}

impl RemoteSource {
    /// Create a source for the backend at `base_url`.
    pub fn new(
        base_url: &str,
        api_key: &str,
        timeout_seconds: u64,
        load_extracted_data: bool,
    ) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            load_extracted_data,
        })
    }

    fn table_url(&self, table: &str, params: &[(&str, String)]) -> AppResult<Url> {
        let raw = format!("{}/{REST_PREFIX}/{table}", self.base_url);
        let parsed = if params.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, params.iter().map(|(k, v)| (*k, v.as_str())))
        };
        parsed.map_err(|e| AppError::configuration(format!("Invalid backend URL '{raw}': {e}")))
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        params: &[(&str, String)],
    ) -> AppResult<Vec<T>> {
        let url = self.table_url(table, params)?;
        debug!(table, url = %url, "Fetching rows");

        let resp = self
            .http
            .get(url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Failed to fetch {table}: {e}"),
                    e,
                )
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::external(format!(
                "Fetching {table} failed with status {status}: {body}"
            )));
        }

        resp.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Malformed {table} rows: {e}"),
                e,
            )
        })
    }

    async fn fetch_metadata(
        &self,
        documents: &[DocumentRow],
    ) -> AppResult<HashMap<DocumentId, DocumentMetadata>> {
        if !self.load_extracted_data || documents.is_empty() {
            return Ok(HashMap::new());
        }
        let ids = in_list(documents.iter().map(|d| d.id.as_str()));
        let rows: Vec<ExtractedDataRow> = self
            .select(
                "extracted_data",
                &[("select", "*".to_string()), ("document_id", ids)],
            )
            .await?;
        rows.into_iter().map(ExtractedDataRow::parse).collect()
    }
}

/// PostgREST `in.(a,b,c)` filter value.
fn in_list<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    format!("in.({})", ids.collect::<Vec<_>>().join(","))
}

#[async_trait]
impl ProjectSource for RemoteSource {
    fn source_type(&self) -> &str {
        "remote"
    }

    async fn load_graph(&self) -> AppResult<ProjectGraph> {
        let projects: Vec<ProjectRow> = self
            .select(
                "projects",
                &[
                    ("select", "*".to_string()),
                    ("order", "created_at.desc".to_string()),
                ],
            )
            .await?;

        let Some(head) = projects.first() else {
            info!("Backend has no projects");
            return Ok(ProjectGraph::default());
        };

        let sections: Vec<SectionRow> = self
            .select(
                "sections",
                &[
                    ("select", "*".to_string()),
                    ("project_id", format!("eq.{}", head.id)),
                ],
            )
            .await?;

        let documents: Vec<DocumentRow> = if sections.is_empty() {
            Vec::new()
        } else {
            self.select(
                "documents",
                &[
                    ("select", "*".to_string()),
                    ("section_id", in_list(sections.iter().map(|s| s.id.as_str()))),
                ],
            )
            .await?
        };

        let metadata = self.fetch_metadata(&documents).await?;
        info!(
            project = %head.id,
            sections = sections.len(),
            documents = documents.len(),
            "Loaded project from backend"
        );

        let active = rows::assemble(head, sections, documents, metadata)?;
        Ok(ProjectGraph {
            projects: projects.iter().map(ProjectRow::summary).collect(),
            active: Some(active),
        })
    }

    async fn insert_project(&self, project: &CreateProject) -> AppResult<()> {
        let url = self.table_url("projects", &[])?;
        let resp = self
            .http
            .post(url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Prefer", "return=minimal")
            .json(&serde_json::json!({ "name": project.name }))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Failed to insert project: {e}"),
                    e,
                )
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::external(format!(
                "Inserting project failed with status {status}: {body}"
            )));
        }

        info!(name = %project.name, "Inserted project");
        Ok(())
    }
}
