//! HTTP implementation of the document API client.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use synapse_core::config::backend::ApiConfig;
use synapse_core::error::{AppError, ErrorKind};
use synapse_core::result::AppResult;
use synapse_core::types::{ApiErrorBody, ApiResponse};
use synapse_entity::project::{CreateProject, Project, ProjectSummary};

use super::dto::{
    AnalyzeDocumentResponse, GenerateDocumentRequest, GenerateDocumentResponse,
    GetDocumentsResponse, UpdateProject, UploadDocumentRequest, UploadDocumentResponse,
};

/// Code reported when the server gives no error code.
pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";
/// Code reported when the request never produced a usable response.
pub const NETWORK_ERROR: &str = "NETWORK_ERROR";

const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// Client for the document-processing API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from configuration.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
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
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// API base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /documents/upload` as a multipart form.
    pub async fn upload_document(
        &self,
        request: UploadDocumentRequest,
    ) -> ApiResponse<UploadDocumentResponse> {
        let form = Form::new()
            .part(
                "file",
                Part::bytes(request.content).file_name(request.file_name),
            )
            .text("projectId", request.project_id.into_inner())
            .text("sectionId", request.section_id.into_inner())
            .text("folderId", request.folder_id.into_inner());

        match self.builder(Method::POST, "/documents/upload", &[]) {
            Ok(builder) => self.send(builder.multipart(form)).await,
            Err(err) => network_error(err),
        }
    }

    /// `POST /documents/{id}/analyze`.
    pub async fn analyze_document(&self, document_id: &str) -> ApiResponse<AnalyzeDocumentResponse> {
        let path = format!("/documents/{document_id}/analyze");
        self.call(Method::POST, &path, &[], None::<&()>).await
    }

    /// `POST /documents/generate`.
    pub async fn generate_document(
        &self,
        request: &GenerateDocumentRequest,
    ) -> ApiResponse<GenerateDocumentResponse> {
        self.call(Method::POST, "/documents/generate", &[], Some(request))
            .await
    }

    /// `GET /documents?folderId=...`.
    pub async fn get_documents(&self, folder_id: &str) -> ApiResponse<GetDocumentsResponse> {
        self.call(Method::GET, "/documents", &[("folderId", folder_id)], None::<&()>)
            .await
    }

    /// `DELETE /documents/{id}`.
    pub async fn delete_document(&self, document_id: &str) -> ApiResponse<Value> {
        let path = format!("/documents/{document_id}");
        self.call(Method::DELETE, &path, &[], None::<&()>).await
    }

    /// `GET /projects`.
    pub async fn get_projects(&self) -> ApiResponse<Vec<ProjectSummary>> {
        self.call(Method::GET, "/projects", &[], None::<&()>).await
    }

    /// `GET /projects/{id}`.
    pub async fn get_project(&self, project_id: &str) -> ApiResponse<Project> {
        let path = format!("/projects/{project_id}");
        self.call(Method::GET, &path, &[], None::<&()>).await
    }

    /// `POST /projects`.
    pub async fn create_project(&self, project: &CreateProject) -> ApiResponse<Project> {
        self.call(Method::POST, "/projects", &[], Some(project)).await
    }

    /// `PUT /projects/{id}`.
    pub async fn update_project(
        &self,
        project_id: &str,
        update: &UpdateProject,
    ) -> ApiResponse<Project> {
        let path = format!("/projects/{project_id}");
        self.call(Method::PUT, &path, &[], Some(update)).await
    }

    async fn call<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> ApiResponse<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        match self.builder(method, path, query) {
            Ok(builder) => {
                let builder = match body {
                    Some(body) => builder.json(body),
                    None => builder.header("Content-Type", "application/json"),
                };
                self.send(builder).await
            }
            Err(err) => network_error(err),
        }
    }

    fn builder(&self, method: Method, path: &str, query: &[(&str, &str)]) -> AppResult<RequestBuilder> {
        let raw = format!("{}{path}", self.base_url);
        let parsed = if query.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, query)
        };
        let url = parsed.map_err(|e| AppError::configuration(format!("Invalid API URL '{raw}': {e}")))?;
        debug!(method = %method, url = %url, "API request");
        Ok(self.http.request(method, url))
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResponse<T> {
        match self.try_send(builder).await {
            Ok(response) => response,
            Err(err) => network_error(err),
        }
    }

    async fn try_send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> AppResult<ApiResponse<T>> {
        let resp = builder.send().await.map_err(|e| {
            AppError::with_source(ErrorKind::ExternalService, e.to_string(), e)
        })?;
        let status = resp.status();
        let bytes = resp.bytes().await.map_err(|e| {
            AppError::with_source(ErrorKind::ExternalService, e.to_string(), e)
        })?;

        // Only a successful response may have an empty body; an unreadable
        // error body fails like a transport error.
        let body: Value = if bytes.is_empty() && status.is_success() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        if !status.is_success() {
            warn!(status = status.as_u16(), "API call failed");
            return Ok(ApiResponse::Error(error_body(&body)));
        }

        Ok(ApiResponse::Data(serde_json::from_value(body)?))
    }
}

/// Map a failed response body onto the error envelope, with defaults for
/// missing fields.
fn error_body(body: &Value) -> ApiErrorBody {
    let field = |name: &str| body.get(name).and_then(Value::as_str).map(str::to_string);
    ApiErrorBody {
        code: field("code").unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
        message: field("message").unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
        details: body.get("details").filter(|d| !d.is_null()).cloned(),
    }
}

fn network_error<T>(err: AppError) -> ApiResponse<T> {
    warn!(error = %err, "API request did not complete");
    ApiResponse::Error(ApiErrorBody::new(NETWORK_ERROR, err.message))
}
