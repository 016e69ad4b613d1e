//! Contract tests for the document API client.
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | POST | `/documents/upload` | `upload_*` |
//! | POST | `/documents/{id}/analyze` | `analyze_*` |
//! | POST | `/documents/generate` | `generate_*` |
//! | GET | `/documents?folderId=` | `get_documents_*` |
//! | DELETE | `/documents/{id}` | `delete_*` |
//! | GET/POST/PUT | `/projects` | `*_project*` |

use synapse_core::config::backend::ApiConfig;
use synapse_core::types::{DocumentId, FolderId, ProjectId, SectionId};
use synapse_data::api::{
    ApiClient, GenerateDocumentRequest, UpdateProject, UploadDocumentRequest,
};
use synapse_entity::document::DocumentStatus;
use synapse_entity::metadata::DocumentMetadata;
use synapse_entity::project::CreateProject;
use wiremock::matchers::{body_json, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: server.uri(),
        timeout_seconds: 5,
    })
    .unwrap()
}

// ── documents ────────────────────────────────────────────────────────

#[tokio::test]
async fn upload_sends_multipart_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents/upload"))
        .and(header_exists("content-type"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "documentId": "d-42",
            "status": "uploaded",
            "uploadedAt": "2024-12-20T10:30:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client(&server)
        .upload_document(UploadDocumentRequest {
            file_name: "КМ-АР.pdf".into(),
            content: b"%PDF-1.7".to_vec(),
            project_id: ProjectId::new("project-1"),
            section_id: SectionId::new("section-km"),
            folder_id: FolderId::new("folder-km-proekt"),
        })
        .await;

    let data = resp.data().unwrap();
    assert_eq!(data.document_id, "d-42");
    assert_eq!(data.status, "uploaded");

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0].headers.get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("multipart/form-data"));
}

#[tokio::test]
async fn analyze_returns_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents/doc-km-ar/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "documentId": "doc-km-ar",
            "metadata": {
                "customer": "ООО \"СтройМонтаж\"",
                "projectObject": "Складской комплекс",
                "address": "г. Подольск"
            },
            "confidence": 0.87,
            "analyzedAt": "2024-12-20T10:35:00Z"
        })))
        .mount(&server)
        .await;

    let data = client(&server).analyze_document("doc-km-ar").await.data().unwrap();
    assert_eq!(data.metadata.project_object, "Складской комплекс");
    assert!((data.confidence - 0.87).abs() < 1e-9);
}

#[tokio::test]
async fn generate_posts_template_and_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents/generate"))
        .and(body_json(serde_json::json!({
            "templateId": "doc-km-template",
            "metadata": {
                "customer": "C",
                "projectObject": "O",
                "address": "A",
                "axes": [],
                "elevationMarks": [],
                "billOfMaterials": []
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "documentId": "gen-1",
            "downloadUrl": "http://localhost:8000/files/gen-1.xlsx",
            "generatedAt": "2024-12-20T11:00:00Z"
        })))
        .mount(&server)
        .await;

    let request = GenerateDocumentRequest {
        template_id: DocumentId::new("doc-km-template"),
        metadata: DocumentMetadata {
            customer: "C".into(),
            project_object: "O".into(),
            address: "A".into(),
            ..DocumentMetadata::default()
        },
    };
    let data = client(&server).generate_document(&request).await.data().unwrap();
    assert!(data.download_url.ends_with("gen-1.xlsx"));
}

#[tokio::test]
async fn get_documents_by_folder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .and(query_param("folderId", "folder-km-proekt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "documents": [{
                "id": "doc-km-uzly",
                "name": "КМ-Узлы.pdf",
                "type": "design",
                "uploadDate": "2024-12-21T09:00:00Z",
                "status": "processing",
                "folderId": "folder-km-proekt",
                "sectionId": "section-km"
            }]
        })))
        .mount(&server)
        .await;

    let data = client(&server).get_documents("folder-km-proekt").await.data().unwrap();
    assert_eq!(data.documents.len(), 1);
    assert_eq!(data.documents[0].status, DocumentStatus::Processing);
}

#[tokio::test]
async fn delete_with_empty_body_is_data() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/documents/doc-1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let resp = client(&server).delete_document("doc-1").await;
    assert!(resp.is_data());
    assert_eq!(resp.data(), Some(serde_json::Value::Null));
}

// ── errors ───────────────────────────────────────────────────────────

#[tokio::test]
async fn error_body_fields_are_mapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "code": "NOT_FOUND",
            "message": "Project missing not found",
            "details": { "projectId": "missing" }
        })))
        .mount(&server)
        .await;

    let resp = client(&server).get_project("missing").await;
    let err = resp.error().unwrap();
    assert_eq!(err.code, "NOT_FOUND");
    assert_eq!(err.message, "Project missing not found");
    assert_eq!(err.details, Some(serde_json::json!({ "projectId": "missing" })));
}

#[tokio::test]
async fn error_without_fields_uses_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let resp = client(&server).get_projects().await;
    let err = resp.error().unwrap();
    assert_eq!(err.code, "UNKNOWN_ERROR");
    assert_eq!(err.message, "An error occurred");
    assert!(err.details.is_none());
}

#[tokio::test]
async fn non_json_error_body_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let resp = client(&server).get_projects().await;
    let err = resp.error().unwrap();
    assert_eq!(err.code, "NETWORK_ERROR");
    assert!(err.details.is_none());
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    let client = ApiClient::new(&ApiConfig {
        base_url: "http://127.0.0.1:9".into(),
        timeout_seconds: 2,
    })
    .unwrap();

    let resp = client.get_projects().await;
    assert_eq!(resp.error().unwrap().code, "NETWORK_ERROR");
}

// ── projects ─────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_update_project() {
    let server = MockServer::start().await;
    let project = serde_json::json!({
        "id": "p-1",
        "name": "Warehouse",
        "sections": []
    });
    Mock::given(method("POST"))
        .and(path("/projects"))
        .and(body_json(serde_json::json!({ "name": "Warehouse" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(project.clone()))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/projects/p-1"))
        .and(body_json(serde_json::json!({ "address": "г. Подольск" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "p-1",
            "name": "Warehouse",
            "address": "г. Подольск"
        })))
        .mount(&server)
        .await;

    let api = client(&server);
    let created = api
        .create_project(&CreateProject { name: "Warehouse".into() })
        .await
        .data()
        .unwrap();
    assert_eq!(created.id, "p-1");

    let updated = api
        .update_project(
            "p-1",
            &UpdateProject {
                address: Some("г. Подольск".into()),
                ..UpdateProject::default()
            },
        )
        .await
        .data()
        .unwrap();
    assert_eq!(updated.address.as_deref(), Some("г. Подольск"));
}
