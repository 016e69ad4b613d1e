//! Contract tests for the remote project source against a mocked REST
//! table interface.
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | GET | `/rest/v1/projects` | `load_*` |
//! | GET | `/rest/v1/sections` | `load_*` |
//! | GET | `/rest/v1/documents` | `load_*` |
//! | GET | `/rest/v1/extracted_data` | `load_attaches_extracted_metadata` |
//! | POST | `/rest/v1/projects` | `insert_*` |

use std::sync::Arc;

use synapse_core::error::ErrorKind;
use synapse_data::source::{ProjectSource, RemoteSource};
use synapse_data::store::{DataStore, LoadState};
use synapse_entity::project::CreateProject;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY: &str = "anon-key";

fn source(server: &MockServer, extracted: bool) -> RemoteSource {
    RemoteSource::new(&server.uri(), KEY, 5, extracted).unwrap()
}

async fn mount_projects(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/projects"))
        .and(query_param("order", "created_at.desc"))
        .and(header("apikey", KEY))
        .and(header("Authorization", "Bearer anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_sections(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/sections"))
        .and(query_param("project_id", "eq.p-new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": "s-km", "name": "КМ - Металлические конструкции", "code": "КМ", "project_id": "p-new" },
            { "id": "s-kzh", "name": "КЖ - Железобетонные конструкции", "code": "КЖ", "project_id": "p-new" }
        ])))
        .mount(server)
        .await;
}

async fn mount_documents(server: &MockServer, status: &str) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/documents"))
        .and(query_param("section_id", "in.(s-km,s-kzh)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "d1",
                "name": "КМ-АР.pdf",
                "type": "design",
                "status": status,
                "created_at": "2024-12-20T10:30:00Z",
                "section_id": "s-km",
                "storage_path": "p-new/s-km/КМ-АР.pdf"
            },
            {
                "id": "d2",
                "name": "КЖ-АР.pdf",
                "type": "executive",
                "status": "uploaded",
                "created_at": "2024-12-22T13:45:00Z",
                "section_id": "s-kzh"
            }
        ])))
        .mount(server)
        .await;
}

fn two_projects() -> serde_json::Value {
    serde_json::json!([
        { "id": "p-new", "name": "Warehouse", "created_at": "2025-01-10T08:00:00Z" },
        { "id": "p-old", "name": "Складской комплекс", "created_at": "2024-12-15T09:00:00Z" }
    ])
}

// ── load ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn load_joins_rows_into_virtual_folders() {
    let server = MockServer::start().await;
    mount_projects(&server, two_projects()).await;
    mount_sections(&server).await;
    mount_documents(&server, "completed").await;

    let graph = source(&server, false).load_graph().await.unwrap();
    assert_eq!(graph.projects.len(), 2);
    assert_eq!(graph.projects[0].name, "Warehouse");

    let project = graph.active.unwrap();
    assert_eq!(project.id, "p-new");
    assert_eq!(project.sections.len(), 2);

    let km = &project.sections[0];
    assert_eq!(km.folders.len(), 1);
    assert_eq!(km.folders[0].id, "folder-s-km");
    assert!(km.folders[0].is_virtual);
    assert_eq!(km.folders[0].documents[0].id, "d1");
    assert_eq!(km.folders[0].documents[0].folder_id, "folder-s-km");
    assert!(km.folders[0].documents[0].metadata.is_none());
    assert_eq!(project.sections[1].folders[0].documents[0].id, "d2");
}

#[tokio::test]
async fn load_empty_backend() {
    let server = MockServer::start().await;
    mount_projects(&server, serde_json::json!([])).await;

    let graph = source(&server, false).load_graph().await.unwrap();
    assert!(graph.projects.is_empty());
    assert!(graph.active.is_none());
}

#[tokio::test]
async fn load_project_without_sections_skips_documents() {
    let server = MockServer::start().await;
    mount_projects(&server, two_projects()).await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/sections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/documents"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let graph = source(&server, false).load_graph().await.unwrap();
    assert!(graph.active.unwrap().sections.is_empty());
}

#[tokio::test]
async fn load_unknown_status_fails_closed() {
    let server = MockServer::start().await;
    mount_projects(&server, two_projects()).await;
    mount_sections(&server).await;
    mount_documents(&server, "analyzed").await;

    let err = source(&server, false).load_graph().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(err.message.contains("'analyzed'"));
}

#[tokio::test]
async fn load_server_error_marks_store_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/projects"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let mut store = DataStore::new(Arc::new(source(&server, false)));
    let err = store.load().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExternalService);
    assert!(err.message.contains("401"));
    assert!(matches!(store.state(), LoadState::Failed(_)));
}

#[tokio::test]
async fn load_attaches_extracted_metadata() {
    let server = MockServer::start().await;
    mount_projects(&server, two_projects()).await;
    mount_sections(&server).await;
    mount_documents(&server, "completed").await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/extracted_data"))
        .and(query_param("document_id", "in.(d1,d2)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "document_id": "d1",
                "confidence_score": 0.93,
                "data": {
                    "customer": "ООО \"СтройМонтаж\"",
                    "projectObject": "Складской комплекс",
                    "address": "г. Подольск",
                    "elevationMarks": [0.0, 3.6],
                    "billOfMaterials": [
                        { "position": "1", "name": "Балка двутавровая 20Б1", "weight": 45.5, "quantity": 12 }
                    ]
                }
            }
        ])))
        .mount(&server)
        .await;

    let project = source(&server, true).load_graph().await.unwrap().active.unwrap();
    let doc = &project.sections[0].folders[0].documents[0];
    let meta = doc.metadata.as_ref().unwrap();
    assert_eq!(meta.customer, "ООО \"СтройМонтаж\"");
    assert!((meta.total_weight() - 546.0).abs() < 1e-9);
    assert!(project.sections[1].folders[0].documents[0].metadata.is_none());
}

// ── insert ───────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_posts_name_only() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/projects"))
        .and(header("apikey", KEY))
        .and(header("Prefer", "return=minimal"))
        .and(body_json(serde_json::json!({ "name": "Warehouse" })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    source(&server, false)
        .insert_project(&CreateProject { name: "Warehouse".into() })
        .await
        .unwrap();
}

#[tokio::test]
async fn insert_rejected_leaves_store_untouched() {
    let server = MockServer::start().await;
    mount_projects(&server, two_projects()).await;
    mount_sections(&server).await;
    mount_documents(&server, "completed").await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/projects"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "message": "duplicate key value violates unique constraint"
        })))
        .mount(&server)
        .await;

    let mut store = DataStore::new(Arc::new(source(&server, false)));
    store.load().await.unwrap();

    let err = store.create_project("Warehouse").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExternalService);
    assert_eq!(store.project().map(|p| p.id.as_str()), Some("p-new"));
    assert_eq!(store.get_document("d2").map(|d| d.name.as_str()), Some("КЖ-АР.pdf"));
}
