//! Store scenarios that span loading and mutation.

use synapse_core::error::ErrorKind;
use synapse_entity::NodeKind;

use crate::helpers::TestShell;

#[tokio::test]
async fn test_create_project_becomes_head() {
    let mut shell = TestShell::fixture().await;
    shell.store.create_project("Warehouse").await.expect("create");

    assert_eq!(shell.store.projects()[0].name, "Warehouse");
    assert_eq!(shell.store.projects().len(), 2);
    let project = shell.store.project().expect("active");
    assert_eq!(project.name, "Warehouse");
    assert!(project.sections.is_empty());
}

#[tokio::test]
async fn test_created_project_frame_has_no_sections() {
    let mut shell = TestShell::fixture().await;
    shell.store.create_project("Warehouse").await.expect("create");
    shell.nav.select_node("doc-km-ar", NodeKind::Document);

    let text = shell.frame(false);
    assert!(text.contains("Warehouse"));
    assert!(!text.contains("КМ - Металлические конструкции"));
    assert!(text.contains("Document not found"));
}

#[tokio::test]
async fn test_blank_name_keeps_store() {
    let mut shell = TestShell::fixture().await;
    let err = shell.store.create_project(" \t").await.unwrap_err();

    assert!(err.is(ErrorKind::Validation));
    assert_eq!(shell.store.projects().len(), 1);
    assert_eq!(shell.store.project().map(|p| p.name.as_str()), Some("Складской комплекс"));
}

#[tokio::test]
async fn test_every_document_is_indexed() {
    let shell = TestShell::fixture().await;
    let project = shell.store.project().expect("project");
    for doc in project.documents() {
        assert_eq!(shell.store.get_document(doc.id.as_str()).map(|d| &d.id), Some(&doc.id));
    }
    for folder in project.sections.iter().flat_map(|s| &s.folders) {
        assert_eq!(shell.store.get_folder_documents(folder.id.as_str()), folder.documents.as_slice());
    }
}
