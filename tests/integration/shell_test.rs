//! Frame-level scenarios.

use std::sync::Arc;

use synapse_core::types::FolderId;
use synapse_data::source::UnconfiguredSource;
use synapse_data::source::fixture::fixture_project;
use synapse_entity::NodeKind;
use synapse_entity::folder::Folder;
use synapse_view::locale::Language;
use synapse_view::tree::{TreeInteraction, TreeNode};
use synapse_view::workspace::{DOCUMENT_NOT_FOUND, NO_DOCUMENTS, SELECT_TO_BEGIN, SELECT_TO_VIEW};

use crate::helpers::TestShell;

#[tokio::test]
async fn test_initial_frame() {
    let shell = TestShell::fixture().await;
    let text = shell.frame(false);

    assert!(text.contains("Складской комплекс"));
    assert!(text.contains("КМ - Металлические конструкции"));
    assert!(text.contains(SELECT_TO_BEGIN));
    assert!(!text.contains("КМ-АР.pdf"));
}

#[tokio::test]
async fn test_click_folder_then_document() {
    let mut shell = TestShell::fixture().await;
    let root = TreeNode::from_project(shell.store.project().expect("project"));
    let tree = TreeInteraction::new(&root);

    tree.click_row(&mut shell.nav, "folder-km-proekt").expect("folder");
    let text = shell.frame(false);
    assert!(text.contains("КМ-АР.pdf"));
    assert!(text.contains("КМ-Ведомость.xlsx"));
    assert!(text.contains("Customer: ООО \"СтройМонтаж\""));

    tree.click_row(&mut shell.nav, "doc-km-ar").expect("document");
    let text = shell.frame(false);
    assert!(text.contains("December 20, 2024 at 10:30 AM"));
    assert!(text.contains("Total Weight:"));
    assert!(text.contains("2268.0 kg"));
}

#[tokio::test]
async fn test_section_selection_prompts() {
    let mut shell = TestShell::fixture().await;
    shell.nav.select_node("section-kzh", NodeKind::Section);
    assert!(shell.frame(false).contains(SELECT_TO_VIEW));
}

#[tokio::test]
async fn test_empty_folder_message() {
    let mut project = fixture_project();
    let section_id = project.sections[1].id.clone();
    project.sections[1].folders.push(Folder {
        id: FolderId::new("folder-kzh-empty"),
        name: "Пусто".to_string(),
        section_id,
        documents: Vec::new(),
        is_virtual: false,
    });
    let mut shell = TestShell::with_projects(vec![project]).await;
    shell.nav.select_node("folder-kzh-empty", NodeKind::Folder);

    assert!(shell.frame(false).contains(NO_DOCUMENTS));
}

#[tokio::test]
async fn test_missing_document_message() {
    let mut shell = TestShell::fixture().await;
    shell.nav.select_node("doc-gone", NodeKind::Document);
    assert!(shell.frame(false).contains(DOCUMENT_NOT_FOUND));
}

#[tokio::test]
async fn test_rail_mode_icons_only() {
    let shell = TestShell::fixture().await;
    let text = shell.frame(true);

    assert!(text.contains("🗂"));
    assert!(!text.contains("📦"));
    assert!(!text.contains("📁"));
    assert!(!text.contains("Складской комплекс"));
    assert!(!text.contains("(3)"));
}

#[tokio::test]
async fn test_language_switch() {
    let mut shell = TestShell::fixture().await;
    assert!(shell.frame(false).starts_with("[Create Project]"));

    shell.locale.set_language(Language::Ru);
    assert!(shell.frame(false).starts_with("[Создать проект]"));
    assert_eq!(shell.locale.t("Some unknown key"), "Some unknown key");
}

#[tokio::test]
async fn test_unconfigured_backend_frame() {
    let shell = TestShell::with_source(Arc::new(UnconfiguredSource)).await;
    let text = shell.frame(false);
    assert!(text.contains("No project loaded"));
    assert!(text.contains("Backend not configured"));
}
