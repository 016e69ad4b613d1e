//! Built-in fixture project.
//!
//! Serves a warehouse-complex project with two sections (`КМ`, `КЖ`), each
//! holding a drawings folder and a templates folder. Inserted projects are
//! kept in memory and become the head of the project list.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};

use synapse_core::result::AppResult;
use synapse_core::types::{DocumentId, FolderId, ProjectId, SectionId};
use synapse_entity::document::{Document, DocumentStatus, DocumentType};
use synapse_entity::folder::Folder;
use synapse_entity::metadata::{AxisData, AxisDirection, BomEntry, DocumentMetadata};
use synapse_entity::project::{CreateProject, Project};
use synapse_entity::section::Section;

use super::{ProjectGraph, ProjectSource};

/// In-memory project source seeded with the fixture project.
#[derive(Debug)]
pub struct FixtureSource {
    /// Projects, most recently created first.
    projects: RwLock<Vec<Project>>,
}

impl FixtureSource {
    /// Create a source holding only the fixture project.
    pub fn new() -> Self {
        Self::with_projects(vec![fixture_project()])
    }

    /// Create a source over the given projects (head is active).
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects: RwLock::new(projects),
        }
    }
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectSource for FixtureSource {
    fn source_type(&self) -> &str {
        "fixture"
    }

    async fn load_graph(&self) -> AppResult<ProjectGraph> {
        let projects = self.projects.read().await;
        debug!(count = projects.len(), "Loading fixture projects");
        Ok(ProjectGraph {
            projects: projects.iter().map(Project::summary).collect(),
            active: projects.first().cloned(),
        })
    }

    async fn insert_project(&self, project: &CreateProject) -> AppResult<()> {
        let created = Project {
            id: ProjectId::random(),
            name: project.name.clone(),
            address: None,
            client: None,
            created_at: Some(Utc::now()),
            sections: Vec::new(),
        };
        info!(id = %created.id, name = %created.name, "Inserted fixture project");
        self.projects.write().await.insert(0, created);
        Ok(())
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn fixture_axes() -> Vec<AxisData> {
    let horizontal = [("А", 0.0), ("Б", 6000.0), ("В", 12000.0), ("Г", 18000.0), ("Д", 24000.0)];
    let vertical = (1..=8u32).map(|n| (n.to_string(), f64::from(n - 1) * 6000.0));

    horizontal
        .iter()
        .map(|(label, pos)| AxisData::new(AxisDirection::Horizontal, *label, *pos))
        .chain(vertical.map(|(label, pos)| AxisData::new(AxisDirection::Vertical, label, pos)))
        .collect()
}

fn fixture_metadata() -> DocumentMetadata {
    DocumentMetadata {
        customer: "ООО \"СтройМонтаж\"".to_string(),
        project_object: "Складской комплекс".to_string(),
        address: "Московская область, г. Подольск, Промзона Север".to_string(),
        axes: fixture_axes(),
        elevation_marks: vec![0.0, 3.6, 7.2, 10.8],
        bill_of_materials: vec![
            BomEntry::new("1", "Балка двутавровая 20Б1", 45.5, 12),
            BomEntry::new("2", "Колонна 30К1", 78.3, 8),
            BomEntry::new("3", "Связи С1", 12.5, 24),
            BomEntry::new("4", "Прогон П1", 22.1, 36),
        ],
    }
}

struct DocSeed {
    id: &'static str,
    name: &'static str,
    doc_type: DocumentType,
    uploaded: DateTime<Utc>,
    status: DocumentStatus,
    with_metadata: bool,
}

fn folder(section: &str, id: &str, name: &str, docs: Vec<DocSeed>) -> Folder {
    let folder_id = FolderId::new(id);
    let section_id = SectionId::new(section);
    let documents = docs
        .into_iter()
        .map(|seed| Document {
            id: DocumentId::new(seed.id),
            name: seed.name.to_string(),
            doc_type: seed.doc_type,
            upload_date: seed.uploaded,
            status: seed.status,
            folder_id: folder_id.clone(),
            section_id: section_id.clone(),
            storage_path: None,
            metadata: seed.with_metadata.then(fixture_metadata),
        })
        .collect();

    Folder {
        id: folder_id,
        name: name.to_string(),
        section_id,
        documents,
        is_virtual: false,
    }
}

/// The warehouse-complex fixture project (`project-1`).
pub fn fixture_project() -> Project {
    let project_id = ProjectId::new("project-1");

    let km = Section {
        id: SectionId::new("section-km"),
        name: "КМ - Металлические конструкции".to_string(),
        code: "КМ".to_string(),
        project_id: project_id.clone(),
        folders: vec![
            folder(
                "section-km",
                "folder-km-proekt",
                "Проект",
                vec![
                    DocSeed {
                        id: "doc-km-ar",
                        name: "КМ-АР.pdf",
                        doc_type: DocumentType::Design,
                        uploaded: at(2024, 12, 20, 10, 30),
                        status: DocumentStatus::Completed,
                        with_metadata: true,
                    },
                    DocSeed {
                        id: "doc-km-vedomost",
                        name: "КМ-Ведомость.xlsx",
                        doc_type: DocumentType::Design,
                        uploaded: at(2024, 12, 20, 11, 15),
                        status: DocumentStatus::Completed,
                        with_metadata: true,
                    },
                    DocSeed {
                        id: "doc-km-uzly",
                        name: "КМ-Узлы.pdf",
                        doc_type: DocumentType::Design,
                        uploaded: at(2024, 12, 21, 9, 0),
                        status: DocumentStatus::Processing,
                        with_metadata: false,
                    },
                ],
            ),
            folder(
                "section-km",
                "folder-km-templates",
                "Шаблоны ИД",
                vec![DocSeed {
                    id: "doc-km-template",
                    name: "Шаблон-КМ-Ведомость.xlsx",
                    doc_type: DocumentType::Template,
                    uploaded: at(2024, 12, 15, 14, 0),
                    status: DocumentStatus::Uploaded,
                    with_metadata: false,
                }],
            ),
        ],
    };

    let kzh = Section {
        id: SectionId::new("section-kzh"),
        name: "КЖ - Железобетонные конструкции".to_string(),
        code: "КЖ".to_string(),
        project_id: project_id.clone(),
        folders: vec![
            folder(
                "section-kzh",
                "folder-kzh-proekt",
                "Проект",
                vec![DocSeed {
                    id: "doc-kzh-ar",
                    name: "КЖ-АР.pdf",
                    doc_type: DocumentType::Design,
                    uploaded: at(2024, 12, 22, 13, 45),
                    status: DocumentStatus::Uploaded,
                    with_metadata: false,
                }],
            ),
            folder(
                "section-kzh",
                "folder-kzh-templates",
                "Шаблоны ИД",
                vec![DocSeed {
                    id: "doc-kzh-template",
                    name: "Шаблон-КЖ-Ведомость.xlsx",
                    doc_type: DocumentType::Template,
                    uploaded: at(2024, 12, 15, 14, 30),
                    status: DocumentStatus::Uploaded,
                    with_metadata: false,
                }],
            ),
        ],
    };

    Project {
        id: project_id,
        name: "Складской комплекс".to_string(),
        address: Some("Московская область, г. Подольск, Промзона Север".to_string()),
        client: Some("ООО \"СтройМонтаж\"".to_string()),
        created_at: Some(at(2024, 12, 15, 9, 0)),
        sections: vec![km, kzh],
    }
}
