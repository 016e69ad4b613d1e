//! Data aggregate store.
//!
//! Owns the project source and the result of the last load. The view layer
//! reads through the lookup methods; only [`DataStore::load`] and
//! [`DataStore::create_project`] mutate it.

use std::sync::Arc;

use tracing::{error, info};

use synapse_core::error::AppError;
use synapse_core::result::AppResult;
use synapse_entity::document::Document;
use synapse_entity::folder::Folder;
use synapse_entity::project::{CreateProject, Project, ProjectSummary};
use synapse_entity::section::Section;

use crate::aggregate::ProjectAggregate;
use crate::source::ProjectSource;

/// Outcome of the most recent load.
#[derive(Debug, Clone)]
pub enum LoadState {
    /// Nothing loaded yet.
    Idle,
    /// A load is in flight.
    Loading,
    /// The active project is available.
    Ready(ProjectAggregate),
    /// The backend holds no projects.
    Empty,
    /// The last load failed.
    Failed(AppError),
}

/// Holds the active project aggregate and the project list.
#[derive(Debug)]
pub struct DataStore {
    source: Arc<dyn ProjectSource>,
    state: LoadState,
    projects: Vec<ProjectSummary>,
}

impl DataStore {
    /// Create an idle store over a source.
    pub fn new(source: Arc<dyn ProjectSource>) -> Self {
        Self {
            source,
            state: LoadState::Idle,
            projects: Vec::new(),
        }
    }

    /// Type name of the underlying source.
    pub fn source_type(&self) -> &str {
        self.source.source_type()
    }

    /// Fetch the project graph and replace the aggregate.
    ///
    /// Returns the active project, or `None` when there are no projects.
    /// On failure the state becomes [`LoadState::Failed`] and the error is
    /// also returned.
    pub async fn load(&mut self) -> AppResult<Option<&Project>> {
        self.state = LoadState::Loading;

        let fetched = self.source.load_graph().await;
        let graph = match fetched {
            Ok(graph) => graph,
            Err(e) => return Err(self.fail(e)),
        };

        let built = graph.active.map(ProjectAggregate::build).transpose();
        let aggregate = match built {
            Ok(aggregate) => aggregate,
            Err(e) => return Err(self.fail(e)),
        };

        self.projects = graph.projects;
        self.state = match aggregate {
            Some(aggregate) => {
                info!(
                    source = self.source.source_type(),
                    project = %aggregate.project().id,
                    documents = aggregate.document_count(),
                    "Project loaded"
                );
                LoadState::Ready(aggregate)
            }
            None => {
                info!(source = self.source.source_type(), "No projects available");
                LoadState::Empty
            }
        };

        Ok(self.project())
    }

    fn fail(&mut self, err: AppError) -> AppError {
        error!(source = self.source.source_type(), error = %err, "Project load failed");
        self.projects.clear();
        self.state = LoadState::Failed(err.clone());
        err
    }

    /// Insert a new project and reload, making it the active one.
    ///
    /// The name is trimmed and must not be empty. When the insert fails the
    /// store keeps its previous state.
    pub async fn create_project(&mut self, name: &str) -> AppResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Project name must not be empty"));
        }

        self.source
            .insert_project(&CreateProject {
                name: name.to_string(),
            })
            .await?;
        info!(name, "Project created");

        self.load().await?;
        Ok(())
    }

    /// Current load state.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// The loaded aggregate, if any.
    pub fn aggregate(&self) -> Option<&ProjectAggregate> {
        match &self.state {
            LoadState::Ready(aggregate) => Some(aggregate),
            _ => None,
        }
    }

    /// The active project, if loaded.
    pub fn project(&self) -> Option<&Project> {
        self.aggregate().map(ProjectAggregate::project)
    }

    /// Project summaries from the last load; the head is the active project.
    pub fn projects(&self) -> &[ProjectSummary] {
        &self.projects
    }

    /// Look up a folder by id.
    pub fn get_folder(&self, id: &str) -> Option<&Folder> {
        self.aggregate()?.get_folder(id)
    }

    /// Look up a section by id.
    pub fn get_section(&self, id: &str) -> Option<&Section> {
        self.aggregate()?.get_section(id)
    }

    /// Look up a document by id.
    pub fn get_document(&self, id: &str) -> Option<&Document> {
        self.aggregate()?.get_document(id)
    }

    /// Documents of a folder in display order; empty when unknown.
    pub fn get_folder_documents(&self, id: &str) -> &[Document] {
        self.aggregate()
            .map(|a| a.get_folder_documents(id))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use synapse_core::error::ErrorKind;

    use super::*;
    use crate::source::fixture::{FixtureSource, fixture_project};
    use crate::source::unconfigured::UnconfiguredSource;
    use crate::source::ProjectGraph;

    /// Source whose inserts always fail.
    #[derive(Debug)]
    struct ReadOnlySource;

    #[async_trait]
    impl ProjectSource for ReadOnlySource {
        fn source_type(&self) -> &str {
            "read-only"
        }

        async fn load_graph(&self) -> AppResult<ProjectGraph> {
            let project = fixture_project();
            Ok(ProjectGraph {
                projects: vec![project.summary()],
                active: Some(project),
            })
        }

        async fn insert_project(&self, _project: &CreateProject) -> AppResult<()> {
            Err(AppError::external("insert rejected"))
        }
    }

    #[tokio::test]
    async fn test_load_fixture() {
        let mut store = DataStore::new(Arc::new(FixtureSource::new()));
        assert!(matches!(store.state(), LoadState::Idle));

        let project = store.load().await.expect("load").expect("project");
        assert_eq!(project.id, "project-1");
        assert!(matches!(store.state(), LoadState::Ready(_)));
        assert!(!store.is_loading());
        assert_eq!(store.projects().len(), 1);
    }

    #[tokio::test]
    async fn test_lookups() {
        let mut store = DataStore::new(Arc::new(FixtureSource::new()));
        assert!(store.get_document("doc-km-ar").is_none());
        store.load().await.expect("load");

        assert_eq!(store.get_document("doc-km-ar").map(|d| d.name.as_str()), Some("КМ-АР.pdf"));
        assert_eq!(store.get_folder("folder-kzh-proekt").map(|f| f.document_count()), Some(1));
        assert_eq!(store.get_folder_documents("folder-km-proekt").len(), 3);
        assert!(store.get_folder_documents("missing").is_empty());
        assert!(store.get_section("section-km").is_some());
    }

    #[tokio::test]
    async fn test_empty_backend() {
        let mut store = DataStore::new(Arc::new(FixtureSource::with_projects(Vec::new())));
        assert!(store.load().await.expect("load").is_none());
        assert!(matches!(store.state(), LoadState::Empty));
    }

    #[tokio::test]
    async fn test_failed_load() {
        let mut store = DataStore::new(Arc::new(UnconfiguredSource));
        let err = store.load().await.unwrap_err();
        assert!(err.is(ErrorKind::Configuration));
        match store.state() {
            LoadState::Failed(e) => assert_eq!(e.message, "Backend not configured"),
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_project_becomes_active() {
        let mut store = DataStore::new(Arc::new(FixtureSource::new()));
        store.load().await.expect("load");
        store.create_project("  Warehouse ").await.expect("create");

        assert_eq!(store.projects()[0].name, "Warehouse");
        assert_eq!(store.project().map(|p| p.name.as_str()), Some("Warehouse"));
        assert_eq!(store.projects().len(), 2);
    }

    #[tokio::test]
    async fn test_create_project_rejects_blank_name() {
        let mut store = DataStore::new(Arc::new(FixtureSource::new()));
        let err = store.create_project("   ").await.unwrap_err();
        assert!(err.is(ErrorKind::Validation));
        assert!(matches!(store.state(), LoadState::Idle));
    }

    #[tokio::test]
    async fn test_failed_insert_leaves_state() {
        let mut store = DataStore::new(Arc::new(ReadOnlySource));
        store.load().await.expect("load");

        let err = store.create_project("Warehouse").await.unwrap_err();
        assert!(err.is(ErrorKind::ExternalService));
        assert_eq!(store.project().map(|p| p.id.as_str()), Some("project-1"));
        assert_eq!(store.projects().len(), 1);
    }
}
