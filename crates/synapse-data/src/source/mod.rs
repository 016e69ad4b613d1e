//! Project source trait and backend selection.

pub mod fixture;
pub mod remote;
pub mod rows;
pub mod unconfigured;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use synapse_core::config::backend::{BackendConfig, SourceKind};
use synapse_core::result::AppResult;
use synapse_entity::project::{CreateProject, Project, ProjectSummary};

pub use fixture::FixtureSource;
pub use remote::RemoteSource;
pub use unconfigured::UnconfiguredSource;

/// Everything one load produces.
#[derive(Debug, Clone, Default)]
pub struct ProjectGraph {
    /// All projects, most recently created first.
    pub projects: Vec<ProjectSummary>,
    /// The active project (the head of `projects`) with its full subtree.
    pub active: Option<Project>,
}

/// Trait for backends that supply the project graph.
///
/// Implementations exist for the built-in fixture, the hosted REST
/// backend, and a stand-in used when the backend has no credentials.
#[async_trait]
pub trait ProjectSource: Send + Sync + std::fmt::Debug + 'static {
    /// Return the source type name (e.g., "fixture", "remote").
    fn source_type(&self) -> &str;

    /// Fetch the project list and the active project's full subtree.
    async fn load_graph(&self) -> AppResult<ProjectGraph>;

    /// Insert one new project record.
    async fn insert_project(&self, project: &CreateProject) -> AppResult<()>;
}

/// Build the source selected by the backend configuration.
///
/// A remote backend without a URL or key yields an [`UnconfiguredSource`]
/// whose every operation fails, so callers follow their ordinary error path.
pub fn connect(config: &BackendConfig) -> AppResult<Arc<dyn ProjectSource>> {
    match config.source {
        SourceKind::Fixture => {
            info!("Using built-in fixture project source");
            Ok(Arc::new(FixtureSource::new()))
        }
        SourceKind::Remote => match config.credentials() {
            Some((url, key)) => {
                info!(url = %url, "Using remote project source");
                let source = RemoteSource::new(
                    url,
                    key,
                    config.timeout_seconds,
                    config.load_extracted_data,
                )?;
                Ok(Arc::new(source))
            }
            None => {
                warn!("Backend URL or key is not set; data operations will fail");
                Ok(Arc::new(UnconfiguredSource))
            }
        },
    }
}
