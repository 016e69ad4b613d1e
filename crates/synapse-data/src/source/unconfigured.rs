//! Stand-in source for a backend without credentials.

use async_trait::async_trait;

use synapse_core::error::AppError;
use synapse_core::result::AppResult;
use synapse_entity::project::CreateProject;

use super::{ProjectGraph, ProjectSource};

/// Message carried by every failure of the stand-in.
pub const NOT_CONFIGURED: &str = "Backend not configured";

/// Source whose every operation fails with [`NOT_CONFIGURED`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredSource;

#[async_trait]
impl ProjectSource for UnconfiguredSource {
    fn source_type(&self) -> &str {
        "unconfigured"
    }

    async fn load_graph(&self) -> AppResult<ProjectGraph> {
        Err(AppError::configuration(NOT_CONFIGURED))
    }

    async fn insert_project(&self, _project: &CreateProject) -> AppResult<()> {
        Err(AppError::configuration(NOT_CONFIGURED))
    }
}
