//! Shared test helpers for integration tests.

use std::sync::Arc;

use synapse_data::DataStore;
use synapse_data::source::{FixtureSource, ProjectSource};
use synapse_entity::project::Project;
use synapse_view::locale::{Language, Locale};
use synapse_view::navigation::NavigationState;
use synapse_view::shell::ShellFrame;

/// One shell session: the three state containers.
pub struct TestShell {
    pub store: DataStore,
    pub nav: NavigationState,
    pub locale: Locale,
}

impl TestShell {
    /// Session over the built-in fixture, in English.
    pub async fn fixture() -> Self {
        Self::with_source(Arc::new(FixtureSource::new())).await
    }

    /// Session over the given projects, head active.
    pub async fn with_projects(projects: Vec<Project>) -> Self {
        Self::with_source(Arc::new(FixtureSource::with_projects(projects))).await
    }

    /// Session over any source; load failures stay in the store state.
    pub async fn with_source(source: Arc<dyn ProjectSource>) -> Self {
        let mut store = DataStore::new(source);
        let _ = store.load().await;
        Self {
            store,
            nav: NavigationState::new(),
            locale: Locale::new(Language::En),
        }
    }

    /// Render the current frame.
    pub fn frame(&self, rail: bool) -> String {
        ShellFrame::compose(&self.store, &self.nav, &self.locale, rail).render(&self.locale)
    }
}
