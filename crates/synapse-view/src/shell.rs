//! Three-pane shell layout: toolbar, explorer, workspace, AI console.

use synapse_data::{DataStore, LoadState};

use crate::locale::Locale;
use crate::navigation::NavigationState;
use crate::tree::{TreeNode, TreeRow, render_rows, visible_rows};
use crate::workspace::{self, WorkspaceView};

/// Placeholder text of the AI console pane.
pub const AI_CONSOLE_PLACEHOLDER: &str = "AI Console: document analysis is not connected yet";

/// One toolbar action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarButton {
    /// Localization key of the caption.
    pub label: &'static str,
    /// Localization key of the tooltip.
    pub tooltip: &'static str,
    pub enabled: bool,
}

/// Toolbar actions in display order. Only project creation is wired.
pub fn toolbar() -> [ToolbarButton; 4] {
    [
        ToolbarButton {
            label: "Create Project",
            tooltip: "Create new project",
            enabled: true,
        },
        ToolbarButton {
            label: "Upload",
            tooltip: "Upload documents",
            enabled: false,
        },
        ToolbarButton {
            label: "Analyze",
            tooltip: "Analyze documents with AI",
            enabled: false,
        },
        ToolbarButton {
            label: "Generate",
            tooltip: "Generate reports from templates",
            enabled: false,
        },
    ]
}

/// Content of the explorer pane.
#[derive(Debug, Clone, PartialEq)]
pub enum ExplorerPane {
    Loading,
    NoProject,
    /// The last load failed with this message.
    Failed(String),
    Tree(Vec<TreeRow>),
}

impl ExplorerPane {
    /// Derive the pane from the store's load state.
    pub fn new(store: &DataStore, nav: &NavigationState, locale: &Locale, rail: bool) -> Self {
        match store.state() {
            LoadState::Idle | LoadState::Loading => Self::Loading,
            LoadState::Empty => Self::NoProject,
            LoadState::Failed(err) => Self::Failed(err.message.clone()),
            LoadState::Ready(aggregate) => {
                let root = TreeNode::from_project(aggregate.project());
                Self::Tree(visible_rows(&root, nav, locale, rail))
            }
        }
    }

    fn render(&self, locale: &Locale) -> String {
        match self {
            Self::Loading => format!("{}\n", locale.t("Loading project...")),
            Self::NoProject => format!("{}\n", locale.t("No project loaded")),
            Self::Failed(message) => format!("{}\n{message}\n", locale.t("No project loaded")),
            Self::Tree(rows) => render_rows(rows),
        }
    }
}

/// One composed frame of the shell.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellFrame {
    pub toolbar: [ToolbarButton; 4],
    pub explorer: ExplorerPane,
    pub explorer_collapsed: bool,
    pub workspace: WorkspaceView,
}

impl ShellFrame {
    /// Compose a frame from the three state containers.
    pub fn compose(
        store: &DataStore,
        nav: &NavigationState,
        locale: &Locale,
        explorer_collapsed: bool,
    ) -> Self {
        Self {
            toolbar: toolbar(),
            explorer: ExplorerPane::new(store, nav, locale, explorer_collapsed),
            explorer_collapsed,
            workspace: workspace::route(nav, store, locale),
        }
    }

    /// Render the frame as text, pane by pane.
    pub fn render(&self, locale: &Locale) -> String {
        let mut out = String::new();

        let buttons: Vec<String> = self
            .toolbar
            .iter()
            .map(|b| {
                let label = locale.t(b.label);
                if b.enabled {
                    format!("[{label}]")
                } else {
                    format!("({label})")
                }
            })
            .collect();
        let rule = format!("{}\n", "─".repeat(60));

        out.push_str(&buttons.join(" "));
        out.push('\n');
        out.push_str(&rule);

        out.push_str(&self.explorer.render(locale));
        out.push_str(&rule);

        out.push_str(&workspace::render_view(&self.workspace));
        out.push_str(&rule);

        out.push_str(AI_CONSOLE_PLACEHOLDER);
        out.push('\n');
        out
    }
}
