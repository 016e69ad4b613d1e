//! Show command: what the workspace displays for a node.

use clap::Args;

use crate::output::{self, OutputFormat};
use synapse_core::config::AppConfig;
use synapse_core::error::AppError;
use synapse_data::{DataStore, LoadState};
use synapse_entity::NodeKind;
use synapse_view::locale::Locale;
use synapse_view::navigation::NavigationState;
use synapse_view::tree::TreeNode;
use synapse_view::workspace::{self, WorkspaceView};

/// Arguments for the show command
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Node id (project, section, folder or document)
    pub id: String,
}

/// Execute the show command
pub async fn execute(
    args: &ShowArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let store = super::open_store(config).await?;
    if let LoadState::Failed(err) = store.state() {
        return Err(err.clone());
    }
    let locale = super::preferences(config).locale();
    let kind = kind_of(&store, &args.id);

    match format {
        OutputFormat::Table => {
            let header = describe(&store, kind, &args.id, &locale);
            if !header.is_empty() {
                println!("{}", locale.t(kind.label_key()));
                for (key, value) in &header {
                    output::print_kv(key, value);
                }
                println!();
            }
            print!("{}", workspace::render_view(&view_for(&store, kind, &args.id, &locale)));
        }
        OutputFormat::Json => print_entity(&store, kind, &args.id)?,
    }
    Ok(())
}

/// Kind of the node with `id`. Ids missing from the tree are treated as
/// documents so the workspace reports them as not found.
fn kind_of(store: &DataStore, id: &str) -> NodeKind {
    store
        .project()
        .map(TreeNode::from_project)
        .and_then(|root| root.find(id).map(|node| node.kind))
        .unwrap_or(NodeKind::Document)
}

/// Route a selection of `id` to its workspace view.
fn view_for(store: &DataStore, kind: NodeKind, id: &str, locale: &Locale) -> WorkspaceView {
    let mut nav = NavigationState::with_expanded(Vec::<String>::new());
    nav.select_node(id, kind);
    workspace::route(&nav, store, locale)
}

/// Header fields for projects and sections, which have no workspace view.
fn describe(store: &DataStore, kind: NodeKind, id: &str, locale: &Locale) -> Vec<(&'static str, String)> {
    match kind {
        NodeKind::Project => store
            .project()
            .filter(|p| p.id == id)
            .map(|p| {
                vec![
                    ("Name", p.name.clone()),
                    ("Address", p.address.clone().unwrap_or_default()),
                    ("Client", p.client.clone().unwrap_or_default()),
                    ("Sections", p.sections.len().to_string()),
                ]
            })
            .unwrap_or_default(),
        NodeKind::Section => store
            .get_section(id)
            .map(|s| {
                vec![
                    ("Name", s.name.clone()),
                    ("Code", locale.t(&s.code).to_string()),
                    (
                        "Category",
                        s.category().map(|c| c.description()).unwrap_or("other").to_string(),
                    ),
                    ("Folders", s.folders.len().to_string()),
                    ("Documents", s.document_count().to_string()),
                ]
            })
            .unwrap_or_default(),
        NodeKind::Folder | NodeKind::Document => Vec::new(),
    }
}

fn print_entity(store: &DataStore, kind: NodeKind, id: &str) -> Result<(), AppError> {
    let missing = || AppError::not_found(format!("{} '{id}' not found", kind.label_key()));
    match kind {
        NodeKind::Project => output::print_json(
            store.project().filter(|p| p.id == id).ok_or_else(missing)?,
            "{}",
        ),
        NodeKind::Section => output::print_json(store.get_section(id).ok_or_else(missing)?, "{}"),
        NodeKind::Folder => output::print_json(store.get_folder(id).ok_or_else(missing)?, "{}"),
        NodeKind::Document => {
            output::print_json(store.get_document(id).ok_or_else(missing)?, "{}")
        }
    }
    Ok(())
}
