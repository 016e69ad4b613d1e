//! Explorer tree command.

use clap::Args;
use serde::Serialize;

use crate::output::{self, OutputFormat};
use synapse_core::config::AppConfig;
use synapse_core::error::AppError;
use synapse_data::{DataStore, LoadState};
use synapse_view::locale::Locale;
use synapse_view::navigation::NavigationState;
use synapse_view::tree::{TreeInteraction, TreeNode, TreeRow, render_rows, visible_rows};

/// Arguments for the tree command
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Expand an extra node (repeatable)
    #[arg(short, long = "expand", value_name = "ID")]
    pub expand: Vec<String>,
    /// Expand every node
    #[arg(short, long)]
    pub all: bool,
    /// Rail mode: icons only
    #[arg(short, long)]
    pub rail: bool,
    /// Mark a node as selected
    #[arg(short, long, value_name = "ID")]
    pub select: Option<String>,
}

/// JSON shape of one visible row
#[derive(Debug, Serialize)]
struct RowOutput {
    id: String,
    kind: &'static str,
    depth: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    documents: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    expanded: Option<bool>,
    selected: bool,
}

impl From<&TreeRow> for RowOutput {
    fn from(row: &TreeRow) -> Self {
        Self {
            id: row.id.clone(),
            kind: row.kind.as_str(),
            depth: row.depth,
            label: row.label.clone(),
            documents: row.document_count,
            status: row.badge.as_ref().map(|b| b.glyph.clone()),
            expanded: row
                .chevron
                .map(|c| c == synapse_view::tree::Chevron::Expanded),
            selected: row.selected,
        }
    }
}

/// Execute the tree command
pub async fn execute(
    args: &TreeArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let store = super::open_store(config).await?;
    let locale = super::preferences(config).locale();
    let rail = args.rail || config.ui.explorer_collapsed;

    let Some(rows) = rows_for(&store, config, args, &locale, rail)? else {
        println!("{}", locale.t("No project loaded"));
        return Ok(());
    };

    match format {
        OutputFormat::Table => print!("{}", render_rows(&rows)),
        OutputFormat::Json => {
            let out: Vec<RowOutput> = rows.iter().map(RowOutput::from).collect();
            output::print_json(&out, "[]");
        }
    }
    Ok(())
}

/// Visible rows for the loaded project, `None` when the backend has none.
fn rows_for(
    store: &DataStore,
    config: &AppConfig,
    args: &TreeArgs,
    locale: &Locale,
    rail: bool,
) -> Result<Option<Vec<TreeRow>>, AppError> {
    let project = match store.state() {
        LoadState::Ready(aggregate) => aggregate.project(),
        LoadState::Failed(err) => return Err(err.clone()),
        _ => return Ok(None),
    };

    let root = TreeNode::from_project(project);
    let mut nav = NavigationState::from_config(&config.ui);

    let mut targets: Vec<&str> = args.expand.iter().map(String::as_str).collect();
    if args.all {
        collect_containers(&root, &mut targets);
    }
    for id in targets {
        if root.find(id).is_none() {
            return Err(AppError::not_found(format!("Node '{id}' is not in the tree")));
        }
        if !nav.is_node_expanded(id) {
            nav.toggle_node_expansion(id);
        }
    }

    if let Some(id) = &args.select {
        let tree = TreeInteraction::new(&root);
        let node = root
            .find(id)
            .ok_or_else(|| AppError::not_found(format!("Node '{id}' is not in the tree")))?;
        nav.select_node(node.id.as_str(), node.kind);
        // Reveal the selection without collapsing anything already open.
        if node.is_expandable() && !nav.is_node_expanded(id) {
            tree.click_chevron(&mut nav, id)?;
        }
    }

    Ok(Some(visible_rows(&root, &nav, locale, rail)))
}

fn collect_containers<'a>(node: &'a TreeNode, out: &mut Vec<&'a str>) {
    if node.is_expandable() {
        out.push(&node.id);
    }
    for child in &node.children {
        collect_containers(child, out);
    }
}
