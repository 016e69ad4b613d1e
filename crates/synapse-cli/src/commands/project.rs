//! Project listing and creation commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use synapse_core::config::AppConfig;
use synapse_core::error::AppError;
use synapse_data::{DataStore, LoadState};
use synapse_entity::project::ProjectSummary;
use synapse_view::locale::Locale;

/// Arguments for project commands
#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Project subcommand
    #[command(subcommand)]
    pub command: ProjectCommand,
}

/// Project subcommands
#[derive(Debug, Subcommand)]
pub enum ProjectCommand {
    /// List projects, most recent first
    List,
    /// Create a project and make it the active one
    Create {
        /// Project name (will prompt if not provided)
        #[arg(short, long)]
        name: Option<String>,
    },
}

/// Project display row
#[derive(Debug, Serialize, Tabled)]
struct ProjectRow {
    /// Project ID
    id: String,
    /// Name
    name: String,
    /// Created at
    created_at: String,
    /// Whether this is the project the explorer shows
    active: bool,
}

fn rows(projects: &[ProjectSummary]) -> Vec<ProjectRow> {
    projects
        .iter()
        .enumerate()
        .map(|(i, p)| ProjectRow {
            id: p.id.to_string(),
            name: p.name.clone(),
            created_at: p
                .created_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
            active: i == 0,
        })
        .collect()
}

/// Execute project commands
pub async fn execute(
    args: &ProjectArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut store = super::open_store(config).await?;
    let locale = super::preferences(config).locale();

    match &args.command {
        ProjectCommand::List => {
            if let LoadState::Failed(err) = store.state() {
                return Err(err.clone());
            }
            output::print_list(&rows(store.projects()), format);
        }
        ProjectCommand::Create { name } => {
            let name = match name {
                Some(n) => n.clone(),
                None => dialoguer::Input::new()
                    .with_prompt(locale.t("Enter project name:"))
                    .interact_text()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let id = create(&mut store, &name, &locale).await?;
            output::print_success(&format!("Project '{}' created (id: {id})", name.trim()));
        }
    }
    Ok(())
}

/// Create the project and return the id of the new active project.
async fn create(store: &mut DataStore, name: &str, locale: &Locale) -> Result<String, AppError> {
    if let Err(e) = store.create_project(name).await {
        output::print_error(&format!(
            "{} {}",
            locale.t("Error creating project:"),
            e.message
        ));
        output::print_error(locale.t("Failed to create project. Please try again."));
        return Err(e);
    }
    store
        .project()
        .map(|p| p.id.to_string())
        .ok_or_else(|| AppError::internal("Created project was not loaded"))
}
