//! Immutable, validated project aggregate with id indexes.

use std::collections::{HashMap, HashSet};

use synapse_core::error::AppError;
use synapse_core::result::AppResult;
use synapse_core::types::DocumentId;
use synapse_entity::document::Document;
use synapse_entity::folder::Folder;
use synapse_entity::project::Project;
use synapse_entity::section::Section;

/// Position of a document inside the project tree: (section, folder, document).
type DocumentSlot = (usize, usize, usize);

/// The active project, checked for referential integrity and indexed for
/// constant-time document lookup.
///
/// Built once per load and never mutated; a reload replaces it wholesale.
#[derive(Debug, Clone)]
pub struct ProjectAggregate {
    project: Project,
    documents: HashMap<DocumentId, DocumentSlot>,
}

impl ProjectAggregate {
    /// Validate a project tree and build its document index.
    ///
    /// Fails when an id appears twice anywhere in the subtree or when a
    /// child's owner id does not name the node that contains it.
    pub fn build(project: Project) -> AppResult<Self> {
        let documents = index(&project)?;
        Ok(Self { project, documents })
    }

    /// The project tree.
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Number of indexed documents.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Look up a document by id.
    pub fn get_document(&self, id: &str) -> Option<&Document> {
        let &(si, fi, di) = self.documents.get(id)?;
        self.project
            .sections
            .get(si)?
            .folders
            .get(fi)?
            .documents
            .get(di)
    }

    /// Look up a section by id.
    pub fn get_section(&self, id: &str) -> Option<&Section> {
        self.project.sections.iter().find(|s| s.id == id)
    }

    /// Look up a folder by id, scanning every section.
    pub fn get_folder(&self, id: &str) -> Option<&Folder> {
        self.project
            .sections
            .iter()
            .flat_map(|s| s.folders.iter())
            .find(|f| f.id == id)
    }

    /// Documents of a folder in display order; empty when the folder is unknown.
    pub fn get_folder_documents(&self, id: &str) -> &[Document] {
        self.get_folder(id)
            .map(|f| f.documents.as_slice())
            .unwrap_or_default()
    }
}

/// Check ownership and id uniqueness, returning the document position index.
fn index(project: &Project) -> AppResult<HashMap<DocumentId, DocumentSlot>> {
    let mut seen = HashSet::new();
    claim(&mut seen, project.id.as_str())?;
    let mut documents = HashMap::new();

    for (si, section) in project.sections.iter().enumerate() {
        claim(&mut seen, section.id.as_str())?;
        if section.project_id != project.id {
            return Err(AppError::validation(format!(
                "Section '{}' references project '{}' but belongs to '{}'",
                section.id, section.project_id, project.id
            )));
        }

        for (fi, folder) in section.folders.iter().enumerate() {
            claim(&mut seen, folder.id.as_str())?;
            if folder.section_id != section.id {
                return Err(AppError::validation(format!(
                    "Folder '{}' references section '{}' but belongs to '{}'",
                    folder.id, folder.section_id, section.id
                )));
            }

            for (di, doc) in folder.documents.iter().enumerate() {
                claim(&mut seen, doc.id.as_str())?;
                if doc.folder_id != folder.id || doc.section_id != section.id {
                    return Err(AppError::validation(format!(
                        "Document '{}' references folder '{}' in section '{}' but belongs to '{}' in '{}'",
                        doc.id, doc.folder_id, doc.section_id, folder.id, section.id
                    )));
                }
                documents.insert(doc.id.clone(), (si, fi, di));
            }
        }
    }

    Ok(documents)
}

fn claim<'a>(seen: &mut HashSet<&'a str>, id: &'a str) -> AppResult<()> {
    if !seen.insert(id) {
        return Err(AppError::validation(format!("Duplicate node id '{id}'")));
    }
    Ok(())
}
