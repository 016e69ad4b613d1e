//! Virtual folder derivation.
//!
//! The hosted schema stores documents directly under sections. The
//! aggregate is always folder-mediated, so each section's documents are
//! grouped into one synthesized folder whose id is `folder-<sectionId>`.
//! The id depends only on the section id and is stable across reloads.

use synapse_core::types::SectionId;
use synapse_entity::document::Document;
use synapse_entity::folder::Folder;

/// Name of a virtual folder; the explorer translates it through the locale.
pub const VIRTUAL_FOLDER_NAME: &str = "Documents";

/// Group a section's flat document list into its display folders.
///
/// Always yields exactly one virtual folder, even for an empty section, and
/// points every document's `folder_id` and `section_id` at it.
pub fn derive_folders(section_id: &SectionId, documents: Vec<Document>) -> Vec<Folder> {
    let folder_id = Folder::virtual_id(section_id);
    let documents = documents
        .into_iter()
        .map(|mut doc| {
            doc.folder_id = folder_id.clone();
            doc.section_id = section_id.clone();
            doc
        })
        .collect();

    vec![Folder {
        id: folder_id,
        name: VIRTUAL_FOLDER_NAME.to_string(),
        section_id: section_id.clone(),
        documents,
        is_virtual: true,
    }]
}
