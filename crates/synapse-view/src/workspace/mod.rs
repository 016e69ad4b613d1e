//! Central workspace pane.
//!
//! [`route`] maps the current selection to what the pane shows:
//!
//! | Selection | View |
//! |-----------|------|
//! | nothing | [`WorkspaceView::Empty`] with [`SELECT_TO_BEGIN`] |
//! | folder | [`WorkspaceView::DocumentGrid`], or [`WorkspaceView::EmptyFolder`] |
//! | document | [`WorkspaceView::Detail`], or `Empty` with [`DOCUMENT_NOT_FOUND`] |
//! | project, section | `Empty` with [`SELECT_TO_VIEW`] |

mod card;
mod detail;
mod format;
mod render;

use synapse_data::DataStore;
use synapse_entity::NodeKind;

use crate::locale::Locale;
use crate::navigation::NavigationState;

pub use card::{DocumentCard, FileIcon};
pub use detail::{BomRow, BomTable, DocumentDetail, MetadataView, NO_METADATA};
pub use render::render_view;

/// Shown when nothing is selected.
pub const SELECT_TO_BEGIN: &str = "Select a folder or document to begin";
/// Shown for a folder without documents.
pub const NO_DOCUMENTS: &str = "No documents in this folder";
/// Shown when the selected document is not in the store.
pub const DOCUMENT_NOT_FOUND: &str = "Document not found";
/// Shown when a project or section is selected.
pub const SELECT_TO_VIEW: &str = "Select a folder or document to view its contents";

/// What the workspace pane displays.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkspaceView {
    /// Placeholder with a message.
    Empty { message: String },
    /// A folder without documents.
    EmptyFolder { folder_id: String },
    /// Cards for a folder's documents, in folder order.
    DocumentGrid {
        folder_id: String,
        cards: Vec<DocumentCard>,
    },
    /// A single document.
    Detail(DocumentDetail),
}

impl WorkspaceView {
    fn empty(message: &str) -> Self {
        Self::Empty {
            message: message.to_string(),
        }
    }
}

/// Route the selection to a view.
pub fn route(nav: &NavigationState, store: &DataStore, locale: &Locale) -> WorkspaceView {
    route_or(nav, store, locale, SELECT_TO_BEGIN)
}

/// Like [`route`], with a custom message for the nothing-selected state.
pub fn route_or(
    nav: &NavigationState,
    store: &DataStore,
    locale: &Locale,
    empty_message: &str,
) -> WorkspaceView {
    let Some(selection) = nav.selection() else {
        return WorkspaceView::empty(empty_message);
    };

    match selection.kind {
        NodeKind::Folder => {
            let documents = store.get_folder_documents(&selection.id);
            if documents.is_empty() {
                return WorkspaceView::EmptyFolder {
                    folder_id: selection.id.clone(),
                };
            }
            WorkspaceView::DocumentGrid {
                folder_id: selection.id.clone(),
                cards: documents
                    .iter()
                    .map(|doc| DocumentCard::new(doc, locale, nav.is_selected(doc.id.as_str())))
                    .collect(),
            }
        }
        NodeKind::Document => match store.get_document(&selection.id) {
            Some(doc) => WorkspaceView::Detail(DocumentDetail::new(doc, locale)),
            None => WorkspaceView::empty(DOCUMENT_NOT_FOUND),
        },
        NodeKind::Project | NodeKind::Section => WorkspaceView::empty(SELECT_TO_VIEW),
    }
}
