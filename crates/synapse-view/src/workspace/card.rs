//! Document cards of the folder grid.

use synapse_entity::document::{Document, DocumentType};

use super::format;
use crate::badge::StatusLabel;
use crate::locale::Locale;

/// File icon picked from the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileIcon {
    Text,
    Spreadsheet,
    Image,
}

impl FileIcon {
    pub fn for_extension(ext: Option<&str>) -> Self {
        match ext {
            Some("xlsx" | "xls") => Self::Spreadsheet,
            Some("png" | "jpg" | "jpeg") => Self::Image,
            _ => Self::Text,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Text => "📄",
            Self::Spreadsheet => "📊",
            Self::Image => "🖼",
        }
    }
}

/// Summary card of one document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentCard {
    pub id: String,
    pub name: String,
    pub icon: FileIcon,
    /// Upload date, e.g. `Dec 20, 2024`.
    pub date: String,
    /// Customer and object, when metadata exists.
    pub preview: Option<(String, String)>,
    pub status: StatusLabel,
    pub is_template: bool,
    pub selected: bool,
}

impl DocumentCard {
    pub fn new(doc: &Document, locale: &Locale, selected: bool) -> Self {
        Self {
            id: doc.id.to_string(),
            name: doc.name.clone(),
            icon: FileIcon::for_extension(doc.extension().as_deref()),
            date: format::short_date(&doc.upload_date),
            preview: doc
                .metadata
                .as_ref()
                .map(|m| (m.customer.clone(), m.project_object.clone())),
            status: StatusLabel::new(doc.status, locale),
            is_template: doc.doc_type == DocumentType::Template,
            selected,
        }
    }
}
