//! Document detail view model.

use synapse_entity::document::Document;
use synapse_entity::metadata::{AxisDirection, DocumentMetadata};

use super::format;
use crate::badge::StatusLabel;
use crate::locale::Locale;

/// Shown in place of the metadata cards when a document has none.
pub const NO_METADATA: &str = "No metadata available for this document.";

/// Full view of one document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentDetail {
    pub id: String,
    pub name: String,
    /// Upload timestamp, e.g. `December 20, 2024 at 10:30 AM`.
    pub uploaded: String,
    pub status: StatusLabel,
    /// `None` renders [`NO_METADATA`].
    pub metadata: Option<MetadataView>,
}

/// Formatted extracted metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataView {
    pub customer: String,
    pub object: String,
    pub address: String,
    /// Comma-separated horizontal axis labels.
    pub horizontal_axes: String,
    /// Comma-separated vertical axis labels.
    pub vertical_axes: String,
    /// Comma-separated signed elevation marks.
    pub elevation_marks: String,
    /// Absent when the bill of materials is empty.
    pub bill_of_materials: Option<BomTable>,
}

/// Bill-of-materials table with its grand total.
#[derive(Debug, Clone, PartialEq)]
pub struct BomTable {
    pub rows: Vec<BomRow>,
    /// Sum of row totals, one decimal.
    pub total_weight: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BomRow {
    pub position: String,
    pub name: String,
    pub weight: String,
    pub quantity: u32,
    pub total: String,
}

impl DocumentDetail {
    pub fn new(doc: &Document, locale: &Locale) -> Self {
        Self {
            id: doc.id.to_string(),
            name: doc.name.clone(),
            uploaded: format::long_date(&doc.upload_date),
            status: StatusLabel::new(doc.status, locale),
            metadata: doc.metadata.as_ref().map(MetadataView::new),
        }
    }
}

impl MetadataView {
    fn new(meta: &DocumentMetadata) -> Self {
        let axes = |direction| {
            meta.axes_in(direction)
                .map(|a| a.label.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        let bill_of_materials = (!meta.bill_of_materials.is_empty()).then(|| BomTable {
            rows: meta
                .bill_of_materials
                .iter()
                .map(|entry| BomRow {
                    position: entry.position.clone(),
                    name: entry.name.clone(),
                    weight: format::weight(entry.weight),
                    quantity: entry.quantity,
                    total: format::weight(entry.total_weight()),
                })
                .collect(),
            total_weight: format::weight(meta.total_weight()),
        });

        Self {
            customer: meta.customer.clone(),
            object: meta.project_object.clone(),
            address: meta.address.clone(),
            horizontal_axes: axes(AxisDirection::Horizontal),
            vertical_axes: axes(AxisDirection::Vertical),
            elevation_marks: meta
                .elevation_marks
                .iter()
                .map(|m| format::elevation(*m))
                .collect::<Vec<_>>()
                .join(", "),
            bill_of_materials,
        }
    }
}
