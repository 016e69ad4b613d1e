//! Metadata extracted from engineering documents.

pub mod axis;
pub mod bom;

use serde::{Deserialize, Serialize};

pub use axis::{AxisData, AxisDirection};
pub use bom::BomEntry;

/// Information extracted from a drawing set by document analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    /// Client organization.
    pub customer: String,
    /// Construction object name.
    pub project_object: String,
    /// Physical location.
    pub address: String,
    /// Grid axes.
    #[serde(default)]
    pub axes: Vec<AxisData>,
    /// Height references in meters.
    #[serde(default)]
    pub elevation_marks: Vec<f64>,
    /// Materials list.
    #[serde(default)]
    pub bill_of_materials: Vec<BomEntry>,
}

impl DocumentMetadata {
    /// Axes running in the given direction, in source order.
    pub fn axes_in(&self, direction: AxisDirection) -> impl Iterator<Item = &AxisData> + '_ {
        self.axes.iter().filter(move |a| a.direction == direction)
    }

    /// Sum of every bill-of-materials entry total, in kilograms.
    pub fn total_weight(&self) -> f64 {
        self.bill_of_materials.iter().map(BomEntry::total_weight).sum()
    }
}
