//! Grid axis data.

use serde::{Deserialize, Serialize};

/// Orientation of a grid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisDirection {
    /// Lettered axes.
    Horizontal,
    /// Numbered axes.
    Vertical,
}

/// One grid line of an engineering drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisData {
    /// Line orientation.
    pub direction: AxisDirection,
    /// Axis identifier (e.g. `А`, `1`).
    pub label: String,
    /// Coordinate in millimeters.
    pub position: f64,
}

impl AxisData {
    /// Create an axis.
    pub fn new(direction: AxisDirection, label: impl Into<String>, position: f64) -> Self {
        Self {
            direction,
            label: label.into(),
            position,
        }
    }
}
