//! Bill-of-materials entries.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// One line of a bill of materials.
///
/// The total weight is always derived from `weight * quantity`. A
/// `totalWeight` field present in incoming JSON is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BomEntry {
    /// Item number in the list.
    pub position: String,
    /// Component designation.
    pub name: String,
    /// Unit weight in kilograms.
    pub weight: f64,
    /// Count.
    pub quantity: u32,
}

impl BomEntry {
    /// Create an entry.
    pub fn new(position: impl Into<String>, name: impl Into<String>, weight: f64, quantity: u32) -> Self {
        Self {
            position: position.into(),
            name: name.into(),
            weight,
            quantity,
        }
    }

    /// Weight of all units of this entry in kilograms.
    pub fn total_weight(&self) -> f64 {
        self.weight * f64::from(self.quantity)
    }
}

impl Serialize for BomEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BomEntry", 5)?;
        state.serialize_field("position", &self.position)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("weight", &self.weight)?;
        state.serialize_field("quantity", &self.quantity)?;
        state.serialize_field("totalWeight", &self.total_weight())?;
        state.end()
    }
}
