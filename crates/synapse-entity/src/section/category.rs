//! Engineering discipline of a section.

use serde::{Deserialize, Serialize};

/// Discipline identified by a section code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionCategory {
    /// `КМ`: metal structures.
    #[serde(rename = "КМ")]
    MetalStructures,
    /// `КЖ`: reinforced concrete.
    #[serde(rename = "КЖ")]
    ReinforcedConcrete,
}

impl SectionCategory {
    /// Map a section code to its discipline, if it is a known one.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "КМ" => Some(Self::MetalStructures),
            "КЖ" => Some(Self::ReinforcedConcrete),
            _ => None,
        }
    }

    /// The section code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MetalStructures => "КМ",
            Self::ReinforcedConcrete => "КЖ",
        }
    }

    /// English description of the discipline.
    pub fn description(&self) -> &'static str {
        match self {
            Self::MetalStructures => "metal structures",
            Self::ReinforcedConcrete => "reinforced concrete",
        }
    }
}
