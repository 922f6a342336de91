//! Structure element: how the organization is arranged.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Fraction;

/// Broad organizational form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StructureType {
    Organic,
    Mechanistic,
    #[default]
    Hybrid,
}

impl fmt::Display for StructureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StructureType::Organic => "Organic",
            StructureType::Mechanistic => "Mechanistic",
            StructureType::Hybrid => "Hybrid",
        };
        write!(f, "{}", s)
    }
}

/// The Structure element of the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureElement {
    #[serde(rename = "type")]
    pub structure_type: StructureType,
    pub centralization: Fraction,
    pub formalization: Fraction,
    pub complexity: Fraction,
    pub alignment_score: Fraction,
}

impl Default for StructureElement {
    fn default() -> Self {
        Self {
            structure_type: StructureType::Hybrid,
            centralization: Fraction::HALF,
            formalization: Fraction::HALF,
            complexity: Fraction::HALF,
            alignment_score: Fraction::ZERO,
        }
    }
}
