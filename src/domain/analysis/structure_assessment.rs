//! Structure assessment - narrative notes on how the structure dials fit together.

use serde::{Deserialize, Serialize};

use crate::domain::model::{StructureElement, StructureType};

/// How the structure reads, as an ordered list of notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureAssessment {
    pub notes: Vec<String>,
}

impl StructureAssessment {
    /// Assesses type against centralization, then formalization and complexity.
    pub fn of(structure: &StructureElement) -> Self {
        let centralization = structure.centralization.value();
        let formalization = structure.formalization.value();
        let complexity = structure.complexity.value();
        let mut notes = Vec::new();

        match structure.structure_type {
            StructureType::Organic => {
                notes.push(
                    "Organic structures are adaptable and work well for innovation-focused strategies.",
                );
                if centralization > 0.6 {
                    notes.push(
                        "However, your high centralization may limit the benefits of an organic structure.",
                    );
                }
            }
            StructureType::Mechanistic => {
                notes.push(
                    "Mechanistic structures provide efficiency and clear control, supporting operational excellence.",
                );
                if centralization < 0.4 {
                    notes.push("Your low centralization seems at odds with a mechanistic structure.");
                }
            }
            StructureType::Hybrid => notes.push(
                "Hybrid structures can be versatile but may create internal tensions if not carefully managed.",
            ),
        }

        if formalization > 0.7 {
            notes.push(
                "High formalization works well for stable environments but may hinder adaptation to change.",
            );
        } else if formalization < 0.3 {
            notes.push("Low formalization enables flexibility but may create consistency challenges.");
        }

        if complexity > 0.7 {
            notes.push(
                "Complex structures require sophisticated management systems and clear communication channels.",
            );
        } else if complexity < 0.3 {
            notes.push("Simple structures enable quick decision-making but may limit specialization.");
        }

        Self {
            notes: notes.into_iter().map(String::from).collect(),
        }
    }

    /// The notes joined into one paragraph.
    pub fn summary(&self) -> String {
        self.notes.join(" ")
    }
}
