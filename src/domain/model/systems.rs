//! Systems element: the processes and procedures that run the business.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Fraction;

/// People-management processes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HrSystem {
    pub talent_acquisition: String,
    pub training_development: String,
    pub performance_management: String,
    pub compensation_benefits: String,
}

/// Performance management value that the staff-feedback tension rule looks for.
pub const ANNUAL_PERFORMANCE_REVIEWS: &str = "Annual performance reviews";

impl Default for HrSystem {
    fn default() -> Self {
        Self {
            talent_acquisition: "Traditional recruitment".to_string(),
            training_development: "Basic training programs".to_string(),
            performance_management: ANNUAL_PERFORMANCE_REVIEWS.to_string(),
            compensation_benefits: "Market-based compensation".to_string(),
        }
    }
}

/// The Systems element of the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemsElement {
    pub financial: String,
    pub operational: String,
    pub hr: HrSystem,
    pub information: String,
    pub alignment_score: Fraction,
}

impl Default for SystemsElement {
    fn default() -> Self {
        Self {
            financial: "Traditional budgeting and reporting".to_string(),
            operational: "Standard operating procedures".to_string(),
            hr: HrSystem::default(),
            information: "Legacy systems with some modern tools".to_string(),
            alignment_score: Fraction::ZERO,
        }
    }
}
