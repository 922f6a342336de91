//! The soft elements: shared values, skills, style and staff.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Fraction;

/// The Shared Values element of the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedValuesElement {
    pub values: Vec<String>,
    pub alignment_score: Fraction,
}

impl Default for SharedValuesElement {
    fn default() -> Self {
        Self {
            values: vec![
                "Integrity".to_string(),
                "Customer Focus".to_string(),
                "Excellence".to_string(),
            ],
            alignment_score: Fraction::ZERO,
        }
    }
}

/// The Skills element of the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsElement {
    pub core_competencies: Vec<String>,
    pub required_skills: Vec<String>,
    pub alignment_score: Fraction,
}

impl Default for SkillsElement {
    fn default() -> Self {
        Self {
            core_competencies: vec![
                "Industry Knowledge".to_string(),
                "Technical Expertise".to_string(),
            ],
            required_skills: vec![
                "Communication".to_string(),
                "Problem Solving".to_string(),
                "Teamwork".to_string(),
            ],
            alignment_score: Fraction::ZERO,
        }
    }
}

/// Dominant leadership style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadershipStyle {
    Transformational,
    Transactional,
    Democratic,
    Autocratic,
    #[serde(rename = "Laissez-Faire")]
    LaissezFaire,
    Servant,
}

impl fmt::Display for LeadershipStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LeadershipStyle::Transformational => "Transformational",
            LeadershipStyle::Transactional => "Transactional",
            LeadershipStyle::Democratic => "Democratic",
            LeadershipStyle::Autocratic => "Autocratic",
            LeadershipStyle::LaissezFaire => "Laissez-Faire",
            LeadershipStyle::Servant => "Servant",
        };
        write!(f, "{}", s)
    }
}

/// The Style element of the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleElement {
    pub leadership_style: LeadershipStyle,
    pub decision_making: String,
    pub alignment_score: Fraction,
}

impl Default for StyleElement {
    fn default() -> Self {
        Self {
            leadership_style: LeadershipStyle::Democratic,
            decision_making: "Consultative".to_string(),
            alignment_score: Fraction::ZERO,
        }
    }
}

/// The Staff element of the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffElement {
    pub composition: String,
    pub capabilities: String,
    pub change_readiness: Fraction,
    pub alignment_score: Fraction,
}

impl Default for StaffElement {
    fn default() -> Self {
        Self {
            composition: "Balanced mix of experience levels".to_string(),
            capabilities: "Adequate for current operations".to_string(),
            change_readiness: Fraction::new(0.6),
            alignment_score: Fraction::ZERO,
        }
    }
}
