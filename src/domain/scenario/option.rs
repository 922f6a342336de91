//! Choice options and the impacts they carry.
//!
//! Each option owns its impact list, so choosing an option identifies its
//! impacts directly.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{Fraction, OptionId, SevenSElement, ValidationError};
use crate::domain::model::ScoreChange;

/// Largest absolute delta a single impact may carry.
pub const MAX_IMPACT_DELTA: f64 = 1.0;

/// A signed adjustment to one element's alignment score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Impact {
    pub element: SevenSElement,
    #[serde(alias = "value")]
    pub delta: f64,
    #[serde(default)]
    pub description: String,
}

impl Impact {
    pub fn new(element: SevenSElement, delta: f64, description: impl Into<String>) -> Self {
        Self {
            element,
            delta,
            description: description.into(),
        }
    }

    /// Returns true for a strictly positive delta.
    pub fn is_positive(&self) -> bool {
        self.delta > 0.0
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if !self.delta.is_finite() || self.delta.abs() > MAX_IMPACT_DELTA {
            return Err(ValidationError::out_of_range(
                "impact.delta",
                -MAX_IMPACT_DELTA,
                MAX_IMPACT_DELTA,
                self.delta,
            ));
        }
        Ok(())
    }
}

/// An impact after it has been applied to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedImpact {
    pub element: SevenSElement,
    pub delta: f64,
    pub description: String,
    pub before: Fraction,
    pub after: Fraction,
}

impl AppliedImpact {
    pub fn from_change(impact: &Impact, change: ScoreChange) -> Self {
        Self {
            element: impact.element,
            delta: impact.delta,
            description: impact.description.clone(),
            before: change.before,
            after: change.after,
        }
    }

    /// True when clamping absorbed part of the delta.
    pub fn was_clamped(&self) -> bool {
        (self.after.value() - self.before.value() - self.delta).abs() > 1e-9
    }
}

/// One selectable answer to a decision or tension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    #[serde(default = "OptionId::new")]
    pub id: OptionId,
    pub description: String,
    #[serde(default)]
    pub impacts: Vec<Impact>,
}

impl ChoiceOption {
    /// Creates an option with a fresh id and no impacts.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: OptionId::new(),
            description: description.into(),
            impacts: Vec::new(),
        }
    }

    /// Builder: add an impact.
    pub fn with_impact(
        mut self,
        element: SevenSElement,
        delta: f64,
        description: impl Into<String>,
    ) -> Self {
        self.impacts.push(Impact::new(element, delta, description));
        self
    }
}

/// Validates an option list shared by decisions and tensions.
pub(super) fn validate_options(options: &[ChoiceOption]) -> Result<(), ValidationError> {
    if options.is_empty() {
        return Err(ValidationError::empty_field("options"));
    }

    let mut ids = HashSet::new();
    for option in options {
        if option.description.trim().is_empty() {
            return Err(ValidationError::empty_field("options.description"));
        }
        if !ids.insert(option.id) {
            return Err(ValidationError::duplicate("options.id", option.id.to_string()));
        }
        for impact in &option.impacts {
            impact.validate()?;
        }
    }
    Ok(())
}

/// Why an option could not be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceError {
    /// The option id is not one of the offered options.
    UnknownOption(OptionId),
    /// A choice was already recorded.
    AlreadyChosen,
}
