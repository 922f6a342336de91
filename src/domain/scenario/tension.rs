//! Tension entity: a conflict between two elements awaiting resolution.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    OptionId, SevenSElement, StateMachine, TensionId, TensionStatus, ValidationError,
};

use super::option::validate_options;
use super::{ChoiceError, ChoiceOption};

/// Highest severity a tension can carry.
pub const MAX_SEVERITY: u8 = 10;

/// Input for adding a tension; the id is assigned on insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTension {
    pub elements: [SevenSElement; 2],
    pub description: String,
    pub severity: u8,
    pub resolution_options: Vec<ChoiceOption>,
}

impl NewTension {
    pub fn new(
        elements: [SevenSElement; 2],
        description: impl Into<String>,
        severity: u8,
        resolution_options: Vec<ChoiceOption>,
    ) -> Self {
        Self {
            elements,
            description: description.into(),
            severity,
            resolution_options,
        }
    }

    /// Validates the pair, severity and options.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.elements[0] == self.elements[1] {
            return Err(ValidationError::invalid_format(
                "elements",
                "a tension needs two different elements",
            ));
        }
        if self.severity > MAX_SEVERITY {
            return Err(ValidationError::out_of_range(
                "severity",
                0.0,
                f64::from(MAX_SEVERITY),
                f64::from(self.severity),
            ));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::empty_field("description"));
        }
        validate_options(&self.resolution_options)
    }
}

/// A tension between two elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tension {
    id: TensionId,
    elements: [SevenSElement; 2],
    description: String,
    severity: u8,
    resolution_options: Vec<ChoiceOption>,
    status: TensionStatus,
    chosen_option: Option<OptionId>,
}

impl Tension {
    /// Creates an open tension from validated input.
    pub fn new(id: TensionId, input: NewTension) -> Self {
        Self {
            id,
            elements: input.elements,
            description: input.description,
            severity: input.severity,
            resolution_options: input.resolution_options,
            status: TensionStatus::Open,
            chosen_option: None,
        }
    }

    pub fn id(&self) -> TensionId {
        self.id
    }

    pub fn elements(&self) -> [SevenSElement; 2] {
        self.elements
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn severity(&self) -> u8 {
        self.severity
    }

    pub fn resolution_options(&self) -> &[ChoiceOption] {
        &self.resolution_options
    }

    pub fn status(&self) -> TensionStatus {
        self.status
    }

    pub fn resolved(&self) -> bool {
        self.status == TensionStatus::Resolved
    }

    /// The resolution that was applied, if any.
    pub fn chosen_option(&self) -> Option<OptionId> {
        self.chosen_option
    }

    /// True if the tension involves `element`.
    pub fn involves(&self, element: SevenSElement) -> bool {
        self.elements.contains(&element)
    }

    /// Looks up a resolution option by id.
    pub fn option(&self, option_id: OptionId) -> Option<&ChoiceOption> {
        self.resolution_options
            .iter()
            .find(|option| option.id == option_id)
    }

    /// Marks the tension resolved with `option_id`. Leaves it untouched on error.
    pub fn resolve(&mut self, option_id: OptionId) -> Result<ChoiceOption, ChoiceError> {
        let option = self
            .option(option_id)
            .cloned()
            .ok_or(ChoiceError::UnknownOption(option_id))?;

        self.status = self
            .status
            .transition_to(TensionStatus::Resolved)
            .map_err(|_| ChoiceError::AlreadyChosen)?;
        self.chosen_option = Some(option_id);
        Ok(option)
    }
}
