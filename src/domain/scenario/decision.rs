//! Decision entity: a scripted strategic prompt with fixed options.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DecisionId, DecisionStatus, OptionId, SevenSElement, StateMachine, ValidationError,
};

use super::option::validate_options;
use super::{ChoiceError, ChoiceOption};

/// Placeholder replaced with the company name when a template is personalized.
pub const COMPANY_PLACEHOLDER: &str = "{company}";

/// Input for adding a decision; the id is assigned on insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDecision {
    #[serde(default = "default_scenario_id")]
    pub scenario_id: u32,
    pub element: SevenSElement,
    pub description: String,
    pub options: Vec<ChoiceOption>,
}

fn default_scenario_id() -> u32 {
    1
}

impl NewDecision {
    pub fn new(
        scenario_id: u32,
        element: SevenSElement,
        description: impl Into<String>,
        options: Vec<ChoiceOption>,
    ) -> Self {
        Self {
            scenario_id,
            element,
            description: description.into(),
            options,
        }
    }

    /// Substitutes the company name into the prompt.
    pub fn personalized(mut self, company_name: &str) -> Self {
        self.description = self.description.replace(COMPANY_PLACEHOLDER, company_name);
        self
    }

    /// Validates prompt and options.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.description.trim().is_empty() {
            return Err(ValidationError::empty_field("description"));
        }
        validate_options(&self.options)
    }
}

/// A decision offered to the player.
///
/// # Invariants
///
/// - `selected_option`, once set, names one of `options` and never changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    id: DecisionId,
    scenario_id: u32,
    element: SevenSElement,
    description: String,
    options: Vec<ChoiceOption>,
    selected_option: Option<OptionId>,
}

impl Decision {
    /// Creates a pending decision from validated input.
    pub fn new(id: DecisionId, input: NewDecision) -> Self {
        Self {
            id,
            scenario_id: input.scenario_id,
            element: input.element,
            description: input.description,
            options: input.options,
            selected_option: None,
        }
    }

    pub fn id(&self) -> DecisionId {
        self.id
    }

    pub fn scenario_id(&self) -> u32 {
        self.scenario_id
    }

    /// The element the decision is framed around.
    pub fn element(&self) -> SevenSElement {
        self.element
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn options(&self) -> &[ChoiceOption] {
        &self.options
    }

    pub fn selected_option(&self) -> Option<OptionId> {
        self.selected_option
    }

    pub fn status(&self) -> DecisionStatus {
        if self.selected_option.is_some() {
            DecisionStatus::Made
        } else {
            DecisionStatus::Pending
        }
    }

    pub fn is_made(&self) -> bool {
        self.status() == DecisionStatus::Made
    }

    /// Looks up an option by id.
    pub fn option(&self, option_id: OptionId) -> Option<&ChoiceOption> {
        self.options.iter().find(|option| option.id == option_id)
    }

    /// Returns the chosen option, if any.
    pub fn selected(&self) -> Option<&ChoiceOption> {
        self.selected_option.and_then(|id| self.option(id))
    }

    /// Records the chosen option. Leaves the decision untouched on error.
    pub fn select(&mut self, option_id: OptionId) -> Result<ChoiceOption, ChoiceError> {
        let option = self
            .option(option_id)
            .cloned()
            .ok_or(ChoiceError::UnknownOption(option_id))?;

        self.status()
            .transition_to(DecisionStatus::Made)
            .map_err(|_| ChoiceError::AlreadyChosen)?;

        self.selected_option = Some(option_id);
        Ok(option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market_entry() -> Decision {
        Decision::new(
            DecisionId::new(),
            NewDecision::new(
                1,
                SevenSElement::Strategy,
                "{company} may enter a new market.",
                vec![
                    ChoiceOption::new("Rapid expansion").with_impact(SevenSElement::Strategy, 0.2, "Growth"),
                    ChoiceOption::new("Phased approach"),
                ],
            )
            .personalized("Acme"),
        )
    }

    #[test]
    fn personalized_replaces_placeholder() {
        assert_eq!(market_entry().description(), "Acme may enter a new market.");
    }

    #[test]
    fn new_decision_starts_pending() {
        let decision = market_entry();
        assert_eq!(decision.status(), DecisionStatus::Pending);
        assert!(decision.selected().is_none());
    }

    #[test]
    fn select_records_option_and_returns_its_impacts() {
        let mut decision = market_entry();
        let option_id = decision.options()[0].id;

        let chosen = decision.select(option_id).unwrap();

        assert_eq!(chosen.impacts.len(), 1);
        assert_eq!(decision.selected_option(), Some(option_id));
        assert!(decision.is_made());
    }

    #[test]
    fn select_unknown_option_leaves_decision_pending() {
        let mut decision = market_entry();
        let before = decision.clone();
        let missing = OptionId::new();

        assert_eq!(decision.select(missing), Err(ChoiceError::UnknownOption(missing)));
        assert_eq!(decision, before);
    }

    #[test]
    fn select_twice_is_rejected() {
        let mut decision = market_entry();
        let first = decision.options()[0].id;
        let second = decision.options()[1].id;
        decision.select(first).unwrap();

        assert_eq!(decision.select(second), Err(ChoiceError::AlreadyChosen));
        assert_eq!(decision.selected_option(), Some(first));
    }

    #[test]
    fn validate_rejects_blank_prompt() {
        let input = NewDecision::new(1, SevenSElement::Staff, " ", vec![ChoiceOption::new("A")]);
        assert_eq!(input.validate(), Err(ValidationError::empty_field("description")));
    }
}
