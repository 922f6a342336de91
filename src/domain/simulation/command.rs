//! Commands and the pure reducer.

use serde::{Deserialize, Serialize};

use crate::domain::company::CompanyProfile;
use crate::domain::foundation::{DecisionId, Fraction, OptionId, TensionId};
use crate::domain::model::{ElementPatch, DEFAULT_INITIAL_SCORE};
use crate::domain::scenario::{NewDecision, NewTension};

use super::{SimulationError, SimulationEvent, SimulationState};

/// Every state transition a caller can request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimulationCommand {
    SetCompany {
        company: CompanyProfile,
    },
    InitializeModel {
        #[serde(default = "default_initial_score")]
        initial_score: Fraction,
    },
    UpdateElement {
        patch: ElementPatch,
    },
    AddDecision {
        decision: NewDecision,
    },
    AddTension {
        tension: NewTension,
    },
    MakeDecision {
        decision_id: DecisionId,
        option_id: OptionId,
    },
    ResolveTension {
        tension_id: TensionId,
        option_id: OptionId,
    },
    UpdateKpi {
        name: String,
        value: f64,
    },
    Reset,
}

fn default_initial_score() -> Fraction {
    Fraction::new(DEFAULT_INITIAL_SCORE)
}

impl SimulationCommand {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            SimulationCommand::SetCompany { .. } => "set_company",
            SimulationCommand::InitializeModel { .. } => "initialize_model",
            SimulationCommand::UpdateElement { .. } => "update_element",
            SimulationCommand::AddDecision { .. } => "add_decision",
            SimulationCommand::AddTension { .. } => "add_tension",
            SimulationCommand::MakeDecision { .. } => "make_decision",
            SimulationCommand::ResolveTension { .. } => "resolve_tension",
            SimulationCommand::UpdateKpi { .. } => "update_kpi",
            SimulationCommand::Reset => "reset",
        }
    }
}

/// The state after a command together with its outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    pub state: SimulationState,
    pub result: Result<SimulationEvent, SimulationError>,
}

/// Applies `command` to a copy of `state`.
///
/// The input is never modified. On `Err` the returned state equals the input.
pub fn reduce(state: &SimulationState, command: SimulationCommand) -> Reduction {
    let mut next = state.clone();
    let result = next.handle(command);
    Reduction {
        state: next,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SevenSElement;

    fn initialized() -> SimulationState {
        let state = SimulationState::new();
        let state = reduce(
            &state,
            SimulationCommand::SetCompany {
                company: CompanyProfile::test_fixture(),
            },
        )
        .state;
        reduce(
            &state,
            SimulationCommand::InitializeModel {
                initial_score: default_initial_score(),
            },
        )
        .state
    }

    #[test]
    fn reduce_leaves_input_untouched() {
        let state = initialized();
        let before = state.clone();

        let reduction = reduce(
            &state,
            SimulationCommand::UpdateElement {
                patch: ElementPatch::alignment_score(SevenSElement::Strategy, Fraction::new(0.9)),
            },
        );

        assert!(reduction.result.is_ok());
        assert_eq!(state, before);
        assert_eq!(reduction.state.alignment_score().value(), 0.73);
    }

    #[test]
    fn reduce_with_unknown_decision_returns_equal_state() {
        let state = initialized();
        let missing = DecisionId::new();

        let reduction = reduce(
            &state,
            SimulationCommand::MakeDecision {
                decision_id: missing,
                option_id: OptionId::new(),
            },
        );

        assert_eq!(reduction.result, Err(SimulationError::DecisionNotFound(missing)));
        assert_eq!(reduction.state, state);
    }

    #[test]
    fn initialize_command_defaults_score_when_omitted() {
        let command: SimulationCommand =
            serde_json::from_str(r#"{"type": "initialize_model"}"#).unwrap();
        assert_eq!(
            command,
            SimulationCommand::InitializeModel {
                initial_score: Fraction::new(0.7)
            }
        );
        assert_eq!(command.name(), "initialize_model");
    }

    #[test]
    fn commands_deserialize_from_tagged_json() {
        let json = r#"{"type": "update_kpi", "name": "Profitability", "value": 12.0}"#;
        let command: SimulationCommand = serde_json::from_str(json).unwrap();
        assert_eq!(
            command,
            SimulationCommand::UpdateKpi {
                name: "Profitability".to_string(),
                value: 12.0
            }
        );
    }

    #[test]
    fn reset_command_clears_state() {
        let state = initialized();
        let reduction = reduce(&state, SimulationCommand::Reset);
        assert!(reduction.state.model().is_none());
        assert!(reduction.state.company().is_none());
        assert_eq!(reduction.state.id(), state.id());
    }
}
