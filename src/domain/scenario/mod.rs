//! Scenario module - decisions, tensions and the options that resolve them.
//!
//! # Components
//!
//! - `Decision` / `NewDecision` - scripted strategic prompts
//! - `Tension` / `NewTension` - conflicts between two elements
//! - `ChoiceOption` / `Impact` - answers and the score changes they carry
//! - `ScenarioGenerator` - built-in tension rules and decision templates
//! - `ScenarioPack` - YAML-authored scenarios

mod decision;
mod generator;
mod option;
mod pack;
mod tension;

pub use decision::{Decision, NewDecision, COMPANY_PLACEHOLDER};
pub use generator::{ScenarioGenerator, CHANGE_READINESS_THRESHOLD};
pub use option::{AppliedImpact, ChoiceError, ChoiceOption, Impact, MAX_IMPACT_DELTA};
pub use pack::{ScenarioError, ScenarioPack};
pub use tension::{NewTension, Tension, MAX_SEVERITY};
