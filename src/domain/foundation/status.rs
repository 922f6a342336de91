//! Lifecycle statuses for decisions and tensions.

use serde::{Deserialize, Serialize};

use super::StateMachine;

/// Lifecycle of a decision: pending until an option is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    Pending,
    Made,
}

impl StateMachine for DecisionStatus {
    const TRANSITIONS: &'static [(Self, Self)] = &[(DecisionStatus::Pending, DecisionStatus::Made)];
}

/// Lifecycle of a tension: open until a resolution option is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TensionStatus {
    Open,
    Resolved,
}

impl StateMachine for TensionStatus {
    const TRANSITIONS: &'static [(Self, Self)] = &[(TensionStatus::Open, TensionStatus::Resolved)];
}
