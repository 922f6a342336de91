//! Session-level error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::scenario::ScenarioError;
use crate::domain::simulation::SimulationError;

/// Errors surfaced by `SimulationSession`.
///
/// Only `Rejected` guarantees the state was left unchanged. The other
/// variants are raised after the state change was kept.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Command rejected: {0}")]
    Rejected(#[from] SimulationError),

    #[error("KPI drift failed after the command was applied: {0}")]
    Drift(SimulationError),

    #[error("Event could not be serialized: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Event publishing failed: {0}")]
    Publish(#[from] DomainError),

    #[error("Scenario pack could not be loaded: {0}")]
    Scenario(#[from] ScenarioError),

    #[error("Scenario pack could not be read: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::Rejected(err) | SessionError::Drift(err) => err.code(),
            SessionError::Publish(err) => err.code,
            SessionError::Scenario(_) => ErrorCode::ValidationFailed,
            SessionError::Serialization(_) | SessionError::Io(_) => ErrorCode::InternalError,
        }
    }

    /// True when the command was refused and nothing changed.
    pub fn is_rejection(&self) -> bool {
        matches!(self, SessionError::Rejected(_))
    }
}
