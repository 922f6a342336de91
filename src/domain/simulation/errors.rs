//! Simulation-specific error types.

use thiserror::Error;

use crate::domain::foundation::{
    DecisionId, DomainError, ErrorCode, OptionId, TensionId, ValidationError,
};

/// Reasons a simulation operation was rejected.
///
/// A rejected operation never changes the state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("No company profile has been set")]
    CompanyNotSet,

    #[error("The 7S model has not been initialized")]
    ModelNotInitialized,

    #[error("Decision not found: {0}")]
    DecisionNotFound(DecisionId),

    #[error("Option not found: {0}")]
    OptionNotFound(OptionId),

    #[error("Decision {0} has already been made")]
    DecisionAlreadyMade(DecisionId),

    #[error("Tension not found: {0}")]
    TensionNotFound(TensionId),

    #[error("Tension {0} has already been resolved")]
    TensionAlreadyResolved(TensionId),

    #[error("KPI '{0}' is not tracked")]
    KpiNotTracked(String),
}

impl SimulationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SimulationError::Validation(_) => ErrorCode::ValidationFailed,
            SimulationError::CompanyNotSet => ErrorCode::CompanyNotSet,
            SimulationError::ModelNotInitialized => ErrorCode::ModelNotInitialized,
            SimulationError::DecisionNotFound(_) => ErrorCode::DecisionNotFound,
            SimulationError::OptionNotFound(_) => ErrorCode::OptionNotFound,
            SimulationError::TensionNotFound(_) => ErrorCode::TensionNotFound,
            SimulationError::KpiNotTracked(_) => ErrorCode::KpiNotTracked,
            SimulationError::DecisionAlreadyMade(_) | SimulationError::TensionAlreadyResolved(_) => {
                ErrorCode::InvalidStateTransition
            }
        }
    }
}

impl From<SimulationError> for DomainError {
    fn from(err: SimulationError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_choices_map_to_invalid_transition() {
        let err = SimulationError::DecisionAlreadyMade(DecisionId::new());
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
        let err = SimulationError::TensionAlreadyResolved(TensionId::new());
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn validation_errors_convert_with_from() {
        let err: SimulationError = ValidationError::empty_field("name").into();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(err.to_string(), "Validation failed: name must not be empty");
    }

    #[test]
    fn domain_error_keeps_code_and_message() {
        let domain: DomainError = SimulationError::KpiNotTracked("NPS".to_string()).into();
        assert_eq!(domain.code, ErrorCode::KpiNotTracked);
        assert_eq!(domain.message, "KPI 'NPS' is not tracked");
    }
}
