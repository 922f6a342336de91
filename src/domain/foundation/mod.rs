//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the simulator.

mod element;
mod errors;
mod events;
mod fraction;
mod ids;
mod state_machine;
mod status;
mod timestamp;

pub use element::SevenSElement;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SIMULATION_AGGREGATE,
};
pub use fraction::Fraction;
pub use ids::{CompanyId, DecisionId, OptionId, SimulationId, TensionId};
pub use state_machine::StateMachine;
pub use status::{DecisionStatus, TensionStatus};
pub use timestamp::Timestamp;
