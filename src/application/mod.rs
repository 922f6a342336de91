//! Application layer - The session that drives a simulation.
//!
//! `SimulationSession` owns the simulation state, applies commands through
//! the reducer, and publishes an event for every applied command.

mod error;
mod session;

pub use error::SessionError;
pub use session::SimulationSession;
