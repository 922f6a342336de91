//! Simulation module - the simulation aggregate, its commands and events.
//!
//! # Components
//!
//! - `SimulationState` - Company, model, decisions, tensions and KPI trackers
//! - `SimulationCommand` / `reduce` - Command dispatch and the pure reducer
//! - `SimulationEvent` - One event per successful operation
//! - `SimulationError` - Why an operation was rejected
//! - `KpiTracker` - Append-only KPI histories

mod command;
mod errors;
mod events;
mod kpi;
mod state;

pub use command::{reduce, Reduction, SimulationCommand};
pub use errors::SimulationError;
pub use events::{
    CompanySet, DecisionAdded, DecisionMade, ElementUpdated, KpiUpdated, ModelInitialized,
    SimulationEvent, SimulationReset, TensionAdded, TensionResolved,
};
pub use kpi::{KpiSample, KpiTracker};
pub use state::{SimulationState, INITIAL_SCENARIO_ID};
