//! Domain layer containing the simulator's business logic and types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors, events)
//! - `company` - Company profile and KPI definitions
//! - `model` - The seven element records and the 7S model aggregate
//! - `scenario` - Decisions, tensions, options, generation and YAML packs
//! - `simulation` - Simulation aggregate, commands, reducer and events
//! - `analysis` - Pure services: aggregation, insights, progress, graph

pub mod analysis;
pub mod company;
pub mod foundation;
pub mod model;
pub mod scenario;
pub mod simulation;
