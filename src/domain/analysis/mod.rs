//! Analysis Module - Pure domain services over the simulation state.
//!
//! # Components
//!
//! - `AlignmentCalculator` - Aggregate score (mean rounded to 2 decimals)
//! - `InsightGenerator` - Narrative feedback on alignment and decisions
//! - `ImpactBreakdown` - Positive/negative impact totals per element
//! - `SimulationProgress` / `KpiProgress` - Completion and KPI standing
//! - `RelationshipGraph` - Nodes and weighted links of the 7S diagram
//! - `StructureAssessment` - Fit notes for the structure dials
//!
//! All functions are pure and stateless. They take domain objects as input
//! and return computed results.

mod alignment_calculator;
mod impact_breakdown;
mod insights;
mod progress;
mod relationship_graph;
mod structure_assessment;

pub use alignment_calculator::AlignmentCalculator;
pub use impact_breakdown::{ElementImpact, ImpactBreakdown};
pub use insights::{
    Insight, InsightGenerator, InsightKind, FIT_THRESHOLD, SIGNIFICANT_IMPACT,
    STRONG_ALIGNMENT_THRESHOLD, STRONG_PEOPLE_THRESHOLD, SYSTEMS_ATTENTION_THRESHOLD,
    WEAK_ALIGNMENT_THRESHOLD,
};
pub use progress::{KpiProgress, SimulationProgress};
pub use relationship_graph::{GraphLink, GraphNode, RelationshipGraph};
pub use structure_assessment::StructureAssessment;
