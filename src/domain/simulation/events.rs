//! Simulation domain events.
//!
//! One event is produced by every successful operation:
//! - `CompanySet` - Company profile replaced
//! - `ModelInitialized` - 7S model seeded
//! - `ElementUpdated` - One element patched
//! - `DecisionAdded` / `TensionAdded` - Scenario content added
//! - `DecisionMade` / `TensionResolved` - A choice applied its impacts
//! - `KpiUpdated` - A KPI value recorded
//! - `SimulationReset` - Everything cleared

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    domain_event, CompanyId, DecisionId, EventEnvelope, EventId, Fraction, OptionId,
    DomainEvent, SevenSElement, SimulationId, TensionId, Timestamp,
};
use crate::domain::scenario::AppliedImpact;

// ════════════════════════════════════════════════════════════════════════════
// CompanySet
// ════════════════════════════════════════════════════════════════════════════

/// Published when the company profile is set or replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySet {
    pub event_id: EventId,
    pub simulation_id: SimulationId,
    pub company_id: CompanyId,
    pub company_name: String,
    /// Names of the KPIs now being tracked.
    pub tracked_kpis: Vec<String>,
    pub occurred_at: Timestamp,
}

domain_event!(CompanySet, "simulation.company_set.v1");

// ════════════════════════════════════════════════════════════════════════════
// ModelInitialized
// ════════════════════════════════════════════════════════════════════════════

/// Published when the 7S model is seeded from the company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInitialized {
    pub event_id: EventId,
    pub simulation_id: SimulationId,
    pub initial_score: Fraction,
    pub alignment_score: Fraction,
    pub occurred_at: Timestamp,
}

domain_event!(ModelInitialized, "simulation.model_initialized.v1");

// ════════════════════════════════════════════════════════════════════════════
// ElementUpdated
// ════════════════════════════════════════════════════════════════════════════

/// Published when an element patch is merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementUpdated {
    pub event_id: EventId,
    pub simulation_id: SimulationId,
    pub element: SevenSElement,
    pub element_score: Fraction,
    pub alignment_score: Fraction,
    pub occurred_at: Timestamp,
}

domain_event!(ElementUpdated, "simulation.element_updated.v1");

// ════════════════════════════════════════════════════════════════════════════
// DecisionAdded
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionAdded {
    pub event_id: EventId,
    pub simulation_id: SimulationId,
    pub decision_id: DecisionId,
    pub element: SevenSElement,
    pub option_count: usize,
    pub occurred_at: Timestamp,
}

domain_event!(DecisionAdded, "simulation.decision_added.v1");

// ════════════════════════════════════════════════════════════════════════════
// TensionAdded
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TensionAdded {
    pub event_id: EventId,
    pub simulation_id: SimulationId,
    pub tension_id: TensionId,
    pub elements: [SevenSElement; 2],
    pub severity: u8,
    pub occurred_at: Timestamp,
}

domain_event!(TensionAdded, "simulation.tension_added.v1");

// ════════════════════════════════════════════════════════════════════════════
// DecisionMade
// ════════════════════════════════════════════════════════════════════════════

/// Published when a decision option is chosen and its impacts applied.
///
/// Carries every applied impact with before and after scores, so
/// subscribers can see where clamping absorbed part of a delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionMade {
    pub event_id: EventId,
    pub simulation_id: SimulationId,
    pub decision_id: DecisionId,
    pub option_id: OptionId,
    pub applied_impacts: Vec<AppliedImpact>,
    pub alignment_score: Fraction,
    pub occurred_at: Timestamp,
}

domain_event!(DecisionMade, "simulation.decision_made.v1");

// ════════════════════════════════════════════════════════════════════════════
// TensionResolved
// ════════════════════════════════════════════════════════════════════════════

/// Published when a tension is resolved and its impacts applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TensionResolved {
    pub event_id: EventId,
    pub simulation_id: SimulationId,
    pub tension_id: TensionId,
    pub option_id: OptionId,
    pub applied_impacts: Vec<AppliedImpact>,
    pub alignment_score: Fraction,
    pub occurred_at: Timestamp,
}

domain_event!(TensionResolved, "simulation.tension_resolved.v1");

// ════════════════════════════════════════════════════════════════════════════
// KpiUpdated
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiUpdated {
    pub event_id: EventId,
    pub simulation_id: SimulationId,
    pub kpi_name: String,
    pub value: f64,
    pub history_len: usize,
    pub recorded_at: Timestamp,
}

domain_event!(KpiUpdated, "simulation.kpi_updated.v1", occurred_at = recorded_at);

// ════════════════════════════════════════════════════════════════════════════
// SimulationReset
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReset {
    pub event_id: EventId,
    pub simulation_id: SimulationId,
    pub occurred_at: Timestamp,
}

domain_event!(SimulationReset, "simulation.reset.v1");

// ════════════════════════════════════════════════════════════════════════════
// SimulationEvent
// ════════════════════════════════════════════════════════════════════════════

/// The outcome of a successful simulation operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SimulationEvent {
    CompanySet(CompanySet),
    ModelInitialized(ModelInitialized),
    ElementUpdated(ElementUpdated),
    DecisionAdded(DecisionAdded),
    TensionAdded(TensionAdded),
    DecisionMade(DecisionMade),
    TensionResolved(TensionResolved),
    KpiUpdated(KpiUpdated),
    Reset(SimulationReset),
}

impl SimulationEvent {
    /// Routing types of every simulation event.
    pub const EVENT_TYPES: [&'static str; 9] = [
        "simulation.company_set.v1",
        "simulation.model_initialized.v1",
        "simulation.element_updated.v1",
        "simulation.decision_added.v1",
        "simulation.tension_added.v1",
        "simulation.decision_made.v1",
        "simulation.tension_resolved.v1",
        "simulation.kpi_updated.v1",
        "simulation.reset.v1",
    ];

    /// Wraps the inner event for transport.
    pub fn to_envelope(&self) -> Result<EventEnvelope, serde_json::Error> {
        match self {
            SimulationEvent::CompanySet(event) => event.to_envelope(),
            SimulationEvent::ModelInitialized(event) => event.to_envelope(),
            SimulationEvent::ElementUpdated(event) => event.to_envelope(),
            SimulationEvent::DecisionAdded(event) => event.to_envelope(),
            SimulationEvent::TensionAdded(event) => event.to_envelope(),
            SimulationEvent::DecisionMade(event) => event.to_envelope(),
            SimulationEvent::TensionResolved(event) => event.to_envelope(),
            SimulationEvent::KpiUpdated(event) => event.to_envelope(),
            SimulationEvent::Reset(event) => event.to_envelope(),
        }
    }

    /// Returns the routing type of the inner event.
    pub fn event_type(&self) -> &'static str {
        match self {
            SimulationEvent::CompanySet(event) => event.event_type(),
            SimulationEvent::ModelInitialized(event) => event.event_type(),
            SimulationEvent::ElementUpdated(event) => event.event_type(),
            SimulationEvent::DecisionAdded(event) => event.event_type(),
            SimulationEvent::TensionAdded(event) => event.event_type(),
            SimulationEvent::DecisionMade(event) => event.event_type(),
            SimulationEvent::TensionResolved(event) => event.event_type(),
            SimulationEvent::KpiUpdated(event) => event.event_type(),
            SimulationEvent::Reset(event) => event.event_type(),
        }
    }

    /// Impacts applied by the operation; empty unless a choice was made.
    pub fn applied_impacts(&self) -> &[AppliedImpact] {
        match self {
            SimulationEvent::DecisionMade(event) => &event.applied_impacts,
            SimulationEvent::TensionResolved(event) => &event.applied_impacts,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decision_made() -> DecisionMade {
        DecisionMade {
            event_id: EventId::new(),
            simulation_id: SimulationId::new(),
            decision_id: DecisionId::new(),
            option_id: OptionId::new(),
            applied_impacts: vec![AppliedImpact {
                element: SevenSElement::Strategy,
                delta: 0.2,
                description: "Growth".to_string(),
                before: Fraction::new(0.7),
                after: Fraction::new(0.9),
            }],
            alignment_score: Fraction::new(0.73),
            occurred_at: Timestamp::now(),
        }
    }

    #[test]
    fn envelope_carries_routing_fields() {
        let inner = decision_made();
        let envelope = SimulationEvent::DecisionMade(inner.clone()).to_envelope().unwrap();

        assert_eq!(envelope.event_type, "simulation.decision_made.v1");
        assert_eq!(envelope.schema_version, 1);
        assert_eq!(envelope.aggregate_type, "Simulation");
        assert_eq!(envelope.aggregate_id, inner.simulation_id.to_string());
        assert_eq!(envelope.event_id, inner.event_id);
    }

    #[test]
    fn envelope_payload_round_trips() {
        let inner = decision_made();
        let envelope = inner.to_envelope().unwrap();
        let restored: DecisionMade = envelope.payload_as().unwrap();
        assert_eq!(restored, inner);
    }

    #[test]
    fn applied_impacts_only_for_choices() {
        let reset = SimulationEvent::Reset(SimulationReset {
            event_id: EventId::new(),
            simulation_id: SimulationId::new(),
            occurred_at: Timestamp::now(),
        });
        assert!(reset.applied_impacts().is_empty());
        assert_eq!(reset.event_type(), "simulation.reset.v1");
        assert!(SimulationEvent::EVENT_TYPES.contains(&reset.event_type()));
        assert_eq!(SimulationEvent::DecisionMade(decision_made()).applied_impacts().len(), 1);
    }
}
