//! Integration tests for a full simulation run.
//!
//! These tests drive a `SimulationSession` end to end:
//! 1. Company set and model seeded with the configured initial score
//! 2. Generated decisions and tensions added
//! 3. Choices applied, scores recomputed, KPIs drifted
//! 4. Every applied command published to the in-memory bus
//!
//! Uses the in-memory event bus so no external services are needed.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use seven_s_sim::adapters::events::InMemoryEventBus;
use seven_s_sim::application::SimulationSession;
use seven_s_sim::config::SimulationSettings;
use seven_s_sim::domain::analysis::{AlignmentCalculator, InsightKind};
use seven_s_sim::domain::company::{CompanyProfile, CompanySize, KpiDefinition};
use seven_s_sim::domain::foundation::{
    DomainError, ErrorCode, EventEnvelope, Fraction, OptionId, SevenSElement,
};
use seven_s_sim::domain::model::{
    CorporateLevelStrategy, ElementPatch, StrategyPatch, StructureType,
};
use seven_s_sim::domain::simulation::{
    reduce, DecisionMade, SimulationCommand, SimulationError, SimulationState,
};
use seven_s_sim::ports::{EventHandler, EventSubscriber};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Counts the envelopes it receives.
struct CountingHandler {
    count: AtomicUsize,
}

impl CountingHandler {
    fn new() -> Self {
        Self {
            count: AtomicUsize::new(0),
        }
    }

    fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventHandler for CountingHandler {
    async fn handle(&self, _event: EventEnvelope) -> Result<(), DomainError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "CountingHandler"
    }
}

fn acme() -> CompanyProfile {
    CompanyProfile::new(
        "Acme Corp",
        "Manufacturing",
        CompanySize::Medium,
        StructureType::Mechanistic,
    )
    .with_core_values(["Quality", "Safety"])
    .with_kpi(KpiDefinition::new("Profitability", 10.0, 15.0, "%"))
}

fn settings(drift: bool) -> SimulationSettings {
    SimulationSettings {
        kpi_drift_enabled: drift,
        rng_seed: Some(42),
        ..SimulationSettings::default()
    }
}

fn option_at(state: &SimulationState, decision: usize, option: usize) -> SimulationCommand {
    let decision = &state.decisions()[decision];
    SimulationCommand::MakeDecision {
        decision_id: decision.id(),
        option_id: decision.options()[option].id,
    }
}

// =============================================================================
// Session flow
// =============================================================================

#[tokio::test]
async fn full_run_recomputes_alignment_after_each_decision() {
    let bus = Arc::new(InMemoryEventBus::new());
    let mut session = SimulationSession::new(settings(false), bus.clone()).unwrap();

    session.start(acme()).await.unwrap();
    assert_eq!(session.state().alignment_score(), Fraction::new(0.7));
    assert_eq!(session.state().decisions().len(), 2);

    // Phased market entry: Strategy +0.1, Structure +0.05, Systems +0.05
    let command = option_at(session.state(), 0, 1);
    session.execute(command).await.unwrap();
    assert_eq!(session.state().alignment_score().value(), 0.73);

    // Comprehensive leadership program: Staff +0.2, Systems +0.1, Skills +0.15
    let command = option_at(session.state(), 1, 1);
    session.execute(command).await.unwrap();
    assert_eq!(session.state().alignment_score().value(), 0.79);

    let progress = session.state().progress();
    assert_eq!(progress.decisions_made, 2);
    assert!(progress.all_addressed());

    let model = session.state().model().unwrap();
    let scores: Vec<f64> = model
        .element_scores()
        .iter()
        .map(|(_, score)| score.value())
        .collect();
    assert_eq!(
        model.alignment_score().value(),
        AlignmentCalculator::compute_overall(&scores)
    );

    assert_eq!(bus.events_of_type("simulation.decision_made.v1").len(), 2);
    assert_eq!(
        bus.events_for_simulation(session.state().id()).len(),
        bus.event_count()
    );
}

#[tokio::test]
async fn decision_made_payload_reports_before_and_after_scores() {
    let bus = Arc::new(InMemoryEventBus::new());
    let mut session = SimulationSession::new(settings(false), bus.clone()).unwrap();
    session.start(acme()).await.unwrap();

    let command = option_at(session.state(), 0, 0);
    session.execute(command).await.unwrap();

    let envelope = &bus.events_of_type("simulation.decision_made.v1")[0];
    let payload: DecisionMade = envelope.payload_as().unwrap();
    let strategy = payload
        .applied_impacts
        .iter()
        .find(|impact| impact.element == SevenSElement::Strategy)
        .unwrap();
    assert_eq!(strategy.before.value(), 0.7);
    assert!((strategy.after.value() - 0.9).abs() < 1e-9);
    assert_eq!(envelope.aggregate_type, "Simulation");
}

#[tokio::test]
async fn subscribers_see_every_drifted_kpi() {
    let bus = Arc::new(InMemoryEventBus::new());
    let handler = Arc::new(CountingHandler::new());
    bus.subscribe("simulation.kpi_updated.v1", handler.clone());

    let mut session = SimulationSession::new(settings(true), bus.clone()).unwrap();
    session.start(acme()).await.unwrap();

    let first = option_at(session.state(), 0, 2);
    session.execute(first).await.unwrap();
    let second = option_at(session.state(), 1, 0);
    session.execute(second).await.unwrap();

    let tracker = session.state().kpi_tracker("Profitability").unwrap();
    assert_eq!(tracker.len(), 3);
    assert_eq!(handler.count(), 2);

    let progress = &session.state().kpi_progress()[0];
    assert_eq!(progress.samples, 3);
    assert_eq!(progress.starting, 10.0);
}

#[tokio::test]
async fn repeated_choice_is_rejected_without_side_effects() {
    let bus = Arc::new(InMemoryEventBus::new());
    let mut session = SimulationSession::new(settings(true), bus.clone()).unwrap();
    session.start(acme()).await.unwrap();

    let command = option_at(session.state(), 0, 0);
    session.execute(command.clone()).await.unwrap();
    let snapshot = session.state().clone();
    let published = bus.event_count();

    let err = session.execute(command).await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
    assert_eq!(session.state(), &snapshot);
    assert_eq!(bus.event_count(), published);
}

#[tokio::test]
async fn reset_returns_to_an_empty_simulation() {
    let bus = Arc::new(InMemoryEventBus::new());
    let mut session = SimulationSession::new(settings(false), bus.clone()).unwrap();
    session.start(acme()).await.unwrap();
    let id = session.state().id();

    session.execute(SimulationCommand::Reset).await.unwrap();

    assert_eq!(session.state(), &SimulationState::with_id(id));
    assert!(bus.has_event("simulation.reset.v1"));
}

#[tokio::test]
async fn tension_detection_follows_the_edited_strategy() {
    let bus = Arc::new(InMemoryEventBus::new());
    let mut session = SimulationSession::new(
        SimulationSettings {
            auto_generate_scenarios: false,
            ..settings(false)
        },
        bus,
    )
    .unwrap();
    session.start(acme()).await.unwrap();
    session
        .execute(SimulationCommand::UpdateElement {
            patch: ElementPatch::Strategy(StrategyPatch {
                corporate_level: Some(CorporateLevelStrategy::ProductDevelopment),
                ..Default::default()
            }),
        })
        .await
        .unwrap();

    session.seed_scenarios().await.unwrap();

    let tension = &session.state().tensions()[0];
    assert_eq!(
        tension.elements(),
        [SevenSElement::Strategy, SevenSElement::Structure]
    );
    let option_id = tension.resolution_options()[0].id;
    let tension_id = tension.id();
    session
        .execute(SimulationCommand::ResolveTension {
            tension_id,
            option_id,
        })
        .await
        .unwrap();

    let tension = session.state().tension(tension_id).unwrap();
    assert!(tension.resolved());
    assert_eq!(tension.chosen_option(), Some(option_id));
}

// =============================================================================
// Reducer scenarios
// =============================================================================

fn initialized() -> SimulationState {
    let mut state = SimulationState::new();
    state.set_company(acme()).unwrap();
    state.initialize_model(Fraction::new(0.7)).unwrap();
    state
}

#[test]
fn kpi_update_appends_to_history() {
    let reduction = reduce(
        &initialized(),
        SimulationCommand::UpdateKpi {
            name: "Profitability".to_string(),
            value: 12.0,
        },
    );
    assert!(reduction.result.is_ok());
    let tracker = reduction.state.kpi_tracker("Profitability").unwrap();

    let values: Vec<f64> = tracker.history().iter().map(|sample| sample.value).collect();
    assert_eq!(values, vec![10.0, 12.0]);
}

#[test]
fn strategy_patch_moves_aggregate() {
    let reduction = reduce(
        &initialized(),
        SimulationCommand::UpdateElement {
            patch: ElementPatch::alignment_score(SevenSElement::Strategy, Fraction::new(0.9)),
        },
    );

    assert!(reduction.result.is_ok());
    assert_eq!(reduction.state.alignment_score().value(), 0.73);
}

#[test]
fn unknown_decision_leaves_state_unchanged() {
    let state = initialized();

    let reduction = reduce(
        &state,
        SimulationCommand::MakeDecision {
            decision_id: seven_s_sim::domain::foundation::DecisionId::new(),
            option_id: OptionId::new(),
        },
    );

    assert!(matches!(
        reduction.result,
        Err(SimulationError::DecisionNotFound(_))
    ));
    assert_eq!(reduction.state, state);
}

#[test]
fn insights_reflect_low_alignment() {
    let mut state = SimulationState::new();
    state.set_company(acme()).unwrap();
    state.initialize_model(Fraction::new(0.4)).unwrap();

    let insights = state.insights();

    assert_eq!(insights[0].title, "Alignment Challenges");
    assert_eq!(insights[0].kind, InsightKind::Negative);
}
