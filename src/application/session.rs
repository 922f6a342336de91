//! SimulationSession - the composition root for one simulation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::adapters::events::TracingEventLogger;
use crate::config::{SimulationSettings, ValidationError};
use crate::domain::analysis::AlignmentCalculator;
use crate::domain::company::CompanyProfile;
use crate::domain::foundation::{EventEnvelope, EventId};
use crate::domain::scenario::{ScenarioGenerator, ScenarioPack};
use crate::domain::simulation::{
    reduce, Reduction, SimulationCommand, SimulationError, SimulationEvent, SimulationState,
};
use crate::ports::{EventBus, EventPublisher, EventSubscriber};

use super::SessionError;

/// Drives one simulation: applies commands, publishes their events, and
/// drifts KPIs after each decision.
pub struct SimulationSession {
    state: SimulationState,
    settings: SimulationSettings,
    publisher: Arc<dyn EventPublisher>,
    rng: StdRng,
}

impl SimulationSession {
    /// Creates a session over an empty simulation.
    pub fn new(
        settings: SimulationSettings,
        publisher: Arc<dyn EventPublisher>,
    ) -> Result<Self, ValidationError> {
        Self::with_state(SimulationState::new(), settings, publisher)
    }

    /// Creates a session publishing to `bus`, with every simulation event
    /// also logged through `tracing`.
    pub fn on_bus<B>(settings: SimulationSettings, bus: Arc<B>) -> Result<Self, ValidationError>
    where
        B: EventBus + 'static,
    {
        let session = Self::new(settings, bus.clone())?;
        bus.subscribe_all(&SimulationEvent::EVENT_TYPES, Arc::new(TracingEventLogger));
        Ok(session)
    }

    /// Creates a session over an existing state.
    ///
    /// # Errors
    ///
    /// Returns the first settings value that fails `SimulationSettings::validate`.
    pub fn with_state(
        state: SimulationState,
        settings: SimulationSettings,
        publisher: Arc<dyn EventPublisher>,
    ) -> Result<Self, ValidationError> {
        settings.validate()?;

        let rng = match settings.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            state,
            settings,
            publisher,
            rng,
        })
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    /// Applies one command and publishes its event.
    ///
    /// A rejected command is logged and returned as `Rejected` with the state
    /// untouched. After a decision is made, every KPI receives a drifted
    /// sample when drift is enabled.
    pub async fn execute(
        &mut self,
        command: SimulationCommand,
    ) -> Result<SimulationEvent, SessionError> {
        let name = command.name();
        let is_decision = matches!(command, SimulationCommand::MakeDecision { .. });

        let Reduction { state, result } = reduce(&self.state, command);
        let event = match result {
            Ok(event) => event,
            Err(err) => {
                warn!(
                    simulation_id = %self.state.id(),
                    command = name,
                    code = %err.code(),
                    "command rejected: {}",
                    err
                );
                return Err(err.into());
            }
        };
        self.state = state;

        info!(
            simulation_id = %self.state.id(),
            command = name,
            alignment_score = self.state.alignment_score().value(),
            "command applied"
        );
        for impact in event.applied_impacts() {
            debug!(
                element = %impact.element,
                delta = impact.delta,
                before = impact.before.value(),
                after = impact.after.value(),
                clamped = impact.was_clamped(),
                "impact applied"
            );
        }
        let envelope = event.to_envelope()?;
        let cause = envelope.event_id.clone();
        self.publish(envelope).await?;

        if is_decision && self.settings.kpi_drift_enabled {
            self.drift_kpis(&cause).await?;
        }

        Ok(event)
    }

    /// Sets the company, seeds the model, and adds the configured scenarios.
    ///
    /// Returns every event in the order it was published.
    pub async fn start(
        &mut self,
        company: CompanyProfile,
    ) -> Result<Vec<SimulationEvent>, SessionError> {
        let initial_score = self.settings.initial_fraction();
        let mut events = vec![
            self.execute(SimulationCommand::SetCompany { company }).await?,
            self.execute(SimulationCommand::InitializeModel { initial_score })
                .await?,
        ];

        if self.settings.auto_generate_scenarios {
            events.extend(self.seed_scenarios().await?);
        }
        if let Some(path) = self.settings.scenario_pack.clone() {
            events.extend(self.load_scenario_pack_file(&path).await?);
        }

        Ok(events)
    }

    /// Adds the generated tensions and decisions for the current company and model.
    ///
    /// # Errors
    ///
    /// - `Rejected(CompanyNotSet)` before a company exists
    /// - `Rejected(ModelNotInitialized)` before the model exists
    pub async fn seed_scenarios(&mut self) -> Result<Vec<SimulationEvent>, SessionError> {
        let company = self.state.company().ok_or(SimulationError::CompanyNotSet)?;
        let model = self.state.model().ok_or(SimulationError::ModelNotInitialized)?;

        let tensions = ScenarioGenerator::tensions_for(model);
        let decisions = ScenarioGenerator::decisions_for(company, self.state.scenario_id());
        debug!(
            tensions = tensions.len(),
            decisions = decisions.len(),
            "generated scenarios"
        );

        let mut events = Vec::with_capacity(tensions.len() + decisions.len());
        for tension in tensions {
            events.push(self.execute(SimulationCommand::AddTension { tension }).await?);
        }
        for decision in decisions {
            events.push(self.execute(SimulationCommand::AddDecision { decision }).await?);
        }
        Ok(events)
    }

    /// Adds a pack's decisions, personalized for the company, and its tensions.
    pub async fn load_scenario_pack(
        &mut self,
        pack: &ScenarioPack,
    ) -> Result<Vec<SimulationEvent>, SessionError> {
        let company_name = self
            .state
            .company()
            .map(|company| company.name.clone())
            .ok_or(SimulationError::CompanyNotSet)?;

        let mut events = Vec::new();
        for decision in pack.personalized_decisions(&company_name) {
            events.push(self.execute(SimulationCommand::AddDecision { decision }).await?);
        }
        for tension in pack.tensions.iter().cloned() {
            events.push(self.execute(SimulationCommand::AddTension { tension }).await?);
        }
        info!(pack = %pack.name, added = events.len(), "scenario pack loaded");
        Ok(events)
    }

    /// Reads a YAML scenario pack from disk and adds it.
    pub async fn load_scenario_pack_file(
        &mut self,
        path: &Path,
    ) -> Result<Vec<SimulationEvent>, SessionError> {
        let yaml = tokio::fs::read_to_string(path).await?;
        let pack = ScenarioPack::from_yaml(&yaml)?;
        self.load_scenario_pack(&pack).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    async fn publish(&self, envelope: EventEnvelope) -> Result<(), SessionError> {
        let event_type = envelope.event_type.clone();
        self.publisher.publish(envelope).await.map_err(|err| {
            warn!(event_type = %event_type, error = %err, "event publishing failed");
            SessionError::from(err)
        })
    }

    /// Records a value within ±`kpi_drift_ratio` of each KPI's latest value.
    ///
    /// Every drifted value is computed before any tracker changes, and a
    /// KPI whose drifted value is not finite keeps its history. Each drift
    /// event names the decision event that caused it.
    async fn drift_kpis(&mut self, cause: &EventId) -> Result<(), SessionError> {
        let ratio = self.settings.kpi_drift_ratio;
        let mut drifted = Vec::new();
        for tracker in self.state.kpi_trackers() {
            let Some(latest) = tracker.latest_value() else {
                continue;
            };
            let factor = 1.0 + self.rng.gen_range(-ratio..=ratio);
            let value = AlignmentCalculator::round_to_hundredths(latest * factor);
            if !value.is_finite() {
                warn!(kpi = %tracker.name(), latest, "kpi drift skipped: value out of range");
                continue;
            }
            drifted.push((tracker.name().to_string(), latest, value));
        }

        let mut envelopes = Vec::with_capacity(drifted.len());
        for (name, latest, value) in drifted {
            let event = self
                .state
                .update_kpi(&name, value)
                .map_err(SessionError::Drift)?;
            debug!(kpi = %name, from = latest, to = value, "kpi drifted");
            envelopes.push(event.to_envelope()?.caused_by(cause));
        }

        self.publisher.publish_all(envelopes).await.map_err(|err| {
            warn!(error = %err, "kpi drift publishing failed");
            SessionError::from(err)
        })
    }
}
