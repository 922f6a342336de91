//! SimulationState aggregate: the whole simulation as one owned value.
//!
//! # Transactions
//!
//! Every operation validates before it mutates. An operation that returns
//! `Err` leaves the state value-equal to what it was before the call.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{
    ElementImpact, ImpactBreakdown, Insight, InsightGenerator, KpiProgress, RelationshipGraph,
    SimulationProgress, StructureAssessment,
};
use crate::domain::company::CompanyProfile;
use crate::domain::foundation::{
    DecisionId, EventId, Fraction, OptionId, SimulationId, TensionId, Timestamp,
};
use crate::domain::model::{ElementPatch, SevenSModel};
use crate::domain::scenario::{
    AppliedImpact, ChoiceError, Decision, Impact, NewDecision, NewTension, Tension,
};

use super::{
    CompanySet, DecisionAdded, DecisionMade, ElementUpdated, KpiTracker, KpiUpdated,
    ModelInitialized, SimulationCommand, SimulationError, SimulationEvent, SimulationReset,
    TensionAdded, TensionResolved,
};

/// Scenario every new simulation starts in.
pub const INITIAL_SCENARIO_ID: u32 = 1;

/// The simulation aggregate.
///
/// # Invariants
///
/// - A model exists only after a company was set
/// - The model's aggregate score always equals the mean of its element scores
/// - Made decisions and resolved tensions never change their choice
/// - KPI histories are append-only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationState {
    id: SimulationId,
    company: Option<CompanyProfile>,
    model: Option<SevenSModel>,
    scenario_id: u32,
    decisions: Vec<Decision>,
    tensions: Vec<Tension>,
    kpi_trackers: Vec<KpiTracker>,
}

impl SimulationState {
    /// Creates an empty simulation.
    pub fn new() -> Self {
        Self::with_id(SimulationId::new())
    }

    /// Creates an empty simulation with a known id.
    pub fn with_id(id: SimulationId) -> Self {
        Self {
            id,
            company: None,
            model: None,
            scenario_id: INITIAL_SCENARIO_ID,
            decisions: Vec::new(),
            tensions: Vec::new(),
            kpi_trackers: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> SimulationId {
        self.id
    }

    pub fn company(&self) -> Option<&CompanyProfile> {
        self.company.as_ref()
    }

    pub fn model(&self) -> Option<&SevenSModel> {
        self.model.as_ref()
    }

    pub fn scenario_id(&self) -> u32 {
        self.scenario_id
    }

    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    pub fn tensions(&self) -> &[Tension] {
        &self.tensions
    }

    pub fn kpi_trackers(&self) -> &[KpiTracker] {
        &self.kpi_trackers
    }

    pub fn decision(&self, id: DecisionId) -> Option<&Decision> {
        self.decisions.iter().find(|d| d.id() == id)
    }

    pub fn tension(&self, id: TensionId) -> Option<&Tension> {
        self.tensions.iter().find(|t| t.id() == id)
    }

    pub fn kpi_tracker(&self, name: &str) -> Option<&KpiTracker> {
        self.kpi_trackers.iter().find(|t| t.name() == name)
    }

    /// Decisions still waiting for a choice.
    pub fn pending_decisions(&self) -> impl Iterator<Item = &Decision> {
        self.decisions.iter().filter(|d| !d.is_made())
    }

    /// Tensions still waiting for a resolution.
    pub fn open_tensions(&self) -> impl Iterator<Item = &Tension> {
        self.tensions.iter().filter(|t| !t.resolved())
    }

    /// The aggregate alignment score, or zero before the model exists.
    pub fn alignment_score(&self) -> Fraction {
        self.model
            .as_ref()
            .map(SevenSModel::alignment_score)
            .unwrap_or(Fraction::ZERO)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived views
    // ─────────────────────────────────────────────────────────────────────────

    /// Result insights; empty before the model exists.
    pub fn insights(&self) -> Vec<Insight> {
        self.model
            .as_ref()
            .map(|model| InsightGenerator::generate(model, &self.decisions))
            .unwrap_or_default()
    }

    pub fn impact_breakdown(&self) -> Vec<ElementImpact> {
        ImpactBreakdown::from_decisions(&self.decisions)
    }

    pub fn progress(&self) -> SimulationProgress {
        SimulationProgress::of(&self.decisions, &self.tensions)
    }

    /// Standing of every company KPI that has a tracker.
    pub fn kpi_progress(&self) -> Vec<KpiProgress> {
        let Some(company) = &self.company else {
            return Vec::new();
        };
        company
            .kpis
            .iter()
            .filter_map(|definition| {
                self.kpi_tracker(&definition.name)
                    .map(|tracker| KpiProgress::measure(definition, tracker))
            })
            .collect()
    }

    pub fn relationship_graph(&self) -> Option<RelationshipGraph> {
        self.model.as_ref().map(RelationshipGraph::of)
    }

    pub fn structure_assessment(&self) -> Option<StructureAssessment> {
        self.model
            .as_ref()
            .map(|model| StructureAssessment::of(model.structure()))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Dispatches a command to its operation.
    pub fn handle(&mut self, command: SimulationCommand) -> Result<SimulationEvent, SimulationError> {
        match command {
            SimulationCommand::SetCompany { company } => self.set_company(company),
            SimulationCommand::InitializeModel { initial_score } => {
                self.initialize_model(initial_score)
            }
            SimulationCommand::UpdateElement { patch } => self.update_element(patch),
            SimulationCommand::AddDecision { decision } => self.add_decision(decision),
            SimulationCommand::AddTension { tension } => self.add_tension(tension),
            SimulationCommand::MakeDecision {
                decision_id,
                option_id,
            } => self.make_decision(decision_id, option_id),
            SimulationCommand::ResolveTension {
                tension_id,
                option_id,
            } => self.resolve_tension(tension_id, option_id),
            SimulationCommand::UpdateKpi { name, value } => self.update_kpi(&name, value),
            SimulationCommand::Reset => Ok(self.reset()),
        }
    }

    /// Replaces the company and restarts KPI tracking from its definitions.
    ///
    /// # Errors
    ///
    /// - `Validation` if the profile is invalid
    pub fn set_company(&mut self, company: CompanyProfile) -> Result<SimulationEvent, SimulationError> {
        company.validate()?;

        self.kpi_trackers = company.kpis.iter().map(KpiTracker::for_definition).collect();
        let event = CompanySet {
            event_id: EventId::new(),
            simulation_id: self.id,
            company_id: company.id,
            company_name: company.name.clone(),
            tracked_kpis: company.kpis.iter().map(|kpi| kpi.name.clone()).collect(),
            occurred_at: Timestamp::now(),
        };
        self.company = Some(company);

        Ok(SimulationEvent::CompanySet(event))
    }

    /// Seeds the 7S model from the company with every score at `initial_score`.
    ///
    /// # Errors
    ///
    /// - `CompanyNotSet` before a company exists
    pub fn initialize_model(
        &mut self,
        initial_score: Fraction,
    ) -> Result<SimulationEvent, SimulationError> {
        let company = self.company.as_ref().ok_or(SimulationError::CompanyNotSet)?;
        let model = SevenSModel::seeded(company, initial_score);
        let alignment_score = model.alignment_score();
        self.model = Some(model);

        Ok(SimulationEvent::ModelInitialized(ModelInitialized {
            event_id: EventId::new(),
            simulation_id: self.id,
            initial_score,
            alignment_score,
            occurred_at: Timestamp::now(),
        }))
    }

    /// Merges a partial element record into the model.
    ///
    /// # Errors
    ///
    /// - `ModelNotInitialized` before the model exists
    pub fn update_element(&mut self, patch: ElementPatch) -> Result<SimulationEvent, SimulationError> {
        let model = self.model.as_mut().ok_or(SimulationError::ModelNotInitialized)?;
        model.apply_patch(&patch);

        let element = patch.element();
        Ok(SimulationEvent::ElementUpdated(ElementUpdated {
            event_id: EventId::new(),
            simulation_id: self.id,
            element,
            element_score: model.element_score(element),
            alignment_score: model.alignment_score(),
            occurred_at: Timestamp::now(),
        }))
    }

    /// Appends a pending decision with a fresh id.
    ///
    /// Input is checked before it is appended, so not every decision is
    /// accepted: a blank prompt, an empty option list, a blank option
    /// description, duplicate option ids or an impact delta outside
    /// [-1, 1] is refused and nothing is added.
    ///
    /// # Errors
    ///
    /// - `Validation` if the prompt is blank or the options are invalid
    pub fn add_decision(&mut self, input: NewDecision) -> Result<SimulationEvent, SimulationError> {
        input.validate()?;

        let decision = Decision::new(DecisionId::new(), input);
        let event = DecisionAdded {
            event_id: EventId::new(),
            simulation_id: self.id,
            decision_id: decision.id(),
            element: decision.element(),
            option_count: decision.options().len(),
            occurred_at: Timestamp::now(),
        };
        self.decisions.push(decision);

        Ok(SimulationEvent::DecisionAdded(event))
    }

    /// Appends an open tension with a fresh id.
    ///
    /// Like `add_decision`, this refuses input instead of always appending:
    /// the two elements must differ, severity must be at most 10, and the
    /// resolution options follow the same rules as decision options.
    ///
    /// # Errors
    ///
    /// - `Validation` if the pair, severity or options are invalid
    pub fn add_tension(&mut self, input: NewTension) -> Result<SimulationEvent, SimulationError> {
        input.validate()?;

        let tension = Tension::new(TensionId::new(), input);
        let event = TensionAdded {
            event_id: EventId::new(),
            simulation_id: self.id,
            tension_id: tension.id(),
            elements: tension.elements(),
            severity: tension.severity(),
            occurred_at: Timestamp::now(),
        };
        self.tensions.push(tension);

        Ok(SimulationEvent::TensionAdded(event))
    }

    /// Chooses a decision option and applies its impacts.
    ///
    /// # Errors
    ///
    /// - `DecisionNotFound` if no decision has `decision_id`
    /// - `ModelNotInitialized` before the model exists
    /// - `OptionNotFound` if the decision does not offer `option_id`
    /// - `DecisionAlreadyMade` if a choice was already recorded
    pub fn make_decision(
        &mut self,
        decision_id: DecisionId,
        option_id: OptionId,
    ) -> Result<SimulationEvent, SimulationError> {
        let decision = self
            .decisions
            .iter_mut()
            .find(|d| d.id() == decision_id)
            .ok_or(SimulationError::DecisionNotFound(decision_id))?;
        let model = self.model.as_mut().ok_or(SimulationError::ModelNotInitialized)?;

        let option = decision.select(option_id).map_err(|err| match err {
            ChoiceError::UnknownOption(id) => SimulationError::OptionNotFound(id),
            ChoiceError::AlreadyChosen => SimulationError::DecisionAlreadyMade(decision_id),
        })?;
        let applied_impacts = apply_impacts(model, &option.impacts);

        Ok(SimulationEvent::DecisionMade(DecisionMade {
            event_id: EventId::new(),
            simulation_id: self.id,
            decision_id,
            option_id,
            applied_impacts,
            alignment_score: model.alignment_score(),
            occurred_at: Timestamp::now(),
        }))
    }

    /// Resolves a tension with one of its options and applies its impacts.
    ///
    /// # Errors
    ///
    /// - `TensionNotFound` if no tension has `tension_id`
    /// - `OptionNotFound` if the tension does not offer `option_id`
    /// - `ModelNotInitialized` before the model exists
    /// - `TensionAlreadyResolved` if a resolution was already recorded
    pub fn resolve_tension(
        &mut self,
        tension_id: TensionId,
        option_id: OptionId,
    ) -> Result<SimulationEvent, SimulationError> {
        let tension = self
            .tensions
            .iter_mut()
            .find(|t| t.id() == tension_id)
            .ok_or(SimulationError::TensionNotFound(tension_id))?;
        if tension.option(option_id).is_none() {
            return Err(SimulationError::OptionNotFound(option_id));
        }
        let model = self.model.as_mut().ok_or(SimulationError::ModelNotInitialized)?;

        let option = tension.resolve(option_id).map_err(|err| match err {
            ChoiceError::UnknownOption(id) => SimulationError::OptionNotFound(id),
            ChoiceError::AlreadyChosen => SimulationError::TensionAlreadyResolved(tension_id),
        })?;
        let applied_impacts = apply_impacts(model, &option.impacts);

        Ok(SimulationEvent::TensionResolved(TensionResolved {
            event_id: EventId::new(),
            simulation_id: self.id,
            tension_id,
            option_id,
            applied_impacts,
            alignment_score: model.alignment_score(),
            occurred_at: Timestamp::now(),
        }))
    }

    /// Appends a value to a tracked KPI.
    ///
    /// # Errors
    ///
    /// - `Validation` if `value` is not finite
    /// - `KpiNotTracked` if no tracker has `name`
    pub fn update_kpi(&mut self, name: &str, value: f64) -> Result<SimulationEvent, SimulationError> {
        if !value.is_finite() {
            return Err(crate::domain::foundation::ValidationError::invalid_format(
                "kpi.value",
                "must be a finite number",
            )
            .into());
        }
        let tracker = self
            .kpi_trackers
            .iter_mut()
            .find(|t| t.name() == name)
            .ok_or_else(|| SimulationError::KpiNotTracked(name.to_string()))?;

        let sample = tracker.record(value);
        Ok(SimulationEvent::KpiUpdated(KpiUpdated {
            event_id: EventId::new(),
            simulation_id: self.id,
            kpi_name: name.to_string(),
            value,
            history_len: tracker.len(),
            recorded_at: sample.timestamp,
        }))
    }

    /// Clears everything except the simulation id.
    pub fn reset(&mut self) -> SimulationEvent {
        *self = Self::with_id(self.id);
        SimulationEvent::Reset(SimulationReset {
            event_id: EventId::new(),
            simulation_id: self.id,
            occurred_at: Timestamp::now(),
        })
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_impacts(model: &mut SevenSModel, impacts: &[Impact]) -> Vec<AppliedImpact> {
    impacts
        .iter()
        .map(|impact| AppliedImpact::from_change(impact, model.shift_score(impact.element, impact.delta)))
        .collect()
}
