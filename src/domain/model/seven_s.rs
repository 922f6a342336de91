//! SevenSModel aggregate: the seven element records plus the overall score.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::AlignmentCalculator;
use crate::domain::company::CompanyProfile;
use crate::domain::foundation::{Fraction, SevenSElement};

use super::{
    ElementPatch, SharedValuesElement, SkillsElement, StaffElement, StrategyElement,
    StructureElement, StyleElement, SystemsElement,
};

/// Score every element starts with after seeding.
pub const DEFAULT_INITIAL_SCORE: f64 = 0.7;

/// The seven-element model.
///
/// # Invariants
///
/// - `alignment_score` equals the rounded mean of the seven element scores
///   after every mutation; fields are only reachable mutably through methods
///   that recompute it.
/// - Every score is within [0, 1] (enforced by `Fraction`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ModelRecord")]
pub struct SevenSModel {
    pub(super) strategy: StrategyElement,
    pub(super) structure: StructureElement,
    pub(super) systems: SystemsElement,
    pub(super) shared_values: SharedValuesElement,
    pub(super) skills: SkillsElement,
    pub(super) style: StyleElement,
    pub(super) staff: StaffElement,
    alignment_score: Fraction,
}

/// Score change produced by shifting one element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreChange {
    pub element: SevenSElement,
    pub delta: f64,
    pub before: Fraction,
    pub after: Fraction,
}

impl SevenSModel {
    /// Seeds a model for `company`.
    ///
    /// Starts from the stock defaults, takes structure type and shared values
    /// from the profile, and gives all seven elements `initial_score`.
    pub fn seeded(company: &CompanyProfile, initial_score: Fraction) -> Self {
        let mut model = Self::from_elements(
            StrategyElement::default(),
            StructureElement {
                structure_type: company.structure,
                ..StructureElement::default()
            },
            SystemsElement::default(),
            SharedValuesElement {
                values: company.core_values.clone(),
                ..SharedValuesElement::default()
            },
            SkillsElement::default(),
            StyleElement::default(),
            StaffElement::default(),
        );

        for element in SevenSElement::all() {
            *model.score_slot(*element) = initial_score;
        }
        model.recompute();
        model
    }

    /// Assembles a model from explicit element records.
    pub fn from_elements(
        strategy: StrategyElement,
        structure: StructureElement,
        systems: SystemsElement,
        shared_values: SharedValuesElement,
        skills: SkillsElement,
        style: StyleElement,
        staff: StaffElement,
    ) -> Self {
        let mut model = Self {
            strategy,
            structure,
            systems,
            shared_values,
            skills,
            style,
            staff,
            alignment_score: Fraction::ZERO,
        };
        model.recompute();
        model
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn strategy(&self) -> &StrategyElement {
        &self.strategy
    }

    pub fn structure(&self) -> &StructureElement {
        &self.structure
    }

    pub fn systems(&self) -> &SystemsElement {
        &self.systems
    }

    pub fn shared_values(&self) -> &SharedValuesElement {
        &self.shared_values
    }

    pub fn skills(&self) -> &SkillsElement {
        &self.skills
    }

    pub fn style(&self) -> &StyleElement {
        &self.style
    }

    pub fn staff(&self) -> &StaffElement {
        &self.staff
    }

    /// Returns the aggregate alignment score.
    pub fn alignment_score(&self) -> Fraction {
        self.alignment_score
    }

    /// Returns the alignment score of one element.
    pub fn element_score(&self, element: SevenSElement) -> Fraction {
        match element {
            SevenSElement::Strategy => self.strategy.alignment_score,
            SevenSElement::Structure => self.structure.alignment_score,
            SevenSElement::Systems => self.systems.alignment_score,
            SevenSElement::SharedValues => self.shared_values.alignment_score,
            SevenSElement::Skills => self.skills.alignment_score,
            SevenSElement::Style => self.style.alignment_score,
            SevenSElement::Staff => self.staff.alignment_score,
        }
    }

    /// Returns every element with its score, in canonical order.
    pub fn element_scores(&self) -> Vec<(SevenSElement, Fraction)> {
        SevenSElement::all()
            .iter()
            .map(|element| (*element, self.element_score(*element)))
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Shallow-merges `patch` into its element and recomputes the aggregate.
    pub fn apply_patch(&mut self, patch: &ElementPatch) {
        patch.apply_to(self);
        self.recompute();
    }

    /// Adds `delta` to an element's score, clamped to [0, 1], and recomputes.
    pub fn shift_score(&mut self, element: SevenSElement, delta: f64) -> ScoreChange {
        let slot = self.score_slot(element);
        let before = *slot;
        let after = before.shifted_by(delta);
        *slot = after;
        self.recompute();

        ScoreChange {
            element,
            delta,
            before,
            after,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn score_slot(&mut self, element: SevenSElement) -> &mut Fraction {
        match element {
            SevenSElement::Strategy => &mut self.strategy.alignment_score,
            SevenSElement::Structure => &mut self.structure.alignment_score,
            SevenSElement::Systems => &mut self.systems.alignment_score,
            SevenSElement::SharedValues => &mut self.shared_values.alignment_score,
            SevenSElement::Skills => &mut self.skills.alignment_score,
            SevenSElement::Style => &mut self.style.alignment_score,
            SevenSElement::Staff => &mut self.staff.alignment_score,
        }
    }

    fn recompute(&mut self) {
        let scores: Vec<f64> = SevenSElement::all()
            .iter()
            .map(|element| self.element_score(*element).value())
            .collect();
        self.alignment_score = Fraction::new(AlignmentCalculator::compute_overall(&scores));
    }
}

/// Wire shape of a model; the aggregate is recomputed rather than trusted.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelRecord {
    strategy: StrategyElement,
    structure: StructureElement,
    systems: SystemsElement,
    shared_values: SharedValuesElement,
    skills: SkillsElement,
    style: StyleElement,
    staff: StaffElement,
}

impl From<ModelRecord> for SevenSModel {
    fn from(record: ModelRecord) -> Self {
        Self::from_elements(
            record.strategy,
            record.structure,
            record.systems,
            record.shared_values,
            record.skills,
            record.style,
            record.staff,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::company::CompanyProfile;
    use crate::domain::model::StructureType;

    fn seeded() -> SevenSModel {
        SevenSModel::seeded(
            &CompanyProfile::test_fixture(),
            Fraction::new(DEFAULT_INITIAL_SCORE),
        )
    }

    fn fresh_mean(model: &SevenSModel) -> f64 {
        let scores: Vec<f64> = model.element_scores().iter().map(|(_, s)| s.value()).collect();
        AlignmentCalculator::compute_overall(&scores)
    }

    #[test]
    fn seeded_model_scores_exactly_point_seven() {
        let model = seeded();
        assert_eq!(model.alignment_score().value(), 0.7);
        for (_, score) in model.element_scores() {
            assert_eq!(score.value(), 0.7);
        }
    }

    #[test]
    fn seeded_model_takes_structure_and_values_from_company() {
        let company = CompanyProfile::test_fixture();
        let model = seeded();
        assert_eq!(model.structure().structure_type, company.structure);
        assert_eq!(model.shared_values().values, company.core_values);
        assert_eq!(model.staff().change_readiness.value(), 0.6);
    }

    #[test]
    fn strategy_patch_moves_aggregate_to_point_seven_three() {
        let mut model = seeded();
        model.apply_patch(&ElementPatch::alignment_score(
            SevenSElement::Strategy,
            Fraction::new(0.9),
        ));

        assert_eq!(model.strategy().alignment_score.value(), 0.9);
        for element in &SevenSElement::all()[1..] {
            assert_eq!(model.element_score(*element).value(), 0.7);
        }
        assert_eq!(model.alignment_score().value(), 0.73);
    }

    #[test]
    fn shift_score_clamps_at_the_top() {
        let mut model = seeded();
        let change = model.shift_score(SevenSElement::Skills, 0.5);
        assert_eq!(change.before.value(), 0.7);
        assert_eq!(change.after, Fraction::ONE);
        assert_eq!(model.alignment_score().value(), fresh_mean(&model));
    }

    #[test]
    fn shift_score_clamps_at_the_bottom() {
        let mut model = seeded();
        model.shift_score(SevenSElement::Style, -2.0);
        assert_eq!(model.style().alignment_score, Fraction::ZERO);
        assert_eq!(model.alignment_score().value(), fresh_mean(&model));
    }

    #[test]
    fn patch_without_score_keeps_aggregate() {
        let mut model = seeded();
        model.apply_patch(&ElementPatch::Structure(crate::domain::model::StructurePatch {
            structure_type: Some(StructureType::Organic),
            ..Default::default()
        }));
        assert_eq!(model.structure().structure_type, StructureType::Organic);
        assert_eq!(model.alignment_score().value(), 0.7);
    }

    #[test]
    fn deserialization_recomputes_stale_aggregate() {
        let mut json = serde_json::to_value(seeded()).unwrap();
        json["alignmentScore"] = serde_json::json!(0.1);
        json["strategy"]["alignmentScore"] = serde_json::json!(0.0);

        let model: SevenSModel = serde_json::from_value(json).unwrap();
        assert_eq!(model.alignment_score().value(), fresh_mean(&model));
        assert_eq!(model.alignment_score().value(), 0.6);
    }
}
