//! Partial updates to a single 7S element.
//!
//! A patch names its element through its variant, so every update maps to
//! exactly one element record. Fields left as `None` keep their current value.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Fraction, SevenSElement};

use super::{
    BusinessLevelStrategy, CorporateLevelStrategy, FunctionalLevelStrategy, HrSystem,
    LeadershipStyle, SharedValuesElement, SkillsElement, StaffElement, StrategyElement,
    StructureElement, StructureType, StyleElement, SystemsElement,
};

/// Overwrites `target` with `source` when the source is set.
fn merge<T: Clone>(target: &mut T, source: &Option<T>) {
    if let Some(value) = source {
        *target = value.clone();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StrategyPatch {
    pub corporate_level: Option<CorporateLevelStrategy>,
    pub business_level: Option<BusinessLevelStrategy>,
    pub functional_level: Option<FunctionalLevelStrategy>,
    pub alignment_score: Option<Fraction>,
}

impl StrategyPatch {
    fn apply_to(&self, element: &mut StrategyElement) {
        merge(&mut element.corporate_level, &self.corporate_level);
        merge(&mut element.business_level, &self.business_level);
        merge(&mut element.functional_level, &self.functional_level);
        merge(&mut element.alignment_score, &self.alignment_score);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StructurePatch {
    #[serde(rename = "type")]
    pub structure_type: Option<StructureType>,
    pub centralization: Option<Fraction>,
    pub formalization: Option<Fraction>,
    pub complexity: Option<Fraction>,
    pub alignment_score: Option<Fraction>,
}

impl StructurePatch {
    fn apply_to(&self, element: &mut StructureElement) {
        merge(&mut element.structure_type, &self.structure_type);
        merge(&mut element.centralization, &self.centralization);
        merge(&mut element.formalization, &self.formalization);
        merge(&mut element.complexity, &self.complexity);
        merge(&mut element.alignment_score, &self.alignment_score);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemsPatch {
    pub financial: Option<String>,
    pub operational: Option<String>,
    pub hr: Option<HrSystem>,
    pub information: Option<String>,
    pub alignment_score: Option<Fraction>,
}

impl SystemsPatch {
    fn apply_to(&self, element: &mut SystemsElement) {
        merge(&mut element.financial, &self.financial);
        merge(&mut element.operational, &self.operational);
        merge(&mut element.hr, &self.hr);
        merge(&mut element.information, &self.information);
        merge(&mut element.alignment_score, &self.alignment_score);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SharedValuesPatch {
    pub values: Option<Vec<String>>,
    pub alignment_score: Option<Fraction>,
}

impl SharedValuesPatch {
    fn apply_to(&self, element: &mut SharedValuesElement) {
        merge(&mut element.values, &self.values);
        merge(&mut element.alignment_score, &self.alignment_score);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillsPatch {
    pub core_competencies: Option<Vec<String>>,
    pub required_skills: Option<Vec<String>>,
    pub alignment_score: Option<Fraction>,
}

impl SkillsPatch {
    fn apply_to(&self, element: &mut SkillsElement) {
        merge(&mut element.core_competencies, &self.core_competencies);
        merge(&mut element.required_skills, &self.required_skills);
        merge(&mut element.alignment_score, &self.alignment_score);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StylePatch {
    pub leadership_style: Option<LeadershipStyle>,
    pub decision_making: Option<String>,
    pub alignment_score: Option<Fraction>,
}

impl StylePatch {
    fn apply_to(&self, element: &mut StyleElement) {
        merge(&mut element.leadership_style, &self.leadership_style);
        merge(&mut element.decision_making, &self.decision_making);
        merge(&mut element.alignment_score, &self.alignment_score);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffPatch {
    pub composition: Option<String>,
    pub capabilities: Option<String>,
    pub change_readiness: Option<Fraction>,
    pub alignment_score: Option<Fraction>,
}

impl StaffPatch {
    fn apply_to(&self, element: &mut StaffElement) {
        merge(&mut element.composition, &self.composition);
        merge(&mut element.capabilities, &self.capabilities);
        merge(&mut element.change_readiness, &self.change_readiness);
        merge(&mut element.alignment_score, &self.alignment_score);
    }
}

/// A partial record for exactly one of the seven elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "element", rename_all = "snake_case")]
pub enum ElementPatch {
    Strategy(StrategyPatch),
    Structure(StructurePatch),
    Systems(SystemsPatch),
    SharedValues(SharedValuesPatch),
    Skills(SkillsPatch),
    Style(StylePatch),
    Staff(StaffPatch),
}

impl ElementPatch {
    /// Builds a patch that only sets the alignment score of `element`.
    pub fn alignment_score(element: SevenSElement, score: Fraction) -> Self {
        let score = Some(score);
        match element {
            SevenSElement::Strategy => ElementPatch::Strategy(StrategyPatch {
                alignment_score: score,
                ..Default::default()
            }),
            SevenSElement::Structure => ElementPatch::Structure(StructurePatch {
                alignment_score: score,
                ..Default::default()
            }),
            SevenSElement::Systems => ElementPatch::Systems(SystemsPatch {
                alignment_score: score,
                ..Default::default()
            }),
            SevenSElement::SharedValues => ElementPatch::SharedValues(SharedValuesPatch {
                alignment_score: score,
                ..Default::default()
            }),
            SevenSElement::Skills => ElementPatch::Skills(SkillsPatch {
                alignment_score: score,
                ..Default::default()
            }),
            SevenSElement::Style => ElementPatch::Style(StylePatch {
                alignment_score: score,
                ..Default::default()
            }),
            SevenSElement::Staff => ElementPatch::Staff(StaffPatch {
                alignment_score: score,
                ..Default::default()
            }),
        }
    }

    /// Returns the element this patch targets.
    pub fn element(&self) -> SevenSElement {
        match self {
            ElementPatch::Strategy(_) => SevenSElement::Strategy,
            ElementPatch::Structure(_) => SevenSElement::Structure,
            ElementPatch::Systems(_) => SevenSElement::Systems,
            ElementPatch::SharedValues(_) => SevenSElement::SharedValues,
            ElementPatch::Skills(_) => SevenSElement::Skills,
            ElementPatch::Style(_) => SevenSElement::Style,
            ElementPatch::Staff(_) => SevenSElement::Staff,
        }
    }

    pub(super) fn apply_to(&self, model: &mut super::SevenSModel) {
        match self {
            ElementPatch::Strategy(patch) => patch.apply_to(&mut model.strategy),
            ElementPatch::Structure(patch) => patch.apply_to(&mut model.structure),
            ElementPatch::Systems(patch) => patch.apply_to(&mut model.systems),
            ElementPatch::SharedValues(patch) => patch.apply_to(&mut model.shared_values),
            ElementPatch::Skills(patch) => patch.apply_to(&mut model.skills),
            ElementPatch::Style(patch) => patch.apply_to(&mut model.style),
            ElementPatch::Staff(patch) => patch.apply_to(&mut model.staff),
        }
    }
}
