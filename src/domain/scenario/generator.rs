//! Rule-based scenario generation.
//!
//! Tensions are detected from the current model; decisions come from fixed
//! templates personalized with the company name.

use crate::domain::company::CompanyProfile;
use crate::domain::foundation::SevenSElement;
use crate::domain::model::{
    CorporateLevelStrategy, SevenSModel, StructureType, ANNUAL_PERFORMANCE_REVIEWS,
};

use super::{ChoiceOption, NewDecision, NewTension};

/// Change readiness above which annual reviews become a bottleneck.
pub const CHANGE_READINESS_THRESHOLD: f64 = 0.7;

/// Produces tensions and decisions for a simulation.
pub struct ScenarioGenerator;

impl ScenarioGenerator {
    /// Detects tensions implied by the current model.
    ///
    /// - Product development strategy in a mechanistic structure
    /// - Annual performance reviews with staff highly ready for change
    pub fn tensions_for(model: &SevenSModel) -> Vec<NewTension> {
        let mut tensions = Vec::new();

        if model.strategy().corporate_level == CorporateLevelStrategy::ProductDevelopment
            && model.structure().structure_type == StructureType::Mechanistic
        {
            tensions.push(Self::innovation_versus_control());
        }

        if model.systems().hr.performance_management == ANNUAL_PERFORMANCE_REVIEWS
            && model.staff().change_readiness.value() > CHANGE_READINESS_THRESHOLD
        {
            tensions.push(Self::feedback_cadence());
        }

        tensions
    }

    /// Returns the standard decisions for `company` within `scenario_id`.
    pub fn decisions_for(company: &CompanyProfile, scenario_id: u32) -> Vec<NewDecision> {
        vec![
            Self::market_entry(scenario_id).personalized(&company.name),
            Self::leadership_development(scenario_id).personalized(&company.name),
        ]
    }

    fn innovation_versus_control() -> NewTension {
        NewTension::new(
            [SevenSElement::Strategy, SevenSElement::Structure],
            "Your product development strategy requires innovation and flexibility, \
             but your mechanistic structure may hinder creativity and rapid iteration.",
            7,
            vec![
                ChoiceOption::new(
                    "Create cross-functional innovation teams that operate with different \
                     rules than the rest of the organization",
                )
                .with_impact(SevenSElement::Structure, 0.1, "Slightly more organic structure")
                .with_impact(
                    SevenSElement::Strategy,
                    0.2,
                    "Better alignment with product development goals",
                ),
                ChoiceOption::new(
                    "Shift to a hybrid structure with mechanistic elements for operations \
                     and organic elements for innovation",
                )
                .with_impact(SevenSElement::Structure, 0.3, "More balanced structure")
                .with_impact(SevenSElement::Systems, -0.1, "More complex systems to manage"),
                ChoiceOption::new(
                    "Modify strategy to focus more on incremental improvements rather than \
                     disruptive innovation",
                )
                .with_impact(SevenSElement::Strategy, -0.2, "Less ambitious strategy")
                .with_impact(SevenSElement::Structure, 0.1, "Better fit with current structure"),
            ],
        )
    }

    fn feedback_cadence() -> NewTension {
        NewTension::new(
            [SevenSElement::Systems, SevenSElement::Staff],
            "Your staff has high change readiness, but your annual performance review \
             system doesn't provide frequent enough feedback for continuous improvement.",
            5,
            vec![
                ChoiceOption::new("Implement a continuous feedback system with regular check-ins")
                    .with_impact(
                        SevenSElement::Systems,
                        0.2,
                        "More responsive performance management",
                    )
                    .with_impact(SevenSElement::Staff, 0.1, "Increased engagement"),
                ChoiceOption::new("Add quarterly pulse surveys while maintaining annual reviews")
                    .with_impact(SevenSElement::Systems, 0.1, "Somewhat more responsive")
                    .with_impact(SevenSElement::Staff, 0.05, "Slightly increased engagement"),
            ],
        )
    }

    fn market_entry(scenario_id: u32) -> NewDecision {
        NewDecision::new(
            scenario_id,
            SevenSElement::Strategy,
            "{company} has an opportunity to enter a new geographical market. \
             How should you proceed?",
            vec![
                ChoiceOption::new("Rapid expansion with significant investment")
                    .with_impact(SevenSElement::Strategy, 0.2, "Higher growth potential")
                    .with_impact(SevenSElement::Structure, -0.1, "Organizational strain")
                    .with_impact(SevenSElement::Systems, -0.15, "Systems overload"),
                ChoiceOption::new("Phased approach with measured investment")
                    .with_impact(SevenSElement::Strategy, 0.1, "Controlled growth")
                    .with_impact(SevenSElement::Structure, 0.05, "Manageable adaptation")
                    .with_impact(SevenSElement::Systems, 0.05, "Gradual systems scaling"),
                ChoiceOption::new("Partnership with local established player")
                    .with_impact(SevenSElement::Strategy, 0.15, "Faster market access")
                    .with_impact(SevenSElement::Skills, 0.1, "Knowledge acquisition")
                    .with_impact(SevenSElement::SharedValues, -0.05, "Potential culture clash"),
            ],
        )
    }

    fn leadership_development(scenario_id: u32) -> NewDecision {
        NewDecision::new(
            scenario_id,
            SevenSElement::Staff,
            "The board is asking for a leadership development initiative. \
             Which approach should {company} take?",
            vec![
                ChoiceOption::new("Executive coaching for top management only")
                    .with_impact(SevenSElement::Staff, 0.05, "Limited leadership improvement")
                    .with_impact(SevenSElement::Style, 0.1, "More effective senior leadership"),
                ChoiceOption::new("Comprehensive program for all management levels")
                    .with_impact(SevenSElement::Staff, 0.2, "Broad leadership improvement")
                    .with_impact(SevenSElement::Systems, 0.1, "Better management systems")
                    .with_impact(SevenSElement::Skills, 0.15, "Enhanced management skills"),
                ChoiceOption::new("Focus on identifying and developing high-potential employees")
                    .with_impact(SevenSElement::Staff, 0.1, "Targeted improvement")
                    .with_impact(
                        SevenSElement::SharedValues,
                        -0.05,
                        "Potential perception of favoritism",
                    ),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Fraction;
    use crate::domain::model::{ElementPatch, StaffPatch, StrategyPatch};

    fn model_for(structure: StructureType) -> SevenSModel {
        let mut company = CompanyProfile::test_fixture();
        company.structure = structure;
        SevenSModel::seeded(&company, Fraction::new(0.7))
    }

    #[test]
    fn default_model_has_no_tensions() {
        assert!(ScenarioGenerator::tensions_for(&model_for(StructureType::Mechanistic)).is_empty());
    }

    #[test]
    fn product_development_in_mechanistic_structure_creates_tension() {
        let mut model = model_for(StructureType::Mechanistic);
        model.apply_patch(&ElementPatch::Strategy(StrategyPatch {
            corporate_level: Some(CorporateLevelStrategy::ProductDevelopment),
            ..Default::default()
        }));

        let tensions = ScenarioGenerator::tensions_for(&model);

        assert_eq!(tensions.len(), 1);
        assert_eq!(
            tensions[0].elements,
            [SevenSElement::Strategy, SevenSElement::Structure]
        );
        assert_eq!(tensions[0].severity, 7);
        assert_eq!(tensions[0].resolution_options.len(), 3);
    }

    #[test]
    fn organic_structure_avoids_innovation_tension() {
        let mut model = model_for(StructureType::Organic);
        model.apply_patch(&ElementPatch::Strategy(StrategyPatch {
            corporate_level: Some(CorporateLevelStrategy::ProductDevelopment),
            ..Default::default()
        }));
        assert!(ScenarioGenerator::tensions_for(&model).is_empty());
    }

    #[test]
    fn eager_staff_with_annual_reviews_creates_tension() {
        let mut model = model_for(StructureType::Hybrid);
        model.apply_patch(&ElementPatch::Staff(StaffPatch {
            change_readiness: Some(Fraction::new(0.8)),
            ..Default::default()
        }));

        let tensions = ScenarioGenerator::tensions_for(&model);

        assert_eq!(tensions.len(), 1);
        assert_eq!(tensions[0].elements, [SevenSElement::Systems, SevenSElement::Staff]);
        assert_eq!(tensions[0].severity, 5);
    }

    #[test]
    fn generated_scenarios_are_valid() {
        let company = CompanyProfile::test_fixture();
        for decision in ScenarioGenerator::decisions_for(&company, 1) {
            decision.validate().unwrap();
            assert!(decision.description.contains("Acme Corp"));
        }
        ScenarioGenerator::innovation_versus_control().validate().unwrap();
        ScenarioGenerator::feedback_cadence().validate().unwrap();
    }

    #[test]
    fn every_template_option_carries_impacts() {
        let company = CompanyProfile::test_fixture();
        for decision in ScenarioGenerator::decisions_for(&company, 2) {
            assert_eq!(decision.scenario_id, 2);
            assert!(decision.options.iter().all(|option| !option.impacts.is_empty()));
        }
    }
}
