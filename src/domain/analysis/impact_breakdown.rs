//! Decision impact breakdown - per-element totals of chosen impacts.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SevenSElement;
use crate::domain::scenario::Decision;

use super::AlignmentCalculator;

/// Summed impacts on one element.
///
/// `negative` is reported as a non-positive number so the two totals can be
/// stacked around zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementImpact {
    pub element: SevenSElement,
    pub positive: f64,
    pub negative: f64,
}

impl ElementImpact {
    /// Net effect of all chosen impacts on the element.
    pub fn net(&self) -> f64 {
        AlignmentCalculator::round_to_hundredths(self.positive + self.negative)
    }
}

/// Builds the impact breakdown over made decisions.
pub struct ImpactBreakdown;

impl ImpactBreakdown {
    /// Returns one entry per element, in canonical order, rounded to two decimals.
    pub fn from_decisions(decisions: &[Decision]) -> Vec<ElementImpact> {
        SevenSElement::all()
            .iter()
            .map(|element| {
                let (positive, negative) = decisions
                    .iter()
                    .filter_map(Decision::selected)
                    .flat_map(|option| option.impacts.iter())
                    .filter(|impact| impact.element == *element)
                    .fold((0.0, 0.0), |(positive, negative), impact| {
                        if impact.delta > 0.0 {
                            (positive + impact.delta, negative)
                        } else {
                            (positive, negative + impact.delta.abs())
                        }
                    });

                ElementImpact {
                    element: *element,
                    positive: AlignmentCalculator::round_to_hundredths(positive),
                    negative: -AlignmentCalculator::round_to_hundredths(negative),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DecisionId;
    use crate::domain::scenario::{ChoiceOption, NewDecision};

    fn made(options: Vec<ChoiceOption>, pick: usize) -> Decision {
        let mut decision = Decision::new(
            DecisionId::new(),
            NewDecision::new(1, SevenSElement::Strategy, "Choose", options),
        );
        let option_id = decision.options()[pick].id;
        decision.select(option_id).unwrap();
        decision
    }

    #[test]
    fn no_decisions_yield_all_zero_entries() {
        let breakdown = ImpactBreakdown::from_decisions(&[]);
        assert_eq!(breakdown.len(), 7);
        assert!(breakdown.iter().all(|e| e.positive == 0.0 && e.negative == 0.0));
    }

    #[test]
    fn only_chosen_options_are_counted() {
        let decision = made(
            vec![
                ChoiceOption::new("Rapid").with_impact(SevenSElement::Strategy, 0.2, ""),
                ChoiceOption::new("Phased")
                    .with_impact(SevenSElement::Strategy, 0.1, "")
                    .with_impact(SevenSElement::Systems, -0.05, ""),
            ],
            1,
        );

        let breakdown = ImpactBreakdown::from_decisions(&[decision]);

        assert_eq!(breakdown[0].element, SevenSElement::Strategy);
        assert_eq!(breakdown[0].positive, 0.1);
        assert_eq!(breakdown[2].element, SevenSElement::Systems);
        assert_eq!(breakdown[2].negative, -0.05);
        assert_eq!(breakdown[2].net(), -0.05);
    }

    #[test]
    fn totals_accumulate_across_decisions() {
        let first = made(
            vec![ChoiceOption::new("A").with_impact(SevenSElement::Staff, 0.1, "")],
            0,
        );
        let second = made(
            vec![ChoiceOption::new("B")
                .with_impact(SevenSElement::Staff, 0.2, "")
                .with_impact(SevenSElement::Staff, -0.05, "")],
            0,
        );

        let breakdown = ImpactBreakdown::from_decisions(&[first, second]);
        let staff = breakdown
            .iter()
            .find(|e| e.element == SevenSElement::Staff)
            .unwrap();

        assert_eq!(staff.positive, 0.3);
        assert_eq!(staff.negative, -0.05);
        assert_eq!(staff.net(), 0.25);
    }
}
