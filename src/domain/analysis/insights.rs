//! Insight rules - narrative feedback derived from the model and decisions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SevenSElement;
use crate::domain::model::SevenSModel;
use crate::domain::scenario::Decision;

/// Overall score above which alignment counts as strong.
pub const STRONG_ALIGNMENT_THRESHOLD: f64 = 0.8;

/// Overall score below which alignment counts as weak.
pub const WEAK_ALIGNMENT_THRESHOLD: f64 = 0.5;

/// Element score above which strategy and structure count as a fit.
pub const FIT_THRESHOLD: f64 = 0.7;

/// Systems score below which systems need attention.
pub const SYSTEMS_ATTENTION_THRESHOLD: f64 = 0.6;

/// Mean people score above which people factors count as strong.
pub const STRONG_PEOPLE_THRESHOLD: f64 = 0.75;

/// Absolute impact delta beyond which a decision counts as significant.
pub const SIGNIFICANT_IMPACT: f64 = 0.15;

/// Tone of an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Positive,
    Negative,
    Neutral,
}

/// A single piece of feedback shown with the results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub description: String,
    pub kind: InsightKind,
}

impl Insight {
    fn new(title: &str, description: impl Into<String>, kind: InsightKind) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            kind,
        }
    }
}

/// Generates insights from a finished or in-progress simulation.
pub struct InsightGenerator;

impl InsightGenerator {
    /// Applies every rule in order: overall alignment, strategy/structure fit,
    /// systems, people factors, then significant decision impacts.
    pub fn generate(model: &SevenSModel, decisions: &[Decision]) -> Vec<Insight> {
        let mut insights = vec![Self::overall(model)];
        insights.extend(Self::strategy_structure_fit(model));
        insights.extend(Self::systems(model));
        insights.extend(Self::people_factors(model));
        insights.extend(Self::decision_impacts(decisions));
        insights
    }

    fn overall(model: &SevenSModel) -> Insight {
        let score = model.alignment_score().value();
        if score > STRONG_ALIGNMENT_THRESHOLD {
            Insight::new(
                "Strong Organizational Alignment",
                "Your organization shows excellent alignment across the 7S elements, \
                 providing a solid foundation for strategic execution.",
                InsightKind::Positive,
            )
        } else if score < WEAK_ALIGNMENT_THRESHOLD {
            Insight::new(
                "Alignment Challenges",
                "Your organization has significant misalignments that may hinder strategic \
                 execution. Focus on aligning the 7S elements more effectively.",
                InsightKind::Negative,
            )
        } else {
            Insight::new(
                "Moderate Alignment",
                "Your organization has reasonable alignment with some areas that could be \
                 improved for better strategic execution.",
                InsightKind::Neutral,
            )
        }
    }

    fn strategy_structure_fit(model: &SevenSModel) -> Option<Insight> {
        let strategy = model.strategy().alignment_score.value();
        let structure = model.structure().alignment_score.value();

        if strategy > FIT_THRESHOLD && structure > FIT_THRESHOLD {
            Some(Insight::new(
                "Strategy-Structure Fit",
                "Your organizational structure supports your strategic direction well, \
                 enabling effective execution.",
                InsightKind::Positive,
            ))
        } else if strategy > FIT_THRESHOLD && structure < WEAK_ALIGNMENT_THRESHOLD {
            Some(Insight::new(
                "Strategy-Structure Mismatch",
                "Your ambitious strategy may be constrained by your current organizational \
                 structure. Consider structural adjustments.",
                InsightKind::Negative,
            ))
        } else {
            None
        }
    }

    fn systems(model: &SevenSModel) -> Option<Insight> {
        (model.systems().alignment_score.value() < SYSTEMS_ATTENTION_THRESHOLD).then(|| {
            Insight::new(
                "Systems Need Attention",
                "Your organizational systems may not adequately support your strategy and \
                 structure. Review and update key processes.",
                InsightKind::Negative,
            )
        })
    }

    fn people_factors(model: &SevenSModel) -> Option<Insight> {
        let people = [
            model.staff().alignment_score.value(),
            model.skills().alignment_score.value(),
            model.style().alignment_score.value(),
        ];
        let mean = people.iter().sum::<f64>() / people.len() as f64;

        if mean > STRONG_PEOPLE_THRESHOLD {
            Some(Insight::new(
                "Strong People Factors",
                "Your staff capabilities, skills development, and leadership style are \
                 well-aligned and support your strategic direction.",
                InsightKind::Positive,
            ))
        } else if mean < WEAK_ALIGNMENT_THRESHOLD {
            Some(Insight::new(
                "People Factors Lagging",
                "Your human elements (staff, skills, leadership style) need attention to \
                 better support your strategic objectives.",
                InsightKind::Negative,
            ))
        } else {
            None
        }
    }

    fn decision_impacts(decisions: &[Decision]) -> Vec<Insight> {
        let chosen: Vec<_> = decisions
            .iter()
            .filter_map(Decision::selected)
            .flat_map(|option| option.impacts.iter())
            .collect();

        let raised: Vec<SevenSElement> = chosen
            .iter()
            .filter(|impact| impact.delta > SIGNIFICANT_IMPACT)
            .map(|impact| impact.element)
            .collect();
        let lowered: Vec<SevenSElement> = chosen
            .iter()
            .filter(|impact| impact.delta < -SIGNIFICANT_IMPACT)
            .map(|impact| impact.element)
            .collect();

        let mut insights = Vec::new();
        if !raised.is_empty() {
            insights.push(Insight::new(
                "High-Impact Decisions",
                format!(
                    "Some of your strategic decisions had significant positive effects, \
                     particularly on {}.",
                    join_names(&raised)
                ),
                InsightKind::Positive,
            ));
        }
        if !lowered.is_empty() {
            insights.push(Insight::new(
                "Challenging Decisions",
                format!(
                    "Some decisions had notable negative consequences, particularly affecting \
                     {}. Consider mitigation strategies.",
                    join_names(&lowered)
                ),
                InsightKind::Negative,
            ));
        }
        insights
    }
}

fn join_names(elements: &[SevenSElement]) -> String {
    elements
        .iter()
        .map(SevenSElement::display_name)
        .collect::<Vec<_>>()
        .join(", ")
}
