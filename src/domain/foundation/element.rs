//! SevenSElement enum naming the seven dimensions of the model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The seven McKinsey 7S elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SevenSElement {
    #[serde(alias = "Strategy")]
    Strategy,
    #[serde(alias = "Structure")]
    Structure,
    #[serde(alias = "Systems")]
    Systems,
    #[serde(alias = "Shared Values", alias = "SharedValues")]
    SharedValues,
    #[serde(alias = "Skills")]
    Skills,
    #[serde(alias = "Style")]
    Style,
    #[serde(alias = "Staff")]
    Staff,
}

impl SevenSElement {
    /// Returns all elements in canonical order.
    pub fn all() -> &'static [SevenSElement] {
        &[
            SevenSElement::Strategy,
            SevenSElement::Structure,
            SevenSElement::Systems,
            SevenSElement::SharedValues,
            SevenSElement::Skills,
            SevenSElement::Style,
            SevenSElement::Staff,
        ]
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            SevenSElement::Strategy => "Strategy",
            SevenSElement::Structure => "Structure",
            SevenSElement::Systems => "Systems",
            SevenSElement::SharedValues => "Shared Values",
            SevenSElement::Skills => "Skills",
            SevenSElement::Style => "Style",
            SevenSElement::Staff => "Staff",
        }
    }

    /// Returns the camelCase key used by the model's JSON shape.
    pub fn key(&self) -> &'static str {
        match self {
            SevenSElement::Strategy => "strategy",
            SevenSElement::Structure => "structure",
            SevenSElement::Systems => "systems",
            SevenSElement::SharedValues => "sharedValues",
            SevenSElement::Skills => "skills",
            SevenSElement::Style => "style",
            SevenSElement::Staff => "staff",
        }
    }

    /// Hard elements are the ones management can change directly.
    pub fn is_hard(&self) -> bool {
        matches!(
            self,
            SevenSElement::Strategy | SevenSElement::Structure | SevenSElement::Systems
        )
    }

    /// Soft elements are people and culture; Shared Values sits at the centre.
    pub fn is_soft(&self) -> bool {
        !self.is_hard()
    }

    /// Chart color associated with the element.
    pub fn color_hex(&self) -> &'static str {
        match self {
            SevenSElement::Strategy => "#3B82F6",
            SevenSElement::Structure => "#10B981",
            SevenSElement::Systems => "#F59E0B",
            SevenSElement::SharedValues => "#8B5CF6",
            SevenSElement::Skills => "#EC4899",
            SevenSElement::Style => "#EF4444",
            SevenSElement::Staff => "#6366F1",
        }
    }
}

impl fmt::Display for SevenSElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for SevenSElement {
    type Err = ValidationError;

    /// Accepts display names ("Shared Values"), camelCase keys ("sharedValues")
    /// and snake_case ("shared_values"), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        SevenSElement::all()
            .iter()
            .copied()
            .find(|element| element.key().to_lowercase() == normalized)
            .ok_or_else(|| {
                ValidationError::invalid_format("element", format!("unknown 7S element '{}'", s))
            })
    }
}
