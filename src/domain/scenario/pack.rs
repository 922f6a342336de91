//! Scenario packs: decisions and tensions authored in YAML.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::ValidationError;

use super::{NewDecision, NewTension};

/// Errors raised while loading a scenario pack.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to parse scenario pack: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid decision #{index}: {source}")]
    InvalidDecision {
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("Invalid tension #{index}: {source}")]
    InvalidTension {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

/// A set of decisions and tensions to add to a simulation.
///
/// ```yaml
/// name: Market entry
/// decisions:
///   - element: Strategy
///     description: "{company} may open a second plant."
///     options:
///       - description: Build now
///         impacts:
///           - { element: Strategy, delta: 0.2, description: Capacity }
/// tensions: []
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPack {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub decisions: Vec<NewDecision>,
    #[serde(default)]
    pub tensions: Vec<NewTension>,
}

impl ScenarioPack {
    /// Parses and validates a pack.
    pub fn from_yaml(yaml: &str) -> Result<Self, ScenarioError> {
        let pack: ScenarioPack = serde_yaml::from_str(yaml)?;
        pack.validate()?;
        Ok(pack)
    }

    /// Serializes the pack back to YAML.
    pub fn to_yaml(&self) -> Result<String, ScenarioError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validates every entry, reporting the first failure with its position.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        for (index, decision) in self.decisions.iter().enumerate() {
            decision
                .validate()
                .map_err(|source| ScenarioError::InvalidDecision { index, source })?;
        }
        for (index, tension) in self.tensions.iter().enumerate() {
            tension
                .validate()
                .map_err(|source| ScenarioError::InvalidTension { index, source })?;
        }
        Ok(())
    }

    /// Returns the decisions with `{company}` replaced.
    pub fn personalized_decisions(&self, company_name: &str) -> Vec<NewDecision> {
        self.decisions
            .iter()
            .cloned()
            .map(|decision| decision.personalized(company_name))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty() && self.tensions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SevenSElement;

    const PACK: &str = r#"
name: Expansion
decisions:
  - element: Strategy
    description: "{company} may open a second plant."
    options:
      - description: Build now
        impacts:
          - { element: Strategy, delta: 0.2, description: Capacity }
          - { element: Shared Values, value: -0.05 }
      - description: Wait a year
tensions:
  - elements: [Style, Staff]
    description: Command-and-control leaders frustrate an autonomous workforce.
    severity: 6
    resolutionOptions:
      - description: Coach leaders in delegation
        impacts:
          - { element: Style, delta: 0.15 }
"#;

    #[test]
    fn from_yaml_parses_decisions_and_tensions() {
        let pack = ScenarioPack::from_yaml(PACK).unwrap();

        assert_eq!(pack.name, "Expansion");
        assert_eq!(pack.decisions.len(), 1);
        assert_eq!(pack.decisions[0].scenario_id, 1);
        assert_eq!(pack.decisions[0].options[0].impacts[1].element, SevenSElement::SharedValues);
        assert_eq!(pack.decisions[0].options[0].impacts[1].delta, -0.05);
        assert_eq!(pack.tensions[0].elements, [SevenSElement::Style, SevenSElement::Staff]);
    }

    #[test]
    fn options_without_ids_get_distinct_ids() {
        let pack = ScenarioPack::from_yaml(PACK).unwrap();
        let options = &pack.decisions[0].options;
        assert_ne!(options[0].id, options[1].id);
    }

    #[test]
    fn personalized_decisions_fill_company_name() {
        let pack = ScenarioPack::from_yaml(PACK).unwrap();
        let decisions = pack.personalized_decisions("Globex");
        assert_eq!(decisions[0].description, "Globex may open a second plant.");
    }

    #[test]
    fn from_yaml_reports_invalid_entry_position() {
        let yaml = r#"
tensions:
  - elements: [Style, Style]
    description: Nonsense
    severity: 3
    resolutionOptions:
      - description: Anything
"#;
        match ScenarioPack::from_yaml(yaml) {
            Err(ScenarioError::InvalidTension { index, .. }) => assert_eq!(index, 0),
            other => panic!("Expected InvalidTension, got {:?}", other),
        }
    }

    #[test]
    fn from_yaml_rejects_malformed_documents() {
        assert!(matches!(
            ScenarioPack::from_yaml("decisions: [unterminated"),
            Err(ScenarioError::Parse(_))
        ));
    }

    #[test]
    fn empty_document_is_an_empty_pack() {
        let pack = ScenarioPack::from_yaml("{}").unwrap();
        assert!(pack.is_empty());
    }
}
