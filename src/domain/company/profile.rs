//! Company profile: the organization being simulated.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{CompanyId, ValidationError};
use crate::domain::model::StructureType;

/// Maximum length for a company name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Headcount bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanySize {
    Small,
    Medium,
    Large,
    Enterprise,
}

/// Footprint of operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeographicalPresence {
    Local,
    Regional,
    Global,
}

/// A tracked key performance indicator with its starting value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiDefinition {
    pub name: String,
    pub current: f64,
    pub target: f64,
    pub unit: String,
}

impl KpiDefinition {
    pub fn new(name: impl Into<String>, current: f64, target: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current,
            target,
            unit: unit.into(),
        }
    }
}

/// Descriptive profile entered once at the start of a simulation.
///
/// Replaced wholesale, never edited field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub id: CompanyId,
    pub name: String,
    pub industry: String,
    pub sector: String,
    pub size: CompanySize,
    pub geographical_presence: GeographicalPresence,
    pub strategic_focus: String,
    pub mission: String,
    pub vision: String,
    pub core_values: Vec<String>,
    pub structure: StructureType,
    pub systems: Vec<String>,
    pub workforce_characteristics: String,
    pub leadership_style: String,
    pub culture: String,
    pub market_challenges: Vec<String>,
    pub past_strategic_moves: Vec<String>,
    pub kpis: Vec<KpiDefinition>,
}

impl CompanyProfile {
    /// Creates a profile with the required identity fields; everything else
    /// starts empty and can be filled in through the public fields.
    pub fn new(
        name: impl Into<String>,
        industry: impl Into<String>,
        size: CompanySize,
        structure: StructureType,
    ) -> Self {
        Self {
            id: CompanyId::new(),
            name: name.into(),
            industry: industry.into(),
            sector: String::new(),
            size,
            geographical_presence: GeographicalPresence::Local,
            strategic_focus: String::new(),
            mission: String::new(),
            vision: String::new(),
            core_values: Vec::new(),
            structure,
            systems: Vec::new(),
            workforce_characteristics: String::new(),
            leadership_style: String::new(),
            culture: String::new(),
            market_challenges: Vec::new(),
            past_strategic_moves: Vec::new(),
            kpis: Vec::new(),
        }
    }

    /// Builder: set the core values.
    pub fn with_core_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.core_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: add a KPI definition.
    pub fn with_kpi(mut self, kpi: KpiDefinition) -> Self {
        self.kpis.push(kpi);
        self
    }

    /// Looks up a KPI definition by name.
    pub fn kpi(&self, name: &str) -> Option<&KpiDefinition> {
        self.kpis.iter().find(|kpi| kpi.name == name)
    }

    /// Validates the profile.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name or a KPI name is blank
    /// - `InvalidFormat` if the name is too long or a KPI value is not finite
    /// - `Duplicate` if two KPIs share a name
    pub fn validate(&self) -> Result<(), ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if name.len() > MAX_NAME_LENGTH {
            return Err(ValidationError::invalid_format(
                "name",
                format!("must be at most {} characters", MAX_NAME_LENGTH),
            ));
        }

        let mut seen = HashSet::new();
        for kpi in &self.kpis {
            if kpi.name.trim().is_empty() {
                return Err(ValidationError::empty_field("kpis.name"));
            }
            if !kpi.current.is_finite() || !kpi.target.is_finite() {
                return Err(ValidationError::invalid_format(
                    "kpis",
                    format!("values of '{}' must be finite", kpi.name),
                ));
            }
            if !seen.insert(kpi.name.as_str()) {
                return Err(ValidationError::duplicate("kpis", kpi.name.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
impl CompanyProfile {
    /// A small mechanistic manufacturer with one KPI.
    pub fn test_fixture() -> Self {
        CompanyProfile::new("Acme Corp", "Manufacturing", CompanySize::Medium, StructureType::Mechanistic)
            .with_core_values(["Quality", "Safety"])
            .with_kpi(KpiDefinition::new("Profitability", 10.0, 15.0, "%"))
    }
}
