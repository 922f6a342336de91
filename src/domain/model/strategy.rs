//! Strategy element: the corporate, business and functional level choices.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Fraction;

/// Where the company competes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CorporateLevelStrategy {
    #[serde(rename = "Market Penetration")]
    MarketPenetration,
    #[serde(rename = "Product Development")]
    ProductDevelopment,
    #[serde(rename = "Market Development")]
    MarketDevelopment,
    #[serde(rename = "Related Diversification")]
    RelatedDiversification,
    #[serde(rename = "Unrelated Diversification")]
    UnrelatedDiversification,
    #[serde(rename = "Forward Integration")]
    ForwardIntegration,
    #[serde(rename = "Backward Integration")]
    BackwardIntegration,
    #[serde(rename = "Horizontal Integration")]
    HorizontalIntegration,
    #[serde(rename = "Joint Venture")]
    JointVenture,
    #[serde(rename = "Strategic Alliance")]
    StrategicAlliance,
    #[serde(rename = "Merger & Acquisition")]
    MergerAndAcquisition,
    Turnaround,
    Divestiture,
    Liquidation,
    Harvesting,
    Stability,
}

impl CorporateLevelStrategy {
    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            CorporateLevelStrategy::MarketPenetration => "Market Penetration",
            CorporateLevelStrategy::ProductDevelopment => "Product Development",
            CorporateLevelStrategy::MarketDevelopment => "Market Development",
            CorporateLevelStrategy::RelatedDiversification => "Related Diversification",
            CorporateLevelStrategy::UnrelatedDiversification => "Unrelated Diversification",
            CorporateLevelStrategy::ForwardIntegration => "Forward Integration",
            CorporateLevelStrategy::BackwardIntegration => "Backward Integration",
            CorporateLevelStrategy::HorizontalIntegration => "Horizontal Integration",
            CorporateLevelStrategy::JointVenture => "Joint Venture",
            CorporateLevelStrategy::StrategicAlliance => "Strategic Alliance",
            CorporateLevelStrategy::MergerAndAcquisition => "Merger & Acquisition",
            CorporateLevelStrategy::Turnaround => "Turnaround",
            CorporateLevelStrategy::Divestiture => "Divestiture",
            CorporateLevelStrategy::Liquidation => "Liquidation",
            CorporateLevelStrategy::Harvesting => "Harvesting",
            CorporateLevelStrategy::Stability => "Stability",
        }
    }
}

impl fmt::Display for CorporateLevelStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How the company competes within a market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessLevelStrategy {
    #[serde(rename = "Cost Leadership")]
    CostLeadership,
    Differentiation,
    #[serde(rename = "Focus - Cost")]
    FocusCost,
    #[serde(rename = "Focus - Differentiation")]
    FocusDifferentiation,
}

impl BusinessLevelStrategy {
    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            BusinessLevelStrategy::CostLeadership => "Cost Leadership",
            BusinessLevelStrategy::Differentiation => "Differentiation",
            BusinessLevelStrategy::FocusCost => "Focus - Cost",
            BusinessLevelStrategy::FocusDifferentiation => "Focus - Differentiation",
        }
    }
}

impl fmt::Display for BusinessLevelStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Capability the functions are organized around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionalLevelStrategy {
    #[serde(rename = "Dynamic Capabilities")]
    DynamicCapabilities,
    #[serde(rename = "Knowledge Management")]
    KnowledgeManagement,
    Innovation,
    #[serde(rename = "Operational Excellence")]
    OperationalExcellence,
    #[serde(rename = "Customer Intimacy")]
    CustomerIntimacy,
    #[serde(rename = "Product Leadership")]
    ProductLeadership,
}

impl FunctionalLevelStrategy {
    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            FunctionalLevelStrategy::DynamicCapabilities => "Dynamic Capabilities",
            FunctionalLevelStrategy::KnowledgeManagement => "Knowledge Management",
            FunctionalLevelStrategy::Innovation => "Innovation",
            FunctionalLevelStrategy::OperationalExcellence => "Operational Excellence",
            FunctionalLevelStrategy::CustomerIntimacy => "Customer Intimacy",
            FunctionalLevelStrategy::ProductLeadership => "Product Leadership",
        }
    }
}

impl fmt::Display for FunctionalLevelStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The Strategy element of the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyElement {
    pub corporate_level: CorporateLevelStrategy,
    pub business_level: BusinessLevelStrategy,
    pub functional_level: FunctionalLevelStrategy,
    pub alignment_score: Fraction,
}

impl Default for StrategyElement {
    fn default() -> Self {
        Self {
            corporate_level: CorporateLevelStrategy::Stability,
            business_level: BusinessLevelStrategy::CostLeadership,
            functional_level: FunctionalLevelStrategy::OperationalExcellence,
            alignment_score: Fraction::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_strategy_is_stable_cost_leader() {
        let strategy = StrategyElement::default();
        assert_eq!(strategy.corporate_level, CorporateLevelStrategy::Stability);
        assert_eq!(strategy.business_level, BusinessLevelStrategy::CostLeadership);
        assert_eq!(
            strategy.functional_level,
            FunctionalLevelStrategy::OperationalExcellence
        );
    }

    #[test]
    fn strategies_serialize_as_display_names() {
        let json = serde_json::to_string(&CorporateLevelStrategy::MergerAndAcquisition).unwrap();
        assert_eq!(json, "\"Merger & Acquisition\"");

        let parsed: BusinessLevelStrategy = serde_json::from_str("\"Focus - Cost\"").unwrap();
        assert_eq!(parsed, BusinessLevelStrategy::FocusCost);
    }

    #[test]
    fn display_matches_serialized_name() {
        let strategy = FunctionalLevelStrategy::CustomerIntimacy;
        assert_eq!(
            format!("\"{}\"", strategy),
            serde_json::to_string(&strategy).unwrap()
        );
    }
}
