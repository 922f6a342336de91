//! 7S model module - the seven element records and the model aggregate.

mod patch;
mod people;
mod seven_s;
mod strategy;
mod structure;
mod systems;

pub use patch::{
    ElementPatch, SharedValuesPatch, SkillsPatch, StaffPatch, StrategyPatch, StructurePatch,
    StylePatch, SystemsPatch,
};
pub use people::{LeadershipStyle, SharedValuesElement, SkillsElement, StaffElement, StyleElement};
pub use seven_s::{ScoreChange, SevenSModel, DEFAULT_INITIAL_SCORE};
pub use strategy::{
    BusinessLevelStrategy, CorporateLevelStrategy, FunctionalLevelStrategy, StrategyElement,
};
pub use structure::{StructureElement, StructureType};
pub use systems::{HrSystem, SystemsElement, ANNUAL_PERFORMANCE_REVIEWS};
