//! Company module - the profile of the organization being simulated.

mod profile;

pub use profile::{
    CompanyProfile, CompanySize, GeographicalPresence, KpiDefinition, MAX_NAME_LENGTH,
};
