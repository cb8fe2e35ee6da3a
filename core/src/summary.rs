//! End-of-run summary for one entity.

use crate::types::{Count, EntityLabel};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntitySummary {
    pub entity:             EntityLabel,
    pub total_cases:        Count,
    pub total_deaths:       Count,
    pub total_vaccinations: Count,
    pub people_vaccinated:  Count,
}

impl fmt::Display for EntitySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----- Summary for {} -----", self.entity)?;
        writeln!(f, "Total Cases: {}", self.total_cases)?;
        writeln!(f, "Total Deaths: {}", self.total_deaths)?;
        writeln!(f, "Total Vaccinations: {}", self.total_vaccinations)?;
        write!(f, "People Vaccinated: {}", self.people_vaccinated)
    }
}
