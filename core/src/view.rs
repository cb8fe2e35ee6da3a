//! Per-entity views over the generated table.

use crate::{dataset::Record, summary::EntitySummary, types::Count};
use chrono::NaiveDate;

/// The table restricted to a single entity, original order preserved.
/// Never empty: Table::filter_entity refuses to build an empty view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredView {
    entity: String,
    rows: Vec<Record>,
}

impl FilteredView {
    pub(crate) fn new(entity: String, rows: Vec<Record>) -> Self {
        debug_assert!(!rows.is_empty(), "filtered view must hold at least one row");
        Self { entity, rows }
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// (date, value) pairs for one column, in view order.
    pub fn series(&self, column: impl Fn(&Record) -> Count) -> Vec<(NaiveDate, Count)> {
        self.rows.iter().map(|r| (r.date, column(r))).collect()
    }

    /// Final running totals, taken from the last row of the view.
    pub fn summary(&self) -> Option<EntitySummary> {
        self.rows.last().map(|last| EntitySummary {
            entity:             self.entity.clone(),
            total_cases:        last.total_cases,
            total_deaths:       last.total_deaths,
            total_vaccinations: last.total_vaccinations,
            people_vaccinated:  last.people_vaccinated,
        })
    }
}
