//! Synthetic dataset generation.
//!
//! ROW ORDER (fixed): entity blocks in configured order, each block
//! holding `day_count` consecutive days. Blocks are contiguous, never
//! interleaved.
//!
//! DRAW ORDER: every drawn column takes `row_count` values from its own
//! stream in row order. Cumulative columns are summed over that order,
//! either across the whole sequence or restarting per entity block.

use crate::{
    config::{Accumulation, Bounds, DatasetConfig},
    error::{ReportError, ReportResult},
    rng::{ColumnSlot, RngBank},
    types::{Count, EntityLabel},
    view::FilteredView,
};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// One entity-day observation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    pub date:               NaiveDate,
    pub entity:             EntityLabel,
    pub new_cases:          Count,
    pub total_cases:        Count,
    pub new_deaths:         Count,
    pub total_deaths:       Count,
    pub total_vaccinations: Count,
    pub people_vaccinated:  Count,
}

/// The generated dataset. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Record>,
}

impl Table {
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct entity labels in first-appearance order.
    pub fn entities(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !labels.contains(&row.entity.as_str()) {
                labels.push(&row.entity);
            }
        }
        labels
    }

    /// All records for `entity`, in table order.
    /// Fails with EntityNotFound when no row carries the label.
    pub fn filter_entity(&self, entity: &str) -> ReportResult<FilteredView> {
        let rows: Vec<Record> = self
            .rows
            .iter()
            .filter(|r| r.entity == entity)
            .cloned()
            .collect();

        if rows.is_empty() {
            return Err(ReportError::EntityNotFound {
                entity: entity.to_string(),
            });
        }
        Ok(FilteredView::new(entity.to_string(), rows))
    }
}

/// Build the full table described by `config`.
pub fn generate(config: &DatasetConfig) -> ReportResult<Table> {
    config.validate()?;

    let days = date_axis(config.start_date, config.day_count)?;
    let row_count = config.row_count();
    let block_len = config.day_count;
    let bank = RngBank::new(config.seed);
    let bounds = &config.bounds;

    let draw = |slot: ColumnSlot, b: Bounds| bank.for_column(slot).draw_many(b, row_count);
    let cumulate = |slot: ColumnSlot, b: Bounds| {
        running_sum(&draw(slot, b), block_len, config.accumulation, slot.name())
    };

    let new_cases          = draw(ColumnSlot::NewCases, bounds.new_cases);
    let total_cases        = cumulate(ColumnSlot::CaseIncrements, bounds.case_increments)?;
    let new_deaths         = draw(ColumnSlot::NewDeaths, bounds.new_deaths);
    let total_deaths       = cumulate(ColumnSlot::DeathIncrements, bounds.death_increments)?;
    let total_vaccinations =
        cumulate(ColumnSlot::VaccinationIncrements, bounds.vaccination_increments)?;
    let people_vaccinated  = cumulate(
        ColumnSlot::PeopleVaccinatedIncrements,
        bounds.people_vaccinated_increments,
    )?;

    let rows = config
        .entities
        .iter()
        .flat_map(|entity| days.iter().map(move |date| (entity, *date)))
        .enumerate()
        .map(|(i, (entity, date))| Record {
            date,
            entity: entity.clone(),
            new_cases:          new_cases[i],
            total_cases:        total_cases[i],
            new_deaths:         new_deaths[i],
            total_deaths:       total_deaths[i],
            total_vaccinations: total_vaccinations[i],
            people_vaccinated:  people_vaccinated[i],
        })
        .collect::<Vec<_>>();

    log::debug!(
        "generated {} rows for {} entities (seed={}, accumulation={:?})",
        rows.len(),
        config.entities.len(),
        config.seed,
        config.accumulation
    );

    Ok(Table { rows })
}

/// `count` consecutive calendar days starting at `start`.
fn date_axis(start: NaiveDate, count: usize) -> ReportResult<Vec<NaiveDate>> {
    (0..count as u64)
        .map(|offset| {
            start.checked_add_days(Days::new(offset)).ok_or_else(|| {
                ReportError::InvalidConfig(format!(
                    "date range of {count} days from {start} leaves the calendar"
                ))
            })
        })
        .collect()
}

fn running_sum(
    draws: &[u64],
    block_len: usize,
    accumulation: Accumulation,
    column: &'static str,
) -> ReportResult<Vec<Count>> {
    let mut totals = Vec::with_capacity(draws.len());
    let mut acc: Count = 0;

    for (i, draw) in draws.iter().enumerate() {
        if accumulation == Accumulation::PerEntity && i % block_len == 0 {
            acc = 0;
        }
        acc = acc.checked_add(*draw).ok_or_else(|| {
            ReportError::InvalidConfig(format!("running sum for '{column}' overflows u64"))
        })?;
        totals.push(acc);
    }
    Ok(totals)
}
