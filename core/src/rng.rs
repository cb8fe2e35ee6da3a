//! Deterministic random number generation.
//!
//! RULE: Nothing in the generator may call any platform RNG.
//! All randomness flows through ColumnRng instances derived
//! from the single seed stored on the DatasetConfig.
//!
//! Each drawn column gets its own RNG stream, seeded deterministically
//! from (seed XOR column_index). This means:
//!   - Adding a new column never changes existing columns' draws.
//!   - Each column's draws are fully reproducible in isolation.

use crate::config::Bounds;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single drawn column.
pub struct ColumnRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl ColumnRng {
    /// Create a column RNG from the seed and a stable column index.
    /// The index must never change once assigned.
    pub fn new(seed: u64, column_index: u64) -> Self {
        let derived_seed = seed ^ (column_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Draw a raw u64 (full range).
    #[cfg(test)]
    fn next_u64(&mut self) -> u64 {
        rand::RngCore::next_u64(&mut self.inner)
    }

    /// Roll a u64 in the half-open range [low, high).
    /// Bounds are validated before any column is drawn.
    pub fn draw(&mut self, bounds: Bounds) -> u64 {
        self.inner.gen_range(bounds.low..bounds.high)
    }

    /// Draw `count` values in `bounds`.
    pub fn draw_many(&mut self, bounds: Bounds, count: usize) -> Vec<u64> {
        (0..count).map(|_| self.draw(bounds)).collect()
    }
}

/// All column RNGs for a single dataset, indexed by stable slot.
pub struct RngBank {
    seed: u64,
}

impl RngBank {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn for_column(&self, slot: ColumnSlot) -> ColumnRng {
        ColumnRng::new(self.seed, slot as u64).with_name(slot.name())
    }
}

/// Stable column slot assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every column's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum ColumnSlot {
    NewCases = 0,
    CaseIncrements = 1,
    NewDeaths = 2,
    DeathIncrements = 3,
    VaccinationIncrements = 4,
    PeopleVaccinatedIncrements = 5,
    // Add new columns here — append only.
}

impl ColumnSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NewCases => "new_cases",
            Self::CaseIncrements => "total_cases",
            Self::NewDeaths => "new_deaths",
            Self::DeathIncrements => "total_deaths",
            Self::VaccinationIncrements => "total_vaccinations",
            Self::PeopleVaccinatedIncrements => "people_vaccinated",
        }
    }
}
