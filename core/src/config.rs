use crate::error::{ReportError, ReportResult};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::path::PathBuf;

/// Seed used when no seed is configured.
pub const DEFAULT_SEED: u64 = 0x2022_0101_C0DE_0019;

pub const DEFAULT_DAY_COUNT: usize = 100;
pub const DEFAULT_OUTPUT_DIR: &str = "images";

/// Half-open draw range `[low, high)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub low: u64,
    pub high: u64,
}

impl Bounds {
    pub const fn new(low: u64, high: u64) -> Self {
        Self { low, high }
    }

    pub fn validate(&self, field: &'static str) -> ReportResult<()> {
        if self.low >= self.high {
            return Err(ReportError::InvalidBounds {
                field,
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }
}

/// How cumulative columns are summed across entity blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Accumulation {
    /// One running sum over the whole draw sequence. The second entity's
    /// totals continue from the first entity's final value.
    #[default]
    Concatenated,
    /// Each entity block restarts its running sum from zero.
    PerEntity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBounds {
    pub new_cases: Bounds,
    pub new_deaths: Bounds,
    pub case_increments: Bounds,
    pub death_increments: Bounds,
    pub vaccination_increments: Bounds,
    pub people_vaccinated_increments: Bounds,
}

impl Default for FieldBounds {
    fn default() -> Self {
        Self {
            new_cases:                    Bounds::new(1_000, 10_000),
            new_deaths:                   Bounds::new(10, 500),
            case_increments:              Bounds::new(1_000, 10_000),
            death_increments:             Bounds::new(10, 500),
            vaccination_increments:       Bounds::new(5_000, 20_000),
            people_vaccinated_increments: Bounds::new(2_000, 10_000),
        }
    }
}

impl FieldBounds {
    pub fn validate(&self) -> ReportResult<()> {
        self.new_cases.validate("new_cases")?;
        self.new_deaths.validate("new_deaths")?;
        self.case_increments.validate("case_increments")?;
        self.death_increments.validate("death_increments")?;
        self.vaccination_increments.validate("vaccination_increments")?;
        self.people_vaccinated_increments.validate("people_vaccinated_increments")
    }
}

/// Everything the dataset generator needs.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetConfig {
    pub start_date: NaiveDate,
    pub day_count: usize,
    pub entities: Vec<String>,
    pub bounds: FieldBounds,
    pub accumulation: Accumulation,
    pub seed: u64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap_or_default(),
            day_count: DEFAULT_DAY_COUNT,
            entities: vec!["India".into(), "USA".into()],
            bounds: FieldBounds::default(),
            accumulation: Accumulation::default(),
            seed: DEFAULT_SEED,
        }
    }
}

impl DatasetConfig {
    pub fn validate(&self) -> ReportResult<()> {
        if self.day_count == 0 {
            return Err(ReportError::InvalidConfig("day_count must be at least 1".into()));
        }
        if self.entities.is_empty() {
            return Err(ReportError::InvalidConfig("at least one entity is required".into()));
        }
        let mut seen = HashSet::new();
        for entity in &self.entities {
            if !seen.insert(entity.as_str()) {
                return Err(ReportError::InvalidConfig(format!(
                    "duplicate entity label '{entity}'"
                )));
            }
        }
        self.bounds.validate()
    }

    /// Total number of records the generator will produce.
    pub fn row_count(&self) -> usize {
        self.day_count * self.entities.len()
    }
}

/// Presentation settings handed to the chart renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// TTF used for titles and labels. Falls back to well-known system
    /// locations when unset. Fonts are registered once per process: the
    /// first PlottersRenderer built decides, later values are ignored.
    pub font_path: Option<PathBuf>,
    /// Open the interactive chart in the platform viewer.
    pub display_interactive: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            font_path: None,
            display_interactive: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub dataset: DatasetConfig,
    pub output_dir: PathBuf,
    pub selected_entity: String,
    pub render: RenderConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            selected_entity: "India".into(),
            render: RenderConfig::default(),
        }
    }
}

impl ReportConfig {
    /// Config with hardcoded defaults for use in unit tests:
    /// a short date range and no interactive display.
    pub fn default_test() -> Self {
        Self {
            dataset: DatasetConfig {
                day_count: 10,
                ..DatasetConfig::default()
            },
            render: RenderConfig {
                display_interactive: false,
                ..RenderConfig::default()
            },
            ..Self::default()
        }
    }
}
