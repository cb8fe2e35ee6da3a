//! The reporter: filter, render, summarize, compare.
//!
//! EXECUTION ORDER (fixed):
//!   1. Filter the table to the selected entity
//!   2. Create the output directory
//!   3. Static charts: new cases, new deaths, vaccination progress
//!   4. Interactive chart: new cases and new deaths
//!   5. Summary block
//!   6. Static chart: total cases across all entities
//!
//! Any failure aborts the run. Nothing is retried.

use crate::{
    chart::{ChartRenderer, LineChart, Rgb, Series},
    dataset::Table,
    error::{ReportError, ReportResult},
    summary::EntitySummary,
    view::FilteredView,
};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const COMPARISON_FILE: &str = "total_cases_comparison.png";

pub fn daily_new_cases_file(entity: &str) -> String {
    format!("daily_new_cases_{}.png", file_label(entity))
}

pub fn daily_new_deaths_file(entity: &str) -> String {
    format!("daily_new_deaths_{}.png", file_label(entity))
}

pub fn vaccination_progress_file(entity: &str) -> String {
    format!("vaccination_progress_{}.png", file_label(entity))
}

/// Entity labels are used verbatim in filenames, except for characters
/// that could leave the output directory or break on common filesystems.
fn file_label(entity: &str) -> String {
    entity
        .chars()
        .map(|c| if c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ' ') { c } else { '_' })
        .collect()
}

pub fn new_cases_chart(view: &FilteredView) -> LineChart {
    LineChart::new(format!("Daily New COVID-19 Cases in {}", view.entity()))
        .y_label("New Cases")
        .series(Series::new("New Cases", Rgb::BLUE, view.series(|r| r.new_cases)))
}

pub fn new_deaths_chart(view: &FilteredView) -> LineChart {
    LineChart::new(format!("Daily New COVID-19 Deaths in {}", view.entity()))
        .y_label("New Deaths")
        .series(Series::new("New Deaths", Rgb::RED, view.series(|r| r.new_deaths)))
}

pub fn vaccination_chart(view: &FilteredView) -> LineChart {
    LineChart::new(format!("COVID-19 Vaccination Progress in {}", view.entity()))
        .y_label("Number of People")
        .series(Series::new(
            "Total Vaccinations",
            Rgb::GREEN,
            view.series(|r| r.total_vaccinations),
        ))
        .series(Series::new(
            "People Vaccinated",
            Rgb::BLUE,
            view.series(|r| r.people_vaccinated),
        ))
        .with_legend()
}

pub fn daily_interactive_chart(view: &FilteredView) -> LineChart {
    LineChart::new(format!("COVID-19 Daily Cases and Deaths in {}", view.entity()))
        .y_label("value")
        .series(Series::new("new_cases", Rgb::BLUE, view.series(|r| r.new_cases)))
        .series(Series::new("new_deaths", Rgb::RED, view.series(|r| r.new_deaths)))
        .with_legend()
}

/// total_cases over time, one series per entity in table order.
pub fn comparison_chart(table: &Table) -> LineChart {
    let entities = table.entities();
    let title = format!("Total COVID-19 Cases: {}", entities.join(" vs "));

    entities
        .iter()
        .enumerate()
        .fold(LineChart::new(title).y_label("Total Cases"), |chart, (i, entity)| {
            let points = table
                .rows()
                .iter()
                .filter(|r| r.entity == *entity)
                .map(|r| (r.date, r.total_cases))
                .collect();
            chart.series(Series::new(*entity, Rgb::palette(i), points))
        })
        .with_legend()
}

/// What a completed report produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    pub summary:   EntitySummary,
    /// Image files written, in write order.
    pub artifacts: Vec<PathBuf>,
}

pub struct Reporter<R: ChartRenderer> {
    output_dir: PathBuf,
    renderer:   R,
}

impl<R: ChartRenderer> Reporter<R> {
    pub fn new(output_dir: impl Into<PathBuf>, renderer: R) -> Self {
        Self { output_dir: output_dir.into(), renderer }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Run the full report for `entity`, writing the summary block to `out`.
    pub fn run(
        &mut self,
        table: &Table,
        entity: &str,
        out: &mut impl Write,
    ) -> ReportResult<ReportOutcome> {
        let view = table.filter_entity(entity)?;
        log::info!("reporting on {} ({} rows)", view.entity(), view.len());

        self.ensure_output_dir()?;

        let mut artifacts = Vec::with_capacity(4);
        artifacts.push(self.render(&new_cases_chart(&view), &daily_new_cases_file(entity))?);
        artifacts.push(self.render(&new_deaths_chart(&view), &daily_new_deaths_file(entity))?);
        artifacts.push(
            self.render(&vaccination_chart(&view), &vaccination_progress_file(entity))?,
        );

        self.renderer.show_interactive(&daily_interactive_chart(&view))?;

        let summary = view.summary().ok_or_else(|| ReportError::EntityNotFound {
            entity: entity.to_string(),
        })?;
        writeln!(out, "\n{summary}").map_err(|source| ReportError::ResourceUnavailable {
            path: "<summary output>".into(),
            source,
        })?;

        artifacts.push(self.render(&comparison_chart(table), COMPARISON_FILE)?);

        Ok(ReportOutcome { summary, artifacts })
    }

    fn ensure_output_dir(&self) -> ReportResult<()> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| {
            ReportError::ResourceUnavailable {
                path: self.output_dir.display().to_string(),
                source,
            }
        })
    }

    fn render(&mut self, chart: &LineChart, file_name: &str) -> ReportResult<PathBuf> {
        let path = self.output_dir.join(file_name);
        self.renderer.render_static(chart, &path)?;
        Ok(path)
    }
}
