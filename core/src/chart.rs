//! The charting collaborator seam.
//!
//! RULE: The reporter never draws. It assembles LineChart descriptions
//! and hands them to a ChartRenderer, which owns every rendering choice.

use crate::{error::ReportResult, types::Count};
use chrono::NaiveDate;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLUE:   Rgb = Rgb(31, 119, 180);
    pub const ORANGE: Rgb = Rgb(255, 127, 14);
    pub const GREEN:  Rgb = Rgb(44, 160, 44);
    pub const RED:    Rgb = Rgb(214, 39, 40);
    pub const PURPLE: Rgb = Rgb(148, 103, 189);
    pub const BROWN:  Rgb = Rgb(140, 86, 75);

    const PALETTE: [Rgb; 6] = [
        Self::BLUE, Self::ORANGE, Self::GREEN, Self::RED, Self::PURPLE, Self::BROWN,
    ];

    /// Color for the n-th series of a grouped chart. Wraps around.
    pub fn palette(index: usize) -> Rgb {
        Self::PALETTE[index % Self::PALETTE.len()]
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Orientation of the date tick labels on the x axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TickRotation {
    Horizontal,
    #[default]
    Vertical,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name:   String,
    pub color:  Rgb,
    pub points: Vec<(NaiveDate, Count)>,
}

impl Series {
    pub fn new(name: impl Into<String>, color: Rgb, points: Vec<(NaiveDate, Count)>) -> Self {
        Self { name: name.into(), color, points }
    }
}

/// A date-indexed line chart: data views plus presentation options.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub title:         String,
    pub x_label:       String,
    pub y_label:       String,
    pub series:        Vec<Series>,
    pub legend:        bool,
    pub tick_rotation: TickRotation,
}

impl LineChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: "Date".into(),
            y_label: String::new(),
            series: Vec::new(),
            legend: false,
            tick_rotation: TickRotation::default(),
        }
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Earliest and latest date across all series.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let dates = self.series.iter().flat_map(|s| s.points.iter().map(|(d, _)| *d));
        dates.fold(None, |span, d| match span {
            None => Some((d, d)),
            Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
        })
    }

    /// Largest value across all series, 0 for an empty chart.
    pub fn max_value(&self) -> Count {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().map(|(_, v)| *v))
            .max()
            .unwrap_or(0)
    }
}

/// The contract every chart backend must fulfill.
pub trait ChartRenderer {
    /// Draw `chart` and persist it as an image at `path`.
    fn render_static(&mut self, chart: &LineChart, path: &Path) -> ReportResult<()>;

    /// Present `chart` interactively. Nothing is written to the
    /// report's output directory.
    fn show_interactive(&mut self, chart: &LineChart) -> ReportResult<()>;
}
