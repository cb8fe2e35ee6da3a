//! Interactive chart pages (HTML).
//!
//! A page is self-contained: the chart data is embedded as JSON and
//! drawn client-side with hover read-out and legend toggling. Pages are
//! only written when they are displayed, and then to the system temp
//! directory, never to the report output directory.

use crate::{
    chart::LineChart,
    error::{ReportError, ReportResult},
    types::Count,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::Command;
use uuid::Uuid;

const TEMPLATE: &str = include_str!("../templates/interactive_chart.html");

#[derive(Serialize)]
struct ChartPayload<'a> {
    title:   &'a str,
    x_label: &'a str,
    y_label: &'a str,
    series:  Vec<SeriesPayload<'a>>,
}

#[derive(Serialize)]
struct SeriesPayload<'a> {
    name:   &'a str,
    color:  String,
    points: &'a [(NaiveDate, Count)],
}

/// Render `chart` as a standalone HTML document.
pub fn render_html(chart: &LineChart) -> ReportResult<String> {
    let payload = ChartPayload {
        title:   &chart.title,
        x_label: &chart.x_label,
        y_label: &chart.y_label,
        series:  chart
            .series
            .iter()
            .map(|s| SeriesPayload {
                name:   &s.name,
                color:  s.color.to_hex(),
                points: &s.points,
            })
            .collect(),
    };
    // "</" inside a script block would end it early.
    let json = serde_json::to_string(&payload)?.replace("</", "<\\/");
    Ok(TEMPLATE.replace("__DATA__", &json))
}

/// Writes interactive pages and hands them to the platform viewer.
pub struct BrowserViewer {
    display: bool,
    dir:     PathBuf,
}

impl BrowserViewer {
    pub fn new(display: bool) -> Self {
        Self { display, dir: std::env::temp_dir() }
    }

    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Open the page for `chart` in the platform viewer. With display
    /// disabled nothing is written and None is returned.
    pub fn show(&self, chart: &LineChart) -> ReportResult<Option<PathBuf>> {
        if !self.display {
            log::info!("interactive chart '{}' skipped (display disabled)", chart.title);
            return Ok(None);
        }

        let path = self.write_page(chart)?;
        if let Err(e) = launch(&path) {
            log::warn!("could not open {} in a viewer: {e}", path.display());
        }
        Ok(Some(path))
    }

    /// Write the page for `chart` under the viewer directory.
    pub fn write_page(&self, chart: &LineChart) -> ReportResult<PathBuf> {
        let html = render_html(chart)?;
        let path = self.dir.join(format!("covid-chart-{}.html", Uuid::new_v4()));
        std::fs::write(&path, html).map_err(|source| ReportError::ResourceUnavailable {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("interactive chart '{}' at {}", chart.title, path.display());
        Ok(path)
    }
}

fn launch(path: &Path) -> std::io::Result<()> {
    #[cfg(target_os = "macos")]
    let mut cmd = Command::new("open");
    #[cfg(target_os = "windows")]
    let mut cmd = {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    };
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut cmd = Command::new("xdg-open");

    cmd.arg(path).spawn().map(|_| ())
}
