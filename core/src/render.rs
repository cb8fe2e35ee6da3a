//! Production chart backend: PNG files via plotters, interactive pages
//! via the browser viewer.
//!
//! Fonts are registered once per process from a TTF on disk. Without a
//! usable font, charts are still drawn but carry no text at all, since
//! every text element in plotters needs a registered face.

use crate::{
    chart::{ChartRenderer, LineChart, TickRotation},
    config::RenderConfig,
    error::{ReportError, ReportResult},
    interactive::BrowserViewer,
};
use chrono::Days;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{register_font, FontStyle, FontTransform};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const FONT_FAMILY: &str = "sans-serif";

const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// The font registered for this process, if any. Set once.
static FONT_REGISTERED: OnceLock<Option<PathBuf>> = OnceLock::new();

pub struct PlottersRenderer {
    width:  u32,
    height: u32,
    text:   bool,
    viewer: BrowserViewer,
}

impl PlottersRenderer {
    pub fn new(config: &RenderConfig) -> Self {
        let registered = FONT_REGISTERED.get_or_init(|| install_font(config.font_path.as_deref()));
        if let Some(wanted) = &config.font_path {
            if registered.as_ref() != Some(wanted) {
                log::warn!(
                    "font {} not in use: chart fonts are registered once per process",
                    wanted.display()
                );
            }
        }
        let text = registered.is_some();
        Self {
            width:  config.width,
            height: config.height,
            text,
            viewer: BrowserViewer::new(config.display_interactive),
        }
    }

    /// Whether titles and labels will be drawn.
    pub fn has_text(&self) -> bool {
        self.text
    }

    fn draw_png(&self, chart: &LineChart, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let (start, end) = chart.date_span().ok_or("chart has no data points")?;
        let span_days = (end - start).num_days().max(1);
        let y_top = chart.max_value().max(1) + chart.max_value() / 20;

        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut builder = ChartBuilder::on(&root);
        builder.margin(20);
        if self.text {
            let x_area = match chart.tick_rotation {
                TickRotation::Horizontal => 40,
                TickRotation::Vertical   => 100,
            };
            builder
                .caption(&chart.title, (FONT_FAMILY, 28))
                .x_label_area_size(x_area)
                .y_label_area_size(90);
        }
        let mut ctx = builder.build_cartesian_2d(0i64..span_days, 0u64..y_top)?;

        let format_day = |offset: &i64| {
            u64::try_from(*offset)
                .ok()
                .and_then(|o| start.checked_add_days(Days::new(o)))
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        };

        let mut mesh = ctx.configure_mesh();
        if self.text {
            mesh.x_desc(&chart.x_label)
                .y_desc(&chart.y_label)
                .x_label_style(tick_label_style(chart.tick_rotation))
                .x_label_formatter(&format_day)
                .axis_desc_style((FONT_FAMILY, 18));
        } else {
            mesh.x_labels(0).y_labels(0);
        }
        mesh.draw()?;

        for series in &chart.series {
            let color = RGBColor(series.color.0, series.color.1, series.color.2);
            let points = series
                .points
                .iter()
                .map(|(date, value)| ((*date - start).num_days(), *value));
            let drawn = ctx.draw_series(LineSeries::new(points, color.stroke_width(2)))?;
            if self.text && chart.legend {
                drawn.label(&series.name).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
            }
        }

        if self.text && chart.legend {
            ctx.configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .label_font((FONT_FAMILY, 16))
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()?;
        }

        root.present()?;
        Ok(())
    }
}

impl ChartRenderer for PlottersRenderer {
    fn render_static(&mut self, chart: &LineChart, path: &Path) -> ReportResult<()> {
        self.draw_png(chart, path).map_err(|e| ReportError::Render {
            chart: chart.title.clone(),
            message: e.to_string(),
        })?;
        log::info!("wrote {}", path.display());
        Ok(())
    }

    fn show_interactive(&mut self, chart: &LineChart) -> ReportResult<()> {
        self.viewer.show(chart).map(|_| ())
    }
}

/// Date tick labels. Vertical labels hang below the axis, reading
/// top to bottom from the tick.
fn tick_label_style(rotation: TickRotation) -> TextStyle<'static> {
    match rotation {
        TickRotation::Horizontal => TextStyle::from((FONT_FAMILY, 14).into_font()),
        TickRotation::Vertical => {
            TextStyle::from((FONT_FAMILY, 14).into_font().transform(FontTransform::Rotate90))
                .pos(Pos::new(HPos::Left, VPos::Center))
        }
    }
}

/// Register the first usable TTF as the sans-serif face.
/// Returns the registered file, or None when no candidate loads.
fn install_font(configured: Option<&Path>) -> Option<PathBuf> {
    let candidates = configured
        .map(Path::to_path_buf)
        .into_iter()
        .chain(SYSTEM_FONTS.iter().map(PathBuf::from));

    for path in candidates {
        let Some(bytes) = load_font(&path) else {
            continue;
        };
        match register_font(FONT_FAMILY, FontStyle::Normal, bytes) {
            Ok(()) => {
                log::debug!("registered chart font {}", path.display());
                return Some(path);
            }
            Err(_) => log::warn!("{} was rejected by the font registry", path.display()),
        }
    }

    log::warn!("no usable TTF font found; charts will be drawn without text");
    None
}

/// Read and parse a font file. Only parsed faces are kept alive, since
/// registered faces live for the rest of the process.
fn load_font(path: &Path) -> Option<&'static [u8]> {
    let bytes = std::fs::read(path).ok()?;
    if ab_glyph::FontRef::try_from_slice(&bytes).is_err() {
        log::warn!("{} is not a usable font, skipping", path.display());
        return None;
    }
    Some(Box::leak(bytes.into_boxed_slice()))
}
