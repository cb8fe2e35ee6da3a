//! PNG rendering through plotters. Text depends on the fonts installed
//! on the machine; the image itself is produced either way.

use covid_core::{
    chart::{ChartRenderer, LineChart, Rgb, Series},
    config::{DatasetConfig, RenderConfig},
    dataset,
    error::ReportError,
    render::PlottersRenderer,
    report,
};
use uuid::Uuid;

fn quiet_render_config() -> RenderConfig {
    RenderConfig {
        width: 640,
        height: 320,
        display_interactive: false,
        ..RenderConfig::default()
    }
}

#[test]
fn comparison_chart_is_written_as_png() {
    let config = DatasetConfig { day_count: 15, ..DatasetConfig::default() };
    let table = dataset::generate(&config).unwrap();
    let path = std::env::temp_dir().join(format!("covid-render-{}.png", Uuid::new_v4()));

    let mut renderer = PlottersRenderer::new(&quiet_render_config());
    renderer
        .render_static(&report::comparison_chart(&table), &path)
        .unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"), "not a PNG file");

    std::fs::remove_file(&path).ok();
}

#[test]
fn chart_without_points_is_a_render_error() {
    let path = std::env::temp_dir().join(format!("covid-empty-{}.png", Uuid::new_v4()));
    let chart = LineChart::new("empty").series(Series::new("nothing", Rgb::BLUE, vec![]));

    let mut renderer = PlottersRenderer::new(&quiet_render_config());
    let err = renderer.render_static(&chart, &path).unwrap_err();
    assert!(matches!(err, ReportError::Render { ref chart, .. } if chart == "empty"));
    assert!(!path.exists());
}
