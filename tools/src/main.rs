//! report-runner: generates the synthetic COVID-19 dataset and writes
//! the exploratory charts and summary.
//!
//! Every parameter is a built-in constant (see ReportConfig::default).
//! Usage:
//!   report-runner
//!   RUST_LOG=debug report-runner

use anyhow::Result;
use covid_core::{config::ReportConfig, dataset, render::PlottersRenderer, report::Reporter};
use std::io;

fn main() -> Result<()> {
    env_logger::init();

    let config = ReportConfig::default();
    log::info!(
        "seed={} days={} entities={:?} entity={} out_dir={}",
        config.dataset.seed,
        config.dataset.day_count,
        config.dataset.entities,
        config.selected_entity,
        config.output_dir.display()
    );

    let table = dataset::generate(&config.dataset)?;
    let renderer = PlottersRenderer::new(&config.render);
    if !renderer.has_text() {
        log::warn!("install DejaVu Sans or Liberation Sans to get chart titles and labels");
    }

    let mut reporter = Reporter::new(config.output_dir.clone(), renderer);
    let outcome = reporter.run(&table, &config.selected_entity, &mut io::stdout())?;

    for path in &outcome.artifacts {
        log::debug!("artifact: {}", path.display());
    }
    Ok(())
}
