//! covid-core: synthetic COVID-19 dataset generation and reporting.
//!
//! The dataset module builds a seeded table of entity-day records. The
//! report module filters it, hands chart descriptions to a
//! ChartRenderer, and prints the per-entity summary.

pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod interactive;
pub mod render;
pub mod report;
pub mod rng;
pub mod summary;
pub mod types;
pub mod view;
