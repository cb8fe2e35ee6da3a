//! Shared primitive types used across the dataset and reporter.

/// A count drawn or accumulated for one record (cases, deaths, doses).
pub type Count = u64;

/// The label of an entity (a country) in the dataset.
pub type EntityLabel = String;
