use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid bounds for '{field}': low {low} must be below high {high}")]
    InvalidBounds { field: &'static str, low: u64, high: u64 },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Entity '{entity}' not found in dataset")]
    EntityNotFound { entity: String },

    #[error("Resource unavailable at {path}: {source}")]
    ResourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Render error in '{chart}': {message}")]
    Render { chart: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;
