use std::time::Duration;

use thiserror::Error;

use crate::domain::error::ValidationError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Reasons the smoothing fit could not produce a forecast.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelFitError {
    #[error("degenerate series: all {points} points are zero")]
    DegenerateSeries { points: usize },

    #[error("fit produced a non-finite value")]
    NonFinite,

    #[error("fit did not converge after {iterations} iterations")]
    NotConverged { iterations: usize },

    #[error("fit exceeded its time budget after {elapsed:?}")]
    TimedOut { elapsed: Duration },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid purchase: {0}")]
    Validation(#[from] ValidationError),

    #[error("error processing row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: ValidationError,
    },

    #[error("customer not found: {customer_name}")]
    NotFound { customer_name: String },

    #[error("no purchase data")]
    NoData,

    #[error("need more data for forecasting: {available} points, at least {required} required")]
    InsufficientData { available: usize, required: usize },

    #[error("forecast model fit failed: {0}")]
    ModelFit(#[from] ModelFitError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
