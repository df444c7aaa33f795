//! Error types for the growth_core library.

use crate::{Metric, Sex};
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for growth_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Age is negative or not a finite number
    #[error("Invalid age: {0} months")]
    InvalidAge(f64),

    /// Weight, height or head circumference is non-positive or not finite
    #[error("Invalid {metric} measurement: {value}")]
    InvalidMeasurement { metric: Metric, value: f64 },

    /// Neither a birth date nor a direct age was supplied
    #[error("No age available: supply a birth date or an age in months")]
    MissingAge,

    /// Both a birth date and a direct age were supplied
    #[error("Conflicting age: supply either a birth date or an age in months, not both")]
    ConflictingAge,

    /// Curve window wider than the supported maximum
    #[error("Invalid curve window: {0} months (maximum {max})", max = crate::curves::MAX_WINDOW_MONTHS)]
    InvalidWindow(u32),

    /// No reference series exists for this sex/metric pair
    #[error("Unknown reference series: {sex}/{metric}")]
    UnknownSeries { sex: String, metric: String },

    /// A hand-built reference series broke one of its invariants
    #[error("Invalid reference series: {0}")]
    InvalidReferenceSeries(String),

    /// Date could not be parsed or is out of calendar range
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn unknown_series(sex: Sex, metric: Metric) -> Self {
        Error::UnknownSeries {
            sex: sex.to_string(),
            metric: metric.to_string(),
        }
    }

    /// True when the caller should show "no result yet" instead of an error
    pub fn is_missing_age(&self) -> bool {
        matches!(self, Error::MissingAge)
    }
}
