#![forbid(unsafe_code)]

//! Core growth statistics for the GrowthCompass system.
//!
//! This crate provides:
//! - Domain types (sex, metrics, LMS parameters, measurements, statistics)
//! - Reference tables and LMS resolution by age
//! - Age calculation from calendar dates
//! - Z-score and percentile computation
//! - Clinical-risk interpretation
//! - Percentile curves, unit conversion, CSV batch evaluation and config

pub mod types;
pub mod error;
pub mod reference;
mod reference_data;
pub mod lms;
pub mod normal;
pub mod age;
pub mod engine;
pub mod interpretation;
pub mod curves;
pub mod units;
pub mod batch;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use reference::{LmsRow, ReferenceSeries, ReferenceTable};
pub use age::{age_in_months, implied_birth_date, parse_date};
pub use engine::GrowthEngine;
pub use interpretation::{classify, Category, Interpretation, RiskTier};
pub use curves::{percentile_curves, CurvePoint};
pub use units::Units;
pub use config::{Config, OutputFormat};
