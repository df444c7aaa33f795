//! Unit normalization at the input boundary.
//!
//! The engine only sees kilograms and centimeters.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const KG_PER_LB: f64 = 0.453592;
pub const CM_PER_IN: f64 = 2.54;

/// Unit system of user-entered values
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    /// Entered weight (kg or lb) to kilograms
    pub fn weight_to_kg(&self, value: f64) -> f64 {
        match self {
            Units::Metric => value,
            Units::Imperial => value * KG_PER_LB,
        }
    }

    /// Entered length (cm or in) to centimeters
    pub fn length_to_cm(&self, value: f64) -> f64 {
        match self {
            Units::Metric => value,
            Units::Imperial => value * CM_PER_IN,
        }
    }

    /// Kilograms back to this unit system, for display
    pub fn weight_from_kg(&self, kg: f64) -> f64 {
        match self {
            Units::Metric => kg,
            Units::Imperial => kg / KG_PER_LB,
        }
    }

    /// Centimeters back to this unit system, for display
    pub fn length_from_cm(&self, cm: f64) -> f64 {
        match self {
            Units::Metric => cm,
            Units::Imperial => cm / CM_PER_IN,
        }
    }

    pub fn weight_label(&self) -> &'static str {
        match self {
            Units::Metric => "kg",
            Units::Imperial => "lb",
        }
    }

    pub fn length_label(&self) -> &'static str {
        match self {
            Units::Metric => "cm",
            Units::Imperial => "in",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        })
    }
}

impl FromStr for Units {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "si" => Ok(Units::Metric),
            "imperial" | "us" => Ok(Units::Imperial),
            other => Err(Error::Config(format!("Unknown unit system: {}", other))),
        }
    }
}
