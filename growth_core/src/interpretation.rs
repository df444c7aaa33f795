//! Clinical-risk classification of a single score.
//!
//! The rule does not know which metric produced the score. Bands are checked
//! from the outermost inwards and the first match wins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a score sits relative to the reference median
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    SeverelyLow,
    BelowAverage,
    Typical,
    AboveAverage,
    SeverelyHigh,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::SeverelyLow => "severely low",
            Category::BelowAverage => "below average",
            Category::Typical => "typical range",
            Category::AboveAverage => "above average",
            Category::SeverelyHigh => "severely high",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Category::SeverelyLow => {
                "Far below the reference median (about 2 SD or more); consider further nutritional and medical evaluation."
            }
            Category::BelowAverage => {
                "Around 2 SD below the median; the growth pattern warrants additional monitoring."
            }
            Category::Typical => {
                "Close to the reference population median and generally consistent with healthy growth."
            }
            Category::AboveAverage => {
                "Around 2 SD above the median; monitor the growth trend and related risk factors."
            }
            Category::SeverelyHigh => {
                "Far above the reference median (about 2 SD or more); evaluate the risk of excess growth in clinical context."
            }
        }
    }

    pub fn risk_tier(&self) -> RiskTier {
        match self {
            Category::SeverelyLow | Category::SeverelyHigh => RiskTier::Red,
            Category::BelowAverage | Category::AboveAverage => RiskTier::Yellow,
            Category::Typical => RiskTier::Green,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Traffic-light tier used by summary cards
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Green,
    Yellow,
    Red,
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RiskTier::Green => "green",
            RiskTier::Yellow => "yellow",
            RiskTier::Red => "red",
        })
    }
}

/// Classification of one (percentile, Z) pair
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Interpretation {
    pub category: Category,
    pub description: String,
    pub risk_tier: RiskTier,
}

/// Classify a score into a risk band
///
/// Total over all inputs: NaN fails every comparison and lands in the
/// typical band.
pub fn classify(percentile: f64, z_score: f64) -> Interpretation {
    let high = z_score >= 0.0;

    let category = if percentile <= 3.0 || z_score <= -3.0 || percentile >= 97.0 || z_score >= 3.0 {
        if high {
            Category::SeverelyHigh
        } else {
            Category::SeverelyLow
        }
    } else if percentile <= 10.0 || z_score <= -2.0 || percentile >= 90.0 || z_score >= 2.0 {
        if high {
            Category::AboveAverage
        } else {
            Category::BelowAverage
        }
    } else {
        Category::Typical
    };

    Interpretation {
        category,
        description: category.description().to_string(),
        risk_tier: category.risk_tier(),
    }
}
