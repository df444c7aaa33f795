//! Core domain types for the growth statistics engine.
//!
//! This module defines the fundamental types used throughout the system:
//! - Sex and metric identities that key the reference tables
//! - LMS parameters for one metric at one exact age
//! - Patient measurements and the two ways of supplying an age
//! - The statistics bundle returned by the engine

use crate::{Error, Interpretation};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Series Keys
// ============================================================================

/// Biological sex used to select a reference population
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "boy" => Ok(Sex::Male),
            "female" | "f" | "girl" => Ok(Sex::Female),
            other => Err(Error::UnknownSeries {
                sex: other.to_string(),
                metric: "*".into(),
            }),
        }
    }
}

/// Measurement that has its own age/sex-specific reference distribution
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Weight,
    Height,
    Bmi,
    HeadCircumference,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Weight,
        Metric::Height,
        Metric::Bmi,
        Metric::HeadCircumference,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Weight => "weight",
            Metric::Height => "height",
            Metric::Bmi => "bmi",
            Metric::HeadCircumference => "head_circumference",
        }
    }

    /// Unit label for values of this metric after normalization
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Weight => "kg",
            Metric::Height | Metric::HeadCircumference => "cm",
            Metric::Bmi => "kg/m²",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weight" => Ok(Metric::Weight),
            "height" | "length" | "stature" => Ok(Metric::Height),
            "bmi" => Ok(Metric::Bmi),
            "head" | "head_circumference" | "hc" => Ok(Metric::HeadCircumference),
            other => Err(Error::UnknownSeries {
                sex: "*".into(),
                metric: other.to_string(),
            }),
        }
    }
}

// ============================================================================
// LMS Parameters
// ============================================================================

/// Box-Cox power (L), median (M) and coefficient of variation (S)
/// for one metric at one exact age
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct LmsParameters {
    pub l: f64,
    pub m: f64,
    pub s: f64,
}

impl LmsParameters {
    pub const fn new(l: f64, m: f64, s: f64) -> Self {
        Self { l, m, s }
    }
}

// ============================================================================
// Patient Input
// ============================================================================

/// Where the patient's age comes from
///
/// Exactly one source of age exists per measurement.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AgeInput {
    /// Age derived from the calendar dates of birth and measurement
    FromDates {
        birth: NaiveDate,
        measurement: NaiveDate,
    },
    /// Age in months supplied directly
    Direct { months: f64 },
}

/// One patient snapshot, units already normalized to kg and cm
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PatientMeasurement {
    pub sex: Sex,
    pub age: AgeInput,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub head_circumference_cm: Option<f64>,
}

// ============================================================================
// Statistics Output
// ============================================================================

/// Z-score and percentile of one measurement
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct MetricScore {
    pub z: f64,
    pub percentile: f64,
}

impl MetricScore {
    pub fn interpret(&self) -> Interpretation {
        crate::interpretation::classify(self.percentile, self.z)
    }
}

/// BMI value together with its score
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct BmiScore {
    pub value: f64,
    pub z: f64,
    pub percentile: f64,
}

impl BmiScore {
    pub fn score(&self) -> MetricScore {
        MetricScore {
            z: self.z,
            percentile: self.percentile,
        }
    }
}

/// Complete statistics bundle for one patient snapshot
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GrowthStatistics {
    pub age_in_months: f64,
    pub weight: MetricScore,
    pub height: MetricScore,
    pub bmi: BmiScore,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_circumference: Option<MetricScore>,
}

impl GrowthStatistics {
    /// Every computed score in display order
    pub fn scores(&self) -> Vec<(Metric, MetricScore)> {
        let mut scores = vec![
            (Metric::Weight, self.weight),
            (Metric::Height, self.height),
            (Metric::Bmi, self.bmi.score()),
        ];
        if let Some(hc) = self.head_circumference {
            scores.push((Metric::HeadCircumference, hc));
        }
        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sex() {
        assert_eq!("male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!(" Female ".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("F".parse::<Sex>().unwrap(), Sex::Female);

        let err = "other".parse::<Sex>().unwrap_err();
        assert!(matches!(err, Error::UnknownSeries { ref sex, .. } if sex == "other"));
    }

    #[test]
    fn test_parse_metric() {
        assert_eq!("weight".parse::<Metric>().unwrap(), Metric::Weight);
        assert_eq!("length".parse::<Metric>().unwrap(), Metric::Height);
        assert_eq!("HC".parse::<Metric>().unwrap(), Metric::HeadCircumference);
        assert!("shoe_size".parse::<Metric>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for metric in Metric::ALL {
            assert_eq!(metric.to_string().parse::<Metric>().unwrap(), metric);
        }
        for sex in Sex::ALL {
            assert_eq!(sex.to_string().parse::<Sex>().unwrap(), sex);
        }
    }

    #[test]
    fn test_scores_include_head_only_when_present() {
        let score = MetricScore {
            z: 0.0,
            percentile: 50.0,
        };
        let mut stats = GrowthStatistics {
            age_in_months: 6.0,
            weight: score,
            height: score,
            bmi: BmiScore {
                value: 17.0,
                z: 0.0,
                percentile: 50.0,
            },
            head_circumference: None,
        };
        assert_eq!(stats.scores().len(), 3);

        stats.head_circumference = Some(score);
        let scores = stats.scores();
        assert_eq!(scores.len(), 4);
        assert_eq!(scores[3].0, Metric::HeadCircumference);
    }

    #[test]
    fn test_age_input_json_shape() {
        let input = AgeInput::Direct { months: 7.5 };
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(json, r#"{"mode":"direct","months":7.5}"#);
    }
}
