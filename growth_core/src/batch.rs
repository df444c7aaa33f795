//! CSV batch evaluation.
//!
//! Each input row is an independent patient snapshot. A row that cannot be
//! evaluated gets an `error` column and empty statistics; it does not stop the
//! rest of the batch. Only a structurally malformed CSV aborts.
//!
//! Empty cells are absent values. A non-empty cell that is not a number fails
//! its row, and so does a row that gives both a birth date and `age_months`.

use crate::age::parse_date;
use crate::engine::GrowthEngine;
use crate::interpretation::RiskTier;
use crate::{AgeInput, Error, GrowthStatistics, Metric, MetricScore, PatientMeasurement, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// A row in the CSV input
#[derive(Debug, Deserialize)]
struct InputRow {
    sex: String,
    #[serde(default)]
    birth_date: Option<String>,
    #[serde(default)]
    measurement_date: Option<String>,
    #[serde(default)]
    age_months: Option<String>,
    #[serde(default)]
    weight_kg: Option<String>,
    #[serde(default)]
    height_cm: Option<String>,
    #[serde(default)]
    head_circumference_cm: Option<String>,
}

impl InputRow {
    fn to_measurement(&self, default_measurement: Option<NaiveDate>) -> Result<PatientMeasurement> {
        let sex = self.sex.parse()?;

        let birth = non_empty(&self.birth_date).map(parse_date).transpose()?;
        let measurement = non_empty(&self.measurement_date)
            .map(parse_date)
            .transpose()?
            .or(default_measurement);
        let age_months = parse_number(&self.age_months, || Error::InvalidAge(f64::NAN))?;
        let age = AgeInput::from_parts(birth, measurement, age_months)?;

        let weight_kg = measurement_value(Metric::Weight, &self.weight_kg)?;
        let height_cm = measurement_value(Metric::Height, &self.height_cm)?;
        let head_circumference_cm =
            measurement_value(Metric::HeadCircumference, &self.head_circumference_cm)?;

        Ok(PatientMeasurement {
            sex,
            age,
            weight_kg: required(Metric::Weight, weight_kg)?,
            height_cm: required(Metric::Height, height_cm)?,
            head_circumference_cm,
        })
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Empty cell is `None`; anything else must parse as a number
fn parse_number(field: &Option<String>, invalid: impl FnOnce() -> Error) -> Result<Option<f64>> {
    non_empty(field)
        .map(|s| s.parse::<f64>().map_err(|_| invalid()))
        .transpose()
}

fn measurement_value(metric: Metric, field: &Option<String>) -> Result<Option<f64>> {
    parse_number(field, || Error::InvalidMeasurement {
        metric,
        value: f64::NAN,
    })
}

fn required(metric: Metric, value: Option<f64>) -> Result<f64> {
    value.ok_or(Error::InvalidMeasurement {
        metric,
        value: f64::NAN,
    })
}

/// A row in the CSV output
#[derive(Debug, Default, Serialize)]
struct OutputRow {
    row: usize,
    sex: String,
    age_months: Option<f64>,
    weight_z: Option<f64>,
    weight_percentile: Option<f64>,
    weight_tier: Option<RiskTier>,
    height_z: Option<f64>,
    height_percentile: Option<f64>,
    height_tier: Option<RiskTier>,
    bmi: Option<f64>,
    bmi_z: Option<f64>,
    bmi_percentile: Option<f64>,
    bmi_tier: Option<RiskTier>,
    head_circumference_z: Option<f64>,
    head_circumference_percentile: Option<f64>,
    head_circumference_tier: Option<RiskTier>,
    error: Option<String>,
}

impl OutputRow {
    fn from_stats(row: usize, sex: String, stats: &GrowthStatistics) -> Self {
        let split = |score: MetricScore| {
            (
                Some(score.z),
                Some(score.percentile),
                Some(score.interpret().risk_tier),
            )
        };
        let (weight_z, weight_percentile, weight_tier) = split(stats.weight);
        let (height_z, height_percentile, height_tier) = split(stats.height);
        let (bmi_z, bmi_percentile, bmi_tier) = split(stats.bmi.score());
        let (head_circumference_z, head_circumference_percentile, head_circumference_tier) =
            match stats.head_circumference {
                Some(score) => split(score),
                None => (None, None, None),
            };

        OutputRow {
            row,
            sex,
            age_months: Some(stats.age_in_months),
            weight_z,
            weight_percentile,
            weight_tier,
            height_z,
            height_percentile,
            height_tier,
            bmi: Some(stats.bmi.value),
            bmi_z,
            bmi_percentile,
            bmi_tier,
            head_circumference_z,
            head_circumference_percentile,
            head_circumference_tier,
            error: None,
        }
    }

    fn failed(row: usize, sex: String, error: &Error) -> Self {
        let message = if error.is_missing_age() {
            "no result: missing age".to_string()
        } else {
            error.to_string()
        };
        OutputRow {
            row,
            sex,
            error: Some(message),
            ..Default::default()
        }
    }
}

/// Counts from one batch run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub evaluated: usize,
    pub failed: usize,
}

/// Evaluate every row of `input` and write one result row per input row
///
/// Rows with a birth date but no measurement date use `default_measurement`
/// when given. Row numbers in the output start at 1.
pub fn evaluate_csv<R: Read, W: Write>(
    engine: &GrowthEngine<'_>,
    input: R,
    output: W,
    default_measurement: Option<NaiveDate>,
) -> Result<BatchSummary> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);
    let mut writer = csv::Writer::from_writer(output);
    let mut summary = BatchSummary::default();

    for (idx, record) in reader.deserialize::<InputRow>().enumerate() {
        let input_row = record?;
        let row = idx + 1;

        let result = input_row
            .to_measurement(default_measurement)
            .and_then(|patient| engine.compute_for(&patient));

        let output_row = match result {
            Ok(stats) => {
                summary.evaluated += 1;
                OutputRow::from_stats(row, input_row.sex, &stats)
            }
            Err(e) => {
                tracing::warn!("Skipping batch row {}: {}", row, e);
                summary.failed += 1;
                OutputRow::failed(row, input_row.sex, &e)
            }
        };
        writer.serialize(output_row)?;
    }

    writer.flush()?;
    tracing::info!(
        "Batch complete: {} evaluated, {} failed",
        summary.evaluated,
        summary.failed
    );
    Ok(summary)
}
