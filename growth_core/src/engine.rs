//! Growth statistics engine.
//!
//! Every metric goes through the same pipeline:
//! - resolve LMS parameters at the patient's exact age
//! - transform the measurement to a Z-score
//! - map the Z-score to a percentile
//!
//! Z and percentile always come from one resolution, so they can never refer
//! to parameters at different ages.

use crate::lms::{self, z_score};
use crate::normal::z_to_percentile;
use crate::reference::{self, ReferenceTable};
use crate::{
    BmiScore, Error, GrowthStatistics, Metric, MetricScore, PatientMeasurement, Result, Sex,
};

/// Statistics engine bound to one reference table
#[derive(Clone, Copy, Debug)]
pub struct GrowthEngine<'a> {
    table: &'a ReferenceTable,
}

impl Default for GrowthEngine<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl GrowthEngine<'static> {
    /// Engine over the built-in reference table
    pub fn standard() -> Self {
        Self::new(reference::standard())
    }
}

impl<'a> GrowthEngine<'a> {
    pub fn new(table: &'a ReferenceTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a ReferenceTable {
        self.table
    }

    /// Score one raw value against its reference distribution
    pub fn evaluate_metric(
        &self,
        sex: Sex,
        metric: Metric,
        age_months: f64,
        value: f64,
    ) -> Result<MetricScore> {
        let lms = lms::resolve(self.table, sex, metric, age_months)?;
        let z = z_score(value, &lms);
        let percentile = z_to_percentile(z);

        tracing::debug!(
            "{} {} at {:.2} months: value {:.3}, L={} M={} S={}, z={:.4}, p={:.2}",
            sex,
            metric,
            age_months,
            value,
            lms.l,
            lms.m,
            lms.s,
            z,
            percentile
        );

        Ok(MetricScore { z, percentile })
    }

    /// Compute the full statistics bundle for one snapshot
    ///
    /// Measurements are validated before any lookup. Either every requested
    /// metric succeeds or the whole call fails.
    pub fn compute(
        &self,
        sex: Sex,
        age_months: f64,
        weight_kg: f64,
        height_cm: f64,
        head_circumference_cm: Option<f64>,
    ) -> Result<GrowthStatistics> {
        validate_measurement(Metric::Weight, weight_kg)?;
        validate_measurement(Metric::Height, height_cm)?;
        if let Some(hc) = head_circumference_cm {
            validate_measurement(Metric::HeadCircumference, hc)?;
        }

        let weight = self.evaluate_metric(sex, Metric::Weight, age_months, weight_kg)?;
        let height = self.evaluate_metric(sex, Metric::Height, age_months, height_cm)?;

        let bmi_value = body_mass_index(weight_kg, height_cm);
        let bmi = self.evaluate_metric(sex, Metric::Bmi, age_months, bmi_value)?;

        let head_circumference = head_circumference_cm
            .map(|hc| self.evaluate_metric(sex, Metric::HeadCircumference, age_months, hc))
            .transpose()?;

        Ok(GrowthStatistics {
            age_in_months: age_months,
            weight,
            height,
            bmi: BmiScore {
                value: bmi_value,
                z: bmi.z,
                percentile: bmi.percentile,
            },
            head_circumference,
        })
    }

    /// Compute statistics for a patient, deriving age from its age source
    pub fn compute_for(&self, patient: &PatientMeasurement) -> Result<GrowthStatistics> {
        self.compute(
            patient.sex,
            patient.age.months(),
            patient.weight_kg,
            patient.height_cm,
            patient.head_circumference_cm,
        )
    }
}

/// BMI in kg/m² from weight in kg and height in cm
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

fn validate_measurement(metric: Metric, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidMeasurement { metric, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{LmsRow, ReferenceSeries};
    use crate::AgeInput;
    use chrono::NaiveDate;

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_golden_male_twelve_months() {
        // Rows at 12 months: weight (0.0644, 9.6479, 0.10925),
        // height (1, 75.7488, 0.03137), BMI (-0.4115, 16.7981, 0.08009)
        let stats = GrowthEngine::standard()
            .compute(Sex::Male, 12.0, 10.0, 75.0, None)
            .unwrap();

        assert_eq!(stats.age_in_months, 12.0);
        assert_close(stats.weight.z, 0.328478004207202, 1e-9);
        assert_close(stats.weight.percentile, 62.87248973219697, 1e-7);
        assert_close(stats.height.z, -0.31511970397655126, 1e-9);
        assert_close(stats.height.percentile, 37.633534946441635, 1e-7);
        assert_close(stats.bmi.value, 17.77777777777778, 1e-12);
        assert_close(stats.bmi.z, 0.6995565690994797, 1e-9);
        assert_close(stats.bmi.percentile, 75.78979920805476, 1e-7);
        assert!(stats.head_circumference.is_none());
    }

    #[test]
    fn test_median_values_score_fiftieth_percentile() {
        let stats = GrowthEngine::standard()
            .compute(Sex::Female, 6.0, 7.2970, 65.7311, Some(42.1995))
            .unwrap();

        assert_eq!(stats.weight.z, 0.0);
        assert_eq!(stats.height.z, 0.0);
        assert_close(stats.weight.percentile, 50.0, 1e-4);
        let hc = stats.head_circumference.unwrap();
        assert_eq!(hc.z, 0.0);
    }

    #[test]
    fn test_rejects_non_positive_measurements_before_lookup() {
        // An empty table would fail with UnknownSeries if lookup ran first
        let table = ReferenceTable::new();
        let engine = GrowthEngine::new(&table);

        let err = engine.compute(Sex::Male, 12.0, 0.0, 75.0, None).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidMeasurement {
                metric: Metric::Weight,
                ..
            }
        ));

        let err = engine.compute(Sex::Male, 12.0, 10.0, -75.0, None).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidMeasurement {
                metric: Metric::Height,
                ..
            }
        ));

        let err = engine
            .compute(Sex::Male, 12.0, 10.0, f64::NAN, None)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidMeasurement { .. }));

        let err = engine
            .compute(Sex::Male, 12.0, 10.0, 75.0, Some(0.0))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidMeasurement {
                metric: Metric::HeadCircumference,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_age_propagates() {
        let err = GrowthEngine::standard()
            .compute(Sex::Female, -2.0, 10.0, 75.0, None)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidAge(_)));
    }

    #[test]
    fn test_missing_series_fails_whole_bundle() {
        let weight = ReferenceSeries::new(vec![LmsRow::new(0, 0.0, 3.0, 0.1)]).unwrap();
        let height = ReferenceSeries::new(vec![LmsRow::new(0, 1.0, 50.0, 0.04)]).unwrap();
        let table = ReferenceTable::new()
            .with_series(Sex::Male, Metric::Weight, weight)
            .with_series(Sex::Male, Metric::Height, height);

        let err = GrowthEngine::new(&table)
            .compute(Sex::Male, 0.0, 3.0, 50.0, None)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownSeries { .. }));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let engine = GrowthEngine::standard();
        let first = engine
            .compute(Sex::Female, 27.3, 12.4, 88.0, Some(47.0))
            .unwrap();
        let second = engine
            .compute(Sex::Female, 27.3, 12.4, 88.0, Some(47.0))
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(first.weight.z.to_bits(), second.weight.z.to_bits());
        assert_eq!(first.bmi.percentile.to_bits(), second.bmi.percentile.to_bits());
    }

    #[test]
    fn test_compute_for_uses_age_source() {
        let patient = PatientMeasurement {
            sex: Sex::Male,
            age: AgeInput::FromDates {
                birth: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                measurement: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            },
            weight_kg: 10.0,
            height_cm: 75.0,
            head_circumference_cm: None,
        };

        let engine = GrowthEngine::standard();
        let from_dates = engine.compute_for(&patient).unwrap();
        let direct = engine.compute(Sex::Male, 12.0, 10.0, 75.0, None).unwrap();
        assert_eq!(from_dates, direct);
    }

    #[test]
    fn test_body_mass_index() {
        assert_close(body_mass_index(10.0, 100.0), 10.0, 1e-12);
        assert_close(body_mass_index(20.0, 110.0), 20.0 / 1.21, 1e-12);
    }
}
