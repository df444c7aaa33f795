//! LMS parameter resolution and the Box-Cox transform.
//!
//! Parameters for a fractional age are linearly interpolated between the two
//! authored rows that bracket it. Ages outside the authored range use the
//! boundary row unchanged.

use crate::reference::{ReferenceSeries, ReferenceTable};
use crate::{Error, LmsParameters, Metric, Result, Sex};

/// Resolve LMS parameters for an exact, possibly fractional, age in months
pub fn resolve(
    table: &ReferenceTable,
    sex: Sex,
    metric: Metric,
    age_months: f64,
) -> Result<LmsParameters> {
    if !age_months.is_finite() || age_months < 0.0 {
        return Err(Error::InvalidAge(age_months));
    }

    let series = table.series(sex, metric)?;
    interpolate(series, age_months)
}

/// Interpolate within a single series; `age_months` must already be validated
fn interpolate(series: &ReferenceSeries, age_months: f64) -> Result<LmsParameters> {
    let rows = series.rows();
    let (first, last) = match (rows.first(), rows.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(Error::InvalidReferenceSeries(
                "series has no rows".to_string(),
            ))
        }
    };

    if age_months <= f64::from(first.month) {
        if age_months < f64::from(first.month) {
            tracing::debug!(
                "Age {:.2} below series start {}, using boundary row",
                age_months,
                first.month
            );
        }
        return Ok(first.params());
    }
    if age_months >= f64::from(last.month) {
        if age_months > f64::from(last.month) {
            tracing::debug!(
                "Age {:.2} beyond series end {}, using boundary row",
                age_months,
                last.month
            );
        }
        return Ok(last.params());
    }

    // First row strictly older than the age; the boundary checks above
    // guarantee 0 < hi_idx < rows.len().
    let hi_idx = rows.partition_point(|row| f64::from(row.month) <= age_months);
    let lo = &rows[hi_idx - 1];
    let hi = &rows[hi_idx];

    if f64::from(lo.month) == age_months || lo.month == hi.month {
        return Ok(lo.params());
    }

    let fraction =
        (age_months - f64::from(lo.month)) / (f64::from(hi.month) - f64::from(lo.month));
    let lerp = |a: f64, b: f64| a + fraction * (b - a);

    Ok(LmsParameters::new(
        lerp(lo.l, hi.l),
        lerp(lo.m, hi.m),
        lerp(lo.s, hi.s),
    ))
}

/// Z-score of a measurement against LMS parameters
///
/// - `L != 0`: `Z = ((X/M)^L - 1) / (L*S)`
/// - `L == 0`: `Z = ln(X/M) / S`
pub fn z_score(value: f64, lms: &LmsParameters) -> f64 {
    let LmsParameters { l, m, s } = *lms;
    if l == 0.0 {
        (value / m).ln() / s
    } else {
        ((value / m).powf(l) - 1.0) / (l * s)
    }
}

/// Measurement value that sits at a given Z-score (inverse of [`z_score`])
pub fn value_at_z(z: f64, lms: &LmsParameters) -> f64 {
    let LmsParameters { l, m, s } = *lms;
    if l == 0.0 {
        m * (s * z).exp()
    } else {
        m * (1.0 + l * s * z).powf(1.0 / l)
    }
}
