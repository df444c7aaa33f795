//! Reference percentile curves for plotting around a patient's age.

use crate::lms::{self, value_at_z};
use crate::reference::ReferenceTable;
use crate::{Error, Metric, Result, Sex};
use serde::{Deserialize, Serialize};

/// Z-scores of the plotted curves: roughly the 3rd, 15th, 50th, 85th and 97th percentiles
pub const CURVE_Z_SCORES: [f64; 5] = [-1.88, -1.04, 0.0, 1.04, 1.88];

/// Measurement values of each reference curve at one integer month
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct CurvePoint {
    pub month: u32,
    pub p3: f64,
    pub p15: f64,
    pub p50: f64,
    pub p85: f64,
    pub p97: f64,
}

/// Widest window accepted on each side of the age
pub const MAX_WINDOW_MONTHS: u32 = 240;

/// Curve values for every integer month in `[age - window, age + window]`
///
/// The window starts no earlier than birth and ends no later than `window`
/// months past the series' last authored row. Ages beyond that point have
/// nothing to plot and are rejected.
pub fn percentile_curves(
    table: &ReferenceTable,
    sex: Sex,
    metric: Metric,
    age_months: f64,
    window_months: u32,
) -> Result<Vec<CurvePoint>> {
    if !age_months.is_finite() || age_months < 0.0 {
        return Err(Error::InvalidAge(age_months));
    }
    if window_months > MAX_WINDOW_MONTHS {
        return Err(Error::InvalidWindow(window_months));
    }

    let (_, last_month) = table
        .series(sex, metric)?
        .month_range()
        .ok_or_else(|| Error::InvalidReferenceSeries("series has no rows".to_string()))?;
    let limit = u32::from(last_month) + window_months;
    if age_months > f64::from(limit) {
        return Err(Error::InvalidAge(age_months));
    }

    // Both bounds lie in [0, limit], so the casts cannot truncate.
    let window = f64::from(window_months);
    let start = (age_months - window).floor().max(0.0) as u32;
    let end = ((age_months + window).ceil() as u32).min(limit);

    (start..=end)
        .map(|month| -> Result<CurvePoint> {
            let params = lms::resolve(table, sex, metric, f64::from(month))?;
            let [p3, p15, p50, p85, p97] = CURVE_Z_SCORES.map(|z| value_at_z(z, &params));
            Ok(CurvePoint {
                month,
                p3,
                p15,
                p50,
                p85,
                p97,
            })
        })
        .collect()
}
