//! Age calculation in fractional months.
//!
//! Whole calendar months are counted from the year and month fields, then the
//! day-of-month difference is added as a fraction of the measurement month's
//! length. This is the convention the reference percentiles assume; it is not
//! an exact day count and must stay that way.

use crate::{AgeInput, Error, Result};
use chrono::{Datelike, Duration, Months, NaiveDate};

/// Age in months between birth and measurement, never below zero
pub fn age_in_months(birth: NaiveDate, measurement: NaiveDate) -> f64 {
    let whole_months = (measurement.year() - birth.year()) * 12
        + (measurement.month() as i32 - birth.month() as i32);
    let day_difference = measurement.day() as i32 - birth.day() as i32;
    let days = f64::from(days_in_month(measurement));

    let months = f64::from(whole_months) + f64::from(day_difference) / days;
    if months < 0.0 {
        tracing::debug!(
            "Measurement {} precedes birth {}, clamping age to zero",
            measurement,
            birth
        );
        return 0.0;
    }
    months
}

/// Birth date implied by an age in months at a measurement date
///
/// Whole months are subtracted with calendar arithmetic (the 31st of a month
/// lands on the last day of a shorter month), then the fractional part is
/// removed as `round(fraction * days in measurement month)` days. This is a
/// display convenience and not an exact inverse of [`age_in_months`].
pub fn implied_birth_date(age_months: f64, measurement: NaiveDate) -> Result<NaiveDate> {
    if !age_months.is_finite() || age_months < 0.0 {
        return Err(Error::InvalidAge(age_months));
    }

    let whole = age_months.floor();
    let fraction = age_months - whole;

    let out_of_range = || {
        Error::InvalidDate(format!(
            "{} months before {} is out of calendar range",
            age_months, measurement
        ))
    };

    let mut birth = measurement
        .checked_sub_months(Months::new(whole as u32))
        .ok_or_else(out_of_range)?;

    if fraction != 0.0 {
        let days = (f64::from(days_in_month(measurement)) * fraction).round() as i64;
        birth = birth
            .checked_sub_signed(Duration::days(days))
            .ok_or_else(out_of_range)?;
    }

    Ok(birth)
}

/// Number of days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    match date.month() {
        2 if is_leap_year(date.year()) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Parse an ISO `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| Error::InvalidDate(format!("{:?}: {}", s, e)))
}

impl AgeInput {
    /// Pick the age source from loosely-filled form fields
    ///
    /// A birth date together with a direct age is [`Error::ConflictingAge`].
    /// A birth date needs a measurement date; with no usable source the result
    /// is [`Error::MissingAge`].
    pub fn from_parts(
        birth: Option<NaiveDate>,
        measurement: Option<NaiveDate>,
        direct_months: Option<f64>,
    ) -> Result<Self> {
        match (birth, measurement, direct_months) {
            (Some(_), _, Some(_)) => Err(Error::ConflictingAge),
            (Some(birth), Some(measurement), None) => Ok(AgeInput::FromDates { birth, measurement }),
            (None, _, Some(months)) => Ok(AgeInput::Direct { months }),
            _ => Err(Error::MissingAge),
        }
    }

    /// Age in months this input stands for
    pub fn months(&self) -> f64 {
        match *self {
            AgeInput::FromDates { birth, measurement } => age_in_months(birth, measurement),
            AgeInput::Direct { months } => months,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_one_year_is_twelve_months() {
        assert_eq!(age_in_months(date("2023-01-01"), date("2024-01-01")), 12.0);
    }

    #[test]
    fn test_same_day_is_zero() {
        assert_eq!(age_in_months(date("2023-06-15"), date("2023-06-15")), 0.0);
    }

    #[test]
    fn test_day_fraction_uses_measurement_month() {
        // 2 whole months, 14 days short, March has 31 days
        let age = age_in_months(date("2023-01-15"), date("2023-03-01"));
        assert!((age - (2.0 - 14.0 / 31.0)).abs() < 1e-12);

        // February 2024 has 29 days
        let age = age_in_months(date("2024-01-01"), date("2024-02-15"));
        assert!((age - (1.0 + 14.0 / 29.0)).abs() < 1e-12);
    }

    #[test]
    fn test_never_negative() {
        assert_eq!(age_in_months(date("2024-01-31"), date("2024-01-01")), 0.0);
        assert_eq!(age_in_months(date("2025-01-01"), date("2023-01-01")), 0.0);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(date("2023-02-10")), 28);
        assert_eq!(days_in_month(date("2024-02-10")), 29);
        assert_eq!(days_in_month(date("2024-04-30")), 30);
        assert_eq!(days_in_month(date("2024-12-01")), 31);
    }

    #[test]
    fn test_implied_birth_date_whole_months() {
        assert_eq!(
            implied_birth_date(12.0, date("2024-01-01")).unwrap(),
            date("2023-01-01")
        );
        // Calendar subtraction clamps to the end of February
        assert_eq!(
            implied_birth_date(1.0, date("2024-03-31")).unwrap(),
            date("2024-02-29")
        );
    }

    #[test]
    fn test_implied_birth_date_fraction_rounds_days() {
        // Half of June's 30 days
        assert_eq!(
            implied_birth_date(6.5, date("2024-06-20")).unwrap(),
            date("2023-12-05")
        );
    }

    #[test]
    fn test_implied_birth_date_rejects_negative() {
        assert!(matches!(
            implied_birth_date(-1.0, date("2024-01-01")),
            Err(Error::InvalidAge(_))
        ));
    }

    #[test]
    fn test_parse_date_errors() {
        assert!(matches!(parse_date("2024-13-01"), Err(Error::InvalidDate(_))));
        assert!(matches!(parse_date("yesterday"), Err(Error::InvalidDate(_))));
    }

    #[test]
    fn test_from_parts() {
        let birth = date("2023-01-01");
        let measured = date("2023-07-01");

        let input = AgeInput::from_parts(Some(birth), Some(measured), None).unwrap();
        assert_eq!(input.months(), 6.0);

        let input = AgeInput::from_parts(None, Some(measured), Some(9.25)).unwrap();
        assert_eq!(input, AgeInput::Direct { months: 9.25 });

        let err = AgeInput::from_parts(Some(birth), None, None).unwrap_err();
        assert!(err.is_missing_age());

        let err = AgeInput::from_parts(None, None, None).unwrap_err();
        assert!(err.is_missing_age());
    }

    #[test]
    fn test_from_parts_rejects_two_sources() {
        let birth = date("2023-01-01");
        let measured = date("2023-07-01");

        let err = AgeInput::from_parts(Some(birth), Some(measured), Some(6.0)).unwrap_err();
        assert!(matches!(err, Error::ConflictingAge));
        assert!(!err.is_missing_age());

        let err = AgeInput::from_parts(Some(birth), None, Some(6.0)).unwrap_err();
        assert!(matches!(err, Error::ConflictingAge));
    }

    #[test]
    fn test_days_in_month_at_calendar_edges() {
        assert_eq!(days_in_month(NaiveDate::MAX), 31);
        assert_eq!(days_in_month(NaiveDate::MIN), 31);
        assert_eq!(days_in_month(date("1900-02-01")), 28);
        assert_eq!(days_in_month(date("2000-02-01")), 29);
        assert!(age_in_months(date("2024-01-01"), NaiveDate::MAX) > 0.0);
    }
}
