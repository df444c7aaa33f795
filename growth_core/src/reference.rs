//! Reference tables of LMS parameters.
//!
//! A table holds one age-ordered series per (sex, metric) pair. The standard
//! table is a plain `static` built at compile time from [`crate::reference_data`];
//! it is never written after the process starts, so any number of threads can
//! read it without coordination.

use crate::{reference_data, Error, LmsParameters, Metric, Result, Sex};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

static STANDARD_TABLE: ReferenceTable = ReferenceTable::from_static(reference_data::STANDARD_SERIES);

/// Get a reference to the built-in WHO/CDC style table
pub fn standard() -> &'static ReferenceTable {
    &STANDARD_TABLE
}

/// One authored row: LMS parameters at an integer month of age
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct LmsRow {
    pub month: u16,
    pub l: f64,
    pub m: f64,
    pub s: f64,
}

impl LmsRow {
    pub const fn new(month: u16, l: f64, m: f64, s: f64) -> Self {
        Self { month, l, m, s }
    }

    pub fn params(&self) -> LmsParameters {
        LmsParameters::new(self.l, self.m, self.s)
    }
}

/// Rows for a single (sex, metric) pair, strictly increasing in month
#[derive(Clone, Debug)]
pub struct ReferenceSeries {
    rows: Cow<'static, [LmsRow]>,
}

impl ReferenceSeries {
    /// Wrap compile-time rows without checking them
    ///
    /// The built-in rows are checked by the test suite instead.
    pub const fn from_static(rows: &'static [LmsRow]) -> Self {
        Self {
            rows: Cow::Borrowed(rows),
        }
    }

    /// Build a series from owned rows, rejecting rows that break the invariants
    pub fn new(rows: Vec<LmsRow>) -> Result<Self> {
        let series = Self {
            rows: Cow::Owned(rows),
        };
        let errors = series.validate();
        if !errors.is_empty() {
            return Err(Error::InvalidReferenceSeries(errors.join("; ")));
        }
        Ok(series)
    }

    pub fn rows(&self) -> &[LmsRow] {
        &self.rows
    }

    /// Youngest and oldest authored month, if the series has any rows
    pub fn month_range(&self) -> Option<(u16, u16)> {
        match (self.rows.first(), self.rows.last()) {
            (Some(first), Some(last)) => Some((first.month, last.month)),
            _ => None,
        }
    }

    /// Row authored at exactly this month, without interpolation
    pub fn lookup_exact(&self, month: u16) -> Option<LmsParameters> {
        self.rows
            .binary_search_by_key(&month, |row| row.month)
            .ok()
            .map(|idx| self.rows[idx].params())
    }

    /// Validate the series
    ///
    /// Returns a list of validation errors (empty if valid)
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.rows.is_empty() {
            errors.push("series has no rows".to_string());
        }

        for row in self.rows.iter() {
            if !(row.m.is_finite() && row.m > 0.0) {
                errors.push(format!("month {}: M must be positive, got {}", row.month, row.m));
            }
            if !(row.s.is_finite() && row.s > 0.0) {
                errors.push(format!("month {}: S must be positive, got {}", row.month, row.s));
            }
            if !row.l.is_finite() {
                errors.push(format!("month {}: L must be finite, got {}", row.month, row.l));
            }
        }

        for pair in self.rows.windows(2) {
            if pair[1].month <= pair[0].month {
                errors.push(format!(
                    "months must be strictly increasing: {} follows {}",
                    pair[1].month, pair[0].month
                ));
            }
        }

        errors
    }
}

/// Series registered for one (sex, metric) pair
#[derive(Clone, Debug)]
pub struct SeriesEntry {
    pub sex: Sex,
    pub metric: Metric,
    pub series: ReferenceSeries,
}

impl SeriesEntry {
    pub const fn new(sex: Sex, metric: Metric, series: ReferenceSeries) -> Self {
        Self {
            sex,
            metric,
            series,
        }
    }
}

/// Reference series indexed by (sex, metric)
#[derive(Clone, Debug)]
pub struct ReferenceTable {
    entries: Cow<'static, [SeriesEntry]>,
}

impl Default for ReferenceTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceTable {
    /// Empty table, to be filled with [`ReferenceTable::insert`]
    pub fn new() -> Self {
        Self {
            entries: Cow::Owned(Vec::new()),
        }
    }

    pub const fn from_static(entries: &'static [SeriesEntry]) -> Self {
        Self {
            entries: Cow::Borrowed(entries),
        }
    }

    /// Register a series, replacing any existing one for the same pair
    pub fn insert(&mut self, sex: Sex, metric: Metric, series: ReferenceSeries) {
        let entries = self.entries.to_mut();
        match entries
            .iter_mut()
            .find(|e| e.sex == sex && e.metric == metric)
        {
            Some(existing) => existing.series = series,
            None => entries.push(SeriesEntry::new(sex, metric, series)),
        }
    }

    /// Builder-style variant of [`ReferenceTable::insert`]
    pub fn with_series(mut self, sex: Sex, metric: Metric, series: ReferenceSeries) -> Self {
        self.insert(sex, metric, series);
        self
    }

    pub fn series(&self, sex: Sex, metric: Metric) -> Result<&ReferenceSeries> {
        self.entries
            .iter()
            .find(|e| e.sex == sex && e.metric == metric)
            .map(|e| &e.series)
            .ok_or_else(|| Error::unknown_series(sex, metric))
    }

    pub fn entries(&self) -> &[SeriesEntry] {
        &self.entries
    }

    /// Row authored at exactly `month`, or `None` between authored rows
    pub fn lookup_exact(&self, sex: Sex, metric: Metric, month: u16) -> Result<Option<LmsParameters>> {
        Ok(self.series(sex, metric)?.lookup_exact(month))
    }

    /// Validate every series in the table
    pub fn validate(&self) -> Vec<String> {
        self.entries
            .iter()
            .flat_map(|entry| {
                entry
                    .series
                    .validate()
                    .into_iter()
                    .map(move |err| format!("{}/{}: {}", entry.sex, entry.metric, err))
            })
            .collect()
    }
}
