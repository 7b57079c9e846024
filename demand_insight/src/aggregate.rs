//! Per-date demand aggregation

use crate::data::TransactionTable;
use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ordered date-keyed series of values.
///
/// Keys are the raw `InvoiceDate` strings. They are never parsed into a
/// real date type, so ordering is lexicographic; formats such as
/// `1/9/2024` vs `1/10/2024` sort by text. That mirrors the upstream
/// data contract and is deliberate.
///
/// Deserialization goes through [`DateSeries::new`], so a serialized
/// series with mismatched date and value lengths is rejected instead of
/// producing a series that breaks the alignment invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SeriesParts")]
pub struct DateSeries {
    dates: Vec<String>,
    values: Vec<f64>,
}

/// Raw wire form of a series, before the length invariant is checked.
#[derive(Debug, Deserialize)]
struct SeriesParts {
    dates: Vec<String>,
    values: Vec<f64>,
}

impl TryFrom<SeriesParts> for DateSeries {
    type Error = DashboardError;

    fn try_from(parts: SeriesParts) -> Result<Self> {
        DateSeries::new(parts.dates, parts.values)
    }
}

impl DateSeries {
    /// Create a series from parallel date and value vectors.
    pub fn new(dates: Vec<String>, values: Vec<f64>) -> Result<Self> {
        if dates.len() != values.len() {
            return Err(DashboardError::Data(format!(
                "Series length mismatch: {} dates vs {} values",
                dates.len(),
                values.len()
            )));
        }

        Ok(Self { dates, values })
    }

    /// A series with no entries
    pub fn empty() -> Self {
        Self {
            dates: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Number of dates in the series
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Check whether the series has no entries
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The date keys, in ascending order
    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    /// The values, aligned with [`DateSeries::dates`]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Look up the value for a date key
    pub fn get(&self, date: &str) -> Option<f64> {
        self.dates
            .iter()
            .position(|d| d == date)
            .map(|i| self.values[i])
    }

    /// Sum of all values in the series
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Iterate over `(date, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.dates
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Index-value pairs for charting
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect()
    }

    /// Apply a value-wise transform, keeping the key-set.
    pub(crate) fn map_values<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        Self {
            dates: self.dates.clone(),
            values: self.values.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Combine two series value-wise. Both must share the same key-set.
    pub(crate) fn zip_with<F: Fn(f64, f64) -> f64>(&self, other: &Self, f: F) -> Result<Self> {
        if self.dates != other.dates {
            return Err(DashboardError::Data(
                "Series have different date keys".to_string(),
            ));
        }

        Ok(Self {
            dates: self.dates.clone(),
            values: self
                .values
                .iter()
                .zip(other.values.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }
}

/// Aggregate demand for one stock code.
///
/// Filters rows whose `StockCode` equals `stock_code`, groups them by
/// `InvoiceDate` and sums `Quantity` per group. The result is keyed in
/// ascending lexicographic date order, with each filtered row counted in
/// exactly one bucket. An unknown stock code yields an empty series, not
/// an error. Rows with a null in any of the three fields cannot be
/// grouped and are skipped.
pub fn aggregate_demand(table: &TransactionTable, stock_code: &str) -> Result<DateSeries> {
    let codes = table.string_column("StockCode")?;
    let dates = table.string_column("InvoiceDate")?;
    let quantities = table.f64_column("Quantity")?;

    let mut buckets: BTreeMap<String, f64> = BTreeMap::new();
    for ((code, date), quantity) in codes.into_iter().zip(dates).zip(quantities) {
        let (Some(code), Some(date), Some(quantity)) = (code, date, quantity) else {
            continue;
        };

        if code == stock_code {
            *buckets.entry(date).or_insert(0.0) += quantity;
        }
    }

    let mut dates = Vec::with_capacity(buckets.len());
    let mut values = Vec::with_capacity(buckets.len());
    for (date, sum) in buckets {
        dates.push(date);
        values.push(sum);
    }

    Ok(DateSeries { dates, values })
}
