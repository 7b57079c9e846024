//! Transactional table loading and validation

use crate::error::{DashboardError, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Columns the pipeline cannot run without, checked after header trimming.
pub const REQUIRED_COLUMNS: [&str; 3] = ["StockCode", "InvoiceDate", "Quantity"];

/// An in-memory transactional sales table.
///
/// Column names are normalized (surrounding whitespace trimmed) at load
/// time. Any columns beyond the required three pass through untouched and
/// show up in previews.
#[derive(Debug, Clone)]
pub struct TransactionTable {
    df: DataFrame,
}

/// Loader for transactional CSV data
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a transactions table from a CSV file.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<TransactionTable> {
        let file = File::open(path)?;
        let df = CsvReader::new(file)
            .infer_schema(None)
            .has_header(true)
            .finish()?;

        Self::normalize(df)
    }

    /// Wrap an existing DataFrame, applying the same header normalization.
    pub fn from_dataframe(df: DataFrame) -> Result<TransactionTable> {
        Self::normalize(df)
    }

    /// Trim surrounding whitespace from every column name.
    fn normalize(mut df: DataFrame) -> Result<TransactionTable> {
        let trimmed: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.trim().to_string())
            .collect();
        df.set_column_names(&trimmed)?;

        Ok(TransactionTable { df })
    }
}

impl TransactionTable {
    /// Get the underlying DataFrame
    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    /// Get the (normalized) column names
    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Number of rows in the table
    pub fn height(&self) -> usize {
        self.df.height()
    }

    /// Check whether the table has zero rows
    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Required columns absent from the table, in required-column order.
    pub fn missing_required_columns(&self) -> Vec<String> {
        let names = self.df.get_column_names();
        REQUIRED_COLUMNS
            .iter()
            .filter(|required| !names.iter().any(|name| name == *required))
            .map(|required| required.to_string())
            .collect()
    }

    /// Data-quality gate: a table must be non-empty and carry every
    /// required column before any aggregation runs. Emptiness is checked
    /// first, so an empty file reports as empty rather than malformed.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(DashboardError::EmptyDataset);
        }

        let missing = self.missing_required_columns();
        if !missing.is_empty() {
            return Err(DashboardError::MissingColumns(missing));
        }

        Ok(())
    }

    /// Render the first `n` rows as strings, nulls as empty cells.
    pub fn preview(&self, n: usize) -> Result<Vec<Vec<String>>> {
        let head = self.df.head(Some(n));

        let mut columns: Vec<Vec<String>> = Vec::with_capacity(head.width());
        for series in head.get_columns() {
            let as_text = series.cast(&DataType::Utf8)?;
            let cells = as_text
                .utf8()?
                .into_iter()
                .map(|value| value.unwrap_or("").to_string())
                .collect();
            columns.push(cells);
        }

        let mut rows = Vec::with_capacity(head.height());
        for i in 0..head.height() {
            rows.push(columns.iter().map(|column| column[i].clone()).collect());
        }

        Ok(rows)
    }

    /// Get a column as row-aligned optional strings. Non-string columns
    /// (numeric stock codes are common in retail exports) are cast to
    /// their text form.
    pub(crate) fn string_column(&self, name: &str) -> Result<Vec<Option<String>>> {
        let col = self
            .df
            .column(name)
            .map_err(|e| DashboardError::Data(format!("Column '{}' not found: {}", name, e)))?;

        let as_text = col.cast(&DataType::Utf8)?;
        Ok(as_text
            .utf8()?
            .into_iter()
            .map(|value| value.map(|v| v.to_string()))
            .collect())
    }

    /// Get a numeric column as row-aligned optional f64 values.
    pub(crate) fn f64_column(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let col = self
            .df
            .column(name)
            .map_err(|e| DashboardError::Data(format!("Column '{}' not found: {}", name, e)))?;

        if !col.dtype().is_numeric() {
            return Err(DashboardError::Data(format!(
                "Column '{}' cannot be converted to f64",
                name
            )));
        }

        let as_f64 = col.cast(&DataType::Float64)?;
        Ok(as_f64.f64()?.into_iter().collect())
    }
}
