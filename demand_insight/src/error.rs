//! Error types for the demand_insight crate

use polars::prelude::PolarsError;
use thiserror::Error;

/// Custom error types for the demand_insight crate
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The transactions file is missing or unreadable
    #[error("Failed to read the transactions file: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV engine rejected the file contents
    #[error("Failed to parse the transactions file: {0}")]
    Polars(String),

    /// The loaded table has zero rows
    #[error("The DataFrame is empty. Please check the CSV file.")]
    EmptyDataset,

    /// One or more required columns are absent after header normalization
    #[error("Missing columns in the data: {}. Please check the CSV file.", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// Data anomaly in an otherwise valid table
    #[error("Data error: {0}")]
    Data(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, DashboardError>;

impl From<PolarsError> for DashboardError {
    fn from(err: PolarsError) -> Self {
        DashboardError::Polars(err.to_string())
    }
}
