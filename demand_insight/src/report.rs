//! Dashboard report assembly and the data-quality gate
//!
//! The entry points here replace the script-level globals of the
//! original dashboard with an explicit pipeline: table and selection in,
//! result object out. Every call recomputes from scratch; nothing is
//! cached between selections.

use crate::aggregate::{aggregate_demand, DateSeries};
use crate::data::{DataLoader, TransactionTable};
use crate::error::{DashboardError, Result};
use crate::estimator::{ForecastBundle, SyntheticEstimator};
use crate::histogram::{kde_overlay, Histogram};
use crate::selector::StockCodeSelector;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Bin count for the error histograms
pub const ERROR_HISTOGRAM_BINS: usize = 15;

/// Rows shown in the raw-table preview
pub const PREVIEW_ROWS: usize = 5;

/// Sample points for each density overlay
pub const KDE_CURVE_POINTS: usize = 120;

/// An error series binned for display, with its density overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDistribution {
    /// Fixed-width bins over the error values
    pub histogram: Histogram,
    /// Kernel-density curve scaled to overlay the counts
    pub density: Vec<(f64, f64)>,
}

/// Everything the presenter needs to render one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Normalized column names of the loaded table
    pub columns: Vec<String>,
    /// Head preview of the raw table, cells stringified
    pub preview: Vec<Vec<String>>,
    /// Distinct stock codes, in first-encountered order
    pub choices: Vec<String>,
    /// The stock code this report was computed for
    pub stock_code: String,
    /// Actual demand plus the synthetic derived series
    pub forecast: ForecastBundle,
    /// Training-error histogram and density overlay
    pub train_distribution: ErrorDistribution,
    /// Testing-error histogram and density overlay
    pub test_distribution: ErrorDistribution,
}

/// Run the pipeline for one selection against a loaded table.
///
/// The gate runs first: an empty table or one missing required columns
/// fails here and no aggregation is performed. With `None` the selection
/// defaults to the first distinct stock code. A selection absent from
/// the table is still a valid report, its series simply come out empty.
pub fn build_report(table: &TransactionTable, selection: Option<&str>) -> Result<DashboardReport> {
    table.validate()?;

    let selector = StockCodeSelector::from_table(table)?;
    let stock_code = match selection {
        Some(code) => code.to_string(),
        None => selector
            .default_choice()
            .ok_or_else(|| DashboardError::Data("No stock codes in the table".to_string()))?
            .to_string(),
    };

    let demand = aggregate_demand(table, &stock_code)?;
    let forecast = SyntheticEstimator::derive(&demand)?;
    let train_distribution = error_distribution(&forecast.train_error)?;
    let test_distribution = error_distribution(&forecast.test_error)?;

    Ok(DashboardReport {
        columns: table.column_names(),
        preview: table.preview(PREVIEW_ROWS)?,
        choices: selector.choices().to_vec(),
        stock_code,
        forecast,
        train_distribution,
        test_distribution,
    })
}

/// Load a CSV and build the report in one call.
pub fn run_pipeline<P: AsRef<Path>>(path: P, selection: Option<&str>) -> Result<DashboardReport> {
    let table = DataLoader::from_csv(path)?;
    build_report(&table, selection)
}

fn error_distribution(series: &DateSeries) -> Result<ErrorDistribution> {
    let histogram = Histogram::from_values(series.values(), ERROR_HISTOGRAM_BINS)?;
    let density = kde_overlay(series.values(), &histogram, KDE_CURVE_POINTS)?;

    Ok(ErrorDistribution { histogram, density })
}
