//! # Demand Insight
//!
//! Core pipeline for a retail demand dashboard: load a transactional
//! sales CSV, pick a stock code, aggregate quantity per invoice date,
//! and derive the synthetic predicted and error series the dashboard
//! charts.
//!
//! The pipeline is a single linear pass per selection:
//!
//! loader -> column normalization -> selector -> aggregation -> synthetic
//! estimation -> report assembly
//!
//! There is no model fitting anywhere. The "predicted" series is a fixed
//! illustrative markup of actual demand (see [`estimator`]), kept
//! bit-for-bit compatible with the dashboard it replaces.
//!
//! ## Quick Start
//!
//! ```no_run
//! use demand_insight::run_pipeline;
//!
//! let report = run_pipeline("Transactional_data_retail_01.csv", None)?;
//! println!(
//!     "{} dates of demand for {}",
//!     report.forecast.actual.len(),
//!     report.stock_code
//! );
//! # Ok::<(), demand_insight::DashboardError>(())
//! ```

pub mod aggregate;
pub mod data;
pub mod error;
pub mod estimator;
pub mod histogram;
pub mod report;
pub mod selector;

// Re-export commonly used types
pub use crate::aggregate::{aggregate_demand, DateSeries};
pub use crate::data::{DataLoader, TransactionTable, REQUIRED_COLUMNS};
pub use crate::error::{DashboardError, Result};
pub use crate::estimator::{
    ForecastBundle, SyntheticEstimator, PREDICTION_MARKUP, TRAIN_RETENTION,
};
pub use crate::histogram::{kde_overlay, Histogram, HistogramBin};
pub use crate::report::{
    build_report, run_pipeline, DashboardReport, ErrorDistribution, ERROR_HISTOGRAM_BINS,
    KDE_CURVE_POINTS, PREVIEW_ROWS,
};
pub use crate::selector::StockCodeSelector;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
