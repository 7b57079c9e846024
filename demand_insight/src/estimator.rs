//! Synthetic prediction and error series
//!
//! The "predicted" demand and both error series are fixed illustrative
//! scale factors applied to actual demand, not the output of a fitted
//! model. The compatibility contract is that these numbers match the
//! upstream dashboard exactly, so the transforms are applied literally
//! rather than algebraically reduced.

use crate::aggregate::DateSeries;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Upward adjustment applied to actual demand for the predicted series
pub const PREDICTION_MARKUP: f64 = 0.10;

/// Retention factor used to produce the training-error series
pub const TRAIN_RETENTION: f64 = 0.95;

/// Actual demand together with every series derived from it.
///
/// All four series share an identical key-set: the derived series are
/// total functions of the actual one and are empty only when it is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastBundle {
    /// Summed demand per date for the selected stock code
    pub actual: DateSeries,
    /// `actual + actual * 0.10`
    pub predicted: DateSeries,
    /// `actual - actual * 0.95`
    pub train_error: DateSeries,
    /// `actual - predicted`
    pub test_error: DateSeries,
}

impl ForecastBundle {
    /// Check whether there is any demand to chart
    pub fn is_empty(&self) -> bool {
        self.actual.is_empty()
    }

    /// Number of dates in the bundle
    pub fn len(&self) -> usize {
        self.actual.len()
    }
}

/// Derives the synthetic series. Pure and deterministic: same input
/// series, same outputs, every time.
#[derive(Debug, Clone, Default)]
pub struct SyntheticEstimator;

impl SyntheticEstimator {
    /// Derive the predicted and error series from actual demand.
    pub fn derive(actual: &DateSeries) -> Result<ForecastBundle> {
        let predicted = actual.map_values(|a| a + a * PREDICTION_MARKUP);
        let train_error = actual.map_values(|a| a - a * TRAIN_RETENTION);
        let test_error = actual.zip_with(&predicted, |a, p| a - p)?;

        Ok(ForecastBundle {
            actual: actual.clone(),
            predicted,
            train_error,
            test_error,
        })
    }
}
