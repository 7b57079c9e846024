//! Histogram binning and kernel-density overlays

use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use statrs::distribution::{Continuous, Normal};

/// One half-open histogram bin `[lower, upper)`; the last bin is closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Lower edge of the bin
    pub lower: f64,
    /// Upper edge of the bin
    pub upper: f64,
    /// Number of values that fell in the bin
    pub count: usize,
}

impl HistogramBin {
    /// Midpoint of the bin
    pub fn center(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }
}

/// A fixed-width histogram over a set of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    bin_width: f64,
}

impl Histogram {
    /// Bin values into `bin_count` uniform bins spanning `[min, max]`.
    ///
    /// The maximum value is counted in the last bin. Constant input gets
    /// a single unit-width bin centered on the value. Empty input gives
    /// an empty histogram rather than an error, so an empty demand
    /// series still renders as empty axes downstream.
    pub fn from_values(values: &[f64], bin_count: usize) -> Result<Self> {
        if bin_count == 0 {
            return Err(DashboardError::Data(
                "Histogram needs at least one bin".to_string(),
            ));
        }

        if values.is_empty() {
            return Ok(Self {
                bins: Vec::new(),
                bin_width: 0.0,
            });
        }

        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        if (max - min).abs() < f64::EPSILON {
            let bin = HistogramBin {
                lower: min - 0.5,
                upper: min + 0.5,
                count: values.len(),
            };
            return Ok(Self {
                bins: vec![bin],
                bin_width: 1.0,
            });
        }

        let bin_width = (max - min) / bin_count as f64;
        let mut counts = vec![0usize; bin_count];
        for &value in values {
            let idx = (((value - min) / bin_width) as usize).min(bin_count - 1);
            counts[idx] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                lower: min + i as f64 * bin_width,
                upper: min + (i + 1) as f64 * bin_width,
                count,
            })
            .collect();

        Ok(Self { bins, bin_width })
    }

    /// The bins, in ascending edge order
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Width shared by every bin
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Check whether the histogram has no bins
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Largest bin count
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Sum of all bin counts
    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Lower edge of the first bin and upper edge of the last
    pub fn span(&self) -> Option<(f64, f64)> {
        match (self.bins.first(), self.bins.last()) {
            (Some(first), Some(last)) => Some((first.lower, last.upper)),
            _ => None,
        }
    }

    /// Bin-center/count pairs for bar charting
    pub fn bar_points(&self) -> Vec<(f64, f64)> {
        self.bins
            .iter()
            .map(|bin| (bin.center(), bin.count as f64))
            .collect()
    }
}

/// Sample a Gaussian kernel-density estimate across a histogram's span.
///
/// Uses Silverman's rule-of-thumb bandwidth (`1.06 sigma n^(-1/5)`),
/// floored at 1.0 for degenerate input. The density is scaled by
/// `n * bin_width` so the curve overlays count-scaled bars, the way a
/// density overlay is drawn on top of a count histogram.
pub fn kde_overlay(
    values: &[f64],
    histogram: &Histogram,
    resolution: usize,
) -> Result<Vec<(f64, f64)>> {
    if values.is_empty() || histogram.is_empty() || resolution < 2 {
        return Ok(Vec::new());
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    let bandwidth = if std_dev > 0.0 {
        1.06 * std_dev * n.powf(-0.2)
    } else {
        1.0
    };

    let kernel = Normal::new(0.0, 1.0)
        .map_err(|e| DashboardError::Data(format!("Kernel setup failed: {}", e)))?;

    let (start, end) = histogram
        .span()
        .ok_or_else(|| DashboardError::Data("Histogram has no span".to_string()))?;
    let scale = n * histogram.bin_width();
    let step = (end - start) / (resolution - 1) as f64;

    let mut curve = Vec::with_capacity(resolution);
    for i in 0..resolution {
        let x = start + i as f64 * step;
        let density = values
            .iter()
            .map(|&xi| kernel.pdf((x - xi) / bandwidth))
            .sum::<f64>()
            / (n * bandwidth);
        curve.push((x, density * scale));
    }

    Ok(curve)
}
