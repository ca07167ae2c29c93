//! Bins, histograms and the sample domain

use serde::{Deserialize, Serialize};
use std::fmt;

/// One bar of a preview histogram
///
/// Covers `[x0, x1)`; the last bar of a [`Histogram`] also holds `x1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub x0: f64,
    pub x1: f64,
    pub count: usize,
    /// `count / (n * width)`, so bar areas sum to one
    pub density: f64,
}

impl HistogramBin {
    /// Bin over `[x0, x1)` holding `count` of `n` values
    pub fn new(x0: f64, x1: f64, count: usize, n: usize) -> Self {
        let width = x1 - x0;
        let density = if width > 0.0 && n > 0 {
            count as f64 / (n as f64 * width)
        } else {
            0.0
        };
        Self {
            x0,
            x1,
            count,
            density,
        }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Share of `n` values that fell in this bin
    pub fn share(&self, n: usize) -> f64 {
        match n {
            0 => 0.0,
            n => self.count as f64 / n as f64,
        }
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{} x{}", self.x0, self.x1, self.count)
    }
}

/// Contiguous bins over a cleaned sample
///
/// `min` and `max` are the sample extremes, which may sit inside the outer
/// bins when the edges were rounded outward.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    total_count: usize,
    min: f64,
    max: f64,
}

impl Histogram {
    pub fn new(bins: Vec<HistogramBin>, total_count: usize, min: f64, max: f64) -> Self {
        Self {
            bins,
            total_count,
            min,
            max,
        }
    }

    /// No bins, no values
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Number of values binned
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Height of the tallest bar, for scaling a chart axis
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Index of the bin holding `value`, `None` outside the binned span
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        let first = self.bins.first()?;
        let last = self.bins.last()?;
        if !(value >= first.x0 && value <= last.x1) {
            return None;
        }
        let index = self.bins.partition_point(|bin| bin.x1 <= value);
        Some(index.min(self.bins.len() - 1))
    }

    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Per-bin share of the values, summing to one
    pub fn frequencies(&self) -> Vec<f64> {
        self.bins
            .iter()
            .map(|bin| bin.share(self.total_count))
            .collect()
    }

    /// All bin edges, `len() + 1` of them
    pub fn edges(&self) -> Vec<f64> {
        let mut edges: Vec<f64> = self.bins.iter().map(|bin| bin.x0).collect();
        edges.extend(self.bins.last().map(|bin| bin.x1));
        edges
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} values in {} bins", self.total_count, self.len())?;
        for bin in &self.bins {
            writeln!(f, "  {bin}")?;
        }
        Ok(())
    }
}

/// Extent and mean of a sample, for axis setup next to a histogram
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}
