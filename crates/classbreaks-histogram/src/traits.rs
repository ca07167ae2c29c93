//! The binning strategy seam

use crate::types::Histogram;
use classbreaks_core::Result;

/// A rule for choosing bin edges and counting values into them
///
/// Implementations reject NaN and infinite input; callers holding a cleaned
/// [`Sample`](classbreaks_core::Sample) can pass its sorted values to
/// [`build_sorted`](Self::build_sorted) directly.
pub trait HistogramBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram>;

    /// Same as [`build`](Self::build) for input already in ascending order
    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Histogram> {
        self.build(sorted_sample)
    }

    /// Requested bin count, for rules that take one
    fn target_bins(&self) -> Option<usize> {
        None
    }
}
