//! Histogram binning for previewing classified distributions
//!
//! A histogram next to the class breaks shows how the data falls into each
//! class. Binning is independent of classification: [`compute_histogram`]
//! snaps bin edges to round numbers, the same way the pretty break method
//! does, and the width rules pick a bin count from the data.
//!
//! # Examples
//!
//! ```rust
//! use classbreaks_histogram::{compute_histogram, histogram_domain};
//!
//! let values: Vec<f64> = (0..=97).map(f64::from).collect();
//! let histogram = compute_histogram(&values, 30);
//!
//! assert_eq!(histogram.len(), 20);
//! assert_eq!(histogram.bins()[0].x1, 5.0);
//!
//! let domain = histogram_domain(&values);
//! assert_eq!((domain.min, domain.max, domain.mean), (0.0, 97.0, 48.5));
//! ```
//!
//! ## Width rules
//!
//! ```rust
//! use classbreaks_histogram::{FreedmanDiaconisRule, HistogramBuilder, ScottsRule};
//!
//! let data = vec![1.0, 2.0, 2.5, 3.0, 3.2, 3.5, 4.0, 4.4, 5.0, 9.0];
//! let scott = ScottsRule.build(&data).unwrap();
//! let fd = FreedmanDiaconisRule.build(&data).unwrap();
//!
//! println!("{scott}\n{fd}");
//! ```

pub mod builders;
pub mod traits;
pub mod types;

pub use builders::{FixedWidthBuilder, FreedmanDiaconisRule, NiceBinsBuilder, ScottsRule};
pub use traits::HistogramBuilder;
pub use types::{Domain, Histogram, HistogramBin};

use classbreaks_core::{RawValue, Sample};

/// Bin count used when none is given
pub const DEFAULT_BINS: usize = 30;

/// Histogram with round bin edges over the finite values
///
/// NaN and infinities are skipped. Returns the empty histogram when nothing
/// is left.
pub fn compute_histogram(values: &[f64], num_bins: usize) -> Histogram {
    let sample = Sample::new(values.iter().copied());
    NiceBinsBuilder::new(num_bins)
        .build_sorted(sample.sorted())
        .unwrap_or_default()
}

/// [`compute_histogram`] over raw cells, skipping missing and non-numeric ones
pub fn compute_histogram_raw(values: &[RawValue], num_bins: usize) -> Histogram {
    let sample = Sample::from_raw(values);
    NiceBinsBuilder::new(num_bins)
        .build_sorted(sample.sorted())
        .unwrap_or_default()
}

/// Minimum, maximum and mean of the finite values, all zero when there are none
pub fn histogram_domain(values: &[f64]) -> Domain {
    let sample = Sample::new(values.iter().copied());
    if sample.is_empty() {
        return Domain::default();
    }
    Domain {
        min: sample.min(),
        max: sample.max(),
        mean: sample.mean(),
    }
}

/// Create a histogram with a fixed number of equal-width bins
pub fn fixed_histogram(data: &[f64], num_bins: usize) -> classbreaks_core::Result<Histogram> {
    FixedWidthBuilder::new(num_bins).build(data)
}

/// Create a histogram using Scott's rule for bin width
pub fn scott_histogram(data: &[f64]) -> classbreaks_core::Result<Histogram> {
    ScottsRule.build(data)
}

/// Create a histogram using the Freedman-Diaconis rule for bin width
pub fn freedman_diaconis_histogram(data: &[f64]) -> classbreaks_core::Result<Histogram> {
    FreedmanDiaconisRule.build(data)
}
