//! Utility functions for working with data slices

use ordered_float::OrderedFloat;
use statrs::statistics::Statistics;
use std::collections::BTreeSet;

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use classbreaks_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| match (a.is_nan(), b.is_nan()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => a.total_cmp(b),
    });
    sorted
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use classbreaks_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    // Exact for small integer samples
    data.iter().sum::<f64>() / data.len() as f64
}

/// Calculate the sample standard deviation (n - 1 denominator)
///
/// Returns 0.0 for slices with less than 2 elements.
pub fn std_dev(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    data.iter().std_dev()
}

/// Quantile of sorted data using linear interpolation between order statistics
///
/// This is the R-7 / Hyndman-Fan type 7 rule: position `h = (n - 1) * p`,
/// interpolating between `x[floor(h)]` and `x[floor(h) + 1]`. `p` is clamped
/// into `[0, 1]`. Returns `None` for empty input.
///
/// # Examples
///
/// ```rust
/// use classbreaks_core::utils::quantile_sorted;
///
/// let data: Vec<f64> = (1..=10).map(f64::from).collect();
/// assert_eq!(quantile_sorted(&data, 0.25), Some(3.25));
/// ```
pub fn quantile_sorted(sorted_data: &[f64], p: f64) -> Option<f64> {
    let n = sorted_data.len();
    if n == 0 {
        return None;
    }
    if n == 1 {
        return Some(sorted_data[0]);
    }
    let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    if lo + 1 >= n {
        return Some(sorted_data[n - 1]);
    }
    let lower = sorted_data[lo];
    let upper = sorted_data[lo + 1];
    Some(lower + (h - lo as f64) * (upper - lower))
}

/// Round to a number of decimal places
///
/// Values that would overflow the scaling factor are returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(15) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Number of distinct values in a slice
pub fn count_distinct(data: &[f64]) -> usize {
    data.iter()
        .map(|&x| OrderedFloat(x))
        .collect::<BTreeSet<_>>()
        .len()
}
