//! The seam every break method plugs into

use classbreaks_core::{Method, Result, Sample};

/// A class break algorithm
///
/// Implementations receive a non-empty sample whose values are not all equal,
/// and return candidate breakpoints in any order. The engine clips them to the
/// sample range, drops duplicates and non-finite values, and pins the
/// endpoints to the sample minimum and maximum, so an implementation only has
/// to get the interior right.
pub trait BreakMethod {
    /// The method identifier this implementation computes
    fn method(&self) -> Method;

    /// Compute candidate breakpoints for `nb` requested classes
    fn breaks(&self, sample: &Sample, nb: usize) -> Result<Vec<f64>>;
}
