//! Quantile and Q6 classification

use crate::traits::BreakMethod;
use classbreaks_core::{utils::quantile_sorted, Error, Method, Result, Sample};

/// Probabilities of the Q6 scheme: the extreme 5% on each side get a class
pub const Q6_PROBABILITIES: [f64; 7] = [0.0, 0.05, 0.25, 0.5, 0.75, 0.95, 1.0];

/// Equal-count classes
///
/// Break `i` sits at the `i / nb` quantile of the sample, interpolated
/// linearly between order statistics.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quantile;

impl BreakMethod for Quantile {
    fn method(&self) -> Method {
        Method::Quantile
    }

    fn breaks(&self, sample: &Sample, nb: usize) -> Result<Vec<f64>> {
        let nb = nb.max(1);
        let probabilities: Vec<f64> = (0..=nb).map(|i| i as f64 / nb as f64).collect();
        quantile_breaks(sample.sorted(), &probabilities)
    }
}

/// Fixed six-class quantile scheme; the requested class count is ignored
#[derive(Debug, Clone, Copy, Default)]
pub struct Q6;

impl BreakMethod for Q6 {
    fn method(&self) -> Method {
        Method::Q6
    }

    fn breaks(&self, sample: &Sample, _nb: usize) -> Result<Vec<f64>> {
        quantile_breaks(sample.sorted(), &Q6_PROBABILITIES)
    }
}

fn quantile_breaks(sorted: &[f64], probabilities: &[f64]) -> Result<Vec<f64>> {
    probabilities
        .iter()
        .map(|&p| quantile_sorted(sorted, p).ok_or(Error::EmptyInput))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quartiles_of_one_to_ten() {
        let sample = Sample::new((1..=10).map(f64::from));
        let breaks = Quantile.breaks(&sample, 4).unwrap();
        assert_eq!(breaks, vec![1.0, 3.25, 5.5, 7.75, 10.0]);
    }

    #[test]
    fn test_quantile_ignores_input_order() {
        let sample = Sample::new(vec![10.0, 1.0, 7.0, 3.0, 5.0]);
        let breaks = Quantile.breaks(&sample, 2).unwrap();
        assert_eq!(breaks, vec![1.0, 5.0, 10.0]);
    }

    #[test]
    fn test_q6_fixed_probabilities() {
        let sample = Sample::new((0..=100).map(f64::from));
        let breaks = Q6.breaks(&sample, 3).unwrap();
        assert_eq!(breaks, vec![0.0, 5.0, 25.0, 50.0, 75.0, 95.0, 100.0]);
    }

    #[test]
    fn test_empty_sample_is_an_error() {
        let sample = Sample::new(Vec::new());
        assert_eq!(Quantile.breaks(&sample, 3), Err(Error::EmptyInput));
    }
}
