//! Geometric progression classification

use crate::traits::BreakMethod;
use classbreaks_core::{Error, Method, Result, Sample};

/// Breaks where each one is a constant multiple of the previous
///
/// Suited to strictly positive, right-skewed data. A sample with a zero or
/// negative minimum has no geometric progression and is rejected with
/// [`Error::DegenerateDomain`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Geometric;

impl BreakMethod for Geometric {
    fn method(&self) -> Method {
        Method::Geometric
    }

    fn breaks(&self, sample: &Sample, nb: usize) -> Result<Vec<f64>> {
        let nb = nb.max(1);
        let (min, max) = (sample.min(), sample.max());
        if min <= 0.0 {
            return Err(Error::degenerate(
                Method::Geometric,
                format!("minimum {min} is not strictly positive"),
            ));
        }
        // ln-space step avoids overflow of max / min for extreme ranges
        let step = (max.ln() - min.ln()) / nb as f64;
        let mut breaks: Vec<f64> = (0..nb)
            .map(|i| (min.ln() + i as f64 * step).exp())
            .collect();
        breaks.push(max);
        Ok(breaks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_powers_of_ten() {
        let sample = Sample::new(vec![1.0, 5.0, 50.0, 1000.0]);
        let breaks = Geometric.breaks(&sample, 3).unwrap();
        assert_eq!(breaks.len(), 4);
        assert_relative_eq!(breaks[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(breaks[1], 10.0, epsilon = 1e-9);
        assert_relative_eq!(breaks[2], 100.0, epsilon = 1e-9);
        assert_eq!(breaks[3], 1000.0);
    }

    #[test]
    fn test_constant_ratio() {
        let sample = Sample::new(vec![2.0, 3.0, 40.0, 162.0]);
        let breaks = Geometric.breaks(&sample, 4).unwrap();
        for pair in breaks.windows(3) {
            assert_relative_eq!(pair[1] / pair[0], pair[2] / pair[1], epsilon = 1e-9);
        }
    }

    #[test]
    fn test_non_positive_minimum_is_degenerate() {
        for data in [vec![0.0, 1.0, 10.0], vec![-5.0, 2.0, 10.0]] {
            let sample = Sample::new(data);
            assert!(matches!(
                Geometric.breaks(&sample, 3),
                Err(Error::DegenerateDomain { method: Method::Geometric, .. })
            ));
        }
    }
}
