//! Breaks on round numbers

use crate::traits::BreakMethod;
use classbreaks_core::{ticks::ticks, Method, Result, Sample};

/// Inner breaks snapped to multiples of 1, 2 or 5 times a power of ten
///
/// The step is chosen for roughly `nb` classes over the data range, so the
/// actual class count may differ by one or two. The first and last class are
/// partial: they run from the data extremes to the nearest round number.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pretty;

impl BreakMethod for Pretty {
    fn method(&self) -> Method {
        Method::Pretty
    }

    fn breaks(&self, sample: &Sample, nb: usize) -> Result<Vec<f64>> {
        let (min, max) = (sample.min(), sample.max());
        let mut breaks = vec![min];
        breaks.extend(ticks(min, max, nb.max(1)).into_iter().filter(|&t| t > min && t < max));
        breaks.push(max);
        Ok(breaks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_inner_breaks() {
        let sample = Sample::new((0..=97).map(f64::from));
        let breaks = Pretty.breaks(&sample, 5).unwrap();
        assert_eq!(breaks, vec![0.0, 20.0, 40.0, 60.0, 80.0, 97.0]);
    }

    #[test]
    fn test_partial_end_classes() {
        let sample = Sample::new(vec![3.2, 18.0, 26.5, 47.9]);
        let breaks = Pretty.breaks(&sample, 4).unwrap();
        assert_eq!(breaks, vec![3.2, 10.0, 20.0, 30.0, 40.0, 47.9]);
    }

    #[test]
    fn test_fractional_steps() {
        let sample = Sample::new(vec![0.013, 0.2, 0.48]);
        let breaks = Pretty.breaks(&sample, 5).unwrap();
        assert_eq!(breaks, vec![0.013, 0.1, 0.2, 0.3, 0.4, 0.48]);
    }

    #[test]
    fn test_huge_magnitudes_keep_only_extremes() {
        let base = 2f64.powi(60);
        let sample = Sample::new(vec![base, base + 256.0]);
        let breaks = Pretty.breaks(&sample, 5).unwrap();
        assert_eq!(breaks, vec![base, base + 256.0]);
    }
}
