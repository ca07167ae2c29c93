//! Equal-interval classification

use crate::traits::BreakMethod;
use classbreaks_core::{Method, Result, Sample};

/// Classes of identical width, regardless of how the data is distributed
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualInterval;

impl BreakMethod for EqualInterval {
    fn method(&self) -> Method {
        Method::Equal
    }

    fn breaks(&self, sample: &Sample, nb: usize) -> Result<Vec<f64>> {
        let nb = nb.max(1);
        let (min, max) = (sample.min(), sample.max());
        let width = (max - min) / nb as f64;
        let mut breaks: Vec<f64> = (0..nb).map(|i| min + i as f64 * width).collect();
        breaks.push(max);
        Ok(breaks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tens_into_fifths() {
        let sample = Sample::new((0..=10).map(|i| f64::from(i) * 10.0));
        let breaks = EqualInterval.breaks(&sample, 5).unwrap();
        assert_eq!(breaks, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn test_ignores_distribution_shape() {
        let sample = Sample::new(vec![0.0, 0.1, 0.2, 0.3, 9.0]);
        let breaks = EqualInterval.breaks(&sample, 3).unwrap();
        assert_eq!(breaks, vec![0.0, 3.0, 6.0, 9.0]);
    }
}
