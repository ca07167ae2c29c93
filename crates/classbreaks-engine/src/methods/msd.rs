//! Mean and standard deviation bands

use crate::request::DEFAULT_BAND_WIDTH;
use crate::traits::BreakMethod;
use classbreaks_core::{Method, Result, Sample};
use tracing::debug;

/// Bands generated on each side of the mean, at most
const MAX_BANDS_PER_SIDE: usize = 1024;

/// Fixed-width bands of `k` standard deviations around the mean
///
/// The class count follows from the data spread, not from the request.
#[derive(Debug, Clone, Copy)]
pub struct MeanStdDev {
    /// Band width in standard deviations
    pub k: f64,
    /// Make the mean the centre of a class instead of a break
    pub middle: bool,
}

impl Default for MeanStdDev {
    fn default() -> Self {
        Self {
            k: DEFAULT_BAND_WIDTH,
            middle: false,
        }
    }
}

impl BreakMethod for MeanStdDev {
    fn method(&self) -> Method {
        Method::Msd
    }

    fn breaks(&self, sample: &Sample, _nb: usize) -> Result<Vec<f64>> {
        let (min, max, mean) = (sample.min(), sample.max(), sample.mean());
        let band = self.k * sample.std_dev();
        if !(band.is_finite() && band > 0.0) {
            debug!(band, "no spread to band, single class");
            return Ok(vec![min, max]);
        }

        // Distance from the mean to the first break on either side
        let first = if self.middle { band / 2.0 } else { band };
        let mut breaks = vec![min];
        if !self.middle {
            breaks.push(mean);
        }
        let offset = |i: usize| first + i as f64 * band;
        let upper = (0..MAX_BANDS_PER_SIDE)
            .map(|i| mean + offset(i))
            .take_while(|&value| value < max);
        let lower = (0..MAX_BANDS_PER_SIDE)
            .map(|i| mean - offset(i))
            .take_while(|&value| value > min);
        breaks.extend(upper.chain(lower));
        let wanted = ((max - mean).max(mean - min) - first) / band;
        if wanted >= MAX_BANDS_PER_SIDE as f64 {
            debug!(band, wanted, cap = MAX_BANDS_PER_SIDE, "band count capped, outer classes widened");
        }
        breaks.push(max);
        Ok(breaks)
    }
}
