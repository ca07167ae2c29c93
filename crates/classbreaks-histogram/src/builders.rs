//! Various histogram building strategies

use crate::traits::HistogramBuilder;
use crate::types::{Histogram, HistogramBin};
use classbreaks_core::ticks::{tick_step, ticks};
use classbreaks_core::utils::{quantile_sorted, sorted, std_dev};
use classbreaks_core::{Error, Result};
use num_traits::ToPrimitive;

/// Upper bound on bins produced by the data-driven width rules
pub const MAX_RULE_BINS: usize = 10_000;

fn check_finite(sample: &[f64]) -> Result<()> {
    if sample.iter().all(|x| x.is_finite()) {
        Ok(())
    } else {
        Err(Error::non_finite("histogram sample"))
    }
}

/// Fixed-width histogram builder
///
/// Creates a histogram with a specified number of equal-width bins spanning
/// exactly the data range.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthBuilder {
    num_bins: usize,
}

impl FixedWidthBuilder {
    /// Create a new fixed-width histogram builder
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins: num_bins.max(1),
        }
    }
}

impl HistogramBuilder for FixedWidthBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        check_finite(sample)?;
        self.build_sorted(&sorted(sample))
    }

    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Histogram> {
        let (Some(&min), Some(&max)) = (sorted_sample.first(), sorted_sample.last()) else {
            return Ok(Histogram::empty());
        };
        let total = sorted_sample.len();

        if max == min {
            let bin = HistogramBin::new(min, max, total, total);
            return Ok(Histogram::new(vec![bin], total, min, max));
        }

        let width = (max - min) / self.num_bins as f64;
        let mut edges: Vec<f64> = (0..self.num_bins)
            .map(|i| min + i as f64 * width)
            .collect();
        edges.push(max);
        Ok(count_sorted(sorted_sample, &edges, min, max))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}

/// Bins aligned to round numbers
///
/// Picks a step of 1, 2 or 5 times a power of ten giving roughly `num_bins`
/// bins, then widens the domain outward to multiples of that step. When the
/// maximum lands exactly on the upper bound an extra bin is opened for it, so
/// every bin keeps the same width.
#[derive(Debug, Clone, Copy)]
pub struct NiceBinsBuilder {
    num_bins: usize,
}

impl NiceBinsBuilder {
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins: num_bins.max(1),
        }
    }
}

impl HistogramBuilder for NiceBinsBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        check_finite(sample)?;
        self.build_sorted(&sorted(sample))
    }

    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Histogram> {
        let (Some(&min), Some(&max)) = (sorted_sample.first(), sorted_sample.last()) else {
            return Ok(Histogram::empty());
        };
        let (lo, hi, thresholds) = nice_thresholds(min, max, self.num_bins);
        let mut edges = Vec::with_capacity(thresholds.len() + 2);
        edges.push(lo);
        edges.extend(thresholds);
        edges.push(hi);
        Ok(count_sorted(sorted_sample, &edges, min, max))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}

/// Widen `[min, max]` to multiples of the nice step, until the step settles
fn nice_domain(min: f64, max: f64, count: usize) -> (f64, f64) {
    let (mut lo, mut hi) = (min, max);
    let mut previous = None;
    for _ in 0..10 {
        let Some(step) = tick_step(lo, hi, count) else {
            break;
        };
        if previous == Some(step) {
            break;
        }
        lo = step.nth(step.floor_index(lo));
        hi = step.nth(step.ceil_index(hi));
        previous = Some(step);
    }
    // Rounding in the step arithmetic must not cut off the extremes
    (lo.min(min), hi.max(max))
}

fn nice_thresholds(min: f64, max: f64, count: usize) -> (f64, f64, Vec<f64>) {
    let (lo, mut hi) = nice_domain(min, max, count);
    let mut thresholds = ticks(lo, hi, count);
    if thresholds.last().is_some_and(|&t| t >= hi) {
        match tick_step(lo, hi, count) {
            Some(step) if max >= hi => hi = step.nth(step.floor_index(hi) + 1.0),
            _ => {
                thresholds.pop();
            }
        }
    }
    thresholds.retain(|&t| t > lo && t < hi);
    (lo, hi, thresholds)
}

/// Count sorted values into the bins delimited by `edges`
///
/// Bins are closed-open except the last, which is closed.
fn count_sorted(sorted_sample: &[f64], edges: &[f64], min: f64, max: f64) -> Histogram {
    let total = sorted_sample.len();
    let inner = &edges[1..edges.len() - 1];
    let mut counts = vec![0usize; edges.len() - 1];
    for &value in sorted_sample {
        let index = inner.partition_point(|&t| t <= value);
        counts[index] += 1;
    }
    let bins = edges
        .windows(2)
        .zip(counts)
        .map(|(edge, count)| HistogramBin::new(edge[0], edge[1], count, total))
        .collect();
    Histogram::new(bins, total, min, max)
}

fn bins_for_width(range: f64, bin_width: f64) -> usize {
    if bin_width > 1e-10 {
        (range / bin_width)
            .ceil()
            .to_usize()
            .unwrap_or(1)
            .clamp(1, MAX_RULE_BINS)
    } else {
        1
    }
}

/// Scott's rule for optimal bin width
///
/// Uses the formula: h = 3.5 * σ * n^(-1/3)
/// where σ is the sample standard deviation and n is the sample size.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScottsRule;

impl HistogramBuilder for ScottsRule {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        check_finite(sample)?;
        self.build_sorted(&sorted(sample))
    }

    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Histogram> {
        let (Some(&min), Some(&max)) = (sorted_sample.first(), sorted_sample.last()) else {
            return Ok(Histogram::empty());
        };
        let n = sorted_sample.len() as f64;
        let bin_width = 3.5 * std_dev(sorted_sample) * n.powf(-1.0 / 3.0);
        FixedWidthBuilder::new(bins_for_width(max - min, bin_width)).build_sorted(sorted_sample)
    }
}

/// Freedman-Diaconis rule for optimal bin width
///
/// Uses the formula: h = 2 * IQR * n^(-1/3)
/// where IQR is the interquartile range.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreedmanDiaconisRule;

impl HistogramBuilder for FreedmanDiaconisRule {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        check_finite(sample)?;
        self.build_sorted(&sorted(sample))
    }

    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Histogram> {
        let (Some(&min), Some(&max)) = (sorted_sample.first(), sorted_sample.last()) else {
            return Ok(Histogram::empty());
        };
        let q1 = quantile_sorted(sorted_sample, 0.25).unwrap_or(min);
        let q3 = quantile_sorted(sorted_sample, 0.75).unwrap_or(max);
        let n = sorted_sample.len() as f64;
        let bin_width = 2.0 * (q3 - q1) * n.powf(-1.0 / 3.0);
        FixedWidthBuilder::new(bins_for_width(max - min, bin_width)).build_sorted(sorted_sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_spans_data() {
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        let hist = FixedWidthBuilder::new(3).build(&data).unwrap();
        assert_eq!(hist.len(), 3);
        assert_eq!(hist.edges(), vec![1.0, 4.0, 7.0, 10.0]);
        assert_eq!(hist.counts(), vec![3, 3, 4]);
    }

    #[test]
    fn test_nice_bins_round_edges() {
        let data: Vec<f64> = (0..=97).map(f64::from).collect();
        let hist = NiceBinsBuilder::new(30).build(&data).unwrap();
        assert_eq!(hist.len(), 20);
        assert_eq!(hist.bins()[0].x0, 0.0);
        assert_eq!(hist.bins()[0].x1, 5.0);
        assert_eq!(hist.bins()[19].x1, 100.0);
        assert_eq!(hist.bins()[19].count, 3);
        assert_eq!(hist.counts().iter().sum::<usize>(), 98);
    }

    #[test]
    fn test_nice_bins_extend_past_round_maximum() {
        let data: Vec<f64> = (0..=100).map(f64::from).collect();
        let hist = NiceBinsBuilder::new(30).build(&data).unwrap();
        assert_eq!(hist.len(), 21);
        let last = &hist.bins()[20];
        assert_eq!((last.x0, last.x1, last.count), (100.0, 105.0, 1));
    }

    #[test]
    fn test_nice_bins_widen_domain() {
        let data = [3.2, 4.1, 17.5, 18.9];
        let hist = NiceBinsBuilder::new(4).build(&data).unwrap();
        assert_eq!(hist.edges(), vec![0.0, 5.0, 10.0, 15.0, 20.0]);
        assert_eq!(hist.counts(), vec![2, 0, 0, 2]);
        assert_eq!(hist.min(), 3.2);
        assert_eq!(hist.max(), 18.9);
    }

    #[test]
    fn test_constant_sample_is_one_bin() {
        for hist in [
            NiceBinsBuilder::new(10).build(&[4.0, 4.0]).unwrap(),
            FixedWidthBuilder::new(10).build(&[4.0, 4.0]).unwrap(),
            ScottsRule.build(&[4.0, 4.0]).unwrap(),
        ] {
            assert_eq!(hist.len(), 1);
            assert_eq!(hist.bins()[0].count, 2);
        }
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(FixedWidthBuilder::new(3).build(&[1.0, f64::NAN]).is_err());
        assert!(NiceBinsBuilder::new(3).build(&[f64::INFINITY]).is_err());
    }

    #[test]
    fn test_empty_sample() {
        assert!(FreedmanDiaconisRule.build(&[]).unwrap().is_empty());
        assert!(NiceBinsBuilder::new(5).build(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_width_rules_pick_several_bins() {
        let data: Vec<f64> = (0..200).map(|i| f64::from(i) * 0.5).collect();
        let scott = ScottsRule.build(&data).unwrap();
        let fd = FreedmanDiaconisRule.build(&data).unwrap();
        assert!(scott.len() > 1 && scott.len() < 200);
        assert!(fd.len() > 1 && fd.len() < 200);
        assert_eq!(scott.total_count(), 200);
        assert_eq!(fd.counts().iter().sum::<usize>(), 200);
    }

    #[test]
    fn test_target_bins() {
        assert_eq!(NiceBinsBuilder::new(0).target_bins(), Some(1));
        assert_eq!(FixedWidthBuilder::new(12).target_bins(), Some(12));
        assert_eq!(ScottsRule.target_bins(), None);
    }
}
