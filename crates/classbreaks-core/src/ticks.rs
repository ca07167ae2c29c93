//! "Nice" tick steps: multiples of 1, 2 or 5 times a power of ten
//!
//! Shared by the pretty break method and histogram binning so both snap to
//! the same round numbers.

use std::f64::consts::SQRT_2;
use tracing::debug;

/// sqrt(50): above this relative error the step rounds up to 10
const E10: f64 = 7.0710678118654755;
/// sqrt(10): above this relative error the step rounds up to 5
const E5: f64 = 3.1622776601683795;
/// sqrt(2): above this relative error the step rounds up to 2
const E2: f64 = SQRT_2;

/// 2^53: past this, consecutive step indices are no longer distinct floats
const MAX_EXACT_INDEX: f64 = 9_007_199_254_740_992.0;

/// Most ticks one call hands out
pub const MAX_TICKS: usize = 1 << 20;

/// A nice step expressed so tick values can be generated without drift
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickStep {
    /// Step of `n` (integers and larger)
    Multiply(f64),
    /// Step of `1 / n`, used for steps below one
    Divide(f64),
}

impl TickStep {
    /// The step as a plain number
    pub fn value(&self) -> f64 {
        match *self {
            Self::Multiply(n) => n,
            Self::Divide(n) => 1.0 / n,
        }
    }

    /// The `i`th multiple of the step
    pub fn nth(&self, i: f64) -> f64 {
        match *self {
            Self::Multiply(n) => i * n,
            Self::Divide(n) => i / n,
        }
    }

    /// Index of the largest multiple not above `x`
    pub fn floor_index(&self, x: f64) -> f64 {
        match *self {
            Self::Multiply(n) => (x / n).floor(),
            Self::Divide(n) => (x * n).floor(),
        }
    }

    /// Index of the smallest multiple not below `x`
    pub fn ceil_index(&self, x: f64) -> f64 {
        match *self {
            Self::Multiply(n) => (x / n).ceil(),
            Self::Divide(n) => (x * n).ceil(),
        }
    }
}

/// Nice step for roughly `count` intervals over `[start, stop]`
///
/// Returns `None` when the span is empty, reversed or not finite.
pub fn tick_step(start: f64, stop: f64, count: usize) -> Option<TickStep> {
    let raw = (stop - start) / count.max(1) as f64;
    if !(raw.is_finite() && raw > 0.0) {
        return None;
    }
    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        Some(TickStep::Multiply(10f64.powf(power) * factor))
    } else {
        Some(TickStep::Divide(10f64.powf(-power) / factor))
    }
}

/// Multiples of the nice step lying within `[start, stop]`, ascending
///
/// Empty when the step indices of the span are too large to count exactly
/// (beyond 2^53) or there would be more than [`MAX_TICKS`] of them.
///
/// # Examples
///
/// ```rust
/// use classbreaks_core::ticks::ticks;
///
/// assert_eq!(ticks(0.0, 97.0, 5), vec![0.0, 20.0, 40.0, 60.0, 80.0]);
/// assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
/// ```
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let Some(step) = tick_step(start, stop, count) else {
        return Vec::new();
    };
    let first = step.ceil_index(start);
    let last = step.floor_index(stop);
    if !(first.is_finite() && last.is_finite()) || last < first {
        return Vec::new();
    }
    if first.abs() > MAX_EXACT_INDEX || last.abs() > MAX_EXACT_INDEX {
        debug!(start, stop, step = step.value(), "tick indices exceed 2^53");
        return Vec::new();
    }
    let n = (last - first) as usize;
    if n >= MAX_TICKS {
        debug!(start, stop, ticks = n + 1, "too many ticks");
        return Vec::new();
    }
    (0..=n).map(|j| step.nth(first + j as f64)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_step_factors() {
        assert_eq!(tick_step(0.0, 10.0, 10), Some(TickStep::Multiply(1.0)));
        assert_eq!(tick_step(0.0, 97.0, 5), Some(TickStep::Multiply(20.0)));
        assert_eq!(tick_step(0.0, 100.0, 3), Some(TickStep::Multiply(50.0)));
        assert_eq!(tick_step(0.0, 700.0, 1), Some(TickStep::Multiply(500.0)));
        assert_eq!(tick_step(0.0, 1.0, 10), Some(TickStep::Divide(10.0)));
        assert_eq!(tick_step(0.0, 1.0, 4), Some(TickStep::Divide(5.0)));
        assert_eq!(tick_step(1.0, 1.0, 5), None);
        assert_eq!(tick_step(2.0, 1.0, 5), None);
    }

    #[test]
    fn test_ticks_avoid_float_drift() {
        assert_eq!(ticks(0.0, 1.0, 10)[3], 0.3);
        assert_eq!(ticks(-0.5, 0.5, 5), vec![-0.4, -0.2, 0.0, 0.2, 0.4]);
    }

    #[test]
    fn test_ticks_inside_span() {
        assert_eq!(ticks(3.0, 47.0, 4), vec![10.0, 20.0, 30.0, 40.0]);
        assert!(ticks(5.0, 5.0, 5).is_empty());
    }

    #[test]
    fn test_ticks_past_exact_indices_are_empty() {
        let start = 2f64.powi(60);
        assert!(ticks(start, start + 256.0, 5).is_empty());
        assert!(ticks(-start - 256.0, -start, 5).is_empty());
        // Large magnitudes with a step to match still tick
        let coarse = ticks(0.0, start, 2);
        assert_eq!(coarse.len(), 3);
        assert_eq!(coarse[0], 0.0);
    }

    #[test]
    fn test_tick_count_is_bounded() {
        assert!(ticks(0.0, 1e7, 1 << 21).is_empty());
        assert_eq!(ticks(0.0, 1000.0, 1000).len(), 1001);
    }

    proptest::proptest! {
        #[test]
        fn prop_ticks_ascending_within_span(
            start in -1e6f64..1e6,
            span in 1e-3f64..1e6,
            count in 1usize..20,
        ) {
            let stop = start + span;
            let out = ticks(start, stop, count);
            proptest::prop_assert!(out.windows(2).all(|w| w[0] < w[1]));
            let slack = span * 1e-9;
            for t in &out {
                proptest::prop_assert!(*t >= start - slack && *t <= stop + slack);
            }
        }
    }
}
