//! Arithmetic progression of class widths

use crate::traits::BreakMethod;
use classbreaks_core::{Method, Result, Sample};

/// Class widths `w, 2w, 3w, ...` growing away from an anchor
///
/// Anchored at the minimum by default, so narrow classes resolve the low end
/// of the data. With `middle` set the progression grows outward from the
/// mean on both sides: for an odd class count a centre class of width `w`
/// straddles the mean, for an even count the mean is itself a break. `w` is
/// chosen so `nb / 2` outward classes exactly reach the farther extreme; the
/// nearer side is cut off at its extreme.
#[derive(Debug, Clone, Copy, Default)]
pub struct Arithmetic {
    /// Centre the progression on the mean
    pub middle: bool,
}

impl BreakMethod for Arithmetic {
    fn method(&self) -> Method {
        Method::Arithmetic
    }

    fn breaks(&self, sample: &Sample, nb: usize) -> Result<Vec<f64>> {
        let nb = nb.max(1);
        if self.middle {
            Ok(centred(sample, nb))
        } else {
            Ok(anchored(sample.min(), sample.max(), nb))
        }
    }
}

fn anchored(min: f64, max: f64, nb: usize) -> Vec<f64> {
    let units = (nb * (nb + 1)) as f64 / 2.0;
    let width = (max - min) / units;
    let mut breaks = Vec::with_capacity(nb + 1);
    let mut edge = min;
    breaks.push(edge);
    for i in 1..nb {
        edge += i as f64 * width;
        breaks.push(edge);
    }
    breaks.push(max);
    breaks
}

fn centred(sample: &Sample, nb: usize) -> Vec<f64> {
    let (min, max, mean) = (sample.min(), sample.max(), sample.mean());
    let outward = nb / 2;
    let odd = nb % 2 == 1;
    let reach = (mean - min).max(max - mean);

    // Half-span covered by the outward classes, in units of w
    let units = if odd {
        0.5 + ((outward + 1) * (outward + 2)) as f64 / 2.0 - 1.0
    } else {
        (outward * (outward + 1)) as f64 / 2.0
    };
    let width = reach / units;

    let mut offsets = Vec::with_capacity(outward + 1);
    let mut offset = if odd { width / 2.0 } else { 0.0 };
    offsets.push(offset);
    for j in 1..=outward {
        let grow = if odd { j + 1 } else { j };
        offset += grow as f64 * width;
        offsets.push(offset);
    }

    let mut breaks = vec![min];
    for offset in offsets {
        breaks.push(mean - offset);
        breaks.push(mean + offset);
    }
    breaks.push(max);
    breaks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths_grow_by_one_unit() {
        let sample = Sample::new(vec![0.0, 5.0, 60.0]);
        let breaks = Arithmetic::default().breaks(&sample, 3).unwrap();
        assert_eq!(breaks, vec![0.0, 10.0, 30.0, 60.0]);
    }

    #[test]
    fn test_four_classes() {
        let sample = Sample::new(vec![0.0, 100.0]);
        let breaks = Arithmetic::default().breaks(&sample, 4).unwrap();
        assert_eq!(breaks, vec![0.0, 10.0, 30.0, 60.0, 100.0]);
    }

    #[test]
    fn test_centred_even() {
        // mean 50, reach 50, two outward classes per side: w + 2w = 50
        let sample = Sample::new(vec![0.0, 50.0, 100.0]);
        let mut breaks = Arithmetic { middle: true }.breaks(&sample, 4).unwrap();
        breaks.sort_by(f64::total_cmp);
        breaks.dedup();
        let expected = [0.0, 100.0 / 3.0, 50.0, 200.0 / 3.0, 100.0];
        assert_eq!(breaks.len(), expected.len());
        for (b, e) in breaks.iter().zip(expected) {
            assert!((b - e).abs() < 1e-9, "{breaks:?}");
        }
    }

    #[test]
    fn test_centred_odd() {
        // Centre class of width w, then 2w: w/2 + 2w = 50 so w = 20
        let sample = Sample::new(vec![0.0, 50.0, 100.0]);
        let mut breaks = Arithmetic { middle: true }.breaks(&sample, 3).unwrap();
        breaks.sort_by(f64::total_cmp);
        breaks.dedup();
        assert_eq!(breaks, vec![0.0, 40.0, 60.0, 100.0]);
    }
}
