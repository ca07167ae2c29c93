//! Jenks natural breaks
//!
//! Fisher's exact optimization: among all ways of cutting the sorted sample
//! into `k` contiguous classes, pick the one with the smallest total
//! within-class sum of squared deviations. Solved by dynamic programming over
//! prefix sums in O(k n^2) time. Only the split table is kept per class; the
//! costs roll over a single row.

use crate::traits::BreakMethod;
use classbreaks_core::{utils, Method, Result, Sample};
use tracing::debug;

/// Most classes Jenks will optimize for
pub const MAX_JENKS_CLASSES: usize = 64;

/// Variance-minimizing optimal partition
#[derive(Debug, Clone, Copy, Default)]
pub struct Jenks;

impl BreakMethod for Jenks {
    fn method(&self) -> Method {
        Method::Jenks
    }

    fn breaks(&self, sample: &Sample, nb: usize) -> Result<Vec<f64>> {
        let sorted = sample.sorted();
        let distinct = utils::count_distinct(sorted);
        let mut classes = nb.clamp(1, distinct.max(1));
        if classes < nb {
            debug!(requested = nb, classes, "fewer distinct values than classes");
        }
        if classes > MAX_JENKS_CLASSES {
            debug!(requested = nb, classes = MAX_JENKS_CLASSES, "jenks class count capped");
            classes = MAX_JENKS_CLASSES;
        }

        let starts = class_starts(sorted, classes);
        let mut breaks = Vec::with_capacity(starts.len() + 2);
        breaks.push(sample.min());
        // Midpoint between the last value of one class and the first of the next
        breaks.extend(starts.iter().map(|&s| (sorted[s - 1] + sorted[s]) / 2.0));
        breaks.push(sample.max());
        Ok(breaks)
    }
}

/// Prefix sums of centred values and their squares
struct SumTable {
    sums: Vec<f64>,
    squares: Vec<f64>,
}

impl SumTable {
    fn new(sorted: &[f64]) -> Self {
        // Centring keeps the sum-of-squares subtraction well conditioned
        let shift = utils::mean(sorted);
        let mut sums = Vec::with_capacity(sorted.len() + 1);
        let mut squares = Vec::with_capacity(sorted.len() + 1);
        sums.push(0.0);
        squares.push(0.0);
        let (mut s1, mut s2) = (0.0, 0.0);
        for &x in sorted {
            let c = x - shift;
            s1 += c;
            s2 += c * c;
            sums.push(s1);
            squares.push(s2);
        }
        Self { sums, squares }
    }

    /// Sum of squared deviations of `sorted[from..to]`
    fn cost(&self, from: usize, to: usize) -> f64 {
        let count = (to - from) as f64;
        let s1 = self.sums[to] - self.sums[from];
        let s2 = self.squares[to] - self.squares[from];
        (s2 - s1 * s1 / count).max(0.0)
    }
}

/// Start index of every class after the first, ascending
///
/// Ties between equally good cuts keep the first (smallest) index found.
pub(crate) fn class_starts(sorted: &[f64], classes: usize) -> Vec<usize> {
    let n = sorted.len();
    if classes < 2 || n < 2 {
        return Vec::new();
    }
    let classes = classes.min(n);
    let table = SumTable::new(sorted);

    // previous[j]: lowest cost of cutting sorted[..j] into c classes
    let mut previous = vec![f64::INFINITY; n + 1];
    let mut current = vec![f64::INFINITY; n + 1];
    let mut split = vec![vec![0usize; n + 1]; classes];
    for j in 1..=n {
        previous[j] = table.cost(0, j);
    }
    for c in 1..classes {
        current.fill(f64::INFINITY);
        for j in (c + 1)..=n {
            let mut lowest = f64::INFINITY;
            let mut at = c;
            for i in c..j {
                let candidate = previous[i] + table.cost(i, j);
                if candidate < lowest {
                    lowest = candidate;
                    at = i;
                }
            }
            current[j] = lowest;
            split[c][j] = at;
        }
        std::mem::swap(&mut previous, &mut current);
    }

    let mut starts = Vec::with_capacity(classes - 1);
    let mut end = n;
    for c in (1..classes).rev() {
        let start = split[c][end];
        starts.push(start);
        end = start;
    }
    starts.reverse();
    starts
}
