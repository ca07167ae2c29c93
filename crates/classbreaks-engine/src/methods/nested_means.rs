//! Nested means classification

use crate::traits::BreakMethod;
use classbreaks_core::{utils, Method, Result, Sample};

/// Recursive bisection at the mean
///
/// Each level splits every group at its own mean into `x < mean` and
/// `x >= mean`, doubling the class count. `nb` should be a power of two; the
/// depth is `floor(log2(nb))`. Groups that are constant or hold a single
/// value are not split further.
#[derive(Debug, Clone, Copy, Default)]
pub struct NestedMeans;

impl BreakMethod for NestedMeans {
    fn method(&self) -> Method {
        Method::NestedMeans
    }

    fn breaks(&self, sample: &Sample, nb: usize) -> Result<Vec<f64>> {
        let depth = nb.max(1).ilog2();
        let mut breaks = vec![sample.min()];
        bisect(sample.sorted(), depth, &mut breaks);
        breaks.push(sample.max());
        breaks.sort_by(f64::total_cmp);
        Ok(breaks)
    }
}

fn bisect(sorted: &[f64], depth: u32, out: &mut Vec<f64>) {
    if depth == 0 || sorted.len() < 2 || sorted[0] == sorted[sorted.len() - 1] {
        return;
    }
    let mean = utils::mean(sorted);
    out.push(mean);
    let split = sorted.partition_point(|&x| x < mean);
    bisect(&sorted[..split], depth - 1, out);
    bisect(&sorted[split..], depth - 1, out);
}
