//! Head/tail breaks for heavy-tailed distributions

use crate::traits::BreakMethod;
use classbreaks_core::{utils, Method, Result, Sample};
use tracing::debug;

/// Largest share of a subset the head may hold for splitting to continue
pub const DEFAULT_HEAD_LIMIT: f64 = 0.4;

/// Recursive split at the mean, following the head (values above the mean)
///
/// Splitting continues while the head is a minority of its subset (at most
/// `head_limit` of it) and holds more than one value. The requested class
/// count caps the depth, so the result has at most `nb` classes and usually
/// fewer.
#[derive(Debug, Clone, Copy)]
pub struct HeadTail {
    /// Head share above which the distribution no longer looks heavy-tailed
    pub head_limit: f64,
}

impl Default for HeadTail {
    fn default() -> Self {
        Self {
            head_limit: DEFAULT_HEAD_LIMIT,
        }
    }
}

impl BreakMethod for HeadTail {
    fn method(&self) -> Method {
        Method::HeadTail
    }

    fn breaks(&self, sample: &Sample, nb: usize) -> Result<Vec<f64>> {
        let nb = nb.max(1);
        let mut breaks = vec![sample.min()];
        let mut subset = sample.sorted();

        // breaks.len() is the class count once the maximum is appended
        while breaks.len() < nb && subset.len() > 1 {
            let mean = utils::mean(subset);
            breaks.push(mean);
            let head = &subset[subset.partition_point(|&x| x <= mean)..];
            let share = head.len() as f64 / subset.len() as f64;
            if head.len() <= 1 || share > self.head_limit {
                debug!(head = head.len(), share, "head/tail stopped");
                break;
            }
            subset = head;
        }
        breaks.push(sample.max());
        Ok(breaks)
    }
}
