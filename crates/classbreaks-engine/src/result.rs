//! Classification outcomes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Breakpoints and the thresholds derived from them
///
/// `breaks` holds `n_classes + 1` non-decreasing values from the sample
/// minimum to its maximum. Classes are closed-open, except the last one,
/// which also contains the maximum.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// All breakpoints, endpoints included
    pub breaks: Vec<f64>,
    /// Breakpoints without the first and last element
    pub inner_breaks: Vec<f64>,
    /// `breaks.len() - 1`, or 0 for the empty result
    pub n_classes: usize,
}

impl ClassificationResult {
    /// Build a result from full breakpoints
    pub fn from_breaks(breaks: Vec<f64>) -> Self {
        if breaks.len() < 2 {
            return Self::empty();
        }
        let inner_breaks = breaks[1..breaks.len() - 1].to_vec();
        let n_classes = breaks.len() - 1;
        Self {
            breaks,
            inner_breaks,
            n_classes,
        }
    }

    /// The "classification unavailable" result
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether no classification is available
    pub fn is_empty(&self) -> bool {
        self.breaks.is_empty()
    }

    /// Index of the class containing `value`
    ///
    /// Values below the first inner break fall in class 0 and values at or
    /// above the last inner break in the last class, so out-of-range values
    /// are clamped. `None` for the empty result or a non-finite value.
    pub fn class_of(&self, value: f64) -> Option<usize> {
        if self.is_empty() || !value.is_finite() {
            return None;
        }
        Some(self.inner_breaks.partition_point(|&b| b <= value))
    }

    /// The `(lower, upper)` bounds of each class
    pub fn ranges(&self) -> Vec<(f64, f64)> {
        self.breaks.windows(2).map(|w| (w[0], w[1])).collect()
    }
}

/// Typed outcome of the engine
///
/// Keeps "the caller owns the breaks" apart from "nothing could be
/// computed", which both flatten to the same empty [`ClassificationResult`].
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// Breaks computed from the sample
    Computed(ClassificationResult),
    /// Nothing to classify, or the method is undefined on this sample
    Empty,
    /// Breaks are supplied by the caller
    Custom,
}

impl Classification {
    /// Flatten into the plain result
    pub fn into_result(self) -> ClassificationResult {
        match self {
            Self::Computed(result) => result,
            Self::Empty | Self::Custom => ClassificationResult::empty(),
        }
    }

    /// The computed result, if any
    pub fn computed(&self) -> Option<&ClassificationResult> {
        match self {
            Self::Computed(result) => Some(result),
            Self::Empty | Self::Custom => None,
        }
    }

    /// Whether breaks were computed
    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }
}

impl From<Classification> for ClassificationResult {
    fn from(classification: Classification) -> Self {
        classification.into_result()
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Classification({} classes, breaks={:?})", self.n_classes, self.breaks)
    }
}
