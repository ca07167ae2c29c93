//! Raw input values and the cleaned sample
//!
//! Choropleth data usually arrives from tables where a cell may be a number,
//! a numeric string, an empty string or nothing at all. [`RawValue`] models
//! one such cell; [`Sample`] is the cleaned, immutable view the engine works
//! on, with a sorted copy and summary statistics computed once.

use crate::utils;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single uncleaned datum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// A numeric cell
    Number(f64),
    /// A text cell, numeric only if it parses as a finite number
    Text(String),
    /// A missing cell (`null`)
    Missing,
}

impl RawValue {
    /// Numeric coercion: `Some` only for finite numbers
    ///
    /// Text is trimmed first; empty text is missing, not zero.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Self::Number(x) => *x,
            Self::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok()?
            }
            Self::Missing => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Whether this datum is dropped by cleaning
    pub fn is_missing(&self) -> bool {
        self.as_number().is_none()
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Option<f64>> for RawValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Missing, Self::Number)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A cleaned numeric sample with precomputed statistics
///
/// Read-only once built, so one `Sample` can serve many classification
/// requests, including from several threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
    sorted: Vec<f64>,
    dropped: usize,
    min: f64,
    max: f64,
    mean: f64,
    std_dev: f64,
}

impl Sample {
    /// Build a sample from numbers, dropping NaN and infinite values
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut dropped = 0;
        let values: Vec<f64> = values
            .into_iter()
            .filter(|x| {
                let keep = x.is_finite();
                if !keep {
                    dropped += 1;
                }
                keep
            })
            .collect();
        Self::from_clean(values, dropped)
    }

    /// Build a sample from raw cells, dropping missing and non-numeric ones
    pub fn from_raw<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a RawValue>,
    {
        let mut dropped = 0;
        let values: Vec<f64> = values
            .into_iter()
            .filter_map(|raw| {
                let number = raw.as_number();
                if number.is_none() {
                    dropped += 1;
                }
                number
            })
            .collect();
        Self::from_clean(values, dropped)
    }

    fn from_clean(values: Vec<f64>, dropped: usize) -> Self {
        if dropped > 0 {
            debug!(kept = values.len(), dropped, "dropped non-numeric values");
        }
        let sorted = utils::sorted(&values);
        let (min, max) = match (sorted.first(), sorted.last()) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => (0.0, 0.0),
        };
        let mean = utils::mean(&values);
        let std_dev = utils::std_dev(&values);
        Self {
            values,
            sorted,
            dropped,
            min,
            max,
            mean,
            std_dev,
        }
    }

    /// Cleaned values in input order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Cleaned values in ascending order
    pub fn sorted(&self) -> &[f64] {
        &self.sorted
    }

    /// Number of cleaned values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether cleaning left nothing
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of inputs removed by cleaning
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Smallest value (0.0 when empty)
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest value (0.0 when empty)
    pub fn max(&self) -> f64 {
        self.max
    }

    /// `max - min`
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Arithmetic mean (0.0 when empty)
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation (0.0 for fewer than two values)
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Whether every value is identical
    pub fn is_constant(&self) -> bool {
        !self.is_empty() && self.min == self.max
    }
}

impl From<&[f64]> for Sample {
    fn from(values: &[f64]) -> Self {
        Sample::new(values.iter().copied())
    }
}

impl From<Vec<f64>> for Sample {
    fn from(values: Vec<f64>) -> Self {
        Sample::new(values)
    }
}
