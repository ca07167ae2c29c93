//! Classification requests and their parameter normalization

use classbreaks_core::{Error, Method, Result};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Class count used when none is requested
pub const DEFAULT_CLASSES: i64 = 5;

/// Default band width, in standard deviations, for the msd method
pub const DEFAULT_BAND_WIDTH: f64 = 1.0;

/// Smallest accepted band width for the msd method
pub const MIN_BAND_WIDTH: f64 = 0.1;

/// Largest accepted band width for the msd method
pub const MAX_BAND_WIDTH: f64 = 10.0;

/// Upper bound on the class count; larger requests are clamped
pub const MAX_CLASSES: i64 = 1 << 16;

/// What to classify with, and how
///
/// `nb` is a hint: data-driven methods choose their own class count, and
/// nested means rounds it to a power of two. Out-of-range values are clamped
/// to the nearest valid value rather than rejected.
///
/// # Examples
///
/// ```rust
/// use classbreaks_core::Method;
/// use classbreaks_engine::ClassificationRequest;
///
/// let request = ClassificationRequest::new(Method::Msd).classes(4).k(0.5).middle(true);
/// assert_eq!(request.class_count(), 4);
/// assert_eq!(request.band_width(), 0.5);
///
/// let request: ClassificationRequest =
///     serde_json::from_str(r#"{"method": "nestedmeans", "nb": 5}"#).unwrap();
/// assert_eq!(request.class_count(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationRequest {
    /// Classification method
    pub method: Method,
    /// Requested class count
    pub nb: i64,
    /// Decimal places inner breaks are rounded to
    pub precision: Option<u32>,
    /// Method tuning parameter (band width for msd)
    pub k: Option<f64>,
    /// Centre classes on the mean (msd, arithmetic)
    pub middle: Option<bool>,
}

impl Default for ClassificationRequest {
    fn default() -> Self {
        Self {
            method: Method::default(),
            nb: DEFAULT_CLASSES,
            precision: None,
            k: None,
            middle: None,
        }
    }
}

impl ClassificationRequest {
    /// Create a request for a method with default parameters
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Set the requested class count
    pub fn classes(mut self, nb: i64) -> Self {
        self.nb = nb;
        self
    }

    /// Round inner breaks to `decimals` places
    pub fn precision(mut self, decimals: u32) -> Self {
        self.precision = Some(decimals);
        self
    }

    /// Set the method tuning parameter
    pub fn k(mut self, k: f64) -> Self {
        self.k = Some(k);
        self
    }

    /// Centre classes on the mean
    pub fn middle(mut self, middle: bool) -> Self {
        self.middle = Some(middle);
        self
    }

    /// Report parameters the engine would clamp
    ///
    /// The engine itself never fails on these; this is for callers that want
    /// to surface the problem to a user.
    pub fn validate(&self) -> Result<()> {
        if self.nb < 1 {
            return Err(Error::invalid_class_count(self.nb));
        }
        if let Some(k) = self.k {
            if !k.is_finite() || !(MIN_BAND_WIDTH..=MAX_BAND_WIDTH).contains(&k) {
                return Err(Error::InvalidParameter(format!(
                    "k {k} must be in [{MIN_BAND_WIDTH}, {MAX_BAND_WIDTH}]"
                )));
            }
        }
        Ok(())
    }

    /// The class count the method actually computes with
    ///
    /// Clamped into `[1, MAX_CLASSES]`; for nested means rounded to the
    /// nearest power of two with a floor of 2.
    pub fn class_count(&self) -> usize {
        let clamped = self.nb.clamp(1, MAX_CLASSES);
        if clamped != self.nb {
            debug!(requested = self.nb, clamped, "class count clamped");
        }
        let nb = clamped.to_usize().unwrap_or(1);
        match self.method {
            Method::NestedMeans => nearest_power_of_two(nb),
            _ => nb,
        }
    }

    /// Band width for the msd method, clamped into the valid range
    pub fn band_width(&self) -> f64 {
        match self.k {
            Some(k) if k.is_finite() => k.clamp(MIN_BAND_WIDTH, MAX_BAND_WIDTH),
            Some(k) => {
                debug!(k, "non-finite band width replaced by default");
                DEFAULT_BAND_WIDTH
            }
            None => DEFAULT_BAND_WIDTH,
        }
    }

    /// Whether classes should be centred on the mean
    pub fn is_middle(&self) -> bool {
        self.middle.unwrap_or(false)
    }
}

/// `2^round(log2(nb))`, never below 2
pub fn nearest_power_of_two(nb: usize) -> usize {
    let exponent = (nb.max(1) as f64)
        .log2()
        .round()
        .to_u32()
        .unwrap_or(1)
        .min(16);
    (1usize << exponent).max(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_power_of_two() {
        assert_eq!(nearest_power_of_two(1), 2);
        assert_eq!(nearest_power_of_two(2), 2);
        assert_eq!(nearest_power_of_two(3), 4);
        assert_eq!(nearest_power_of_two(5), 4);
        assert_eq!(nearest_power_of_two(6), 8);
        assert_eq!(nearest_power_of_two(11), 8);
        assert_eq!(nearest_power_of_two(12), 16);
        assert_eq!(nearest_power_of_two(0), 2);
    }

    #[test]
    fn test_only_nested_means_is_normalized() {
        for method in Method::ALL {
            let request = ClassificationRequest::new(method).classes(5);
            let expected = if method == Method::NestedMeans { 4 } else { 5 };
            assert_eq!(request.class_count(), expected, "{method}");
        }
    }

    #[test]
    fn test_non_positive_class_count_is_clamped() {
        let request = ClassificationRequest::new(Method::Equal).classes(0);
        assert_eq!(request.class_count(), 1);
        assert!(request.validate().is_err());

        let request = ClassificationRequest::new(Method::NestedMeans).classes(-3);
        assert_eq!(request.class_count(), 2);
    }

    #[test]
    fn test_band_width_clamping() {
        assert_eq!(ClassificationRequest::new(Method::Msd).band_width(), 1.0);
        assert_eq!(ClassificationRequest::new(Method::Msd).k(0.0).band_width(), 0.1);
        assert_eq!(ClassificationRequest::new(Method::Msd).k(50.0).band_width(), 10.0);
        assert_eq!(ClassificationRequest::new(Method::Msd).k(f64::NAN).band_width(), 1.0);

        assert!(ClassificationRequest::new(Method::Msd).k(0.5).validate().is_ok());
        assert!(ClassificationRequest::new(Method::Msd).k(-1.0).validate().is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let request: ClassificationRequest = serde_json::from_str(r#"{"method": "jenks"}"#).unwrap();
        assert_eq!(request.method, Method::Jenks);
        assert_eq!(request.nb, DEFAULT_CLASSES);
        assert_eq!(request.precision, None);
        assert!(!request.is_middle());

        let request: ClassificationRequest =
            serde_json::from_str(r#"{"method": "msd", "nb": 3, "k": 0.5, "middle": true, "precision": 1}"#)
                .unwrap();
        assert_eq!(request, ClassificationRequest::new(Method::Msd).classes(3).k(0.5).middle(true).precision(1));
    }
}
