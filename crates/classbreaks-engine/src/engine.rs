//! Dispatch, domain validation and break post-processing

use crate::methods::{
    Arithmetic, EqualInterval, Geometric, HeadTail, Jenks, MeanStdDev, NestedMeans, Pretty,
    Quantile, Q6,
};
use crate::request::ClassificationRequest;
use crate::result::{Classification, ClassificationResult};
use crate::traits::BreakMethod;
use classbreaks_core::{utils::round_to, Error, Method, RawValue, Result, Sample};
use tracing::{debug, instrument, warn};

/// Classify plain numbers
///
/// NaN and infinities are dropped before classification. Returns the empty
/// result for an empty sample, the custom method, or a domain the method
/// cannot handle.
///
/// # Examples
///
/// ```rust
/// use classbreaks_core::Method;
/// use classbreaks_engine::{classify, ClassificationRequest};
///
/// let values: Vec<f64> = (1..=10).map(f64::from).collect();
/// let result = classify(&values, &ClassificationRequest::new(Method::Quantile).classes(4));
///
/// assert_eq!(result.breaks, vec![1.0, 3.25, 5.5, 7.75, 10.0]);
/// assert_eq!(result.inner_breaks, vec![3.25, 5.5, 7.75]);
/// assert_eq!(result.n_classes, 4);
/// ```
pub fn classify(values: &[f64], request: &ClassificationRequest) -> ClassificationResult {
    classify_sample(&Sample::new(values.iter().copied()), request).into_result()
}

/// Classify raw cells, dropping missing, empty and non-numeric ones
pub fn classify_raw(values: &[RawValue], request: &ClassificationRequest) -> ClassificationResult {
    classify_sample(&Sample::from_raw(values), request).into_result()
}

/// Classify a cleaned sample, keeping the reason when nothing is computed
#[instrument(skip(sample), fields(n = sample.len()))]
pub fn classify_sample(sample: &Sample, request: &ClassificationRequest) -> Classification {
    match compute_breaks(sample, request) {
        Ok(breaks) => {
            debug!(method = %request.method, n_breaks = breaks.len(), "breaks computed");
            Classification::Computed(ClassificationResult::from_breaks(breaks))
        }
        Err(Error::UnsupportedMethod(_)) => Classification::Custom,
        Err(err) if err.is_empty_result() => {
            debug!(method = %request.method, %err, "no classification");
            Classification::Empty
        }
        Err(err) => {
            warn!(method = %request.method, %err, "break computation failed");
            Classification::Empty
        }
    }
}

/// Classify one sample under several requests
///
/// Runs the requests on the rayon pool when the `parallel` feature is on.
/// The output order follows `requests` either way.
pub fn classify_many(sample: &Sample, requests: &[ClassificationRequest]) -> Vec<Classification> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        requests
            .par_iter()
            .map(|request| classify_sample(sample, request))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        requests
            .iter()
            .map(|request| classify_sample(sample, request))
            .collect()
    }
}

/// Full breakpoints for a sample, or the reason there are none
///
/// Custom is rejected before the sample is looked at. A constant sample
/// yields the single class `[v, v]` for every method, before any
/// method-specific domain check.
pub fn compute_breaks(sample: &Sample, request: &ClassificationRequest) -> Result<Vec<f64>> {
    let method = implementation(request).ok_or(Error::UnsupportedMethod(request.method))?;
    if sample.is_empty() {
        return Err(Error::EmptyInput);
    }
    if sample.is_constant() {
        return Ok(vec![sample.min(), sample.max()]);
    }
    let raw = method.breaks(sample, request.class_count())?;
    Ok(finalize(raw, sample, request.precision))
}

fn implementation(request: &ClassificationRequest) -> Option<Box<dyn BreakMethod>> {
    let method: Box<dyn BreakMethod> = match request.method {
        Method::Quantile => Box::new(Quantile),
        Method::Q6 => Box::new(Q6),
        Method::Equal => Box::new(EqualInterval),
        Method::Jenks => Box::new(Jenks),
        Method::Msd => Box::new(MeanStdDev {
            k: request.band_width(),
            middle: request.is_middle(),
        }),
        Method::Geometric => Box::new(Geometric),
        Method::HeadTail => Box::new(HeadTail::default()),
        Method::Pretty => Box::new(Pretty),
        Method::Arithmetic => Box::new(Arithmetic {
            middle: request.is_middle(),
        }),
        Method::NestedMeans => Box::new(NestedMeans),
        Method::Custom => return None,
    };
    Some(method)
}

/// Shared post-processing of candidate breakpoints
///
/// Keeps finite candidates strictly inside `(min, max)`, rounds them, sorts
/// and deduplicates, then pins the exact sample extremes as endpoints.
fn finalize(raw: Vec<f64>, sample: &Sample, precision: Option<u32>) -> Vec<f64> {
    let (min, max) = (sample.min(), sample.max());
    let inside = |b: &f64| b.is_finite() && *b > min && *b < max;

    let mut inner: Vec<f64> = raw
        .into_iter()
        .filter(inside)
        .map(|b| precision.map_or(b, |decimals| round_to(b, decimals)))
        .filter(inside)
        .collect();
    inner.sort_by(f64::total_cmp);
    inner.dedup();

    let mut breaks = Vec::with_capacity(inner.len() + 2);
    breaks.push(min);
    breaks.extend(inner);
    breaks.push(max);
    breaks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: Method, nb: i64) -> ClassificationRequest {
        ClassificationRequest::new(method).classes(nb)
    }

    #[test]
    fn test_custom_is_never_computed() {
        let sample = Sample::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(classify_sample(&sample, &request(Method::Custom, 3)), Classification::Custom);
        assert_eq!(
            classify_sample(&Sample::new(Vec::new()), &request(Method::Custom, 3)),
            Classification::Custom
        );
    }

    #[test]
    fn test_empty_sample() {
        for method in Method::ALL {
            let result = classify(&[], &request(method, 4));
            assert!(result.is_empty(), "{method}");
            assert_eq!(result.n_classes, 0);
        }
    }

    #[test]
    fn test_constant_sample_is_one_class() {
        for method in Method::ALL.into_iter().filter(Method::computes_breaks) {
            let result = classify(&[5.0, 5.0, 5.0], &request(method, 3));
            assert_eq!(result.breaks, vec![5.0, 5.0], "{method}");
            assert_eq!(result.n_classes, 1);
        }
    }

    #[test]
    fn test_constant_sample_beats_geometric_domain_check() {
        let result = classify(&[-2.0, -2.0], &request(Method::Geometric, 3));
        assert_eq!(result.breaks, vec![-2.0, -2.0]);
    }

    #[test]
    fn test_geometric_on_non_positive_data_is_empty() {
        let sample = Sample::new(vec![0.0, 1.0, 10.0]);
        assert_eq!(classify_sample(&sample, &request(Method::Geometric, 3)), Classification::Empty);
    }

    #[test]
    fn test_method_failures_are_empty_results() {
        let samples = [
            Sample::new(Vec::new()),
            Sample::new(vec![0.0, 1.0, 10.0]),
            Sample::new(vec![-5.0, -1.0]),
            Sample::new(vec![1.0, 2.0]),
        ];
        for sample in &samples {
            for method in Method::ALL {
                if let Err(err) = compute_breaks(sample, &request(method, 4)) {
                    assert!(err.is_empty_result(), "{method}: {err}");
                    assert!(classify_sample(sample, &request(method, 4)).computed().is_none());
                }
            }
        }
    }

    #[test]
    fn test_precision_rounds_inner_breaks_only() {
        let values = [0.123, 1.0, 2.0, 3.456];
        let result = classify(&values, &request(Method::Equal, 3).precision(1));
        assert_eq!(result.breaks, vec![0.123, 1.2, 2.3, 3.456]);
    }

    #[test]
    fn test_rounding_collapses_duplicates() {
        let values = [0.0, 0.01, 0.02, 0.03, 1.0];
        let result = classify(&values, &request(Method::Quantile, 4).precision(0));
        // Every inner quantile rounds to 0, which is the minimum itself
        assert_eq!(result.breaks, vec![0.0, 1.0]);
        assert_eq!(result.n_classes, 1);
    }

    #[test]
    fn test_finalize_drops_out_of_range_and_non_finite() {
        let sample = Sample::new(vec![0.0, 10.0]);
        let breaks = finalize(vec![f64::NAN, -3.0, 4.0, 4.0, 12.0, f64::INFINITY, 2.0], &sample, None);
        assert_eq!(breaks, vec![0.0, 2.0, 4.0, 10.0]);
    }

    #[test]
    fn test_raw_cells_are_cleaned() {
        let cells = vec![
            RawValue::from(1.0),
            RawValue::Missing,
            RawValue::from("n/a"),
            RawValue::from(""),
            RawValue::from(" 9 "),
        ];
        let result = classify_raw(&cells, &request(Method::Equal, 2));
        assert_eq!(result.breaks, vec![1.0, 5.0, 9.0]);
    }

    #[test]
    fn test_classify_many_keeps_request_order() {
        let sample = Sample::new((0..=10).map(f64::from));
        let requests = vec![
            request(Method::Equal, 2),
            request(Method::Custom, 2),
            request(Method::Geometric, 2),
        ];
        let outcomes = classify_many(&sample, &requests);
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].computed().map(|r| r.breaks.clone()), Some(vec![0.0, 5.0, 10.0]));
        assert_eq!(outcomes[1], Classification::Custom);
        assert_eq!(outcomes[2], Classification::Empty);
    }
}
