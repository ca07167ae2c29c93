//! Histogram binning on realistic samples

use approx::assert_relative_eq;
use classbreaks_core::RawValue;
use classbreaks_histogram::*;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

fn normal_sample(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(250.0, 40.0).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

#[test]
fn test_density_integrates_to_one() {
    let data = normal_sample(2_000, 42);
    let hist = compute_histogram(&data, DEFAULT_BINS);
    let area: f64 = hist.bins().iter().map(|b| b.density * b.width()).sum();
    assert_relative_eq!(area, 1.0, epsilon = 1e-9);
    assert_relative_eq!(hist.frequencies().iter().sum::<f64>(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_every_value_lands_in_its_bin() {
    let data = normal_sample(500, 7);
    let hist = compute_histogram(&data, 20);
    for &x in &data {
        let index = hist.find_bin(x).unwrap();
        let bin = &hist.bins()[index];
        assert!(bin.x0 <= x && x <= bin.x1);
    }
}

#[test]
fn test_missing_values_are_skipped() {
    let clean = compute_histogram(&[1.0, 2.0, 3.0], 5);
    let dirty = compute_histogram(&[1.0, f64::NAN, 2.0, 3.0, f64::INFINITY], 5);
    assert_eq!(clean, dirty);

    let cells = vec![
        RawValue::from(1.0),
        RawValue::Missing,
        RawValue::from("2"),
        RawValue::from("x"),
        RawValue::from(3.0),
    ];
    assert_eq!(compute_histogram_raw(&cells, 5), clean);
}

#[test]
fn test_empty_and_constant() {
    assert!(compute_histogram(&[], 30).is_empty());
    assert!(compute_histogram(&[f64::NAN], 30).is_empty());

    let hist = compute_histogram(&[7.0, 7.0, 7.0], 30);
    assert_eq!(hist.len(), 1);
    assert_eq!(hist.bins()[0].count, 3);
}

#[test]
fn test_huge_magnitudes_fall_back_to_one_bin() {
    let base = 2f64.powi(60);
    let values = [base, base + 128.0, base + 256.0];
    for bins in [5, DEFAULT_BINS] {
        let hist = compute_histogram(&values, bins);
        assert_eq!(hist.len(), 1);
        assert_eq!(hist.total_count(), 3);
        assert!(hist.bins()[0].x0 <= base);
        assert!(hist.bins()[0].x1 >= base + 256.0);
    }
}

#[test]
fn test_domain() {
    assert_eq!(histogram_domain(&[]), Domain::default());
    let domain = histogram_domain(&[4.0, f64::NAN, -2.0, 7.0]);
    assert_eq!(domain.min, -2.0);
    assert_eq!(domain.max, 7.0);
    assert_relative_eq!(domain.mean, 3.0);
}

#[test]
fn test_convenience_constructors() {
    let data = normal_sample(300, 9);
    assert_eq!(fixed_histogram(&data, 12).unwrap().len(), 12);
    assert!(scott_histogram(&data).unwrap().len() > 1);
    assert!(freedman_diaconis_histogram(&data).unwrap().len() > 1);
    assert!(fixed_histogram(&[f64::NAN], 3).is_err());
}

proptest! {
    #[test]
    fn prop_counts_cover_the_sample(
        values in prop::collection::vec(-1.0e4..1.0e4f64, 1..200),
        bins in 1usize..50,
    ) {
        let hist = compute_histogram(&values, bins);
        prop_assert_eq!(hist.counts().iter().sum::<usize>(), values.len());
        prop_assert_eq!(hist.total_count(), values.len());
        let edges = hist.edges();
        prop_assert!(edges.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(edges[0] <= hist.min());
        prop_assert!(*edges.last().unwrap() >= hist.max());
    }
}
