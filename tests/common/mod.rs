//! Shared utilities for integration tests

use classbreaks::RawValue;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::{LogNormal, Normal};

/// Route `tracing` output through the test harness, once per binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// County-style rates: roughly normal around 40 with a few outliers
pub fn rates(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(40.0, 8.0).unwrap();
    let mut values: Vec<f64> = (0..n).map(|_| normal.sample(&mut rng)).collect();
    values.extend([2.0, 95.0, 120.0]);
    values
}

/// Population-style counts with a long right tail
pub fn populations(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let lognormal = LogNormal::<f64>::new(9.0, 1.2).unwrap();
    (0..n).map(|_| lognormal.sample(&mut rng).round()).collect()
}

/// Raw cells as they come out of a JSON table column
pub fn cells(json: &str) -> Vec<RawValue> {
    serde_json::from_str(json).unwrap()
}
