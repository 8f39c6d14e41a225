//! Helpers shared by the integration tests.

#![allow(dead_code)]

use lazy_linalg::Matrix;
use log::LevelFilter;

/// Initializes logging to *stderr* for a test binary.
///
/// Messages from this crate are shown up to `Debug` level. `RUST_LOG` overrides the filter. Every
/// test calls this, so initialization failures after the first call are ignored.
pub fn init_logger() {
    env_logger::Builder::new()
        .filter(Some("lazy_linalg"), LevelFilter::Debug)
        .parse_default_env()
        .is_test(true)
        .try_init()
        .ok();
}

/// Returns a matrix with elements drawn uniformly from `-10.0..10.0`.
pub fn random_matrix<const R: usize, const C: usize>(
    rng: &mut fastrand::Rng,
) -> Matrix<f64, R, C> {
    Matrix::from_fn(|_, _| rng.f64() * 20.0 - 10.0)
}

/// Returns a matrix with elements drawn uniformly from `-9..=9`.
pub fn random_int_matrix<const R: usize, const C: usize>(
    rng: &mut fastrand::Rng,
) -> Matrix<i64, R, C> {
    Matrix::from_fn(|_, _| rng.i64(-9..=9))
}
