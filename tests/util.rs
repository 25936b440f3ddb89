#![allow(unused)]

use clt_kernels::kernels::scientific::distributions::shared::sampler::Sampler;

/// Relative-or-absolute closeness: the tolerance scales with `|expected|`
/// once it exceeds 1.
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    if expected.is_nan() {
        assert!(actual.is_nan(), "expected NaN, got {actual}");
        return;
    }
    if expected.is_infinite() {
        assert_eq!(actual, expected, "expected {expected}, got {actual}");
        return;
    }
    let scale = 1.0_f64.max(expected.abs());
    assert!(
        (actual - expected).abs() <= tol * scale,
        "mismatch: got {actual}, expect {expected} (tol={tol})"
    );
}

/// `n` draws from a fresh generator seeded with `seed`.
pub fn draws<F: FnMut(&mut Sampler) -> f64>(seed: u64, n: usize, mut f: F) -> Vec<f64> {
    let mut rng = Sampler::seeded(seed);
    (0..n).map(|_| f(&mut rng)).collect()
}
