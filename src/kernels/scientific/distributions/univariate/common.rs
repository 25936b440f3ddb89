// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Common Distribution Utilities** - *Shared Helpers and Test Infrastructure*
//!
//! Support checks shared by the discrete families, plus numeric integration
//! helpers used by the per-family test modules to confirm that densities
//! integrate (and masses sum) to one.

use crate::utils::is_integer;

/// Interprets `x` as a point of a non-negative integer support.
///
/// Returns `None` for negative, fractional or non-finite `x`, so callers can
/// return a mass of `0` without further checks.
#[inline(always)]
pub fn support_index(x: f64) -> Option<u64> {
    if is_integer(x) && x >= 0.0 {
        Some(x as u64)
    } else {
        None
    }
}

/// Sums a mass function over `0..=upper`.
pub fn pmf_total<F: Fn(f64) -> f64>(pmf: F, upper: u64) -> f64 {
    (0..=upper).map(|k| pmf(k as f64)).sum()
}

/// Composite Simpson's rule over `[lo, hi]` with `n` (rounded up to even) intervals.
pub fn simpson<F: Fn(f64) -> f64>(f: F, lo: f64, hi: f64, n: usize) -> f64 {
    let n = if n % 2 == 1 { n + 1 } else { n.max(2) };
    let h = (hi - lo) / n as f64;
    let mut acc = f(lo) + f(hi);
    for i in 1..n {
        let x = lo + i as f64 * h;
        acc += if i % 2 == 1 { 4.0 * f(x) } else { 2.0 * f(x) };
    }
    acc * h / 3.0
}

/// Assert absolute difference ≤ `tol`.
#[cfg(test)]
pub fn assert_close(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() < tol,
        "assert_close failed: {a} vs {b} (tol = {tol})"
    );
}

/// Sample mean and unbiased variance, for convergence checks in tests.
#[cfg(test)]
pub fn moments(xs: &[f64]) -> (f64, f64) {
    let n = xs.len() as f64;
    let m = xs.iter().sum::<f64>() / n;
    let v = xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / (n - 1.0);
    (m, v)
}

#[cfg(test)]
mod common_tests {
    use super::*;

    #[test]
    fn support_index_rules() {
        assert_eq!(support_index(0.0), Some(0));
        assert_eq!(support_index(7.0), Some(7));
        assert_eq!(support_index(-1.0), None);
        assert_eq!(support_index(2.5), None);
        assert_eq!(support_index(f64::NAN), None);
    }

    #[test]
    fn simpson_integrates_polynomials_exactly() {
        assert_close(simpson(|x| x * x, 0.0, 3.0, 10), 9.0, 1e-12);
        assert_close(simpson(|_| 1.0, -1.0, 1.0, 3), 2.0, 1e-12);
    }

    #[test]
    fn pmf_total_sums() {
        assert_close(pmf_total(|k| 0.5f64.powf(k + 1.0), 60), 1.0, 1e-12);
    }
}
