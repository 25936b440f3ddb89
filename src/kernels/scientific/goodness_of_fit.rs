// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Goodness of Fit** - *Distance from a Fitted Normal*
//!
//! How far a sample is from the normal distribution with the sample's own
//! mean and standard deviation. Both measures return `0` when `n < 3` or the
//! sample has no spread.

use crate::config::DEFAULT_KL_BINS;
use crate::kernels::aggregate::{mean, std_dev};
use crate::kernels::scientific::distributions::shared::scalar::{
    normal_cdf_scalar, normal_pdf_scalar,
};
use crate::utils::{min_max, sorted_copy};

/// Fitted `(mean, sd)`, or `None` when the sample is too small or flat.
#[inline]
fn fitted_normal(data: &[f64]) -> Option<(f64, f64)> {
    if data.len() < 3 {
        return None;
    }
    let sd = std_dev(data);
    if sd == 0.0 || !sd.is_finite() {
        return None;
    }
    Some((mean(data), sd))
}

/// One-sample Kolmogorov–Smirnov statistic
/// `D = supₓ |Fₙ(x) − Φ((x − x̄) / s)|`.
pub fn ks_statistic(data: &[f64]) -> f64 {
    let Some((mu, sd)) = fitted_normal(data) else {
        return 0.0;
    };
    let sorted = sorted_copy(data);
    let n = sorted.len() as f64;
    sorted
        .iter()
        .enumerate()
        .fold(0.0f64, |d, (i, &x)| {
            let f = normal_cdf_scalar(x, mu, sd);
            let above = (i + 1) as f64 / n - f;
            let below = f - i as f64 / n;
            d.max(above).max(below)
        })
}

/// Kullback–Leibler divergence `Σ pᵢ ln(pᵢ / qᵢ)` from the empirical
/// histogram to the fitted normal.
///
/// `pᵢ` is the fraction of the sample in bin `i` and `qᵢ` the fitted density
/// at the bin midpoint times the bin width, floored at the smallest positive
/// `f64`. Empty bins are skipped. `bins` of `0` uses the default of 20.
pub fn kl_divergence(data: &[f64], bins: usize) -> f64 {
    let Some((mu, sd)) = fitted_normal(data) else {
        return 0.0;
    };
    let Some((lo, hi)) = min_max(data) else {
        return 0.0;
    };
    let k = if bins == 0 { DEFAULT_KL_BINS } else { bins };
    let width = (hi - lo) / k as f64;
    if !(width > 0.0) {
        return 0.0;
    }

    let mut counts = vec![0usize; k];
    for &x in data {
        let idx = ((x - lo) / width).floor();
        let idx = if idx.is_finite() && idx > 0.0 { idx as usize } else { 0 };
        counts[idx.min(k - 1)] += 1;
    }

    let n = data.len() as f64;
    counts
        .iter()
        .enumerate()
        .filter(|(_, &c)| c > 0)
        .map(|(i, &c)| {
            let p = c as f64 / n;
            let mid = lo + (i as f64 + 0.5) * width;
            let q = (normal_pdf_scalar(mid, mu, sd) * width).max(f64::MIN_POSITIVE);
            p * (p / q).ln()
        })
        .sum()
}
