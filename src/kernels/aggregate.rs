// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Aggregation Kernels Module** - *Descriptive Statistics over Samples*
//!
//! Reductions used to summarise simulated samples and sampling distributions.
//! Every function is generic over [`num_traits::Float`] and total: input that
//! is too small for a statistic yields zero instead of an error.
//!
//! ## Core Operations
//! - **Location**: [`mean`], [`median`]
//! - **Spread**: [`variance`], [`std_dev`], [`range`], [`iqr`]
//! - **Shape**: [`skewness`] (adjusted Fisher–Pearson) and [`kurtosis`]
//!   (bias-corrected excess, G2)
//!
//! ## Minimum sizes
//! | function   | zero when            |
//! |------------|----------------------|
//! | `mean`     | empty                |
//! | `variance` | `n < 2`              |
//! | `median`   | empty                |
//! | `skewness` | `n < 3` or `sd == 0` |
//! | `kurtosis` | `n < 4` or `sd == 0` |
//! | `range`    | empty                |
//! | `iqr`      | `n < 4`              |

use std::cmp::Ordering;

use num_traits::Float;

/// Lossless for every count this module sees; `NaN` if the target type cannot
/// represent `v`.
#[inline(always)]
fn cast<T: Float>(v: usize) -> T {
    T::from(v).unwrap_or_else(T::nan)
}

/// Total order for generic floats, `NaN` last.
#[inline(always)]
fn total_cmp<T: Float>(a: &T, b: &T) -> Ordering {
    match a.partial_cmp(b) {
        Some(o) => o,
        None => a.is_nan().cmp(&b.is_nan()),
    }
}

#[inline]
fn sorted<T: Float>(data: &[T]) -> Vec<T> {
    let mut v = data.to_vec();
    v.sort_unstable_by(total_cmp);
    v
}

/// Arithmetic mean; `0` for empty input.
#[inline]
pub fn mean<T: Float>(data: &[T]) -> T {
    if data.is_empty() {
        return T::zero();
    }
    let sum = data.iter().fold(T::zero(), |acc, &x| acc + x);
    sum / cast(data.len())
}

/// Sum of squared deviations over `n − 1` (unbiased) or `n` (`biased`).
/// `0` when `n < 2`.
#[inline]
pub fn variance<T: Float>(data: &[T], biased: bool) -> T {
    let n = data.len();
    if n < 2 {
        return T::zero();
    }
    let mu = mean(data);
    let ss = data.iter().fold(T::zero(), |acc, &x| {
        let d = x - mu;
        acc + d * d
    });
    let divisor = if biased { n } else { n - 1 };
    ss / cast(divisor)
}

/// Square root of the unbiased [`variance`].
#[inline]
pub fn std_dev<T: Float>(data: &[T]) -> T {
    variance(data, false).sqrt()
}

/// Middle value; the average of the two middle values for even `n`.
pub fn median<T: Float>(data: &[T]) -> T {
    if data.is_empty() {
        return T::zero();
    }
    let mut v = data.to_vec();
    let len = v.len();
    let mid = len / 2;
    if len & 1 == 1 {
        let (_, nth, _) = v.select_nth_unstable_by(mid, total_cmp);
        return *nth;
    }
    let (_, hi, _) = v.select_nth_unstable_by(mid, total_cmp);
    let hi = *hi;
    let (_, lo, _) = v.select_nth_unstable_by(mid - 1, total_cmp);
    let two = T::one() + T::one();
    (*lo + hi) / two
}

/// Σ zᵢᵏ with `z = (x − mean) / sd`, using the unbiased sd.
#[inline(always)]
fn standardised_power_sum<T: Float>(data: &[T], mu: T, sd: T, k: i32) -> T {
    data.iter()
        .fold(T::zero(), |acc, &x| acc + ((x - mu) / sd).powi(k))
}

/// Adjusted Fisher–Pearson skewness `n / ((n−1)(n−2)) · Σ z³`.
pub fn skewness<T: Float>(data: &[T]) -> T {
    let n = data.len();
    if n < 3 {
        return T::zero();
    }
    let sd = std_dev(data);
    if sd == T::zero() || !sd.is_finite() {
        return T::zero();
    }
    let n_f: T = cast(n);
    let one = T::one();
    let two = one + one;
    let s3 = standardised_power_sum(data, mean(data), sd, 3);
    s3 * n_f / ((n_f - one) * (n_f - two))
}

/// Bias-corrected excess kurtosis (G2):
///
/// `n(n+1) / ((n−1)(n−2)(n−3)) · Σ z⁴ − 3(n−1)² / ((n−2)(n−3))`
pub fn kurtosis<T: Float>(data: &[T]) -> T {
    let n = data.len();
    if n < 4 {
        return T::zero();
    }
    let sd = std_dev(data);
    if sd == T::zero() || !sd.is_finite() {
        return T::zero();
    }
    let n_f: T = cast(n);
    let one = T::one();
    let two = one + one;
    let three = two + one;
    let s4 = standardised_power_sum(data, mean(data), sd, 4);
    let lead = n_f * (n_f + one) / ((n_f - one) * (n_f - two) * (n_f - three));
    let tail = three * (n_f - one) * (n_f - one) / ((n_f - two) * (n_f - three));
    lead * s4 - tail
}

/// `max − min`; `0` for empty input.
#[inline]
pub fn range<T: Float>(data: &[T]) -> T {
    let mut it = data.iter().copied();
    let Some(first) = it.next() else {
        return T::zero();
    };
    let (lo, hi) = it.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x)));
    hi - lo
}

/// `sorted[⌊0.75n⌋] − sorted[⌊0.25n⌋]`; `0` when `n < 4`.
pub fn iqr<T: Float>(data: &[T]) -> T {
    let n = data.len();
    if n < 4 {
        return T::zero();
    }
    let s = sorted(data);
    let q1 = n / 4;
    let q3 = (3 * n) / 4;
    s[q3] - s[q1]
}
