// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Small Numeric Helpers*
//!
//! Helpers shared by the distribution, manual-curve and statistics kernels.

use std::cmp::Ordering;

/// Total ordering comparator for floats, NaN sorted last.
#[inline(always)]
pub fn total_cmp_f(a: &f64, b: &f64) -> Ordering {
    a.total_cmp(b)
}

/// Returns an ascending sorted copy of `data`.
#[inline]
pub fn sorted_copy(data: &[f64]) -> Vec<f64> {
    let mut v = data.to_vec();
    v.sort_unstable_by(total_cmp_f);
    v
}

/// Min and max of a slice in one pass. `None` when empty.
#[inline]
pub fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    let mut it = data.iter().copied();
    let first = it.next()?;
    Some(it.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x))))
}

/// True when `x` is finite with no fractional part.
#[inline(always)]
pub fn is_integer(x: f64) -> bool {
    x.is_finite() && x.fract() == 0.0
}

/// Interprets a count-like parameter (trials, degrees of freedom used as a loop
/// bound) as a non-negative integer. Non-finite and negative values give 0.
#[inline(always)]
pub fn count_param(v: f64) -> u64 {
    if v.is_finite() && v > 0.0 {
        v.floor() as u64
    } else {
        0
    }
}

/// Number of iterations a `for (i = 0; i < v; i++)` loop performs for a real bound.
#[inline(always)]
pub fn loop_count(v: f64) -> u64 {
    if v.is_finite() && v > 0.0 {
        v.ceil() as u64
    } else {
        0
    }
}

/// Area of the trapezoid between `(x1, y1)` and `(x2, y2)`.
#[inline(always)]
pub fn trapezoid(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (x2 - x1) * (y1 + y2) / 2.0
}
