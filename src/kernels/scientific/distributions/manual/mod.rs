// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Manual Distribution Module** - *Free-Hand Piecewise-Linear Densities*
//!
//! Turns a user-drawn sequence of `(x, y)` points into a probability density.
//! The curve is piecewise linear between points sorted by `x`; normalisation
//! rescales it to unit trapezoidal area.
//!
//! ## Overview
//! - [`ManualDistribution`] owns a [`ManualDistState`] plus running drawing bounds.
//! - [`pdf_at`] and [`cdf_at`] evaluate any sorted point slice.
//! - [`stroke`] converts pointer strokes into interpolated points.
//! - [`bins`] samples from a bar-chart style, bin-drawn distribution.
//!
//! ## Degenerate input
//! Nothing here fails. Below two points, `pdf`, `cdf` and `sample` return `0`
//! and `stats` returns zeros. A curve with zero area stays unnormalised.
//!
//! ## Sampling
//! `sample` draws `x ~ U(min, max)` over the running bounds and accepts when
//! `U(0, max y) <= pdf(x)`. After [`REJECTION_ATTEMPTS`] misses it falls back
//! to inverse transform over the grid points, then to the middle point.

pub mod bins;
pub mod state;
pub mod stroke;

use rand::Rng;

pub use state::{ManualDistState, Point};

use crate::config::{
    DEFAULT_HISTOGRAM_GRID, DEFAULT_MANUAL_MAX, DEFAULT_MANUAL_MIN, REJECTION_ATTEMPTS,
};
use crate::utils::trapezoid;

/// Mean and variance of a drawn curve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ManualStats {
    pub mean: f64,
    pub variance: f64,
}

/// Linear interpolation of the density at `x` over `sorted` points.
///
/// Zero outside `[first.x, last.x]` and below two points. The first
/// bracketing pair wins when `x` values repeat; a zero-width pair yields its
/// left `y`.
pub fn pdf_at(sorted: &[Point], x: f64) -> f64 {
    let (first, last) = match (sorted.first(), sorted.last()) {
        (Some(f), Some(l)) if sorted.len() >= 2 => (f, l),
        _ => return 0.0,
    };
    if !(x >= first.x && x <= last.x) {
        return 0.0;
    }
    for w in sorted.windows(2) {
        let (p1, p2) = (w[0], w[1]);
        if x >= p1.x && x <= p2.x {
            let dx = p2.x - p1.x;
            if dx == 0.0 {
                return p1.y;
            }
            return p1.y + (p2.y - p1.y) * (x - p1.x) / dx;
        }
    }
    0.0
}

/// Trapezoidal integral of the interpolated density from the first point to `x`.
///
/// `0` below the first point, `1` above the last.
pub fn cdf_at(sorted: &[Point], x: f64) -> f64 {
    let (first, last) = match (sorted.first(), sorted.last()) {
        (Some(f), Some(l)) if sorted.len() >= 2 => (f, l),
        _ => return 0.0,
    };
    if x.is_nan() || x < first.x {
        return 0.0;
    }
    if x > last.x {
        return 1.0;
    }

    let mut acc = 0.0;
    let mut prev = *first;
    let mut i = 1;
    while i < sorted.len() && sorted[i].x <= x {
        let cur = sorted[i];
        acc += trapezoid(prev.x, prev.y, cur.x, cur.y);
        prev = cur;
        i += 1;
    }
    if x > prev.x && i < sorted.len() {
        acc += trapezoid(prev.x, prev.y, x, pdf_at(sorted, x));
    }
    acc
}

/// A free-hand drawn probability density.
#[derive(Debug, Clone, PartialEq)]
pub struct ManualDistribution {
    state: ManualDistState,
    min: f64,
    max: f64,
}

impl Default for ManualDistribution {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualDistribution {
    /// Empty curve with drawing bounds `[-5, 5]`.
    pub fn new() -> Self {
        ManualDistribution {
            state: ManualDistState::Empty,
            min: DEFAULT_MANUAL_MIN,
            max: DEFAULT_MANUAL_MAX,
        }
    }

    /// Builds a curve from initial points.
    ///
    /// Bounds are set to the exact `x` extremes of `points` and the curve is
    /// normalised. An empty slice gives the same result as [`new`](Self::new).
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        if points.is_empty() {
            return Self::new();
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let pts: Vec<Point> = points
            .iter()
            .map(|&(x, y)| {
                min = min.min(x);
                max = max.max(x);
                Point::new(x, y)
            })
            .collect();
        let mut dist = ManualDistribution {
            state: ManualDistState::Accumulating(pts),
            min,
            max,
        };
        dist.normalize();
        dist
    }

    /// Appends a point, clamping `y` to `max(0, y)`, and widens the bounds to
    /// cover `x`. Marks the curve unnormalised.
    pub fn add_point(&mut self, x: f64, y: f64) {
        let state = std::mem::take(&mut self.state);
        self.state = state.with_point(Point::new(x, y));
        self.min = self.min.min(x);
        self.max = self.max.max(x);
    }

    /// Removes every point and restores the default bounds.
    pub fn clear_points(&mut self) {
        let state = std::mem::take(&mut self.state);
        self.state = state.cleared();
        self.min = DEFAULT_MANUAL_MIN;
        self.max = DEFAULT_MANUAL_MAX;
    }

    /// Rescales the curve to unit area. See [`ManualDistState::normalized`].
    pub fn normalize(&mut self) {
        let state = std::mem::take(&mut self.state);
        self.state = state.normalized();
    }

    #[inline]
    pub fn state(&self) -> &ManualDistState {
        &self.state
    }

    #[inline]
    pub fn is_normalized(&self) -> bool {
        self.state.is_normalized()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Running `(min, max)` drawing bounds.
    #[inline]
    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Points sorted ascending by `x` (stable). Internal order is untouched.
    pub fn points(&self) -> Vec<Point> {
        self.state.sorted_points().into_owned()
    }

    /// Sorted points as `(x, y)` pairs.
    pub fn get_points(&self) -> Vec<(f64, f64)> {
        self.state
            .sorted_points()
            .iter()
            .map(|p| (p.x, p.y))
            .collect()
    }

    #[inline]
    pub fn pdf(&self, x: f64) -> f64 {
        pdf_at(&self.state.sorted_points(), x)
    }

    #[inline]
    pub fn cdf(&self, x: f64) -> f64 {
        cdf_at(&self.state.sorted_points(), x)
    }

    /// `bins + 1` evenly spaced `(x, pdf(x))` pairs spanning the points.
    /// Empty below two points.
    pub fn histogram_data(&self, bins: usize) -> Vec<(f64, f64)> {
        let sorted = self.state.sorted_points();
        let (first, last) = match (sorted.first(), sorted.last()) {
            (Some(f), Some(l)) if sorted.len() >= 2 => (f.x, l.x),
            _ => return Vec::new(),
        };
        let bins = bins.max(1);
        let step = (last - first) / bins as f64;
        (0..=bins)
            .map(|i| {
                let x = first + i as f64 * step;
                (x, pdf_at(&sorted, x))
            })
            .collect()
    }

    /// [`histogram_data`](Self::histogram_data) over the default 50-interval grid.
    #[inline]
    pub fn default_histogram_data(&self) -> Vec<(f64, f64)> {
        self.histogram_data(DEFAULT_HISTOGRAM_GRID)
    }

    /// Draws one variate, normalising first if needed.
    ///
    /// Always terminates with a finite value for finite points; returns `0`
    /// below two points.
    pub fn sample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        if self.state.len() < 2 {
            return 0.0;
        }
        if !self.state.is_normalized() {
            self.normalize();
        }

        let sorted = self.state.sorted_points();
        let max_y = sorted.iter().fold(f64::NEG_INFINITY, |m, p| m.max(p.y));
        let span = self.max - self.min;

        for _ in 0..REJECTION_ATTEMPTS {
            let x = self.min + rng.random::<f64>() * span;
            let y = pdf_at(&sorted, x);
            if rng.random::<f64>() * max_y <= y {
                return x;
            }
        }

        log::trace!(
            "manual sample: {REJECTION_ATTEMPTS} rejections, falling back to inverse transform"
        );
        let u = rng.random::<f64>();
        if let Some(p) = sorted.iter().find(|p| cdf_at(&sorted, p.x) >= u) {
            return p.x;
        }
        sorted[sorted.len() / 2].x
    }

    /// `n` independent calls to [`sample`](Self::sample).
    pub fn generate_samples<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) -> Vec<f64> {
        (0..n).map(|_| self.sample(rng)).collect()
    }

    /// Mean and variance by trapezoid-area-weighted segment midpoints,
    /// divided by the total area. Zeros below two points or with no area.
    pub fn stats(&self) -> ManualStats {
        let sorted = self.state.sorted_points();
        if sorted.len() < 2 {
            return ManualStats::default();
        }

        let segments = || {
            sorted.windows(2).map(|w| {
                let area = trapezoid(w[0].x, w[0].y, w[1].x, w[1].y);
                ((w[0].x + w[1].x) / 2.0, area)
            })
        };

        let (weighted, total) = segments().fold((0.0, 0.0), |(s, a), (mid, area)| {
            (s + mid * area, a + area)
        });
        if total <= 0.0 {
            return ManualStats::default();
        }
        let mean = weighted / total;
        let spread: f64 = segments().map(|(mid, area)| (mid - mean).powi(2) * area).sum();
        ManualStats {
            mean,
            variance: spread / total,
        }
    }
}
