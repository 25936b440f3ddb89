// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Manual Distribution State** - *Drawing Phases as a Tagged Value*
//!
//! A drawn curve is either empty, accumulating raw (unnormalised) points, or
//! normalised to unit trapezoidal area. Transitions consume the current state
//! and return the next one:
//!
//! ```text
//! Empty ──with_point──▶ Accumulating ──normalized──▶ Normalized
//!                           ▲                             │
//!                           └─────────with_point──────────┘
//! any ──cleared──▶ Empty
//! ```

use std::borrow::Cow;

use crate::utils::{total_cmp_f, trapezoid};

/// A vertex of a drawn curve. `y` is never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a point, clamping `y` to `max(0, y)`.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y: y.max(0.0) }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Trapezoidal-rule area under `points`, which must already be sorted by `x`.
#[inline]
pub fn trapezoid_area(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|w| trapezoid(w[0].x, w[0].y, w[1].x, w[1].y))
        .sum()
}

/// Stable sort by `x` only; equal `x` values keep insertion order.
#[inline]
fn sort_by_x(points: &mut [Point]) {
    points.sort_by(|a, b| total_cmp_f(&a.x, &b.x));
}

/// Drawing phase of a manual distribution.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ManualDistState {
    #[default]
    Empty,
    /// Raw points in insertion order.
    Accumulating(Vec<Point>),
    /// Points sorted by `x`, with unit trapezoidal area.
    Normalized(Vec<Point>),
}

impl ManualDistState {
    /// Appends a point. Any normalised curve drops back to `Accumulating`.
    pub fn with_point(self, point: Point) -> Self {
        match self {
            ManualDistState::Empty => ManualDistState::Accumulating(vec![point]),
            ManualDistState::Accumulating(mut pts) | ManualDistState::Normalized(mut pts) => {
                pts.push(point);
                ManualDistState::Accumulating(pts)
            }
        }
    }

    /// Rescales to unit area.
    ///
    /// Unchanged when already normalised, below two points, or when the area
    /// is not positive; in the last case a later call may still succeed once
    /// more points are added.
    pub fn normalized(self) -> Self {
        match self {
            ManualDistState::Accumulating(mut pts) if pts.len() >= 2 => {
                let mut sorted = pts.clone();
                sort_by_x(&mut sorted);
                let area = trapezoid_area(&sorted);
                if area > 0.0 {
                    for p in sorted.iter_mut() {
                        p.y /= area;
                    }
                    ManualDistState::Normalized(sorted)
                } else {
                    log::debug!("manual curve has non-positive area {area}; left unnormalised");
                    pts.shrink_to_fit();
                    ManualDistState::Accumulating(pts)
                }
            }
            other => other,
        }
    }

    /// Drops every point.
    #[inline]
    pub fn cleared(self) -> Self {
        ManualDistState::Empty
    }

    /// Points in storage order.
    pub fn raw_points(&self) -> &[Point] {
        match self {
            ManualDistState::Empty => &[],
            ManualDistState::Accumulating(pts) | ManualDistState::Normalized(pts) => pts,
        }
    }

    /// Points sorted ascending by `x`. Borrowed when already normalised.
    pub fn sorted_points(&self) -> Cow<'_, [Point]> {
        match self {
            ManualDistState::Normalized(pts) => Cow::Borrowed(pts.as_slice()),
            other => {
                let mut v = other.raw_points().to_vec();
                sort_by_x(&mut v);
                Cow::Owned(v)
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.raw_points().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, ManualDistState::Empty)
    }

    #[inline]
    pub fn is_normalized(&self) -> bool {
        matches!(self, ManualDistState::Normalized(_))
    }
}

#[cfg(test)]
mod state_tests {
    use super::*;

    fn pts(v: &[(f64, f64)]) -> Vec<Point> {
        v.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn negative_heights_clamped() {
        assert_eq!(Point::new(1.0, -3.0).y, 0.0);
        assert_eq!(Point::new(1.0, 2.0).y, 2.0);
    }

    #[test]
    fn transitions() {
        let s = ManualDistState::default();
        assert!(s.is_empty());
        let s = s.with_point(Point::new(0.0, 1.0));
        assert!(matches!(s, ManualDistState::Accumulating(_)));
        // single point cannot normalise
        let s = s.normalized();
        assert!(!s.is_normalized());
        let s = s.with_point(Point::new(2.0, 1.0)).normalized();
        assert!(s.is_normalized());
        assert!((trapezoid_area(s.raw_points()) - 1.0).abs() < 1e-12);
        let s = s.with_point(Point::new(3.0, 0.0));
        assert!(matches!(s, ManualDistState::Accumulating(_)));
        assert!(s.cleared().is_empty());
    }

    #[test]
    fn zero_area_stays_accumulating() {
        let s = ManualDistState::Accumulating(pts(&[(0.0, 0.0), (1.0, 0.0)])).normalized();
        assert!(!s.is_normalized());
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn normalising_twice_is_idempotent() {
        let once = ManualDistState::Accumulating(pts(&[(3.0, 2.0), (-1.0, 1.0), (1.0, 4.0)])).normalized();
        let twice = once.clone().normalized();
        assert_eq!(once, twice);
    }

    #[test]
    fn sort_is_stable_for_duplicate_x() {
        let s = ManualDistState::Accumulating(pts(&[(1.0, 5.0), (0.0, 1.0), (1.0, 2.0)]));
        let sorted = s.sorted_points();
        assert_eq!(sorted[0], Point::new(0.0, 1.0));
        assert_eq!(sorted[1], Point::new(1.0, 5.0));
        assert_eq!(sorted[2], Point::new(1.0, 2.0));
        // storage order untouched
        assert_eq!(s.raw_points()[0], Point::new(1.0, 5.0));
    }
}
