// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Stroke Recorder** - *Pointer Strokes to Curve Points*
//!
//! Converts a press / move / release pointer sequence into points on a
//! [`ManualDistribution`]. Moves shorter than [`STROKE_MIN_DISTANCE`] are
//! dropped; longer moves are filled with `⌈distance × smoothing⌉` linearly
//! interpolated points so fast strokes still produce a dense curve.

use super::{ManualDistribution, Point};
use crate::config::{DEFAULT_STROKE_SMOOTHING, STROKE_MIN_DISTANCE};

/// `steps + 1` evenly spaced points from `start` to `end`, both included.
///
/// `steps` of zero is treated as one.
pub fn interpolate_points(start: Point, end: Point, steps: usize) -> Vec<Point> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            Point::new(
                start.x + (end.x - start.x) * t,
                start.y + (end.y - start.y) * t,
            )
        })
        .collect()
}

/// Records one free-hand stroke at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeRecorder {
    smoothing: f64,
    last: Option<Point>,
}

impl Default for StrokeRecorder {
    fn default() -> Self {
        Self::new(DEFAULT_STROKE_SMOOTHING)
    }
}

impl StrokeRecorder {
    /// `smoothing` is the number of points inserted per unit of stroke length.
    pub fn new(smoothing: f64) -> Self {
        StrokeRecorder {
            smoothing,
            last: None,
        }
    }

    #[inline]
    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    #[inline]
    pub fn is_drawing(&self) -> bool {
        self.last.is_some()
    }

    /// Starts a stroke: clears `dist` and seeds it with `(x, y)`.
    pub fn begin(&mut self, dist: &mut ManualDistribution, x: f64, y: f64) {
        dist.clear_points();
        dist.add_point(x, y);
        self.last = Some(Point::new(x, y));
    }

    /// Continues the stroke to `(x, y)`. Returns the number of points added.
    ///
    /// Ignored when no stroke is active or the move is shorter than the
    /// minimum distance.
    pub fn extend(&mut self, dist: &mut ManualDistribution, x: f64, y: f64) -> usize {
        let Some(last) = self.last else {
            return 0;
        };
        let current = Point::new(x, y);
        let distance = (current.x - last.x).hypot(current.y - last.y);
        if !(distance >= STROKE_MIN_DISTANCE) {
            return 0;
        }

        let steps = (distance * self.smoothing).ceil();
        let steps = if steps.is_finite() && steps >= 1.0 { steps as usize } else { 1 };
        let path = interpolate_points(last, current, steps);
        for p in &path[1..] {
            dist.add_point(p.x, p.y);
        }
        self.last = Some(current);
        path.len() - 1
    }

    /// Ends the stroke and normalises `dist`.
    pub fn finish(&mut self, dist: &mut ManualDistribution) {
        if self.last.take().is_some() {
            dist.normalize();
        }
    }
}
