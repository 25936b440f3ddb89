// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Runtime Behaviour Parameters*
//!
//! Global configuration constants controlling sampling, binning and drawing
//! behaviour. These values are compile-time constants tuned for interactive use.

/// Rejection-sampling attempts made by the manual distribution before it falls
/// back to inverse-transform sampling over its grid points.
pub const REJECTION_ATTEMPTS: usize = 100;

/// Lower drawing bound of a fresh manual distribution.
pub const DEFAULT_MANUAL_MIN: f64 = -5.0;

/// Upper drawing bound of a fresh manual distribution.
pub const DEFAULT_MANUAL_MAX: f64 = 5.0;

/// Number of intervals used by `ManualDistribution::histogram_data` when none is given.
pub const DEFAULT_HISTOGRAM_GRID: usize = 50;

/// Sturges' rule coefficient (≈ 1 / log10(2)).
pub const STURGES_COEFFICIENT: f64 = 3.322;

/// Bin count used by the KL divergence estimator when none is given.
pub const DEFAULT_KL_BINS: usize = 20;

/// Size of a generated population in the simulation driver.
pub const POPULATION_SIZE: usize = 10_000;

/// Default number of observations per sub-sample.
pub const DEFAULT_SAMPLE_SIZE: usize = 30;

/// Default number of sub-samples drawn per simulation run.
pub const DEFAULT_NUM_SAMPLES: usize = 500;

/// Draws used to estimate the theoretical statistics of a drawn curve.
pub const THEORETICAL_SAMPLE_SIZE: usize = 5_000;

/// Pointer moves shorter than this (in distribution units) are dropped while drawing.
pub const STROKE_MIN_DISTANCE: f64 = 0.03;

/// Interpolated points inserted per distribution unit of stroke length.
pub const DEFAULT_STROKE_SMOOTHING: f64 = 5.0;

/// Poisson variates with a larger rate are drawn as a sum of chunks of this rate,
/// keeping `exp(-lambda)` clear of underflow.
pub const POISSON_CHUNK_LAMBDA: f64 = 500.0;

/// Uniform jitter applied around a bin centre when sampling a bin-drawn distribution.
pub const BIN_NOISE_WIDTH: f64 = 0.8;

/// Observations per rayon work item for parallel population generation.
#[cfg(feature = "parallel")]
pub const PARALLEL_CHUNK: usize = 1_024;
