// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Bin-Drawn Distributions** - *Bar Heights as Probabilities*
//!
//! A user sets bar heights; bin `i` covers `[i, i + 1)`. Sampling picks a bin
//! by cumulative probability and jitters uniformly around its centre.

use rand::Rng;

use crate::config::BIN_NOISE_WIDTH;

/// Scales heights to probabilities summing to 1.
///
/// Negative and non-finite heights count as zero. When every height is zero
/// the result is uniform. Empty input gives an empty vector.
pub fn normalize_bins(heights: &[f64]) -> Vec<f64> {
    if heights.is_empty() {
        return Vec::new();
    }
    let clean = |h: f64| if h.is_finite() && h > 0.0 { h } else { 0.0 };
    let sum: f64 = heights.iter().map(|&h| clean(h)).sum();
    if sum == 0.0 {
        let p = 1.0 / heights.len() as f64;
        return vec![p; heights.len()];
    }
    heights.iter().map(|&h| clean(h) / sum).collect()
}

/// Sampler over normalised bin probabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct BinnedDistribution {
    probabilities: Vec<f64>,
}

impl BinnedDistribution {
    pub fn new(heights: &[f64]) -> Self {
        BinnedDistribution {
            probabilities: normalize_bins(heights),
        }
    }

    #[inline]
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Index of the first bin whose cumulative probability reaches `u`.
    /// Rounding shortfalls select the last bin.
    fn select(&self, u: f64) -> usize {
        let mut cumulative = 0.0;
        for (i, &p) in self.probabilities.iter().enumerate() {
            cumulative += p;
            if u <= cumulative {
                return i;
            }
        }
        self.probabilities.len().saturating_sub(1)
    }

    /// `bin + 0.5 + (U − 0.5)·0.8`. Returns `0` when there are no bins.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.probabilities.is_empty() {
            return 0.0;
        }
        let bin = self.select(rng.random::<f64>());
        let noise = (rng.random::<f64>() - 0.5) * BIN_NOISE_WIDTH;
        bin as f64 + 0.5 + noise
    }

    pub fn generate_samples<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        (0..n).map(|_| self.sample(rng)).collect()
    }
}
