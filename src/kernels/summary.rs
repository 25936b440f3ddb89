// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Sample Summary** - *One-Shot Statistics Table*
//!
//! Bundles the descriptive and goodness-of-fit statistics shown for a sample.

use rand::Rng;

use crate::config::{DEFAULT_KL_BINS, THEORETICAL_SAMPLE_SIZE};
use crate::kernels::aggregate::{kurtosis, mean, skewness, std_dev, variance};
use crate::kernels::scientific::distributions::manual::ManualDistribution;
use crate::kernels::scientific::goodness_of_fit::{kl_divergence, ks_statistic};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SampleStatistics {
    pub count: usize,
    pub mean: f64,
    pub variance: f64,
    pub sd: f64,
    pub skewness: f64,
    pub kurtosis: f64,
    /// Kolmogorov–Smirnov distance to the fitted normal.
    pub ks: f64,
    /// KL divergence to the fitted normal over 20 bins.
    pub kl: f64,
}

impl SampleStatistics {
    pub fn compute(data: &[f64]) -> Self {
        SampleStatistics {
            count: data.len(),
            mean: mean(data),
            variance: variance(data, false),
            sd: std_dev(data),
            skewness: skewness(data),
            kurtosis: kurtosis(data),
            ks: ks_statistic(data),
            kl: kl_divergence(data, DEFAULT_KL_BINS),
        }
    }

    /// Statistics of a large draw from a drawn curve, standing in for its
    /// theoretical values. `None` below two points.
    pub fn theoretical<R: Rng + ?Sized>(
        dist: &mut ManualDistribution,
        rng: &mut R,
    ) -> Option<Self> {
        if dist.len() < 2 {
            return None;
        }
        let xs = dist.generate_samples(THEORETICAL_SAMPLE_SIZE, rng);
        Some(Self::compute(&xs))
    }
}
