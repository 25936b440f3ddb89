// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Statistical Sampling Module** - *Seeded Pseudorandom Variate Generation*
//!
//! Uniform, normal, gamma and chi-squared variate kernels that every catalog
//! distribution is composed from, plus [`Sampler`], an owned seeded generator
//! that can be threaded through every sampling call.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::f64::consts::PI;

use crate::kernels::scientific::distributions::registry::{DistributionSampler, Params};
use crate::utils::loop_count;

/// Owned pseudorandom source for sampling calls.
///
/// `Sampler::seeded` gives reproducible streams; `Sampler::new` seeds from the OS.
/// Implements [`RngCore`], so a `&mut Sampler` can be passed anywhere a
/// `&mut dyn RngCore` is expected.
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// Creates a sampler seeded from operating-system entropy.
    #[inline]
    pub fn new() -> Self {
        Sampler {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible sampler from a 64-bit seed.
    #[inline]
    pub fn seeded(seed: u64) -> Self {
        Sampler {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform draw in `[0, 1)`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Generates a single sample from the standard normal distribution N(0, 1).
    #[inline]
    pub fn standard_normal(&mut self) -> f64 {
        sample_standard_normal(&mut self.rng)
    }

    /// Gamma(shape, scale).
    #[inline]
    pub fn gamma(&mut self, shape: f64, scale: f64) -> f64 {
        sample_gamma(&mut self.rng, shape, scale)
    }

    /// Chi-square(df) as a sum of squared standard normals.
    #[inline]
    pub fn chi2(&mut self, df: f64) -> f64 {
        sample_chi_squared(&mut self.rng, df)
    }

    /// Draws one variate from a catalog distribution.
    #[inline]
    pub fn draw(&mut self, dist: &dyn DistributionSampler, params: &Params) -> f64 {
        dist.generate(params, self)
    }

    /// Draws `n` independent variates from a catalog distribution.
    pub fn draw_n(&mut self, dist: &dyn DistributionSampler, params: &Params, n: usize) -> Vec<f64> {
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            out.push(dist.generate(params, self));
        }
        out
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for Sampler {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst)
    }
}

/// Uniform draw in `(0, 1]`, safe to pass to `ln`.
#[inline(always)]
pub fn uniform_open_closed<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    1.0 - rng.random::<f64>()
}

/// Uniform draw in the open interval `(0, 1)`.
#[inline(always)]
pub fn uniform_open<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let u = rng.random::<f64>();
        if u > 0.0 {
            return u;
        }
    }
}

// Box–Muller to get one N(0,1)
/// Generates a single sample from the standard normal distribution N(0,1).
#[inline]
pub fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // U1 ∈ (0,1], U2 ∈ [0,1)
    let u1 = uniform_open_closed(rng);
    let u2: f64 = rng.random::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Generates a single sample from the Gamma distribution using the Marsaglia–Tsang algorithm.
///
/// `0 < shape < 1` is boosted to `shape + 1` and corrected by `U^(1/shape)`.
/// Non-positive or NaN shape yields `NaN`.
#[inline]
pub fn sample_gamma<R: Rng + ?Sized>(rng: &mut R, shape: f64, scale: f64) -> f64 {
    if !(shape > 0.0) {
        return f64::NAN;
    }
    if shape < 1.0 {
        let u = uniform_open_closed(rng);
        return sample_gamma(rng, shape + 1.0, scale) * u.powf(1.0 / shape);
    }

    let d = shape - 1.0 / 3.0;
    let c = 1.0 / (9.0 * d).sqrt();

    loop {
        let x = sample_standard_normal(rng);
        let one_plus_cx = 1.0 + c * x;
        if one_plus_cx <= 0.0 {
            continue;
        }
        let v = one_plus_cx * one_plus_cx * one_plus_cx; // (1 + c x)^3
        let u = uniform_open_closed(rng);

        // Squeeze step
        if u <= 1.0 - 0.331 * (x * x) * (x * x) {
            return scale * d * v;
        }
        // Log acceptance step
        if u.ln() <= 0.5 * x * x + d * (1.0 - v + v.ln()) {
            return scale * d * v;
        }
    }
}

/// Chi-square(df) as the sum of `⌈df⌉` squared standard normals.
#[inline]
pub fn sample_chi_squared<R: Rng + ?Sized>(rng: &mut R, df: f64) -> f64 {
    let mut sum = 0.0;
    for _ in 0..loop_count(df) {
        let z = sample_standard_normal(rng);
        sum += z * z;
    }
    sum
}
