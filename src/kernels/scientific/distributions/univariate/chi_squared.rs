// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Chi-Squared Distribution** - *Sum of Squared Standard Normals*
//!
//! The sampling distribution of a scaled sample variance under normality.

use std::f64::consts::LN_2;

use rand::RngCore;

use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};
use crate::kernels::scientific::distributions::shared::sampler::sample_chi_squared;
use crate::kernels::scientific::distributions::shared::scalar::ln_gamma;

const PARAMS: [ParamDescriptor; 1] = [ParamDescriptor::new(
    "df",
    "Degrees of Freedom",
    "Number of squared standard normals summed",
    3.0,
)
.with_min(1.0)
.with_max(100.0)
.with_step(1.0)];

/// Chi-square density χ²(k) at `x`.
///
/// At `x = 0` the density is `∞` for `k < 2`, `½` for `k = 2` and `0` above.
#[inline]
pub fn chi_squared_density(x: f64, k: f64) -> f64 {
    if x < 0.0 {
        return 0.0;
    }
    let half = k / 2.0;
    if x == 0.0 {
        return if half < 1.0 {
            f64::INFINITY
        } else if half == 1.0 {
            0.5
        } else {
            0.0
        };
    }
    ((half - 1.0) * x.ln() - 0.5 * x - half * LN_2 - ln_gamma(half)).exp()
}

/// Chi-squared distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChiSquared;

impl DistributionSampler for ChiSquared {
    fn key(&self) -> &'static str {
        "chi_squared"
    }

    fn name(&self) -> &'static str {
        "Chi-Squared Distribution"
    }

    fn category(&self) -> Category {
        Category::Sampling
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    #[inline]
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        sample_chi_squared(rng, params.value(&PARAMS[0]))
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        Some(chi_squared_density(x, params.value(&PARAMS[0])))
    }
}
