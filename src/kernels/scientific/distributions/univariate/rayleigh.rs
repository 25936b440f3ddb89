// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Rayleigh Distribution** - *Magnitude of a 2-D Gaussian Vector*

use rand::RngCore;

use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};
use crate::kernels::scientific::distributions::shared::sampler::uniform_open_closed;

const PARAMS: [ParamDescriptor; 1] = [ParamDescriptor::new(
    "scale",
    "Scale (σ)",
    "Mode of the distribution",
    1.0,
)
.with_min(0.1)
.with_max(50.0)
.with_step(0.1)];

/// Rayleigh distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rayleigh;

impl DistributionSampler for Rayleigh {
    fn key(&self) -> &'static str {
        "rayleigh"
    }

    fn name(&self) -> &'static str {
        "Rayleigh Distribution"
    }

    fn category(&self) -> Category {
        Category::Continuous
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    #[inline]
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        params.value(&PARAMS[0]) * (-2.0 * uniform_open_closed(rng).ln()).sqrt()
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        if x < 0.0 {
            return Some(0.0);
        }
        let s2 = params.value(&PARAMS[0]).powi(2);
        Some(x / s2 * (-(x * x) / (2.0 * s2)).exp())
    }

    fn cdf(&self, x: f64, params: &Params) -> Option<f64> {
        if x <= 0.0 {
            return Some(0.0);
        }
        let s2 = params.value(&PARAMS[0]).powi(2);
        Some(-(-(x * x) / (2.0 * s2)).exp_m1())
    }
}
