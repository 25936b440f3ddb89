// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Gamma Distribution** - *Shape-Scale Parameterisation*
//!
//! Sampling uses Marsaglia–Tsang (see [`sample_gamma`]); the density is
//! evaluated in log space through `ln_gamma`.

use rand::RngCore;

use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};
use crate::kernels::scientific::distributions::shared::sampler::sample_gamma;
use crate::kernels::scientific::distributions::shared::scalar::gamma_density;

const PARAMS: [ParamDescriptor; 2] = [
    ParamDescriptor::new("shape", "Shape (k)", "Shape parameter", 2.0)
        .with_min(0.1)
        .with_max(50.0)
        .with_step(0.1),
    ParamDescriptor::new("scale", "Scale (θ)", "Scale parameter", 1.0)
        .with_min(0.1)
        .with_max(50.0)
        .with_step(0.1),
];

/// Gamma distribution Γ(shape, scale).
#[derive(Debug, Clone, Copy, Default)]
pub struct Gamma;

impl DistributionSampler for Gamma {
    fn key(&self) -> &'static str {
        "gamma"
    }

    fn name(&self) -> &'static str {
        "Gamma Distribution"
    }

    fn category(&self) -> Category {
        Category::Continuous
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    #[inline]
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        sample_gamma(rng, params.value(&PARAMS[0]), params.value(&PARAMS[1]))
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        Some(gamma_density(
            x,
            params.value(&PARAMS[0]),
            params.value(&PARAMS[1]),
        ))
    }
}
