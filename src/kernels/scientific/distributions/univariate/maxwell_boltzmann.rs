// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Maxwell–Boltzmann Distribution** - *Speed of an Ideal-Gas Particle*

use rand::RngCore;

use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};
use crate::kernels::scientific::distributions::shared::constants::SQRT_2_OVER_PI;
use crate::kernels::scientific::distributions::shared::sampler::sample_standard_normal;

const PARAMS: [ParamDescriptor; 1] = [ParamDescriptor::new(
    "scale",
    "Scale (a)",
    "Scale parameter, √(kT/m)",
    1.0,
)
.with_min(0.1)
.with_max(50.0)
.with_step(0.1)];

/// Maxwell–Boltzmann distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxwellBoltzmann;

impl DistributionSampler for MaxwellBoltzmann {
    fn key(&self) -> &'static str {
        "maxwell_boltzmann"
    }

    fn name(&self) -> &'static str {
        "Maxwell-Boltzmann Distribution"
    }

    fn category(&self) -> Category {
        Category::Continuous
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    /// Norm of a 3-D standard normal vector, scaled by `a`.
    #[inline]
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        let x = sample_standard_normal(rng);
        let y = sample_standard_normal(rng);
        let z = sample_standard_normal(rng);
        params.value(&PARAMS[0]) * (x * x + y * y + z * z).sqrt()
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        if x < 0.0 {
            return Some(0.0);
        }
        let a = params.value(&PARAMS[0]);
        Some(SQRT_2_OVER_PI * x * x / (a * a * a) * (-x * x / (2.0 * a * a)).exp())
    }
}
