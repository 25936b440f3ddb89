// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Normal Distribution** - *Gaussian Sampling and Density*
//!
//! Box–Muller sampling, closed-form density and the erf-based CDF.

use rand::RngCore;

use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};
use crate::kernels::scientific::distributions::shared::sampler::sample_standard_normal;
use crate::kernels::scientific::distributions::shared::scalar::{
    normal_cdf_scalar, normal_pdf_scalar,
};

const PARAMS: [ParamDescriptor; 2] = [
    ParamDescriptor::new("mean", "Mean", "Centre of the distribution", 0.0)
        .with_min(-100.0)
        .with_max(100.0)
        .with_step(0.1),
    ParamDescriptor::new("sd", "Standard Deviation", "Spread around the mean", 1.0)
        .with_min(0.01)
        .with_max(100.0)
        .with_step(0.1),
];

/// Normal distribution N(mean, sd²).
#[derive(Debug, Clone, Copy, Default)]
pub struct Normal;

impl DistributionSampler for Normal {
    fn key(&self) -> &'static str {
        "normal"
    }

    fn name(&self) -> &'static str {
        "Normal Distribution"
    }

    fn category(&self) -> Category {
        Category::Continuous
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    #[inline]
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        let mean = params.value(&PARAMS[0]);
        let sd = params.value(&PARAMS[1]);
        sample_standard_normal(rng) * sd + mean
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        Some(normal_pdf_scalar(
            x,
            params.value(&PARAMS[0]),
            params.value(&PARAMS[1]),
        ))
    }

    fn cdf(&self, x: f64, params: &Params) -> Option<f64> {
        Some(normal_cdf_scalar(
            x,
            params.value(&PARAMS[0]),
            params.value(&PARAMS[1]),
        ))
    }
}
