// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Inverse Gaussian Distribution** - *Wald First-Passage Times*
//!
//! Sampled with the Michael–Schucany–Haas transformation-with-rejection method.

use std::f64::consts::PI;

use rand::{Rng, RngCore};

use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};
use crate::kernels::scientific::distributions::shared::sampler::sample_standard_normal;

const PARAMS: [ParamDescriptor; 2] = [
    ParamDescriptor::new("mu", "Mean (μ)", "Mean of the distribution", 1.0)
        .with_min(0.1)
        .with_max(50.0)
        .with_step(0.1),
    ParamDescriptor::new("lambda", "Shape (λ)", "Shape parameter", 1.0)
        .with_min(0.1)
        .with_max(50.0)
        .with_step(0.1),
];

/// Inverse Gaussian (Wald) distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct InverseGaussian;

impl DistributionSampler for InverseGaussian {
    fn key(&self) -> &'static str {
        "inverse_gaussian"
    }

    fn name(&self) -> &'static str {
        "Inverse Gaussian Distribution"
    }

    fn category(&self) -> Category {
        Category::Continuous
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    #[inline]
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        let mu = params.value(&PARAMS[0]);
        let lambda = params.value(&PARAMS[1]);
        let v = sample_standard_normal(rng);
        let y = v * v;
        let x = mu + (mu * mu * y) / (2.0 * lambda)
            - (mu / (2.0 * lambda)) * (4.0 * mu * lambda * y + mu * mu * y * y).sqrt();
        if rng.random::<f64>() <= mu / (mu + x) {
            x
        } else {
            mu * mu / x
        }
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        if x <= 0.0 {
            return Some(0.0);
        }
        let mu = params.value(&PARAMS[0]);
        let lambda = params.value(&PARAMS[1]);
        let d = x - mu;
        Some((lambda / (2.0 * PI * x * x * x)).sqrt() * (-lambda * d * d / (2.0 * mu * mu * x)).exp())
    }
}
