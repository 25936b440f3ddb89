// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Log-Normal Distribution** - *Exponentiated Gaussian*

use std::f64::consts::PI;

use rand::RngCore;

use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};
use crate::kernels::scientific::distributions::shared::sampler::sample_standard_normal;
use crate::kernels::scientific::distributions::shared::scalar::normal_cdf_scalar;

const PARAMS: [ParamDescriptor; 2] = [
    ParamDescriptor::new("mu", "Log Mean", "Mean of the underlying normal", 0.0)
        .with_min(-10.0)
        .with_max(10.0)
        .with_step(0.1),
    ParamDescriptor::new("sigma", "Log SD", "Standard deviation of the underlying normal", 1.0)
        .with_min(0.01)
        .with_max(10.0)
        .with_step(0.1),
];

/// Log-normal distribution: `exp(N(mu, sigma²))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNormal;

impl DistributionSampler for LogNormal {
    fn key(&self) -> &'static str {
        "log_normal"
    }

    fn name(&self) -> &'static str {
        "Log-Normal Distribution"
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
        let sigma = params.value(&PARAMS[1]);
        (mu + sigma * sample_standard_normal(rng)).exp()
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        if x <= 0.0 {
            return Some(0.0);
        }
        let mu = params.value(&PARAMS[0]);
        let sigma = params.value(&PARAMS[1]);
        let z = (x.ln() - mu) / sigma;
        Some((-0.5 * z * z).exp() / (x * sigma * (2.0 * PI).sqrt()))
    }

    fn cdf(&self, x: f64, params: &Params) -> Option<f64> {
        if x <= 0.0 {
            return Some(0.0);
        }
        Some(normal_cdf_scalar(
            x.ln(),
            params.value(&PARAMS[0]),
            params.value(&PARAMS[1]),
        ))
    }
}
