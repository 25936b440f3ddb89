// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Bernoulli Distribution** - *Single Trial*

use rand::{Rng, RngCore};

use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};

const PARAMS: [ParamDescriptor; 1] = [ParamDescriptor::new(
    "p",
    "Success Probability",
    "Probability of drawing 1",
    0.5,
)
.with_min(0.0)
.with_max(1.0)
.with_step(0.01)];

/// Bernoulli distribution on `{0, 1}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bernoulli;

impl DistributionSampler for Bernoulli {
    fn key(&self) -> &'static str {
        "bernoulli"
    }

    fn name(&self) -> &'static str {
        "Bernoulli Distribution"
    }

    fn category(&self) -> Category {
        Category::Discrete
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    #[inline]
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        if rng.random::<f64>() < params.value(&PARAMS[0]) {
            1.0
        } else {
            0.0
        }
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        let p = params.value(&PARAMS[0]);
        Some(if x == 0.0 {
            1.0 - p
        } else if x == 1.0 {
            p
        } else {
            0.0
        })
    }

    fn cdf(&self, x: f64, params: &Params) -> Option<f64> {
        let p = params.value(&PARAMS[0]);
        Some(if x < 0.0 {
            0.0
        } else if x < 1.0 {
            1.0 - p
        } else {
            1.0
        })
    }
}
