// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Geometric Distribution** - *Failures Before the First Success*
//!
//! Support is `{0, 1, 2, …}`.

use rand::RngCore;

use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};
use crate::kernels::scientific::distributions::shared::sampler::uniform_open_closed;
use crate::kernels::scientific::distributions::univariate::common::support_index;

const PARAMS: [ParamDescriptor; 1] = [ParamDescriptor::new(
    "p",
    "Success Probability",
    "Probability of success per trial",
    0.5,
)
.with_min(0.01)
.with_max(1.0)
.with_step(0.01)];

/// Geometric distribution counting failures.
#[derive(Debug, Clone, Copy, Default)]
pub struct Geometric;

impl DistributionSampler for Geometric {
    fn key(&self) -> &'static str {
        "geometric"
    }

    fn name(&self) -> &'static str {
        "Geometric Distribution"
    }

    fn category(&self) -> Category {
        Category::Discrete
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    /// `⌊ln U / ln(1 − p)⌋`
    #[inline]
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        let p = params.value(&PARAMS[0]);
        (uniform_open_closed(rng).ln() / (1.0 - p).ln()).floor()
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        let p = params.value(&PARAMS[0]);
        Some(match support_index(x) {
            Some(k) => p * (1.0 - p).powf(k as f64),
            None => 0.0,
        })
    }

    fn cdf(&self, x: f64, params: &Params) -> Option<f64> {
        if x < 0.0 {
            return Some(0.0);
        }
        let p = params.value(&PARAMS[0]);
        Some(1.0 - (1.0 - p).powf(x.floor() + 1.0))
    }
}
