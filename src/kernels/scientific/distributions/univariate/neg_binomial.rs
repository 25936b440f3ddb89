// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Negative Binomial Distribution** - *Failures Before `r` Successes*

use rand::{Rng, RngCore};

use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};
use crate::kernels::scientific::distributions::shared::scalar::ln_gamma;
use crate::kernels::scientific::distributions::univariate::common::support_index;
use crate::utils::loop_count;

const PARAMS: [ParamDescriptor; 2] = [
    ParamDescriptor::new("r", "Successes (r)", "Number of successes to wait for", 5.0)
        .with_min(1.0)
        .with_max(100.0)
        .with_step(1.0),
    ParamDescriptor::new("p", "Success Probability", "Probability of success per trial", 0.5)
        .with_min(0.01)
        .with_max(1.0)
        .with_step(0.01),
];

/// Negative binomial distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct NegativeBinomial;

impl DistributionSampler for NegativeBinomial {
    fn key(&self) -> &'static str {
        "negative_binomial"
    }

    fn name(&self) -> &'static str {
        "Negative Binomial Distribution"
    }

    fn category(&self) -> Category {
        Category::Discrete
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    /// Runs Bernoulli trials until `⌈r⌉` successes, counting failures.
    /// `p <= 0` never succeeds and yields `+∞`.
    #[inline]
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        let r = loop_count(params.value(&PARAMS[0]));
        let p = params.value(&PARAMS[1]);
        if p.is_nan() {
            return f64::NAN;
        }
        if p <= 0.0 && r > 0 {
            return f64::INFINITY;
        }
        let mut successes = 0u64;
        let mut failures = 0u64;
        while successes < r {
            if rng.random::<f64>() < p {
                successes += 1;
            } else {
                failures += 1;
            }
        }
        failures as f64
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        let r = params.value(&PARAMS[0]);
        let p = params.value(&PARAMS[1]);
        let Some(k) = support_index(x) else {
            return Some(0.0);
        };
        let k = k as f64;
        let coeff = (ln_gamma(k + r) - ln_gamma(k + 1.0) - ln_gamma(r)).exp();
        Some(coeff * p.powf(r) * (1.0 - p).powf(k))
    }
}
