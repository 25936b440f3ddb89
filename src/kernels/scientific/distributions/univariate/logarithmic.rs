// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Logarithmic Distribution** - *Log-Series on `{1, 2, …}`*

use rand::{Rng, RngCore};

use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};
use crate::kernels::scientific::distributions::univariate::common::support_index;

const PARAMS: [ParamDescriptor; 1] = [ParamDescriptor::new(
    "p",
    "Probability",
    "Shape parameter in (0, 1)",
    0.5,
)
.with_min(0.01)
.with_max(0.99)
.with_step(0.01)];

/// Logarithmic (log-series) distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct Logarithmic;

impl DistributionSampler for Logarithmic {
    fn key(&self) -> &'static str {
        "logarithmic"
    }

    fn name(&self) -> &'static str {
        "Logarithmic Distribution"
    }

    fn category(&self) -> Category {
        Category::Discrete
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    /// Inverse-CDF walk using `P(k+1) = P(k)·p·k/(k+1)`. `p ∉ (0, 1)` yields `NaN`.
    #[inline]
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        let p = params.value(&PARAMS[0]);
        if !(p > 0.0 && p < 1.0) {
            return f64::NAN;
        }
        let u = rng.random::<f64>();
        let mut k = 1.0;
        let mut prob = -p / (1.0 - p).ln();
        let mut cum = prob;
        // stops once the remaining mass underflows
        while u > cum && prob > 0.0 {
            prob *= p * k / (k + 1.0);
            k += 1.0;
            cum += prob;
        }
        k
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        let p = params.value(&PARAMS[0]);
        Some(match support_index(x) {
            Some(k) if k >= 1 => {
                let k = k as f64;
                -p.powf(k) / (k * (1.0 - p).ln())
            }
            _ => 0.0,
        })
    }
}
