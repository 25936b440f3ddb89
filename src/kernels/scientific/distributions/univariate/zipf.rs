// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Zipf Distribution** - *Rank-Frequency Law on `{1, …, N}`*

use rand::{Rng, RngCore};

use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};
use crate::kernels::scientific::distributions::univariate::common::support_index;
use crate::utils::count_param;

const PARAMS: [ParamDescriptor; 2] = [
    ParamDescriptor::new("s", "Exponent (s)", "Power-law exponent", 1.5)
        .with_min(0.0)
        .with_max(10.0)
        .with_step(0.1),
    ParamDescriptor::new("N", "Elements (N)", "Number of ranks", 10.0)
        .with_min(1.0)
        .with_max(10_000.0)
        .with_step(1.0),
];

/// Generalised harmonic number `H_{N,s} = Σ_{k=1}^{N} k^{−s}`.
#[inline]
fn harmonic(n: u64, s: f64) -> f64 {
    (1..=n).map(|k| (k as f64).powf(-s)).sum()
}

/// Zipf distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zipf;

impl DistributionSampler for Zipf {
    fn key(&self) -> &'static str {
        "zipf"
    }

    fn name(&self) -> &'static str {
        "Zipf Distribution"
    }

    fn category(&self) -> Category {
        Category::Discrete
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    /// Inverse CDF over the weights `k^{−s}`. `N < 1` yields `NaN`.
    #[inline]
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        let s = params.value(&PARAMS[0]);
        let n = count_param(params.value(&PARAMS[1]));
        if n == 0 {
            return f64::NAN;
        }
        let target = rng.random::<f64>() * harmonic(n, s);
        let mut cum = 0.0;
        for k in 1..=n {
            cum += (k as f64).powf(-s);
            if cum >= target {
                return k as f64;
            }
        }
        n as f64
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        let s = params.value(&PARAMS[0]);
        let n = count_param(params.value(&PARAMS[1]));
        Some(match support_index(x) {
            Some(k) if k >= 1 && k <= n => (k as f64).powf(-s) / harmonic(n, s),
            _ => 0.0,
        })
    }
}
