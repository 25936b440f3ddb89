// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Poisson Distribution** - *Event Counts at a Constant Rate*
//!
//! Sampling uses Knuth's product-of-uniforms loop. Large rates are split into
//! chunks of [`POISSON_CHUNK_LAMBDA`], exploiting additivity of independent
//! Poisson variates, so `exp(−λ)` never underflows to zero.

use rand::{Rng, RngCore};

use crate::config::POISSON_CHUNK_LAMBDA;
use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};
use crate::kernels::scientific::distributions::shared::scalar::ln_gamma;
use crate::kernels::scientific::distributions::univariate::common::support_index;

const PARAMS: [ParamDescriptor; 1] = [ParamDescriptor::new(
    "lambda",
    "Rate (λ)",
    "Expected number of events",
    4.0,
)
.with_min(0.0)
.with_max(1000.0)
.with_step(0.1)];

#[inline(always)]
fn knuth<R: Rng + ?Sized>(rng: &mut R, lambda: f64) -> u64 {
    let limit = (-lambda).exp();
    let mut k = 0u64;
    let mut prod = 1.0;
    loop {
        k += 1;
        prod *= rng.random::<f64>();
        if prod <= limit {
            return k - 1;
        }
    }
}

/// Poisson distribution with rate λ.
#[derive(Debug, Clone, Copy, Default)]
pub struct Poisson;

impl DistributionSampler for Poisson {
    fn key(&self) -> &'static str {
        "poisson"
    }

    fn name(&self) -> &'static str {
        "Poisson Distribution"
    }

    fn category(&self) -> Category {
        Category::Discrete
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    #[inline]
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        let lambda = params.value(&PARAMS[0]);
        if !lambda.is_finite() {
            return lambda;
        }
        let mut remaining = lambda;
        let mut total = 0u64;
        while remaining > POISSON_CHUNK_LAMBDA {
            total += knuth(rng, POISSON_CHUNK_LAMBDA);
            remaining -= POISSON_CHUNK_LAMBDA;
        }
        (total + knuth(rng, remaining)) as f64
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        let lambda = params.value(&PARAMS[0]);
        let Some(k) = support_index(x) else {
            return Some(0.0);
        };
        if lambda == 0.0 {
            return Some(if k == 0 { 1.0 } else { 0.0 });
        }
        let k = k as f64;
        Some((k * lambda.ln() - lambda - ln_gamma(k + 1.0)).exp())
    }
}

#[cfg(test)]
mod poisson_tests {
    use super::*;
    use crate::kernels::scientific::distributions::shared::sampler::Sampler;
    use crate::kernels::scientific::distributions::univariate::common::{
        assert_close, moments, pmf_total,
    };

    #[test]
    fn mass_function() {
        let p = Params::new().with("lambda", 4.0);
        assert_close(Poisson.pdf(0.0, &p).unwrap(), (-4.0f64).exp(), 1e-14);
        assert_close(Poisson.pdf(2.0, &p).unwrap(), 8.0 * (-4.0f64).exp(), 1e-12);
        assert_eq!(Poisson.pdf(1.5, &p), Some(0.0));
        assert_eq!(Poisson.pdf(-2.0, &p), Some(0.0));
        assert_close(pmf_total(|k| Poisson.pdf(k, &p).unwrap(), 60), 1.0, 1e-10);
    }

    #[test]
    fn zero_rate_is_point_mass() {
        let p = Params::new().with("lambda", 0.0);
        assert_eq!(Poisson.pdf(0.0, &p), Some(1.0));
        assert_eq!(Poisson.pdf(1.0, &p), Some(0.0));
        let mut rng = Sampler::seeded(1);
        assert_eq!(Poisson.generate(&p, &mut rng), 0.0);
    }

    #[test]
    fn sample_moments_small_rate() {
        let p = Params::new().with("lambda", 4.0);
        let mut rng = Sampler::seeded(55);
        let xs: Vec<f64> = (0..20_000).map(|_| Poisson.generate(&p, &mut rng)).collect();
        let (m, v) = moments(&xs);
        assert!((m - 4.0).abs() < 0.08, "mean {m}");
        assert!((v - 4.0).abs() < 0.25, "variance {v}");
    }

    #[test]
    fn large_rate_uses_chunks() {
        let p = Params::new().with("lambda", 1_200.0);
        let mut rng = Sampler::seeded(56);
        let xs: Vec<f64> = (0..2_000).map(|_| Poisson.generate(&p, &mut rng)).collect();
        let (m, _) = moments(&xs);
        // sd of the mean ≈ √1200 / √2000 ≈ 0.77
        assert!((m - 1_200.0).abs() < 4.0, "mean {m}");
    }
}
