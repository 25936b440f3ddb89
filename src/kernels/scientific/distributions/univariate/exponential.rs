// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Exponential Distribution** - *Inter-Arrival Times*

use rand::RngCore;

use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};
use crate::kernels::scientific::distributions::shared::sampler::uniform_open_closed;

const PARAMS: [ParamDescriptor; 1] = [ParamDescriptor::new(
    "lambda",
    "Rate",
    "Rate parameter (inverse of the mean)",
    1.0,
)
.with_min(0.01)
.with_max(100.0)
.with_step(0.1)];

/// Exponential distribution with rate λ.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exponential;

impl DistributionSampler for Exponential {
    fn key(&self) -> &'static str {
        "exponential"
    }

    fn name(&self) -> &'static str {
        "Exponential Distribution"
    }

    fn category(&self) -> Category {
        Category::Continuous
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    /// Inverse transform: `−ln U / λ`.
    #[inline]
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        -uniform_open_closed(rng).ln() / params.value(&PARAMS[0])
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        let lambda = params.value(&PARAMS[0]);
        Some(if x >= 0.0 { lambda * (-lambda * x).exp() } else { 0.0 })
    }

    fn cdf(&self, x: f64, params: &Params) -> Option<f64> {
        let lambda = params.value(&PARAMS[0]);
        Some(if x > 0.0 { -(-lambda * x).exp_m1() } else { 0.0 })
    }
}

#[cfg(test)]
mod exponential_tests {
    use super::*;
    use crate::kernels::scientific::distributions::shared::sampler::Sampler;
    use crate::kernels::scientific::distributions::univariate::common::{
        assert_close, moments, simpson,
    };

    #[test]
    fn pdf_and_cdf_values() {
        let p = Params::new().with("lambda", 2.0);
        assert_close(Exponential.pdf(0.0, &p).unwrap(), 2.0, 1e-15);
        assert_eq!(Exponential.pdf(-0.1, &p), Some(0.0));
        assert_close(Exponential.cdf(1.0, &p).unwrap(), 1.0 - (-2.0f64).exp(), 1e-15);
        let area = simpson(|x| Exponential.pdf(x, &p).unwrap(), 0.0, 30.0, 6_000);
        assert_close(area, 1.0, 1e-8);
    }

    #[test]
    fn sample_mean_is_inverse_rate() {
        let p = Params::new().with("lambda", 0.5);
        let mut rng = Sampler::seeded(31);
        let xs: Vec<f64> = (0..20_000).map(|_| Exponential.generate(&p, &mut rng)).collect();
        assert!(xs.iter().all(|&x| x >= 0.0 && x.is_finite()));
        let (m, _) = moments(&xs);
        assert!((m - 2.0).abs() < 0.1, "mean {m}");
    }
}
