// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Weibull Distribution** - *Lifetime and Failure-Time Modelling*

use rand::RngCore;

use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};
use crate::kernels::scientific::distributions::shared::sampler::uniform_open_closed;

const PARAMS: [ParamDescriptor; 2] = [
    ParamDescriptor::new("shape", "Shape (k)", "Shape parameter", 1.5)
        .with_min(0.1)
        .with_max(20.0)
        .with_step(0.1),
    ParamDescriptor::new("scale", "Scale (λ)", "Scale parameter", 1.0)
        .with_min(0.1)
        .with_max(50.0)
        .with_step(0.1),
];

/// Weibull distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct Weibull;

impl DistributionSampler for Weibull {
    fn key(&self) -> &'static str {
        "weibull"
    }

    fn name(&self) -> &'static str {
        "Weibull Distribution"
    }

    fn category(&self) -> Category {
        Category::Continuous
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    /// `λ(−ln U)^{1/k}`
    #[inline]
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        let k = params.value(&PARAMS[0]);
        let lambda = params.value(&PARAMS[1]);
        lambda * (-uniform_open_closed(rng).ln()).powf(1.0 / k)
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        if x < 0.0 {
            return Some(0.0);
        }
        let k = params.value(&PARAMS[0]);
        let lambda = params.value(&PARAMS[1]);
        let z = x / lambda;
        Some((k / lambda) * z.powf(k - 1.0) * (-z.powf(k)).exp())
    }

    fn cdf(&self, x: f64, params: &Params) -> Option<f64> {
        if x <= 0.0 {
            return Some(0.0);
        }
        let k = params.value(&PARAMS[0]);
        let lambda = params.value(&PARAMS[1]);
        Some(-(-(x / lambda).powf(k)).exp_m1())
    }
}

#[cfg(test)]
mod weibull_tests {
    use super::*;
    use crate::kernels::scientific::distributions::shared::sampler::Sampler;
    use crate::kernels::scientific::distributions::univariate::common::{
        assert_close, moments, simpson,
    };

    #[test]
    fn shape_one_is_exponential() {
        let p = Params::new().with("shape", 1.0).with("scale", 2.0);
        assert_close(Weibull.pdf(1.0, &p).unwrap(), 0.5 * (-0.5f64).exp(), 1e-15);
        assert_close(Weibull.cdf(2.0, &p).unwrap(), 1.0 - (-1.0f64).exp(), 1e-15);
        assert_eq!(Weibull.pdf(-0.5, &p), Some(0.0));
    }

    #[test]
    fn density_integrates_to_one() {
        let p = Params::new().with("shape", 2.5).with("scale", 1.5);
        let area = simpson(|x| Weibull.pdf(x, &p).unwrap(), 0.0, 10.0, 10_000);
        assert_close(area, 1.0, 1e-6);
    }

    #[test]
    fn sample_mean() {
        // shape 2, scale 1: mean Γ(1.5) = √π/2
        let p = Params::new().with("shape", 2.0);
        let mut rng = Sampler::seeded(44);
        let xs: Vec<f64> = (0..20_000).map(|_| Weibull.generate(&p, &mut rng)).collect();
        let (m, _) = moments(&xs);
        assert!((m - 0.886_226_925).abs() < 0.02, "mean {m}");
    }
}
