// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Logistic Distribution** - *Sigmoid CDF*

use rand::RngCore;

use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};
use crate::kernels::scientific::distributions::shared::sampler::uniform_open;

const PARAMS: [ParamDescriptor; 2] = [
    ParamDescriptor::new("location", "Location (μ)", "Mean, median and mode", 0.0)
        .with_min(-100.0)
        .with_max(100.0)
        .with_step(0.1),
    ParamDescriptor::new("scale", "Scale (s)", "Spread parameter", 1.0)
        .with_min(0.01)
        .with_max(100.0)
        .with_step(0.1),
];

/// Logistic distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct Logistic;

impl DistributionSampler for Logistic {
    fn key(&self) -> &'static str {
        "logistic"
    }

    fn name(&self) -> &'static str {
        "Logistic Distribution"
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
        let s = params.value(&PARAMS[1]);
        let u = uniform_open(rng);
        mu + s * (u / (1.0 - u)).ln()
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        let mu = params.value(&PARAMS[0]);
        let s = params.value(&PARAMS[1]);
        // symmetric in z; e^{-|z|} keeps the tails from overflowing
        let e = (-((x - mu) / s).abs()).exp();
        Some(e / (s * (1.0 + e) * (1.0 + e)))
    }

    fn cdf(&self, x: f64, params: &Params) -> Option<f64> {
        let mu = params.value(&PARAMS[0]);
        let s = params.value(&PARAMS[1]);
        Some(1.0 / (1.0 + (-(x - mu) / s).exp()))
    }
}

#[cfg(test)]
mod logistic_tests {
    use super::*;
    use crate::kernels::scientific::distributions::shared::sampler::Sampler;
    use crate::kernels::scientific::distributions::univariate::common::{
        assert_close, moments, simpson,
    };

    #[test]
    fn density_and_cdf() {
        let p = Params::new().with("scale", 2.0);
        assert_close(Logistic.pdf(0.0, &p).unwrap(), 0.125, 1e-15);
        assert_close(Logistic.cdf(0.0, &p).unwrap(), 0.5, 1e-15);
        assert!(Logistic.pdf(-1e6, &p).unwrap() >= 0.0);
        let area = simpson(|x| Logistic.pdf(x, &p).unwrap(), -80.0, 80.0, 16_000);
        assert_close(area, 1.0, 1e-9);
    }

    #[test]
    fn sample_variance() {
        // variance s²π²/3
        let p = Params::new();
        let mut rng = Sampler::seeded(29);
        let xs: Vec<f64> = (0..20_000).map(|_| Logistic.generate(&p, &mut rng)).collect();
        let (m, v) = moments(&xs);
        assert!(m.abs() < 0.06, "mean {m}");
        assert!((v - std::f64::consts::PI.powi(2) / 3.0).abs() < 0.2, "variance {v}");
    }
}
