// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Laplace Distribution** - *Double Exponential*

use rand::RngCore;

use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};
use crate::kernels::scientific::distributions::shared::sampler::uniform_open;

const PARAMS: [ParamDescriptor; 2] = [
    ParamDescriptor::new("location", "Location", "Centre of the distribution", 0.0)
        .with_min(-100.0)
        .with_max(100.0)
        .with_step(0.1),
    ParamDescriptor::new("scale", "Scale", "Diversity (b)", 1.0)
        .with_min(0.01)
        .with_max(100.0)
        .with_step(0.1),
];

/// Laplace distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct Laplace;

impl DistributionSampler for Laplace {
    fn key(&self) -> &'static str {
        "laplace"
    }

    fn name(&self) -> &'static str {
        "Laplace Distribution"
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
        let b = params.value(&PARAMS[1]);
        let u = uniform_open(rng) - 0.5;
        mu - b * u.signum() * (1.0 - 2.0 * u.abs()).ln()
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        let mu = params.value(&PARAMS[0]);
        let b = params.value(&PARAMS[1]);
        Some((-(x - mu).abs() / b).exp() / (2.0 * b))
    }

    fn cdf(&self, x: f64, params: &Params) -> Option<f64> {
        let mu = params.value(&PARAMS[0]);
        let b = params.value(&PARAMS[1]);
        let z = (x - mu) / b;
        Some(if z < 0.0 {
            0.5 * z.exp()
        } else {
            1.0 - 0.5 * (-z).exp()
        })
    }
}

#[cfg(test)]
mod laplace_tests {
    use super::*;
    use crate::kernels::scientific::distributions::shared::sampler::Sampler;
    use crate::kernels::scientific::distributions::univariate::common::{
        assert_close, moments, simpson,
    };

    #[test]
    fn density_and_cdf() {
        let p = Params::new().with("location", 1.0).with("scale", 2.0);
        assert_close(Laplace.pdf(1.0, &p).unwrap(), 0.25, 1e-15);
        assert_close(Laplace.cdf(1.0, &p).unwrap(), 0.5, 1e-15);
        let area = simpson(|x| Laplace.pdf(x, &p).unwrap(), -59.0, 61.0, 24_000);
        assert_close(area, 1.0, 1e-6);
    }

    #[test]
    fn sample_variance_is_two_b_squared() {
        let p = Params::new().with("scale", 1.5);
        let mut rng = Sampler::seeded(8);
        let xs: Vec<f64> = (0..20_000).map(|_| Laplace.generate(&p, &mut rng)).collect();
        assert!(xs.iter().all(|x| x.is_finite()));
        let (m, v) = moments(&xs);
        assert!(m.abs() < 0.06, "mean {m}");
        assert!((v - 4.5).abs() < 0.35, "variance {v}");
    }
}
