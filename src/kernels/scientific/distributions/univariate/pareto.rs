// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Pareto Distribution** - *Power-Law Tail above `x_m`*
//!
//! For shape α ≤ 2 the variance is infinite, and for α ≤ 1 the mean is too,
//! so sample means converge slowly or not at all.

use rand::RngCore;

use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};
use crate::kernels::scientific::distributions::shared::sampler::uniform_open_closed;

const PARAMS: [ParamDescriptor; 2] = [
    ParamDescriptor::new("scale", "Scale (x_m)", "Minimum possible value", 1.0)
        .with_min(0.1)
        .with_max(50.0)
        .with_step(0.1),
    ParamDescriptor::new("shape", "Shape (α)", "Tail index", 3.0)
        .with_min(0.1)
        .with_max(20.0)
        .with_step(0.1),
];

/// Pareto (type I) distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pareto;

impl DistributionSampler for Pareto {
    fn key(&self) -> &'static str {
        "pareto"
    }

    fn name(&self) -> &'static str {
        "Pareto Distribution"
    }

    fn category(&self) -> Category {
        Category::Continuous
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    #[inline]
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        let xm = params.value(&PARAMS[0]);
        let alpha = params.value(&PARAMS[1]);
        xm / uniform_open_closed(rng).powf(1.0 / alpha)
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        let xm = params.value(&PARAMS[0]);
        let alpha = params.value(&PARAMS[1]);
        if x < xm {
            return Some(0.0);
        }
        Some(alpha * xm.powf(alpha) / x.powf(alpha + 1.0))
    }

    fn cdf(&self, x: f64, params: &Params) -> Option<f64> {
        let xm = params.value(&PARAMS[0]);
        let alpha = params.value(&PARAMS[1]);
        if x < xm {
            return Some(0.0);
        }
        Some(1.0 - (xm / x).powf(alpha))
    }
}

#[cfg(test)]
mod pareto_tests {
    use super::*;
    use crate::kernels::scientific::distributions::shared::sampler::Sampler;
    use crate::kernels::scientific::distributions::univariate::common::{assert_close, simpson};

    #[test]
    fn density_and_cdf() {
        let p = Params::new().with("scale", 2.0).with("shape", 3.0);
        assert_eq!(Pareto.pdf(1.9, &p), Some(0.0));
        assert_close(Pareto.pdf(2.0, &p).unwrap(), 1.5, 1e-15);
        assert_close(Pareto.cdf(4.0, &p).unwrap(), 0.875, 1e-15);
        let area = simpson(|x| Pareto.pdf(x, &p).unwrap(), 2.0, 40.0, 20_000);
        assert_close(area, Pareto.cdf(40.0, &p).unwrap(), 1e-8);
    }

    #[test]
    fn samples_respect_scale() {
        let p = Params::new().with("scale", 2.0);
        let mut rng = Sampler::seeded(17);
        for _ in 0..5_000 {
            assert!(Pareto.generate(&p, &mut rng) >= 2.0);
        }
    }
}
