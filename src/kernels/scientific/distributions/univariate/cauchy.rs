// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Cauchy Distribution** - *Heavy-Tailed Location-Scale Family*
//!
//! The Cauchy distribution has no mean or variance, which makes it the standard
//! counter-example for the Central Limit Theorem: averages of Cauchy samples are
//! themselves Cauchy distributed.

use std::f64::consts::PI;

use rand::{Rng, RngCore};

use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};

const PARAMS: [ParamDescriptor; 2] = [
    ParamDescriptor::new("location", "Location", "Median and mode", 0.0)
        .with_min(-100.0)
        .with_max(100.0)
        .with_step(0.1),
    ParamDescriptor::new("scale", "Scale", "Half width at half maximum", 1.0)
        .with_min(0.01)
        .with_max(100.0)
        .with_step(0.1),
];

/// Cauchy distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cauchy;

impl DistributionSampler for Cauchy {
    fn key(&self) -> &'static str {
        "cauchy"
    }

    fn name(&self) -> &'static str {
        "Cauchy Distribution"
    }

    fn category(&self) -> Category {
        Category::Continuous
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    /// Tangent method: `location + scale·tan(π(U − ½))`.
    #[inline]
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        let loc = params.value(&PARAMS[0]);
        let scale = params.value(&PARAMS[1]);
        loc + scale * (PI * (rng.random::<f64>() - 0.5)).tan()
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        let loc = params.value(&PARAMS[0]);
        let scale = params.value(&PARAMS[1]);
        let z = (x - loc) / scale;
        Some(1.0 / (PI * scale * (1.0 + z * z)))
    }

    fn cdf(&self, x: f64, params: &Params) -> Option<f64> {
        let loc = params.value(&PARAMS[0]);
        let scale = params.value(&PARAMS[1]);
        Some(0.5 + ((x - loc) / scale).atan() / PI)
    }
}

#[cfg(test)]
mod cauchy_tests {
    use super::*;
    use crate::kernels::scientific::distributions::shared::sampler::Sampler;
    use crate::kernels::scientific::distributions::univariate::common::{assert_close, simpson};

    #[test]
    fn density_matches_cdf_increments() {
        let p = Params::new().with("location", 1.0).with("scale", 2.0);
        assert_close(Cauchy.pdf(1.0, &p).unwrap(), 1.0 / (2.0 * PI), 1e-15);
        let area = simpson(|x| Cauchy.pdf(x, &p).unwrap(), -9.0, 11.0, 4_000);
        let exact = Cauchy.cdf(11.0, &p).unwrap() - Cauchy.cdf(-9.0, &p).unwrap();
        assert_close(area, exact, 1e-9);
        assert_close(Cauchy.cdf(1.0, &p).unwrap(), 0.5, 1e-15);
    }

    #[test]
    fn sample_median_near_location() {
        let p = Params::new().with("location", 3.0);
        let mut rng = Sampler::seeded(77);
        let mut xs: Vec<f64> = (0..10_001).map(|_| Cauchy.generate(&p, &mut rng)).collect();
        xs.sort_by(f64::total_cmp);
        assert!((xs[5_000] - 3.0).abs() < 0.1, "median {}", xs[5_000]);
    }
}
