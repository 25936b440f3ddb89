// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Gumbel Distribution** - *Extreme Value Type I*
//!
//! Limiting distribution of the maximum of many i.i.d. samples, a useful
//! contrast to the sample mean.

use rand::RngCore;

use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};
use crate::kernels::scientific::distributions::shared::sampler::uniform_open;

const PARAMS: [ParamDescriptor; 2] = [
    ParamDescriptor::new("location", "Location (μ)", "Mode of the distribution", 0.0)
        .with_min(-100.0)
        .with_max(100.0)
        .with_step(0.1),
    ParamDescriptor::new("scale", "Scale (β)", "Spread parameter", 1.0)
        .with_min(0.01)
        .with_max(100.0)
        .with_step(0.1),
];

/// Gumbel (maximum) distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gumbel;

impl DistributionSampler for Gumbel {
    fn key(&self) -> &'static str {
        "gumbel"
    }

    fn name(&self) -> &'static str {
        "Gumbel Distribution"
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
        let beta = params.value(&PARAMS[1]);
        mu - beta * (-uniform_open(rng).ln()).ln()
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        let mu = params.value(&PARAMS[0]);
        let beta = params.value(&PARAMS[1]);
        let z = (x - mu) / beta;
        Some((-(z + (-z).exp())).exp() / beta)
    }

    fn cdf(&self, x: f64, params: &Params) -> Option<f64> {
        let mu = params.value(&PARAMS[0]);
        let beta = params.value(&PARAMS[1]);
        Some((-(-(x - mu) / beta).exp()).exp())
    }
}

#[cfg(test)]
mod gumbel_tests {
    use super::*;
    use crate::kernels::scientific::distributions::shared::sampler::Sampler;
    use crate::kernels::scientific::distributions::univariate::common::{
        assert_close, moments, simpson,
    };

    const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

    #[test]
    fn density_and_cdf() {
        let p = Params::new();
        assert_close(Gumbel.pdf(0.0, &p).unwrap(), (-1.0f64).exp(), 1e-15);
        assert_close(Gumbel.cdf(0.0, &p).unwrap(), (-1.0f64).exp(), 1e-15);
        let area = simpson(|x| Gumbel.pdf(x, &p).unwrap(), -10.0, 40.0, 10_000);
        assert_close(area, 1.0, 1e-9);
    }

    #[test]
    fn sample_mean_is_location_plus_euler() {
        let p = Params::new().with("location", 1.0).with("scale", 2.0);
        let mut rng = Sampler::seeded(91);
        let xs: Vec<f64> = (0..20_000).map(|_| Gumbel.generate(&p, &mut rng)).collect();
        let (m, _) = moments(&xs);
        assert!((m - (1.0 + 2.0 * EULER_GAMMA)).abs() < 0.08, "mean {m}");
    }
}
