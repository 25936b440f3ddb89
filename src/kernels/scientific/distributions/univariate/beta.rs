// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Beta Distribution** - *Probabilities and Proportions on `[0, 1]`*

use rand::RngCore;

use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};
use crate::kernels::scientific::distributions::shared::sampler::sample_gamma;
use crate::kernels::scientific::distributions::shared::scalar::beta_func;

const PARAMS: [ParamDescriptor; 2] = [
    ParamDescriptor::new("alpha", "Alpha (α)", "First shape parameter", 2.0)
        .with_min(0.1)
        .with_max(50.0)
        .with_step(0.1),
    ParamDescriptor::new("beta", "Beta (β)", "Second shape parameter", 2.0)
        .with_min(0.1)
        .with_max(50.0)
        .with_step(0.1),
];

/// Beta distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct Beta;

impl DistributionSampler for Beta {
    fn key(&self) -> &'static str {
        "beta"
    }

    fn name(&self) -> &'static str {
        "Beta Distribution"
    }

    fn category(&self) -> Category {
        Category::Continuous
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    /// `X/(X+Y)` with X ~ Γ(α, 1), Y ~ Γ(β, 1). Non-positive shapes yield 0.
    #[inline]
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        let alpha = params.value(&PARAMS[0]);
        let beta = params.value(&PARAMS[1]);
        if alpha > 0.0 && beta > 0.0 {
            let x = sample_gamma(rng, alpha, 1.0);
            let y = sample_gamma(rng, beta, 1.0);
            x / (x + y)
        } else {
            0.0
        }
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        if !(0.0..=1.0).contains(&x) {
            return Some(0.0);
        }
        let alpha = params.value(&PARAMS[0]);
        let beta = params.value(&PARAMS[1]);
        Some(x.powf(alpha - 1.0) * (1.0 - x).powf(beta - 1.0) / beta_func(alpha, beta))
    }
}

#[cfg(test)]
mod beta_tests {
    use super::*;
    use crate::kernels::scientific::distributions::shared::sampler::Sampler;
    use crate::kernels::scientific::distributions::univariate::common::{
        assert_close, moments, simpson,
    };

    #[test]
    fn density_values() {
        let p = Params::new();
        // Beta(2,2) = 6x(1−x)
        assert_close(Beta.pdf(0.5, &p).unwrap(), 1.5, 1e-12);
        assert_eq!(Beta.pdf(1.2, &p), Some(0.0));
        assert_eq!(Beta.pdf(-0.2, &p), Some(0.0));
        let q = Params::new().with("alpha", 2.0).with("beta", 5.0);
        let area = simpson(|x| Beta.pdf(x, &q).unwrap(), 0.0, 1.0, 2_000);
        assert_close(area, 1.0, 1e-9);
    }

    #[test]
    fn sample_mean() {
        let p = Params::new().with("alpha", 2.0).with("beta", 5.0);
        let mut rng = Sampler::seeded(3);
        let xs: Vec<f64> = (0..20_000).map(|_| Beta.generate(&p, &mut rng)).collect();
        assert!(xs.iter().all(|&x| (0.0..=1.0).contains(&x)));
        let (m, _) = moments(&xs);
        assert!((m - 2.0 / 7.0).abs() < 0.01, "mean {m}");
    }

    #[test]
    fn non_positive_shape_yields_zero() {
        let p = Params::new().with("alpha", 0.0);
        let mut rng = Sampler::seeded(3);
        assert_eq!(Beta.generate(&p, &mut rng), 0.0);
    }
}
