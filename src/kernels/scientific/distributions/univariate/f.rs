// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **F Distribution** - *Ratio of Scaled Chi-Squared Variates*

use rand::RngCore;

use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};
use crate::kernels::scientific::distributions::shared::sampler::sample_chi_squared;
use crate::kernels::scientific::distributions::shared::scalar::ln_gamma;

const PARAMS: [ParamDescriptor; 2] = [
    ParamDescriptor::new("df1", "Numerator DF (d₁)", "Numerator degrees of freedom", 5.0)
        .with_min(1.0)
        .with_max(100.0)
        .with_step(1.0),
    ParamDescriptor::new("df2", "Denominator DF (d₂)", "Denominator degrees of freedom", 10.0)
        .with_min(1.0)
        .with_max(100.0)
        .with_step(1.0),
];

/// Fisher–Snedecor F distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct FDistribution;

impl DistributionSampler for FDistribution {
    fn key(&self) -> &'static str {
        "f"
    }

    fn name(&self) -> &'static str {
        "F Distribution"
    }

    fn category(&self) -> Category {
        Category::Sampling
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    #[inline]
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        let d1 = params.value(&PARAMS[0]);
        let d2 = params.value(&PARAMS[1]);
        let chi1 = sample_chi_squared(rng, d1);
        let chi2 = sample_chi_squared(rng, d2);
        (chi1 / d1) / (chi2 / d2)
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        if x < 0.0 {
            return Some(0.0);
        }
        let d1 = params.value(&PARAMS[0]);
        let d2 = params.value(&PARAMS[1]);
        let a = d1 / 2.0;
        let b = d2 / 2.0;
        let ln_coef = ln_gamma(a + b) - ln_gamma(a) - ln_gamma(b) + a * (d1 / d2).ln();
        if x == 0.0 {
            return Some(ln_coef.exp() * 0f64.powf(a - 1.0));
        }
        Some((ln_coef + (a - 1.0) * x.ln() - (a + b) * (d1 * x / d2).ln_1p()).exp())
    }
}

#[cfg(test)]
mod f_tests {
    use super::*;
    use crate::kernels::scientific::distributions::shared::sampler::Sampler;
    use crate::kernels::scientific::distributions::univariate::common::{
        assert_close, moments, simpson,
    };

    #[test]
    fn density_support() {
        let p = Params::new();
        assert_eq!(FDistribution.pdf(-1.0, &p), Some(0.0));
        assert_eq!(FDistribution.pdf(0.0, &p), Some(0.0));
        // d1 = 2 starts at 1 for any d2
        let q = Params::new().with("df1", 2.0).with("df2", 7.0);
        assert_close(FDistribution.pdf(0.0, &q).unwrap(), 1.0, 1e-12);
    }

    #[test]
    fn density_integrates_to_one() {
        let p = Params::new().with("df1", 5.0).with("df2", 10.0);
        let area = simpson(|x| FDistribution.pdf(x, &p).unwrap(), 0.0, 400.0, 400_000);
        assert_close(area, 1.0, 1e-5);
    }

    #[test]
    fn sample_mean() {
        // d₂/(d₂ − 2)
        let p = Params::new().with("df1", 5.0).with("df2", 10.0);
        let mut rng = Sampler::seeded(21);
        let xs: Vec<f64> = (0..20_000).map(|_| FDistribution.generate(&p, &mut rng)).collect();
        assert!(xs.iter().all(|&x| x >= 0.0));
        let (m, _) = moments(&xs);
        assert!((m - 1.25).abs() < 0.05, "mean {m}");
    }
}
