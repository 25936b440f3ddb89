// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Chi Distribution** - *Euclidean Norm of `k` Standard Normals*

use rand::RngCore;

use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};
use crate::kernels::scientific::distributions::shared::sampler::sample_chi_squared;
use crate::kernels::scientific::distributions::shared::scalar::ln_gamma;

const PARAMS: [ParamDescriptor; 1] = [ParamDescriptor::new(
    "df",
    "Degrees of Freedom (k)",
    "Number of squared normals under the root",
    3.0,
)
.with_min(1.0)
.with_max(100.0)
.with_step(1.0)];

/// Chi distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chi;

impl DistributionSampler for Chi {
    fn key(&self) -> &'static str {
        "chi"
    }

    fn name(&self) -> &'static str {
        "Chi Distribution"
    }

    fn category(&self) -> Category {
        Category::Continuous
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    /// `√Σz²` over `⌈df⌉` standard normals.
    #[inline]
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        sample_chi_squared(rng, params.value(&PARAMS[0])).sqrt()
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        if x < 0.0 {
            return Some(0.0);
        }
        let k = params.value(&PARAMS[0]);
        let half = k / 2.0;
        if x == 0.0 {
            return Some(2f64.powf(1.0 - half) / ln_gamma(half).exp() * 0f64.powf(k - 1.0));
        }
        let ln_pdf =
            (1.0 - half) * std::f64::consts::LN_2 - ln_gamma(half) + (k - 1.0) * x.ln() - 0.5 * x * x;
        Some(ln_pdf.exp())
    }
}

#[cfg(test)]
mod chi_tests {
    use super::*;
    use crate::kernels::scientific::distributions::shared::sampler::Sampler;
    use crate::kernels::scientific::distributions::univariate::common::{
        assert_close, moments, simpson,
    };

    #[test]
    fn df_two_is_rayleigh() {
        let p = Params::new().with("df", 2.0);
        for &x in &[0.5, 1.0, 2.0] {
            assert_close(Chi.pdf(x, &p).unwrap(), x * (-(x * x) / 2.0f64).exp(), 1e-12);
        }
        assert_eq!(Chi.pdf(-1.0, &p), Some(0.0));
        assert_eq!(Chi.pdf(0.0, &p), Some(0.0));
    }

    #[test]
    fn density_integrates_to_one() {
        let p = Params::new().with("df", 5.0);
        let area = simpson(|x| Chi.pdf(x, &p).unwrap(), 0.0, 15.0, 6_000);
        assert_close(area, 1.0, 1e-9);
    }

    #[test]
    fn sample_second_moment_is_df() {
        let p = Params::new().with("df", 4.0);
        let mut rng = Sampler::seeded(71);
        let xs: Vec<f64> = (0..20_000).map(|_| Chi.generate(&p, &mut rng)).collect();
        let sq: Vec<f64> = xs.iter().map(|x| x * x).collect();
        let (m2, _) = moments(&sq);
        assert!((m2 - 4.0).abs() < 0.12, "E[X²] {m2}");
    }
}
