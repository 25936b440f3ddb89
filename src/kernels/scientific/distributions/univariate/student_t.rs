// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Student's t Distribution** - *Standardised Mean with Estimated Variance*

use std::f64::consts::PI;

use rand::RngCore;

use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};
use crate::kernels::scientific::distributions::shared::sampler::{
    sample_chi_squared, sample_standard_normal,
};
use crate::kernels::scientific::distributions::shared::scalar::ln_gamma;

const PARAMS: [ParamDescriptor; 1] = [ParamDescriptor::new(
    "df",
    "Degrees of Freedom (ν)",
    "Controls tail heaviness",
    5.0,
)
.with_min(1.0)
.with_max(100.0)
.with_step(1.0)];

/// Student's t distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct StudentT;

impl DistributionSampler for StudentT {
    fn key(&self) -> &'static str {
        "student_t"
    }

    fn name(&self) -> &'static str {
        "Student's t Distribution"
    }

    fn category(&self) -> Category {
        Category::Sampling
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    /// `Z / √(χ²_ν / ν)`
    #[inline]
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        let df = params.value(&PARAMS[0]);
        let z = sample_standard_normal(rng);
        let chi = sample_chi_squared(rng, df);
        z / (chi / df).sqrt()
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        let df = params.value(&PARAMS[0]);
        let ln_coef = ln_gamma((df + 1.0) / 2.0) - ln_gamma(df / 2.0) - 0.5 * (df * PI).ln();
        Some((ln_coef - (df + 1.0) / 2.0 * (x * x / df).ln_1p()).exp())
    }
}
