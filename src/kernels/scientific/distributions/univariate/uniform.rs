// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Uniform Distribution** - *Continuous Uniform on `[a, b]`*

use rand::{Rng, RngCore};

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params, relation_error, validate_ranges,
};

const PARAMS: [ParamDescriptor; 2] = [
    ParamDescriptor::new("a", "Minimum", "Lower bound", 0.0)
        .with_min(-100.0)
        .with_max(100.0)
        .with_step(0.1),
    ParamDescriptor::new("b", "Maximum", "Upper bound", 1.0)
        .with_min(-100.0)
        .with_max(100.0)
        .with_step(0.1),
];

/// Continuous uniform distribution U(a, b).
#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

impl DistributionSampler for Uniform {
    fn key(&self) -> &'static str {
        "uniform"
    }

    fn name(&self) -> &'static str {
        "Uniform Distribution"
    }

    fn category(&self) -> Category {
        Category::Continuous
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    #[inline]
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        let a = params.value(&PARAMS[0]);
        let b = params.value(&PARAMS[1]);
        a + rng.random::<f64>() * (b - a)
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        let a = params.value(&PARAMS[0]);
        let b = params.value(&PARAMS[1]);
        Some(if x >= a && x <= b { 1.0 / (b - a) } else { 0.0 })
    }

    fn cdf(&self, x: f64, params: &Params) -> Option<f64> {
        let a = params.value(&PARAMS[0]);
        let b = params.value(&PARAMS[1]);
        Some(if x < a {
            0.0
        } else if x >= b {
            1.0
        } else {
            (x - a) / (b - a)
        })
    }

    fn validate(&self, params: &Params) -> Result<(), KernelError> {
        validate_ranges(self.key(), &PARAMS, params)?;
        if params.value(&PARAMS[0]) >= params.value(&PARAMS[1]) {
            return Err(relation_error(self.key(), "requires a < b"));
        }
        Ok(())
    }
}
