// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use rand::{Rng, RngCore};

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params, relation_error, validate_ranges,
};
use crate::utils::is_integer;

const PARAMS: [ParamDescriptor; 2] = [
    ParamDescriptor::new("a", "Minimum", "Smallest value", 1.0)
        .with_min(-1000.0)
        .with_max(1000.0)
        .with_step(1.0),
    ParamDescriptor::new("b", "Maximum", "Largest value", 6.0)
        .with_min(-1000.0)
        .with_max(1000.0)
        .with_step(1.0),
];

/// Integer bounds, floored.
#[inline(always)]
fn bounds(params: &Params) -> (f64, f64) {
    (
        params.value(&PARAMS[0]).floor(),
        params.value(&PARAMS[1]).floor(),
    )
}

/// Discrete uniform distribution on the integers `a..=b` (a fair die by default).
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscreteUniform;

impl DistributionSampler for DiscreteUniform {
    fn key(&self) -> &'static str {
        "discrete_uniform"
    }

    fn name(&self) -> &'static str {
        "Discrete Uniform Distribution"
    }

    fn category(&self) -> Category {
        Category::Discrete
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    #[inline]
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        let (a, b) = bounds(params);
        a + (rng.random::<f64>() * (b - a + 1.0)).floor()
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        let (a, b) = bounds(params);
        Some(if is_integer(x) && x >= a && x <= b {
            1.0 / (b - a + 1.0)
        } else {
            0.0
        })
    }

    fn cdf(&self, x: f64, params: &Params) -> Option<f64> {
        let (a, b) = bounds(params);
        Some(if x < a {
            0.0
        } else if x >= b {
            1.0
        } else {
            (x.floor() - a + 1.0) / (b - a + 1.0)
        })
    }

    fn validate(&self, params: &Params) -> Result<(), KernelError> {
        validate_ranges(self.key(), &PARAMS, params)?;
        let (a, b) = bounds(params);
        if a > b {
            return Err(relation_error(self.key(), "requires a <= b"));
        }
        Ok(())
    }
}
