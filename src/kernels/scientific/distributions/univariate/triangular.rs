// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Triangular Distribution** - *Piecewise-Linear Density on `[a, b]` with Mode `c`*

use rand::{Rng, RngCore};

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params, relation_error, validate_ranges,
};

const PARAMS: [ParamDescriptor; 3] = [
    ParamDescriptor::new("a", "Minimum", "Lower limit", 0.0)
        .with_min(-100.0)
        .with_max(100.0)
        .with_step(0.1),
    ParamDescriptor::new("b", "Maximum", "Upper limit", 1.0)
        .with_min(-100.0)
        .with_max(100.0)
        .with_step(0.1),
    ParamDescriptor::new("c", "Mode", "Peak of the density", 0.5)
        .with_min(-100.0)
        .with_max(100.0)
        .with_step(0.1),
];

#[inline(always)]
fn abc(params: &Params) -> (f64, f64, f64) {
    (
        params.value(&PARAMS[0]),
        params.value(&PARAMS[1]),
        params.value(&PARAMS[2]),
    )
}

/// Triangular distribution with lower limit `a`, upper limit `b` and mode `c`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Triangular;

impl DistributionSampler for Triangular {
    fn key(&self) -> &'static str {
        "triangular"
    }

    fn name(&self) -> &'static str {
        "Triangular Distribution"
    }

    fn category(&self) -> Category {
        Category::Continuous
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    /// Piecewise inverse CDF split at `(c − a)/(b − a)`.
    #[inline]
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        let (a, b, c) = abc(params);
        let u = rng.random::<f64>();
        if u < (c - a) / (b - a) {
            a + (u * (b - a) * (c - a)).sqrt()
        } else {
            b - ((1.0 - u) * (b - a) * (b - c)).sqrt()
        }
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        let (a, b, c) = abc(params);
        let d = if x < a || x > b {
            0.0
        } else if x < c {
            2.0 * (x - a) / ((b - a) * (c - a))
        } else if x == c {
            // peak; also covers c == a and c == b
            2.0 / (b - a)
        } else {
            2.0 * (b - x) / ((b - a) * (b - c))
        };
        Some(d)
    }

    fn cdf(&self, x: f64, params: &Params) -> Option<f64> {
        let (a, b, c) = abc(params);
        let p = if x <= a {
            0.0
        } else if x <= c {
            (x - a) * (x - a) / ((b - a) * (c - a))
        } else if x < b {
            1.0 - (b - x) * (b - x) / ((b - a) * (b - c))
        } else {
            1.0
        };
        Some(p)
    }

    fn validate(&self, params: &Params) -> Result<(), KernelError> {
        validate_ranges(self.key(), &PARAMS, params)?;
        let (a, b, c) = abc(params);
        if a >= b {
            return Err(relation_error(self.key(), "requires a < b"));
        }
        if c < a || c > b {
            return Err(relation_error(self.key(), "requires a <= c <= b"));
        }
        Ok(())
    }
}
