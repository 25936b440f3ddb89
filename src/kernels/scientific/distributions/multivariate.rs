// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Multivariate Distributions Module** - *Scalar Projections*
//!
//! The simulation driver works on scalar streams, so each multivariate family
//! is exposed through a one-dimensional projection of its draw:
//!
//! - **Multivariate Normal**: Euclidean norm of a 2-D draw with i.i.d. coordinates.
//! - **Dirichlet**: first coordinate of a symmetric Dirichlet draw.
//! - **Wishart**: the 1×1 Wishart, i.e. a scaled chi-squared sum.
//!
//! None of the projections defines a density here.

use rand::RngCore;

use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};
use crate::kernels::scientific::distributions::shared::sampler::{
    sample_gamma, sample_standard_normal,
};
use crate::utils::{count_param, loop_count};

const MVN_PARAMS: [ParamDescriptor; 2] = [
    ParamDescriptor::new("mean", "Mean", "Mean of each dimension", 0.0)
        .with_min(-10.0)
        .with_max(10.0)
        .with_step(0.1),
    ParamDescriptor::new("sd", "Standard Deviation", "Standard deviation of each dimension", 1.0)
        .with_min(0.1)
        .with_max(10.0)
        .with_step(0.1),
];

const DIRICHLET_PARAMS: [ParamDescriptor; 2] = [
    ParamDescriptor::new("alpha", "Alpha", "Shared concentration parameter", 1.0)
        .with_min(0.1)
        .with_max(10.0)
        .with_step(0.1),
    ParamDescriptor::new("components", "Components", "Dimension of the simplex", 2.0)
        .with_min(2.0)
        .with_max(20.0)
        .with_step(1.0),
];

const WISHART_PARAMS: [ParamDescriptor; 2] = [
    ParamDescriptor::new("df", "Degrees of Freedom", "Degrees of freedom parameter", 3.0)
        .with_min(1.0)
        .with_max(20.0)
        .with_step(1.0),
    ParamDescriptor::new("scale", "Scale", "Scale parameter", 1.0)
        .with_min(0.1)
        .with_max(10.0)
        .with_step(0.1),
];

/// Magnitude of a 2-D normal draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultivariateNormal;

impl DistributionSampler for MultivariateNormal {
    fn key(&self) -> &'static str {
        "multivariate_normal"
    }

    fn name(&self) -> &'static str {
        "Multivariate Normal Distribution"
    }

    fn category(&self) -> Category {
        Category::Multivariate
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &MVN_PARAMS
    }

    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        let mean = params.value(&MVN_PARAMS[0]);
        let sd = params.value(&MVN_PARAMS[1]);
        let x = mean + sd * sample_standard_normal(rng);
        let y = mean + sd * sample_standard_normal(rng);
        (x * x + y * y).sqrt()
    }
}

/// First coordinate of a symmetric Dirichlet draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dirichlet;

impl DistributionSampler for Dirichlet {
    fn key(&self) -> &'static str {
        "dirichlet"
    }

    fn name(&self) -> &'static str {
        "Dirichlet Distribution"
    }

    fn category(&self) -> Category {
        Category::Multivariate
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &DIRICHLET_PARAMS
    }

    /// Normalised Γ(α, 1) draws; fewer than two components yields `0.5`.
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        let alpha = params.value(&DIRICHLET_PARAMS[0]);
        let k = count_param(params.value(&DIRICHLET_PARAMS[1]));
        if k < 2 {
            return 0.5;
        }
        let first = sample_gamma(rng, alpha, 1.0);
        let mut sum = first;
        for _ in 1..k {
            sum += sample_gamma(rng, alpha, 1.0);
        }
        first / sum
    }
}

/// Scalar (1×1) Wishart: `Σ N(0, scale)²` over `⌈df⌉` terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wishart;

impl DistributionSampler for Wishart {
    fn key(&self) -> &'static str {
        "wishart"
    }

    fn name(&self) -> &'static str {
        "Wishart Distribution"
    }

    fn category(&self) -> Category {
        Category::Multivariate
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &WISHART_PARAMS
    }

    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        let df = params.value(&WISHART_PARAMS[0]);
        let sd = params.value(&WISHART_PARAMS[1]).sqrt();
        let mut sum = 0.0;
        for _ in 0..loop_count(df) {
            let x = sd * sample_standard_normal(rng);
            sum += x * x;
        }
        sum
    }
}
