// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Statistical Distributions Module** - *Parametric Catalog and Free-Hand Curves*
//!
//! Random variate generation and density evaluation for the distribution
//! catalog explored by the simulation driver.
//!
//! ## Layout
//! - **`registry`**: the [`registry::DistributionSampler`] trait, parameter
//!   model and the lazily-built catalog.
//! - **`univariate`**: one module per continuous, discrete or sampling family.
//! - **`multivariate`**: scalar projections of multivariate families.
//! - **`manual`**: user-drawn piecewise-linear densities.
//! - **`shared`**: special functions, constants and the core variate kernels.
//!
//! ### Null Value Philosophy
//! Inf and NaN are treated as valid float values. Sampling and density calls
//! never validate their parameters, so degenerate inputs come back as NaN or
//! infinity; parameter validation is a separate, explicit step.

/// # **Shared Distribution Utilities** - *Common Infrastructure for Distribution Computing*
///
/// ## Modules
/// - **`constants`**: Mathematical constants and precomputed values
/// - **`sampler`**: Random number generation and sampling utilities
/// - **`scalar`**: Special functions and mathematical utilities
pub mod shared {
    pub mod constants;
    pub mod sampler;
    pub mod scalar;
}

pub mod registry;

/// # **Univariate Distributions** - *Single-Variable Probability Distributions*
///
/// ## Distribution Categories
/// - **Continuous**: beta, cauchy, chi, exponential, gamma, gumbel, inverse_gaussian,
///   laplace, logistic, lognormal, maxwell_boltzmann, normal, pareto, rayleigh,
///   triangular, uniform, weibull
/// - **Discrete**: bernoulli, binomial, discrete_uniform, geometric, hypergeometric,
///   logarithmic, neg_binomial, poisson, zipf
/// - **Sampling**: chi_squared, f, student_t
pub mod univariate {
    // common kernel patterns
    pub mod common;

    // continuous
    pub mod beta;
    pub mod cauchy;
    pub mod chi;
    pub mod exponential;
    pub mod gamma;
    pub mod gumbel;
    pub mod inverse_gaussian;
    pub mod laplace;
    pub mod logistic;
    pub mod lognormal;
    pub mod maxwell_boltzmann;
    pub mod normal;
    pub mod pareto;
    pub mod rayleigh;
    pub mod triangular;
    pub mod uniform;
    pub mod weibull;

    // discrete
    pub mod bernoulli;
    pub mod binomial;
    /// Discrete uniform distribution - equal probability over a finite integer range.
    pub mod discrete_uniform;
    pub mod geometric;
    pub mod hypergeometric;
    pub mod logarithmic;
    pub mod neg_binomial;
    pub mod poisson;
    pub mod zipf;

    // sampling distributions
    pub mod chi_squared;
    pub mod f;
    pub mod student_t;
}

pub mod multivariate;

pub mod manual;
