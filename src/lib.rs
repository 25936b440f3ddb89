// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

//! # **CLT Kernels** - *Distribution Engine for Central Limit Theorem Exploration*
//!
//! Random variate generation, density evaluation and descriptive statistics
//! behind an interactive exploration of the Central Limit Theorem.
//!
//! ## Modules
//! - [`kernels::scientific::distributions`]: the catalog of 32 parametric
//!   families behind a name-keyed registry, plus free-hand drawn densities.
//! - [`kernels::aggregate`], [`kernels::histogram`], [`kernels::summary`] and
//!   [`kernels::scientific::goodness_of_fit`]: statistics over samples.
//! - [`simulation`]: draws many samples and summarises the sampling
//!   distribution of a statistic.
//!
//! ## Randomness
//! Every sampling call takes an explicit generator. Use
//! [`Sampler::seeded`](kernels::scientific::distributions::shared::sampler::Sampler::seeded)
//! for reproducible runs.
//!
//! ## Features
//! - `parallel`: rayon-backed population generation with one seeded generator
//!   per work chunk.

pub mod kernels {
    pub mod aggregate;
    pub mod histogram;
    pub mod summary;
    pub mod scientific {
        pub mod distributions;
        pub mod goodness_of_fit;
    }
}

pub mod config;
pub mod errors;
pub mod simulation;
pub mod utils;
