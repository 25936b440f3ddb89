// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Simulation Driver** - *Sampling Distributions of a Statistic*
//!
//! Draws `num_samples` independent samples of `sample_size` observations from a
//! catalog distribution or a drawn curve, and summarises both the pooled
//! observations and the sampling distribution of a chosen [`Statistic`].
//!
//! By the Central Limit Theorem the sample means approach a normal
//! distribution with standard deviation `σ / √n` as `sample_size` grows.
//!
//! ```
//! use clt_kernels::simulation::{run, SimulationConfig};
//!
//! let cfg = SimulationConfig { seed: Some(7), ..SimulationConfig::default() };
//! let result = run(&cfg).unwrap();
//! assert_eq!(result.sample_statistics.len(), cfg.num_samples);
//! ```

use rand::RngCore;

use crate::config::{DEFAULT_NUM_SAMPLES, DEFAULT_SAMPLE_SIZE};
use crate::errors::KernelError;
use crate::kernels::aggregate::{mean, median, range, std_dev, variance};
use crate::kernels::scientific::distributions::manual::ManualDistribution;
use crate::kernels::scientific::distributions::registry::{
    try_get, DistributionSampler, Params,
};
use crate::kernels::scientific::distributions::shared::sampler::Sampler;

/// Per-sample statistic whose sampling distribution is studied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Statistic {
    #[default]
    Mean,
    Median,
    Variance,
    StdDev,
    Range,
}

impl Statistic {
    /// Evaluates the statistic on one sample. Variance is unbiased.
    #[inline]
    pub fn compute(self, sample: &[f64]) -> f64 {
        match self {
            Statistic::Mean => mean(sample),
            Statistic::Median => median(sample),
            Statistic::Variance => variance(sample, false),
            Statistic::StdDev => std_dev(sample),
            Statistic::Range => range(sample),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Statistic::Mean => "mean",
            Statistic::Median => "median",
            Statistic::Variance => "variance",
            Statistic::StdDev => "standard deviation",
            Statistic::Range => "range",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Registry name, e.g. `"normal"` or `"Student-T"`.
    pub distribution: String,
    /// Missing keys take their defaults.
    pub params: Params,
    pub sample_size: usize,
    pub num_samples: usize,
    pub statistic: Statistic,
    /// `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            distribution: "normal".to_string(),
            params: Params::new().with("mean", 0.0).with("sd", 1.0),
            sample_size: DEFAULT_SAMPLE_SIZE,
            num_samples: DEFAULT_NUM_SAMPLES,
            statistic: Statistic::Mean,
            seed: None,
        }
    }
}

impl SimulationConfig {
    fn check_sizes(&self) -> Result<(), KernelError> {
        if self.sample_size == 0 || self.num_samples == 0 {
            let msg = format!(
                "sample_size ({}) and num_samples ({}) must both be positive",
                self.sample_size, self.num_samples
            );
            log::warn!("{msg}");
            return Err(KernelError::OutOfBounds(msg));
        }
        Ok(())
    }

    fn sampler(&self) -> Sampler {
        self.seed.map_or_else(Sampler::new, Sampler::seeded)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub statistic: Statistic,
    /// `num_samples` samples of `sample_size` observations each.
    pub samples: Vec<Vec<f64>>,
    /// Mean of all pooled observations.
    pub population_mean: f64,
    pub population_variance: f64,
    pub population_sd: f64,
    /// The chosen statistic of each sample.
    pub sample_statistics: Vec<f64>,
    /// Mean of `sample_statistics`.
    pub sampling_mean: f64,
    pub sampling_variance: f64,
    /// Standard error of the statistic.
    pub sampling_sd: f64,
}

impl SimulationResult {
    fn summarise(statistic: Statistic, samples: Vec<Vec<f64>>) -> Self {
        let pooled: Vec<f64> = samples.iter().flatten().copied().collect();
        let sample_statistics: Vec<f64> = samples.iter().map(|s| statistic.compute(s)).collect();
        SimulationResult {
            statistic,
            population_mean: mean(&pooled),
            population_variance: variance(&pooled, false),
            population_sd: std_dev(&pooled),
            sampling_mean: mean(&sample_statistics),
            sampling_variance: variance(&sample_statistics, false),
            sampling_sd: std_dev(&sample_statistics),
            sample_statistics,
            samples,
        }
    }
}

/// `n` independent draws from `dist`.
pub fn generate_population(
    dist: &dyn DistributionSampler,
    params: &Params,
    n: usize,
    rng: &mut dyn RngCore,
) -> Vec<f64> {
    (0..n).map(|_| dist.generate(params, rng)).collect()
}

/// Runs a simulation against a catalog distribution.
///
/// # Errors
/// - `UnknownDistribution` when the name is not registered
/// - `InvalidArguments` when the parameters fail validation
/// - `OutOfBounds` when either size is zero
pub fn run(config: &SimulationConfig) -> Result<SimulationResult, KernelError> {
    config.check_sizes()?;
    let dist = try_get(&config.distribution)?;
    dist.validate(&config.params)?;

    log::debug!(
        "simulating {} samples of {} from {} ({})",
        config.num_samples,
        config.sample_size,
        dist.name(),
        config.statistic.name()
    );

    let mut rng = config.sampler();
    let samples: Vec<Vec<f64>> = (0..config.num_samples)
        .map(|_| generate_population(dist, &config.params, config.sample_size, &mut rng))
        .collect();
    Ok(SimulationResult::summarise(config.statistic, samples))
}

/// Runs a simulation against a drawn curve. `distribution` and `params` in
/// `config` are ignored.
///
/// A curve with fewer than two points samples as all zeros.
pub fn run_manual(
    config: &SimulationConfig,
    dist: &mut ManualDistribution,
) -> Result<SimulationResult, KernelError> {
    config.check_sizes()?;
    if dist.len() < 2 {
        log::warn!("manual simulation on a curve with {} point(s)", dist.len());
    }
    log::debug!(
        "simulating {} samples of {} from a drawn curve ({})",
        config.num_samples,
        config.sample_size,
        config.statistic.name()
    );

    let mut rng = config.sampler();
    let samples: Vec<Vec<f64>> = (0..config.num_samples)
        .map(|_| dist.generate_samples(config.sample_size, &mut rng))
        .collect();
    Ok(SimulationResult::summarise(config.statistic, samples))
}

/// Parallel counterpart of [`generate_population`].
///
/// Work is split into chunks of `PARALLEL_CHUNK` draws; chunk `i` uses its own
/// `StdRng` seeded with `seed + i`, so output depends only on `seed` and `n`.
#[cfg(feature = "parallel")]
pub fn generate_population_parallel(
    dist: &dyn DistributionSampler,
    params: &Params,
    n: usize,
    seed: u64,
) -> Vec<f64> {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rayon::prelude::*;

    use crate::config::PARALLEL_CHUNK;

    let chunks = n.div_ceil(PARALLEL_CHUNK);
    let parts: Vec<Vec<f64>> = (0..chunks)
        .into_par_iter()
        .map(|idx| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(idx as u64));
            let len = PARALLEL_CHUNK.min(n - idx * PARALLEL_CHUNK);
            generate_population(dist, params, len, &mut rng)
        })
        .collect();
    parts.concat()
}

#[cfg(test)]
mod simulation_tests {
    use super::*;
    use crate::config::POPULATION_SIZE;
    use crate::kernels::scientific::distributions::registry::get;

    fn seeded(distribution: &str, params: Params, seed: u64) -> SimulationConfig {
        SimulationConfig {
            distribution: distribution.to_string(),
            params,
            seed: Some(seed),
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn statistic_compute() {
        let s = [1.0, 5.0, 2.0, 8.0];
        assert_eq!(Statistic::Mean.compute(&s), 4.0);
        assert_eq!(Statistic::Median.compute(&s), 3.5);
        assert_eq!(Statistic::Range.compute(&s), 7.0);
        assert_eq!(Statistic::Variance.compute(&s), 10.0);
        assert_eq!(Statistic::StdDev.compute(&s), 10f64.sqrt());
    }

    #[test]
    fn default_config() {
        let cfg = SimulationConfig::default();
        assert_eq!(cfg.distribution, "normal");
        assert_eq!(cfg.sample_size, 30);
        assert_eq!(cfg.num_samples, 500);
        assert_eq!(cfg.statistic, Statistic::Mean);
    }

    #[test]
    fn seeded_runs_repeat() {
        let cfg = seeded("exponential", Params::new().with("lambda", 2.0), 11);
        let a = run(&cfg).unwrap();
        let b = run(&cfg).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.samples.len(), 500);
        assert!(a.samples.iter().all(|s| s.len() == 30));
    }

    #[test]
    fn errors_surface() {
        let unknown = seeded("no_such_thing", Params::new(), 1);
        assert!(matches!(run(&unknown), Err(KernelError::UnknownDistribution(_))));

        let invalid = seeded("normal", Params::new().with("sd", -1.0), 1);
        assert!(matches!(run(&invalid), Err(KernelError::InvalidArguments(_))));

        let empty = SimulationConfig { sample_size: 0, ..seeded("normal", Params::new(), 1) };
        assert!(matches!(run(&empty), Err(KernelError::OutOfBounds(_))));
    }

    #[test]
    fn standard_error_of_the_mean() {
        // exponential(1): σ = 1, so sd of means ≈ 1/√30
        let cfg = seeded("exponential", Params::new().with("lambda", 1.0), 12);
        let r = run(&cfg).unwrap();
        let expected = 1.0 / 30f64.sqrt();
        assert!((r.sampling_mean - 1.0).abs() < 0.05, "mean {}", r.sampling_mean);
        assert!((r.sampling_sd - expected).abs() < 0.025, "sd {}", r.sampling_sd);
        assert!((r.population_mean - 1.0).abs() < 0.05);
    }

    #[test]
    fn manual_runs() {
        let mut tri = ManualDistribution::from_points(&[(-5.0, 0.0), (0.0, 1.0), (5.0, 0.0)]);
        let cfg = SimulationConfig { num_samples: 200, seed: Some(13), ..SimulationConfig::default() };
        let r = run_manual(&cfg, &mut tri).unwrap();
        assert_eq!(r.sample_statistics.len(), 200);
        assert!(r.population_mean.abs() < 0.2);

        let mut empty = ManualDistribution::new();
        let r = run_manual(&cfg, &mut empty).unwrap();
        assert!(r.samples.iter().flatten().all(|&x| x == 0.0));
        assert_eq!(r.sampling_sd, 0.0);
    }

    #[test]
    fn population_batch() {
        let dist = get("uniform").unwrap();
        let mut rng = Sampler::seeded(14);
        let xs = generate_population(dist, &Params::new(), POPULATION_SIZE, &mut rng);
        assert_eq!(xs.len(), POPULATION_SIZE);
        assert!(xs.iter().all(|x| (0.0..1.0).contains(x)));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_population_is_deterministic() {
        let dist = get("normal").unwrap();
        let p = Params::new();
        let a = generate_population_parallel(dist, &p, 5_000, 99);
        let b = generate_population_parallel(dist, &p, 5_000, 99);
        assert_eq!(a.len(), 5_000);
        assert_eq!(a, b);
        let m = mean(&a);
        assert!(m.abs() < 0.06, "mean {m}");
    }
}
