// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Distribution Registry** - *Catalog Lookup and Parameter Model*
//!
//! Every parametric family implements [`DistributionSampler`] and is registered
//! once, at first use, in a process-wide [`Registry`]. Parameters travel as a
//! small ordered [`Params`] map; missing keys resolve to the family's
//! [`ParamDescriptor`] defaults, so `generate` works with any subset of keys.
//!
//! ```ignore
//! use clt_kernels::kernels::scientific::distributions::registry::{try_get, Params};
//! use clt_kernels::kernels::scientific::distributions::shared::sampler::Sampler;
//!
//! let normal = try_get("normal")?;
//! let mut rng = Sampler::seeded(7);
//! let x = normal.generate(&Params::new().with("sd", 2.0), &mut rng);
//! ```

use std::fmt;
use std::sync::LazyLock;

use rand::RngCore;

use crate::errors::{KernelError, log_param_out_of_range};
use crate::kernels::scientific::distributions::multivariate::{
    Dirichlet, MultivariateNormal, Wishart,
};
use crate::kernels::scientific::distributions::univariate::{
    bernoulli::Bernoulli, beta::Beta, binomial::Binomial, cauchy::Cauchy, chi::Chi,
    chi_squared::ChiSquared, discrete_uniform::DiscreteUniform, exponential::Exponential,
    f::FDistribution, gamma::Gamma, geometric::Geometric, gumbel::Gumbel,
    hypergeometric::Hypergeometric, inverse_gaussian::InverseGaussian, laplace::Laplace,
    logarithmic::Logarithmic, logistic::Logistic, lognormal::LogNormal,
    maxwell_boltzmann::MaxwellBoltzmann, neg_binomial::NegativeBinomial, normal::Normal,
    pareto::Pareto, poisson::Poisson, rayleigh::Rayleigh, student_t::StudentT,
    triangular::Triangular, uniform::Uniform, weibull::Weibull, zipf::Zipf,
};

/// Broad grouping used to organise the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Continuous,
    Discrete,
    Sampling,
    Multivariate,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Continuous => "continuous",
            Category::Discrete => "discrete",
            Category::Sampling => "sampling",
            Category::Multivariate => "multivariate",
        };
        f.write_str(s)
    }
}

/// Describes one numeric parameter of a distribution family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub default: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

impl ParamDescriptor {
    pub const fn new(
        key: &'static str,
        name: &'static str,
        description: &'static str,
        default: f64,
    ) -> Self {
        Self {
            key,
            name,
            description,
            default,
            min: None,
            max: None,
            step: None,
        }
    }

    pub const fn with_min(self, min: f64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    pub const fn with_max(self, max: f64) -> Self {
        Self {
            max: Some(max),
            ..self
        }
    }

    pub const fn with_step(self, step: f64) -> Self {
        Self {
            step: Some(step),
            ..self
        }
    }

    /// True when `value` is finite and inside `[min, max]`.
    #[inline]
    pub fn accepts(&self, value: f64) -> bool {
        value.is_finite()
            && self.min.map_or(true, |lo| value >= lo)
            && self.max.map_or(true, |hi| value <= hi)
    }
}

/// Ordered `key → value` parameter map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, f64)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Params::set`].
    pub fn with(mut self, key: &str, value: f64) -> Self {
        self.set(key, value);
        self
    }

    /// Inserts or overwrites `key`, keeping first-insertion order.
    pub fn set(&mut self, key: &str, value: f64) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
    }

    /// Value for `desc.key`, or the descriptor default when absent.
    #[inline]
    pub fn value(&self, desc: &ParamDescriptor) -> f64 {
        self.get(desc.key).unwrap_or(desc.default)
    }

    /// Parameter map holding every descriptor default.
    pub fn defaults(descriptors: &[ParamDescriptor]) -> Self {
        descriptors.iter().map(|d| (d.key, d.default)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, f64)> for Params {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        let mut p = Params::new();
        for (k, v) in iter {
            p.set(k, v);
        }
        p
    }
}

/// A parametric distribution family in the catalog.
///
/// `generate` and `pdf`/`cdf` never validate: degenerate parameters propagate
/// `NaN`/`∞`. Call [`DistributionSampler::validate`] first when inputs come
/// from outside.
pub trait DistributionSampler: Send + Sync {
    /// Registry key, e.g. `"student_t"`.
    fn key(&self) -> &'static str;

    /// Human-readable name, e.g. `"Student's t Distribution"`.
    fn name(&self) -> &'static str;

    fn category(&self) -> Category;

    /// Ordered parameter descriptors.
    fn params(&self) -> &'static [ParamDescriptor];

    /// Draws one variate.
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64;

    /// Density (continuous) or mass (discrete) at `x`, when the family defines one.
    fn pdf(&self, _x: f64, _params: &Params) -> Option<f64> {
        None
    }

    /// Cumulative probability at `x`, when a closed form exists.
    fn cdf(&self, _x: f64, _params: &Params) -> Option<f64> {
        None
    }

    /// Checks keys and descriptor ranges. Families with relational
    /// constraints (`a < b`, `K <= N`, …) extend this.
    fn validate(&self, params: &Params) -> Result<(), KernelError> {
        validate_ranges(self.key(), self.params(), params)
    }
}

/// Rejects unknown keys, non-finite values and values outside descriptor bounds.
pub fn validate_ranges(
    dist: &str,
    descriptors: &[ParamDescriptor],
    params: &Params,
) -> Result<(), KernelError> {
    for (key, value) in params.iter() {
        let Some(desc) = descriptors.iter().find(|d| d.key == key) else {
            log::warn!("{dist}: unknown parameter '{key}'");
            return Err(KernelError::InvalidArguments(format!(
                "{dist} => unknown parameter '{key}'"
            )));
        };
        if !desc.accepts(value) {
            let msg = log_param_out_of_range(dist, key, value, desc.min, desc.max);
            log::warn!("{msg}");
            return Err(KernelError::InvalidArguments(msg));
        }
    }
    Ok(())
}

/// Builds an `InvalidArguments` error for a relational constraint and logs it.
pub(crate) fn relation_error(dist: &str, what: &str) -> KernelError {
    let msg = format!("{dist} => {what}");
    log::warn!("{msg}");
    KernelError::InvalidArguments(msg)
}

/// Canonical lookup form: lower case, `_`, `-` and spaces removed.
fn canonical(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// The process-wide distribution catalog.
pub struct Registry {
    entries: Vec<(String, Box<dyn DistributionSampler>)>,
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::build);

impl Registry {
    fn build() -> Self {
        let families: Vec<Box<dyn DistributionSampler>> = vec![
            // continuous
            Box::new(Normal),
            Box::new(Uniform),
            Box::new(Exponential),
            Box::new(Cauchy),
            Box::new(Triangular),
            Box::new(Laplace),
            Box::new(LogNormal),
            Box::new(Gamma),
            Box::new(Weibull),
            Box::new(Beta),
            Box::new(Pareto),
            Box::new(Rayleigh),
            Box::new(Gumbel),
            Box::new(Logistic),
            Box::new(Chi),
            Box::new(InverseGaussian),
            Box::new(MaxwellBoltzmann),
            // discrete
            Box::new(Bernoulli),
            Box::new(Binomial),
            Box::new(Poisson),
            Box::new(Geometric),
            Box::new(NegativeBinomial),
            Box::new(Hypergeometric),
            Box::new(Logarithmic),
            Box::new(Zipf),
            Box::new(DiscreteUniform),
            // sampling
            Box::new(ChiSquared),
            Box::new(StudentT),
            Box::new(FDistribution),
            // multivariate projections
            Box::new(MultivariateNormal),
            Box::new(Dirichlet),
            Box::new(Wishart),
        ];
        let entries: Vec<_> = families
            .into_iter()
            .map(|d| (canonical(d.key()), d))
            .collect();
        log::debug!("distribution registry built with {} families", entries.len());
        Registry { entries }
    }

    /// Looks up a family by key. Case-insensitive; `_` and `-` are ignored,
    /// so `"student_t"`, `"studentT"` and `"Student-T"` all resolve.
    pub fn get(&self, name: &str) -> Option<&dyn DistributionSampler> {
        let wanted = canonical(name);
        self.entries
            .iter()
            .find(|(k, _)| *k == wanted)
            .map(|(_, d)| d.as_ref())
    }

    /// Like [`Registry::get`], returning `UnknownDistribution` on a miss.
    pub fn try_get(&self, name: &str) -> Result<&dyn DistributionSampler, KernelError> {
        self.get(name).ok_or_else(|| {
            log::warn!("unknown distribution '{name}'");
            KernelError::UnknownDistribution(name.to_string())
        })
    }

    /// Registry keys in catalog order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(_, d)| d.key())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn DistributionSampler> {
        self.entries.iter().map(|(_, d)| d.as_ref())
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &dyn DistributionSampler> {
        self.iter().filter(move |d| d.category() == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The shared catalog, built on first access.
#[inline]
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Shorthand for `registry().get(name)`.
#[inline]
pub fn get(name: &str) -> Option<&'static dyn DistributionSampler> {
    REGISTRY.get(name)
}

/// Shorthand for `registry().try_get(name)`.
#[inline]
pub fn try_get(name: &str) -> Result<&'static dyn DistributionSampler, KernelError> {
    REGISTRY.try_get(name)
}
