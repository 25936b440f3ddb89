// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Hypergeometric Distribution** - *Successes Drawn Without Replacement*
//!
//! Population of `N` items, `K` of which are successes; `n` items are drawn.

use rand::{Rng, RngCore};

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params, relation_error, validate_ranges,
};
use crate::kernels::scientific::distributions::shared::scalar::ln_choose;
use crate::kernels::scientific::distributions::univariate::common::support_index;
use crate::utils::count_param;

const PARAMS: [ParamDescriptor; 3] = [
    ParamDescriptor::new("N", "Population Size", "Total number of items", 50.0)
        .with_min(1.0)
        .with_max(10_000.0)
        .with_step(1.0),
    ParamDescriptor::new("K", "Successes in Population", "Number of success items", 10.0)
        .with_min(0.0)
        .with_max(10_000.0)
        .with_step(1.0),
    ParamDescriptor::new("n", "Draws", "Number of items drawn", 5.0)
        .with_min(0.0)
        .with_max(10_000.0)
        .with_step(1.0),
];

/// Floored `(N, K, n)` with `K` and `n` clamped to `N`.
#[inline(always)]
fn counts(params: &Params) -> (u64, u64, u64) {
    let big_n = count_param(params.value(&PARAMS[0]));
    let big_k = count_param(params.value(&PARAMS[1])).min(big_n);
    let n = count_param(params.value(&PARAMS[2])).min(big_n);
    (big_n, big_k, n)
}

/// Hypergeometric distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hypergeometric;

impl DistributionSampler for Hypergeometric {
    fn key(&self) -> &'static str {
        "hypergeometric"
    }

    fn name(&self) -> &'static str {
        "Hypergeometric Distribution"
    }

    fn category(&self) -> Category {
        Category::Discrete
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    /// Draws `n` items one at a time, each a success with probability
    /// `successes left / items left`.
    #[inline]
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        let (big_n, big_k, n) = counts(params);
        let mut pool = big_n;
        let mut good = big_k;
        let mut drawn = 0u64;
        for _ in 0..n {
            if rng.random::<f64>() * (pool as f64) < good as f64 {
                drawn += 1;
                good -= 1;
            }
            pool -= 1;
        }
        drawn as f64
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        let (big_n, big_k, n) = counts(params);
        let Some(k) = support_index(x) else {
            return Some(0.0);
        };
        let lo = (n + big_k).saturating_sub(big_n);
        let hi = n.min(big_k);
        if k < lo || k > hi {
            return Some(0.0);
        }
        let (bn, bk, n, k) = (big_n as f64, big_k as f64, n as f64, k as f64);
        Some((ln_choose(bk, k) + ln_choose(bn - bk, n - k) - ln_choose(bn, n)).exp())
    }

    fn validate(&self, params: &Params) -> Result<(), KernelError> {
        validate_ranges(self.key(), &PARAMS, params)?;
        let big_n = params.value(&PARAMS[0]);
        if params.value(&PARAMS[1]) > big_n {
            return Err(relation_error(self.key(), "requires K <= N"));
        }
        if params.value(&PARAMS[2]) > big_n {
            return Err(relation_error(self.key(), "requires n <= N"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod hypergeometric_tests {
    use super::*;
    use crate::kernels::scientific::distributions::shared::sampler::Sampler;
    use crate::kernels::scientific::distributions::univariate::common::{
        assert_close, moments, pmf_total,
    };

    #[test]
    fn mass_function() {
        let p = Params::new().with("N", 20.0).with("K", 7.0).with("n", 12.0);
        assert_close(pmf_total(|k| Hypergeometric.pdf(k, &p).unwrap(), 12), 1.0, 1e-10);
        // k must be at least n + K − N = −1 → 0, at most min(n, K) = 7
        assert_eq!(Hypergeometric.pdf(8.0, &p), Some(0.0));
        assert_eq!(Hypergeometric.pdf(1.5, &p), Some(0.0));
        // C(7,1)·C(13,11)/C(20,12) = 7·78/125970
        assert_close(Hypergeometric.pdf(1.0, &p).unwrap(), 546.0 / 125_970.0, 1e-12);
    }

    #[test]
    fn sample_mean() {
        let p = Params::new();
        let mut rng = Sampler::seeded(808);
        let xs: Vec<f64> = (0..20_000).map(|_| Hypergeometric.generate(&p, &mut rng)).collect();
        assert!(xs.iter().all(|&x| (0.0..=5.0).contains(&x)));
        // n·K/N = 1
        let (m, _) = moments(&xs);
        assert!((m - 1.0).abs() < 0.04, "mean {m}");
    }

    #[test]
    fn relational_checks() {
        assert!(Hypergeometric.validate(&Params::new().with("K", 60.0)).is_err());
        assert!(Hypergeometric.validate(&Params::new().with("n", 51.0)).is_err());
        assert!(Hypergeometric.validate(&Params::new().with("n", 50.0)).is_ok());
    }
}
