// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Binomial Distribution** - *Successes in `n` Independent Trials*

use rand::{Rng, RngCore};

use crate::kernels::scientific::distributions::registry::{
    Category, DistributionSampler, ParamDescriptor, Params,
};
use crate::kernels::scientific::distributions::shared::scalar::ln_choose;
use crate::kernels::scientific::distributions::univariate::common::support_index;
use crate::utils::count_param;

const PARAMS: [ParamDescriptor; 2] = [
    ParamDescriptor::new("n", "Number of Trials", "Number of independent trials", 10.0)
        .with_min(1.0)
        .with_max(1000.0)
        .with_step(1.0),
    ParamDescriptor::new("p", "Success Probability", "Probability of success per trial", 0.5)
        .with_min(0.0)
        .with_max(1.0)
        .with_step(0.01),
];

/// Binomial distribution B(n, p). `n` is floored to an integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Binomial;

impl DistributionSampler for Binomial {
    fn key(&self) -> &'static str {
        "binomial"
    }

    fn name(&self) -> &'static str {
        "Binomial Distribution"
    }

    fn category(&self) -> Category {
        Category::Discrete
    }

    fn params(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    /// Counts successes over `n` Bernoulli trials.
    #[inline]
    fn generate(&self, params: &Params, rng: &mut dyn RngCore) -> f64 {
        let n = count_param(params.value(&PARAMS[0]));
        let p = params.value(&PARAMS[1]);
        let mut successes = 0u64;
        for _ in 0..n {
            if rng.random::<f64>() < p {
                successes += 1;
            }
        }
        successes as f64
    }

    fn pdf(&self, x: f64, params: &Params) -> Option<f64> {
        let n = count_param(params.value(&PARAMS[0]));
        let p = params.value(&PARAMS[1]);
        let Some(k) = support_index(x) else {
            return Some(0.0);
        };
        if k > n {
            return Some(0.0);
        }
        let (n, k) = (n as f64, k as f64);
        Some(ln_choose(n, k).exp() * p.powf(k) * (1.0 - p).powf(n - k))
    }
}

#[cfg(test)]
mod binomial_tests {
    use super::*;
    use crate::kernels::scientific::distributions::shared::sampler::Sampler;
    use crate::kernels::scientific::distributions::univariate::common::{
        assert_close, moments, pmf_total,
    };

    #[test]
    fn mass_function_properties() {
        let p = Params::new().with("n", 10.0).with("p", 0.3);
        let total = pmf_total(|k| Binomial.pdf(k, &p).unwrap(), 10);
        assert_close(total, 1.0, 1e-9);
        assert_eq!(Binomial.pdf(2.5, &p), Some(0.0));
        assert_eq!(Binomial.pdf(-1.0, &p), Some(0.0));
        assert_eq!(Binomial.pdf(11.0, &p), Some(0.0));
        // C(10,3)·0.3³·0.7⁷
        assert_close(Binomial.pdf(3.0, &p).unwrap(), 0.266_827_932, 1e-8);
    }

    #[test]
    fn degenerate_probabilities() {
        let zero = Params::new().with("n", 5.0).with("p", 0.0);
        assert_close(Binomial.pdf(0.0, &zero).unwrap(), 1.0, 1e-12);
        let one = Params::new().with("n", 5.0).with("p", 1.0);
        assert_close(Binomial.pdf(5.0, &one).unwrap(), 1.0, 1e-12);
    }

    #[test]
    fn sample_mean_and_variance() {
        let p = Params::new().with("n", 10.0).with("p", 0.3);
        let mut rng = Sampler::seeded(1234);
        let xs: Vec<f64> = (0..20_000).map(|_| Binomial.generate(&p, &mut rng)).collect();
        assert!(xs.iter().all(|&x| (0.0..=10.0).contains(&x) && x.fract() == 0.0));
        let (m, v) = moments(&xs);
        assert!((m - 3.0).abs() < 0.05, "mean {m}");
        assert!((v - 2.1).abs() < 0.12, "variance {v}");
    }
}
