//! Descriptive statistics over generated data.

mod util;

mod statistics_tests {
    use super::util::{assert_close, draws};
    use clt_kernels::kernels::aggregate::{iqr, kurtosis, median, skewness};
    use clt_kernels::kernels::histogram::{calculate_bins, sturges_bin_count};
    use clt_kernels::kernels::scientific::goodness_of_fit::{kl_divergence, ks_statistic};
    use clt_kernels::kernels::summary::SampleStatistics;

    #[test]
    fn histogram_counts_every_sample() {
        for (seed, n) in [(1u64, 1usize), (2, 7), (3, 100), (4, 2_500)] {
            let xs = draws(seed, n, |rng| rng.standard_normal() * 4.0);
            let h = calculate_bins(&xs, None);
            assert_eq!(h.counts.iter().sum::<usize>(), n, "n = {n}");
            assert_eq!(h.counts.len(), sturges_bin_count(n));
            let custom = calculate_bins(&xs, Some(13));
            assert_eq!(custom.counts.iter().sum::<usize>(), n);
            assert_eq!(custom.breaks.len(), 14);
        }
    }

    #[test]
    fn exponential_shape() {
        // skewness 2, excess kurtosis 6, median ln 2, IQR ln 3
        let xs = draws(6, 50_000, |rng| -(1.0 - rng.uniform()).ln());
        assert!((skewness(&xs) - 2.0).abs() < 0.25, "skew {}", skewness(&xs));
        assert!((kurtosis(&xs) - 6.0).abs() < 1.5, "kurt {}", kurtosis(&xs));
        assert!((median(&xs) - std::f64::consts::LN_2).abs() < 0.02);
        assert!((iqr(&xs) - 3f64.ln()).abs() < 0.03);
    }

    #[test]
    fn fit_measures_separate_shapes() {
        let normal = draws(7, 4_000, |rng| rng.standard_normal());
        let skewed = draws(8, 4_000, |rng| -(1.0 - rng.uniform()).ln());
        assert!(ks_statistic(&skewed) > 2.0 * ks_statistic(&normal));
        assert!(kl_divergence(&skewed, 20) > kl_divergence(&normal, 20));
    }

    #[test]
    fn summary_of_standard_normal() {
        let xs = draws(9, 20_000, |rng| rng.standard_normal());
        let s = SampleStatistics::compute(&xs);
        assert_eq!(s.count, 20_000);
        assert!(s.mean.abs() < 0.03);
        assert_close(s.sd, 1.0, 0.03);
        assert!(s.skewness.abs() < 0.1);
        assert!(s.kurtosis.abs() < 0.2);
        assert!(s.ks < 0.02);
    }
}
