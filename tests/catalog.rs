//! Catalog-wide density and mass checks.

mod util;

mod catalog_tests {
    use super::util::{assert_close, draws};
    use clt_kernels::kernels::scientific::distributions::registry::{
        get, registry, Category, Params,
    };
    use clt_kernels::kernels::scientific::distributions::univariate::common::{
        pmf_total, simpson,
    };

    /// `(key, lo, hi, intervals, tol)` covering all but a negligible tail at
    /// default parameters.
    const DENSITY_WINDOWS: [(&str, f64, f64, usize, f64); 20] = [
        ("normal", -12.0, 12.0, 24_000, 1e-8),
        ("uniform", 0.0, 1.0, 1_000, 1e-9),
        ("exponential", 0.0, 60.0, 60_000, 1e-7),
        ("cauchy", -1e5, 1e5, 2_000_000, 1e-4),
        ("triangular", 0.0, 1.0, 1_000, 1e-9),
        ("laplace", -40.0, 40.0, 8_000, 1e-6),
        ("log_normal", 0.0, 1_000.0, 1_000_000, 1e-6),
        ("gamma", 0.0, 60.0, 60_000, 1e-7),
        ("weibull", 0.0, 30.0, 300_000, 1e-5),
        ("beta", 0.0, 1.0, 1_000, 1e-9),
        ("pareto", 1.0, 1_000.0, 1_000_000, 1e-5),
        ("rayleigh", 0.0, 40.0, 40_000, 1e-8),
        ("gumbel", -10.0, 60.0, 70_000, 1e-7),
        ("logistic", -60.0, 60.0, 120_000, 1e-7),
        ("chi", 0.0, 40.0, 40_000, 1e-8),
        ("inverse_gaussian", 0.0, 200.0, 400_000, 1e-5),
        ("maxwell_boltzmann", 0.0, 40.0, 40_000, 1e-8),
        ("chi_squared", 0.0, 200.0, 2_000_000, 1e-4),
        ("student_t", -1_000.0, 1_000.0, 2_000_000, 1e-5),
        ("f", 0.0, 2_000.0, 2_000_000, 1e-4),
    ];

    #[test]
    fn every_continuous_density_integrates_to_one() {
        let with_pdf = registry()
            .iter()
            .filter(|d| matches!(d.category(), Category::Continuous | Category::Sampling))
            .filter(|d| d.pdf(0.5, &Params::new()).is_some())
            .count();
        assert_eq!(with_pdf, DENSITY_WINDOWS.len());

        let p = Params::new();
        for (key, lo, hi, n, tol) in DENSITY_WINDOWS {
            let d = get(key).unwrap();
            let area = simpson(|x| d.pdf(x, &p).unwrap(), lo, hi, n);
            assert!((area - 1.0).abs() < tol, "{key}: area {area}");
        }
    }

    #[test]
    fn every_discrete_mass_sums_to_one() {
        let p = Params::new();
        for d in registry().by_category(Category::Discrete) {
            let total = pmf_total(|k| d.pdf(k, &p).unwrap(), 400);
            assert!((total - 1.0).abs() < 1e-9, "{}: total {total}", d.key());
        }
    }

    #[test]
    fn discrete_masses_vanish_off_lattice() {
        let p = Params::new();
        for d in registry().by_category(Category::Discrete) {
            for x in [-1.0, 0.5, 2.25, f64::NAN] {
                assert_eq!(d.pdf(x, &p), Some(0.0), "{} at {x}", d.key());
            }
        }
    }

    #[test]
    fn binomial_support_and_mass() {
        let d = get("binomial").unwrap();
        let p = Params::new().with("n", 10.0).with("p", 0.3);
        for x in [-1.0, 0.5, 3.7, 10.5, 11.0, 20.0] {
            assert_eq!(d.pdf(x, &p), Some(0.0));
        }
        let total: f64 = (0..=10).map(|k| d.pdf(k as f64, &p).unwrap()).sum();
        assert_close(total, 1.0, 1e-6);
        // C(10,3)·0.3³·0.7⁷
        assert_close(d.pdf(3.0, &p).unwrap(), 0.266_827_932, 1e-8);
    }

    #[test]
    fn cdfs_agree_with_integrated_densities() {
        let p = Params::new();
        for d in registry().iter() {
            let Some(c) = d.cdf(0.75, &p) else { continue };
            if d.category() == Category::Discrete {
                let direct: f64 = (0..=0).map(|k| d.pdf(k as f64, &p).unwrap()).sum();
                assert_close(c, direct, 1e-12);
                continue;
            }
            let lo = match d.key() {
                "cauchy" => continue,
                "normal" | "laplace" | "logistic" => -40.0,
                "gumbel" => -10.0,
                _ => 0.0,
            };
            let area = simpson(|x| d.pdf(x, &p).unwrap(), lo, 0.75, 200_000);
            assert!((c - area).abs() < 1e-5, "{}: cdf {c} vs {area}", d.key());
        }
    }

    #[test]
    fn seeded_draws_repeat_for_every_family() {
        let p = Params::new();
        for d in registry().iter() {
            let a = draws(2024, 50, |rng| d.generate(&p, rng));
            let b = draws(2024, 50, |rng| d.generate(&p, rng));
            assert_eq!(a, b, "{}", d.key());
            assert!(a.iter().all(|x| x.is_finite()), "{}", d.key());
        }
    }
}
