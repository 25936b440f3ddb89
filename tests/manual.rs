//! Free-hand distribution properties.

mod util;

mod manual_tests {
    use super::util::assert_close;
    use clt_kernels::kernels::aggregate::mean;
    use clt_kernels::kernels::scientific::distributions::manual::state::trapezoid_area;
    use clt_kernels::kernels::scientific::distributions::manual::stroke::StrokeRecorder;
    use clt_kernels::kernels::scientific::distributions::manual::ManualDistribution;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn wobbly() -> ManualDistribution {
        let mut d = ManualDistribution::new();
        for (x, y) in [(1.5, 3.0), (-2.0, 0.5), (0.0, 2.0), (3.0, 0.0), (-4.0, 1.0), (2.2, 4.5)] {
            d.add_point(x, y);
        }
        d
    }

    #[test]
    fn normalisation_is_idempotent() {
        let mut d = wobbly();
        d.normalize();
        let once = d.get_points();
        d.normalize();
        let twice = d.get_points();
        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(&twice) {
            assert_close(a.0, b.0, 1e-12);
            assert_close(a.1, b.1, 1e-12);
        }
    }

    #[test]
    fn normalised_area_is_one() {
        let mut d = wobbly();
        d.normalize();
        assert!(d.is_normalized());
        assert!((trapezoid_area(&d.points()) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cdf_runs_from_zero_to_one() {
        let mut d = wobbly();
        d.normalize();
        assert_eq!(d.cdf(-4.0), 0.0);
        assert_close(d.cdf(3.0), 1.0, 1e-9);
        let mut prev = 0.0;
        for i in 0..=700 {
            let x = -4.5 + i as f64 * 0.01;
            let c = d.cdf(x);
            assert!(c + 1e-12 >= prev, "cdf decreased at {x}: {prev} -> {c}");
            prev = c;
        }
    }

    #[test]
    fn empty_curve_is_inert() {
        let mut d = ManualDistribution::new();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(d.sample(&mut rng), 0.0);
        let s = d.stats();
        assert_eq!((s.mean, s.variance), (0.0, 0.0));
    }

    #[test]
    fn triangle_end_to_end() {
        let mut d = ManualDistribution::new();
        d.add_point(-5.0, 0.0);
        d.add_point(0.0, 1.0);
        d.add_point(5.0, 0.0);
        d.normalize();
        let mut rng = StdRng::seed_from_u64(2025);
        let xs = d.generate_samples(1_000, &mut rng);
        assert!(xs.iter().all(|x| (-5.0..=5.0).contains(x)));
        let m = mean(&xs);
        assert!(m.abs() < 0.3, "mean {m}");
    }

    #[test]
    fn drawn_stroke_becomes_a_density() {
        let mut d = ManualDistribution::new();
        let mut rec = StrokeRecorder::default();
        rec.begin(&mut d, -3.0, 0.0);
        for (x, y) in [(-1.5, 0.8), (-1.49, 0.8), (0.0, 1.2), (1.5, 0.6), (3.0, 0.0)] {
            rec.extend(&mut d, x, y);
        }
        rec.finish(&mut d);
        assert!(d.is_normalized());
        assert!(d.len() > 20);
        assert_close(d.cdf(3.0), 1.0, 1e-9);
        let s = d.stats();
        assert!(s.mean.abs() < 0.5);
        assert!(s.variance > 0.0);
    }
}
