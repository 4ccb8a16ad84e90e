use fuzzy_core::algebra::{
    algebraic_product, algebraic_sum, complement, intersection, union, SNorm, TNorm,
};
use fuzzy_core::defuzz::{bisector, centroid, mean_of_maximum, mean_of_maximum_within};
use fuzzy_core::membership::{gaussian, sigmoid, trapezoidal, triangular};
use fuzzy_core::{FuzzySet, Membership};
use proptest::prelude::*;

fn degree() -> impl Strategy<Value = f64> {
    0.0..=1.0f64
}

/// Ascending universe with degrees of the same length
fn curve() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::vec(degree(), 1..64).prop_map(|degrees| {
        let universe = (0..degrees.len()).map(|i| i as f64 * 0.5 - 3.).collect();
        (universe, degrees)
    })
}

proptest! {
    #[test]
    fn double_complement_is_identity(a in degree()) {
        prop_assert!((complement(complement(a)) - a).abs() < 1e-12);
    }

    #[test]
    fn algebraic_sum_never_below_max_next_to_one(ulps in 1u32..4096, b in degree()) {
        let a = 1. - f64::from(ulps) * f64::EPSILON / 2.;

        prop_assert!(algebraic_sum(a, b) >= union(a, b));
        prop_assert!(algebraic_sum(b, a) >= union(a, b));
    }

    #[test]
    fn intersection_below_union(a in degree(), b in degree()) {
        prop_assert!(intersection(a, b) <= union(a, b));
    }

    #[test]
    fn algebraic_norms_bounded_by_min_max(a in degree(), b in degree()) {
        prop_assert!(algebraic_product(a, b) <= intersection(a, b));
        prop_assert!(algebraic_sum(a, b) >= union(a, b));
    }

    #[test]
    fn norms_stay_in_unit_interval(a in degree(), b in degree()) {
        for t in [TNorm::Min, TNorm::Prod, TNorm::BoundedProd, TNorm::DrasticProd] {
            let v = t.call(a, b);
            prop_assert!((0. ..=1.).contains(&v));
            prop_assert_eq!(v, t.call(b, a));
        }
        for t in [TNorm::Min, TNorm::Prod, TNorm::DrasticProd] {
            prop_assert_eq!(t.call(a, 1.), a);
        }
        for s in [SNorm::Max, SNorm::ProbOr, SNorm::BoundedSum, SNorm::DrasticSum] {
            let v = s.call(a, b);
            prop_assert!((0. ..=1.).contains(&v));
            prop_assert_eq!(s.call(a, 0.), a);
        }
    }

    #[test]
    fn triangle_hits_its_corners(a in -100.0..100.0f64, w1 in 0.01..50.0f64, w2 in 0.01..50.0f64) {
        let (b, c) = (a + w1, a + w1 + w2);
        let tri = triangular(a, b, c).unwrap();

        prop_assert_eq!(tri.evaluate(a), 0.);
        prop_assert_eq!(tri.evaluate(b), 1.);
        prop_assert_eq!(tri.evaluate(c), 0.);
    }

    #[test]
    fn shapes_produce_degrees(x in -1e3..1e3f64, center in -50.0..50.0f64, spread in 0.1..20.0f64) {
        let shapes = [
            triangular(center - spread, center, center + spread).unwrap(),
            trapezoidal(center - 2. * spread, center - spread, center + spread, center + 2. * spread).unwrap(),
            gaussian(center, spread).unwrap(),
            sigmoid(1. / spread, center).unwrap(),
            sigmoid(-1. / spread, center).unwrap(),
        ];

        for shape in shapes {
            let m = shape.evaluate(x);
            prop_assert!((0. ..=1.).contains(&m), "{shape:?} gave {m} at {x}");
        }
    }

    #[test]
    fn fuzzy_set_always_clamps(x in -1e6..1e6f64, scale in -1e3..1e3f64) {
        let set = FuzzySet::new("scaled", move |x: f64| x * scale);
        let m = set.membership(x);

        prop_assert!((0. ..=1.).contains(&m));
        prop_assert_eq!(m, set.degree(x));
    }

    #[test]
    fn defuzzified_value_inside_universe((x, m) in curve()) {
        let (lo, hi) = (x[0], x[x.len() - 1]);
        let total: f64 = m.iter().sum();

        for crisp in [bisector(&x, &m).unwrap(), mean_of_maximum(&x, &m).unwrap()] {
            prop_assert!(lo <= crisp && crisp <= hi);
        }

        let c = centroid(&x, &m).unwrap();
        if total > 0. {
            prop_assert!(lo - 1e-9 <= c && c <= hi + 1e-9);
        } else {
            prop_assert_eq!(c, 0.);
        }
    }

    #[test]
    fn exact_tolerance_matches_mean_of_maximum((x, m) in curve()) {
        prop_assert_eq!(mean_of_maximum_within(&x, &m, 0.).unwrap(), mean_of_maximum(&x, &m).unwrap());
    }
}
