use fuzzy_core::algebra::{complement_each, intersection_each, union_each};
use fuzzy_core::defuzz::{bisector, centroid, largest_of_maximum, mean_of_maximum, smallest_of_maximum};
use fuzzy_core::linspace::{arange, universe};
use fuzzy_core::membership::{trapezoidal, triangular};
use fuzzy_core::{Curve, Defuzzification, FuzzyConfig, FuzzyError, FuzzySet, Membership, SNorm, Shape, TNorm};

fn integers() -> Vec<f64> {
    universe(0., 100., 1.).unwrap()
}

#[test]
fn test_symmetric_centroid() {
    let x = integers();
    let m = triangular(0., 50., 100.).unwrap().sample(&x);

    assert!((centroid(&x, &m).unwrap() - 50.).abs() < 1.);
    assert_eq!(bisector(&x, &m).unwrap(), 50.);
    assert_eq!(mean_of_maximum(&x, &m).unwrap(), 50.);
}

#[test]
fn test_plateau_mean_of_maximum() {
    let x = integers();
    let m = trapezoidal(0., 25., 75., 100.).unwrap().sample(&x);

    assert!((mean_of_maximum(&x, &m).unwrap() - 50.).abs() < 1.);
    assert_eq!(smallest_of_maximum(&x, &m).unwrap(), 25.);
    assert_eq!(largest_of_maximum(&x, &m).unwrap(), 75.);
}

#[test]
fn test_edge_apex_and_ramp() {
    let cold = triangular(0., 0., 20.).unwrap();

    assert_eq!(cold.evaluate(10.), 0.5);
    assert_eq!(cold.evaluate(0.), 1.);

    let trap = trapezoidal(1., 3., 7., 9.).unwrap();

    assert_eq!(trap.evaluate(5.), 1.);
    assert_eq!(trap.evaluate(2.), 0.5);
}

#[test]
fn test_zero_mass_fallbacks() {
    let x = [0., 1., 2., 3.];
    let m = [0.; 4];

    assert_eq!(centroid(&x, &m), Ok(0.));
    assert_eq!(bisector(&x, &m), Ok(0.));

    // Away from zero the fallback still answers 0
    assert_eq!(centroid(&[10., 20.], &[0., 0.]), Ok(0.));
}

#[test]
fn test_empty_input() {
    let empty: &[f64] = &[];

    assert_eq!(centroid(empty, empty), Err(FuzzyError::EmptyInput));
    assert_eq!(bisector(empty, empty), Err(FuzzyError::EmptyInput));
    assert_eq!(mean_of_maximum(empty, empty), Err(FuzzyError::EmptyInput));
}

#[test]
fn test_set_operations_over_universe() {
    let x = arange(0., 11., 0.1).unwrap();
    let low = FuzzySet::new("low", Shape::triangular(0., 3., 6.).unwrap());
    let high = FuzzySet::new("high", Shape::triangular(4., 7., 10.).unwrap());
    let a = low.sample(&x);
    let b = high.sample(&x);

    let either = union_each(&a, &b).unwrap();
    let both = intersection_each(&a, &b).unwrap();
    let not_low = complement_each(&a);

    for i in 0..x.len() {
        assert!(both[i] <= either[i]);
        assert!((not_low[i] + a[i] - 1.).abs() < 1e-12);
    }

    // The sets only overlap between 4 and 6
    let overlap = Curve::new(x.clone(), both).unwrap();

    assert!(overlap.interp_membership(3.) == 0.);
    assert!(overlap.interp_membership(5.) > 0.);
    assert!((overlap.defuzzify(Defuzzification::Centroid) - 5.).abs() < 0.1);
}

#[test]
fn test_fan_speed_pipeline() {
    // temperature 25 fires "medium" fully and nothing else
    let speed = universe(0., 100., 1.).unwrap();
    let low = Shape::triangular(0., 0., 50.).unwrap().sample(&speed);
    let medium = Shape::triangular(20., 50., 80.).unwrap().sample(&speed);
    let high = Shape::triangular(50., 100., 100.).unwrap().sample(&speed);

    let cold = Shape::triangular(0., 0., 20.).unwrap().evaluate(25.);
    let warm = Shape::triangular(10., 25., 35.).unwrap().evaluate(25.);
    let hot = Shape::triangular(30., 40., 40.).unwrap().evaluate(25.);

    let config = FuzzyConfig::new(TNorm::Min, SNorm::Max, Defuzzification::Centroid);
    let clip = |degrees: &[f64], strength: f64| config.and(degrees, &vec![strength; degrees.len()]).unwrap();
    let rules = [clip(&low, cold), clip(&medium, warm), clip(&high, hot)];
    let aggregated = config
        .aggregate(rules.iter().map(Vec::as_slice))
        .unwrap()
        .unwrap();
    let curve = Curve::new(speed, aggregated).unwrap();

    assert!((config.defuzzify(&curve).unwrap() - 50.).abs() < 1e-9);
}

#[test]
fn test_clamped_custom_set() {
    let x = integers();
    let loud = FuzzySet::with_universe("loud", |db: f64| (db - 40.) / 40., x).unwrap();
    let curve = loud.curve().unwrap();

    assert!(curve.degrees().iter().all(|m| (0. ..=1.).contains(m)));
    assert_eq!(curve.defuzzify(Defuzzification::SmallestOfMaximum), 80.);
    assert_eq!(curve.defuzzify(Defuzzification::LargestOfMaximum), 100.);
}
