//! Closed form membership functions.
//!
//! Every constructor validates its parameters up front, so a [`Shape`] that
//! exists can always be evaluated.

use serde::{Deserialize, Serialize};

use crate::error::{FuzzyError, Result};

/// Anything that maps a point of the universe to a membership degree.
///
/// Implemented by [`Shape`], by plain closures and by [`FuzzySet`](crate::FuzzySet).
pub trait Membership {
    fn degree(&self, x: f64) -> f64;

    /// Evaluates every point of `xs`
    fn sample(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|x| self.degree(*x)).collect()
    }
}

impl<M: Fn(f64) -> f64> Membership for M {
    fn degree(&self, x: f64) -> f64 {
        self(x)
    }
}

/// A membership function described by its shape parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape {
    Triangular { a: f64, b: f64, c: f64 },
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
    Gaussian { mean: f64, sigma: f64 },
    Sigmoid { steepness: f64, center: f64 },
}

fn check_finite(params: &[f64]) -> Result<()> {
    if params.iter().all(|p| p.is_finite()) {
        Ok(())
    } else {
        Err(FuzzyError::invalid(format!("parameters must be finite, got {params:?}")))
    }
}

impl Shape {
    /// Requires `a <= b <= c`. `a == b` or `b == c` give a right or left triangle.
    pub fn triangular(a: f64, b: f64, c: f64) -> Result<Self> {
        check_finite(&[a, b, c])?;

        if !(a <= b && b <= c) {
            return Err(FuzzyError::invalid(format!(
                "triangular needs a <= b <= c, got ({a}, {b}, {c})"
            )));
        }

        Ok(Self::Triangular { a, b, c })
    }

    /// Requires `a <= b <= c <= d`. `[b, c]` is the plateau.
    pub fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> Result<Self> {
        check_finite(&[a, b, c, d])?;

        if !(a <= b && b <= c && c <= d) {
            return Err(FuzzyError::invalid(format!(
                "trapezoidal needs a <= b <= c <= d, got ({a}, {b}, {c}, {d})"
            )));
        }

        Ok(Self::Trapezoidal { a, b, c, d })
    }

    pub fn gaussian(mean: f64, sigma: f64) -> Result<Self> {
        check_finite(&[mean, sigma])?;

        if sigma <= 0. {
            return Err(FuzzyError::invalid(format!("gaussian sigma must be positive, got {sigma}")));
        }

        Ok(Self::Gaussian { mean, sigma })
    }

    /// Increasing for positive `steepness`, decreasing for negative.
    pub fn sigmoid(steepness: f64, center: f64) -> Result<Self> {
        check_finite(&[steepness, center])?;

        if steepness == 0. {
            return Err(FuzzyError::invalid("sigmoid steepness must not be zero"));
        }

        Ok(Self::Sigmoid { steepness, center })
    }

    /// Revalidates a shape that was built by hand or deserialized.
    pub fn validate(self) -> Result<Self> {
        match self {
            Self::Triangular { a, b, c } => Self::triangular(a, b, c),
            Self::Trapezoidal { a, b, c, d } => Self::trapezoidal(a, b, c, d),
            Self::Gaussian { mean, sigma } => Self::gaussian(mean, sigma),
            Self::Sigmoid { steepness, center } => Self::sigmoid(steepness, center),
        }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        match *self {
            Self::Triangular { a, b, c } => {
                if x == b {
                    1.
                } else if x <= a || x >= c {
                    0.
                } else if x < b {
                    (x - a) / (b - a)
                } else {
                    (c - x) / (c - b)
                }
            },
            Self::Trapezoidal { a, b, c, d } => {
                if b <= x && x <= c {
                    1.
                } else if x <= a || x >= d {
                    0.
                } else if x < b {
                    (x - a) / (b - a)
                } else {
                    (d - x) / (d - c)
                }
            },
            Self::Gaussian { mean, sigma } => {
                let z = (x - mean) / sigma;

                (-0.5 * z * z).exp()
            },
            Self::Sigmoid { steepness, center } => 1. / (1. + (-steepness * (x - center)).exp()),
        }
    }
}

impl Membership for Shape {
    fn degree(&self, x: f64) -> f64 {
        self.evaluate(x)
    }
}

pub fn triangular(a: f64, b: f64, c: f64) -> Result<Shape> {
    Shape::triangular(a, b, c)
}

pub fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> Result<Shape> {
    Shape::trapezoidal(a, b, c, d)
}

pub fn gaussian(mean: f64, sigma: f64) -> Result<Shape> {
    Shape::gaussian(mean, sigma)
}

pub fn sigmoid(steepness: f64, center: f64) -> Result<Shape> {
    Shape::sigmoid(steepness, center)
}

#[test]
fn test_triangular() {
    let tri = triangular(0., 5., 10.).unwrap();

    assert_eq!(tri.evaluate(0.), 0.);
    assert_eq!(tri.evaluate(5.), 1.);
    assert_eq!(tri.evaluate(10.), 0.);
    assert_eq!(tri.evaluate(2.5), 0.5);
    assert_eq!(tri.evaluate(7.5), 0.5);
    assert_eq!(tri.evaluate(-3.), 0.);
    assert_eq!(tri.evaluate(42.), 0.);
}

#[test]
fn test_triangular_edge_apex() {
    let left = triangular(0., 0., 20.).unwrap();

    assert_eq!(left.evaluate(0.), 1.);
    assert_eq!(left.evaluate(10.), 0.5);
    assert_eq!(left.evaluate(20.), 0.);
    assert_eq!(left.evaluate(-1.), 0.);

    let right = triangular(30., 40., 40.).unwrap();

    assert_eq!(right.evaluate(40.), 1.);
    assert_eq!(right.evaluate(35.), 0.5);
    assert_eq!(right.evaluate(41.), 0.);

    let spike = triangular(1., 1., 1.).unwrap();

    assert_eq!(spike.evaluate(1.), 1.);
    assert_eq!(spike.evaluate(1.5), 0.);
}

#[test]
fn test_trapezoidal() {
    let trap = trapezoidal(1., 3., 7., 9.).unwrap();

    assert_eq!(trap.evaluate(5.), 1.);
    assert_eq!(trap.evaluate(2.), 0.5);
    assert_eq!(trap.evaluate(8.), 0.5);
    assert_eq!(trap.evaluate(3.), 1.);
    assert_eq!(trap.evaluate(7.), 1.);
    assert_eq!(trap.evaluate(1.), 0.);
    assert_eq!(trap.evaluate(9.), 0.);
    assert_eq!(trap.evaluate(100.), 0.);

    // Shoulder with an open left side
    let tall = trapezoidal(170., 180., 200., 200.).unwrap();

    assert_eq!(tall.evaluate(200.), 1.);
    assert_eq!(tall.evaluate(175.), 0.5);
}

#[test]
fn test_gaussian() {
    let gauss = gaussian(5., 2.).unwrap();

    assert_eq!(gauss.evaluate(5.), 1.);
    assert!(gauss.evaluate(3.) > 0.5);
    assert_eq!(gauss.evaluate(3.), gauss.evaluate(7.));
    assert!(gauss.evaluate(1.) < 0.2);
    assert!(gauss.evaluate(25.) > 0.);
}

#[test]
fn test_sigmoid() {
    let rising = sigmoid(1., 5.).unwrap();

    assert_eq!(rising.evaluate(5.), 0.5);
    assert!(rising.evaluate(10.) > 0.9);
    assert!(rising.evaluate(0.) < 0.1);
    assert!(rising.evaluate(6.) > rising.evaluate(5.5));

    let falling = sigmoid(-2., 0.).unwrap();

    assert!(falling.evaluate(1.) < falling.evaluate(-1.));
    assert!(falling.evaluate(-5.) < 1.);
}

#[test]
fn test_invalid_parameters() {
    let is_invalid = |r: Result<Shape>| matches!(r, Err(FuzzyError::InvalidParameter { .. }));

    assert!(is_invalid(triangular(5., 0., 10.)));
    assert!(is_invalid(triangular(0., 10., 5.)));
    assert!(is_invalid(trapezoidal(0., 5., 4., 10.)));
    assert!(is_invalid(trapezoidal(0., 1., 2., f64::NAN)));
    assert!(is_invalid(gaussian(0., 0.)));
    assert!(is_invalid(gaussian(0., -1.)));
    assert!(is_invalid(sigmoid(0., 3.)));
    assert!(is_invalid(sigmoid(f64::INFINITY, 3.)));
    assert!(is_invalid(Shape::Gaussian { mean: 0., sigma: -2. }.validate()));
}

#[test]
fn test_closures_and_sampling() {
    let ramp = |x: f64| x / 10.;

    assert_eq!(ramp.degree(5.), 0.5);
    assert_eq!(triangular(0., 1., 2.).unwrap().sample(&[0., 0.5, 1., 1.5, 2.]), vec![0., 0.5, 1., 0.5, 0.]);
}

#[test]
fn test_shape_serde() {
    let shape = trapezoidal(0., 25., 75., 100.).unwrap();
    let json = serde_json::to_string(&shape).unwrap();

    assert_eq!(json, r#"{"shape":"trapezoidal","a":0.0,"b":25.0,"c":75.0,"d":100.0}"#);
    assert_eq!(serde_json::from_str::<Shape>(&json).unwrap(), shape);
}
