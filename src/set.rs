use crate::curve::{check_ascending, Curve};
use crate::error::{FuzzyError, Result};
use crate::membership::{Membership, Shape};

/// A named membership function, optionally tied to a discretized universe.
///
/// Degrees coming out of a `FuzzySet` are always within `[0, 1]`, whatever
/// the wrapped function returns.
#[derive(Clone, Debug)]
pub struct FuzzySet<M = Shape> {
    name: String,
    membership_fn: M,
    universe: Option<Vec<f64>>,
}

impl<M: Membership> FuzzySet<M> {
    pub fn new(name: impl Into<String>, membership_fn: M) -> Self {
        Self {
            name: name.into(),
            membership_fn,
            universe: None,
        }
    }

    /// The universe has to be non empty and strictly ascending
    pub fn with_universe(name: impl Into<String>, membership_fn: M, universe: Vec<f64>) -> Result<Self> {
        if universe.is_empty() {
            return Err(FuzzyError::EmptyInput);
        }
        check_ascending(&universe)?;

        Ok(Self {
            name: name.into(),
            membership_fn,
            universe: Some(universe),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn membership_fn(&self) -> &M {
        &self.membership_fn
    }

    pub fn universe(&self) -> Option<&[f64]> {
        self.universe.as_deref()
    }

    pub fn membership(&self, x: f64) -> f64 {
        let degree = self.membership_fn.degree(x);

        // NaN would slip through clamp
        if degree.is_nan() {
            0.
        } else {
            degree.clamp(0., 1.)
        }
    }

    /// Samples the set over its own universe, if it has one
    pub fn curve(&self) -> Option<Curve<f64>> {
        let universe = self.universe.as_ref()?;
        let degrees = self.sample(universe);

        Some(Curve::from_sorted(universe.clone(), degrees))
    }
}

impl<M: Membership> Membership for FuzzySet<M> {
    fn degree(&self, x: f64) -> f64 {
        self.membership(x)
    }
}

#[test]
fn test_fuzzy_set() {
    let cold = FuzzySet::new("Temperature Cold", Shape::triangular(0., 0., 20.).unwrap());

    assert_eq!(cold.name(), "Temperature Cold");
    assert_eq!(cold.membership(0.), 1.);
    assert_eq!(cold.membership(10.), 0.5);
    assert_eq!(cold.membership(20.), 0.);
    assert_eq!(cold.degree(10.), cold.membership(10.));
    assert!(cold.universe().is_none());
    assert!(cold.curve().is_none());
}

#[test]
fn test_membership_is_clamped() {
    let wild = FuzzySet::new("wild", |x: f64| x * 2. - 1.);

    assert_eq!(wild.membership(5.), 1.);
    assert_eq!(wild.membership(-5.), 0.);
    assert_eq!(wild.membership(0.75), 0.5);

    let broken = FuzzySet::new("broken", |_: f64| f64::NAN);

    assert_eq!(broken.membership(1.), 0.);
    assert_eq!(broken.sample(&[1., 2.]), vec![0., 0.]);
}

#[test]
fn test_universe_validation() {
    let shape = Shape::gaussian(5., 1.5).unwrap();

    assert_eq!(
        FuzzySet::with_universe("x", shape, vec![]).unwrap_err(),
        FuzzyError::EmptyInput
    );
    assert!(matches!(
        FuzzySet::with_universe("x", shape, vec![0., 1., 1., 2.]),
        Err(FuzzyError::InvalidParameter { .. })
    ));
    assert!(matches!(
        FuzzySet::with_universe("x", shape, vec![0., 2., 1.]),
        Err(FuzzyError::InvalidParameter { .. })
    ));

    let set = FuzzySet::with_universe("x", shape, vec![3.5, 5., 6.5]).unwrap();
    let curve = set.curve().unwrap();

    assert_eq!(curve.domain(), &[3.5, 5., 6.5]);
    assert_eq!(curve.degrees()[1], 1.);
    assert_eq!(curve.degrees()[0], curve.degrees()[2]);
}
