use std::cmp::Ordering;

use num::Float;

use crate::defuzz::{check_curve, check_tolerance, Defuzzification};
use crate::error::{FuzzyError, Result};
use crate::math::{interp, interp_one};

pub(crate) fn check_ascending<F: Float>(domain: &[F]) -> Result<()> {
    let broken = domain
        .windows(2)
        .position(|w| w[0].partial_cmp(&w[1]) != Some(Ordering::Less));

    match broken {
        Some(i) => Err(FuzzyError::invalid(format!(
            "domain must be strictly ascending, broken at index {}",
            i + 1
        ))),
        None => Ok(()),
    }
}

/// A membership function sampled over a finite universe.
///
/// Both halves have the same, non zero length and the domain is strictly ascending.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve<F> {
    domain: Vec<F>,
    degrees: Vec<F>,
}

impl<F: Float> Curve<F> {
    pub fn new(domain: Vec<F>, degrees: Vec<F>) -> Result<Self> {
        check_curve(&domain, &degrees)?;
        check_ascending(&domain)?;

        Ok(Self { domain, degrees })
    }

    /// Callers guarantee the invariants
    pub(crate) fn from_sorted(domain: Vec<F>, degrees: Vec<F>) -> Self {
        debug_assert!(check_curve(&domain, &degrees).is_ok());
        debug_assert!(check_ascending(&domain).is_ok());

        Self { domain, degrees }
    }

    pub fn domain(&self) -> &[F] {
        &self.domain
    }

    pub fn degrees(&self) -> &[F] {
        &self.degrees
    }

    pub fn into_parts(self) -> (Vec<F>, Vec<F>) {
        (self.domain, self.degrees)
    }

    /// Replaces the degrees, keeping the domain
    pub fn with_degrees(&self, degrees: Vec<F>) -> Result<Self> {
        check_curve(&self.domain, &degrees)?;

        Ok(Self {
            domain: self.domain.clone(),
            degrees,
        })
    }

    pub fn defuzzify(&self, method: Defuzzification) -> F {
        method.reduce(&self.domain, &self.degrees, F::zero())
    }

    pub fn defuzzify_within(&self, method: Defuzzification, tolerance: F) -> Result<F> {
        check_tolerance(tolerance)?;

        Ok(method.reduce(&self.domain, &self.degrees, tolerance))
    }

    /// Degree at `x`, linearly interpolated between samples and held constant past
    /// either end of the domain
    pub fn interp_membership(&self, x: F) -> F {
        interp_one(x, &self.domain, &self.degrees)
    }

    /// Resamples the curve onto another universe
    pub fn resample(&self, universe: &[F]) -> Result<Self> {
        if universe.is_empty() {
            return Err(FuzzyError::EmptyInput);
        }
        check_ascending(universe)?;

        let degrees = interp(universe.iter().copied(), &self.domain, &self.degrees);

        Ok(Self::from_sorted(universe.to_vec(), degrees))
    }
}

#[test]
fn test_curve_validation() {
    assert_eq!(Curve::<f64>::new(vec![], vec![]), Err(FuzzyError::EmptyInput));
    assert_eq!(
        Curve::new(vec![0., 1.], vec![0.5]),
        Err(FuzzyError::LengthMismatch { left: 2, right: 1 })
    );
    assert!(matches!(
        Curve::new(vec![0., 2., 1.], vec![0., 0., 0.]),
        Err(FuzzyError::InvalidParameter { .. })
    ));
    assert!(matches!(
        Curve::new(vec![0., f64::NAN], vec![0., 0.]),
        Err(FuzzyError::InvalidParameter { .. })
    ));

    let curve = Curve::new(vec![0., 1., 2.], vec![0., 1., 0.]).unwrap();

    assert_eq!(curve.with_degrees(vec![1.]), Err(FuzzyError::LengthMismatch { left: 3, right: 1 }));
    assert_eq!(curve.into_parts(), (vec![0., 1., 2.], vec![0., 1., 0.]));
}

#[test]
fn test_curve_defuzzify() {
    let curve = Curve::new(vec![0., 1., 2., 3., 4.], vec![0., 0.5, 1., 1., 0.5]).unwrap();

    assert_eq!(curve.defuzzify(Defuzzification::MeanOfMaximum), 2.5);
    assert_eq!(curve.defuzzify(Defuzzification::LargestOfMaximum), 3.);
    assert_eq!(curve.defuzzify(Defuzzification::Bisector), 2.);
    assert_eq!(curve.defuzzify_within(Defuzzification::SmallestOfMaximum, 0.5).unwrap(), 1.);
    assert!(curve.defuzzify_within(Defuzzification::MeanOfMaximum, -0.1).is_err());
}

#[test]
fn test_interp_membership() {
    let curve = Curve::new(vec![0., 10., 20.], vec![0., 1., 0.5]).unwrap();

    assert_eq!(curve.interp_membership(5.), 0.5);
    assert_eq!(curve.interp_membership(15.), 0.75);
    assert_eq!(curve.interp_membership(-3.), 0.);
    assert_eq!(curve.interp_membership(30.), 0.5);
    assert_eq!(curve.interp_membership(10.), 1.);

    let fine = curve.resample(&[0., 5., 10., 15., 20.]).unwrap();

    assert_eq!(fine.degrees(), &[0., 0.5, 1., 0.75, 0.5]);
    assert!(curve.resample(&[]).is_err());
}
