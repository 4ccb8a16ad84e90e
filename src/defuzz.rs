//! Reduction of a sampled membership curve to one crisp value.
//!
//! All methods take the universe and the degrees sampled on it as two slices of
//! equal, non zero length. Length problems are reported before emptiness.

use std::str::FromStr;

use num::Float;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{check_lengths, FuzzyError, Result};
use crate::math::cumsum;

pub(crate) fn check_curve<F>(universe: &[F], membership: &[F]) -> Result<()> {
    check_lengths(universe.len(), membership.len())?;

    if universe.is_empty() {
        return Err(FuzzyError::EmptyInput);
    }

    Ok(())
}

pub(crate) fn check_tolerance<F: Float>(tolerance: F) -> Result<()> {
    if tolerance.is_nan() || tolerance < F::zero() {
        return Err(FuzzyError::invalid("tolerance must be a non negative number"));
    }

    Ok(())
}

/// Method for defuzzificating the resulting membership function.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Defuzzification {
    /// Center of gravity of the sampled degrees
    #[default]
    Centroid,
    /// Sample splitting the degree mass in two halves
    Bisector,
    /// Mean of the values for which the membership function is maximum
    MeanOfMaximum,
    /// Smallest value for which the membership function is maximum
    SmallestOfMaximum,
    /// Largest value for which the membership function is maximum
    LargestOfMaximum,
}

impl Defuzzification {
    pub fn call<F: Float>(self, universe: &[F], membership: &[F]) -> Result<F> {
        check_curve(universe, membership)?;

        Ok(self.reduce(universe, membership, F::zero()))
    }

    /// Like [`call`](Self::call), but degrees within `tolerance` of the maximum
    /// count as maximal for the `*OfMaximum` methods.
    pub fn call_within<F: Float>(self, universe: &[F], membership: &[F], tolerance: F) -> Result<F> {
        check_tolerance(tolerance)?;
        check_curve(universe, membership)?;

        Ok(self.reduce(universe, membership, tolerance))
    }

    /// Inputs must already have passed `check_curve`
    pub(crate) fn reduce<F: Float>(self, universe: &[F], membership: &[F], tolerance: F) -> F {
        match self {
            Self::Centroid => centroid_of(universe, membership),
            Self::Bisector => bisector_of(universe, membership),
            Self::MeanOfMaximum => {
                let (count, sum) = maxima(universe, membership, tolerance)
                    .fold((F::zero(), F::zero()), |(count, sum), u| (count + F::one(), sum + u));

                sum / count
            },
            Self::SmallestOfMaximum => maxima(universe, membership, tolerance)
                .reduce(F::min)
                .unwrap_or_else(F::nan),
            Self::LargestOfMaximum => maxima(universe, membership, tolerance)
                .reduce(F::max)
                .unwrap_or_else(F::nan),
        }
    }
}

impl FromStr for Defuzzification {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "centroid" | "cog" => Ok(Self::Centroid),
            "bisector" | "boa" => Ok(Self::Bisector),
            "mean_of_maximum" | "mom" => Ok(Self::MeanOfMaximum),
            "smallest_of_maximum" | "som" => Ok(Self::SmallestOfMaximum),
            "largest_of_maximum" | "lom" => Ok(Self::LargestOfMaximum),
            _ => Err(FuzzyError::invalid(format!("unknown defuzzification method `{s}`"))),
        }
    }
}

fn centroid_of<F: Float>(universe: &[F], membership: &[F]) -> F {
    let (num, den) = universe
        .iter()
        .zip(membership)
        .fold((F::zero(), F::zero()), |(num, den), (u, m)| (num + *u * *m, den + *m));

    if den == F::zero() {
        debug!("centroid of a curve without membership, falling back to 0");
        return F::zero();
    }

    num / den
}

fn bisector_of<F: Float>(universe: &[F], membership: &[F]) -> F {
    let cum = cumsum(membership);
    let total = cum[cum.len() - 1];

    if total == F::zero() {
        debug!("bisector of a curve without membership, falling back to 0");
        return F::zero();
    }

    let half = total / (F::one() + F::one());

    match cum.iter().position(|c| *c >= half) {
        Some(i) => universe[i],
        None => {
            debug!("cumulative degree never reached half of the total");
            universe[universe.len() - 1]
        },
    }
}

/// Universe values whose degree is the maximum, give or take `tolerance`.
/// With a zero tolerance the comparison is exact.
fn maxima<'c, F: Float>(universe: &'c [F], membership: &'c [F], tolerance: F) -> impl Iterator<Item = F> + 'c {
    let maximum = membership.iter().copied().fold(F::neg_infinity(), F::max);

    universe
        .iter()
        .copied()
        .zip(membership.iter().copied())
        .filter_map(move |(u, m)| {
            let is_max = if tolerance == F::zero() {
                m == maximum
            } else {
                maximum - m <= tolerance
            };

            if is_max {
                Some(u)
            } else {
                None
            }
        })
}

/// `Σ(u·m) / Σm`, or `0` when the curve has no membership at all. A `0` result
/// therefore doesn't prove the mass is centered on zero.
pub fn centroid<F: Float>(universe: &[F], membership: &[F]) -> Result<F> {
    Defuzzification::Centroid.call(universe, membership)
}

/// First sample at which the running degree sum reaches half of the total. This
/// works on the sampled mass, so the result depends on how densely the universe is
/// sampled. Returns `0` when the total is `0`.
pub fn bisector<F: Float>(universe: &[F], membership: &[F]) -> Result<F> {
    Defuzzification::Bisector.call(universe, membership)
}

/// Mean of every universe value whose degree is exactly the maximum degree
pub fn mean_of_maximum<F: Float>(universe: &[F], membership: &[F]) -> Result<F> {
    Defuzzification::MeanOfMaximum.call(universe, membership)
}

/// Mean of maximum where degrees at most `tolerance` below the maximum also count.
/// Useful when the curve went through several combinators and picked up rounding error.
pub fn mean_of_maximum_within<F: Float>(universe: &[F], membership: &[F], tolerance: F) -> Result<F> {
    Defuzzification::MeanOfMaximum.call_within(universe, membership, tolerance)
}

pub fn smallest_of_maximum<F: Float>(universe: &[F], membership: &[F]) -> Result<F> {
    Defuzzification::SmallestOfMaximum.call(universe, membership)
}

pub fn largest_of_maximum<F: Float>(universe: &[F], membership: &[F]) -> Result<F> {
    Defuzzification::LargestOfMaximum.call(universe, membership)
}

#[test]
fn test_centroid() {
    let x = [0., 1., 2., 3., 4.];
    let m = [0., 0.5, 1., 0.5, 0.];

    assert_eq!(centroid(&x, &m).unwrap(), 2.);
    assert_eq!(centroid(&[5.], &[1.]).unwrap(), 5.);
    assert_eq!(centroid(&[0., 1., 2., 3.], &[0., 0., 0., 0.]).unwrap(), 0.);
    assert_eq!(centroid(&[1., 2.], &[0.25, 0.75]).unwrap(), 1.75);
}

#[test]
fn test_bisector() {
    let x = [0., 1., 2., 3., 4.];

    assert_eq!(bisector(&x, &[0., 0.5, 1., 0.5, 0.]).unwrap(), 2.);
    assert_eq!(bisector(&x, &[1., 0., 0., 0., 0.]).unwrap(), 0.);
    assert_eq!(bisector(&x, &[0., 0., 0., 0., 1.]).unwrap(), 4.);
    assert_eq!(bisector(&x, &[0.; 5]).unwrap(), 0.);
    assert_eq!(bisector(&[7.], &[0.5]).unwrap(), 7.);

    // A NaN total is never reached, so the last domain value comes back
    assert_eq!(bisector(&[0., 1.], &[0.5, f64::NAN]).unwrap(), 1.);
}

#[test]
fn test_maximum_methods() {
    let x = [0., 1., 2., 3., 4.];
    let m = [0., 0.5, 1., 1., 0.5];

    assert_eq!(mean_of_maximum(&x, &m).unwrap(), 2.5);
    assert_eq!(smallest_of_maximum(&x, &m).unwrap(), 2.);
    assert_eq!(largest_of_maximum(&x, &m).unwrap(), 3.);

    // Every sample is maximal on a flat curve
    assert_eq!(mean_of_maximum(&x, &[0.; 5]).unwrap(), 2.);
}

#[test]
fn test_mean_of_maximum_tolerance() {
    let x = [0., 1., 2., 3.];
    let m = [0.2, 0.9, 1., 0.9999999];

    assert_eq!(mean_of_maximum(&x, &m).unwrap(), 2.);
    assert_eq!(mean_of_maximum_within(&x, &m, 0.).unwrap(), 2.);
    assert_eq!(mean_of_maximum_within(&x, &m, 1e-6).unwrap(), 2.5);
    assert_eq!(mean_of_maximum_within(&x, &m, 0.2).unwrap(), 2.);
    assert!(mean_of_maximum_within(&x, &m, -1.).is_err());
    assert!(mean_of_maximum_within(&x, &m, f64::NAN).is_err());
}

#[test]
fn test_invalid_curves() {
    let empty: [f64; 0] = [];

    for method in [
        Defuzzification::Centroid,
        Defuzzification::Bisector,
        Defuzzification::MeanOfMaximum,
        Defuzzification::SmallestOfMaximum,
        Defuzzification::LargestOfMaximum,
    ] {
        assert_eq!(method.call(&empty, &empty), Err(FuzzyError::EmptyInput));
        assert_eq!(
            method.call(&[1., 2.], &[1.]),
            Err(FuzzyError::LengthMismatch { left: 2, right: 1 })
        );
    }
}

#[test]
fn test_method_names() {
    assert_eq!("cog".parse::<Defuzzification>().unwrap(), Defuzzification::Centroid);
    assert_eq!("mean_of_maximum".parse::<Defuzzification>().unwrap(), Defuzzification::MeanOfMaximum);
    assert_eq!("boa".parse::<Defuzzification>().unwrap(), Defuzzification::Bisector);
    assert!("median".parse::<Defuzzification>().is_err());
}
