//! Pointwise fuzzy set operators.
//!
//! Scalar operators work on single degrees. The `_each` variants broadcast them over
//! degree arrays sampled on the same universe. Whether both arrays really share a
//! universe is up to the caller, only their lengths are checked.

use std::str::FromStr;

use num::Float;
use serde::{Deserialize, Serialize};

use crate::error::{check_lengths, FuzzyError, Result};

/// OR, the standard S-norm
#[inline]
pub fn union<F: Float>(a: F, b: F) -> F {
    F::max(a, b)
}

/// AND, the standard T-norm
#[inline]
pub fn intersection<F: Float>(a: F, b: F) -> F {
    F::min(a, b)
}

/// NOT
#[inline]
pub fn complement<F: Float>(a: F) -> F {
    F::one() - a
}

#[inline]
pub fn algebraic_product<F: Float>(a: F, b: F) -> F {
    a * b
}

/// Probabilistic OR, `a + b - a·b`
///
/// Evaluated as `max + min·(1 - max)` so rounding never lands below `max(a, b)`.
#[inline]
pub fn algebraic_sum<F: Float>(a: F, b: F) -> F {
    let (hi, lo) = (F::max(a, b), F::min(a, b));

    hi + lo * (F::one() - hi)
}

#[inline]
pub fn bounded_sum<F: Float>(a: F, b: F) -> F {
    F::min(F::one(), a + b)
}

/// Łukasiewicz T-norm
#[inline]
pub fn bounded_difference<F: Float>(a: F, b: F) -> F {
    F::max(F::zero(), a + b - F::one())
}

#[inline]
pub fn drastic_sum<F: Float>(a: F, b: F) -> F {
    if a == F::zero() {
        b
    } else if b == F::zero() {
        a
    } else {
        F::one()
    }
}

#[inline]
pub fn drastic_product<F: Float>(a: F, b: F) -> F {
    if a == F::one() {
        b
    } else if b == F::one() {
        a
    } else {
        F::zero()
    }
}

/// Applies `op` to each pair of degrees. Fails if the arrays differ in length.
pub fn zip_with<F: Float>(u: &[F], v: &[F], op: impl Fn(F, F) -> F) -> Result<Vec<F>> {
    check_lengths(u.len(), v.len())?;

    Ok(u.iter().zip(v).map(|(u, v)| op(*u, *v)).collect())
}

pub fn union_each<F: Float>(u: &[F], v: &[F]) -> Result<Vec<F>> {
    zip_with(u, v, union)
}

pub fn intersection_each<F: Float>(u: &[F], v: &[F]) -> Result<Vec<F>> {
    zip_with(u, v, intersection)
}

pub fn complement_each<F: Float>(u: &[F]) -> Vec<F> {
    u.iter().copied().map(complement).collect()
}

pub fn algebraic_product_each<F: Float>(u: &[F], v: &[F]) -> Result<Vec<F>> {
    zip_with(u, v, algebraic_product)
}

pub fn algebraic_sum_each<F: Float>(u: &[F], v: &[F]) -> Result<Vec<F>> {
    zip_with(u, v, algebraic_sum)
}

/// Indices whose degree is at least `alpha`
pub fn alpha_cut<F: Float>(membership: &[F], alpha: F) -> Vec<usize> {
    membership
        .iter()
        .enumerate()
        .filter_map(|(i, m)| if *m >= alpha { Some(i) } else { None })
        .collect()
}

/// Indices whose degree is strictly above `alpha`
pub fn strong_alpha_cut<F: Float>(membership: &[F], alpha: F) -> Vec<usize> {
    membership
        .iter()
        .enumerate()
        .filter_map(|(i, m)| if *m > alpha { Some(i) } else { None })
        .collect()
}

/// Intersection operators
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TNorm {
    #[default]
    Min,
    Prod,
    BoundedProd,
    DrasticProd,
}

impl TNorm {
    pub fn call<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Min => intersection(u, v),
            Self::Prod => algebraic_product(u, v),
            Self::BoundedProd => bounded_difference(u, v),
            Self::DrasticProd => drastic_product(u, v),
        }
    }

    pub fn combine<F: Float>(self, u: &[F], v: &[F]) -> Result<Vec<F>> {
        zip_with(u, v, |u, v| self.call(u, v))
    }
}

/// Union operators
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SNorm {
    #[default]
    Max,
    ProbOr,
    BoundedSum,
    DrasticSum,
}

impl SNorm {
    pub fn call<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Max => union(u, v),
            Self::ProbOr => algebraic_sum(u, v),
            Self::BoundedSum => bounded_sum(u, v),
            Self::DrasticSum => drastic_sum(u, v),
        }
    }

    pub fn combine<F: Float>(self, u: &[F], v: &[F]) -> Result<Vec<F>> {
        zip_with(u, v, |u, v| self.call(u, v))
    }
}

impl FromStr for TNorm {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "min" => Ok(Self::Min),
            "prod" => Ok(Self::Prod),
            "bounded_prod" => Ok(Self::BoundedProd),
            "drastic_prod" => Ok(Self::DrasticProd),
            _ => Err(FuzzyError::invalid(format!("unknown t-norm `{s}`"))),
        }
    }
}

impl FromStr for SNorm {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "max" => Ok(Self::Max),
            "prob_or" => Ok(Self::ProbOr),
            "bounded_sum" => Ok(Self::BoundedSum),
            "drastic_sum" => Ok(Self::DrasticSum),
            _ => Err(FuzzyError::invalid(format!("unknown s-norm `{s}`"))),
        }
    }
}

#[test]
fn test_basic_operators() {
    assert_eq!(union(0.7, 0.5), 0.7);
    assert_eq!(union(0.3, 0.8), 0.8);
    assert_eq!(intersection(0.7, 0.5), 0.5);
    assert_eq!(intersection(0.5, 0.5), 0.5);
    assert_eq!(complement(0.0), 1.0);
    assert_eq!(complement(1.0), 0.0);
    assert!((complement(0.7) - 0.3f64).abs() < 1e-12);
    assert_eq!(algebraic_product(0.5, 0.5), 0.25);
    assert_eq!(algebraic_sum(0.5f32, 0.5), 0.75);
    assert!((algebraic_sum(0.3f64, 0.4) - 0.58).abs() < 1e-12);
}

#[test]
fn test_algebraic_sum_near_one() {
    let a = 0.9999999999999999;

    assert!(algebraic_sum(a, 0.002) >= union(a, 0.002));
    assert!(algebraic_sum(0.002, a) >= a);
    assert_eq!(algebraic_sum(a, 0.), a);
    assert_eq!(algebraic_sum(1., 0.3), 1.);
}

#[test]
fn test_bounded_and_drastic() {
    assert_eq!(bounded_sum(0.7, 0.5), 1.0);
    assert_eq!(bounded_sum(0.25, 0.5), 0.75);
    assert_eq!(bounded_difference(0.75, 0.5), 0.25);
    assert_eq!(bounded_difference(0.3, 0.4), 0.0);
    assert_eq!(drastic_sum(0.0, 0.4), 0.4);
    assert_eq!(drastic_sum(0.3, 0.0), 0.3);
    assert_eq!(drastic_sum(0.3, 0.4), 1.0);
    assert_eq!(drastic_product(1.0, 0.4), 0.4);
    assert_eq!(drastic_product(0.3, 1.0), 0.3);
    assert_eq!(drastic_product(0.3, 0.4), 0.0);
}

#[test]
fn test_elementwise() {
    let a = [0.3, 0.5, 0.7];
    let b = [0.4, 0.6, 0.2];

    assert_eq!(union_each(&a, &b).unwrap(), vec![0.4, 0.6, 0.7]);
    assert_eq!(intersection_each(&a, &b).unwrap(), vec![0.3, 0.5, 0.2]);
    assert_eq!(complement_each(&[0., 0.25, 1.]), vec![1., 0.75, 0.]);
    assert_eq!(algebraic_product_each(&[0.5, 1.], &[0.5, 0.25]).unwrap(), vec![0.25, 0.25]);
    assert_eq!(algebraic_sum_each(&[0.5, 0.], &[0.5, 0.25]).unwrap(), vec![0.75, 0.25]);
    assert_eq!(
        union_each(&a, &b[..2]).unwrap_err(),
        FuzzyError::LengthMismatch { left: 3, right: 2 }
    );
    assert!(algebraic_sum_each::<f64>(&[], &[]).unwrap().is_empty());
}

#[test]
fn test_norm_enums() {
    assert_eq!(TNorm::Min.call(0.25, 0.5), 0.25);
    assert_eq!(TNorm::Prod.call(0.25, 0.5), 0.125);
    assert_eq!(TNorm::BoundedProd.combine(&[0.75, 0.25], &[0.5, 0.5]).unwrap(), vec![0.25, 0.]);
    assert_eq!(SNorm::Max.call(0.25, 0.5), 0.5);
    assert_eq!(SNorm::ProbOr.call(0.5, 0.5), 0.75);
    assert_eq!(SNorm::DrasticSum.combine(&[0., 0.25], &[0.5, 0.5]).unwrap(), vec![0.5, 1.]);
    assert!(SNorm::BoundedSum.combine(&[0.1], &[]).is_err());

    assert_eq!("prob_or".parse::<SNorm>().unwrap(), SNorm::ProbOr);
    assert_eq!("bounded_prod".parse::<TNorm>().unwrap(), TNorm::BoundedProd);
    assert!("nope".parse::<TNorm>().is_err());
}

#[test]
fn test_alpha_cuts() {
    let membership = [0.2, 0.5, 0.8, 0.3, 0.9];

    assert_eq!(alpha_cut(&membership, 0.5), vec![1, 2, 4]);
    assert_eq!(strong_alpha_cut(&membership, 0.5), vec![2, 4]);
    assert!(alpha_cut(&membership, 1.5).is_empty());
}
