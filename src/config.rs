use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::algebra::{SNorm, TNorm};
use crate::curve::Curve;
use crate::defuzz::{check_tolerance, Defuzzification};
use crate::error::Result;

/// Which operators to use when combining and reducing degree curves.
///
/// Every field has a default, so a partial serialized config is enough:
///
/// ```
/// # use fuzzy_core::{Defuzzification, FuzzyConfig, SNorm};
/// let config: FuzzyConfig = serde_json::from_str(r#"{"or_op": "prob_or", "defuzz_op": "bisector"}"#).unwrap();
///
/// assert_eq!(config.or_op, SNorm::ProbOr);
/// assert_eq!(config.defuzz_op, Defuzzification::Bisector);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyConfig {
    pub and_op: TNorm,
    pub or_op: SNorm,
    pub defuzz_op: Defuzzification,
    /// How far below the maximum a degree may be and still count as maximal.
    /// `0` keeps the exact comparison.
    pub max_tolerance: f64,
}

impl FuzzyConfig {
    pub fn new(and_op: TNorm, or_op: SNorm, defuzz_op: Defuzzification) -> Self {
        Self {
            and_op,
            or_op,
            defuzz_op,
            max_tolerance: 0.,
        }
    }

    pub fn with_max_tolerance(self, max_tolerance: f64) -> Result<Self> {
        check_tolerance(max_tolerance)?;

        Ok(Self { max_tolerance, ..self })
    }

    pub fn and(&self, u: &[f64], v: &[f64]) -> Result<Vec<f64>> {
        trace!(op = ?self.and_op, len = u.len(), "and");

        self.and_op.combine(u, v)
    }

    pub fn or(&self, u: &[f64], v: &[f64]) -> Result<Vec<f64>> {
        trace!(op = ?self.or_op, len = u.len(), "or");

        self.or_op.combine(u, v)
    }

    /// Folds any number of degree arrays with the configured S-norm
    pub fn aggregate<'a>(&self, curves: impl IntoIterator<Item = &'a [f64]>) -> Result<Option<Vec<f64>>> {
        let mut agg: Option<Vec<f64>> = None;

        for curve in curves {
            agg = Some(match agg {
                None => curve.to_vec(),
                Some(agg) => self.or(&agg, curve)?,
            });
        }

        Ok(agg)
    }

    pub fn defuzzify(&self, curve: &Curve<f64>) -> Result<f64> {
        trace!(op = ?self.defuzz_op, len = curve.domain().len(), "defuzzify");

        curve.defuzzify_within(self.defuzz_op, self.max_tolerance)
    }
}

#[test]
fn test_default_config() {
    let config = FuzzyConfig::default();

    assert_eq!(config, FuzzyConfig::new(TNorm::Min, SNorm::Max, Defuzzification::Centroid));
    assert_eq!(config.and(&[0.2, 0.8], &[0.5, 0.5]).unwrap(), vec![0.2, 0.5]);
    assert_eq!(config.or(&[0.2, 0.8], &[0.5, 0.5]).unwrap(), vec![0.5, 0.8]);
    assert!(config.or(&[0.2], &[0.5, 0.5]).is_err());
}

#[test]
fn test_aggregate() {
    let config = FuzzyConfig::new(TNorm::Prod, SNorm::Max, Defuzzification::MeanOfMaximum);
    let a = [0., 0.5, 0.25];
    let b = [0.75, 0., 0.];
    let c = [0., 0., 0.5];

    assert_eq!(config.aggregate([&a[..], &b, &c]).unwrap(), Some(vec![0.75, 0.5, 0.5]));
    assert_eq!(config.aggregate(std::iter::empty()).unwrap(), None);
    assert!(config.aggregate([&a[..], &[0.1]]).is_err());
}

#[test]
fn test_tolerant_defuzzify() {
    let curve = Curve::new(vec![0., 1., 2.], vec![0.5, 1., 1. - 1e-12]).unwrap();
    let exact = FuzzyConfig::new(TNorm::Min, SNorm::Max, Defuzzification::MeanOfMaximum);
    let tolerant = exact.with_max_tolerance(1e-9).unwrap();

    assert_eq!(exact.defuzzify(&curve).unwrap(), 1.);
    assert_eq!(tolerant.defuzzify(&curve).unwrap(), 1.5);
    assert!(exact.with_max_tolerance(-1.).is_err());
}

#[test]
fn test_config_serde() {
    let config: FuzzyConfig = serde_json::from_str(r#"{"and_op": "bounded_prod", "max_tolerance": 0.01}"#).unwrap();

    assert_eq!(config.and_op, TNorm::BoundedProd);
    assert_eq!(config.or_op, SNorm::Max);
    assert_eq!(config.defuzz_op, Defuzzification::Centroid);
    assert_eq!(config.max_tolerance, 0.01);
}
