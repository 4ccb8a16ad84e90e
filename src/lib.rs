//! Fuzzy sets, the pointwise algebra over them and defuzzification.
//!
//! A typical pipeline discretizes a universe, samples a few membership functions on it,
//! combines the degree arrays and reduces the result to a crisp value:
//!
//! ```
//! use fuzzy_core::{algebra, linspace, Curve, Defuzzification, Membership, Shape};
//!
//! let universe = linspace::universe(0., 100., 1.)?;
//! let low = Shape::triangular(0., 0., 50.)?.sample(&universe);
//! let medium = Shape::triangular(20., 50., 80.)?.sample(&universe);
//! let clipped = algebra::zip_with(&medium, &vec![0.4; universe.len()], algebra::intersection)?;
//! let combined = algebra::union_each(&low, &clipped)?;
//!
//! let crisp = Curve::new(universe, combined)?.defuzzify(Defuzzification::Centroid);
//!
//! assert!(crisp > 0. && crisp < 50.);
//! # Ok::<(), fuzzy_core::FuzzyError>(())
//! ```
//!
//! Nothing here holds state between calls, so every function can be shared freely
//! across threads.

pub mod algebra;
mod config;
mod curve;
pub mod defuzz;
mod error;
pub mod linspace;
mod math;
pub mod membership;
mod set;

pub use algebra::{SNorm, TNorm};
pub use config::FuzzyConfig;
pub use curve::Curve;
pub use defuzz::Defuzzification;
pub use error::{FuzzyError, Result};
pub use membership::{Membership, Shape};
pub use set::FuzzySet;
