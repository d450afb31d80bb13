//! objective — L2-regularized logistic-regression loss with batch and
//! separable evaluation.
//!
//! Purpose
//! -------
//! Turn a labeled dataset into a smooth, convex objective `f(θ)` (regularized
//! negative log-likelihood) that optimizers can evaluate either in full or
//! one data point at a time.
//!
//! Key behaviors
//! -------------
//! - [`data::LogisticData`] validates and owns the design matrix and binary
//!   responses.
//! - [`function::LogisticRegressionFunction`] borrows a dataset, fixes λ,
//!   and exposes `evaluate` / `gradient` plus their per-point counterparts.
//! - [`numerics`] holds the overflow-free softplus / sigmoid building blocks.
//!
//! Invariants & assumptions
//! ------------------------
//! - Design matrices are `(d + 1) × n`, one column per point, row 0 the
//!   intercept row supplied by the caller.
//! - The intercept weight `θ[0]` is never penalized.
//! - All invalid inputs are reported as [`errors::ObjectiveError`].
//!
//! Downstream usage
//! ----------------
//! - Feed a `LogisticRegressionFunction` to
//!   [`crate::optimization::minimize`] or
//!   [`crate::optimization::sgd_minimize`].

pub mod data;
pub mod errors;
pub mod function;
pub mod numerics;

pub use self::data::LogisticData;
pub use self::errors::{ObjectiveError, ObjectiveResult};
pub use self::function::LogisticRegressionFunction;

pub mod prelude {
    pub use super::data::LogisticData;
    pub use super::errors::{ObjectiveError, ObjectiveResult};
    pub use super::function::LogisticRegressionFunction;
}
