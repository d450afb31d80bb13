//! logistic_objective — L2-regularized logistic regression as an optimizable
//! objective.
//!
//! Purpose
//! -------
//! Serve as the crate root. The crate provides the loss of a binary logistic
//! model (negative log-likelihood plus an intercept-free L2 penalty) in batch
//! and separable form, together with the optimizers that consume it.
//!
//! Key behaviors
//! -------------
//! - [`objective`]: dataset validation, numerically stable loss and gradient,
//!   per-point terms whose sum reproduces the batch quantities.
//! - [`optimization`]: `argmin`-backed L-BFGS ([`optimization::minimize`]),
//!   stochastic gradient descent ([`optimization::sgd_minimize`]), and the
//!   shared error surface.
//!
//! Invariants & assumptions
//! ------------------------
//! - Evaluations are pure: no state survives between calls, and a finite
//!   parameter vector always yields a finite value and gradient.
//! - Errors are returned as values (`ObjectiveError`, `OptError`); library
//!   code never panics on bad input.
//!
//! Conventions
//! -----------
//! - Data points are design **columns**; features are rows; row 0 is the
//!   intercept row of 1.0s provided by the caller.
//! - Values are costs to be minimized.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each module; `tests/` holds the end-to-end
//!   fitting pipeline.

pub mod objective;
pub mod optimization;

pub use crate::objective::{LogisticData, LogisticRegressionFunction, ObjectiveError};
pub use crate::optimization::{
    LbfgsOptions, OptError, OptimOutcome, SgdOptions, Tolerances, minimize, sgd_minimize,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use logistic_objective::prelude::*;
//
// to import the data, objective and optimizer surface in a single line.

pub mod prelude {
    pub use crate::objective::prelude::*;
    pub use crate::optimization::prelude::*;
}
