//! optimization::types — shared numeric aliases and solver wiring.
//!
//! Purpose
//! -------
//! Name the numeric containers and `argmin` solver instantiations used by
//! every optimizer module, so the rest of the layer never spells out
//! `ndarray` or `argmin` generics directly.
//!
//! Conventions
//! -----------
//! - `Theta` and `Grad` have the same length: the parameter dimension
//!   (intercept included).
//! - `Cost` is the value being **minimized**. For the logistic objective this
//!   is the regularized negative log-likelihood itself; no sign flip happens
//!   anywhere in this crate.
//! - The line-search aliases follow `argmin`'s `(Param, Gradient, Float)`
//!   parameterization for the pinned version.
use argmin::solver::{
    linesearch::{HagerZhangLineSearch, MoreThuenteLineSearch},
    quasinewton::LBFGS,
};
use ndarray::Array1;
use std::collections::HashMap;

/// Parameter vector `θ`.
pub type Theta = Array1<f64>;

/// Gradient vector `∇f(θ)`, same shape as [`Theta`].
pub type Grad = Array1<f64>;

/// Scalar objective value minimized by the optimizers.
pub type Cost = f64;

/// Function-evaluation counters, keyed like `argmin`'s
/// (`"cost_count"`, `"gradient_count"`).
pub type FnEvalMap = HashMap<String, u64>;

/// Default history size (`m`) for L-BFGS runs.
pub const DEFAULT_LBFGS_MEM: usize = 7;

/// Hager–Zhang line search over this crate's numeric types.
pub type HagerZhangLS = HagerZhangLineSearch<Theta, Grad, Cost>;

/// More–Thuente line search over this crate's numeric types.
pub type MoreThuenteLS = MoreThuenteLineSearch<Theta, Grad, Cost>;

/// L-BFGS with Hager–Zhang line search.
pub type LbfgsHagerZhang = LBFGS<HagerZhangLS, Theta, Grad, Cost>;

/// L-BFGS with More–Thuente line search.
pub type LbfgsMoreThuente = LBFGS<MoreThuenteLS, Theta, Grad, Cost>;
