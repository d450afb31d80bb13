//! optimization — argmin-backed L-BFGS, stochastic gradient descent, and the
//! unified optimizer error surface.
//!
//! Purpose
//! -------
//! Provide the consumers of an objective: callers implement [`Objective`]
//! (and, for per-term access, [`SeparableObjective`]), pick options, and get
//! back a validated [`OptimOutcome`] without touching solver internals.
//!
//! Key behaviors
//! -------------
//! - [`minimize`]: L-BFGS with Hager–Zhang or More–Thuente line search via
//!   `argmin`, wired through [`adapter::ArgMinAdapter`],
//!   [`builders`] and [`run::run_lbfgs`].
//! - [`sgd_minimize`]: epoch-based SGD over the separable terms of an
//!   objective, driven by a caller-supplied generator.
//! - Configuration ([`Tolerances`], [`LbfgsOptions`], [`SgdOptions`]) is
//!   validated on construction; outputs are validated by [`validation`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Objectives are minimized directly; there is no cost/likelihood sign
//!   flip anywhere in this layer.
//! - Objective failures are recoverable [`OptError`] values, never panics.
//!
//! Conventions
//! -----------
//! - Parameters and gradients use the aliases in [`types`].
//! - Every fallible entry point returns [`OptResult<T>`]; raw `argmin` errors
//!   are converted at the boundary.
//! - No logging happens unless the `obs_slog` feature is enabled **and** the
//!   options ask for `verbose` output.
//!
//! Testing notes
//! -------------
//! - Submodule tests cover solver wiring, adapter behavior, validation,
//!   option rules and SGD bookkeeping.
//! - `tests/integration_logistic_pipeline.rs` fits the logistic objective
//!   end to end with both drivers.

pub mod adapter;
pub mod api;
pub mod builders;
pub mod errors;
pub mod run;
pub mod sgd;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::minimize;
pub use self::errors::{OptError, OptResult, SolverErrorKind};
pub use self::sgd::{SgdOptions, sgd_minimize};
pub use self::traits::{
    LbfgsOptions, LineSearcher, Objective, OptimOutcome, SeparableObjective, Tolerances,
};
pub use self::types::{Cost, DEFAULT_LBFGS_MEM, FnEvalMap, Grad, Theta};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::api::minimize;
    pub use super::errors::{OptError, OptResult};
    pub use super::sgd::{SgdOptions, sgd_minimize};
    pub use super::traits::{
        LbfgsOptions, LineSearcher, Objective, OptimOutcome, SeparableObjective, Tolerances,
    };
    pub use super::types::{Cost, Grad, Theta};
}
