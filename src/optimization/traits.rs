//! Public seams and configuration of the optimization layer.
//!
//! - [`Objective`]: a differentiable scalar objective `f(θ)` to minimize.
//! - [`SeparableObjective`]: an objective that is a sum of `n` terms
//!   `f(θ) = Σᵢ fᵢ(θ)`, each evaluable on its own.
//! - [`LbfgsOptions`] and [`Tolerances`]: configuration for [`minimize`].
//! - [`LineSearcher`]: line search used inside L-BFGS.
//! - [`OptimOutcome`]: normalized result returned by both drivers.
//!
//! Convention: objectives are **minimized** directly. A gradient returned by
//! [`Objective::grad`] is the gradient of the value returned by
//! [`Objective::value`]; no sign flip happens in the adapter.
//!
//! [`minimize`]: crate::optimization::api::minimize
use crate::optimization::{
    errors::{OptError, OptResult},
    types::{Cost, FnEvalMap, Grad, Theta},
    validation::{validate_theta_hat, validate_value, verify_tol_cost, verify_tol_grad},
};
use argmin::core::{TerminationReason, TerminationStatus};
use argmin_math::ArgminL2Norm;
use std::str::FromStr;

/// Differentiable objective to be minimized.
///
/// - `value(&Theta) -> OptResult<Cost>`: evaluate `f(θ)`.
/// - `check(&Theta) -> OptResult<()>`: reject an unusable `θ` (wrong
///   length, non-finite entries). Called once before optimization.
/// - `grad(&Theta) -> OptResult<Grad>`: analytic gradient `∇f(θ)`.
pub trait Objective {
    fn value(&self, theta: &Theta) -> OptResult<Cost>;
    fn check(&self, theta: &Theta) -> OptResult<()>;
    fn grad(&self, theta: &Theta) -> OptResult<Grad>;
}

/// Objective that decomposes into `num_functions()` separately evaluable terms.
///
/// The terms must satisfy `Σᵢ value_at(θ, i) == value(θ)` and
/// `Σᵢ grad_at(θ, i) == grad(θ)` up to rounding. `grad_at` writes into a
/// caller-owned buffer so stochastic drivers can reuse one allocation across
/// an epoch; implementations resize the buffer when its length is wrong.
pub trait SeparableObjective: Objective {
    fn num_functions(&self) -> usize;
    fn value_at(&self, theta: &Theta, i: usize) -> OptResult<Cost>;
    fn grad_at(&self, theta: &Theta, i: usize, output: &mut Grad) -> OptResult<()>;
}

/// Choice of line search used inside the L-BFGS solver.
///
/// Parses case-insensitively from `"MoreThuente"` / `"HagerZhang"`; any
/// other name yields `OptError::InvalidLineSearch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSearcher {
    MoreThuente,
    HagerZhang,
}

impl FromStr for LineSearcher {
    type Err = OptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morethuente" => Ok(LineSearcher::MoreThuente),
            "hagerzhang" => Ok(LineSearcher::HagerZhang),
            _ => Err(OptError::InvalidLineSearch {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'MoreThuente' or 'HagerZhang'.",
            }),
        }
    }
}

/// L-BFGS driver configuration.
///
/// Fields:
/// - `tols`: stopping rules.
/// - `line_searcher`: line search used by L-BFGS.
/// - `verbose`: with the `obs_slog` feature, attach a terminal observer and
///   print the initial state.
/// - `lbfgs_mem`: history size; `None` uses [`DEFAULT_LBFGS_MEM`].
///
/// Default: `tol_grad = 1e-6`, no cost tolerance, `max_iter = 300`,
/// More–Thuente, quiet, default memory.
///
/// [`DEFAULT_LBFGS_MEM`]: crate::optimization::types::DEFAULT_LBFGS_MEM
#[derive(Debug, Clone, PartialEq)]
pub struct LbfgsOptions {
    pub tols: Tolerances,
    pub line_searcher: LineSearcher,
    pub verbose: bool,
    pub lbfgs_mem: Option<usize>,
}

impl LbfgsOptions {
    /// Build L-BFGS options. Tolerances are already validated by
    /// [`Tolerances::new`]; this only checks the memory size.
    ///
    /// # Errors
    /// - [`OptError::InvalidLBFGSMem`] if `lbfgs_mem == Some(0)`.
    pub fn new(
        tols: Tolerances, line_searcher: LineSearcher, verbose: bool, lbfgs_mem: Option<usize>,
    ) -> OptResult<Self> {
        if lbfgs_mem == Some(0) {
            return Err(OptError::InvalidLBFGSMem {
                mem: 0,
                reason: "L-BFGS memory must be greater than zero.",
            });
        }
        Ok(Self { tols, line_searcher, verbose, lbfgs_mem })
    }
}

impl Default for LbfgsOptions {
    fn default() -> Self {
        Self {
            tols: Tolerances { tol_grad: Some(1e-6), tol_cost: None, max_iter: Some(300) },
            line_searcher: LineSearcher::MoreThuente,
            verbose: false,
            lbfgs_mem: None,
        }
    }
}

/// Numerical tolerances and iteration limits.
///
/// - `tol_grad`: stop when the gradient norm falls below this threshold.
/// - `tol_cost`: stop when the change in cost falls below this threshold.
/// - `max_iter`: hard cap on iterations.
///
/// Any field may be `None`, but **at least one** must be set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub tol_grad: Option<f64>,
    pub tol_cost: Option<f64>,
    pub max_iter: Option<usize>,
}

impl Tolerances {
    /// Construct validated tolerances.
    ///
    /// # Errors
    /// - [`OptError::NoTolerancesProvided`] if all three are `None`.
    /// - [`OptError::InvalidTolGrad`] / [`OptError::InvalidTolCost`] for
    ///   non-finite or non-positive tolerances.
    /// - [`OptError::InvalidMaxIter`] if `max_iter == Some(0)`.
    pub fn new(
        tol_grad: Option<f64>, tol_cost: Option<f64>, max_iter: Option<usize>,
    ) -> OptResult<Self> {
        if tol_grad.is_none() && tol_cost.is_none() && max_iter.is_none() {
            return Err(OptError::NoTolerancesProvided);
        }
        verify_tol_grad(tol_grad)?;
        verify_tol_cost(tol_cost)?;
        if max_iter == Some(0) {
            return Err(OptError::InvalidMaxIter {
                max_iter: 0,
                reason: "Maximum iterations must be greater than zero.",
            });
        }
        Ok(Self { tol_grad, tol_cost, max_iter })
    }
}

/// Result of [`minimize`] or [`sgd_minimize`].
///
/// - `theta_hat`: best parameter vector found.
/// - `value`: objective value at `theta_hat`.
/// - `converged`: `true` only when the run stopped on a convergence rule
///   (gradient / cost tolerance or target cost), not on an iteration cap.
/// - `status`: human-readable termination status.
/// - `iterations`: iterations (L-BFGS) or epochs (SGD) performed.
/// - `fn_evals`: evaluation counters (`cost_count`, `gradient_count`).
/// - `grad_norm`: L2 norm of the last available gradient, if any.
///
/// [`minimize`]: crate::optimization::api::minimize
/// [`sgd_minimize`]: crate::optimization::sgd::sgd_minimize
#[derive(Debug, Clone, PartialEq)]
pub struct OptimOutcome {
    pub theta_hat: Theta,
    pub value: f64,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
    pub grad_norm: Option<f64>,
}

impl OptimOutcome {
    /// Build a validated outcome from raw solver state.
    ///
    /// # Errors
    /// - `MissingThetaHat` / `InvalidThetaHat` from [`validate_theta_hat`].
    /// - `NonFiniteCost` from [`validate_value`].
    pub fn new(
        theta_hat_opt: Option<Theta>, value: f64, termination: TerminationStatus, iterations: u64,
        fn_evals: FnEvalMap, grad: Option<Grad>,
    ) -> OptResult<Self> {
        let theta_hat = validate_theta_hat(theta_hat_opt)?;
        validate_value(value)?;
        let (converged, status) = match &termination {
            TerminationStatus::NotTerminated => (false, "Not terminated".to_string()),
            TerminationStatus::Terminated(reason) => {
                let converged = matches!(
                    reason,
                    TerminationReason::SolverConverged | TerminationReason::TargetCostReached
                );
                (converged, format!("{termination:?}"))
            }
        };
        let grad_norm = grad.map(|g| g.l2_norm());
        Ok(Self {
            theta_hat,
            value,
            converged,
            status,
            iterations: iterations as usize,
            fn_evals,
            grad_norm,
        })
    }
}
