//! High-level entry point for minimizing an [`Objective`] with L-BFGS.
//!
//! Selects Hager–Zhang or More–Thuente line search, wraps the objective in an
//! [`ArgMinAdapter`], and delegates the run to [`run_lbfgs`].
use crate::optimization::{
    adapter::ArgMinAdapter,
    builders::{build_optimizer_hager_zhang, build_optimizer_more_thuente},
    errors::OptResult,
    run::run_lbfgs,
    traits::{LbfgsOptions, LineSearcher, Objective, OptimOutcome},
    types::Theta,
};

/// Minimize `f(θ)` using L-BFGS with the configured line search.
///
/// # Behavior
/// - Validates the initial guess via `f.check(&theta0)`.
/// - Builds the solver selected by `opts.line_searcher`, with `opts.tols`.
/// - Runs the executor and normalizes the result.
///
/// # Errors
/// - Any error from `f.check` (for the logistic objective:
///   `OptError::InvalidArgument(..)`).
/// - Builder errors and runtime errors from the solver, including objective
///   errors raised mid-run.
///
/// # Example
/// ```no_run
/// use ndarray::array;
/// use logistic_objective::objective::{data::LogisticData, function::LogisticRegressionFunction};
/// use logistic_objective::optimization::{minimize, LbfgsOptions};
///
/// let design = array![[1.0, 1.0, 1.0, 1.0], [-2.0, -1.0, 1.0, 2.0]];
/// let responses = array![0.0, 1.0, 0.0, 1.0];
/// let data = LogisticData::new(design, responses)?;
/// let f = LogisticRegressionFunction::new(&data, 1.0)?;
///
/// let out = minimize(&f, array![0.0, 0.0], &LbfgsOptions::default())?;
/// println!("θ̂ = {:?}, f(θ̂) = {}", out.theta_hat, out.value);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn minimize<F: Objective>(
    f: &F, theta0: Theta, opts: &LbfgsOptions,
) -> OptResult<OptimOutcome> {
    f.check(&theta0)?;
    let problem = ArgMinAdapter::new(f);
    match opts.line_searcher {
        LineSearcher::MoreThuente => {
            let solver = build_optimizer_more_thuente(opts)?;
            run_lbfgs(theta0, opts, problem, solver)
        }
        LineSearcher::HagerZhang => {
            let solver = build_optimizer_hager_zhang(opts)?;
            run_lbfgs(theta0, opts, problem, solver)
        }
    }
}
