//! Executor wiring: run an `argmin` solver on an [`Objective`] and normalize
//! the final state into an [`OptimOutcome`].
use crate::optimization::{
    adapter::ArgMinAdapter,
    errors::OptResult,
    traits::{LbfgsOptions, Objective, OptimOutcome},
    types::{Grad, Theta},
};
#[cfg(feature = "obs_slog")]
use argmin::core::{CostFunction, Gradient};
use argmin::core::{Executor, IterState, Solver, State};
#[cfg(feature = "obs_slog")]
use argmin_math::ArgminL2Norm;

/// Run an `argmin` solver on an adapted objective.
///
/// Shared by both line-search variants. Sets `θ₀` on the solver state,
/// applies `max_iters` when configured, optionally attaches a terminal
/// observer, executes, and converts the best state into an [`OptimOutcome`].
///
/// # Type Parameters
/// - `F`: objective implementing [`Objective`].
/// - `S`: any `argmin` solver over `ArgMinAdapter<'a, F>` whose state is
///   `IterState<Theta, Grad, (), (), (), f64>`.
///
/// # Feature flags
/// With `obs_slog` and `opts.verbose`, a `SlogLogger::term_noblock()`
/// observer is attached with `ObserverMode::Always`, and one line with
/// `f(θ₀)` and ‖∇f(θ₀)‖ is printed before the first iteration.
///
/// # Returns
/// The best parameters found, `f` at those parameters, the termination
/// status, the iteration count, `argmin`'s evaluation counters, and the norm
/// of the last gradient when available.
///
/// # Errors
/// - `argmin` runtime errors (including objective errors raised during
///   the run) via `From<argmin::core::Error>`.
/// - Validation errors from [`OptimOutcome::new`].
pub fn run_lbfgs<'a, F, S>(
    theta0: Theta, opts: &LbfgsOptions, problem: ArgMinAdapter<'a, F>, solver: S,
) -> OptResult<OptimOutcome>
where
    F: Objective,
    S: Solver<ArgMinAdapter<'a, F>, IterState<Theta, Grad, (), (), (), f64>> + Send + 'static,
{
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        log_initial_state(&theta0, &problem)?;
    }
    let mut optimizer = Executor::new(problem, solver).configure(|state| state.param(theta0));
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }
    if let Some(max_iter) = opts.tols.max_iter {
        optimizer = optimizer.configure(|state| state.max_iters(max_iter as u64));
    }

    let mut result = optimizer.run()?.state().clone();
    let iterations = result.get_iter();
    let function_counts = result.get_func_counts().clone();
    let termination = result.get_termination_status().clone();
    let grad = result.take_gradient();
    OptimOutcome::new(
        result.take_best_param(),
        result.get_best_cost(),
        termination,
        iterations,
        function_counts,
        grad,
    )
}

#[cfg(feature = "obs_slog")]
fn log_initial_state<F>(theta0: &Theta, problem: &ArgMinAdapter<'_, F>) -> OptResult<()>
where
    F: Objective,
{
    let f0 = problem.cost(theta0)?;
    let g0n = problem.gradient(theta0).ok().map(|g| g.l2_norm());

    eprintln!(
        "init: f(theta0) = {:.6}{}",
        f0,
        g0n.map(|n| format!(", ||grad|| = {:.6}", n)).unwrap_or_default()
    );
    Ok(())
}
