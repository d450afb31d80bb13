//! optimization::sgd — plain stochastic gradient descent over separable terms.
//!
//! Purpose
//! -------
//! Minimize a [`SeparableObjective`] `f(θ) = Σᵢ fᵢ(θ)` by stepping along one
//! term's gradient at a time. This is the consumer the separable view of the
//! logistic objective exists for.
//!
//! Key behaviors
//! -------------
//! - One epoch visits every term exactly once, in an order reshuffled each
//!   epoch by the caller's generator when `shuffle` is set, and applies
//!   `θ ← θ − step·∇fᵢ(θ)` through a single reused gradient buffer.
//! - After each epoch the full objective is evaluated; the best iterate seen
//!   (including `θ₀`) is what the outcome reports.
//! - Stops with `SolverConverged` once the epoch-to-epoch change of `f`
//!   drops below `tol_cost`, otherwise with `MaxItersReached`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Randomness comes only from the `rng` argument, so a seeded generator
//!   makes a run reproducible.
//! - Non-finite values or gradients abort the run with the matching
//!   `OptError`; nothing is silently skipped.
//!
//! Conventions
//! -----------
//! - `OptimOutcome::iterations` counts epochs. `fn_evals` uses `argmin`'s
//!   keys (`"cost_count"`, `"gradient_count"`); one separable gradient counts
//!   as one gradient evaluation.
//!
//! Testing notes
//! -------------
//! - Unit tests cover option validation, descent on a logistic problem,
//!   seeded reproducibility, and the convergence / iteration-cap statuses.
use crate::optimization::{
    errors::{OptError, OptResult},
    traits::{OptimOutcome, SeparableObjective},
    types::{FnEvalMap, Grad, Theta},
    validation::{validate_grad, validate_value, verify_step_size, verify_tol_cost},
};
use argmin::core::{TerminationReason, TerminationStatus};
use rand::{Rng, seq::SliceRandom};

/// SGD configuration.
///
/// - `step_size`: fixed learning rate, finite and > 0.
/// - `max_epochs`: hard cap on full passes over the terms, > 0.
/// - `tol_cost`: optional stopping rule on `|f(θₖ) − f(θₖ₋₁)|` between epochs.
/// - `shuffle`: reshuffle the visiting order every epoch.
/// - `verbose`: with the `obs_slog` feature, print one line per epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct SgdOptions {
    pub step_size: f64,
    pub max_epochs: usize,
    pub tol_cost: Option<f64>,
    pub shuffle: bool,
    pub verbose: bool,
}

impl SgdOptions {
    /// Build validated SGD options.
    ///
    /// # Errors
    /// - [`OptError::InvalidStepSize`] for a non-finite or non-positive step.
    /// - [`OptError::InvalidMaxIter`] when `max_epochs == 0`.
    /// - [`OptError::InvalidTolCost`] for a non-finite or non-positive
    ///   tolerance.
    pub fn new(
        step_size: f64, max_epochs: usize, tol_cost: Option<f64>, shuffle: bool, verbose: bool,
    ) -> OptResult<Self> {
        verify_step_size(step_size)?;
        if max_epochs == 0 {
            return Err(OptError::InvalidMaxIter {
                max_iter: 0,
                reason: "Maximum epochs must be greater than zero.",
            });
        }
        verify_tol_cost(tol_cost)?;
        Ok(Self { step_size, max_epochs, tol_cost, shuffle, verbose })
    }
}

impl Default for SgdOptions {
    fn default() -> Self {
        Self {
            step_size: 0.01,
            max_epochs: 100,
            tol_cost: Some(1e-9),
            shuffle: true,
            verbose: false,
        }
    }
}

/// Minimize a separable objective with stochastic gradient descent.
///
/// Parameters
/// ----------
/// - `f`: objective implementing [`SeparableObjective`].
/// - `theta0`: starting point; validated with `f.check`.
/// - `opts`: [`SgdOptions`].
/// - `rng`: generator driving the per-epoch shuffle.
///
/// Returns
/// -------
/// The best iterate and its objective value, the termination status, the
/// number of epochs run, evaluation counters, and the norm of the batch
/// gradient at the best iterate.
///
/// Errors
/// ------
/// - Errors from `f.check`, `f.value`, `f.grad` and `f.grad_at`.
/// - `OptError::NonFiniteCost` / `OptError::InvalidGradient` when an
///   evaluation is not finite.
pub fn sgd_minimize<F, R>(
    f: &F, theta0: Theta, opts: &SgdOptions, rng: &mut R,
) -> OptResult<OptimOutcome>
where
    F: SeparableObjective,
    R: Rng + ?Sized,
{
    f.check(&theta0)?;
    let dim = theta0.len();
    let mut cost_count: u64 = 0;
    let mut gradient_count: u64 = 0;

    let mut theta = theta0;
    let mut previous = f.value(&theta)?;
    cost_count += 1;
    validate_value(previous)?;
    let mut best_theta = theta.clone();
    let mut best_value = previous;

    let mut order: Vec<usize> = (0..f.num_functions()).collect();
    let mut buffer = Grad::zeros(dim);
    let mut reason = TerminationReason::MaxItersReached;
    let mut epochs: u64 = 0;

    for _ in 0..opts.max_epochs {
        if opts.shuffle {
            order.shuffle(rng);
        }
        for &i in &order {
            f.grad_at(&theta, i, &mut buffer)?;
            gradient_count += 1;
            validate_grad(&buffer, dim)?;
            theta.scaled_add(-opts.step_size, &buffer);
        }
        epochs += 1;

        let value = f.value(&theta)?;
        cost_count += 1;
        validate_value(value)?;

        #[cfg(feature = "obs_slog")]
        if opts.verbose {
            eprintln!("epoch {epochs}: f(theta) = {value:.6}, best = {:.6}", best_value.min(value));
        }

        if value < best_value {
            best_value = value;
            best_theta.assign(&theta);
        }
        if let Some(tol) = opts.tol_cost {
            if (previous - value).abs() < tol {
                reason = TerminationReason::SolverConverged;
                break;
            }
        }
        previous = value;
    }

    let grad = f.grad(&best_theta)?;
    gradient_count += 1;
    let mut fn_evals = FnEvalMap::new();
    fn_evals.insert("cost_count".to_string(), cost_count);
    fn_evals.insert("gradient_count".to_string(), gradient_count);

    OptimOutcome::new(
        Some(best_theta),
        best_value,
        TerminationStatus::Terminated(reason),
        epochs,
        fn_evals,
        Some(grad),
    )
}
