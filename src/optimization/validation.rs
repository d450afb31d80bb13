//! Validation helpers shared by the optimizer drivers.
//!
//! - **Tolerances**: [`verify_tol_grad`], [`verify_tol_cost`] and
//!   [`verify_step_size`] reject non-finite or non-positive settings.
//! - **Gradients**: [`validate_grad`] enforces the parameter dimension and
//!   finite entries.
//! - **Outcomes**: [`validate_theta_hat`] and [`validate_value`] guard what
//!   the drivers hand back to callers.
use crate::optimization::{
    errors::{OptError, OptResult},
    types::{Grad, Theta},
};

/// Validate the optional gradient-norm tolerance.
///
/// `None` disables the gradient stopping rule. A provided value must be
/// finite and strictly positive.
///
/// # Errors
/// Returns [`OptError::InvalidTolGrad`] otherwise.
pub fn verify_tol_grad(tol: Option<f64>) -> OptResult<()> {
    if let Some(tol) = tol {
        if !tol.is_finite() {
            return Err(OptError::InvalidTolGrad { tol, reason: "Tolerance must be finite." });
        }
        if tol <= 0.0 {
            return Err(OptError::InvalidTolGrad { tol, reason: "Tolerance must be positive." });
        }
    }
    Ok(())
}

/// Validate the optional cost-change tolerance.
///
/// # Errors
/// Returns [`OptError::InvalidTolCost`] for a non-finite or non-positive
/// value.
pub fn verify_tol_cost(tol: Option<f64>) -> OptResult<()> {
    if let Some(tol) = tol {
        if !tol.is_finite() {
            return Err(OptError::InvalidTolCost { tol, reason: "Tolerance must be finite." });
        }
        if tol <= 0.0 {
            return Err(OptError::InvalidTolCost { tol, reason: "Tolerance must be positive." });
        }
    }
    Ok(())
}

/// Validate a stochastic-gradient step size (finite, strictly positive).
///
/// # Errors
/// Returns [`OptError::InvalidStepSize`] otherwise.
pub fn verify_step_size(step: f64) -> OptResult<()> {
    if !step.is_finite() {
        return Err(OptError::InvalidStepSize { step, reason: "Step size must be finite." });
    }
    if step <= 0.0 {
        return Err(OptError::InvalidStepSize { step, reason: "Step size must be positive." });
    }
    Ok(())
}

/// Validate a gradient vector against dimension and finiteness.
///
/// # Errors
/// - [`OptError::GradientDimMismatch`] if `grad.len() != dim`.
/// - [`OptError::InvalidGradient`] for the first NaN/±inf element.
pub fn validate_grad(grad: &Grad, dim: usize) -> OptResult<()> {
    if grad.len() != dim {
        return Err(OptError::GradientDimMismatch { expected: dim, found: grad.len() });
    }
    match grad.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(OptError::InvalidGradient {
            index,
            value: grad[index],
            reason: "Gradient elements must be finite.",
        }),
        None => Ok(()),
    }
}

/// Unwrap an estimated parameter vector, requiring every entry to be finite.
///
/// # Errors
/// - [`OptError::MissingThetaHat`] when the solver reported no parameters.
/// - [`OptError::InvalidThetaHat`] for the first non-finite entry.
pub fn validate_theta_hat(theta_hat: Option<Theta>) -> OptResult<Theta> {
    let theta = theta_hat.ok_or(OptError::MissingThetaHat)?;
    if let Some(index) = theta.iter().position(|v| !v.is_finite()) {
        return Err(OptError::InvalidThetaHat {
            index,
            value: theta[index],
            reason: "Parameter estimates must be finite.",
        });
    }
    Ok(theta)
}

/// Require a finite objective value.
///
/// # Errors
/// Returns [`OptError::NonFiniteCost`] for NaN/±inf.
pub fn validate_value(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::NonFiniteCost { value });
    }
    Ok(())
}
