//! Numerically stable building blocks for the logistic loss.
//!
//! Provides overflow-free implementations of the transforms the objective
//! is made of. Naïve forms such as `ln(1 + exp(x))` overflow for large `x`,
//! and `y·ln(σ) + (1 − y)·ln(1 − σ)` evaluates `0 · (−∞)` once the sigmoid
//! saturates; the functions here never do either.
//!
//! # Provided items
//! - [`safe_softplus(x)`]: `ln(1 + exp(x))` via
//!   `max(x, 0) + ln1p(exp(−|x|))`, finite for every finite `x`.
//! - [`safe_logistic(x)`]: `1 / (1 + exp(−x))`, evaluated on the side that
//!   keeps `exp` bounded by 1.
//! - [`log_loss(score, y)`]: per-point cross-entropy for a binary response
//!   expressed through softplus.
//! - [`l2_penalty(theta, lambda)`]: `0.5·λ·‖θ[1..]‖²`, skipping the intercept.

use ndarray::{Array1, s};

/// Numerically stable softplus: `softplus(x) = ln(1 + exp(x))`.
///
/// Uses the identity `softplus(x) = max(x, 0) + ln1p(exp(−|x|))`, so the
/// argument of `exp` is never positive. The result saturates to exactly `x`
/// for large positive `x` and decays smoothly to `0` for large negative `x`.
///
/// # Parameters
/// - `x`: real input
///
/// # Returns
/// - `softplus(x)` as `f64`, strictly finite for finite `x`.
#[inline]
pub fn safe_softplus(x: f64) -> f64 {
    x.max(0.0) + (-x.abs()).exp().ln_1p()
}

/// Numerically stable logistic (sigmoid): `σ(x) = 1 / (1 + exp(−x))`.
///
/// For `x ≥ 0` the textbook form is used; for `x < 0` the algebraically
/// equal `exp(x) / (1 + exp(x))` keeps `exp` from overflowing. The result lies
/// in `[0, 1]` and reaches the endpoints only once `f64` rounding does.
#[inline]
pub fn safe_logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Cross-entropy of one point with linear score `score` and response `y`.
///
/// - `y == 1`: `softplus(−score) = −ln σ(score)`
/// - `y == 0`: `softplus(score) = −ln(1 − σ(score))`
///
/// `y` is assumed to be exactly `0.0` or `1.0`; this is enforced when the
/// dataset is built.
#[inline]
pub fn log_loss(score: f64, y: f64) -> f64 {
    if y == 1.0 { safe_softplus(-score) } else { safe_softplus(score) }
}

/// Squared-L2 penalty `0.5·λ·(‖θ‖² − θ[0]²)`.
///
/// Coordinate 0 is the intercept and is never penalized. Returns `0.0` for an
/// empty or intercept-only `theta`.
pub fn l2_penalty(theta: &Array1<f64>, lambda: f64) -> f64 {
    if theta.len() < 2 {
        return 0.0;
    }
    let tail = theta.slice(s![1..]);
    0.5 * lambda * tail.dot(&tail)
}
