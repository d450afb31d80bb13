//! The L2-regularized logistic-regression objective.
//!
//! Purpose
//! -------
//! Expose the negative log-likelihood of a binary logistic model, plus an L2
//! penalty on the non-intercept weights, as a differentiable objective that
//! optimizers can query in two shapes:
//! - **batch**: value and gradient over all `n` points at once;
//! - **separable**: value and gradient of the `i`-th of `n` terms, such that
//!   the `n` terms sum to the batch quantities.
//!
//! Key behaviors
//! -------------
//! - Per-point losses are evaluated through [`log_loss`] (softplus form), so
//!   saturated predictions give losses of exactly (or nearly) `0.0`, never
//!   `NaN`/`Inf`.
//! - The sigmoid in the gradient is [`safe_logistic`], so residuals stay in
//!   `[-1, 1]` for every finite score.
//! - The penalty `0.5·λ·(‖θ‖² − θ[0]²)` is charged once in batch form and as
//!   `1/n` of itself per separable term; its gradient never touches
//!   coordinate 0.
//!
//! Invariants & assumptions
//! ------------------------
//! - The dataset was validated by [`LogisticData::new`]; λ by
//!   [`LogisticRegressionFunction::new`].
//! - Every call checks `theta.len() == d + 1` and, for separable calls,
//!   `i < n`. Nothing else is validated per call.
//! - No state survives between calls.
//!
//! Conventions
//! -----------
//! - `theta[0]` is the intercept weight and pairs with design row 0.
//! - Values are *costs* to be minimized (negative log-likelihood), not
//!   log-likelihoods.
//!
//! Downstream usage
//! ----------------
//! - Implements [`Objective`] and [`SeparableObjective`], so it can be fed
//!   to [`crate::optimization::minimize`] (L-BFGS) or
//!   [`crate::optimization::sgd_minimize`] (SGD).
//!
//! Testing notes
//! -------------
//! - Unit tests pin hand-computed values on a 3-point toy dataset, the
//!   saturation boundary, gradient directions, regularization linearity,
//!   intercept exclusion, batch/separable decomposability, and agreement
//!   with finite differences on random data.
use crate::{
    objective::{
        data::LogisticData,
        errors::{ObjectiveError, ObjectiveResult},
        numerics::{l2_penalty, log_loss, safe_logistic},
    },
    optimization::{
        errors::OptResult,
        traits::{Objective, SeparableObjective},
        types::{Cost, Grad, Theta},
    },
};
use ndarray::{Array1, s};

/// `LogisticRegressionFunction` — batch and separable logistic loss with
/// intercept-free L2 regularization.
///
/// Fields
/// ------
/// - `data`: `&'a LogisticData`
///   Shared, immutable dataset. Several objectives (e.g., a λ sweep) may
///   borrow the same data.
/// - `lambda`: `f64`
///   Regularization strength, finite and ≥ 0.
///
/// Thread safety
/// -------------
/// The type is `Copy + Send + Sync`; concurrent evaluation is safe as long
/// as each thread owns its output buffer.
#[derive(Debug, Clone, Copy)]
pub struct LogisticRegressionFunction<'a> {
    data: &'a LogisticData,
    lambda: f64,
}

impl<'a> LogisticRegressionFunction<'a> {
    /// Build an objective over `data` with regularization strength `lambda`.
    ///
    /// Errors
    /// ------
    /// - `ObjectiveError::InvalidLambda` if `lambda` is NaN/±inf or negative.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use logistic_objective::objective::{data::LogisticData, function::LogisticRegressionFunction};
    /// let data = LogisticData::new(
    ///     array![[1.0, 1.0, 1.0], [1.0, 2.0, 3.0], [1.0, 2.0, 3.0]],
    ///     array![1.0, 1.0, 0.0],
    /// )
    /// .unwrap();
    /// let f = LogisticRegressionFunction::new(&data, 0.0).unwrap();
    /// let value = f.evaluate(&array![0.0, 0.0, 0.0]).unwrap();
    /// assert!((value - 3.0 * std::f64::consts::LN_2).abs() < 1e-12);
    /// ```
    pub fn new(data: &'a LogisticData, lambda: f64) -> ObjectiveResult<Self> {
        if !lambda.is_finite() {
            return Err(ObjectiveError::InvalidLambda {
                value: lambda,
                reason: "Regularization strength must be finite.",
            });
        }
        if lambda < 0.0 {
            return Err(ObjectiveError::InvalidLambda {
                value: lambda,
                reason: "Regularization strength must be non-negative.",
            });
        }
        Ok(LogisticRegressionFunction { data, lambda })
    }

    /// Borrowed dataset.
    pub fn data(&self) -> &'a LogisticData {
        self.data
    }

    /// Regularization strength λ.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Number of separable terms `n` (data points).
    pub fn num_functions(&self) -> usize {
        self.data.n_points()
    }

    /// Expected parameter length `d + 1`.
    pub fn dim(&self) -> usize {
        self.data.dim()
    }

    /// Full regularization term `0.5·λ·(‖θ‖² − θ[0]²)`.
    pub fn penalty(&self, theta: &Array1<f64>) -> ObjectiveResult<f64> {
        self.check_len(theta)?;
        Ok(l2_penalty(theta, self.lambda))
    }

    /// Total loss `Σ_j loss_j + 0.5·λ·(‖θ‖² − θ[0]²)`.
    ///
    /// Errors
    /// ------
    /// - `ObjectiveError::ParameterLengthMismatch` if `theta.len() != d + 1`.
    pub fn evaluate(&self, theta: &Array1<f64>) -> ObjectiveResult<f64> {
        self.check_len(theta)?;
        let scores = self.data.design().t().dot(theta);
        let loss: f64 = scores
            .iter()
            .zip(self.data.responses().iter())
            .map(|(&score, &y)| log_loss(score, y))
            .sum();
        Ok(loss + l2_penalty(theta, self.lambda))
    }

    /// Loss of point `i` plus its `1/n` share of the penalty.
    ///
    /// Summing over `i ∈ [0, n)` reproduces [`Self::evaluate`].
    ///
    /// Errors
    /// ------
    /// - `ObjectiveError::ParameterLengthMismatch` if `theta.len() != d + 1`.
    /// - `ObjectiveError::PointIndexOutOfRange` if `i >= n`.
    pub fn evaluate_point(&self, theta: &Array1<f64>, i: usize) -> ObjectiveResult<f64> {
        self.check_len(theta)?;
        self.check_index(i)?;
        let (x, y) = self.data.point(i);
        let share = l2_penalty(theta, self.lambda) / self.num_functions() as f64;
        Ok(log_loss(x.dot(theta), y) + share)
    }

    /// Batch gradient `X·(σ(Xᵀθ) − y) + λ·θ`, coordinate 0 unregularized.
    ///
    /// Errors
    /// ------
    /// - `ObjectiveError::ParameterLengthMismatch` if `theta.len() != d + 1`.
    pub fn gradient(&self, theta: &Array1<f64>) -> ObjectiveResult<Array1<f64>> {
        self.check_len(theta)?;
        let design = self.data.design();
        let mut residuals = design.t().dot(theta);
        residuals.zip_mut_with(self.data.responses(), |r, &y| *r = safe_logistic(*r) - y);
        let mut grad = design.dot(&residuals);
        add_penalty_grad(&mut grad, theta, self.lambda);
        Ok(grad)
    }

    /// Gradient of the `i`-th separable term, written into `output`:
    /// `(σ(s_i) − y_i)·x_i + (λ/n)·θ`, coordinate 0 unregularized.
    ///
    /// `output` is reallocated to length `d + 1` if it has any other length,
    /// so a single buffer can be reused across calls.
    ///
    /// Errors
    /// ------
    /// - `ObjectiveError::ParameterLengthMismatch` if `theta.len() != d + 1`.
    /// - `ObjectiveError::PointIndexOutOfRange` if `i >= n`.
    pub fn gradient_point(
        &self, theta: &Array1<f64>, i: usize, output: &mut Array1<f64>,
    ) -> ObjectiveResult<()> {
        self.check_len(theta)?;
        self.check_index(i)?;
        if output.len() != theta.len() {
            *output = Array1::zeros(theta.len());
        }
        let (x, y) = self.data.point(i);
        let residual = safe_logistic(x.dot(theta)) - y;
        output.zip_mut_with(&x, |g, &xk| *g = residual * xk);
        add_penalty_grad(output, theta, self.lambda / self.num_functions() as f64);
        Ok(())
    }

    /// Validate a starting point: correct length and all entries finite.
    ///
    /// Errors
    /// ------
    /// - `ObjectiveError::ParameterLengthMismatch`
    /// - `ObjectiveError::NonFiniteParameter` for the first NaN/±inf entry.
    pub fn check(&self, theta: &Array1<f64>) -> ObjectiveResult<()> {
        self.check_len(theta)?;
        for (index, &value) in theta.iter().enumerate() {
            if !value.is_finite() {
                return Err(ObjectiveError::NonFiniteParameter { index, value });
            }
        }
        Ok(())
    }

    // ---- Helper Methods ----

    fn check_len(&self, theta: &Array1<f64>) -> ObjectiveResult<()> {
        if theta.len() != self.dim() {
            return Err(ObjectiveError::ParameterLengthMismatch {
                expected: self.dim(),
                found: theta.len(),
            });
        }
        Ok(())
    }

    fn check_index(&self, i: usize) -> ObjectiveResult<()> {
        if i >= self.num_functions() {
            return Err(ObjectiveError::PointIndexOutOfRange {
                index: i,
                len: self.num_functions(),
            });
        }
        Ok(())
    }
}

/// `grad[1..] += scale · theta[1..]`; the intercept coordinate is untouched.
fn add_penalty_grad(grad: &mut Array1<f64>, theta: &Array1<f64>, scale: f64) {
    if grad.len() > 1 {
        grad.slice_mut(s![1..]).scaled_add(scale, &theta.slice(s![1..]));
    }
}

// ---- Optimizer seams ----

impl<'a> Objective for LogisticRegressionFunction<'a> {
    fn value(&self, theta: &Theta) -> OptResult<Cost> {
        Ok(self.evaluate(theta)?)
    }

    fn check(&self, theta: &Theta) -> OptResult<()> {
        Ok(LogisticRegressionFunction::check(self, theta)?)
    }

    fn grad(&self, theta: &Theta) -> OptResult<Grad> {
        Ok(self.gradient(theta)?)
    }
}

impl<'a> SeparableObjective for LogisticRegressionFunction<'a> {
    fn num_functions(&self) -> usize {
        LogisticRegressionFunction::num_functions(self)
    }

    fn value_at(&self, theta: &Theta, i: usize) -> OptResult<Cost> {
        Ok(self.evaluate_point(theta, i)?)
    }

    fn grad_at(&self, theta: &Theta, i: usize, output: &mut Grad) -> OptResult<()> {
        Ok(self.gradient_point(theta, i, output)?)
    }
}
