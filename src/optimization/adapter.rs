//! Adapter that exposes an [`Objective`] as an `argmin` problem.
//!
//! The objective is minimized as-is: `cost(θ) = f.value(θ)`, and its
//! analytic gradient is forwarded after validation.
use crate::optimization::{
    errors::OptError,
    traits::Objective,
    types::{Cost, Grad, Theta},
    validation::validate_grad,
};
use argmin::core::{CostFunction, Error, Gradient};

/// Bridges an [`Objective`] to `argmin`'s `CostFunction` and `Gradient`.
#[derive(Debug, Clone)]
pub struct ArgMinAdapter<'a, F: Objective> {
    pub f: &'a F,
}

impl<'a, F: Objective> ArgMinAdapter<'a, F> {
    pub fn new(f: &'a F) -> Self {
        Self { f }
    }
}

impl<'a, F: Objective> CostFunction for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Output = Cost;

    /// Evaluate `f(θ)`.
    ///
    /// # Errors
    /// - Any `OptError` from `value`, boxed into `argmin`'s error type.
    /// - `OptError::NonFiniteCost` when the value is NaN/±inf.
    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        let output = self.f.value(theta)?;
        if !output.is_finite() {
            return Err((OptError::NonFiniteCost { value: output }).into());
        }
        Ok(output)
    }
}

impl<'a, F: Objective> Gradient for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Gradient = Grad;

    /// Evaluate `∇f(θ)`, validated for length and finiteness.
    ///
    /// # Errors
    /// - Any `OptError` from `grad`.
    /// - `GradientDimMismatch` / `InvalidGradient` for a malformed gradient.
    fn gradient(&self, theta: &Self::Param) -> Result<Self::Gradient, Error> {
        let g = self.f.grad(theta)?;
        validate_grad(&g, theta.len())?;
        Ok(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::{
        data::LogisticData, errors::ObjectiveError, function::LogisticRegressionFunction,
    };
    use crate::optimization::errors::OptResult;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Cost forwarding without sign changes and the non-finite guard.
    // - Analytic gradient forwarding and validation.
    // - Propagation of gradient errors.
    //
    // They intentionally DO NOT cover:
    // - Solver runs; see `api` tests.
    // -------------------------------------------------------------------------

    /// f(θ) = Σ (θₖ − 1)² with an analytic gradient.
    struct Bowl;

    impl Objective for Bowl {
        fn value(&self, theta: &Theta) -> OptResult<Cost> {
            Ok(theta.mapv(|t| (t - 1.0).powi(2)).sum())
        }
        fn check(&self, _theta: &Theta) -> OptResult<()> {
            Ok(())
        }
        fn grad(&self, theta: &Theta) -> OptResult<Grad> {
            Ok(theta.mapv(|t| 2.0 * (t - 1.0)))
        }
    }

    /// Returns a gradient of the wrong length and an infinite value.
    struct Broken;

    impl Objective for Broken {
        fn value(&self, _theta: &Theta) -> OptResult<Cost> {
            Ok(f64::INFINITY)
        }
        fn check(&self, _theta: &Theta) -> OptResult<()> {
            Ok(())
        }
        fn grad(&self, _theta: &Theta) -> OptResult<Grad> {
            Ok(array![0.0])
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that cost and analytic gradient pass through unchanged.
    //
    // Given
    // -----
    // - `Bowl` at θ = (3, -1).
    //
    // Expect
    // ------
    // - cost = 4 + 4 = 8, gradient = (4, -4).
    fn analytic_values_pass_through_unchanged() {
        // Arrange
        let adapter = ArgMinAdapter::new(&Bowl);
        let theta = array![3.0, -1.0];

        // Act
        let cost = adapter.cost(&theta).unwrap();
        let grad = adapter.gradient(&theta).unwrap();

        // Assert
        assert_relative_eq!(cost, 8.0, epsilon = 1e-12);
        assert_relative_eq!(grad[0], 4.0, epsilon = 1e-12);
        assert_relative_eq!(grad[1], -4.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Check that malformed objective output becomes the matching `OptError`.
    //
    // Given
    // -----
    // - `Broken` at θ = (0, 0).
    //
    // Expect
    // ------
    // - cost → `NonFiniteCost`, gradient → `GradientDimMismatch`.
    fn malformed_output_is_rejected() {
        // Arrange
        let adapter = ArgMinAdapter::new(&Broken);
        let theta = array![0.0, 0.0];

        // Act
        let cost_err = OptError::from(adapter.cost(&theta).unwrap_err());
        let grad_err = OptError::from(adapter.gradient(&theta).unwrap_err());

        // Assert
        assert!(matches!(cost_err, OptError::NonFiniteCost { .. }));
        assert_eq!(grad_err, OptError::GradientDimMismatch { expected: 2, found: 1 });
    }

    #[test]
    // Purpose
    // -------
    // Ensure a failing analytic gradient is reported as-is; there is no
    // alternative gradient path that could mask it.
    //
    // Given
    // -----
    // - A logistic objective over 2 parameters evaluated at θ of length 3.
    //
    // Expect
    // ------
    // - `InvalidArgument(ParameterLengthMismatch { expected: 2, found: 3 })`.
    fn gradient_errors_propagate_unchanged() {
        // Arrange
        let data = LogisticData::new(array![[1.0, 1.0], [0.5, -0.5]], array![1.0, 0.0])
            .expect("Dataset should be valid");
        let f = LogisticRegressionFunction::new(&data, 0.1).expect("Lambda should be valid");
        let adapter = ArgMinAdapter::new(&f);

        // Act
        let err = OptError::from(adapter.gradient(&array![0.0, 0.0, 0.0]).unwrap_err());

        // Assert
        assert_eq!(
            err,
            OptError::InvalidArgument(ObjectiveError::ParameterLengthMismatch {
                expected: 2,
                found: 3
            })
        );
    }
}
