//! Errors for the logistic-regression objective (dataset validation and
//! call-time argument checks).
//!
//! This module defines [`ObjectiveError`], the single error type raised by the
//! objective layer. Every variant is an *invalid argument*: either the dataset
//! handed to the constructor violates its invariants, or a call supplied a
//! parameter vector / point index that does not fit the dataset.
//!
//! ## Conventions
//! - **Indices are 0-based.** `row` indexes features (row 0 is the intercept
//!   row), `col`/`index` indexes data points.
//! - Numeric edge cases (huge linear scores, exact 0/1 probabilities) are
//!   **not** errors; they are absorbed by the saturating loss and sigmoid in
//!   [`crate::objective::numerics`].
//! - The optimizer layer converts these errors into
//!   [`crate::optimization::errors::OptError`] via `From`.

/// Result alias for objective construction and evaluation.
pub type ObjectiveResult<T> = Result<T, ObjectiveError>;

/// Invalid-argument failures raised by the objective layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectiveError {
    // ---- Dataset validation ----
    /// Design matrix has no rows or no columns.
    EmptyDesign { rows: usize, cols: usize },

    /// A design entry is NaN/±inf.
    NonFiniteDesign { row: usize, col: usize, value: f64 },

    /// Response vector length differs from the number of design columns.
    ResponseLengthMismatch { expected: usize, found: usize },

    /// A response is neither 0.0 nor 1.0.
    NonBinaryResponse { index: usize, value: f64 },

    /// Regularization strength must be finite and >= 0.
    InvalidLambda { value: f64, reason: &'static str },

    // ---- Call-time checks ----
    /// Parameter vector length differs from the number of design rows.
    ParameterLengthMismatch { expected: usize, found: usize },

    /// Separable call addressed a point outside `[0, n)`.
    PointIndexOutOfRange { index: usize, len: usize },

    /// Parameter vector contains NaN/±inf.
    NonFiniteParameter { index: usize, value: f64 },
}

impl std::error::Error for ObjectiveError {}

impl std::fmt::Display for ObjectiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Dataset validation ----
            ObjectiveError::EmptyDesign { rows, cols } => {
                write!(f, "Design matrix is empty: shape ({rows}, {cols}).")
            }
            ObjectiveError::NonFiniteDesign { row, col, value } => {
                write!(f, "Design entry at ({row}, {col}) is non-finite: {value}")
            }
            ObjectiveError::ResponseLengthMismatch { expected, found } => {
                write!(
                    f,
                    "Response length mismatch: design has {expected} columns, found {found} responses"
                )
            }
            ObjectiveError::NonBinaryResponse { index, value } => {
                write!(f, "Response at index {index} must be 0.0 or 1.0; got: {value}")
            }
            ObjectiveError::InvalidLambda { value, reason } => {
                write!(f, "Invalid regularization strength {value}: {reason}")
            }

            // ---- Call-time checks ----
            ObjectiveError::ParameterLengthMismatch { expected, found } => {
                write!(f, "Parameter length mismatch: expected {expected}, found {found}")
            }
            ObjectiveError::PointIndexOutOfRange { index, len } => {
                write!(f, "Point index {index} out of range for {len} points")
            }
            ObjectiveError::NonFiniteParameter { index, value } => {
                write!(f, "Parameter at index {index} is non-finite: {value}")
            }
        }
    }
}
