//! Dataset container for binary logistic regression.
//!
//! Purpose
//! -------
//! Provide a small, validated container for the design matrix and response
//! vector consumed by [`LogisticRegressionFunction`]. This module centralizes
//! input validation so the objective can assume clean, well-shaped data on
//! every call.
//!
//! Key behaviors
//! -------------
//! - [`LogisticData`] enforces shape and value invariants once, at
//!   construction time, via [`LogisticData::new`].
//! - Exposes read-only accessors (`design`, `responses`, `point`,
//!   `n_points`, `dim`) so downstream code never mutates the dataset.
//!
//! Invariants & assumptions
//! ------------------------
//! - The design matrix has shape `(d + 1) × n` with `d + 1 ≥ 1` and `n ≥ 1`:
//!   **one column per data point**, one row per feature.
//! - Row 0 is expected to be the constant-1.0 intercept row. This is the
//!   caller's responsibility and is *not* checked (no automatic intercept
//!   insertion).
//! - Every design entry is finite.
//! - `responses.len() == n` and every response is exactly `0.0` or `1.0`.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based. A point index `i` selects design column `i` and
//!   response `i`.
//! - The container never rescales or transforms the data.
//!
//! Downstream usage
//! ----------------
//! - Build one [`LogisticData`] per training run and hand `&LogisticData` to
//!   one or more [`LogisticRegressionFunction`]s (e.g., with different λ).
//!
//! Testing notes
//! -------------
//! - Unit tests cover `LogisticData::new` (happy path, empty design,
//!   non-finite entries, response length mismatch, non-binary responses)
//!   and the column accessor.
//!
//! [`LogisticRegressionFunction`]: crate::objective::function::LogisticRegressionFunction
use crate::objective::errors::{ObjectiveError, ObjectiveResult};
use ndarray::{Array1, Array2, ArrayView1};

/// `LogisticData` — validated design matrix plus binary responses.
///
/// Fields
/// ------
/// - `design`: `Array2<f64>`
///   Feature matrix of shape `(d + 1) × n`, one column per point, row 0 the
///   intercept row.
/// - `responses`: `Array1<f64>`
///   Binary labels of length `n`, each `0.0` or `1.0`.
///
/// Invariants
/// ----------
/// - `design.nrows() ≥ 1`, `design.ncols() ≥ 1`, all entries finite.
/// - `responses.len() == design.ncols()`; responses are binary.
///
/// Performance
/// -----------
/// - Validation is a single O((d + 1)·n) scan. After construction the type
///   is a plain owner of two contiguous buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticData {
    design: Array2<f64>,
    responses: Array1<f64>,
}

impl LogisticData {
    /// Construct a validated [`LogisticData`] from a design matrix and
    /// responses.
    ///
    /// Parameters
    /// ----------
    /// - `design`: `Array2<f64>`
    ///   Shape `(d + 1) × n`; must be non-empty with finite entries.
    /// - `responses`: `Array1<f64>`
    ///   Length `n`; each entry exactly `0.0` or `1.0`.
    ///
    /// Errors
    /// ------
    /// - `ObjectiveError::EmptyDesign` when the design has no rows or columns.
    /// - `ObjectiveError::ResponseLengthMismatch` when
    ///   `responses.len() != design.ncols()`.
    /// - `ObjectiveError::NonFiniteDesign { row, col, value }` for the first
    ///   NaN/±inf design entry.
    /// - `ObjectiveError::NonBinaryResponse { index, value }` for the first
    ///   response not equal to 0.0 or 1.0.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use logistic_objective::objective::data::LogisticData;
    /// let design = array![[1.0, 1.0, 1.0], [1.0, 2.0, 3.0], [1.0, 2.0, 3.0]];
    /// let responses = array![1.0, 1.0, 0.0];
    /// let data = LogisticData::new(design, responses).unwrap();
    /// assert_eq!(data.n_points(), 3);
    /// assert_eq!(data.dim(), 3);
    /// ```
    pub fn new(design: Array2<f64>, responses: Array1<f64>) -> ObjectiveResult<Self> {
        let (rows, cols) = design.dim();
        if rows == 0 || cols == 0 {
            return Err(ObjectiveError::EmptyDesign { rows, cols });
        }
        if responses.len() != cols {
            return Err(ObjectiveError::ResponseLengthMismatch {
                expected: cols,
                found: responses.len(),
            });
        }

        for ((row, col), &value) in design.indexed_iter() {
            if !value.is_finite() {
                return Err(ObjectiveError::NonFiniteDesign { row, col, value });
            }
        }
        for (index, &value) in responses.iter().enumerate() {
            if value != 0.0 && value != 1.0 {
                return Err(ObjectiveError::NonBinaryResponse { index, value });
            }
        }

        Ok(LogisticData { design, responses })
    }

    /// Feature matrix, shape `(d + 1) × n`.
    pub fn design(&self) -> &Array2<f64> {
        &self.design
    }

    /// Binary responses, length `n`.
    pub fn responses(&self) -> &Array1<f64> {
        &self.responses
    }

    /// Number of data points `n` (design columns).
    pub fn n_points(&self) -> usize {
        self.design.ncols()
    }

    /// Parameter dimension `d + 1` (design rows, intercept included).
    pub fn dim(&self) -> usize {
        self.design.nrows()
    }

    /// Feature column and response of point `i`.
    ///
    /// Panics if `i >= n`; callers on a fallible path check the index first.
    pub(crate) fn point(&self, i: usize) -> (ArrayView1<'_, f64>, f64) {
        (self.design.column(i), self.responses[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Successful construction and accessor shapes.
    // - Each construction-time validation failure.
    //
    // They intentionally DO NOT cover:
    // - Objective evaluation on the data; see `function` tests.
    // -------------------------------------------------------------------------

    fn toy_design() -> Array2<f64> {
        array![[1.0, 1.0, 1.0], [1.0, 2.0, 3.0], [1.0, 2.0, 3.0]]
    }

    #[test]
    // Purpose
    // -------
    // Verify that a well-formed dataset is accepted and reports its shape.
    //
    // Given
    // -----
    // - The 3×3 toy design with responses (1, 1, 0).
    //
    // Expect
    // ------
    // - `Ok(data)` with `n_points == 3`, `dim == 3`, and `point(1)` returning
    //   column (1, 2, 2) with response 1.
    fn new_accepts_valid_dataset() {
        // Arrange
        let responses = array![1.0, 1.0, 0.0];

        // Act
        let data = LogisticData::new(toy_design(), responses).expect("Dataset should be valid");

        // Assert
        assert_eq!(data.n_points(), 3);
        assert_eq!(data.dim(), 3);
        let (x, y) = data.point(1);
        assert_eq!(x.to_vec(), vec![1.0, 2.0, 2.0]);
        assert_eq!(y, 1.0);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a response vector of the wrong length is rejected.
    //
    // Given
    // -----
    // - 3 design columns and 2 responses.
    //
    // Expect
    // ------
    // - `Err(ResponseLengthMismatch { expected: 3, found: 2 })`.
    fn new_rejects_response_length_mismatch() {
        // Act
        let err = LogisticData::new(toy_design(), array![1.0, 0.0]).unwrap_err();

        // Assert
        assert_eq!(err, ObjectiveError::ResponseLengthMismatch { expected: 3, found: 2 });
    }

    #[test]
    // Purpose
    // -------
    // Ensure an empty design is rejected before any other check.
    //
    // Given
    // -----
    // - A 2×0 design and an empty response vector.
    //
    // Expect
    // ------
    // - `Err(EmptyDesign { rows: 2, cols: 0 })`.
    fn new_rejects_empty_design() {
        // Arrange
        let design = Array2::<f64>::zeros((2, 0));

        // Act
        let err = LogisticData::new(design, Array1::zeros(0)).unwrap_err();

        // Assert
        assert_eq!(err, ObjectiveError::EmptyDesign { rows: 2, cols: 0 });
    }

    #[test]
    // Purpose
    // -------
    // Check that the first non-finite design entry is reported with its
    // coordinates.
    //
    // Given
    // -----
    // - The toy design with a NaN at (2, 1).
    //
    // Expect
    // ------
    // - `Err(NonFiniteDesign { row: 2, col: 1, .. })`.
    fn new_rejects_non_finite_design() {
        // Arrange
        let mut design = toy_design();
        design[[2, 1]] = f64::NAN;

        // Act
        let err = LogisticData::new(design, array![1.0, 1.0, 0.0]).unwrap_err();

        // Assert
        match err {
            ObjectiveError::NonFiniteDesign { row: 2, col: 1, value } => assert!(value.is_nan()),
            other => panic!("Expected NonFiniteDesign, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that responses outside {0, 1} are rejected.
    //
    // Given
    // -----
    // - Responses (1, 0.5, 0).
    //
    // Expect
    // ------
    // - `Err(NonBinaryResponse { index: 1, value: 0.5 })`.
    fn new_rejects_non_binary_response() {
        // Act
        let err = LogisticData::new(toy_design(), array![1.0, 0.5, 0.0]).unwrap_err();

        // Assert
        assert_eq!(err, ObjectiveError::NonBinaryResponse { index: 1, value: 0.5 });
    }
}
