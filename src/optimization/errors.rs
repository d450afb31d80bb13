use argmin::core::{ArgminError, Error};

use crate::objective::errors::ObjectiveError;

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

/// Unified error surface of the optimization layer.
///
/// Covers option validation, non-finite objective output, outcome checks,
/// objective argument failures, and `argmin` backend errors.
#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- Gradient ----
    /// Gradient dimensions do not match parameter dimensions.
    GradientDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Gradient elements need to be finite
    InvalidGradient {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    // ---- Options ----
    /// Gradient tolerance needs to be positive and finite.
    InvalidTolGrad {
        tol: f64,
        reason: &'static str,
    },
    /// Cost change tolerance needs to be positive and finite.
    InvalidTolCost {
        tol: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },
    /// At least one tolerance must be provided.
    NoTolerancesProvided,

    /// Invalid line searcher name.
    InvalidLineSearch {
        name: String,
        reason: &'static str,
    },

    /// lbfgs_mem needs to be at least 1.
    InvalidLBFGSMem {
        mem: usize,
        reason: &'static str,
    },

    /// SGD step size needs to be positive and finite.
    InvalidStepSize {
        step: f64,
        reason: &'static str,
    },

    // ---- Cost function ----
    /// Cost function returned a non-finite value.
    NonFiniteCost {
        value: f64,
    },

    /// Objective rejected its arguments (parameter length, point index, ...).
    InvalidArgument(ObjectiveError),

    // ---- Optimizer outcome ----
    /// Estimated parameters must be finite.
    InvalidThetaHat {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// Theta hat is missing
    MissingThetaHat,

    // ---- Solver backend ----
    /// `argmin` raised one of its own `ArgminError`s; `kind` names it.
    Solver {
        kind: SolverErrorKind,
        text: String,
    },
    /// Any other error surfacing from inside `argmin`.
    BackendError {
        text: String,
    },
}

/// Classification of a native `argmin` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErrorKind {
    /// A solver setting was rejected (e.g. a negative tolerance).
    InvalidParameter,
    NotImplemented,
    NotInitialized,
    ConditionViolated,
    CheckpointNotFound,
    PotentialBug,
    Other,
}

impl SolverErrorKind {
    fn of(err: &ArgminError) -> Self {
        match err {
            ArgminError::InvalidParameter { .. } => SolverErrorKind::InvalidParameter,
            ArgminError::NotImplemented { .. } => SolverErrorKind::NotImplemented,
            ArgminError::NotInitialized { .. } => SolverErrorKind::NotInitialized,
            ArgminError::ConditionViolated { .. } => SolverErrorKind::ConditionViolated,
            ArgminError::CheckpointNotFound { .. } => SolverErrorKind::CheckpointNotFound,
            ArgminError::PotentialBug { .. } => SolverErrorKind::PotentialBug,
            _ => SolverErrorKind::Other,
        }
    }
}

impl std::error::Error for OptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OptError::InvalidArgument(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Gradient ----
            OptError::GradientDimMismatch { expected, found } => {
                write!(f, "Gradient dimension mismatch: expected {expected}, found {found}")
            }
            OptError::InvalidGradient { index, value, reason } => {
                write!(f, "Invalid gradient at index {index}: {value}: {reason}")
            }

            // ---- Options ----
            OptError::InvalidTolGrad { tol, reason } => {
                write!(f, "Invalid gradient tolerance {tol}: {reason}")
            }
            OptError::InvalidTolCost { tol, reason } => {
                write!(f, "Invalid cost function change tolerance {tol}: {reason}")
            }
            OptError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }
            OptError::NoTolerancesProvided => {
                write!(f, "No tolerances provided")
            }
            OptError::InvalidLineSearch { name, reason } => {
                write!(f, "Invalid line searcher '{name}': {reason}")
            }
            OptError::InvalidLBFGSMem { mem, reason } => {
                write!(f, "Invalid L-BFGS memory {mem}: {reason}")
            }
            OptError::InvalidStepSize { step, reason } => {
                write!(f, "Invalid step size {step}: {reason}")
            }

            // ---- Cost function ----
            OptError::NonFiniteCost { value } => {
                write!(f, "Non-finite cost value: {value}")
            }
            OptError::InvalidArgument(err) => {
                write!(f, "Invalid argument: {err}")
            }

            // ---- Optimizer outcome ----
            OptError::InvalidThetaHat { index, value, reason } => {
                write!(f, "Invalid estimated parameter at index {index}: {value}: {reason}")
            }
            OptError::MissingThetaHat => {
                write!(f, "Missing estimated parameters (theta hat)")
            }

            // ---- Solver backend ----
            OptError::Solver { kind, text } => {
                write!(f, "Solver error ({kind:?}): {text}")
            }
            OptError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }
        }
    }
}

impl From<Error> for OptError {
    /// Normalize an `argmin` error.
    ///
    /// Errors raised by our own objective travel through `argmin` boxed as
    /// `OptError` and come back unchanged. A native `ArgminError` becomes
    /// `Solver` with its kind; anything else becomes `BackendError`.
    fn from(err: Error) -> Self {
        let err = match err.downcast::<OptError>() {
            Ok(own) => return own,
            Err(err) => err,
        };
        match err.downcast::<ArgminError>() {
            Ok(native) => {
                OptError::Solver { kind: SolverErrorKind::of(&native), text: native.to_string() }
            }
            Err(other) => OptError::BackendError { text: other.to_string() },
        }
    }
}

impl From<ObjectiveError> for OptError {
    fn from(err: ObjectiveError) -> Self {
        OptError::InvalidArgument(err)
    }
}
