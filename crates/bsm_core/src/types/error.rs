//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Crate-agnostic pricing error categories
//! - `SolverError`: Errors from root-finding solvers

use thiserror::Error;

/// Categorised pricing errors.
///
/// The common currency for callers that do not care which layer failed.
/// Model-level errors convert into this type.
///
/// # Variants
/// - `InvalidInput`: Invalid market data, parameters or option type
/// - `SolverNonConvergence`: An inversion could not reach its tolerance
/// - `NumericalInstability`: Computation produced a non-finite value
///
/// # Examples
/// ```
/// use bsm_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Iterative solve failed to converge
    #[error("Solver did not converge: {0}")]
    SolverNonConvergence(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

/// Root-finding solver errors.
///
/// # Variants
/// - `MaxIterationsExceeded`: Evaluation budget spent without converging
/// - `StepFloorReached`: Adaptive step shrank below its floor
/// - `NoBracket`: Function values at bracket endpoints have same sign
/// - `NumericalInstability`: Objective returned a non-finite value
///
/// # Examples
/// ```
/// use bsm_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Step size fell below the configured floor before converging.
    #[error("Step size {step} fell below floor at x = {x} after {evaluations} evaluations")]
    StepFloorReached {
        /// Last committed point
        x: f64,
        /// Step size when the search stopped
        step: f64,
        /// Objective evaluations performed
        evaluations: usize,
    },

    /// No valid bracket (function values at endpoints have same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl From<SolverError> for PricingError {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::NumericalInstability(_) => {
                PricingError::NumericalInstability(err.to_string())
            }
            _ => PricingError::SolverNonConvergence(err.to_string()),
        }
    }
}
