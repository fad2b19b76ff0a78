//! Error types for implied volatility inversion.

use std::fmt;

use bsm_core::types::PricingError;
use thiserror::Error;

use super::config::ConfigError;
use crate::analytical::AnalyticalError;

/// Why an inversion stopped without a volatility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NonConvergenceReason {
    /// Evaluation budget spent.
    MaxIterations,
    /// Directed search step shrank below its floor.
    StepFloor,
    /// Observed price outside the range the model can produce.
    PriceOutOfBounds {
        /// Zero-volatility price
        lower: f64,
        /// Infinite-volatility price
        upper: f64,
    },
    /// Bracket expansion hit the volatility limits without a sign change.
    NoBracket,
    /// Price does not depend on volatility (expired option).
    FlatPrice,
    /// Price evaluation produced NaN.
    NumericalInstability,
}

impl fmt::Display for NonConvergenceReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxIterations => write!(f, "maximum iterations reached"),
            Self::StepFloor => write!(f, "step size fell below its floor"),
            Self::PriceOutOfBounds { lower, upper } => {
                write!(f, "price outside model bounds [{}, {}]", lower, upper)
            }
            Self::NoBracket => write!(f, "no volatility bracket found"),
            Self::FlatPrice => write!(f, "price is flat in volatility"),
            Self::NumericalInstability => write!(f, "numerical instability"),
        }
    }
}

/// Implied volatility errors.
///
/// A failed inversion is always an error; it never yields NaN or a
/// fallback volatility.
///
/// # Examples
/// ```
/// use bsm_models::implied_vol::{ImpliedVolError, NonConvergenceReason};
///
/// let err = ImpliedVolError::NonConvergence {
///     reason: NonConvergenceReason::StepFloor,
///     iterations: 42,
///     last_volatility: Some(0.31),
/// };
/// assert!(err.to_string().contains("42"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ImpliedVolError {
    /// Market inputs failed validation.
    #[error(transparent)]
    InvalidInput(#[from] AnalyticalError),

    /// Observed price negative or not finite.
    #[error("Invalid observed price: {price}")]
    InvalidPrice {
        /// The rejected price
        price: f64,
    },

    /// The search stopped without meeting the price tolerance.
    #[error("Implied volatility did not converge after {iterations} evaluations: {reason}")]
    NonConvergence {
        /// Why the search stopped
        reason: NonConvergenceReason,
        /// Price evaluations performed
        iterations: usize,
        /// Last volatility tried, when one was reached
        last_volatility: Option<f64>,
    },

    /// Solver configuration was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ImpliedVolError {
    /// True for [`ImpliedVolError::NonConvergence`].
    pub fn is_non_convergence(&self) -> bool {
        matches!(self, Self::NonConvergence { .. })
    }

    /// The reason of a [`ImpliedVolError::NonConvergence`], if this is one.
    pub fn reason(&self) -> Option<NonConvergenceReason> {
        match self {
            Self::NonConvergence { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

impl From<ImpliedVolError> for PricingError {
    fn from(err: ImpliedVolError) -> Self {
        match err {
            ImpliedVolError::InvalidInput(inner) => inner.into(),
            ImpliedVolError::InvalidPrice { .. }
            | ImpliedVolError::Config(_) => PricingError::InvalidInput(err.to_string()),
            ImpliedVolError::NonConvergence {
                reason: NonConvergenceReason::NumericalInstability,
                ..
            } => PricingError::NumericalInstability(err.to_string()),
            ImpliedVolError::NonConvergence { .. } => {
                PricingError::SolverNonConvergence(err.to_string())
            }
        }
    }
}
