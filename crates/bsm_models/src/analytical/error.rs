//! Error types for analytical pricing operations.

use bsm_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Raised before any formula is evaluated, so a bad input never turns into
/// a NaN or infinity downstream.
///
/// # Variants
/// - `InvalidSpot`: Non-positive or non-finite spot price
/// - `InvalidStrike`: Non-positive or non-finite strike price
/// - `InvalidVolatility`: Non-positive or non-finite volatility
/// - `InvalidParameter`: Non-finite rate, dividend yield or maturity
/// - `UnknownOptionType`: Option type string that is neither call nor put
/// - `NonFiniteTerms`: d₁ or d₂ overflowed for otherwise valid inputs
///
/// # Examples
/// ```
/// use bsm_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid spot price (must be positive and finite).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price (must be positive and finite).
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike price value
        strike: f64,
    },

    /// Invalid volatility (must be positive and finite).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// A real-valued parameter that must be finite was not.
    #[error("Invalid {name}: {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// The invalid value
        value: f64,
    },

    /// Option type not recognised.
    #[error("Unknown option type: {0:?} (expected \"call\" or \"put\")")]
    UnknownOptionType(String),

    /// d₁ or d₂ is not finite, e.g. when σ²·T overflows.
    #[error("Non-finite d1 = {d1}, d2 = {d2}")]
    NonFiniteTerms {
        /// d₁ as computed
        d1: f64,
        /// d₂ as computed
        d2: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::NonFiniteTerms { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
            _ => PricingError::InvalidInput(err.to_string()),
        }
    }
}
