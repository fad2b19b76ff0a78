//! Closed-form Black-Scholes-Merton pricing for European options.
//!
//! This module provides:
//! - [`BlackScholes`]: price, d₁/d₂ and Greeks under lognormal dynamics
//!   with a continuous dividend yield
//! - [`Greeks`]: Delta, Gamma, Vega and Theta from one d₁/d₂ evaluation
//! - [`AnalyticalError`]: input validation failures
//!
//! ## Numerical Notes
//!
//! - Normal CDF is erfc-based for accuracy in the tails
//! - Expired options (`T <= 0`) short-circuit to zero before any division

pub mod black_scholes;
pub mod error;
pub mod greeks;

// Re-export main types at module level
pub use black_scholes::BlackScholes;
pub use bsm_core::math::distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use greeks::Greeks;
