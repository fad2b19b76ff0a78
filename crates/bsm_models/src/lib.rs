//! # bsm_models: Black-Scholes-Merton Valuation
//!
//! Closed-form value and sensitivities of European vanilla options on an
//! underlying with a constant continuous dividend yield, plus the inversion
//! from an observed price back to implied volatility.
//!
//! This crate provides:
//! - Market inputs and option type (`instruments`)
//! - The pricing model and its Greeks (`analytical`)
//! - A bounded, derivative-free implied-volatility solver (`implied_vol`)
//! - A flat function API over all of the above (`pricing`)
//!
//! ## Design Principles
//!
//! - **One source of `d1`/`d2`**: price, every Greek and (through the price)
//!   the solver read the same intermediate terms
//! - **Expiry is not an error**: `ttm <= 0` values and Greeks are exactly zero
//! - **Explicit failure**: invalid inputs and non-convergence are typed errors,
//!   never NaN or a default value
//!
//! ## Example
//!
//! ```
//! use bsm_models::pricing;
//! use bsm_models::instruments::OptionType;
//!
//! let call = pricing::price(100.0, 95.0, 0.0, 0.0, 30.0 / 365.0, 0.25, OptionType::Call).unwrap();
//! assert!((call - 5.9716).abs() < 1e-4);
//!
//! let iv = pricing::implied_volatility(100.0, 95.0, 0.0, 0.0, 30.0 / 365.0, OptionType::Call, call)
//!     .unwrap();
//! assert!((iv - 0.25).abs() < 0.1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod implied_vol;
pub mod instruments;
pub mod pricing;
