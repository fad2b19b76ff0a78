//! Implied volatility inversion of the Black-Scholes-Merton price.
//!
//! - [`ImpliedVolSolver`]: bounded search for σ matching an observed price
//! - [`ImpliedVolConfig`]: tolerances, limits and search method, loadable
//!   from TOML or `BSM_IV_*` environment variables
//! - [`ImpliedVolError`]: input failures and non-convergence with its reason

mod config;
mod error;
mod solver;

pub use config::{ConfigError, ImpliedVolConfig, SearchMethod, ENV_PREFIX};
pub use error::{ImpliedVolError, NonConvergenceReason};
pub use solver::{ImpliedVolResult, ImpliedVolSolver};
