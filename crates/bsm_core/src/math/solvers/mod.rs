//! Derivative-free root-finding solvers.
//!
//! These back the implied-volatility inversion, which treats the pricer as an
//! opaque increasing function of volatility.
//!
//! ## Available Solvers
//!
//! - [`DirectedSearchSolver`]: Walks from a starting point with a step that
//!   halves on overshoot; needs no bracket
//! - [`BrentSolver`]: Robust bracketing method, paired with
//!   [`expand_bracket`] when no bracket is known up front
//!
//! ## Configuration
//!
//! All solvers use [`SolverConfig`]:
//! - `tolerance`: Residual tolerance, `|f(x)| <= tolerance` (default: 1e-10)
//! - `step_tolerance`: Abscissa tolerance / step floor (default: 1e-12)
//! - `max_iterations`: Evaluation or iteration cap (default: 100)
//!
//! Every solver terminates with an explicit [`SolverError`](crate::types::SolverError)
//! rather than looping or returning NaN.
//!
//! ## Examples
//!
//! ```
//! use bsm_core::math::solvers::{expand_bracket, BracketConfig, BrentSolver, SolverConfig};
//!
//! // Solve e^x = 50 without knowing a bracket in advance
//! let f = |x: f64| x.exp() - 50.0;
//! let (a, b) = expand_bracket(f, 0.0, 1.0, &BracketConfig::new(-100.0, 100.0)).unwrap();
//!
//! let root = BrentSolver::new(SolverConfig::default()).find_root(f, a, b).unwrap();
//! assert!((root - 50.0_f64.ln()).abs() < 1e-10);
//! ```

mod bracket;
mod brent;
mod config;
mod directed;

pub use bracket::{expand_bracket, BracketConfig};
pub use brent::BrentSolver;
pub use config::SolverConfig;
pub use directed::DirectedSearchSolver;
