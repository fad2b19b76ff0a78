//! # bsm_core: Mathematical Foundation for the Black-Scholes-Merton Pricer
//!
//! ## Foundation Layer Role
//!
//! bsm_core is the bottom layer of the workspace, providing:
//! - Standard normal CDF and PDF (`math::distributions`)
//! - Root-finding solvers with bounded iteration (`math::solvers`)
//! - Error types: `PricingError`, `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! This layer has no dependencies on other workspace crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - statrs: Double-precision complementary error function
//! - thiserror: Error derivation
//! - tracing: Solver diagnostics
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use bsm_core::math::distributions::{norm_cdf, norm_pdf};
//! use bsm_core::math::solvers::{BrentSolver, SolverConfig};
//!
//! assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
//! assert!((norm_pdf(0.0) - 0.398_942_280_401_432_7).abs() < 1e-15);
//!
//! // Quantile of the standard normal by root finding
//! let solver = BrentSolver::new(SolverConfig::default());
//! let q = solver.find_root(|x: f64| norm_cdf(x) - 0.975, 0.0, 5.0).unwrap();
//! assert!((q - 1.959_963_984_540_054).abs() < 1e-8);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
