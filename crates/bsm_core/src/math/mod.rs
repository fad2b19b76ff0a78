//! Mathematical primitives shared by every pricing component.
//!
//! - `distributions`: Standard normal CDF and PDF
//! - `solvers`: Derivative-free root finders and bracket expansion

pub mod distributions;
pub mod solvers;
