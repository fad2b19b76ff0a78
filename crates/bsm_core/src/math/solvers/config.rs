//! Solver configuration types.

use num_traits::Float;

/// Configuration for root-finding algorithms.
///
/// Provides the settings shared by every solver: a residual tolerance, a
/// step (abscissa) tolerance, and a hard evaluation budget.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerances (e.g., `f64`)
///
/// # Example
///
/// ```
/// use bsm_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.tolerance < 1e-8);
/// assert!(config.max_iterations >= 50);
///
/// // Coarse residual, fine abscissa
/// let custom = SolverConfig {
///     tolerance: 1.0,
///     step_tolerance: 1e-10,
///     max_iterations: 200,
/// };
/// assert_eq!(custom.max_iterations, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance on the residual.
    ///
    /// The solver stops when `|f(x)| <= tolerance`.
    pub tolerance: T,

    /// Smallest meaningful change in `x`.
    ///
    /// Bracketing solvers stop once the bracket is narrower than this;
    /// step-based solvers treat it as the step-size floor.
    pub step_tolerance: T,

    /// Maximum number of iterations before giving up.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: 1e-10
    /// - `step_tolerance`: 1e-12
    /// - `max_iterations`: 100
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap_or_else(T::epsilon),
            step_tolerance: T::from(1e-12).unwrap_or_else(T::epsilon),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0`, `step_tolerance <= 0` or
    /// `max_iterations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use bsm_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-12, 1e-14, 200);
    /// assert_eq!(config.max_iterations, 200);
    /// ```
    pub fn new(tolerance: T, step_tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(step_tolerance > T::zero(), "step_tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            step_tolerance,
            max_iterations,
        }
    }
}
