//! Directed step search with adaptive step halving.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;
use tracing::trace;

/// Derivative-free root finder for increasing functions that walks from a
/// starting point in fixed steps and halves the step on overshoot.
///
/// There is no bracket: the search moves toward the sign change implied by
/// `f(x)` and only commits a move that does not cross the root by more than
/// the residual tolerance. A candidate that would cross, or that leaves the
/// domain `[lower, upper]`, is discarded and the step halved, so the step
/// size is monotonically non-increasing.
///
/// Termination is guaranteed by two bounds from [`SolverConfig`]:
/// - `max_iterations` caps the number of objective evaluations
/// - `step_tolerance` is the step-size floor
///
/// # Example
///
/// ```
/// use bsm_core::math::solvers::{DirectedSearchSolver, SolverConfig};
///
/// let solver = DirectedSearchSolver::new(SolverConfig::new(1e-9, 1e-14, 500));
///
/// // Solve x² - 2 = 0 on (0, 10] starting from 1 with step 0.5
/// let root = solver.find_root(|x: f64| x * x - 2.0, 1.0, 0.5, 0.0, 10.0).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-8);
/// ```
#[derive(Debug, Clone)]
pub struct DirectedSearchSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> DirectedSearchSolver<T> {
    /// Create a new directed search solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find `x` in `[lower, upper]` with `|f(x)| <= tolerance`.
    ///
    /// `f` must be non-decreasing on the domain. `start` must lie inside the
    /// domain and `step` must be positive.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Point where `|f(x)| <= tolerance`
    /// * `Err(SolverError::MaxIterationsExceeded)` - Evaluation budget spent
    /// * `Err(SolverError::StepFloorReached)` - No admissible move larger than
    ///   `step_tolerance` remains (root outside the domain, or `f` flat)
    /// * `Err(SolverError::NumericalInstability)` - Invalid start, or `f`
    ///   returned NaN
    pub fn find_root<F>(
        &self,
        f: F,
        start: T,
        step: T,
        lower: T,
        upper: T,
    ) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        if !(start >= lower && start <= upper) || !(step > T::zero()) {
            return Err(SolverError::NumericalInstability(format!(
                "invalid search setup: start = {}, step = {}, domain = [{}, {}]",
                to_f64(start),
                to_f64(step),
                to_f64(lower),
                to_f64(upper)
            )));
        }

        let two = T::one() + T::one();
        let tolerance = self.config.tolerance;

        let mut x = start;
        let mut step = step;
        let mut fx = checked(f(x), x)?;
        let mut evaluations = 1usize;

        loop {
            if fx.abs() <= tolerance {
                return Ok(x);
            }

            // Increasing f: positive residual means x is too high
            let direction = if fx > T::zero() { -T::one() } else { T::one() };

            loop {
                if evaluations >= self.config.max_iterations {
                    return Err(SolverError::MaxIterationsExceeded {
                        iterations: evaluations,
                    });
                }
                if step < self.config.step_tolerance {
                    return Err(SolverError::StepFloorReached {
                        x: to_f64(x),
                        step: to_f64(step),
                        evaluations,
                    });
                }

                let candidate = x + direction * step;
                if candidate < lower || candidate > upper {
                    step = step / two;
                    continue;
                }

                let fc = checked(f(candidate), candidate)?;
                evaluations += 1;

                let overshoot = fc.abs() > tolerance && (fc > T::zero()) != (fx > T::zero());
                if overshoot {
                    step = step / two;
                    continue;
                }

                trace!(
                    x = to_f64(candidate),
                    residual = to_f64(fc),
                    step = to_f64(step),
                    evaluations,
                    "directed search step committed"
                );
                x = candidate;
                fx = fc;
                break;
            }
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

fn checked<T: Float>(value: T, x: T) -> Result<T, SolverError> {
    if value.is_nan() {
        Err(SolverError::NumericalInstability(format!(
            "objective is NaN at x = {}",
            to_f64(x)
        )))
    } else {
        Ok(value)
    }
}

fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
