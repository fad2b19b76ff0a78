//! Bracket expansion for bracketing root finders.

use crate::types::SolverError;
use num_traits::Float;
use tracing::trace;

/// Settings for [`expand_bracket`].
///
/// # Example
///
/// ```
/// use bsm_core::math::solvers::BracketConfig;
///
/// let config = BracketConfig::new(1e-6, 10.0);
/// assert_eq!(config.max_expansions, 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketConfig<T: Float> {
    /// Growth factor applied to the bracket width on each expansion.
    pub factor: T,
    /// Maximum number of expansion steps.
    pub max_expansions: usize,
    /// Hard lower limit for the bracket.
    pub lower_limit: T,
    /// Hard upper limit for the bracket.
    pub upper_limit: T,
}

impl<T: Float> BracketConfig<T> {
    /// Configuration with factor 1.6 and 60 expansions inside `[lower_limit, upper_limit]`.
    pub fn new(lower_limit: T, upper_limit: T) -> Self {
        Self {
            factor: T::from(1.6).unwrap_or_else(|| T::one() + T::one()),
            max_expansions: 60,
            lower_limit,
            upper_limit,
        }
    }

    /// Sets the maximum number of expansion steps.
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }
}

/// Widen `[a, b]` until `f` changes sign across it.
///
/// Each step pushes the endpoint with the smaller `|f|` outward by
/// `factor * (b - a)`, clamped to the configured limits. When that endpoint is
/// already pinned at its limit the other one moves instead.
///
/// # Returns
///
/// * `Ok((a, b))` - Bracket with `f(a) * f(b) <= 0` and `a < b`
/// * `Err(SolverError::NoBracket)` - Both endpoints pinned at the limits, or
///   the expansion budget was spent, without a sign change
/// * `Err(SolverError::NumericalInstability)` - `f` returned NaN
///
/// # Example
///
/// ```
/// use bsm_core::math::solvers::{expand_bracket, BracketConfig};
///
/// let f = |x: f64| x - 7.5;
/// let (a, b) = expand_bracket(f, 1.0, 2.0, &BracketConfig::new(0.0, 100.0)).unwrap();
/// assert!(f(a) <= 0.0 && f(b) >= 0.0);
/// ```
pub fn expand_bracket<T, F>(
    f: F,
    a: T,
    b: T,
    config: &BracketConfig<T>,
) -> Result<(T, T), SolverError>
where
    T: Float,
    F: Fn(T) -> T,
{
    let (mut a, mut b) = if a <= b { (a, b) } else { (b, a) };
    a = a.max(config.lower_limit);
    b = b.min(config.upper_limit);

    let mut fa = checked(f(a), a)?;
    let mut fb = checked(f(b), b)?;

    for expansion in 0..config.max_expansions {
        if fa * fb <= T::zero() {
            return Ok((a, b));
        }

        let a_pinned = a <= config.lower_limit;
        let b_pinned = b >= config.upper_limit;
        if a_pinned && b_pinned {
            break;
        }

        let width = b - a;
        let move_lower = !a_pinned && (b_pinned || fa.abs() < fb.abs());
        if move_lower {
            a = (a - config.factor * width).max(config.lower_limit);
            fa = checked(f(a), a)?;
        } else {
            b = (b + config.factor * width).min(config.upper_limit);
            fb = checked(f(b), b)?;
        }

        trace!(
            expansion,
            a = to_f64(a),
            b = to_f64(b),
            "bracket expanded"
        );
    }

    if fa * fb <= T::zero() {
        return Ok((a, b));
    }

    Err(SolverError::NoBracket {
        a: to_f64(a),
        b: to_f64(b),
    })
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
