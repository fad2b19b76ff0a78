//! Implied volatility solver.
//!
//! This module provides `ImpliedVolSolver`, which inverts the
//! Black-Scholes-Merton price in volatility using either a directed step
//! search or bracket expansion followed by Brent's method.

use std::cell::Cell;

use bsm_core::math::solvers::{
    expand_bracket, BracketConfig, BrentSolver, DirectedSearchSolver, SolverConfig,
};
use bsm_core::types::SolverError;
use tracing::{debug, warn};

use super::config::{ImpliedVolConfig, SearchMethod};
use super::error::{ImpliedVolError, NonConvergenceReason};
use crate::analytical::BlackScholes;
use crate::instruments::{MarketInputs, OptionType};

/// Result of a successful inversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpliedVolResult {
    /// Implied volatility
    pub volatility: f64,
    /// Model price at `volatility` minus the observed price
    pub residual: f64,
    /// Price evaluations used by the search
    pub iterations: usize,
}

/// Implied volatility solver.
///
/// Finds σ such that the model price matches an observed price within
/// `price_tolerance`. Before searching it rejects:
/// 1. Invalid market inputs or a negative / non-finite observed price
/// 2. Expired options, whose price does not depend on σ
/// 3. Prices outside the model's reachable range, widened by the tolerance
///
/// Every search is bounded by the evaluation budget and a step or width
/// floor, so `solve` always terminates with a volatility or an error. A
/// returned volatility always reprices within `price_tolerance`; reaching the
/// floor first is a `StepFloor` failure.
///
/// # Examples
///
/// ```
/// use bsm_models::implied_vol::{ImpliedVolConfig, ImpliedVolSolver};
/// use bsm_models::instruments::{MarketInputs, OptionType};
///
/// let market = MarketInputs::new(11600.0, 10000.0, 0.0, 3.0 / 365.0).unwrap();
/// let solver = ImpliedVolSolver::with_defaults();
///
/// let vol = solver.solve(&market, OptionType::Call, 1605.849).unwrap();
/// assert!((vol - 0.8).abs() < 0.05);
///
/// // Below intrinsic value: no volatility reproduces it
/// assert!(solver.solve(&market, OptionType::Call, 1500.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ImpliedVolSolver {
    config: ImpliedVolConfig,
}

impl ImpliedVolSolver {
    /// Create a new solver from a validated configuration.
    pub fn new(config: ImpliedVolConfig) -> Result<Self, ImpliedVolError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: ImpliedVolConfig::default(),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ImpliedVolConfig {
        &self.config
    }

    /// Implied volatility for an observed option price.
    ///
    /// # Errors
    /// - `InvalidInput` / `InvalidPrice` for bad inputs
    /// - `NonConvergence` with the reason the search stopped
    pub fn solve(
        &self,
        market: &MarketInputs,
        option_type: OptionType,
        observed_price: f64,
    ) -> Result<f64, ImpliedVolError> {
        self.solve_detailed(market, option_type, observed_price)
            .map(|result| result.volatility)
    }

    /// Same as [`ImpliedVolSolver::solve`], also reporting residual and
    /// evaluation count.
    pub fn solve_detailed(
        &self,
        market: &MarketInputs,
        option_type: OptionType,
        observed_price: f64,
    ) -> Result<ImpliedVolResult, ImpliedVolError> {
        market.validate()?;
        if !(observed_price >= 0.0 && observed_price.is_finite()) {
            return Err(ImpliedVolError::InvalidPrice {
                price: observed_price,
            });
        }

        if market.is_expired() {
            return Err(self.fail(NonConvergenceReason::FlatPrice, 0, None));
        }

        let bounds = market.price_bounds(option_type);
        if !bounds.contains(observed_price, self.config.price_tolerance) {
            let reason = NonConvergenceReason::PriceOutOfBounds {
                lower: bounds.lower,
                upper: bounds.upper,
            };
            return Err(self.fail(reason, 0, None));
        }

        let evaluations = Cell::new(0usize);
        let objective = |vol: f64| {
            evaluations.set(evaluations.get() + 1);
            model_price(market, vol, option_type) - observed_price
        };

        let outcome = match self.config.method {
            SearchMethod::Directed => self.directed(&objective),
            SearchMethod::Brent => self.brent(&objective),
        };

        match outcome {
            Ok(volatility) => {
                let residual = model_price(market, volatility, option_type) - observed_price;
                let iterations = evaluations.get();
                debug!(
                    volatility,
                    residual,
                    iterations,
                    method = %self.config.method,
                    "implied volatility converged"
                );
                Ok(ImpliedVolResult {
                    volatility,
                    residual,
                    iterations,
                })
            }
            Err(err) => {
                let (reason, last_volatility) = classify(&err);
                Err(self.fail(reason, evaluations.get(), last_volatility))
            }
        }
    }

    fn directed<F>(&self, objective: &F) -> Result<f64, SolverError>
    where
        F: Fn(f64) -> f64,
    {
        let solver = DirectedSearchSolver::new(self.solver_config());
        solver.find_root(
            objective,
            self.config.initial_volatility,
            self.config.initial_step,
            self.config.min_volatility,
            self.config.max_volatility,
        )
    }

    fn brent<F>(&self, objective: &F) -> Result<f64, SolverError>
    where
        F: Fn(f64) -> f64,
    {
        // Residuals inside the tolerance count as roots, so a price that is
        // flat at a volatility limit still brackets.
        let tolerance = self.config.price_tolerance;
        let snapped = |vol: f64| {
            let residual = objective(vol);
            if residual.abs() <= tolerance {
                0.0
            } else {
                residual
            }
        };

        let bracket = BracketConfig::new(self.config.min_volatility, self.config.max_volatility)
            .with_max_expansions(self.config.max_bracket_expansions);
        let initial = self.config.initial_volatility;
        let (a, b) = expand_bracket(&snapped, initial / 2.0, initial * 2.0, &bracket)?;

        BrentSolver::new(self.solver_config()).find_root(&snapped, a, b)
    }

    fn solver_config(&self) -> SolverConfig<f64> {
        SolverConfig::new(
            self.config.price_tolerance,
            self.config.min_step,
            self.config.max_iterations,
        )
    }

    fn fail(
        &self,
        reason: NonConvergenceReason,
        iterations: usize,
        last_volatility: Option<f64>,
    ) -> ImpliedVolError {
        warn!(
            %reason,
            iterations,
            last_volatility = ?last_volatility,
            method = %self.config.method,
            "implied volatility did not converge"
        );
        ImpliedVolError::NonConvergence {
            reason,
            iterations,
            last_volatility,
        }
    }
}

impl Default for ImpliedVolSolver {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Model price at `vol`, NaN if the model rejects the volatility.
fn model_price(market: &MarketInputs, vol: f64, option_type: OptionType) -> f64 {
    BlackScholes::new(*market, vol).map_or(f64::NAN, |bs| bs.price(option_type))
}

fn classify(err: &SolverError) -> (NonConvergenceReason, Option<f64>) {
    match err {
        SolverError::MaxIterationsExceeded { .. } => (NonConvergenceReason::MaxIterations, None),
        SolverError::StepFloorReached { x, .. } => (NonConvergenceReason::StepFloor, Some(*x)),
        SolverError::NoBracket { .. } => (NonConvergenceReason::NoBracket, None),
        SolverError::NumericalInstability(_) => (NonConvergenceReason::NumericalInstability, None),
    }
}
