//! Flat function API over the model and the solver.
//!
//! Each function validates its arguments, builds a [`BlackScholes`] and
//! returns a single number. Inputs whose d₁/d₂ overflow are reported as
//! `PricingError::NumericalInstability` rather than a NaN. Errors are reported as [`PricingError`] so that
//! callers handle one type for both invalid input and non-convergence.

use bsm_core::types::PricingError;

use crate::analytical::{BlackScholes, Greeks};
use crate::implied_vol::ImpliedVolSolver;
use crate::instruments::{MarketInputs, OptionType};

fn model(
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    time_to_maturity: f64,
    volatility: f64,
) -> Result<BlackScholes, PricingError> {
    let market = MarketInputs::new(spot, strike, rate, time_to_maturity)?
        .with_dividend_yield(dividend_yield)?;
    let bs = BlackScholes::new(market, volatility)?;
    bs.check_finite()?;
    Ok(bs)
}

/// Option value. Exactly zero when `time_to_maturity <= 0`.
///
/// # Errors
/// - `PricingError::InvalidInput` for non-positive spot, strike or volatility,
///   or any non-finite argument
/// - `PricingError::NumericalInstability` when d₁ or d₂ overflows
pub fn price(
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    time_to_maturity: f64,
    volatility: f64,
    option_type: OptionType,
) -> Result<f64, PricingError> {
    Ok(model(spot, strike, rate, dividend_yield, time_to_maturity, volatility)?.price(option_type))
}

/// ∂V/∂S.
pub fn delta(
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    time_to_maturity: f64,
    volatility: f64,
    option_type: OptionType,
) -> Result<f64, PricingError> {
    Ok(model(spot, strike, rate, dividend_yield, time_to_maturity, volatility)?.delta(option_type))
}

/// ∂²V/∂S², shared by calls and puts.
pub fn gamma(
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    time_to_maturity: f64,
    volatility: f64,
) -> Result<f64, PricingError> {
    Ok(model(spot, strike, rate, dividend_yield, time_to_maturity, volatility)?.gamma())
}

/// ∂V/∂σ per volatility point, shared by calls and puts.
pub fn vega(
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    time_to_maturity: f64,
    volatility: f64,
) -> Result<f64, PricingError> {
    Ok(model(spot, strike, rate, dividend_yield, time_to_maturity, volatility)?.vega())
}

/// ∂V/∂t per calendar day, negative for decay.
pub fn theta(
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    time_to_maturity: f64,
    volatility: f64,
    option_type: OptionType,
) -> Result<f64, PricingError> {
    Ok(model(spot, strike, rate, dividend_yield, time_to_maturity, volatility)?.theta(option_type))
}

/// Delta, gamma, vega and theta together.
pub fn greeks(
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    time_to_maturity: f64,
    volatility: f64,
    option_type: OptionType,
) -> Result<Greeks, PricingError> {
    Ok(model(spot, strike, rate, dividend_yield, time_to_maturity, volatility)?.greeks(option_type))
}

/// Volatility reproducing `observed_price`, using the default solver
/// configuration (directed search, price tolerance 1.0).
///
/// For other tolerances or the Brent method build an [`ImpliedVolSolver`].
///
/// # Errors
/// - `PricingError::InvalidInput` for invalid market inputs or price
/// - `PricingError::SolverNonConvergence` when no volatility within the
///   search limits reproduces the price
pub fn implied_volatility(
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    time_to_maturity: f64,
    option_type: OptionType,
    observed_price: f64,
) -> Result<f64, PricingError> {
    let market = MarketInputs::new(spot, strike, rate, time_to_maturity)?
        .with_dividend_yield(dividend_yield)?;
    Ok(ImpliedVolSolver::with_defaults().solve(&market, option_type, observed_price)?)
}
