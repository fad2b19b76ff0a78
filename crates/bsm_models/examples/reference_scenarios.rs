//! Reference scenarios: price, Greeks and implied volatility.
//!
//! Run with:
//!
//! ```text
//! RUST_LOG=bsm_models=debug cargo run -p bsm_models --example reference_scenarios [config.toml]
//! ```
//!
//! Solver settings come from the TOML file given as the first argument, or
//! from `BSM_IV_*` environment variables over the defaults.

use std::path::PathBuf;

use bsm_models::analytical::BlackScholes;
use bsm_models::implied_vol::{ImpliedVolConfig, ImpliedVolSolver};
use bsm_models::instruments::{MarketInputs, OptionType};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn report(label: &str, bs: &BlackScholes, option_type: OptionType) {
    let greeks = bs.greeks(option_type);
    tracing::info!(
        scenario = label,
        option_type = %option_type,
        price = bs.price(option_type),
        delta = greeks.delta,
        gamma = greeks.gamma,
        vega = greeks.vega,
        theta = greeks.theta,
        "valuation"
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => ImpliedVolConfig::from_file(&path)?,
        None => ImpliedVolConfig::from_env()?,
    };
    tracing::info!(
        method = %config.method,
        price_tolerance = config.price_tolerance,
        max_iterations = config.max_iterations,
        "Solver configuration loaded"
    );
    let solver = ImpliedVolSolver::new(config)?;

    // Short-dated, slightly in the money
    let market = MarketInputs::new(100.0, 95.0, 0.0, 30.0 / 365.0)?;
    let bs = BlackScholes::new(market, 0.25)?;
    report("short_dated", &bs, OptionType::Call);
    report("short_dated", &bs, OptionType::Put);

    // Deep in the money, three days out: invert its own price
    let market = MarketInputs::new(11600.0, 10000.0, 0.0, 3.0 / 365.0)?;
    let bs = BlackScholes::new(market, 0.8)?;
    report("deep_itm", &bs, OptionType::Call);

    let observed = bs.price(OptionType::Call);
    let result = solver.solve_detailed(&market, OptionType::Call, observed)?;
    tracing::info!(
        observed,
        implied = result.volatility,
        residual = result.residual,
        iterations = result.iterations,
        "implied volatility recovered"
    );

    // Below intrinsic value: no volatility reproduces it
    match solver.solve(&market, OptionType::Call, 1500.0) {
        Ok(vol) => tracing::warn!(vol, "unexpected convergence below intrinsic"),
        Err(err) => tracing::info!(error = %err, "below-intrinsic price rejected"),
    }

    // Expired: every output is zero
    let expired = BlackScholes::new(MarketInputs::new(120.0, 100.0, 0.05, 0.0)?, 0.3)?;
    report("expired", &expired, OptionType::Call);

    Ok(())
}
