//! Reference scenarios for pricing, Greeks and implied volatility.
//!
//! Each test pins one documented behaviour of the public API end to end.

use approx::assert_relative_eq;
use bsm_core::types::PricingError;
use bsm_models::analytical::{BlackScholes, Greeks};
use bsm_models::implied_vol::{
    ImpliedVolConfig, ImpliedVolError, ImpliedVolSolver, NonConvergenceReason, SearchMethod,
};
use bsm_models::instruments::{MarketInputs, OptionType};
use bsm_models::pricing;

const THIRTY_DAYS: f64 = 30.0 / 365.0;
const THREE_DAYS: f64 = 3.0 / 365.0;

// ================================================================
// Short-dated near-the-money option
// ================================================================

#[test]
fn test_short_dated_call_price_and_deltas() {
    let call = pricing::price(100.0, 95.0, 0.0, 0.0, THIRTY_DAYS, 0.25, OptionType::Call).unwrap();
    assert_relative_eq!(call, 5.971_568_518_227_315, epsilon = 1e-9);

    let delta_call =
        pricing::delta(100.0, 95.0, 0.0, 0.0, THIRTY_DAYS, 0.25, OptionType::Call).unwrap();
    let delta_put =
        pricing::delta(100.0, 95.0, 0.0, 0.0, THIRTY_DAYS, 0.25, OptionType::Put).unwrap();
    assert_relative_eq!(delta_call, 0.773_822_836_745_708_1, epsilon = 1e-10);
    assert_relative_eq!(delta_put, -0.226_177_163_254_291_94, epsilon = 1e-10);

    // No dividend: call and put deltas are one apart
    assert_relative_eq!(delta_call - delta_put, 1.0, epsilon = 1e-12);
}

#[test]
fn test_short_dated_theta_is_decay() {
    let greeks =
        pricing::greeks(100.0, 95.0, 0.0, 0.0, THIRTY_DAYS, 0.25, OptionType::Call).unwrap();
    assert_relative_eq!(greeks.theta, -0.035_931_884_628_517_305, epsilon = 1e-10);
    assert_relative_eq!(greeks.gamma, 0.041_968_441_246_108_21, epsilon = 1e-10);
    assert_relative_eq!(greeks.vega, 0.086_236_523_108_441_52, epsilon = 1e-10);
}

// ================================================================
// Deep in-the-money, three days to expiry
// ================================================================

#[test]
fn test_deep_itm_roundtrip_default_tolerance() {
    let market = MarketInputs::new(11600.0, 10000.0, 0.0, THREE_DAYS).unwrap();
    let observed = BlackScholes::new(market, 0.8).unwrap().price(OptionType::Call);
    assert_relative_eq!(observed, 1605.849_055_489_929, epsilon = 1e-6);

    let result = ImpliedVolSolver::with_defaults()
        .solve_detailed(&market, OptionType::Call, observed)
        .unwrap();
    assert!((result.volatility - 0.8).abs() < 0.05);
    assert!(result.residual.abs() <= 1.0);
}

#[test]
fn test_deep_itm_roundtrip_precise() {
    let market = MarketInputs::new(11600.0, 10000.0, 0.0, THREE_DAYS).unwrap();
    let observed = BlackScholes::new(market, 0.8).unwrap().price(OptionType::Call);

    for method in [SearchMethod::Directed, SearchMethod::Brent] {
        let solver = ImpliedVolSolver::new(ImpliedVolConfig::precise().with_method(method)).unwrap();
        let vol = solver.solve(&market, OptionType::Call, observed).unwrap();
        assert_relative_eq!(vol, 0.8, epsilon = 1e-6);
    }
}

#[test]
fn test_below_intrinsic_terminates_with_non_convergence() {
    let err = pricing::implied_volatility(
        11600.0,
        10000.0,
        0.0,
        0.0,
        THREE_DAYS,
        OptionType::Call,
        1500.0,
    )
    .unwrap_err();
    assert!(matches!(err, PricingError::SolverNonConvergence(_)));

    let market = MarketInputs::new(11600.0, 10000.0, 0.0, THREE_DAYS).unwrap();
    for method in [SearchMethod::Directed, SearchMethod::Brent] {
        let solver = ImpliedVolSolver::new(ImpliedVolConfig::default().with_method(method)).unwrap();
        let err = solver.solve(&market, OptionType::Call, 1500.0).unwrap_err();
        assert!(matches!(
            err.reason(),
            Some(NonConvergenceReason::PriceOutOfBounds { .. })
        ));
    }
}

// ================================================================
// Expiry
// ================================================================

#[test]
fn test_expired_outputs_are_zero() {
    for ttm in [0.0, -0.1] {
        for option_type in [OptionType::Call, OptionType::Put] {
            assert_eq!(
                pricing::price(120.0, 100.0, 0.05, 0.01, ttm, 0.3, option_type).unwrap(),
                0.0
            );
            assert_eq!(
                pricing::greeks(120.0, 100.0, 0.05, 0.01, ttm, 0.3, option_type).unwrap(),
                Greeks::zero()
            );
        }
    }
}

#[test]
fn test_expired_implied_volatility_fails() {
    let market = MarketInputs::new(120.0, 100.0, 0.05, 0.0).unwrap();
    let err = ImpliedVolSolver::with_defaults()
        .solve(&market, OptionType::Call, 20.0)
        .unwrap_err();
    assert!(matches!(
        err,
        ImpliedVolError::NonConvergence {
            reason: NonConvergenceReason::FlatPrice,
            ..
        }
    ));
}

// ================================================================
// Dividend yield
// ================================================================

#[test]
fn test_dividend_yield_reference_values() {
    let call = pricing::price(100.0, 100.0, 0.05, 0.02, 1.0, 0.2, OptionType::Call).unwrap();
    let put = pricing::price(100.0, 100.0, 0.05, 0.02, 1.0, 0.2, OptionType::Put).unwrap();
    assert_relative_eq!(call, 9.227_005_508_154_036, epsilon = 1e-9);
    assert_relative_eq!(put, 6.330_080_627_549_918, epsilon = 1e-9);
}

#[test]
fn test_zero_dividend_matches_textbook_black_scholes() {
    let with_zero = pricing::price(100.0, 100.0, 0.05, 0.0, 1.0, 0.2, OptionType::Call).unwrap();
    assert_relative_eq!(with_zero, 10.450_583_572_185_565, epsilon = 1e-9);
}

// ================================================================
// Option type parsing
// ================================================================

#[test]
fn test_option_type_from_string() {
    let option_type: OptionType = "PUT".parse().unwrap();
    let put = pricing::price(100.0, 100.0, 0.05, 0.0, 1.0, 0.2, option_type).unwrap();
    assert_relative_eq!(put, 5.573_526_022_256_971, epsilon = 1e-9);

    let err: PricingError = "binary".parse::<OptionType>().unwrap_err().into();
    assert!(matches!(err, PricingError::InvalidInput(_)));
}

// ================================================================
// Configuration from TOML
// ================================================================

#[test]
fn test_solver_from_toml_config() {
    let config = ImpliedVolConfig::from_toml_str(
        r#"
        method = "brent"
        price_tolerance = 1e-9
        max_volatility = 5.0
        min_step = 1e-14
        "#,
    )
    .unwrap();
    let solver = ImpliedVolSolver::new(config).unwrap();

    let market = MarketInputs::new(100.0, 105.0, 0.01, 0.5)
        .unwrap()
        .with_dividend_yield(0.02)
        .unwrap();
    let observed = BlackScholes::new(market, 0.37).unwrap().price(OptionType::Put);
    let vol = solver.solve(&market, OptionType::Put, observed).unwrap();
    assert_relative_eq!(vol, 0.37, epsilon = 1e-8);
}
