//! Black-Scholes-Merton pricing model for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + T·(σ²/2 + r - q)) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! With q = 0 these reduce exactly to the textbook Black-Scholes formula;
//! there is no separate non-dividend code path.

use bsm_core::math::distributions::norm_cdf;

use super::error::AnalyticalError;
use crate::instruments::{MarketInputs, OptionType};

/// Black-Scholes-Merton model for one set of market inputs and a volatility.
///
/// Every quantity is a pure function of the model. Expired options
/// (`T <= 0`) price to exactly zero, as does every Greek.
///
/// # Examples
/// ```
/// use bsm_models::analytical::BlackScholes;
/// use bsm_models::instruments::{MarketInputs, OptionType};
///
/// let market = MarketInputs::new(100.0, 100.0, 0.05, 1.0).unwrap();
/// let bs = BlackScholes::new(market, 0.2).unwrap();
///
/// let call = bs.price(OptionType::Call);
/// let put = bs.price(OptionType::Put);
///
/// // Put-call parity: C - P = S·e^(-qT) - K·e^(-rT)
/// assert!((call - put - market.forward_parity()).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    market: MarketInputs,
    volatility: f64,
}

/// Intermediate terms shared by the price and every Greek.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Terms {
    pub(crate) d1: f64,
    pub(crate) d2: f64,
    pub(crate) sqrt_t: f64,
    /// e^(-rT)
    pub(crate) discount: f64,
    /// e^(-qT)
    pub(crate) dividend_discount: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes-Merton model.
    ///
    /// # Errors
    /// - Any [`MarketInputs::validate`] error
    /// - `AnalyticalError::InvalidVolatility` if volatility is not positive and finite
    ///
    /// # Examples
    /// ```
    /// use bsm_models::analytical::BlackScholes;
    /// use bsm_models::instruments::MarketInputs;
    ///
    /// let market = MarketInputs::new(100.0, 100.0, 0.05, 1.0).unwrap();
    /// assert!(BlackScholes::new(market, 0.2).is_ok());
    /// assert!(BlackScholes::new(market, 0.0).is_err());
    /// ```
    pub fn new(market: MarketInputs, volatility: f64) -> Result<Self, AnalyticalError> {
        market.validate()?;

        if !(volatility > 0.0 && volatility.is_finite()) {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }

        Ok(Self { market, volatility })
    }

    /// Returns the market inputs.
    #[inline]
    pub fn market(&self) -> &MarketInputs {
        &self.market
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns a model with the same market inputs and another volatility.
    ///
    /// # Errors
    /// `AnalyticalError::InvalidVolatility` if volatility is not positive and finite.
    pub fn with_volatility(&self, volatility: f64) -> Result<Self, AnalyticalError> {
        Self::new(self.market, volatility)
    }

    /// The single derivation of d₁, d₂ and the discount factors.
    ///
    /// `None` when expired, so no caller ever divides by `σ√0`.
    pub(crate) fn terms(&self) -> Option<Terms> {
        if self.market.is_expired() {
            return None;
        }

        let MarketInputs {
            spot,
            strike,
            risk_free_rate,
            dividend_yield,
            time_to_maturity,
        } = self.market;
        let vol = self.volatility;

        let sqrt_t = time_to_maturity.sqrt();
        let vol_sqrt_t = vol * sqrt_t;
        let drift = time_to_maturity * (0.5 * vol * vol + risk_free_rate - dividend_yield);
        let d1 = ((spot / strike).ln() + drift) / vol_sqrt_t;

        Some(Terms {
            d1,
            d2: d1 - vol_sqrt_t,
            sqrt_t,
            discount: self.market.discount_factor(),
            dividend_discount: self.market.dividend_discount_factor(),
        })
    }

    /// Checks that d₁ and d₂ are finite.
    ///
    /// Valid inputs can still overflow, e.g. σ = 1e308 makes σ²·T infinite.
    /// The closed forms then yield NaN or a wrong limit, so checked callers
    /// reject the model instead. Expired models always pass.
    ///
    /// # Errors
    /// `AnalyticalError::NonFiniteTerms` with the offending values.
    pub fn check_finite(&self) -> Result<(), AnalyticalError> {
        match self.terms() {
            Some(t) if !(t.d1.is_finite() && t.d2.is_finite()) => {
                Err(AnalyticalError::NonFiniteTerms { d1: t.d1, d2: t.d2 })
            }
            _ => Ok(()),
        }
    }

    /// d₁ = (ln(S/K) + T·(σ²/2 + r - q)) / (σ√T), or `None` when expired.
    pub fn d1(&self) -> Option<f64> {
        self.terms().map(|t| t.d1)
    }

    /// d₂ = d₁ - σ√T, or `None` when expired.
    pub fn d2(&self) -> Option<f64> {
        self.terms().map(|t| t.d2)
    }

    /// Theoretical present value of the option.
    ///
    /// Returns exactly `0.0` when `T <= 0`.
    ///
    /// # Examples
    /// ```
    /// use bsm_models::analytical::BlackScholes;
    /// use bsm_models::instruments::{MarketInputs, OptionType};
    ///
    /// let market = MarketInputs::new(100.0, 95.0, 0.0, 30.0 / 365.0).unwrap();
    /// let price = BlackScholes::new(market, 0.25).unwrap().price(OptionType::Call);
    /// assert!((price - 5.971_568_5).abs() < 1e-6);
    /// ```
    pub fn price(&self, option_type: OptionType) -> f64 {
        let Some(t) = self.terms() else {
            return 0.0;
        };
        let asset = self.market.spot * t.dividend_discount;
        let cash = self.market.strike * t.discount;

        match option_type {
            OptionType::Call => asset * norm_cdf(t.d1) - cash * norm_cdf(t.d2),
            OptionType::Put => cash * norm_cdf(-t.d2) - asset * norm_cdf(-t.d1),
        }
    }
}
