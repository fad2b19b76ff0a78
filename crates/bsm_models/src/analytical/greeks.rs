//! Analytical Greeks for the Black-Scholes-Merton model.
//!
//! Scales and conventions:
//! - **Delta**: ∂V/∂S, call in [0, e^(-qT)], put in [-e^(-qT), 0]
//! - **Gamma**: ∂²V/∂S², identical for call and put
//! - **Vega**: ∂V/∂σ per one volatility point (÷100), identical for call and put
//! - **Theta**: ∂V/∂t per calendar day (÷365), signed: negative is decay
//!
//! All four read the same d₁/d₂ as the price and are exactly zero at expiry.

use bsm_core::math::distributions::{norm_cdf, norm_pdf};
use serde::{Deserialize, Serialize};

use super::black_scholes::{BlackScholes, Terms};
use crate::instruments::OptionType;

/// Days per year used to express theta per calendar day.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Volatility points per unit volatility used to scale vega.
pub const VOL_POINTS: f64 = 100.0;

/// First-order and gamma sensitivities of one option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// Delta: ∂V/∂S
    pub delta: f64,
    /// Gamma: ∂²V/∂S²
    pub gamma: f64,
    /// Vega: ∂V/∂σ per volatility point
    pub vega: f64,
    /// Theta: ∂V/∂t per calendar day, negative for decay
    pub theta: f64,
}

impl Greeks {
    /// All-zero Greeks, the value for an expired option.
    pub fn zero() -> Self {
        Self::default()
    }
}

impl BlackScholes {
    /// Delta (∂V/∂S).
    ///
    /// - Call Delta = e^(-qT)·N(d₁)
    /// - Put Delta = -e^(-qT)·N(-d₁)
    pub fn delta(&self, option_type: OptionType) -> f64 {
        self.terms()
            .map_or(0.0, |t| delta_from_terms(&t, option_type))
    }

    /// Gamma (∂²V/∂S²) = e^(-qT)·φ(d₁) / (S·σ·√T).
    ///
    /// Same for calls and puts.
    pub fn gamma(&self) -> f64 {
        self.terms().map_or(0.0, |t| self.gamma_from_terms(&t))
    }

    /// Vega (∂V/∂σ) = S·e^(-qT)·φ(d₁)·√T / 100, per volatility point.
    ///
    /// Same for calls and puts.
    pub fn vega(&self) -> f64 {
        self.terms().map_or(0.0, |t| self.vega_from_terms(&t))
    }

    /// Theta (∂V/∂t) per calendar day.
    ///
    /// - Call: (-S·e^(-qT)·φ(d₁)·σ/(2√T) + q·S·e^(-qT)·N(d₁) - r·K·e^(-rT)·N(d₂)) / 365
    /// - Put: (-S·e^(-qT)·φ(d₁)·σ/(2√T) - q·S·e^(-qT)·N(-d₁) + r·K·e^(-rT)·N(-d₂)) / 365
    ///
    /// Reported signed for both types; a value losing worth over time has
    /// negative theta.
    pub fn theta(&self, option_type: OptionType) -> f64 {
        self.terms()
            .map_or(0.0, |t| self.theta_from_terms(&t, option_type))
    }

    /// All four Greeks from a single d₁/d₂ evaluation.
    ///
    /// # Examples
    /// ```
    /// use bsm_models::analytical::BlackScholes;
    /// use bsm_models::instruments::{MarketInputs, OptionType};
    ///
    /// let market = MarketInputs::new(100.0, 95.0, 0.0, 30.0 / 365.0).unwrap();
    /// let bs = BlackScholes::new(market, 0.25).unwrap();
    /// let greeks = bs.greeks(OptionType::Call);
    ///
    /// assert_eq!(greeks.delta, bs.delta(OptionType::Call));
    /// assert!(greeks.theta < 0.0);
    /// ```
    pub fn greeks(&self, option_type: OptionType) -> Greeks {
        let Some(t) = self.terms() else {
            return Greeks::zero();
        };
        Greeks {
            delta: delta_from_terms(&t, option_type),
            gamma: self.gamma_from_terms(&t),
            vega: self.vega_from_terms(&t),
            theta: self.theta_from_terms(&t, option_type),
        }
    }

    fn gamma_from_terms(&self, t: &Terms) -> f64 {
        t.dividend_discount * norm_pdf(t.d1) / (self.market().spot * self.volatility() * t.sqrt_t)
    }

    fn vega_from_terms(&self, t: &Terms) -> f64 {
        self.market().spot * t.dividend_discount * norm_pdf(t.d1) * t.sqrt_t / VOL_POINTS
    }

    fn theta_from_terms(&self, t: &Terms, option_type: OptionType) -> f64 {
        let market = self.market();
        let asset = market.spot * t.dividend_discount;
        let cash = market.strike * t.discount;

        // Shared diffusion term: -(S·e^(-qT)·φ(d₁)·σ) / (2√T)
        let decay = -asset * norm_pdf(t.d1) * self.volatility() / (2.0 * t.sqrt_t);

        let annual = match option_type {
            OptionType::Call => {
                decay + market.dividend_yield * asset * norm_cdf(t.d1)
                    - market.risk_free_rate * cash * norm_cdf(t.d2)
            }
            OptionType::Put => {
                decay - market.dividend_yield * asset * norm_cdf(-t.d1)
                    + market.risk_free_rate * cash * norm_cdf(-t.d2)
            }
        };
        annual / DAYS_PER_YEAR
    }
}

fn delta_from_terms(t: &Terms, option_type: OptionType) -> f64 {
    match option_type {
        OptionType::Call => t.dividend_discount * norm_cdf(t.d1),
        OptionType::Put => -t.dividend_discount * norm_cdf(-t.d1),
    }
}
