//! Observable market inputs for a European option.

use serde::{Deserialize, Serialize};

use super::OptionType;
use crate::analytical::AnalyticalError;

/// Market inputs for one option valuation, excluding volatility.
///
/// Volatility is a model parameter: it lives on
/// [`BlackScholes`](crate::analytical::BlackScholes) and is the unknown the
/// implied-volatility solver searches for.
///
/// # Examples
/// ```
/// use bsm_models::instruments::MarketInputs;
///
/// let market = MarketInputs::new(100.0, 95.0, 0.01, 0.5)
///     .unwrap()
///     .with_dividend_yield(0.02)
///     .unwrap();
/// assert_eq!(market.dividend_yield, 0.02);
/// assert!(MarketInputs::new(0.0, 95.0, 0.01, 0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketInputs {
    /// Spot price of the underlying (S > 0)
    pub spot: f64,
    /// Strike price (K > 0)
    pub strike: f64,
    /// Continuously compounded risk-free rate (r)
    pub risk_free_rate: f64,
    /// Continuous dividend yield (q), zero when not modelled
    #[serde(default)]
    pub dividend_yield: f64,
    /// Time to maturity in years (T); `T <= 0` means expired
    pub time_to_maturity: f64,
}

impl MarketInputs {
    /// Creates validated inputs with zero dividend yield.
    ///
    /// # Errors
    /// See [`MarketInputs::validate`].
    pub fn new(
        spot: f64,
        strike: f64,
        risk_free_rate: f64,
        time_to_maturity: f64,
    ) -> Result<Self, AnalyticalError> {
        let market = Self {
            spot,
            strike,
            risk_free_rate,
            dividend_yield: 0.0,
            time_to_maturity,
        };
        market.validate()?;
        Ok(market)
    }

    /// Returns a copy with the given continuous dividend yield.
    pub fn with_dividend_yield(self, dividend_yield: f64) -> Result<Self, AnalyticalError> {
        let market = Self {
            dividend_yield,
            ..self
        };
        market.validate()?;
        Ok(market)
    }

    /// Checks every field.
    ///
    /// # Errors
    /// - `InvalidSpot` if spot is not positive and finite
    /// - `InvalidStrike` if strike is not positive and finite
    /// - `InvalidParameter` if rate, dividend yield or maturity is not finite
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        if !(self.spot > 0.0 && self.spot.is_finite()) {
            return Err(AnalyticalError::InvalidSpot { spot: self.spot });
        }
        if !(self.strike > 0.0 && self.strike.is_finite()) {
            return Err(AnalyticalError::InvalidStrike {
                strike: self.strike,
            });
        }
        for (name, value) in [
            ("risk-free rate", self.risk_free_rate),
            ("dividend yield", self.dividend_yield),
            ("time to maturity", self.time_to_maturity),
        ] {
            if !value.is_finite() {
                return Err(AnalyticalError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }

    /// True at or after expiry (`T <= 0`).
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.time_to_maturity <= 0.0
    }

    /// e^(-rT)
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_maturity).exp()
    }

    /// e^(-qT)
    #[inline]
    pub fn dividend_discount_factor(&self) -> f64 {
        (-self.dividend_yield * self.time_to_maturity).exp()
    }

    /// Right-hand side of put-call parity: `S·e^(-qT) - K·e^(-rT)`.
    pub fn forward_parity(&self) -> f64 {
        self.spot * self.dividend_discount_factor() - self.strike * self.discount_factor()
    }

    /// Range of prices the model can produce for these inputs as volatility
    /// runs from zero to infinity. Expired options collapse to `[0, 0]`.
    pub fn price_bounds(&self, option_type: OptionType) -> PriceBounds {
        if self.is_expired() {
            return PriceBounds {
                lower: 0.0,
                upper: 0.0,
            };
        }

        let asset = self.spot * self.dividend_discount_factor();
        let cash = self.strike * self.discount_factor();
        match option_type {
            OptionType::Call => PriceBounds {
                lower: (asset - cash).max(0.0),
                upper: asset,
            },
            OptionType::Put => PriceBounds {
                lower: (cash - asset).max(0.0),
                upper: cash,
            },
        }
    }
}

/// No-arbitrage price range `[lower, upper]` for fixed non-volatility inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBounds {
    /// Zero-volatility limit (discounted intrinsic value)
    pub lower: f64,
    /// Infinite-volatility limit
    pub upper: f64,
}

impl PriceBounds {
    /// True when `price` lies within the bounds widened by `slack` on each side.
    ///
    /// ```
    /// use bsm_models::instruments::PriceBounds;
    ///
    /// let bounds = PriceBounds { lower: 5.0, upper: 100.0 };
    /// assert!(bounds.contains(4.5, 1.0));
    /// assert!(!bounds.contains(3.0, 1.0));
    /// ```
    pub fn contains(&self, price: f64, slack: f64) -> bool {
        price >= self.lower - slack && price <= self.upper + slack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_defaults_dividend_to_zero() {
        let market = MarketInputs::new(100.0, 95.0, 0.05, 1.0).unwrap();
        assert_eq!(market.dividend_yield, 0.0);
    }

    #[test]
    fn test_invalid_spot_and_strike() {
        assert!(matches!(
            MarketInputs::new(-1.0, 95.0, 0.0, 1.0),
            Err(AnalyticalError::InvalidSpot { .. })
        ));
        assert!(matches!(
            MarketInputs::new(f64::INFINITY, 95.0, 0.0, 1.0),
            Err(AnalyticalError::InvalidSpot { .. })
        ));
        assert!(matches!(
            MarketInputs::new(100.0, 0.0, 0.0, 1.0),
            Err(AnalyticalError::InvalidStrike { .. })
        ));
        assert!(matches!(
            MarketInputs::new(100.0, f64::NAN, 0.0, 1.0),
            Err(AnalyticalError::InvalidStrike { .. })
        ));
    }

    #[test]
    fn test_non_finite_parameters() {
        assert!(matches!(
            MarketInputs::new(100.0, 95.0, f64::NAN, 1.0),
            Err(AnalyticalError::InvalidParameter { name: "risk-free rate", .. })
        ));
        assert!(matches!(
            MarketInputs::new(100.0, 95.0, 0.0, f64::INFINITY),
            Err(AnalyticalError::InvalidParameter { name: "time to maturity", .. })
        ));
        let market = MarketInputs::new(100.0, 95.0, 0.0, 1.0).unwrap();
        assert!(matches!(
            market.with_dividend_yield(f64::NAN),
            Err(AnalyticalError::InvalidParameter { name: "dividend yield", .. })
        ));
    }

    #[test]
    fn test_negative_rate_and_maturity_allowed() {
        assert!(MarketInputs::new(100.0, 95.0, -0.01, 1.0).is_ok());
        let expired = MarketInputs::new(100.0, 95.0, 0.0, -0.5).unwrap();
        assert!(expired.is_expired());
        assert!(MarketInputs::new(100.0, 95.0, 0.0, 0.0).unwrap().is_expired());
    }

    #[test]
    fn test_discount_factors_and_parity() {
        let market = MarketInputs::new(100.0, 90.0, 0.05, 2.0)
            .unwrap()
            .with_dividend_yield(0.01)
            .unwrap();
        assert_relative_eq!(market.discount_factor(), (-0.1_f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(market.dividend_discount_factor(), (-0.02_f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(
            market.forward_parity(),
            100.0 * (-0.02_f64).exp() - 90.0 * (-0.1_f64).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_price_bounds() {
        let market = MarketInputs::new(110.0, 100.0, 0.0, 1.0).unwrap();
        let call = market.price_bounds(OptionType::Call);
        assert_relative_eq!(call.lower, 10.0, epsilon = 1e-12);
        assert_relative_eq!(call.upper, 110.0, epsilon = 1e-12);

        let put = market.price_bounds(OptionType::Put);
        assert_eq!(put.lower, 0.0);
        assert_relative_eq!(put.upper, 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_price_bounds_expired() {
        let market = MarketInputs::new(110.0, 100.0, 0.0, 0.0).unwrap();
        let bounds = market.price_bounds(OptionType::Call);
        assert_eq!(bounds, PriceBounds { lower: 0.0, upper: 0.0 });
    }

    #[test]
    fn test_deserialize_defaults_dividend() {
        let json = r#"{"spot":100.0,"strike":95.0,"risk_free_rate":0.0,"time_to_maturity":0.25}"#;
        let market: MarketInputs = serde_json::from_str(json).unwrap();
        assert_eq!(market.dividend_yield, 0.0);
        assert!(market.validate().is_ok());
    }
}
