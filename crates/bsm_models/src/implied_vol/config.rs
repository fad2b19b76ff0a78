//! Implied volatility solver configuration.
//!
//! Handles loading configuration from TOML and environment variables, and
//! validating the result before a solver is built from it.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix of every environment variable read by [`ImpliedVolConfig::from_env`].
pub const ENV_PREFIX: &str = "BSM_IV_";

/// Configuration error types
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// A tolerance, step or volatility that must be positive and finite was not.
    #[error("Invalid {name}: {value}. Must be positive and finite")]
    InvalidValue {
        /// Field name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// An evaluation or expansion budget of zero.
    #[error("Invalid {name}: must be greater than zero")]
    ZeroBudget {
        /// Field name
        name: &'static str,
    },

    /// Volatility limits out of order, or the start point outside them.
    #[error(
        "Invalid volatility range: initial {initial} must lie in [{min}, {max}] with min < max"
    )]
    InvalidVolatilityRange {
        /// Lower limit
        min: f64,
        /// Upper limit
        max: f64,
        /// Starting volatility
        initial: f64,
    },

    /// Unknown search method name.
    #[error("Invalid search method: {0}. Must be one of: directed, brent")]
    InvalidMethod(String),

    /// Reading or parsing a configuration file failed.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// An environment variable could not be parsed.
    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Root-search strategy for implied volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMethod {
    /// Step search from a starting volatility, halving the step on overshoot.
    #[default]
    Directed,
    /// Bracket expansion followed by Brent's method.
    Brent,
}

impl FromStr for SearchMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "directed" => Ok(SearchMethod::Directed),
            "brent" => Ok(SearchMethod::Brent),
            _ => Err(ConfigError::InvalidMethod(s.to_string())),
        }
    }
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMethod::Directed => write!(f, "directed"),
            SearchMethod::Brent => write!(f, "brent"),
        }
    }
}

/// Settings for [`ImpliedVolSolver`](super::ImpliedVolSolver).
///
/// Missing TOML fields fall back to the defaults below.
///
/// | Field | Default |
/// |-------|---------|
/// | `method` | `directed` |
/// | `initial_volatility` | 1.0 |
/// | `initial_step` | 0.5 |
/// | `price_tolerance` | 1.0 |
/// | `max_iterations` | 500 |
/// | `min_step` | 1e-10 |
/// | `min_volatility` | 1e-6 |
/// | `max_volatility` | 10.0 |
/// | `max_bracket_expansions` | 60 |
///
/// The default price tolerance is coarse: it accepts any volatility whose
/// price is within one currency unit of the observation. Use
/// [`ImpliedVolConfig::precise`] for tight round-trips.
///
/// # Examples
/// ```
/// use bsm_models::implied_vol::{ImpliedVolConfig, SearchMethod};
///
/// let config = ImpliedVolConfig::from_toml_str(
///     r#"
///     method = "brent"
///     price_tolerance = 1e-6
///     "#,
/// )
/// .unwrap();
/// assert_eq!(config.method, SearchMethod::Brent);
/// assert_eq!(config.initial_volatility, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpliedVolConfig {
    /// Search strategy
    pub method: SearchMethod,
    /// Starting volatility
    pub initial_volatility: f64,
    /// Starting step of the directed search
    pub initial_step: f64,
    /// Accepted absolute price residual
    pub price_tolerance: f64,
    /// Maximum number of price evaluations
    pub max_iterations: usize,
    /// Step-size floor (directed) or bracket-width floor (Brent)
    pub min_step: f64,
    /// Lowest volatility the search may visit
    pub min_volatility: f64,
    /// Highest volatility the search may visit
    pub max_volatility: f64,
    /// Maximum bracket expansions before giving up (Brent only)
    pub max_bracket_expansions: usize,
}

impl Default for ImpliedVolConfig {
    fn default() -> Self {
        Self {
            method: SearchMethod::Directed,
            initial_volatility: 1.0,
            initial_step: 0.5,
            price_tolerance: 1.0,
            max_iterations: 500,
            min_step: 1e-10,
            min_volatility: 1e-6,
            max_volatility: 10.0,
            max_bracket_expansions: 60,
        }
    }
}

impl ImpliedVolConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with a price tolerance of 1e-8 and a 1e-14 step floor.
    ///
    /// The finer floor lets Brent narrow its bracket until the price residual,
    /// not the bracket width, decides convergence.
    pub fn precise() -> Self {
        Self {
            price_tolerance: 1e-8,
            min_step: 1e-14,
            ..Self::default()
        }
    }

    /// Returns a copy using the given search method.
    pub fn with_method(mut self, method: SearchMethod) -> Self {
        self.method = method;
        self
    }

    /// Returns a copy using the given price tolerance.
    pub fn with_price_tolerance(mut self, price_tolerance: f64) -> Self {
        self.price_tolerance = price_tolerance;
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ImpliedVolConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from `BSM_IV_*` environment variables over the defaults.
    ///
    /// Recognised variables: `BSM_IV_METHOD`, `BSM_IV_INITIAL_VOLATILITY`,
    /// `BSM_IV_INITIAL_STEP`, `BSM_IV_PRICE_TOLERANCE`, `BSM_IV_MAX_ITERATIONS`,
    /// `BSM_IV_MIN_STEP`, `BSM_IV_MIN_VOLATILITY`, `BSM_IV_MAX_VOLATILITY`,
    /// `BSM_IV_MAX_BRACKET_EXPANSIONS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ImpliedVolConfig::from_env`] with a custom variable source.
    ///
    /// `lookup` receives the full variable name, prefix included.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(method) = var("METHOD") {
            config.method = SearchMethod::from_str(&method)?;
        }
        if let Some(v) = var("INITIAL_VOLATILITY") {
            config.initial_volatility = parse_env("INITIAL_VOLATILITY", &v)?;
        }
        if let Some(v) = var("INITIAL_STEP") {
            config.initial_step = parse_env("INITIAL_STEP", &v)?;
        }
        if let Some(v) = var("PRICE_TOLERANCE") {
            config.price_tolerance = parse_env("PRICE_TOLERANCE", &v)?;
        }
        if let Some(v) = var("MAX_ITERATIONS") {
            config.max_iterations = parse_env("MAX_ITERATIONS", &v)?;
        }
        if let Some(v) = var("MIN_STEP") {
            config.min_step = parse_env("MIN_STEP", &v)?;
        }
        if let Some(v) = var("MIN_VOLATILITY") {
            config.min_volatility = parse_env("MIN_VOLATILITY", &v)?;
        }
        if let Some(v) = var("MAX_VOLATILITY") {
            config.max_volatility = parse_env("MAX_VOLATILITY", &v)?;
        }
        if let Some(v) = var("MAX_BRACKET_EXPANSIONS") {
            config.max_bracket_expansions = parse_env("MAX_BRACKET_EXPANSIONS", &v)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("initial volatility", self.initial_volatility),
            ("initial step", self.initial_step),
            ("price tolerance", self.price_tolerance),
            ("minimum step", self.min_step),
            ("minimum volatility", self.min_volatility),
            ("maximum volatility", self.max_volatility),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::InvalidValue { name, value });
            }
        }

        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroBudget {
                name: "max iterations",
            });
        }
        if self.method == SearchMethod::Brent && self.max_bracket_expansions == 0 {
            return Err(ConfigError::ZeroBudget {
                name: "max bracket expansions",
            });
        }

        let ordered = self.min_volatility < self.max_volatility
            && self.initial_volatility >= self.min_volatility
            && self.initial_volatility <= self.max_volatility;
        if !ordered {
            return Err(ConfigError::InvalidVolatilityRange {
                min: self.min_volatility,
                max: self.max_volatility,
                initial: self.initial_volatility,
            });
        }

        Ok(())
    }
}

fn parse_env<T: FromStr>(name: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| {
        ConfigError::EnvError(format!("{}{} = {:?} is not a valid number", ENV_PREFIX, name, raw))
    })
}
