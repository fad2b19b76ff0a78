//! Option contract and market input types.
//!
//! - [`OptionType`]: Call or put
//! - [`MarketInputs`]: Spot, strike, rate, dividend yield, maturity
//! - [`PriceBounds`]: Reachable price range for given market inputs

mod market;
mod option_type;

pub use market::{MarketInputs, PriceBounds};
pub use option_type::OptionType;
