//! Negotiation configuration

use crate::error::{NegotiatorError, Result};
use crate::types::{Price, PriceRange};
use serde::{Deserialize, Serialize};

/// Default reference price
pub const DEFAULT_BASE_PRICE: Price = 100;
/// Default lower price bound
pub const DEFAULT_MIN_PRICE: Price = 80;
/// Default upper price bound
pub const DEFAULT_MAX_PRICE: Price = 120;
/// Default number of rounds before the final offer
pub const DEFAULT_MAX_ROUNDS: usize = 5;

/// Markup over the base price used for the final offer
pub const FINAL_OFFER_MARKUP: Price = 10;
/// Offers above `base + margin` are rejected as too high
pub const HIGH_OFFER_MARGIN: Price = 20;
/// Minimum step the counteroffer moves on strong sentiment
pub const COUNTER_STEP: Price = 5;

/// Fixed configuration a negotiation starts from
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNegotiationConfig")]
pub struct NegotiationConfig {
    base_price: Price,
    price_range: PriceRange,
    max_rounds: usize,
}

/// Unchecked wire form of `NegotiationConfig`
#[derive(Deserialize)]
struct RawNegotiationConfig {
    base_price: Price,
    price_range: PriceRange,
    max_rounds: usize,
}

impl TryFrom<RawNegotiationConfig> for NegotiationConfig {
    type Error = NegotiatorError;

    fn try_from(raw: RawNegotiationConfig) -> Result<Self> {
        Self::new(raw.base_price, raw.price_range, raw.max_rounds)
    }
}

impl NegotiationConfig {
    /// Create a validated configuration
    pub fn new(base_price: Price, price_range: PriceRange, max_rounds: usize) -> Result<Self> {
        if !price_range.contains(base_price) {
            return Err(NegotiatorError::BasePriceOutOfRange {
                base: base_price,
                min: price_range.min(),
                max: price_range.max(),
            });
        }

        if max_rounds == 0 {
            return Err(NegotiatorError::InvalidConfig(
                "max rounds must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            base_price,
            price_range,
            max_rounds,
        })
    }

    /// Build from raw bounds
    pub fn from_bounds(base_price: Price, min: Price, max: Price, max_rounds: usize) -> Result<Self> {
        Self::new(base_price, PriceRange::new(min, max)?, max_rounds)
    }

    /// Reference price
    pub fn base_price(&self) -> Price {
        self.base_price
    }

    /// Inclusive price bounds
    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    /// Rounds allowed before the final offer
    pub fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// Price of the fixed final offer
    pub fn final_offer(&self) -> Price {
        self.base_price.saturating_add(FINAL_OFFER_MARKUP)
    }

    /// Highest offer accepted outright
    pub fn acceptance_ceiling(&self) -> Price {
        self.base_price.saturating_add(HIGH_OFFER_MARGIN)
    }
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        Self {
            base_price: DEFAULT_BASE_PRICE,
            price_range: PriceRange::default(),
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NegotiationConfig::default();

        assert_eq!(config.base_price(), 100);
        assert_eq!(config.price_range().min(), 80);
        assert_eq!(config.price_range().max(), 120);
        assert_eq!(config.max_rounds(), 5);
        assert_eq!(config.final_offer(), 110);
        assert_eq!(config.acceptance_ceiling(), 120);
    }

    #[test]
    fn test_base_price_must_be_in_range() {
        let result = NegotiationConfig::from_bounds(150, 80, 120, 5);
        assert!(matches!(
            result,
            Err(NegotiatorError::BasePriceOutOfRange { base: 150, .. })
        ));

        assert!(NegotiationConfig::from_bounds(80, 80, 120, 5).is_ok());
        assert!(NegotiationConfig::from_bounds(120, 80, 120, 5).is_ok());
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let result = NegotiationConfig::from_bounds(100, 80, 120, 0);
        assert!(matches!(result, Err(NegotiatorError::InvalidConfig(_))));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let result = NegotiationConfig::from_bounds(100, 120, 80, 5);
        assert!(matches!(
            result,
            Err(NegotiatorError::InvalidPriceRange { .. })
        ));
    }

    #[test]
    fn test_offer_prices_saturate() {
        let config = NegotiationConfig::from_bounds(Price::MAX, 0, Price::MAX, 5).unwrap();

        assert_eq!(config.final_offer(), Price::MAX);
        assert_eq!(config.acceptance_ceiling(), Price::MAX);
    }

    #[test]
    fn test_invalid_config_rejected_on_deserialize() {
        let inverted = r#"{"base_price":100,"price_range":{"min":120,"max":80},"max_rounds":5}"#;
        assert!(serde_json::from_str::<NegotiationConfig>(inverted).is_err());

        let outside = r#"{"base_price":150,"price_range":{"min":80,"max":120},"max_rounds":5}"#;
        let err = serde_json::from_str::<NegotiationConfig>(outside).unwrap_err();
        assert!(err.to_string().contains("Base price 150 outside range [80, 120]"));

        let no_rounds = r#"{"base_price":100,"price_range":{"min":80,"max":120},"max_rounds":0}"#;
        assert!(serde_json::from_str::<NegotiationConfig>(no_rounds).is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = NegotiationConfig::default();
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: NegotiationConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }
}
