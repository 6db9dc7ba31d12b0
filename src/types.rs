//! Core types used throughout the negotiator

use crate::config::{DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE};
use crate::error::{NegotiatorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Price in whole currency units.
///
/// Signed so that stepping below the last offer never underflows.
pub type Price = i64;

/// Inclusive price bounds, always `min <= max`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPriceRange")]
pub struct PriceRange {
    min: Price,
    max: Price,
}

/// Unchecked wire form of `PriceRange`
#[derive(Deserialize)]
struct RawPriceRange {
    min: Price,
    max: Price,
}

impl TryFrom<RawPriceRange> for PriceRange {
    type Error = NegotiatorError;

    fn try_from(raw: RawPriceRange) -> Result<Self> {
        Self::new(raw.min, raw.max)
    }
}

impl PriceRange {
    /// Create a validated price range
    pub fn new(min: Price, max: Price) -> Result<Self> {
        if min > max {
            return Err(NegotiatorError::InvalidPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound
    pub fn min(&self) -> Price {
        self.min
    }

    /// Upper bound
    pub fn max(&self) -> Price {
        self.max
    }

    /// Check if a price lies inside the range
    pub fn contains(&self, price: Price) -> bool {
        (self.min..=self.max).contains(&price)
    }

    /// Pull a price into the range
    pub fn clamp(&self, price: Price) -> Price {
        price.clamp(self.min, self.max)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_PRICE,
            max: DEFAULT_MAX_PRICE,
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Score above which a message counts as positive
pub const POSITIVE_THRESHOLD: f64 = 0.5;

/// Score below which a message counts as negative
pub const NEGATIVE_THRESHOLD: f64 = -0.5;

/// Compound polarity of a message, in `[-1, 1]`
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct SentimentScore(f64);

impl SentimentScore {
    /// Neutral score
    pub const NEUTRAL: SentimentScore = SentimentScore(0.0);

    /// Create a score, clamping into `[-1, 1]`. NaN maps to neutral.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::NEUTRAL;
        }
        Self(value.clamp(-1.0, 1.0))
    }

    /// Raw value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Classify the score against the negotiation thresholds
    pub fn mood(&self) -> Mood {
        if self.0 > POSITIVE_THRESHOLD {
            Mood::Positive
        } else if self.0 < NEGATIVE_THRESHOLD {
            Mood::Negative
        } else {
            Mood::Neutral
        }
    }
}

impl From<f64> for SentimentScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for SentimentScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Coarse sentiment bucket driving the counteroffer strategy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Positive,
    Neutral,
    Negative,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_range_validation() {
        assert!(PriceRange::new(80, 120).is_ok());
        assert!(PriceRange::new(100, 100).is_ok());

        let result = PriceRange::new(120, 80);
        assert!(matches!(
            result,
            Err(NegotiatorError::InvalidPriceRange { min: 120, max: 80 })
        ));
    }

    #[test]
    fn test_price_range_clamp() {
        let range = PriceRange::new(80, 120).unwrap();

        assert_eq!(range.clamp(70), 80);
        assert_eq!(range.clamp(100), 100);
        assert_eq!(range.clamp(130), 120);

        assert!(range.contains(80));
        assert!(range.contains(120));
        assert!(!range.contains(121));
        assert_eq!(range.to_string(), "[80, 120]");
    }

    #[test]
    fn test_inverted_range_rejected_on_deserialize() {
        let result = serde_json::from_str::<PriceRange>(r#"{"min":120,"max":80}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid price range: min 120 > max 80"));

        let range: PriceRange = serde_json::from_str(r#"{"min":80,"max":120}"#).unwrap();
        assert_eq!(range, PriceRange::new(80, 120).unwrap());
    }

    #[test]
    fn test_sentiment_mood_thresholds() {
        // Thresholds are strict
        assert_eq!(SentimentScore::new(0.5).mood(), Mood::Neutral);
        assert_eq!(SentimentScore::new(0.51).mood(), Mood::Positive);
        assert_eq!(SentimentScore::new(-0.5).mood(), Mood::Neutral);
        assert_eq!(SentimentScore::new(-0.51).mood(), Mood::Negative);
        assert_eq!(SentimentScore::NEUTRAL.mood(), Mood::Neutral);
    }

    #[test]
    fn test_sentiment_clamping() {
        assert_eq!(SentimentScore::new(3.0).value(), 1.0);
        assert_eq!(SentimentScore::new(-3.0).value(), -1.0);
        assert_eq!(SentimentScore::new(f64::NAN), SentimentScore::NEUTRAL);
        assert_eq!(SentimentScore::from(0.4567).to_string(), "0.46");
    }
}
