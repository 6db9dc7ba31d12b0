//! Error types for the negotiator

use thiserror::Error;

/// Main error type for the negotiator
#[derive(Error, Debug)]
pub enum NegotiatorError {
    // Configuration errors
    #[error("Invalid configuration value: {0}")]
    InvalidConfig(String),

    #[error("Invalid price range: min {min} > max {max}")]
    InvalidPriceRange { min: i64, max: i64 },

    #[error("Base price {base} outside range [{min}, {max}]")]
    BasePriceOutOfRange { base: i64, min: i64, max: i64 },

    // Session errors
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    // Dialogue errors
    #[error("Dialogue service failed: {0}")]
    Dialogue(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for negotiator operations
pub type Result<T> = std::result::Result<T, NegotiatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = NegotiatorError::InvalidPrice("abc".to_string());
        assert_eq!(err.to_string(), "Invalid price: abc");
    }

    #[test]
    fn test_http_error_conversion() {
        fn build_request() -> Result<reqwest::Request> {
            Ok(reqwest::Client::new().get("not a url").build()?)
        }

        let err = build_request().unwrap_err();
        assert!(matches!(err, NegotiatorError::Http(_)));
        assert!(err.to_string().starts_with("HTTP error: "));
    }

    #[test]
    fn test_range_error_propagates_from_config() {
        let err = crate::config::NegotiationConfig::from_bounds(100, 120, 80, 5).unwrap_err();
        assert!(matches!(
            err,
            NegotiatorError::InvalidPriceRange { min: 120, max: 80 }
        ));
    }

    #[test]
    fn test_price_range_errors() {
        let err = NegotiatorError::InvalidPriceRange { min: 120, max: 80 };
        assert_eq!(err.to_string(), "Invalid price range: min 120 > max 80");

        let err = NegotiatorError::BasePriceOutOfRange {
            base: 150,
            min: 80,
            max: 120,
        };
        assert_eq!(err.to_string(), "Base price 150 outside range [80, 120]");
    }
}
