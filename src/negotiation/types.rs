//! Negotiation types and state machine

use crate::config::NegotiationConfig;
use crate::types::{Price, PriceRange};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of a negotiation, derived from the round count
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Rounds remain, offers are evaluated
    Negotiating,
    /// Round limit reached, only the final offer is given
    RoundsExhausted,
}

impl Phase {
    /// Check if the phase is terminal for offer logic
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::RoundsExhausted)
    }
}

/// Negotiation state owned by a single session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NegotiationState {
    config: NegotiationConfig,
    history: Vec<Price>,
}

impl NegotiationState {
    /// Create a fresh state with an empty history
    pub fn new(config: NegotiationConfig) -> Self {
        Self {
            config,
            history: Vec::new(),
        }
    }

    /// Configuration the state was created from
    pub fn config(&self) -> &NegotiationConfig {
        &self.config
    }

    /// Reference price
    pub fn base_price(&self) -> Price {
        self.config.base_price()
    }

    /// Inclusive price bounds
    pub fn price_range(&self) -> PriceRange {
        self.config.price_range()
    }

    /// Round limit
    pub fn max_rounds(&self) -> usize {
        self.config.max_rounds()
    }

    /// All user offers so far, oldest first
    pub fn history(&self) -> &[Price] {
        &self.history
    }

    /// Last user offer, or the base price before any round
    pub fn last_offer(&self) -> Price {
        self.history
            .last()
            .copied()
            .unwrap_or_else(|| self.config.base_price())
    }

    /// Number of rounds played
    pub fn rounds(&self) -> usize {
        self.history.len()
    }

    /// Rounds left before the final offer
    pub fn rounds_remaining(&self) -> usize {
        self.max_rounds().saturating_sub(self.rounds())
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        if self.rounds() >= self.max_rounds() {
            Phase::RoundsExhausted
        } else {
            Phase::Negotiating
        }
    }

    /// Append a user offer (history is append-only)
    pub fn record_offer(&mut self, price: Price) {
        self.history.push(price);
    }
}

/// Outcome of a single negotiation round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NegotiationReply {
    /// Round limit reached, fixed final offer
    RoundsExhausted { final_offer: Price },
    /// Offer below base price, the bot counters
    Counteroffer { offered: Price, counter: Price },
    /// Offer above the acceptance ceiling
    TooHigh { offered: Price, best_offer: Price },
    /// Offer accepted as is
    Accepted { price: Price },
}

impl NegotiationReply {
    /// Price the bot puts on the table with this reply
    pub fn price(&self) -> Price {
        match self {
            NegotiationReply::RoundsExhausted { final_offer } => *final_offer,
            NegotiationReply::Counteroffer { counter, .. } => *counter,
            NegotiationReply::TooHigh { best_offer, .. } => *best_offer,
            NegotiationReply::Accepted { price } => *price,
        }
    }

    /// Check if the reply closes the deal
    pub fn is_accepted(&self) -> bool {
        matches!(self, NegotiationReply::Accepted { .. })
    }
}

impl fmt::Display for NegotiationReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NegotiationReply::RoundsExhausted { final_offer } => {
                write!(f, "We've negotiated enough rounds. Final offer: ${}.", final_offer)
            }
            NegotiationReply::Counteroffer { offered, counter } => write!(
                f,
                "Your offer of ${} is below the base price. How about ${}?",
                offered, counter
            ),
            NegotiationReply::TooHigh { offered, best_offer } => write!(
                f,
                "Your offer of ${} is a bit too high. The best I can do is ${}.",
                offered, best_offer
            ),
            NegotiationReply::Accepted { price } => write!(
                f,
                "Your offer of ${} is accepted! We'll finalize the deal at ${}.",
                price, price
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state() {
        let state = NegotiationState::new(NegotiationConfig::default());

        assert!(state.history().is_empty());
        assert_eq!(state.last_offer(), 100);
        assert_eq!(state.rounds_remaining(), 5);
        assert_eq!(state.phase(), Phase::Negotiating);
        assert!(!state.phase().is_terminal());
    }

    #[test]
    fn test_record_offer() {
        let mut state = NegotiationState::new(NegotiationConfig::default());

        state.record_offer(90);
        state.record_offer(95);

        assert_eq!(state.history(), &[90, 95]);
        assert_eq!(state.last_offer(), 95);
        assert_eq!(state.rounds(), 2);
        assert_eq!(state.rounds_remaining(), 3);
    }

    #[test]
    fn test_phase_after_max_rounds() {
        let config = NegotiationConfig::from_bounds(100, 80, 120, 2).unwrap();
        let mut state = NegotiationState::new(config);

        state.record_offer(90);
        assert_eq!(state.phase(), Phase::Negotiating);

        state.record_offer(95);
        assert_eq!(state.phase(), Phase::RoundsExhausted);
        assert!(state.phase().is_terminal());

        // No transition back
        state.record_offer(100);
        assert_eq!(state.phase(), Phase::RoundsExhausted);
        assert_eq!(state.rounds_remaining(), 0);
    }

    #[test]
    fn test_reply_messages() {
        let reply = NegotiationReply::RoundsExhausted { final_offer: 110 };
        assert_eq!(
            reply.to_string(),
            "We've negotiated enough rounds. Final offer: $110."
        );

        let reply = NegotiationReply::Counteroffer {
            offered: 70,
            counter: 105,
        };
        assert_eq!(
            reply.to_string(),
            "Your offer of $70 is below the base price. How about $105?"
        );
        assert_eq!(reply.price(), 105);

        let reply = NegotiationReply::TooHigh {
            offered: 130,
            best_offer: 110,
        };
        assert_eq!(
            reply.to_string(),
            "Your offer of $130 is a bit too high. The best I can do is $110."
        );

        let reply = NegotiationReply::Accepted { price: 105 };
        assert_eq!(
            reply.to_string(),
            "Your offer of $105 is accepted! We'll finalize the deal at $105."
        );
        assert!(reply.is_accepted());
    }

    #[test]
    fn test_state_serialization() {
        let mut state = NegotiationState::new(NegotiationConfig::default());
        state.record_offer(90);

        let serialized = serde_json::to_string(&state).unwrap();
        let deserialized: NegotiationState = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.history(), state.history());
        assert_eq!(deserialized.config(), state.config());
    }
}
