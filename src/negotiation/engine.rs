//! Negotiation engine computes counteroffers and round verdicts

use crate::config::{NegotiationConfig, COUNTER_STEP};
use crate::types::{Mood, Price, SentimentScore};

use super::sampler::{PriceSampler, RngSampler};
use super::types::{NegotiationReply, NegotiationState, Phase};

/// Negotiation engine for one session
pub struct NegotiationEngine<S = RngSampler<rand::rngs::ThreadRng>> {
    state: NegotiationState,
    sampler: S,
}

impl NegotiationEngine {
    /// Create an engine drawing from the thread-local generator
    pub fn new(config: NegotiationConfig) -> Self {
        Self::with_sampler(config, RngSampler::thread())
    }
}

impl<S: PriceSampler> NegotiationEngine<S> {
    /// Create an engine with an explicit random source
    pub fn with_sampler(config: NegotiationConfig, sampler: S) -> Self {
        Self {
            state: NegotiationState::new(config),
            sampler,
        }
    }

    /// Current negotiation state
    pub fn state(&self) -> &NegotiationState {
        &self.state
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Compute the bot's counteroffer.
    ///
    /// The draw range depends on the sentiment and the last user offer
    /// (base price before the first round). The result is always inside the
    /// configured price range. When the draw range is empty the engine
    /// returns the range boundary the draw was heading towards.
    pub fn counteroffer(&mut self, user_price: Price, sentiment: SentimentScore) -> Price {
        let range = self.state.price_range();
        let last_offer = self.state.last_offer();

        let (low, high) = match sentiment.mood() {
            Mood::Positive => (last_offer.saturating_add(COUNTER_STEP), range.max()),
            Mood::Negative => (range.min(), last_offer.saturating_sub(COUNTER_STEP)),
            Mood::Neutral => (last_offer, range.max()),
        };

        let counter = if low <= high {
            range.clamp(self.sampler.sample(low, high))
        } else if low > range.max() {
            range.max()
        } else {
            range.min()
        };

        tracing::debug!(
            "Counteroffer for {}: last offer {}, sentiment {}, draw [{}, {}] -> {}",
            user_price,
            last_offer,
            sentiment,
            low,
            high,
            counter
        );

        counter
    }

    /// Evaluate a user offer and record it in the history
    pub fn negotiate(&mut self, user_price: Price, sentiment: SentimentScore) -> NegotiationReply {
        let config = self.state.config().clone();

        let reply = if self.state.phase().is_terminal() {
            NegotiationReply::RoundsExhausted {
                final_offer: config.final_offer(),
            }
        } else if user_price < config.base_price() {
            let counter = self.counteroffer(user_price, sentiment);
            NegotiationReply::Counteroffer {
                offered: user_price,
                counter,
            }
        } else if user_price > config.acceptance_ceiling() {
            NegotiationReply::TooHigh {
                offered: user_price,
                best_offer: config.final_offer(),
            }
        } else {
            NegotiationReply::Accepted { price: user_price }
        };

        self.state.record_offer(user_price);

        tracing::info!(
            "Round {}/{}: offer {} -> {:?}",
            self.state.rounds(),
            self.state.max_rounds(),
            user_price,
            reply
        );

        reply
    }
}
