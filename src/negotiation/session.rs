//! Chat session routing user input to the negotiation engine or dialogue

use crate::dialogue::DialogueService;
use crate::error::{NegotiatorError, Result};
use crate::sentiment::SentimentAnalyzer;
use crate::types::{Price, SentimentScore};
use std::fmt;

use super::engine::NegotiationEngine;
use super::sampler::PriceSampler;
use super::types::{NegotiationReply, NegotiationState};

/// Keyword that switches a message into price negotiation
pub const PRICE_KEYWORD: &str = "price";
/// Command that ends the session
pub const EXIT_COMMAND: &str = "exit";

const DIALOGUE_FALLBACK: &str = "Sorry, I couldn't come up with a reply just now.";

/// Where the session is in the conversation
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionState {
    /// Waiting for a free-text message
    Idle,
    /// The last message mentioned price, waiting for a number
    AwaitingPrice { sentiment: SentimentScore },
    /// The user left
    Closed,
}

/// Response to one line of user input
#[derive(Clone, Debug, PartialEq)]
pub enum SessionReply {
    /// Ask the user for a numeric price
    AskPrice { sentiment: SentimentScore },
    /// Verdict on a price offer
    Negotiation {
        sentiment: SentimentScore,
        reply: NegotiationReply,
    },
    /// The price could not be parsed, the round was skipped
    InvalidPrice { input: String },
    /// Free-text reply from the dialogue service
    Dialogue { sentiment: SentimentScore, text: String },
    /// Session ended
    Goodbye,
}

impl SessionReply {
    /// Sentiment of the message that produced this reply, if it was scored
    pub fn sentiment(&self) -> Option<SentimentScore> {
        match self {
            SessionReply::AskPrice { sentiment }
            | SessionReply::Negotiation { sentiment, .. }
            | SessionReply::Dialogue { sentiment, .. } => Some(*sentiment),
            SessionReply::InvalidPrice { .. } | SessionReply::Goodbye => None,
        }
    }

    /// Check if the reply is an inline prompt rather than a full line
    pub fn is_prompt(&self) -> bool {
        matches!(self, SessionReply::AskPrice { .. })
    }
}

impl fmt::Display for SessionReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionReply::AskPrice { .. } => write!(f, "What price do you want to propose? "),
            SessionReply::Negotiation { reply, .. } => write!(f, "Chatbot: {}", reply),
            SessionReply::InvalidPrice { .. } => write!(f, "Chatbot: Please enter a valid price."),
            SessionReply::Dialogue { text, .. } => write!(f, "Chatbot: {}", text),
            SessionReply::Goodbye => write!(f, "Chatbot: Thank you for negotiating! Goodbye."),
        }
    }
}

/// One user's chat session
pub struct NegotiationSession {
    engine: NegotiationEngine<Box<dyn PriceSampler>>,
    analyzer: Box<dyn SentimentAnalyzer>,
    dialogue: Box<dyn DialogueService + Send + Sync>,
    state: SessionState,
}

impl NegotiationSession {
    /// Create a session around an engine and its collaborators
    pub fn new(
        engine: NegotiationEngine<Box<dyn PriceSampler>>,
        analyzer: Box<dyn SentimentAnalyzer>,
        dialogue: Box<dyn DialogueService + Send + Sync>,
    ) -> Self {
        Self {
            engine,
            analyzer,
            dialogue,
            state: SessionState::Idle,
        }
    }

    /// Current conversation state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Negotiation state of the engine
    pub fn negotiation(&self) -> &NegotiationState {
        self.engine.state()
    }

    /// Check if the user has left
    pub fn is_closed(&self) -> bool {
        matches!(self.state, SessionState::Closed)
    }

    /// Close the session without an exit command (end of input)
    pub fn close(&mut self) {
        self.state = SessionState::Closed;
    }

    /// Handle one line of user input
    pub async fn handle(&mut self, line: &str) -> SessionReply {
        match self.state {
            SessionState::Closed => SessionReply::Goodbye,
            SessionState::AwaitingPrice { sentiment } => {
                self.state = SessionState::Idle;
                self.handle_price(line, sentiment)
            }
            SessionState::Idle => self.handle_message(line).await,
        }
    }

    async fn handle_message(&mut self, line: &str) -> SessionReply {
        if line.trim().eq_ignore_ascii_case(EXIT_COMMAND) {
            tracing::info!(
                "Session closed after {} negotiation rounds",
                self.engine.state().rounds()
            );
            self.state = SessionState::Closed;
            return SessionReply::Goodbye;
        }

        let sentiment = self.analyzer.score(line);
        tracing::debug!("Sentiment score {} for {:?}", sentiment, line);

        if line.to_lowercase().contains(PRICE_KEYWORD) {
            self.state = SessionState::AwaitingPrice { sentiment };
            return SessionReply::AskPrice { sentiment };
        }

        let text = match self.dialogue.reply(line).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Dialogue service failed: {}", e);
                DIALOGUE_FALLBACK.to_string()
            }
        };

        SessionReply::Dialogue { sentiment, text }
    }

    fn handle_price(&mut self, line: &str, sentiment: SentimentScore) -> SessionReply {
        let price = match parse_price(line) {
            Ok(price) => price,
            Err(e) => {
                tracing::debug!("Rejected price input: {}", e);
                return SessionReply::InvalidPrice {
                    input: line.to_string(),
                };
            }
        };

        let reply = self.engine.negotiate(price, sentiment);
        SessionReply::Negotiation { sentiment, reply }
    }
}

/// Parse a whole-number price, surrounding whitespace allowed
pub fn parse_price(input: &str) -> Result<Price> {
    let input = input.trim();
    input
        .parse::<Price>()
        .map_err(|_| NegotiatorError::InvalidPrice(input.to_string()))
}
