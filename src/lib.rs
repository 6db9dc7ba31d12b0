//! Negotiator
//!
//! A command-line chatbot that haggles over a product price. Each message is
//! scored for sentiment; messages about price go to the negotiation engine,
//! which accepts, rejects or counters the user's offer, and everything else
//! goes to a dialogue backend for small talk.

pub mod cli;
pub mod config;
pub mod dialogue;
pub mod error;
pub mod negotiation;
pub mod sentiment;
pub mod types;

// Re-export commonly used types
pub use config::NegotiationConfig;
pub use dialogue::{DialogueService, OllamaDialogue, ScriptedDialogue};
pub use error::{NegotiatorError, Result};
pub use negotiation::{
    NegotiationEngine, NegotiationReply, NegotiationSession, NegotiationState, PriceSampler,
    RngSampler, SessionReply,
};
pub use sentiment::{LexiconAnalyzer, SentimentAnalyzer};
pub use types::{Mood, Price, PriceRange, SentimentScore};
