//! Negotiation module: price state, counteroffers and the chat session

pub mod engine;
pub mod sampler;
pub mod session;
pub mod types;

pub use engine::NegotiationEngine;
pub use sampler::{PriceSampler, RngSampler};
pub use session::{NegotiationSession, SessionReply, SessionState};
pub use types::{NegotiationReply, NegotiationState, Phase};
