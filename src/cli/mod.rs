//! CLI module for the negotiator

pub mod app;
pub mod commands;

pub use app::NegotiatorApp;
pub use commands::{ChatArgs, Cli, Commands, DialogueBackend};
