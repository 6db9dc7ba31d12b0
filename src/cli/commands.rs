//! CLI command definitions

use crate::config::{
    NegotiationConfig, DEFAULT_BASE_PRICE, DEFAULT_MAX_PRICE, DEFAULT_MAX_ROUNDS,
    DEFAULT_MIN_PRICE,
};
use crate::dialogue::ollama::{DEFAULT_MODEL, DEFAULT_OLLAMA_URL};
use crate::error::Result;
use crate::types::Price;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "negotiator", version)]
#[command(about = "Negotiator - sentiment-aware price negotiation chatbot", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Chat options used when no subcommand is given
    #[command(flatten)]
    pub chat: ChatArgs,
}

impl Cli {
    /// Resolve the command to run, defaulting to an interactive chat
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Chat(self.chat))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive negotiation chat (default)
    Chat(ChatArgs),

    /// Print the sentiment score of a text
    Score {
        /// Text to score
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

/// Backend used for messages that are not about price
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DialogueBackend {
    /// Built-in canned replies, works offline
    Scripted,
    /// Ollama model server
    Ollama,
}

#[derive(Args, Debug, Clone)]
pub struct ChatArgs {
    /// Reference price of the product
    #[arg(long, default_value_t = DEFAULT_BASE_PRICE, allow_negative_numbers = true)]
    pub base_price: Price,

    /// Lowest price the bot will counter with
    #[arg(long, default_value_t = DEFAULT_MIN_PRICE, allow_negative_numbers = true)]
    pub min_price: Price,

    /// Highest price the bot will counter with
    #[arg(long, default_value_t = DEFAULT_MAX_PRICE, allow_negative_numbers = true)]
    pub max_price: Price,

    /// Offers evaluated before the final offer
    #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
    pub max_rounds: usize,

    /// Seed for reproducible counteroffers
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the sentiment score of every message
    #[arg(long)]
    pub show_sentiment: bool,

    /// Dialogue backend for small talk
    #[arg(long, value_enum, default_value_t = DialogueBackend::Scripted)]
    pub dialogue: DialogueBackend,

    /// Ollama server URL
    #[arg(long, env = "NEGOTIATOR_OLLAMA_URL", default_value = DEFAULT_OLLAMA_URL)]
    pub ollama_url: String,

    /// Ollama model name
    #[arg(long, env = "NEGOTIATOR_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,
}

impl ChatArgs {
    /// Validate the price options into a negotiation config
    pub fn negotiation_config(&self) -> Result<NegotiationConfig> {
        NegotiationConfig::from_bounds(
            self.base_price,
            self.min_price,
            self.max_price,
            self.max_rounds,
        )
    }
}
