//! Offline keyword-driven small talk

use super::DialogueService;
use crate::error::Result;
use async_trait::async_trait;

const GREETING_KEYWORDS: &[&str] = &["hello", "hi", "hey", "good morning", "good evening"];
const THANKS_KEYWORDS: &[&str] = &["thank", "thanks", "cheers"];
const PRODUCT_KEYWORDS: &[&str] = &["product", "products", "item", "quality", "condition", "warranty"];
const HELP_KEYWORDS: &[&str] = &["help", "how does", "how do", "what can"];
const DEAL_KEYWORDS: &[&str] = &["deal", "discount", "cheaper", "offer", "cost"];

/// Canned replies chosen by keyword, no model required
#[derive(Clone, Debug, Default)]
pub struct ScriptedDialogue;

impl ScriptedDialogue {
    /// Create a scripted dialogue backend
    pub fn new() -> Self {
        Self
    }

    /// Pick the canned reply for a message
    pub fn respond(&self, text: &str) -> &'static str {
        let lower = text.to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        // Single keywords match whole words, phrases match as substrings
        let mentions = |keywords: &[&str]| {
            keywords.iter().any(|k| {
                if k.contains(' ') {
                    lower.contains(k)
                } else {
                    words.contains(k)
                }
            })
        };

        if mentions(GREETING_KEYWORDS) {
            "Hello! Happy to chat. Mention the price whenever you're ready to make an offer."
        } else if mentions(THANKS_KEYWORDS) {
            "You're welcome! Anything else I can do for you?"
        } else if mentions(HELP_KEYWORDS) {
            "Say something about the price and I'll ask for your offer. Type 'exit' to leave."
        } else if mentions(DEAL_KEYWORDS) {
            "I'm always open to a fair deal. Tell me about the price you have in mind."
        } else if mentions(PRODUCT_KEYWORDS) {
            "It's a great product in excellent condition. Well worth a fair price."
        } else {
            "Interesting! Tell me more."
        }
    }
}

#[async_trait]
impl DialogueService for ScriptedDialogue {
    async fn reply(&self, text: &str) -> Result<String> {
        Ok(self.respond(text).to_string())
    }
}
