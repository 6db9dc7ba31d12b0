//! Conversational replies for messages that are not about price

pub mod ollama;
pub mod scripted;

use crate::error::Result;
use async_trait::async_trait;

pub use ollama::OllamaDialogue;
pub use scripted::ScriptedDialogue;

/// Produces a free-text reply to an utterance.
///
/// Stateless per call: no conversation history is carried between replies.
#[async_trait]
pub trait DialogueService {
    async fn reply(&self, text: &str) -> Result<String>;
}

#[async_trait]
impl<D: DialogueService + Send + Sync + ?Sized> DialogueService for Box<D> {
    async fn reply(&self, text: &str) -> Result<String> {
        (**self).reply(text).await
    }
}
