//! Dialogue backed by an Ollama model server

use super::DialogueService;
use crate::error::{NegotiatorError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Ollama endpoint
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
/// Default chat model
pub const DEFAULT_MODEL: &str = "llama3";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

// Structures matching Ollama's /api/generate endpoint
#[derive(Serialize, Debug)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize, Debug)]
struct GenerateResponse {
    response: String,
}

/// Sends each utterance to `/api/generate` and returns the model's answer
#[derive(Clone, Debug)]
pub struct OllamaDialogue {
    client: Client,
    endpoint: String,
    model: String,
}

impl OllamaDialogue {
    /// Create a backend for the given server and model
    pub fn new(base_url: &str, model: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/api/generate", base_url.trim_end_matches('/')),
            model: model.into(),
        })
    }

    /// Full URL requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DialogueService for OllamaDialogue {
    async fn reply(&self, text: &str) -> Result<String> {
        let request = GenerateRequest {
            model: &self.model,
            prompt: text,
            stream: false,
        };

        tracing::debug!("Sending {} chars to {} ({})", text.len(), self.endpoint, self.model);

        let response = self.client.post(&self.endpoint).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::error!("Ollama request failed with {}: {}", status, body);
            return Err(NegotiatorError::Dialogue(format!(
                "model server returned {}: {}",
                status, body
            )));
        }

        let generated: GenerateResponse = response.json().await?;
        let reply = generated.response.trim().to_string();

        if reply.is_empty() {
            return Err(NegotiatorError::Dialogue("empty reply from model".to_string()));
        }

        Ok(reply)
    }
}
