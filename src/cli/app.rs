//! Interactive console app driving a negotiation session

use crate::dialogue::{DialogueService, OllamaDialogue, ScriptedDialogue};
use crate::error::Result;
use crate::negotiation::{
    NegotiationEngine, NegotiationSession, PriceSampler, RngSampler, SessionReply, SessionState,
};
use crate::sentiment::LexiconAnalyzer;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::commands::{ChatArgs, DialogueBackend};

const WELCOME: &str = "Welcome to the Advanced Negotiation Chatbot!\n\
                       Let's negotiate a product price. Type 'exit' to end the conversation.\n";
const USER_PROMPT: &str = "You: ";

/// Console front end for one negotiation session
pub struct NegotiatorApp {
    session: NegotiationSession,
    show_sentiment: bool,
}

impl NegotiatorApp {
    /// Create the app around an existing session
    pub fn new(session: NegotiationSession, show_sentiment: bool) -> Self {
        Self {
            session,
            show_sentiment,
        }
    }

    /// Build the session and its collaborators from chat options
    pub fn from_args(args: &ChatArgs) -> Result<Self> {
        let config = args.negotiation_config()?;

        let sampler: Box<dyn PriceSampler> = match args.seed {
            Some(seed) => Box::new(RngSampler::seeded(seed)),
            None => Box::new(RngSampler::thread()),
        };

        let dialogue: Box<dyn DialogueService + Send + Sync> = match args.dialogue {
            DialogueBackend::Scripted => Box::new(ScriptedDialogue::new()),
            DialogueBackend::Ollama => {
                tracing::info!("Using Ollama model {} at {}", args.model, args.ollama_url);
                Box::new(OllamaDialogue::new(&args.ollama_url, args.model.clone())?)
            }
        };

        tracing::info!(
            "Starting negotiation: base {}, range {}, {} rounds",
            config.base_price(),
            config.price_range(),
            config.max_rounds()
        );

        let engine = NegotiationEngine::with_sampler(config, sampler);
        let session = NegotiationSession::new(engine, Box::new(LexiconAnalyzer::new()), dialogue);

        Ok(Self::new(session, args.show_sentiment))
    }

    /// Get the session
    pub fn session(&self) -> &NegotiationSession {
        &self.session
    }

    /// Run the chat until `exit` or end of input
    pub async fn run<R, W>(&mut self, reader: R, writer: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        writer.write_all(WELCOME.as_bytes()).await?;

        while !self.session.is_closed() {
            if self.session.state() == SessionState::Idle {
                writer.write_all(USER_PROMPT.as_bytes()).await?;
            }
            writer.flush().await?;

            let Some(line) = lines.next_line().await? else {
                tracing::debug!("End of input, closing session");
                self.session.close();
                writer.write_all(b"\n").await?;
                writer
                    .write_all(format!("{}\n", SessionReply::Goodbye).as_bytes())
                    .await?;
                break;
            };

            let reply = self.session.handle(&line).await;
            self.write_reply(&reply, writer).await?;
        }

        writer.flush().await?;
        Ok(())
    }

    async fn write_reply<W>(&self, reply: &SessionReply, writer: &mut W) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        // The score belongs to the message just typed, not to a price answer
        if self.show_sentiment && !matches!(reply, SessionReply::Negotiation { .. }) {
            if let Some(sentiment) = reply.sentiment() {
                writer
                    .write_all(format!("Debug (Sentiment Score): {}\n", sentiment).as_bytes())
                    .await?;
            }
        }

        let rendered = if reply.is_prompt() {
            reply.to_string()
        } else {
            format!("{}\n", reply)
        };
        writer.write_all(rendered.as_bytes()).await?;

        Ok(())
    }
}
