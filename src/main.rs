//! Negotiator CLI binary

use anyhow::Context;
use clap::Parser;
use negotiator::cli::{Cli, Commands, NegotiatorApp};
use negotiator::sentiment::{LexiconAnalyzer, SentimentAnalyzer};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging on stderr so the chat on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.into_command() {
        Commands::Chat(args) => {
            let mut app =
                NegotiatorApp::from_args(&args).context("Invalid negotiation settings")?;

            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = tokio::io::stdout();
            app.run(stdin, &mut stdout).await?;

            tracing::info!(
                "Session ended after {} rounds",
                app.session().negotiation().rounds()
            );
        }

        Commands::Score { text } => {
            let text = text.join(" ");
            let score = LexiconAnalyzer::new().score(&text);
            tracing::debug!("Scored {:?}", text);
            println!("{:.4} ({:?})", score.value(), score.mood());
        }
    }

    Ok(())
}
