//! Jarvis binary entry point.

use std::sync::Arc;

use clap::Parser;
use jarvis::agent::Agent;
use jarvis::cli::{run_repl, Cli};
use jarvis::config::JarvisConfig;
use jarvis::provider::OllamaProvider;
use jarvis::tools::builtin::{default_registry, ReminderStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jarvis=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> jarvis::error::Result<()> {
    let config = cli.apply(JarvisConfig::from_env()?)?;

    let registry = Arc::new(default_registry(&config, ReminderStore::new())?);
    let provider = Arc::new(OllamaProvider::from_config(&config)?);
    let mut agent = Agent::new(provider, registry, &config);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_repl(&mut agent, stdin, &mut stdout).await
}
