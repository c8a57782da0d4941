//! Command-line client for the Blue Star assistant.

use anyhow::{Context, Result, bail};
use bluestar::config::AssistantConfig;
use bluestar::core::{AssistantEngine, TurnOutcome};
use bluestar::llm::HttpChatEndpoint;
use bluestar::protocol::Message;
use bluestar::store::{DataStore, Entity};
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Command-line options.
#[derive(Parser)]
#[command(name = "bluestar", version)]
struct Cli {
    /// Optional path to a bluestar.json5 config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the endpoint model name
    #[arg(long)]
    model: Option<String>,
    /// Path to a JSON seed file for the data store
    #[arg(long)]
    seed: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive chat against the configured endpoint
    Chat,
    /// Print the lookup report for one entity and exit
    Lookup { entity: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    bluestar::init_logging();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AssistantConfig::load_from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AssistantConfig::load_default().context("failed to load default config")?,
    };
    if let Some(model) = cli.model {
        config.endpoint.model = model;
    }

    let store = match &cli.seed {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read seed file {}", path.display()))?;
            DataStore::from_json_str(&contents)
                .with_context(|| format!("failed to parse seed file {}", path.display()))?
        }
        None => {
            debug!("no seed file given; using the built-in demo inventory");
            DataStore::demo()
        }
    };
    let store = Arc::new(store);

    match cli.command.unwrap_or(Command::Chat) {
        Command::Lookup { entity } => lookup(&store, &entity),
        Command::Chat => chat(config, store).await,
    }
}

fn lookup(store: &DataStore, entity: &str) -> Result<()> {
    let entity: Entity = entity.parse().map_err(|err| anyhow::anyhow!("{err}"))?;
    let report = store.lookup(entity);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn chat(config: AssistantConfig, store: Arc<DataStore>) -> Result<()> {
    let Some(api_key) = config.resolved_api_key() else {
        bail!(
            "no API key configured; set {} or endpoint.api_key",
            bluestar::config::API_KEY_ENV
        );
    };
    let endpoint = HttpChatEndpoint::new(
        config.endpoint.base_url.clone(),
        api_key,
        config.endpoint.model.clone(),
        Duration::from_secs(config.endpoint.timeout_secs),
    )?;
    info!("chat session started (model={})", endpoint.model());
    let engine = AssistantEngine::new(config.chat, Arc::new(endpoint), store);

    // Surface the seeded greeting before the first prompt.
    for message in engine.transcript() {
        if let Message::Assistant {
            text: Some(text), ..
        } = message
        {
            println!("{text}");
        }
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "/quit" || line == "/exit" {
            break;
        }

        match engine.submit(line).await {
            Ok(TurnOutcome::Completed { reply }) => println!("{reply}"),
            Ok(TurnOutcome::Failed { message }) => eprintln!("turn failed: {message}"),
            Ok(TurnOutcome::Cancelled) => eprintln!("turn cancelled"),
            Err(err) => eprintln!("{err}"),
        }
    }

    Ok(())
}
