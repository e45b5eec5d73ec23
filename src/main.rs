use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use synonyms::{
    LookupSynonymsUseCase, OllamaClient, OllamaConfig, SynonymPlugin, TerminalHost, COMMAND_ID,
};

#[derive(Parser)]
#[command(name = "synonyms")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Word or phrase to look up, standing in for the editor selection.
    selection: Option<String>,

    #[arg(short, long)]
    verbose: bool,

    /// Inference endpoint URL (defaults to local Ollama).
    #[arg(long)]
    endpoint: Option<String>,

    /// Model identifier to request.
    #[arg(long)]
    model: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, default_value = "30")]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = OllamaConfig::default().with_timeout(Duration::from_secs(cli.timeout_secs));
    if let Some(endpoint) = cli.endpoint {
        config = config.with_endpoint(endpoint);
    }
    if let Some(model) = cli.model {
        config = config.with_model(model);
    }
    info!("using {} via {}", config.model(), config.endpoint());

    let client = Arc::new(OllamaClient::new(config));
    let lookup = Arc::new(LookupSynonymsUseCase::new(client));
    let plugin = SynonymPlugin::new(lookup);

    let host = TerminalHost::new(cli.selection.unwrap_or_default());
    plugin.activate(&host);
    if !host.invoke(COMMAND_ID).await {
        anyhow::bail!("command {COMMAND_ID} is not registered");
    }
    plugin.deactivate();

    Ok(())
}
