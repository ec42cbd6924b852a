//! TimeSide Import
//!
//! Imports a JSON batch of media records into a TimeSide server and runs
//! the shared analysis pipeline on each of them.
//!
//! Startup:
//! - Configuration: command line, environment or `.env`
//! - Client: one authenticated HTTP client shared by every item
//! - Batch: reconcile collection and pipeline, then submit and poll items

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use timeside_import::config::{
    Config, DEFAULT_API_URL, DEFAULT_COLLECTION, DEFAULT_PIPELINE, DEFAULT_PLAYER_URL,
};
use timeside_import::run_import;

#[derive(Parser)]
#[command(name = "timeside-import")]
#[command(about = "Batch media importer for TimeSide", long_about = None)]
struct Cli {
    /// JSON batch file
    input: PathBuf,

    /// TimeSide server URL
    #[arg(long, env = "TIMESIDE_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[arg(long, env = "TIMESIDE_API_USER")]
    username: String,

    #[arg(long, env = "TIMESIDE_API_PASS", hide_env_values = true)]
    password: String,

    /// Player base URL for item links
    #[arg(long, env = "TIMESIDE_PLAYER_URL", default_value = DEFAULT_PLAYER_URL)]
    player_url: String,

    /// Collection every item is added to
    #[arg(long, env = "TIMESIDE_COLLECTION", default_value = DEFAULT_COLLECTION)]
    collection: String,

    /// Pipeline run on every item
    #[arg(long, env = "TIMESIDE_PIPELINE", default_value = DEFAULT_PIPELINE)]
    pipeline: String,

    /// HTTP request timeout in seconds
    #[arg(long, env = "TIMESIDE_REQUEST_TIMEOUT", default_value_t = 30)]
    request_timeout: u64,

    /// Stop polling a job once it reports a failure
    #[arg(long, env = "TIMESIDE_STOP_ON_FAILED")]
    stop_on_failed: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            api_url: cli.api_url,
            player_url: cli.player_url,
            collection_title: cli.collection,
            pipeline_title: cli.pipeline,
            request_timeout: Duration::from_secs(cli.request_timeout),
            stop_on_failed: cli.stop_on_failed,
            ..Config::new(cli.username, cli.password)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "timeside_import=info,timeside_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let input = cli.input.clone();
    let config = Config::from(cli);
    config.validate().context("Invalid configuration")?;

    info!(
        "Loaded configuration: api_url={}, collection={}, pipeline={}",
        config.api_url, config.collection_title, config.pipeline_title
    );

    let summary = match run_import(&config, &input).await {
        Ok(summary) => summary,
        Err(e) => {
            error!("Import aborted: {:#}", e);
            return Err(e);
        }
    };

    summary.print();
    Ok(())
}
