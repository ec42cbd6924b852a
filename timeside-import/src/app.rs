//! Import run
//!
//! Startup sequence of the binary: load the batch, authenticate, then hand
//! the records to the orchestrator. A batch with no records is rejected
//! before the HTTP client is even built.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use timeside_client::TimesideClient;
use tracing::info;

use crate::config::Config;
use crate::error::ImportError;
use crate::loader::load_batch;
use crate::report::BatchSummary;
use crate::scheduler::BatchOrchestrator;

/// Imports the batch file at `input` with `config`
pub async fn run_import(config: &Config, input: &Path) -> Result<BatchSummary> {
    let batch = load_batch(input).await?;
    if batch.records.is_empty() {
        return Err(ImportError::EmptyBatch.into());
    }
    info!("Loaded {} records from {}", batch.records.len(), input.display());

    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let client = TimesideClient::with_client(config.api_url.clone(), http)
        .login(&config.username, &config.password)
        .await
        .context("Failed to authenticate")?;

    info!("Authenticated as {}", config.username);

    let orchestrator = BatchOrchestrator::new(Arc::new(client), config.batch_settings());
    Ok(orchestrator.run(batch).await?)
}
