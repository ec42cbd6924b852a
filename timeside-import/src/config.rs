//! Importer configuration
//!
//! Connection settings, shared resource titles and polling behaviour.
//! Values come from the command line, which falls back to environment
//! variables (and a `.env` file) for everything but the batch path.

use std::time::Duration;
use timeside_core::domain::pipeline::default_presets;

use crate::scheduler::{BackoffSchedule, BatchSettings, PollPolicy};

pub const DEFAULT_API_URL: &str = "https://sandbox.wasabi.telemeta.org";
pub const DEFAULT_PLAYER_URL: &str = "https://ircam-wam.github.io/timeside-player";
pub const DEFAULT_COLLECTION: &str = "WASABI";
pub const DEFAULT_PIPELINE: &str = "WASABI_experience";

/// Importer configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// TimeSide server base URL
    pub api_url: String,

    pub username: String,

    pub password: String,

    /// Player base URL used to build per-item deep links
    pub player_url: String,

    /// Title of the collection every item is added to
    pub collection_title: String,

    /// Title of the pipeline every job runs
    pub pipeline_title: String,

    /// Timeout applied to each HTTP request
    pub request_timeout: Duration,

    /// End polling as soon as a job reports `Failed`
    pub stop_on_failed: bool,
}

impl Config {
    /// Creates a configuration with defaults for everything but credentials
    pub fn new(username: String, password: String) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            username,
            password,
            player_url: DEFAULT_PLAYER_URL.to_string(),
            collection_title: DEFAULT_COLLECTION.to_string(),
            pipeline_title: DEFAULT_PIPELINE.to_string(),
            request_timeout: Duration::from_secs(30),
            stop_on_failed: false,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, url) in [("api_url", &self.api_url), ("player_url", &self.player_url)] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", name);
            }
        }

        if self.username.is_empty() {
            anyhow::bail!("username cannot be empty");
        }

        if self.password.is_empty() {
            anyhow::bail!("password cannot be empty");
        }

        if self.collection_title.trim().is_empty() {
            anyhow::bail!("collection title cannot be empty");
        }

        if self.pipeline_title.trim().is_empty() {
            anyhow::bail!("pipeline title cannot be empty");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }

    /// Batch engine settings derived from this configuration
    pub fn batch_settings(&self) -> BatchSettings {
        BatchSettings {
            collection_title: self.collection_title.clone(),
            pipeline_title: self.pipeline_title.clone(),
            presets: default_presets(),
            player_url: self.player_url.clone(),
            schedule: BackoffSchedule::fibonacci(),
            policy: PollPolicy {
                stop_on_failed: self.stop_on_failed,
            },
        }
    }
}
