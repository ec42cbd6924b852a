//! Batch orchestration
//!
//! Reconciles the shared collection and pipeline once, then runs one
//! independent submit-and-poll pipeline per record. A record that fails
//! never stops its siblings; only reconciliation can abort the batch.

use chrono::Utc;
use futures::future::join_all;
use std::sync::Arc;
use timeside_client::RemoteClient;
use timeside_core::domain::collection::Collection;
use timeside_core::domain::pipeline::{Pipeline, default_presets};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::backoff::BackoffSchedule;
use super::poller::{JobPoller, PollOutcome, PollPolicy};
use crate::config::{DEFAULT_COLLECTION, DEFAULT_PIPELINE, DEFAULT_PLAYER_URL};
use crate::error::{ImportError, Result};
use crate::loader::Batch;
use crate::report::{BatchSummary, ItemOutcome, ItemReport};
use crate::service::{ItemSubmitter, PreparedRecord, ResourceReconciler, prepare};

/// What every record of a batch shares
#[derive(Debug, Clone)]
pub struct BatchSettings {
    pub collection_title: String,
    pub pipeline_title: String,
    /// Preset references the pipeline must carry, in order
    pub presets: Vec<String>,
    /// Player base URL, items are linked as `{player_url}/#/item/{id}`
    pub player_url: String,
    pub schedule: BackoffSchedule,
    pub policy: PollPolicy,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            collection_title: DEFAULT_COLLECTION.to_string(),
            pipeline_title: DEFAULT_PIPELINE.to_string(),
            presets: default_presets(),
            player_url: DEFAULT_PLAYER_URL.to_string(),
            schedule: BackoffSchedule::default(),
            policy: PollPolicy::default(),
        }
    }
}

/// Runs import batches against one remote platform
pub struct BatchOrchestrator {
    settings: BatchSettings,
    reconciler: ResourceReconciler,
    submitter: ItemSubmitter,
    poller: JobPoller,
}

impl BatchOrchestrator {
    pub fn new(client: Arc<dyn RemoteClient>, settings: BatchSettings) -> Self {
        Self {
            reconciler: ResourceReconciler::new(client.clone()),
            submitter: ItemSubmitter::new(client.clone()),
            poller: JobPoller::new(client, settings.schedule.clone(), settings.policy),
            settings,
        }
    }

    /// Imports every record of `batch`
    ///
    /// Returns once every item pipeline reached an outcome. Errors are
    /// only returned for an empty batch or a failed reconciliation, in
    /// which case no item was submitted.
    pub async fn run(&self, batch: Batch) -> Result<BatchSummary> {
        if batch.records.is_empty() {
            return Err(ImportError::EmptyBatch);
        }

        let started_at = Utc::now();
        let total = batch.records.len();
        info!(
            records = total,
            max_checks = self.settings.schedule.len() + 1,
            "Starting import batch"
        );
        if self.settings.schedule.is_empty() {
            warn!("Empty backoff schedule, each job is checked once");
        }

        let collection = self
            .reconciler
            .ensure_collection(&self.settings.collection_title)
            .await?;
        let pipeline = self
            .reconciler
            .ensure_pipeline(&self.settings.pipeline_title, &self.settings.presets)
            .await?;

        info!(
            collection_id = %collection.id,
            pipeline_id = %pipeline.id,
            "Shared resources ready"
        );

        let base_dir = batch.base_dir.as_path();
        let prepared = join_all(
            batch
                .records
                .into_iter()
                .map(|record| async move {
                    let title = record.title.clone();
                    (title, prepare(record, base_dir).await)
                }),
        )
        .await;

        let collection = Arc::new(collection);
        let pipeline = Arc::new(pipeline);
        let mut items = Vec::with_capacity(total);
        let mut handles = Vec::new();

        for (index, (title, result)) in prepared.into_iter().enumerate() {
            match result {
                Ok(prepared) => {
                    let handle = self.spawn_item(prepared, collection.clone(), pipeline.clone());
                    handles.push((index, title, handle));
                }
                Err(e) => {
                    warn!(index, title = %title, error = %e, "Record skipped");
                    items.push(ItemReport::failed(index, title, e));
                }
            }
        }

        let submitted = handles.len();
        for (index, title, handle) in handles {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!(index, title = %title, error = %e, "Item pipeline aborted");
                    ItemOutcome::Failed {
                        job_id: None,
                        error: format!("item pipeline aborted: {}", e),
                    }
                }
            };
            items.push(ItemReport {
                index,
                title,
                outcome,
            });
        }
        items.sort_by_key(|item| item.index);

        let summary = BatchSummary {
            collection_id: collection.id,
            pipeline_id: pipeline.id,
            submitted,
            items,
            started_at,
            finished_at: Utc::now(),
        };

        info!(
            records = total,
            submitted,
            succeeded = summary.succeeded(),
            timed_out = summary.timed_out(),
            failed = summary.failed(),
            "Import batch finished"
        );

        Ok(summary)
    }

    fn spawn_item(
        &self,
        prepared: PreparedRecord,
        collection: Arc<Collection>,
        pipeline: Arc<Pipeline>,
    ) -> JoinHandle<ItemOutcome> {
        let submitter = self.submitter.clone();
        let poller = self.poller.clone();
        let player_url = self.settings.player_url.clone();

        tokio::spawn(async move {
            let submission = match submitter
                .submit_prepared(&prepared, &collection, &pipeline)
                .await
            {
                Ok(submission) => submission,
                Err(e) => {
                    return ItemOutcome::Failed {
                        job_id: None,
                        error: e.to_string(),
                    };
                }
            };

            let item_id = submission.item.id;
            let job_id = submission.job.id;

            match poller.await_terminal(&submission.job).await {
                Ok(report) => match report.outcome {
                    PollOutcome::Done => {
                        let link = player_link(&player_url, item_id);
                        info!(title = %prepared.record.title, url = %link, "Item analysed");
                        ItemOutcome::Succeeded {
                            item_id,
                            job_id,
                            player_url: link,
                            elapsed: report.elapsed,
                        }
                    }
                    PollOutcome::TimedOut => ItemOutcome::TimedOut {
                        item_id,
                        job_id,
                        last_status: report.last_status,
                        elapsed: report.elapsed,
                    },
                    PollOutcome::Failed => ItemOutcome::Failed {
                        job_id: Some(job_id),
                        error: format!("job {} reported failed", job_id),
                    },
                },
                Err(e) => ItemOutcome::Failed {
                    job_id: Some(job_id),
                    error: format!("unable to get status of job {}: {}", job_id, e),
                },
            }
        })
    }
}

fn player_link(base: &str, item_id: Uuid) -> String {
    format!("{}/#/item/{}", base.trim_end_matches('/'), item_id)
}
