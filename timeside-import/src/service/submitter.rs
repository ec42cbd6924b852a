//! Item submission
//!
//! One record becomes three remote writes: the item, its membership in the
//! shared collection, and the job that runs the shared pipeline on it.

use std::path::Path;
use std::sync::Arc;
use timeside_client::RemoteClient;
use timeside_core::domain::collection::Collection;
use timeside_core::domain::item::{Item, ItemSource, description_for};
use timeside_core::domain::job::{Job, JobStatus};
use timeside_core::domain::pipeline::Pipeline;
use timeside_core::domain::record::InputRecord;
use timeside_core::dto::item::CreateItem;
use timeside_core::dto::job::CreateJob;
use tracing::{error, info};

use crate::error::Result;
use crate::service::source::resolve_source;

/// A record that passed validation, with its media source resolved
#[derive(Debug, Clone)]
pub struct PreparedRecord {
    pub record: InputRecord,
    pub source: ItemSource,
}

/// Remote resources created for one record
#[derive(Debug, Clone)]
pub struct Submission {
    pub item: Item,
    pub job: Job,
}

/// Validates `record` and resolves its source, without any remote call
pub async fn prepare(record: InputRecord, base_dir: &Path) -> Result<PreparedRecord> {
    record.validate()?;
    let source = resolve_source(&record.url, base_dir).await?;
    Ok(PreparedRecord { record, source })
}

/// Submits records to the remote platform
#[derive(Clone)]
pub struct ItemSubmitter {
    client: Arc<dyn RemoteClient>,
}

impl ItemSubmitter {
    pub fn new(client: Arc<dyn RemoteClient>) -> Self {
        Self { client }
    }

    /// Validates, resolves and submits one record
    ///
    /// Local failures are raised before the first remote call.
    pub async fn submit(
        &self,
        record: InputRecord,
        base_dir: &Path,
        collection: &Collection,
        pipeline: &Pipeline,
    ) -> Result<Submission> {
        let prepared = prepare(record, base_dir).await?;
        self.submit_prepared(&prepared, collection, pipeline).await
    }

    /// Creates the item, adds it to `collection` and submits its job
    ///
    /// Rejections are returned as is; nothing is retried here.
    pub async fn submit_prepared(
        &self,
        prepared: &PreparedRecord,
        collection: &Collection,
        pipeline: &Pipeline,
    ) -> Result<Submission> {
        let record = &prepared.record;
        let title = record.title.as_str();

        let item = self
            .client
            .create_item(&CreateItem {
                title: record.title.clone(),
                description: description_for(&record.name, &record.album_title),
                source: prepared.source.clone(),
            })
            .await
            .inspect_err(|e| error!(title, error = %e, "Item creation rejected"))?;

        info!(title, item_id = %item.id, source = prepared.source.kind(), "Item created");

        let item_ref = item.reference();
        self.client
            .append_to_collection(collection.id, &item_ref)
            .await
            .inspect_err(|e| error!(title, item_id = %item.id, error = %e, "Collection update rejected"))?;

        let job = self
            .client
            .create_job(&CreateJob {
                experience: pipeline.reference(),
                selection: collection.reference(),
                item: item_ref,
                status: JobStatus::Pending,
            })
            .await
            .inspect_err(|e| error!(title, item_id = %item.id, error = %e, "Job creation rejected"))?;

        info!(title, job_id = %job.id, "Job created");

        Ok(Submission { item, job })
    }
}
