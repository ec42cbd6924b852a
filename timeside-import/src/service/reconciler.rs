//! Resource reconciliation
//!
//! Get-or-create of the two resources every item pipeline shares: the
//! collection items are added to and the pipeline their jobs run.
//!
//! Any failure here, listing included, is a `ResourceCreation` error and
//! aborts the batch.
//!
//! Meant to run once per batch, before any item is submitted. Two importers
//! reconciling the same titles concurrently can both create a resource, and
//! pipeline updates are last-writer-wins.

use std::sync::Arc;
use timeside_client::RemoteClient;
use timeside_core::domain::collection::Collection;
use timeside_core::domain::pipeline::Pipeline;
use timeside_core::dto::pipeline::PipelineBody;
use tracing::{info, warn};

use crate::error::{ImportError, Result};

/// Ensures the shared collection and pipeline exist
#[derive(Clone)]
pub struct ResourceReconciler {
    client: Arc<dyn RemoteClient>,
}

impl ResourceReconciler {
    pub fn new(client: Arc<dyn RemoteClient>) -> Self {
        Self { client }
    }

    /// Returns the first collection titled `title`, creating it if absent
    ///
    /// An existing collection is returned as is; the title is its identity.
    pub async fn ensure_collection(&self, title: &str) -> Result<Collection> {
        let collections = self.client.list_collections().await.map_err(|e| {
            warn!(title, error = %e, "Collection listing failed");
            ImportError::resource_creation("collection", e)
        })?;
        if let Some(existing) = collections.into_iter().find(|c| c.title == title) {
            info!(collection_id = %existing.id, title, "Using existing collection");
            return Ok(existing);
        }

        let created = self
            .client
            .create_collection(title)
            .await
            .map_err(|e| {
                warn!(title, error = %e, "Collection creation rejected");
                ImportError::resource_creation("collection", e)
            })?;

        info!(collection_id = %created.id, title, "Created collection");
        Ok(created)
    }

    /// Returns the pipeline titled `title` with exactly `desired` presets
    ///
    /// An existing pipeline whose presets differ (order included, hosts
    /// ignored) is updated in place rather than recreated.
    pub async fn ensure_pipeline(&self, title: &str, desired: &[String]) -> Result<Pipeline> {
        let body = PipelineBody {
            title: title.to_string(),
            presets: desired.to_vec(),
        };

        let pipelines = self.client.list_pipelines().await.map_err(|e| {
            warn!(title, error = %e, "Pipeline listing failed");
            ImportError::resource_creation("pipeline", e)
        })?;
        if let Some(existing) = pipelines.into_iter().find(|p| p.title == title) {
            if existing.matches_presets(desired) {
                info!(pipeline_id = %existing.id, title, "Using existing pipeline");
                return Ok(existing);
            }

            info!(
                pipeline_id = %existing.id,
                title,
                current = ?existing.preset_paths(),
                "Pipeline presets drifted, updating"
            );
            return self
                .client
                .update_pipeline(existing.id, &body)
                .await
                .map_err(|e| {
                    warn!(title, error = %e, "Pipeline update rejected");
                    ImportError::resource_creation("pipeline", e)
                });
        }

        let created = self.client.create_pipeline(&body).await.map_err(|e| {
            warn!(title, error = %e, "Pipeline creation rejected");
            ImportError::resource_creation("pipeline", e)
        })?;

        info!(pipeline_id = %created.id, title, "Created pipeline");
        Ok(created)
    }
}
