//! Remote platform seam
//!
//! The batch engine only knows this trait. [`TimesideClient`] implements it
//! over HTTP; tests implement it in memory.

use async_trait::async_trait;
use timeside_core::domain::collection::Collection;
use timeside_core::domain::item::Item;
use timeside_core::domain::job::Job;
use timeside_core::domain::pipeline::Pipeline;
use timeside_core::dto::item::CreateItem;
use timeside_core::dto::job::CreateJob;
use timeside_core::dto::pipeline::PipelineBody;
use uuid::Uuid;

use crate::TimesideClient;
use crate::error::Result;

/// Operations the importer performs against the processing platform
#[async_trait]
pub trait RemoteClient: Send + Sync {
    async fn list_collections(&self) -> Result<Vec<Collection>>;

    async fn create_collection(&self, title: &str) -> Result<Collection>;

    async fn list_pipelines(&self) -> Result<Vec<Pipeline>>;

    async fn create_pipeline(&self, body: &PipelineBody) -> Result<Pipeline>;

    async fn update_pipeline(&self, id: Uuid, body: &PipelineBody) -> Result<Pipeline>;

    async fn create_item(&self, req: &CreateItem) -> Result<Item>;

    /// Adds one item to a collection without touching existing members
    async fn append_to_collection(&self, collection_id: Uuid, item_ref: &str) -> Result<Collection>;

    async fn create_job(&self, req: &CreateJob) -> Result<Job>;

    async fn retrieve_job(&self, id: Uuid) -> Result<Job>;
}

#[async_trait]
impl RemoteClient for TimesideClient {
    async fn list_collections(&self) -> Result<Vec<Collection>> {
        TimesideClient::list_collections(self).await
    }

    async fn create_collection(&self, title: &str) -> Result<Collection> {
        TimesideClient::create_collection(self, title).await
    }

    async fn list_pipelines(&self) -> Result<Vec<Pipeline>> {
        TimesideClient::list_pipelines(self).await
    }

    async fn create_pipeline(&self, body: &PipelineBody) -> Result<Pipeline> {
        TimesideClient::create_pipeline(self, body).await
    }

    async fn update_pipeline(&self, id: Uuid, body: &PipelineBody) -> Result<Pipeline> {
        TimesideClient::update_pipeline(self, id, body).await
    }

    async fn create_item(&self, req: &CreateItem) -> Result<Item> {
        TimesideClient::create_item(self, req).await
    }

    async fn append_to_collection(&self, collection_id: Uuid, item_ref: &str) -> Result<Collection> {
        TimesideClient::append_to_collection(self, collection_id, item_ref).await
    }

    async fn create_job(&self, req: &CreateJob) -> Result<Job> {
        TimesideClient::create_job(self, req).await
    }

    async fn retrieve_job(&self, id: Uuid) -> Result<Job> {
        TimesideClient::retrieve_job(self, id).await
    }
}
