//! Collection (selection) endpoints

use crate::TimesideClient;
use crate::error::Result;
use reqwest::Method;
use timeside_core::domain::collection::Collection;
use timeside_core::dto::collection::{AppendItems, CreateCollection};
use uuid::Uuid;

impl TimesideClient {
    /// List all collections visible to the current user
    pub async fn list_collections(&self) -> Result<Vec<Collection>> {
        let response = self.request(Method::GET, "/selections/").send().await?;

        self.handle_response(response).await
    }

    /// Create a collection
    pub async fn create_collection(&self, title: &str) -> Result<Collection> {
        let response = self
            .request(Method::POST, "/selections/")
            .json(&CreateCollection {
                title: title.to_string(),
            })
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Add one item to a collection
    ///
    /// Issued as a PATCH carrying only the new item; existing membership is
    /// left to the server and never rewritten from here.
    pub async fn append_to_collection(&self, collection_id: Uuid, item_ref: &str) -> Result<Collection> {
        let path = format!("/selections/{}/", collection_id);
        let response = self
            .request(Method::PATCH, &path)
            .json(&AppendItems {
                items: vec![item_ref.to_string()],
            })
            .send()
            .await?;

        self.handle_response(response).await
    }
}
