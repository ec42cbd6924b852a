//! Pipeline (experience) endpoints

use crate::TimesideClient;
use crate::error::Result;
use reqwest::Method;
use timeside_core::domain::pipeline::Pipeline;
use timeside_core::dto::pipeline::PipelineBody;
use uuid::Uuid;

impl TimesideClient {
    /// List all pipelines
    pub async fn list_pipelines(&self) -> Result<Vec<Pipeline>> {
        let response = self.request(Method::GET, "/experiences/").send().await?;

        self.handle_response(response).await
    }

    /// Create a pipeline
    pub async fn create_pipeline(&self, body: &PipelineBody) -> Result<Pipeline> {
        let response = self
            .request(Method::POST, "/experiences/")
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Replace the title and preset set of an existing pipeline
    pub async fn update_pipeline(&self, id: Uuid, body: &PipelineBody) -> Result<Pipeline> {
        let path = format!("/experiences/{}/", id);
        let response = self.request(Method::PUT, &path).json(body).send().await?;

        self.handle_response(response).await
    }
}
