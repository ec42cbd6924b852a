//! Job (task) endpoints

use crate::TimesideClient;
use crate::error::Result;
use reqwest::Method;
use timeside_core::domain::job::Job;
use timeside_core::dto::job::CreateJob;
use uuid::Uuid;

impl TimesideClient {
    /// Submit a job
    pub async fn create_job(&self, req: &CreateJob) -> Result<Job> {
        let response = self
            .request(Method::POST, "/tasks/")
            .json(req)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get a job by ID
    pub async fn retrieve_job(&self, id: Uuid) -> Result<Job> {
        let path = format!("/tasks/{}/", id);
        let response = self.request(Method::GET, &path).send().await?;

        self.handle_response(response).await
    }
}
