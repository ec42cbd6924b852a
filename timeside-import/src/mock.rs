//! In-memory remote platform for engine tests
//!
//! Records every call by operation name and can be rigged to reject
//! specific operations or items.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use timeside_client::{ClientError, RemoteClient, Result};
use timeside_core::domain::collection::Collection;
use timeside_core::domain::item::{Item, ItemSource};
use timeside_core::domain::job::{Job, JobStatus};
use timeside_core::domain::pipeline::Pipeline;
use timeside_core::dto::item::CreateItem;
use timeside_core::dto::job::CreateJob;
use timeside_core::dto::pipeline::PipelineBody;
use uuid::Uuid;

#[derive(Default)]
struct State {
    calls: Vec<&'static str>,
    collections: Vec<Collection>,
    pipelines: Vec<Pipeline>,
    items: Vec<(Item, ItemSource)>,
    jobs: HashMap<Uuid, CreateJob>,
    retrievals: HashMap<Uuid, usize>,
}

/// Scripted [`RemoteClient`]
#[derive(Default)]
pub struct MockRemote {
    state: Mutex<State>,
    /// Status returned by the nth retrieval of any job; the last entry repeats
    job_script: Vec<JobStatus>,
    /// Retrieval indexes (0-based, per job) that fail with a transport-like error
    failing_retrievals: HashSet<usize>,
    /// Titles whose item creation is rejected
    failing_items: HashSet<String>,
    reject_collection: bool,
    reject_pipeline: bool,
    fail_listing: bool,
}

impl MockRemote {
    /// Jobs complete on the first status check
    pub fn new() -> Self {
        Self {
            job_script: vec![JobStatus::Done],
            ..Default::default()
        }
    }

    pub fn with_job_script(mut self, script: &[JobStatus]) -> Self {
        self.job_script = script.to_vec();
        self
    }

    pub fn failing_retrieval(mut self, attempt: usize) -> Self {
        self.failing_retrievals.insert(attempt);
        self
    }

    pub fn failing_item(mut self, title: &str) -> Self {
        self.failing_items.insert(title.to_string());
        self
    }

    pub fn rejecting_collection(mut self) -> Self {
        self.reject_collection = true;
        self
    }

    pub fn rejecting_pipeline(mut self) -> Self {
        self.reject_pipeline = true;
        self
    }

    /// Both listing operations answer with a server error
    pub fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    pub fn with_collection(self, title: &str) -> Self {
        self.state.lock().unwrap().collections.push(Collection {
            id: Uuid::new_v4(),
            title: title.to_string(),
            items: Vec::new(),
        });
        self
    }

    pub fn with_pipeline(self, title: &str, presets: &[&str]) -> Self {
        self.state.lock().unwrap().pipelines.push(Pipeline {
            id: Uuid::new_v4(),
            title: title.to_string(),
            presets: presets.iter().map(|p| p.to_string()).collect(),
        });
        self
    }

    /// Number of calls made to `operation`
    pub fn count(&self, operation: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|c| **c == operation)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    /// Calls that write to the server
    pub fn write_calls(&self) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|c| !matches!(**c, "list_collections" | "list_pipelines" | "retrieve_job"))
            .count()
    }

    pub fn collections(&self) -> Vec<Collection> {
        self.state.lock().unwrap().collections.clone()
    }

    pub fn pipelines(&self) -> Vec<Pipeline> {
        self.state.lock().unwrap().pipelines.clone()
    }

    pub fn item_sources(&self) -> Vec<ItemSource> {
        self.state
            .lock()
            .unwrap()
            .items
            .iter()
            .map(|(_, source)| source.clone())
            .collect()
    }

    pub fn jobs(&self) -> Vec<CreateJob> {
        self.state.lock().unwrap().jobs.values().cloned().collect()
    }

    fn record(&self, operation: &'static str) {
        self.state.lock().unwrap().calls.push(operation);
    }
}

fn rejected(body: &str) -> ClientError {
    ClientError::api_error(400, body)
}

#[async_trait]
impl RemoteClient for MockRemote {
    async fn list_collections(&self) -> Result<Vec<Collection>> {
        self.record("list_collections");
        if self.fail_listing {
            return Err(ClientError::api_error(503, "maintenance"));
        }
        Ok(self.collections())
    }

    async fn create_collection(&self, title: &str) -> Result<Collection> {
        self.record("create_collection");
        if self.reject_collection {
            return Err(rejected(r#"{"title":["rejected"]}"#));
        }
        let collection = Collection {
            id: Uuid::new_v4(),
            title: title.to_string(),
            items: Vec::new(),
        };
        self.state.lock().unwrap().collections.push(collection.clone());
        Ok(collection)
    }

    async fn list_pipelines(&self) -> Result<Vec<Pipeline>> {
        self.record("list_pipelines");
        if self.fail_listing {
            return Err(ClientError::api_error(503, "maintenance"));
        }
        Ok(self.pipelines())
    }

    async fn create_pipeline(&self, body: &PipelineBody) -> Result<Pipeline> {
        self.record("create_pipeline");
        if self.reject_pipeline {
            return Err(rejected(r#"{"presets":["rejected"]}"#));
        }
        let pipeline = Pipeline {
            id: Uuid::new_v4(),
            title: body.title.clone(),
            presets: body.presets.clone(),
        };
        self.state.lock().unwrap().pipelines.push(pipeline.clone());
        Ok(pipeline)
    }

    async fn update_pipeline(&self, id: Uuid, body: &PipelineBody) -> Result<Pipeline> {
        self.record("update_pipeline");
        let mut state = self.state.lock().unwrap();
        let pipeline = state
            .pipelines
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ClientError::api_error(404, "not found"))?;
        pipeline.title = body.title.clone();
        pipeline.presets = body.presets.clone();
        Ok(pipeline.clone())
    }

    async fn create_item(&self, req: &CreateItem) -> Result<Item> {
        self.record("create_item");
        if self.failing_items.contains(&req.title) {
            return Err(rejected(r#"{"source":["unreachable"]}"#));
        }
        let item = Item {
            id: Uuid::new_v4(),
            title: req.title.clone(),
            description: req.description.clone(),
            external_uri: None,
            provider: None,
            source_url: None,
        };
        self.state
            .lock()
            .unwrap()
            .items
            .push((item.clone(), req.source.clone()));
        Ok(item)
    }

    async fn append_to_collection(&self, collection_id: Uuid, item_ref: &str) -> Result<Collection> {
        self.record("append_to_collection");
        let mut state = self.state.lock().unwrap();
        let collection = state
            .collections
            .iter_mut()
            .find(|c| c.id == collection_id)
            .ok_or_else(|| ClientError::api_error(404, "not found"))?;
        collection.items.push(item_ref.to_string());
        Ok(collection.clone())
    }

    async fn create_job(&self, req: &CreateJob) -> Result<Job> {
        self.record("create_job");
        let id = Uuid::new_v4();
        self.state.lock().unwrap().jobs.insert(id, req.clone());
        Ok(Job {
            id,
            status: req.status,
            experience: Some(req.experience.clone()),
            selection: Some(req.selection.clone()),
            item: Some(req.item.clone()),
        })
    }

    async fn retrieve_job(&self, id: Uuid) -> Result<Job> {
        self.record("retrieve_job");
        let attempt = {
            let mut state = self.state.lock().unwrap();
            let counter = state.retrievals.entry(id).or_insert(0);
            let attempt = *counter;
            *counter += 1;
            attempt
        };
        if self.failing_retrievals.contains(&attempt) {
            return Err(ClientError::api_error(502, "bad gateway"));
        }
        let status = self
            .job_script
            .get(attempt)
            .or(self.job_script.last())
            .copied()
            .unwrap_or(JobStatus::Pending);
        Ok(Job {
            id,
            status,
            experience: None,
            selection: None,
            item: None,
        })
    }
}
