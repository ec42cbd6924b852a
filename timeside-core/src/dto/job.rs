//! Job DTOs

use serde::{Deserialize, Serialize};

use crate::domain::job::JobStatus;

/// Request to create a job binding an item to a pipeline within a collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateJob {
    /// Pipeline hyperlink
    pub experience: String,
    /// Collection hyperlink
    pub selection: String,
    /// Item hyperlink
    pub item: String,
    pub status: JobStatus,
}
