//! Pipeline DTOs

use serde::{Deserialize, Serialize};

/// Full pipeline body, used for both creation and in-place update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineBody {
    pub title: String,
    pub presets: Vec<String>,
}
