//! Collection domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reference::resource_path;

/// Named, server-held group of items (a TimeSide "selection")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(rename = "uuid")]
    pub id: Uuid,
    pub title: String,
    /// Item hyperlinks, in server order
    #[serde(default)]
    pub items: Vec<String>,
}

impl Collection {
    /// Hyperlink used to reference this collection from a job
    pub fn reference(&self) -> String {
        resource_path("selections", self.id)
    }
}
