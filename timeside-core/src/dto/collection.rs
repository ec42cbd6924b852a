//! Collection DTOs

use serde::{Deserialize, Serialize};

/// Request to create a collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCollection {
    pub title: String,
}

/// Partial update adding items to a collection
///
/// Sent as a PATCH: the server appends the listed items to the existing
/// membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppendItems {
    pub items: Vec<String>,
}
