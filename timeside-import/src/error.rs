//! Import error taxonomy

use std::path::PathBuf;
use thiserror::Error;
use timeside_client::ClientError;
use timeside_core::domain::record::MissingField;

/// Result type alias for import operations
pub type Result<T> = std::result::Result<T, ImportError>;

/// Errors raised by the import engine
///
/// `Validation`, `SourceResolution` and `Remote` only ever end one item's
/// pipeline. `EmptyBatch`, `Load` and `ResourceCreation` abort the batch.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Nothing to import
    #[error("empty batch: no records to import")]
    EmptyBatch,

    /// Batch file unreadable or malformed
    #[error("failed to load batch {}: {reason}", path.display())]
    Load { path: PathBuf, reason: String },

    /// Record rejected before any remote call
    #[error(transparent)]
    Validation(#[from] MissingField),

    /// Media source could not be resolved locally
    #[error("cannot resolve source '{locator}': {reason}")]
    SourceResolution { locator: String, reason: String },

    /// Shared collection or pipeline rejected by the server
    #[error("unable to create {resource}: {body}")]
    ResourceCreation {
        resource: &'static str,
        /// Remote error body, verbatim
        body: String,
    },

    /// Remote call rejected or not delivered
    #[error("remote call failed: {0}")]
    Remote(#[from] ClientError),
}

impl ImportError {
    /// Wrap a failed reconciliation call
    pub fn resource_creation(resource: &'static str, err: ClientError) -> Self {
        let body = match err.body() {
            Some(body) => body.to_string(),
            None => err.to_string(),
        };
        Self::ResourceCreation { resource, body }
    }
}
