//! Service layer
//!
//! Business logic run against the remote platform: making sure the shared
//! collection and pipeline exist, resolving where each record's media comes
//! from, and submitting one record as item + membership + job.

mod reconciler;
mod source;
mod submitter;

pub use reconciler::ResourceReconciler;
pub use source::resolve_source;
pub use submitter::{ItemSubmitter, PreparedRecord, Submission, prepare};
