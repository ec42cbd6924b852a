//! TimeSide batch import engine
//!
//! Imports a batch of media records into a TimeSide server:
//! - Service layer: resource reconciliation (collection + pipeline), source
//!   resolution and per-item submission
//! - Scheduler layer: job polling with progressive backoff and the batch
//!   fan-out that runs one pipeline per record
//!
//! Every remote call goes through [`timeside_client::RemoteClient`], which is
//! constructed once by the caller and shared by all item pipelines.

pub mod app;
pub mod config;
pub mod error;
pub mod loader;
pub mod report;
pub mod scheduler;
pub mod service;

#[cfg(test)]
mod mock;

pub use app::run_import;
pub use error::{ImportError, Result};
pub use loader::{Batch, load_batch};
pub use report::{BatchSummary, ItemOutcome, ItemReport};
pub use scheduler::{BackoffSchedule, BatchOrchestrator, BatchSettings, JobPoller, PollPolicy};
