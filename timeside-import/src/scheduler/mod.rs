//! Scheduler layer
//!
//! Polls submitted jobs until they finish and fans a batch out into one
//! concurrent pipeline per record.

pub mod backoff;
pub mod batch;
pub mod poller;

pub use backoff::BackoffSchedule;
pub use batch::{BatchOrchestrator, BatchSettings};
pub use poller::{JobPoller, PollOutcome, PollPolicy, PollReport};
