//! Core domain types
//!
//! These types mirror the TimeSide resources the importer touches. The API
//! names differ from ours: a Collection is a "selection", a Pipeline is an
//! "experience" and a Job is a "task".

pub mod collection;
pub mod item;
pub mod job;
pub mod pipeline;
pub mod record;
