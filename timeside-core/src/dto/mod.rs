//! Data Transfer Objects sent to the TimeSide API
//!
//! Request bodies are kept separate from the domain types: the server adds
//! fields on responses (uuid, dates, owners) that the importer never sends.

pub mod auth;
pub mod collection;
pub mod item;
pub mod job;
pub mod pipeline;
