//! TimeSide Core
//!
//! Core types shared by the TimeSide batch importer.
//!
//! This crate contains:
//! - Domain types: remote resources (Collection, Pipeline, Item, Job) and
//!   the batch input record
//! - DTOs: request bodies sent to the TimeSide API
//! - Reference helpers: hyperlink paths and host stripping

pub mod domain;
pub mod dto;
pub mod reference;
