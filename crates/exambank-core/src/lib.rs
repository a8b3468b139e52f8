//! exambank-core: question-bank data model, validation and emission.
//!
//! This crate defines the exam-question record, the rules every record and
//! the collection as a whole must satisfy, and the pipeline that turns
//! authored buckets into a single JSON document.

pub mod bank;
pub mod bucket;
pub mod builder;
pub mod catalog;
pub mod config;
pub mod emitter;
pub mod error;
pub mod ids;
pub mod model;
pub mod parser;
pub mod pipeline;
