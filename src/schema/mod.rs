//! Schema module
//!
//! This module provides the schema-constrained binary representation of the
//! data model: `prost` message types and the projection that fills them.
//!
//! The projection is lossless for present values and deterministic: the
//! same record always yields the same message and the same wire bytes.

pub mod projection;
pub mod schema_types;

// Re-export main types for convenience
pub use projection::{project, project_corpus, project_corpus_with, project_with, NestedPolicy};
pub use schema_types::{DeepRecordMessage, LargeRecordList, LargeRecordMessage, MidRecordMessage};
