//! Data model module
//!
//! This module provides the synthetic object graph exercised by the codecs:
//! - **`LargeRecord`** - the root entity with 200 ordinal fields
//! - **`MidRecord`** - nested record referenced up to 20 times per root
//! - **`DeepRecord`** - leaf record with a string and a binary blob
//! - **`Corpus`** - the replicated sequence of roots encoded per iteration
//!
//! Optional fields are `Option<T>`; the non-nullable primitives of
//! `LargeRecord` default to zero. None of the types implement `Serialize`
//! directly: they implement [`PolicySerialize`](crate::nulls::PolicySerialize)
//! so a codec decides at runtime whether absent fields become null markers.

pub mod corpus;
pub mod large_record;
pub mod model_types;

// Re-export main types for convenience
pub use corpus::Corpus;
pub use large_record::LargeRecord;
pub use model_types::{DeepRecord, FieldDescriptor, FieldKind, MidRecord};
