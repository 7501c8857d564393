//! # Codec Bench
//!
//! Measures and compares the time and space cost of encoding one large,
//! sparsely-populated object graph through several serialization codecs.
//!
//! ## Modules
//!
//! - **Model Module**: the `LargeRecord` / `MidRecord` / `DeepRecord` graph and the `Corpus`
//! - **Fixture Module**: deterministic construction of the benchmark corpus
//! - **Schema Module**: `prost` messages and the projection onto them
//! - **Codec Module**: JSON, MessagePack and Protobuf adapters behind one trait
//! - **Bench Module**: warmup, timing, baseline deltas and cross-configuration totals
//!
//! ## Example
//!
//! ```rust
//! use codec_bench::codec::{Codec, JsonCodec, ProtobufCodec};
//! use codec_bench::fixture::create_corpus;
//! use codec_bench::nulls::NullPolicy;
//!
//! let corpus = create_corpus(20);
//! let json = JsonCodec::new(NullPolicy::ExcludeNulls).encode(&corpus)?;
//! let protobuf = ProtobufCodec::new().encode(&corpus)?;
//! assert!(protobuf.size() < json.size());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![warn(clippy::all)]

// Re-export core error types
pub use error::{Error, Result};

#[macro_use]
mod macros;

// Core modules
pub mod error;
pub mod nulls;
pub mod model;
pub mod fixture;
pub mod schema;
pub mod codec;
pub mod bench;

// Re-export commonly used types
pub mod prelude {
    //! Common types and traits for convenient importing

    pub use crate::bench::{run_configurations, BenchConfig, BenchmarkRunner, Direction, TotalTimes};
    pub use crate::codec::{standard_codecs, Codec, Encoded};
    pub use crate::error::{BenchError, CodecError, Error, Result};
    pub use crate::fixture::{create_corpus, create_record};
    pub use crate::model::{Corpus, LargeRecord};
    pub use crate::nulls::NullPolicy;
}

// Version information
/// The version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of this crate
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
        assert_eq!(CRATE_NAME, "codec-bench");
    }
}
