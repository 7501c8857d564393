//! Codec adapter module
//!
//! This module provides a uniform wrapper around each serialization backend:
//! - **`JsonCodec`** - `serde_json` writing bytes, the default baseline
//! - **`JsonTextCodec`** - `serde_json` writing a `String`
//! - **`MessagePackCodec`** - `rmp-serde` with structs encoded as maps
//! - **`ProtobufCodec`** - `prost` over the schema projection
//! - **`PreparedProtobufCodec`** - `prost` over a projection built once per
//!   corpus
//!
//! Adapters are stateless per call. A backend error is reported as a
//! [`CodecError`](crate::error::CodecError) naming the codec; nothing is
//! retried.

pub mod codec_json;
pub mod codec_msgpack;
pub mod codec_protobuf;

// Re-export main types for convenience
pub use codec_json::{JsonCodec, JsonTextCodec};
pub use codec_msgpack::MessagePackCodec;
pub use codec_protobuf::{PreparedProtobufCodec, ProtobufCodec};

use crate::error::CodecResult;
use crate::model::Corpus;
use crate::nulls::NullPolicy;

/// Output of one encode call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoded {
    /// Binary output
    Binary(Vec<u8>),
    /// Text output
    Text(String),
}

impl Encoded {
    /// Size in bytes; text is measured as its UTF-8 length
    pub fn size(&self) -> usize {
        self.as_bytes().len()
    }

    /// Raw bytes of the output
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Encoded::Binary(bytes) => bytes,
            Encoded::Text(text) => text.as_bytes(),
        }
    }
}

/// A serialization backend under test
pub trait Codec: Send + Sync {
    /// Stable name used as the metrics key
    fn name(&self) -> &'static str;

    /// Encode the whole corpus
    fn encode(&self, corpus: &Corpus) -> CodecResult<Encoded>;

    /// Decode a previously encoded corpus, returning the number of records
    fn decode(&self, encoded: &Encoded) -> CodecResult<usize>;
}

/// The codecs compared in every suite, baseline first
pub fn standard_codecs(policy: NullPolicy) -> Vec<Box<dyn Codec>> {
    vec![
        Box::new(JsonCodec::new(policy)),
        Box::new(JsonTextCodec::new(policy)),
        Box::new(MessagePackCodec::new(policy)),
        Box::new(ProtobufCodec::new()),
    ]
}

/// The standard codecs plus codecs prepared from `corpus`, in report order
pub fn suite_codecs(policy: NullPolicy, corpus: &Corpus) -> Vec<Box<dyn Codec>> {
    let mut codecs = standard_codecs(policy);
    codecs.push(Box::new(PreparedProtobufCodec::new(corpus)));
    codecs
}

/// Names of the codecs returned by [`standard_codecs`]
pub const STANDARD_CODEC_NAMES: [&str; 4] = [
    JsonCodec::NAME,
    JsonTextCodec::NAME,
    MessagePackCodec::NAME,
    ProtobufCodec::NAME,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::create_corpus;

    #[test]
    fn test_text_size_is_utf8_length() {
        let encoded = Encoded::Text("é".to_string());
        assert_eq!(encoded.size(), 2);
    }

    #[test]
    fn test_standard_codec_order() {
        let names: Vec<_> = standard_codecs(NullPolicy::IncludeNulls)
            .iter()
            .map(|codec| codec.name())
            .collect();
        assert_eq!(names, STANDARD_CODEC_NAMES);
    }

    #[test]
    fn test_suite_appends_prepared_protobuf() {
        let corpus = create_corpus(2);
        let names: Vec<_> = suite_codecs(NullPolicy::ExcludeNulls, &corpus)
            .iter()
            .map(|codec| codec.name())
            .collect();
        assert_eq!(&names[..4], &STANDARD_CODEC_NAMES[..]);
        assert_eq!(names[4], PreparedProtobufCodec::NAME);
    }

    #[test]
    fn test_every_codec_produces_output() {
        let corpus = create_corpus(2);
        for policy in NullPolicy::ALL {
            for codec in suite_codecs(policy, &corpus) {
                let encoded = codec.encode(&corpus).unwrap();
                assert!(encoded.size() > 0, "{} produced no output", codec.name());
                assert_eq!(codec.decode(&encoded).unwrap(), 2);
            }
        }
    }
}
