//! Protobuf codec backed by `prost`
//!
//! The schema has no null markers, so the codec ignores the null policy and
//! serves as a fixed reference point across configurations.
//!
//! [`ProtobufCodec`] projects the corpus on every encode, so its timings
//! include projection. [`PreparedProtobufCodec`] projects once at
//! construction and times only the wire write.

use super::{Codec, Encoded};
use crate::error::{CodecError, CodecResult};
use crate::model::Corpus;
use crate::schema::{project_corpus, LargeRecordList};
use prost::Message;

/// Protobuf over the schema projection
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtobufCodec;

impl ProtobufCodec {
    /// Metrics key
    pub const NAME: &'static str = "Protobuf";

    /// Create the codec
    pub fn new() -> Self {
        Self
    }
}

impl Codec for ProtobufCodec {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn encode(&self, corpus: &Corpus) -> CodecResult<Encoded> {
        write_list(Self::NAME, &project_corpus(corpus))
    }

    fn decode(&self, encoded: &Encoded) -> CodecResult<usize> {
        decode_list(Self::NAME, encoded)
    }
}

/// Protobuf over a projection built once up front
#[derive(Debug, Clone)]
pub struct PreparedProtobufCodec {
    list: LargeRecordList,
}

impl PreparedProtobufCodec {
    /// Metrics key
    pub const NAME: &'static str = "ProtobufPrepared";

    /// Project `corpus` now; later encodes only write the wire bytes
    pub fn new(corpus: &Corpus) -> Self {
        Self {
            list: project_corpus(corpus),
        }
    }
}

impl Codec for PreparedProtobufCodec {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// `corpus` must be the one the codec was prepared from; only its length
    /// is checked.
    fn encode(&self, corpus: &Corpus) -> CodecResult<Encoded> {
        if corpus.len() != self.list.items.len() {
            return Err(CodecError::EncodingFailed {
                codec: Self::NAME.to_string(),
                reason: format!(
                    "prepared for {} records, given {}",
                    self.list.items.len(),
                    corpus.len()
                ),
            });
        }
        write_list(Self::NAME, &self.list)
    }

    fn decode(&self, encoded: &Encoded) -> CodecResult<usize> {
        decode_list(Self::NAME, encoded)
    }
}

fn write_list(codec: &str, list: &LargeRecordList) -> CodecResult<Encoded> {
    let mut buf = Vec::with_capacity(list.encoded_len());
    list.encode(&mut buf)
        .map_err(|e| CodecError::EncodingFailed {
            codec: codec.to_string(),
            reason: e.to_string(),
        })?;
    Ok(Encoded::Binary(buf))
}

fn decode_list(codec: &str, encoded: &Encoded) -> CodecResult<usize> {
    LargeRecordList::decode(encoded.as_bytes())
        .map(|list| list.items.len())
        .map_err(|e| CodecError::DecodingFailed {
            codec: codec.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::create_corpus;

    #[test]
    fn test_string_list_order_survives() {
        let encoded = ProtobufCodec::new().encode(&create_corpus(2)).unwrap();
        let list = LargeRecordList::decode(encoded.as_bytes()).unwrap();
        assert_eq!(list.items[0].field113, vec!["Item 1", "Item 2", "Item 3"]);
        assert_eq!(list.items[1].field114, vec![10, 20, 30]);
        assert_eq!(list.items[1].field115.get("Key2").map(String::as_str), Some("Value2"));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let corpus = create_corpus(3);
        let codec = ProtobufCodec::new();
        assert_eq!(codec.encode(&corpus).unwrap(), codec.encode(&create_corpus(3)).unwrap());
    }

    #[test]
    fn test_prepared_matches_per_call_projection() {
        let corpus = create_corpus(3);
        let prepared = PreparedProtobufCodec::new(&corpus);
        assert_eq!(
            prepared.encode(&corpus).unwrap(),
            ProtobufCodec::new().encode(&corpus).unwrap()
        );
        let encoded = prepared.encode(&corpus).unwrap();
        assert_eq!(prepared.decode(&encoded).unwrap(), 3);
    }

    #[test]
    fn test_prepared_rejects_other_corpus() {
        let prepared = PreparedProtobufCodec::new(&create_corpus(3));
        let err = prepared.encode(&create_corpus(2)).unwrap_err();
        assert_eq!(err.codec(), "ProtobufPrepared");
        assert!(err.to_string().contains("prepared for 3 records, given 2"));
    }

    #[test]
    fn test_empty_corpus_encodes_to_nothing() {
        let encoded = ProtobufCodec::new().encode(&create_corpus(0)).unwrap();
        assert_eq!(encoded.size(), 0);
    }
}
