//! JSON codecs backed by `serde_json`

use super::{Codec, Encoded};
use crate::error::{CodecError, CodecResult};
use crate::model::{Corpus, LargeRecord};
use crate::nulls::{NullPolicy, WithPolicy};

/// JSON written to a byte buffer
#[derive(Debug, Clone, Copy)]
pub struct JsonCodec {
    policy: NullPolicy,
}

impl JsonCodec {
    /// Metrics key
    pub const NAME: &'static str = "Json";

    /// Create a codec writing absent fields according to `policy`
    pub fn new(policy: NullPolicy) -> Self {
        Self { policy }
    }
}

impl Codec for JsonCodec {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn encode(&self, corpus: &Corpus) -> CodecResult<Encoded> {
        serde_json::to_vec(&WithPolicy::new(corpus, self.policy))
            .map(Encoded::Binary)
            .map_err(|e| encoding_failed(Self::NAME, e))
    }

    fn decode(&self, encoded: &Encoded) -> CodecResult<usize> {
        decode_records(Self::NAME, encoded)
    }
}

/// JSON written to a `String`
#[derive(Debug, Clone, Copy)]
pub struct JsonTextCodec {
    policy: NullPolicy,
}

impl JsonTextCodec {
    /// Metrics key
    pub const NAME: &'static str = "JsonText";

    /// Create a codec writing absent fields according to `policy`
    pub fn new(policy: NullPolicy) -> Self {
        Self { policy }
    }
}

impl Codec for JsonTextCodec {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn encode(&self, corpus: &Corpus) -> CodecResult<Encoded> {
        serde_json::to_string(&WithPolicy::new(corpus, self.policy))
            .map(Encoded::Text)
            .map_err(|e| encoding_failed(Self::NAME, e))
    }

    fn decode(&self, encoded: &Encoded) -> CodecResult<usize> {
        decode_records(Self::NAME, encoded)
    }
}

fn decode_records(codec: &str, encoded: &Encoded) -> CodecResult<usize> {
    serde_json::from_slice::<Vec<LargeRecord>>(encoded.as_bytes())
        .map(|records| records.len())
        .map_err(|e| CodecError::DecodingFailed {
            codec: codec.to_string(),
            reason: e.to_string(),
        })
}

fn encoding_failed(codec: &str, e: serde_json::Error) -> CodecError {
    CodecError::EncodingFailed {
        codec: codec.to_string(),
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{create_corpus, create_record};

    fn first_object(encoded: &Encoded) -> serde_json::Map<String, serde_json::Value> {
        let value: serde_json::Value = serde_json::from_slice(encoded.as_bytes()).unwrap();
        value[0].as_object().unwrap().clone()
    }

    #[test]
    fn test_absent_field_omitted_without_nulls() {
        let corpus = create_corpus(1);
        let encoded = JsonCodec::new(NullPolicy::ExcludeNulls).encode(&corpus).unwrap();
        let object = first_object(&encoded);
        assert!(!object.contains_key("field103"));
        assert!(!object.contains_key("ref2"));
        assert!(!object["ref1"].as_object().unwrap().contains_key("field4"));
    }

    #[test]
    fn test_absent_field_null_with_nulls() {
        let corpus = create_corpus(1);
        let encoded = JsonCodec::new(NullPolicy::IncludeNulls).encode(&corpus).unwrap();
        let object = first_object(&encoded);
        assert!(object["field103"].is_null());
        assert!(object["ref1"]["field4"].is_null());
    }

    #[test]
    fn test_text_and_bytes_agree() {
        let corpus = create_corpus(3);
        for policy in NullPolicy::ALL {
            let bytes = JsonCodec::new(policy).encode(&corpus).unwrap();
            let text = JsonTextCodec::new(policy).encode(&corpus).unwrap();
            assert_eq!(bytes.as_bytes(), text.as_bytes());
            assert!(matches!(text, Encoded::Text(_)));
        }
    }

    #[test]
    fn test_excluding_nulls_is_smaller() {
        let corpus = create_corpus(5);
        let with = JsonCodec::new(NullPolicy::IncludeNulls).encode(&corpus).unwrap();
        let without = JsonCodec::new(NullPolicy::ExcludeNulls).encode(&corpus).unwrap();
        assert!(without.size() < with.size());
    }

    #[test]
    fn test_roundtrip_record() {
        let corpus = create_corpus(1);
        let encoded = JsonCodec::new(NullPolicy::ExcludeNulls).encode(&corpus).unwrap();
        let records: Vec<LargeRecord> = serde_json::from_slice(encoded.as_bytes()).unwrap();
        assert_eq!(records[0], create_record());
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = JsonCodec::new(NullPolicy::IncludeNulls)
            .decode(&Encoded::Binary(b"{not json".to_vec()))
            .unwrap_err();
        assert!(matches!(err, CodecError::DecodingFailed { .. }));
        assert_eq!(err.codec(), "Json");
    }
}
