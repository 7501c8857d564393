//! MessagePack codec backed by `rmp-serde`

use super::{Codec, Encoded};
use crate::error::{CodecError, CodecResult};
use crate::model::{Corpus, LargeRecord};
use crate::nulls::{NullPolicy, WithPolicy};

/// MessagePack with structs written as maps keyed by field name
#[derive(Debug, Clone, Copy)]
pub struct MessagePackCodec {
    policy: NullPolicy,
}

impl MessagePackCodec {
    /// Metrics key
    pub const NAME: &'static str = "MessagePack";

    /// Create a codec writing absent fields according to `policy`
    pub fn new(policy: NullPolicy) -> Self {
        Self { policy }
    }
}

impl Codec for MessagePackCodec {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn encode(&self, corpus: &Corpus) -> CodecResult<Encoded> {
        rmp_serde::to_vec_named(&WithPolicy::new(corpus, self.policy))
            .map(Encoded::Binary)
            .map_err(|e| CodecError::EncodingFailed {
                codec: Self::NAME.to_string(),
                reason: e.to_string(),
            })
    }

    fn decode(&self, encoded: &Encoded) -> CodecResult<usize> {
        rmp_serde::from_slice::<Vec<LargeRecord>>(encoded.as_bytes())
            .map(|records| records.len())
            .map_err(|e| CodecError::DecodingFailed {
                codec: Self::NAME.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::JsonCodec;
    use crate::fixture::{create_corpus, create_record};

    #[test]
    fn test_roundtrip_both_policies() {
        let corpus = create_corpus(2);
        for policy in NullPolicy::ALL {
            let encoded = MessagePackCodec::new(policy).encode(&corpus).unwrap();
            let records: Vec<LargeRecord> = rmp_serde::from_slice(encoded.as_bytes()).unwrap();
            assert_eq!(records.len(), 2);
            assert_eq!(records[1], create_record());
        }
    }

    #[test]
    fn test_smaller_than_json() {
        let corpus = create_corpus(3);
        for policy in NullPolicy::ALL {
            let msgpack = MessagePackCodec::new(policy).encode(&corpus).unwrap();
            let json = JsonCodec::new(policy).encode(&corpus).unwrap();
            assert!(msgpack.size() < json.size());
        }
    }

    #[test]
    fn test_truncated_input_fails() {
        let corpus = create_corpus(1);
        let codec = MessagePackCodec::new(NullPolicy::ExcludeNulls);
        let encoded = codec.encode(&corpus).unwrap();
        let truncated = Encoded::Binary(encoded.as_bytes()[..encoded.size() / 2].to_vec());
        assert!(matches!(
            codec.decode(&truncated),
            Err(CodecError::DecodingFailed { .. })
        ));
    }
}
