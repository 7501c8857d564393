//! Property tests for baseline deltas, accumulation and null handling

use codec_bench::bench::{percent_delta, Direction, TotalTimes};
use codec_bench::codec::{Codec, JsonCodec, MessagePackCodec};
use codec_bench::model::{Corpus, LargeRecord};
use codec_bench::nulls::NullPolicy;
use proptest::prelude::*;

proptest! {
    #[test]
    fn delta_sign_follows_comparison(value in 1u32..1_000_000, baseline in 1u32..1_000_000) {
        let delta = percent_delta("size", f64::from(value), f64::from(baseline)).unwrap();
        if value > baseline {
            prop_assert!(delta > 0.0);
        } else if value < baseline {
            prop_assert!(delta < 0.0);
        } else {
            prop_assert_eq!(delta, 0.0);
        }
    }

    #[test]
    fn totals_equal_sum_of_parts(parts in prop::collection::vec(0.0f64..1000.0, 1..16)) {
        let totals = TotalTimes::new();
        for part in &parts {
            totals.add(Direction::Serialize, "Json", *part);
        }
        let expected: f64 = parts.iter().sum();
        let total = totals.get(Direction::Serialize, "Json").unwrap();
        prop_assert!((total - expected).abs() < 1e-6);
    }

    #[test]
    fn excluded_keys_match_absent_fields(
        int in proptest::option::of(any::<i32>()),
        text in proptest::option::of("[a-z]{0,8}"),
        items in proptest::option::of(prop::collection::vec(any::<i32>(), 0..4)),
    ) {
        let record = LargeRecord {
            field103: int,
            field150: text,
            field114: items,
            ..Default::default()
        };
        let expected_keys = LargeRecord::FIELDS.len() - record.absent_fields();
        let corpus = Corpus::replicate(record.clone(), 1);

        let encoded = JsonCodec::new(NullPolicy::ExcludeNulls).encode(&corpus).unwrap();
        let value: serde_json::Value = serde_json::from_slice(encoded.as_bytes()).unwrap();
        prop_assert_eq!(value[0].as_object().unwrap().len(), expected_keys);

        let encoded = MessagePackCodec::new(NullPolicy::ExcludeNulls).encode(&corpus).unwrap();
        let back: Vec<LargeRecord> = rmp_serde::from_slice(encoded.as_bytes()).unwrap();
        prop_assert_eq!(&back[0], &record);
    }
}
