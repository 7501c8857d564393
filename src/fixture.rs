//! Deterministic fixture generation
//!
//! One canonical `LargeRecord` is built with a fixed subset of fields set
//! (5 of 20 nested references, a few of each primitive, boxed, collection
//! and string group). Everything else stays absent or zero.

use crate::model::{Corpus, DeepRecord, LargeRecord, MidRecord};
use std::collections::BTreeMap;

/// Default number of records in a benchmark corpus
pub const DEFAULT_CORPUS_SIZE: usize = 20;

/// Length of the blob carried by every populated `DeepRecord`
pub const BLOB_LEN: usize = 500;

/// Build the canonical sparsely-populated record
pub fn create_record() -> LargeRecord {
    let mut record = LargeRecord {
        ref1: Some(create_mid_record()),
        ref5: Some(create_mid_record()),
        ref10: Some(create_mid_record()),
        ref15: Some(create_mid_record()),
        ref20: Some(create_mid_record()),
        ..Default::default()
    };

    record.field21 = 42;
    record.field22 = 100;
    record.field23 = 200;
    record.field31 = 123_456_789;
    record.field32 = 987_654_321;
    record.field41 = 3.14159;
    record.field42 = 2.71828;
    record.field51 = true;
    record.field52 = false;
    record.field61 = 1.23;
    record.field62 = 4.56;
    record.field71 = 100;
    record.field81 = 1;
    record.field91 = 'A';
    record.field92 = 'B';

    record.field101 = Some(999);
    record.field102 = Some(888);
    record.field106 = Some(777_777);
    record.field109 = Some(9.99);
    record.field111 = Some(true);

    record.field113 = Some(vec![
        "Item 1".to_string(),
        "Item 2".to_string(),
        "Item 3".to_string(),
    ]);
    record.field114 = Some(vec![10, 20, 30]);
    record.field115 = Some(BTreeMap::from([
        ("Key1".to_string(), "Value1".to_string()),
        ("Key2".to_string(), "Value2".to_string()),
    ]));

    record.field116 = Some(sample_text(116));
    record.field120 = Some(sample_text(120));
    record.field130 = Some(sample_text(130));
    record.field140 = Some(sample_text(140));
    record.field150 = Some(sample_text(150));
    record.field160 = Some(sample_text(160));
    record.field170 = Some(sample_text(170));
    record.field180 = Some(sample_text(180));
    record.field190 = Some(sample_text(190));
    record.field200 = Some(sample_text(200));

    record
}

/// Replicate the canonical record `size` times
pub fn create_corpus(size: usize) -> Corpus {
    Corpus::replicate(create_record(), size)
}

fn create_mid_record() -> MidRecord {
    MidRecord {
        field1: Some("Nested field 1".to_string()),
        field2: Some("Nested field 2".to_string()),
        field3: Some("Nested field 3".to_string()),
        long_field1: Some(123_456_789),
        int_field1: Some(42),
        double_field1: Some(3.14159),
        deep_nested: Some(DeepRecord {
            text: Some("Deep nested data".to_string()),
            blob: Some(vec![b'A'; BLOB_LEN]),
        }),
        ..Default::default()
    }
}

fn sample_text(ordinal: u32) -> String {
    format!("Sample data for field {}", ordinal)
}
