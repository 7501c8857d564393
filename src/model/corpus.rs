//! Benchmark corpus

use super::large_record::LargeRecord;
use crate::nulls::{NullPolicy, PolicySerialize};
use serde::ser::Serializer;
use std::sync::Arc;

/// Ordered sequence of root records forming one benchmark payload.
///
/// Replication shares one immutable record, so every element is the same
/// logical object and nothing can mutate it while codecs read it.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<Arc<LargeRecord>>,
}

impl Corpus {
    /// Build a corpus holding `size` references to `record`
    pub fn replicate(record: LargeRecord, size: usize) -> Self {
        let record = Arc::new(record);
        Self {
            records: std::iter::repeat(record).take(size).collect(),
        }
    }

    /// Build a corpus from distinct records
    pub fn from_records(records: Vec<LargeRecord>) -> Self {
        Self {
            records: records.into_iter().map(Arc::new).collect(),
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the corpus holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in order
    pub fn iter(&self) -> impl Iterator<Item = &LargeRecord> + '_ {
        self.records.iter().map(|record| record.as_ref())
    }

    /// Record at `index`, if any
    pub fn get(&self, index: usize) -> Option<&LargeRecord> {
        self.records.get(index).map(|record| record.as_ref())
    }
}

impl PolicySerialize for Corpus {
    fn serialize_with<S: Serializer>(
        &self,
        policy: NullPolicy,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        self.records.as_slice().serialize_with(policy, serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replicate_shares_record() {
        let corpus = Corpus::replicate(LargeRecord::default(), 3);
        assert_eq!(corpus.len(), 3);
        assert!(Arc::ptr_eq(&corpus.records[0], &corpus.records[2]));
        assert_eq!(Arc::strong_count(&corpus.records[0]), 3);
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = Corpus::replicate(LargeRecord::default(), 0);
        assert!(corpus.is_empty());
        assert!(corpus.get(0).is_none());
    }
}
