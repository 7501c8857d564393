//! Report rows handed to the report emitter
//!
//! Every codec other than the baseline is expressed as a signed percentage
//! of the baseline for both time and size. A zero or non-finite baseline is
//! a precondition violation, never a NaN or infinite delta.

use super::bench_runner::{Direction, Metrics};
use crate::error::{BenchError, BenchResult, CodecError};
use crate::nulls::NullPolicy;

/// Signed percentage change of `value` relative to `baseline`
pub fn percent_delta(metric: &str, value: f64, baseline: f64) -> BenchResult<f64> {
    if baseline == 0.0 || !baseline.is_finite() {
        return Err(BenchError::Precondition {
            metric: metric.to_string(),
            value: baseline,
        });
    }
    Ok((value - baseline) / baseline * 100.0)
}

/// One line of the per-configuration comparison table
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    /// Codec name
    pub name: String,
    /// Average time per iteration in milliseconds
    pub avg_time_ms: f64,
    /// Time change relative to the baseline, in percent
    pub time_delta_pct: f64,
    /// Output size in bytes
    pub size_bytes: usize,
    /// Size change relative to the baseline, in percent
    pub size_delta_pct: f64,
    /// Time of the whole timed loop in milliseconds
    pub total_time_ms: f64,
}

impl ComparisonRow {
    /// Compare `metrics` against the baseline's
    pub fn compare(name: &str, metrics: &Metrics, baseline: &Metrics) -> BenchResult<Self> {
        Ok(Self {
            name: name.to_string(),
            avg_time_ms: metrics.avg_time_ms,
            time_delta_pct: percent_delta("time", metrics.avg_time_ms, baseline.avg_time_ms)?,
            size_bytes: metrics.size_bytes,
            size_delta_pct: percent_delta(
                "size",
                metrics.size_bytes as f64,
                baseline.size_bytes as f64,
            )?,
            total_time_ms: metrics.total_time_ms,
        })
    }
}

/// One line of the cross-configuration total-time table
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    /// Codec name
    pub name: String,
    /// Accumulated time across every configuration run so far
    pub total_time_ms: f64,
    /// Configuration that produced this snapshot
    pub config_label: String,
}

/// Everything the report emitter needs for one configuration
#[derive(Debug)]
pub struct SuiteReport {
    /// Null policy of the configuration
    pub policy: NullPolicy,
    /// Whether encoding or decoding was timed
    pub direction: Direction,
    /// Records in the corpus
    pub corpus_size: usize,
    /// Name of the baseline codec
    pub baseline: String,
    /// Comparison rows, baseline first
    pub rows: Vec<ComparisonRow>,
    /// Codecs whose measurement was aborted
    pub failures: Vec<CodecError>,
    /// Accumulated totals after this configuration finished
    pub summary: Vec<SummaryRow>,
}

impl SuiteReport {
    /// Configuration label, e.g. "WITH NULLS"
    pub fn label(&self) -> &'static str {
        self.policy.label()
    }

    /// Comparison row of `name`, if it was measured
    pub fn row(&self, name: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|row| row.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(avg_time_ms: f64, size_bytes: usize) -> Metrics {
        Metrics {
            avg_time_ms,
            size_bytes,
            total_time_ms: avg_time_ms * 10.0,
        }
    }

    #[test]
    fn test_percent_delta_sign() {
        assert_eq!(percent_delta("size", 150.0, 100.0).unwrap(), 50.0);
        assert_eq!(percent_delta("size", 25.0, 100.0).unwrap(), -75.0);
        assert_eq!(percent_delta("size", 100.0, 100.0).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_baseline_is_precondition_violation() {
        let err = percent_delta("size", 10.0, 0.0).unwrap_err();
        assert!(matches!(err, BenchError::Precondition { .. }));
        assert!(percent_delta("time", 1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_compare_row() {
        let baseline = metrics(2.0, 1000);
        let row = ComparisonRow::compare("MessagePack", &metrics(1.0, 600), &baseline).unwrap();
        assert_eq!(row.time_delta_pct, -50.0);
        assert_eq!(row.size_delta_pct, -40.0);
        assert_eq!(row.total_time_ms, 10.0);
    }

    #[test]
    fn test_compare_against_empty_baseline_fails() {
        let baseline = metrics(2.0, 0);
        assert!(ComparisonRow::compare("Protobuf", &metrics(1.0, 10), &baseline).is_err());
    }
}
