//! Benchmark runner
//!
//! Each (codec, configuration) pair moves through
//! `Idle -> Warmup -> Measuring -> Aggregated`. The clock is read once
//! before and once after the whole measuring loop, never per iteration.
//! Codecs of one configuration run back to back on the calling thread;
//! [`run_configurations`] runs the two configurations on their own threads.

use super::bench_config::BenchConfig;
use super::report::{ComparisonRow, SuiteReport, SummaryRow};
use super::totals::TotalTimes;
use crate::codec::{suite_codecs, Codec, Encoded};
use crate::error::{BenchError, BenchResult, CodecResult, Error, Result};
use crate::model::Corpus;
use crate::nulls::NullPolicy;
use std::hint::black_box;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Which side of the codec is timed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Corpus to bytes
    Serialize,
    /// Bytes back to records
    Deserialize,
}

impl Direction {
    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Direction::Serialize => "SERIALIZATION",
            Direction::Deserialize => "DESERIALIZATION",
        }
    }
}

/// Measurement lifecycle of one codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing has run yet
    Idle,
    /// Untimed iterations
    Warmup,
    /// Timed iterations
    Measuring,
    /// Metrics recorded
    Aggregated,
}

/// Result of measuring one codec under one configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Average time per iteration in milliseconds
    pub avg_time_ms: f64,
    /// Output size in bytes (input size when decoding)
    pub size_bytes: usize,
    /// Time of the whole timed loop in milliseconds
    pub total_time_ms: f64,
}

/// Measures codecs under one [`BenchConfig`], adding every total into a
/// shared [`TotalTimes`].
pub struct BenchmarkRunner<'a> {
    config: &'a BenchConfig,
    totals: &'a TotalTimes,
}

impl<'a> BenchmarkRunner<'a> {
    /// Create a runner
    pub fn new(config: &'a BenchConfig, totals: &'a TotalTimes) -> Self {
        Self { config, totals }
    }

    /// Warm up, time, and aggregate one operation.
    ///
    /// `size_of` is applied to the result of the last timed iteration. The
    /// first error aborts the measurement.
    pub fn measure<T>(
        &self,
        name: &str,
        direction: Direction,
        mut operation: impl FnMut() -> CodecResult<T>,
        size_of: impl Fn(&T) -> usize,
    ) -> CodecResult<Metrics> {
        let mut phase = Phase::Idle;
        transition(name, &mut phase, Phase::Warmup);
        for _ in 0..self.config.warmup_iterations {
            black_box(operation()?);
        }

        reclaim_hint();

        transition(name, &mut phase, Phase::Measuring);
        let mut last = None;
        let start = Instant::now();
        for _ in 0..self.config.iterations {
            last = Some(black_box(operation()?));
        }
        let elapsed = start.elapsed();

        transition(name, &mut phase, Phase::Aggregated);
        let total_time_ms = elapsed.as_secs_f64() * 1000.0;
        let metrics = Metrics {
            avg_time_ms: total_time_ms / self.config.iterations.max(1) as f64,
            size_bytes: last.as_ref().map_or(0, size_of),
            total_time_ms,
        };
        self.totals.add(direction, name, total_time_ms);
        Ok(metrics)
    }

    /// Measure one codec in the given direction
    pub fn run_codec(
        &self,
        codec: &dyn Codec,
        direction: Direction,
        corpus: &Corpus,
    ) -> CodecResult<Metrics> {
        match direction {
            Direction::Serialize => {
                self.measure(codec.name(), direction, || codec.encode(corpus), Encoded::size)
            }
            Direction::Deserialize => {
                let encoded = codec.encode(corpus)?;
                let input_size = encoded.size();
                self.measure(
                    codec.name(),
                    direction,
                    || codec.decode(&encoded),
                    |_| input_size,
                )
            }
        }
    }

    /// Run the suite codecs for one null policy
    pub fn run_suite(
        &self,
        policy: NullPolicy,
        direction: Direction,
        corpus: &Corpus,
    ) -> Result<SuiteReport> {
        let codecs = suite_codecs(policy, corpus);
        self.run_codecs(&codecs, policy, direction, corpus)
    }

    /// Run `codecs` sequentially and compare them against the baseline.
    ///
    /// A failing codec is reported in [`SuiteReport::failures`] while the
    /// others still run; a missing or zero baseline fails the whole suite.
    /// An invalid configuration or an empty corpus is rejected before any
    /// codec runs.
    pub fn run_codecs(
        &self,
        codecs: &[Box<dyn Codec>],
        policy: NullPolicy,
        direction: Direction,
        corpus: &Corpus,
    ) -> Result<SuiteReport> {
        check_preconditions(self.config, corpus)?;

        info!(
            config = policy.label(),
            direction = direction.label(),
            records = corpus.len(),
            "running benchmark suite"
        );

        let mut measured = Vec::with_capacity(codecs.len());
        let mut failures = Vec::new();
        for codec in codecs {
            match self.run_codec(codec.as_ref(), direction, corpus) {
                Ok(metrics) => {
                    info!(
                        codec = codec.name(),
                        config = policy.label(),
                        avg_time_ms = metrics.avg_time_ms,
                        size_bytes = metrics.size_bytes,
                        "codec measured"
                    );
                    measured.push((codec.name(), metrics));
                }
                Err(err) => {
                    warn!(codec = codec.name(), config = policy.label(), error = %err, "codec failed");
                    failures.push(err);
                }
            }
        }

        let baseline = self.config.baseline.as_str();
        let baseline_metrics = measured
            .iter()
            .find(|(name, _)| *name == baseline)
            .map(|(_, metrics)| *metrics)
            .ok_or_else(|| BenchError::MissingBaseline {
                baseline: baseline.to_string(),
            })?;

        let rows = measured
            .iter()
            .map(|(name, metrics)| ComparisonRow::compare(name, metrics, &baseline_metrics))
            .collect::<BenchResult<Vec<_>>>()?;

        let summary = codecs
            .iter()
            .filter_map(|codec| {
                self.totals
                    .get(direction, codec.name())
                    .map(|total_time_ms| SummaryRow {
                        name: codec.name().to_string(),
                        total_time_ms,
                        config_label: policy.label().to_string(),
                    })
            })
            .collect();

        Ok(SuiteReport {
            policy,
            direction,
            corpus_size: corpus.len(),
            baseline: baseline.to_string(),
            rows,
            failures,
            summary,
        })
    }
}

/// Run both null policies concurrently over one shared corpus.
///
/// Each configuration builds its own codec instances on its own thread; the
/// only shared mutable state is `totals`. Reports come back in
/// [`NullPolicy::ALL`] order.
pub fn run_configurations(
    config: &BenchConfig,
    corpus: &Corpus,
    direction: Direction,
    totals: &TotalTimes,
) -> Result<Vec<SuiteReport>> {
    check_preconditions(config, corpus)?;

    let reports = std::thread::scope(|s| {
        let handles: Vec<_> = NullPolicy::ALL
            .iter()
            .map(|&policy| {
                let runner = BenchmarkRunner::new(config, totals);
                let handle = s.spawn(move || runner.run_suite(policy, direction, corpus));
                (policy, handle)
            })
            .collect();

        handles
            .into_iter()
            .map(|(policy, handle)| {
                handle.join().unwrap_or_else(|_| {
                    Err(Error::from(BenchError::WorkerPanicked {
                        label: policy.label().to_string(),
                    }))
                })
            })
            .collect::<Result<Vec<_>>>()
    })?;

    Ok(reports)
}

fn check_preconditions(config: &BenchConfig, corpus: &Corpus) -> Result<()> {
    config.validate()?;
    if corpus.is_empty() {
        return Err(BenchError::Precondition {
            metric: "corpus size".to_string(),
            value: 0.0,
        }
        .into());
    }
    Ok(())
}

fn transition(name: &str, phase: &mut Phase, next: Phase) {
    debug!(codec = name, from = ?phase, to = ?next, "phase transition");
    *phase = next;
}

/// Advisory pause between warmup and measurement. Warmup outputs are already
/// dropped; this only gives other threads a chance to run and guarantees
/// nothing.
fn reclaim_hint() {
    std::thread::yield_now();
}
