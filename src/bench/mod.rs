//! Benchmark module
//!
//! This module provides the measurement harness:
//! - **`BenchConfig`** - iteration counts, corpus size and baseline codec
//! - **`BenchmarkRunner`** - warmup, timed loop and aggregation per codec
//! - **`TotalTimes`** - per-codec running totals shared across configurations
//! - **Report rows** - comparison and summary rows for the report emitter
//!
//! # Examples
//!
//! ```rust
//! use codec_bench::bench::{run_configurations, BenchConfig, Direction, TotalTimes};
//! use codec_bench::fixture::create_corpus;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BenchConfig {
//!     warmup_iterations: 1,
//!     iterations: 2,
//!     ..Default::default()
//! };
//! let corpus = create_corpus(config.corpus_size);
//! let totals = TotalTimes::new();
//!
//! let reports = run_configurations(&config, &corpus, Direction::Serialize, &totals)?;
//! for report in &reports {
//!     let protobuf = report.row("Protobuf").expect("protobuf measured");
//!     assert!(protobuf.size_delta_pct < 0.0);
//! }
//! # Ok(())
//! # }
//! ```

pub mod bench_config;
pub mod bench_runner;
pub mod report;
pub mod totals;

// Re-export main types for convenience
pub use bench_config::BenchConfig;
pub use bench_runner::{run_configurations, BenchmarkRunner, Direction, Metrics, Phase};
pub use report::{percent_delta, ComparisonRow, SuiteReport, SummaryRow};
pub use totals::TotalTimes;

/// Benchmark constants
pub mod constants {
    //! Constants used throughout the benchmark module

    /// Untimed iterations before measuring
    pub const WARMUP_ITERATIONS: usize = 100;

    /// Timed iterations per codec
    pub const BENCHMARK_ITERATIONS: usize = 1000;
}
