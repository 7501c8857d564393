//! Error types for the codec benchmark harness
//!
//! This module provides a unified error handling system using `thiserror` for
//! the codec adapters and the benchmark runner.

use thiserror::Error;

/// The main error type for the harness
#[derive(Error, Debug)]
pub enum Error {
    /// Codec adapter errors
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// Benchmark runner errors
    #[error("Benchmark error: {0}")]
    Bench(#[from] BenchError),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        /// What is wrong with the configuration
        message: String,
    },
}

/// Codec-specific error types
#[derive(Error, Debug)]
pub enum CodecError {
    /// The backend failed while encoding the corpus
    #[error("Encoding failed in {codec}: {reason}")]
    EncodingFailed {
        /// Codec name
        codec: String,
        /// Backend error message
        reason: String,
    },

    /// The backend failed while decoding a previously encoded corpus
    #[error("Decoding failed in {codec}: {reason}")]
    DecodingFailed {
        /// Codec name
        codec: String,
        /// Backend error message
        reason: String,
    },
}

impl CodecError {
    /// Name of the codec that produced the error
    pub fn codec(&self) -> &str {
        match self {
            CodecError::EncodingFailed { codec, .. } | CodecError::DecodingFailed { codec, .. } => {
                codec
            }
        }
    }
}

/// Benchmark runner error types
#[derive(Error, Debug)]
pub enum BenchError {
    /// The baseline codec produced no metrics for the suite
    #[error("Baseline codec {baseline} has no metrics")]
    MissingBaseline {
        /// Configured baseline codec name
        baseline: String,
    },

    /// A percentage delta was requested against a zero or non-finite baseline
    #[error("Precondition violated: baseline {metric} is {value}")]
    Precondition {
        /// Quantity that failed the check
        metric: String,
        /// Offending value
        value: f64,
    },

    /// A worker thread running one configuration panicked
    #[error("Configuration {label} did not complete")]
    WorkerPanicked {
        /// Label of the configuration
        label: String,
    },
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

/// Convenience type alias for Codec Results
pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// Convenience type alias for Bench Results
pub type BenchResult<T> = std::result::Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let codec_error = CodecError::EncodingFailed {
            codec: "Json".to_string(),
            reason: "unsupported type".to_string(),
        };
        let error = Error::Codec(codec_error);
        assert!(error.to_string().contains("Codec error"));
        assert!(error.to_string().contains("Encoding failed in Json"));
    }

    #[test]
    fn test_error_chain() {
        let bench_error = BenchError::Precondition {
            metric: "size".to_string(),
            value: 0.0,
        };
        let error: Error = bench_error.into();
        assert!(error.to_string().contains("Benchmark error"));
        assert!(error.to_string().contains("baseline size is 0"));
    }

    #[test]
    fn test_codec_name() {
        let err = CodecError::DecodingFailed {
            codec: "MessagePack".to_string(),
            reason: "eof".to_string(),
        };
        assert_eq!(err.codec(), "MessagePack");
    }
}
