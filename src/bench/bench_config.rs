//! Benchmark configuration

use crate::codec::STANDARD_CODEC_NAMES;
use crate::error::{Error, Result};
use crate::fixture::DEFAULT_CORPUS_SIZE;

/// Benchmark configuration for a run
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Encode calls discarded before measuring
    pub warmup_iterations: usize,
    /// Encode calls inside the timed window
    pub iterations: usize,
    /// Records in the corpus
    pub corpus_size: usize,
    /// Codec every other codec is compared against
    pub baseline: String,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            warmup_iterations: super::constants::WARMUP_ITERATIONS,
            iterations: super::constants::BENCHMARK_ITERATIONS,
            corpus_size: DEFAULT_CORPUS_SIZE,
            baseline: STANDARD_CODEC_NAMES[0].to_string(),
        }
    }
}

impl BenchConfig {
    /// Check the configuration before any codec runs
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::Configuration {
                message: "iterations must be greater than zero".to_string(),
            });
        }
        if self.corpus_size == 0 {
            return Err(Error::Configuration {
                message: "corpus must hold at least one record".to_string(),
            });
        }
        if !STANDARD_CODEC_NAMES.contains(&self.baseline.as_str()) {
            return Err(Error::Configuration {
                message: format!("unknown baseline codec: {}", self.baseline),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.warmup_iterations, 100);
        assert_eq!(config.iterations, 1000);
        assert_eq!(config.corpus_size, 20);
        assert_eq!(config.baseline, "Json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        let zero_iterations = BenchConfig {
            iterations: 0,
            ..Default::default()
        };
        assert!(matches!(zero_iterations.validate(), Err(Error::Configuration { .. })));

        let empty_corpus = BenchConfig {
            corpus_size: 0,
            ..Default::default()
        };
        assert!(empty_corpus.validate().is_err());

        let unknown = BenchConfig {
            baseline: "Xml".to_string(),
            ..Default::default()
        };
        let err = unknown.validate().unwrap_err();
        assert!(err.to_string().contains("unknown baseline codec: Xml"));
    }

    #[test]
    fn test_zero_warmup_is_allowed() {
        let config = BenchConfig {
            warmup_iterations: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
