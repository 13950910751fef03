//! Benchmark configuration.

use crate::types::Operation;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for a comparison run.
///
/// Loadable from a `scrapebench.toml` file; every field has a default so a
/// partial file (or none at all) is fine. CLI flags override file values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Operations to compare
    pub operations: Vec<Operation>,

    /// Implementations to compare (empty = all registered)
    pub implementations: Vec<String>,

    /// Number of measured iterations per (implementation, operation) pair
    pub iterations: usize,

    /// Number of warmup iterations (discarded from statistics)
    pub warmup_iterations: usize,

    /// Per-call timeout; `None` disables the timeout
    pub timeout: Option<Duration>,

    /// Run distinct (implementation, operation) pairs concurrently.
    ///
    /// Shortens suite wall-time only; iterations within a pair are always
    /// sequential so per-call durations stay comparable.
    pub parallel: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            operations: Operation::ALL.to_vec(),
            implementations: Vec::new(),
            iterations: 10,
            warmup_iterations: 0,
            timeout: Some(Duration::from_secs(30)),
            parallel: false,
        }
    }
}

impl BenchmarkConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be read and
    /// [`crate::Error::Toml`] if it cannot be parsed.
    pub fn from_toml_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] if any configuration value is invalid
    pub fn validate(&self) -> crate::Result<()> {
        if self.operations.is_empty() {
            return Err(crate::Error::Config("no operations selected".to_string()));
        }

        if self.iterations == 0 {
            return Err(crate::Error::Config("iterations must be > 0".to_string()));
        }

        if self.timeout == Some(Duration::ZERO) {
            return Err(crate::Error::Config(
                "timeout must be > 0 (omit it to disable)".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_valid() {
        let config = BenchmarkConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.iterations, 10);
        assert_eq!(config.warmup_iterations, 0);
        assert_eq!(config.operations, Operation::ALL.to_vec());
    }

    #[test]
    fn zero_iterations_rejected() {
        let config = BenchmarkConfig {
            iterations: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = BenchmarkConfig {
            timeout: Some(Duration::ZERO),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = BenchmarkConfig {
            timeout: None,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_operations_rejected() {
        let config = BenchmarkConfig {
            operations: vec![],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn loads_partial_toml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scrapebench.toml");
        std::fs::write(
            &path,
            r#"
operations = ["extract-links", "extract-metadata"]
iterations = 25
parallel = true
"#,
        )
        .unwrap();

        let config = BenchmarkConfig::from_toml_file(&path).unwrap();
        assert_eq!(
            config.operations,
            vec![Operation::ExtractLinks, Operation::ExtractMetadata]
        );
        assert_eq!(config.iterations, 25);
        assert!(config.parallel);
        // untouched fields keep their defaults
        assert_eq!(config.warmup_iterations, 0);
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }
}
