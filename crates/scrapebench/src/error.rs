//! Error types for the comparison harness.
//!
//! These cover harness-level failures only: bad configuration, an unusable
//! corpus, I/O while loading inputs or writing results. Failures of the
//! libraries under test never surface here; they are captured at the
//! adapter boundary as [`crate::types::Failure`] and recorded on the
//! measurement instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for harness operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up or driving a comparison run
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Corpus file not found
    #[error("Corpus file not found: {0}")]
    CorpusNotFound(PathBuf),

    /// Sample validation error
    #[error("Invalid sample '{id}': {reason}")]
    InvalidSample { id: String, reason: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Benchmark execution error
    #[error("Benchmark error: {0}")]
    Benchmark(String),
}
