//! Core value types: operations, adapter failures, measurements, aggregates
//! and comparison verdicts.
//!
//! Everything here is plain immutable data. Measurements are produced by the
//! runner; aggregates and comparison results are derived views recomputed at
//! report time. There is no shared mutable accumulator anywhere in the
//! harness.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// One named unit of work being benchmarked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    /// Retrieve the content of a URL
    Fetch,
    /// Extract the page title and meta description from HTML
    ExtractMetadata,
    /// Extract hyperlinks from HTML, resolved against a base URL
    ExtractLinks,
    /// Extract raw element markup by tag and optional class
    ExtractElements,
}

impl Operation {
    /// All operations, in canonical report order.
    pub const ALL: [Operation; 4] = [
        Operation::Fetch,
        Operation::ExtractMetadata,
        Operation::ExtractLinks,
        Operation::ExtractElements,
    ];

    /// Kebab-case name used in reports and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Fetch => "fetch",
            Operation::ExtractMetadata => "extract-metadata",
            Operation::ExtractLinks => "extract-links",
            Operation::ExtractElements => "extract-elements",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed failure returned across the adapter boundary.
///
/// Adapters must convert every fault of the wrapped library into one of
/// these variants; nothing else may escape into the runner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The implementation does not provide this operation
    #[error("operation not supported by this implementation")]
    Unsupported,

    /// Network error or timeout; rerunning the benchmark may succeed
    #[error("transient failure: {0}")]
    Transient(String),

    /// The input could not be processed; retrying cannot help
    #[error("malformed input: {0}")]
    Malformed(String),
}

impl Failure {
    /// The kind tag recorded on failed measurements.
    pub fn kind(&self) -> FailureKind {
        match self {
            Failure::Unsupported => FailureKind::Unsupported,
            Failure::Transient(_) => FailureKind::Transient,
            Failure::Malformed(_) => FailureKind::Malformed,
        }
    }
}

/// Failure taxonomy tag, serialized with failed measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Unsupported,
    Transient,
    Malformed,
}

/// Title and meta description extracted from a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// One timed, single-iteration outcome.
///
/// A failing call still yields a `Measurement` with `succeeded == false`;
/// slow-but-failing implementations stay visible in the report instead of
/// being silently dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    pub implementation: String,
    pub operation: Operation,
    pub sample_id: String,
    /// Zero-based index within the pair's run, in execution order
    pub iteration: usize,
    pub duration: Duration,
    pub succeeded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<FailureKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Summary statistics for one (implementation, operation) pair.
///
/// `total_duration` sums successful calls only, so
/// `mean_duration = total_duration / success_count` holds exactly.
/// `mean_duration` is `None` when no call succeeded; such aggregates are
/// reported but never eligible to win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    pub implementation: String,
    pub operation: Operation,
    pub count: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub total_duration: Duration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean_duration: Option<Duration>,
}

impl Aggregate {
    /// Whether this aggregate may be considered for the winner verdict.
    pub fn is_eligible(&self) -> bool {
        self.success_count > 0
    }
}

/// Outcome of comparing the aggregates for one operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// A single implementation had the strictly smallest mean duration
    Winner {
        implementation: String,
        /// `(slower - faster) / slower * 100` against the runner-up mean,
        /// absent when no second eligible implementation exists
        #[serde(default, skip_serializing_if = "Option::is_none")]
        improvement_percent: Option<f64>,
    },
    /// Two or more eligible implementations had bit-exact equal means
    Tie { implementations: Vec<String> },
    /// No implementation completed a single successful call
    Indeterminate,
}

/// Ranked aggregates plus verdict for one operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub operation: Operation,
    /// Ascending by mean duration; zero-success aggregates last
    pub ranking: Vec<Aggregate>,
    pub verdict: Verdict,
}
