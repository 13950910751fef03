//! scrapebench is a harness for comparing web-page retrieval and HTML
//! extraction libraries under identical inputs.
//!
//! Heterogeneous implementations (async or blocking, selector-driven or
//! node-walking) are wrapped behind one capability contract, run against a
//! shared sample corpus, timed call-by-call, and ranked per operation with
//! an explicit winner, tie or indeterminate verdict.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use scrapebench::{
//!     aggregate_all, compare_all, report, AdapterRegistry, BenchmarkConfig, BenchmarkRunner,
//!     SampleCorpus,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> scrapebench::Result<()> {
//! let config = BenchmarkConfig::default();
//! let registry = AdapterRegistry::with_default_adapters();
//! let runner = BenchmarkRunner::new(config.clone(), registry, SampleCorpus::builtin());
//!
//! let measurements = runner.run().await?;
//! let aggregates = aggregate_all(&measurements);
//! let comparisons = compare_all(&config.operations, &aggregates);
//! print!("{}", report::render(&comparisons));
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Corpus** (`corpus`): the fixed input set shared by every implementation
//! - **Adapters** (`adapter`, `adapters`, `registry`): the capability contract
//!   and the bundled library wrappers
//! - **Runner** (`runner`): warmup, per-call timing, failure capture, timeouts
//! - **Aggregation** (`aggregate`): pure reduction into per-pair statistics
//! - **Comparison** (`compare`, `report`, `output`): ranking, verdicts and
//!   report/JSON rendering

#![deny(unsafe_code)]

pub mod adapter;
pub mod adapters;
pub mod aggregate;
pub mod compare;
pub mod config;
pub mod corpus;
pub mod error;
pub mod output;
pub mod registry;
pub mod report;
pub mod runner;
pub mod types;

pub use adapter::{AdapterResult, LibraryAdapter};
pub use adapters::{DomQueryAdapter, ReqwestAdapter, ScraperAdapter, TlAdapter, UreqAdapter};
pub use aggregate::{aggregate_all, aggregate_pair};
pub use compare::{compare, compare_all, improvement_percent};
pub use config::BenchmarkConfig;
pub use corpus::{generate_document, Sample, SampleCorpus};
pub use error::{Error, Result};
pub use registry::AdapterRegistry;
pub use runner::BenchmarkRunner;
pub use types::{
    Aggregate, ComparisonResult, Failure, FailureKind, Measurement, Operation, PageMetadata, Verdict,
};
