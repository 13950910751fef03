//! Timed benchmark execution.
//!
//! The runner turns a configuration, a registry and a corpus into a flat
//! sequence of [`Measurement`]s. Iterations within one
//! (implementation, operation) pair always execute strictly in sequence and
//! each call is timed individually against the monotonic clock; batching
//! calls into one interval would corrupt the per-call semantics the
//! aggregator depends on. Parallel mode only overlaps *distinct* pairs to
//! shorten suite wall-time. It never changes what a single measurement
//! means.

use crate::adapter::{AdapterResult, LibraryAdapter};
use crate::config::BenchmarkConfig;
use crate::corpus::{Sample, SampleCorpus};
use crate::registry::AdapterRegistry;
use crate::types::{Failure, Measurement, Operation};
use crate::{Error, Result};
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// One planned (implementation, operation) pairing with its sample view.
struct PairPlan {
    adapter: Arc<dyn LibraryAdapter>,
    operation: Operation,
    samples: Arc<Vec<Sample>>,
}

/// Orchestrates benchmark execution across the registered implementations.
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    registry: AdapterRegistry,
    corpus: Arc<SampleCorpus>,
}

impl BenchmarkRunner {
    /// Create a new benchmark runner.
    pub fn new(config: BenchmarkConfig, registry: AdapterRegistry, corpus: SampleCorpus) -> Self {
        Self {
            config,
            registry,
            corpus: Arc::new(corpus),
        }
    }

    /// Get reference to benchmark configuration
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Resolve the adapters selected by the configuration, in registration
    /// order.
    fn selected_adapters(&self) -> Result<Vec<Arc<dyn LibraryAdapter>>> {
        if self.registry.is_empty() {
            return Err(Error::Config("no implementations registered".to_string()));
        }

        if self.config.implementations.is_empty() {
            return Ok(self.registry.names().iter().filter_map(|n| self.registry.get(n)).collect());
        }

        self.config
            .implementations
            .iter()
            .map(|name| {
                self.registry
                    .get(name)
                    .ok_or_else(|| Error::Config(format!("unknown implementation '{name}'")))
            })
            .collect()
    }

    /// Expand the configuration into concrete pairs.
    ///
    /// Fails fast, before any call is made, when an operation has no
    /// samples or no supporting implementation. Adapters that simply do not
    /// support an operation are skipped for that operation, not failed.
    fn plan(&self) -> Result<Vec<PairPlan>> {
        let adapters = self.selected_adapters()?;
        let mut pairs = Vec::new();

        for &operation in &self.config.operations {
            let view: Vec<Sample> = self
                .corpus
                .samples_for(operation)
                .into_iter()
                .cloned()
                .collect();
            if view.is_empty() {
                return Err(Error::Config(format!(
                    "the corpus has no samples usable for operation '{operation}'"
                )));
            }
            let samples = Arc::new(view);

            let supporting: Vec<_> = adapters
                .iter()
                .filter(|adapter| adapter.supports(operation))
                .cloned()
                .collect();
            if supporting.is_empty() {
                return Err(Error::Config(format!(
                    "no implementation supports operation '{operation}'"
                )));
            }

            for adapter in supporting {
                pairs.push(PairPlan {
                    adapter,
                    operation,
                    samples: Arc::clone(&samples),
                });
            }
        }

        Ok(pairs)
    }

    /// Run all configured comparisons.
    ///
    /// Returns every measurement taken, grouped by pair in plan order with
    /// iteration order preserved inside each pair. Individual call failures
    /// are recorded, never propagated; an `Err` here means the harness
    /// itself could not run.
    pub async fn run(&self) -> Result<Vec<Measurement>> {
        self.config.validate()?;
        let pairs = self.plan()?;

        tracing::info!(
            pairs = pairs.len(),
            iterations = self.config.iterations,
            warmup = self.config.warmup_iterations,
            parallel = self.config.parallel,
            "starting benchmark run"
        );

        let mut measurements = Vec::with_capacity(pairs.len() * self.config.iterations);

        if self.config.parallel {
            let handles: Vec<_> = pairs
                .into_iter()
                .map(|pair| {
                    let config = self.config.clone();
                    tokio::spawn(async move { Self::run_pair(pair, config).await })
                })
                .collect();

            // Joined in plan order so the output is deterministic no matter
            // which task finishes first.
            for handle in handles {
                let batch = handle
                    .await
                    .map_err(|e| Error::Benchmark(format!("benchmark task failed: {e}")))?;
                measurements.extend(batch);
            }
        } else {
            for pair in pairs {
                measurements.extend(Self::run_pair(pair, self.config.clone()).await);
            }
        }

        Ok(measurements)
    }

    /// Run the warmup and measured iterations for a single pair.
    ///
    /// Static so parallel mode can move it onto a spawned task, like the
    /// per-task run functions it was derived from.
    async fn run_pair(pair: PairPlan, config: BenchmarkConfig) -> Vec<Measurement> {
        let PairPlan {
            adapter,
            operation,
            samples,
        } = pair;

        for iteration in 0..config.warmup_iterations {
            let sample = &samples[iteration % samples.len()];
            let _ = Self::timed_call(&adapter, operation, sample, config.timeout).await;
        }

        let mut measurements = Vec::with_capacity(config.iterations);

        for iteration in 0..config.iterations {
            let sample = &samples[iteration % samples.len()];
            let (duration, outcome) = Self::timed_call(&adapter, operation, sample, config.timeout).await;

            match &outcome {
                Ok(items) => tracing::debug!(
                    implementation = adapter.name(),
                    %operation,
                    sample = %sample.id,
                    iteration,
                    ?duration,
                    items,
                    "iteration complete"
                ),
                Err(failure) => tracing::debug!(
                    implementation = adapter.name(),
                    %operation,
                    sample = %sample.id,
                    iteration,
                    ?duration,
                    %failure,
                    "iteration failed"
                ),
            }

            let (error_kind, error_message) = match &outcome {
                Ok(_) => (None, None),
                Err(failure) => (Some(failure.kind()), Some(failure.to_string())),
            };

            measurements.push(Measurement {
                implementation: adapter.name().to_string(),
                operation,
                sample_id: sample.id.clone(),
                iteration,
                duration,
                succeeded: outcome.is_ok(),
                error_kind,
                error_message,
            });
        }

        measurements
    }

    /// Time one adapter call, converting an elapsed timeout into a
    /// `Transient` failure so the run continues.
    async fn timed_call(
        adapter: &Arc<dyn LibraryAdapter>,
        operation: Operation,
        sample: &Sample,
        timeout: Option<Duration>,
    ) -> (Duration, AdapterResult<usize>) {
        let start = Instant::now();

        let outcome = match timeout {
            Some(limit) => match tokio::time::timeout(limit, Self::invoke(adapter, operation, sample)).await
            {
                Ok(outcome) => outcome,
                Err(_) => Err(Failure::Transient(format!(
                    "call abandoned after {:.1}s timeout",
                    limit.as_secs_f64()
                ))),
            },
            None => Self::invoke(adapter, operation, sample).await,
        };

        (start.elapsed(), outcome)
    }

    /// Dispatch one operation call, returning the result size for logging.
    async fn invoke(
        adapter: &Arc<dyn LibraryAdapter>,
        operation: Operation,
        sample: &Sample,
    ) -> AdapterResult<usize> {
        match operation {
            Operation::Fetch => {
                let url = sample
                    .url
                    .as_deref()
                    .ok_or_else(|| Failure::Malformed(format!("sample '{}' has no URL", sample.id)))?;
                adapter.fetch(url).await.map(|content| content.len())
            }
            Operation::ExtractMetadata => {
                let html = Self::sample_html(sample)?;
                adapter
                    .extract_metadata(html)
                    .await
                    .map(|meta| usize::from(meta.title.is_some()) + usize::from(meta.description.is_some()))
            }
            Operation::ExtractLinks => {
                let html = Self::sample_html(sample)?;
                let base = Url::parse(&sample.base_url).map_err(|e| {
                    Failure::Malformed(format!("invalid base URL '{}': {e}", sample.base_url))
                })?;
                adapter.extract_links(html, &base).await.map(|links| links.len())
            }
            Operation::ExtractElements => {
                let html = Self::sample_html(sample)?;
                adapter
                    .extract_elements(html, sample.element_tag(), sample.element_class())
                    .await
                    .map(|elements| elements.len())
            }
        }
    }

    fn sample_html(sample: &Sample) -> AdapterResult<&str> {
        sample
            .html
            .as_deref()
            .ok_or_else(|| Failure::Malformed(format!("sample '{}' has no HTML content", sample.id)))
    }
}
