//! End-to-end pipeline tests over the built-in corpus, exercising the real
//! extraction adapters (no network).

use scrapebench::{
    aggregate_all, compare_all, report, AdapterRegistry, BenchmarkConfig, BenchmarkRunner, Operation,
    SampleCorpus, Verdict,
};
use std::sync::Arc;
use std::time::Duration;

const EXTRACTION_OPS: [Operation; 3] = [
    Operation::ExtractMetadata,
    Operation::ExtractLinks,
    Operation::ExtractElements,
];

fn extraction_registry() -> AdapterRegistry {
    let mut registry = AdapterRegistry::new();
    registry
        .register(Arc::new(scrapebench::ScraperAdapter::new()))
        .unwrap();
    registry.register(Arc::new(scrapebench::TlAdapter::new())).unwrap();
    registry
        .register(Arc::new(scrapebench::DomQueryAdapter::new()))
        .unwrap();
    registry
}

fn extraction_config(parallel: bool) -> BenchmarkConfig {
    BenchmarkConfig {
        operations: EXTRACTION_OPS.to_vec(),
        iterations: 4,
        warmup_iterations: 1,
        timeout: Some(Duration::from_secs(30)),
        parallel,
        ..Default::default()
    }
}

#[tokio::test]
async fn full_pipeline_produces_a_complete_report() {
    let runner = BenchmarkRunner::new(extraction_config(false), extraction_registry(), SampleCorpus::builtin());

    let measurements = runner.run().await.unwrap();
    // 3 operations x 3 implementations x 4 iterations
    assert_eq!(measurements.len(), 36);

    let aggregates = aggregate_all(&measurements);
    assert_eq!(aggregates.len(), 9);
    for aggregate in &aggregates {
        assert_eq!(aggregate.count, 4);
        assert_eq!(aggregate.count, aggregate.success_count + aggregate.failure_count);
        // the built-in HTML samples are well-formed; extraction should succeed
        assert_eq!(aggregate.success_count, 4, "{} failed calls", aggregate.implementation);
        assert!(aggregate.mean_duration.is_some());
    }

    let comparisons = compare_all(&EXTRACTION_OPS, &aggregates);
    assert_eq!(comparisons.len(), 3);
    for comparison in &comparisons {
        assert_eq!(comparison.ranking.len(), 3);
        assert!(matches!(
            comparison.verdict,
            Verdict::Winner { .. } | Verdict::Tie { .. }
        ));
    }

    let rendered = report::render(&comparisons);
    assert!(rendered.contains("== extract-metadata =="));
    assert!(rendered.contains("== extract-links =="));
    assert!(rendered.contains("== extract-elements =="));
    assert!(rendered.contains("Average Time: 0."));
    assert!(rendered.contains("(Successful: 4)"));
}

#[tokio::test]
async fn parallel_run_measures_the_same_pairs() {
    let sequential = BenchmarkRunner::new(extraction_config(false), extraction_registry(), SampleCorpus::builtin())
        .run()
        .await
        .unwrap();
    let parallel = BenchmarkRunner::new(extraction_config(true), extraction_registry(), SampleCorpus::builtin())
        .run()
        .await
        .unwrap();

    let keys = |measurements: &[scrapebench::Measurement]| {
        measurements
            .iter()
            .map(|m| (m.implementation.clone(), m.operation, m.sample_id.clone(), m.iteration))
            .collect::<Vec<_>>()
    };
    assert_eq!(keys(&sequential), keys(&parallel));
}

#[tokio::test]
async fn fetch_without_fetch_capable_implementation_is_a_config_error() {
    // extraction-only registry asked to fetch
    let config = BenchmarkConfig {
        operations: vec![Operation::Fetch],
        ..extraction_config(false)
    };
    let runner = BenchmarkRunner::new(config, extraction_registry(), SampleCorpus::builtin());

    let result = runner.run().await;
    assert!(result.is_err());
}
