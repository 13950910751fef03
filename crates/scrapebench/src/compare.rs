//! Ranking and verdicts.
//!
//! The winner for an operation is the eligible aggregate with the strictly
//! smallest mean. Exactly equal means are a `Tie` listing every implementation
//! involved, never an arbitrary pick. An operation where nothing succeeded is
//! `Indeterminate`, not an error.

use crate::types::{Aggregate, ComparisonResult, Operation, Verdict};
use std::cmp::Ordering;
use std::time::Duration;

/// Percentage improvement of `faster` over `slower`.
///
/// Computed relative to the *slower* mean: `(slower - faster) / slower *
/// 100`. The denominator matters: dividing by the faster mean would
/// inflate the figure, so the choice is fixed here rather than left to
/// call sites.
pub fn improvement_percent(faster: Duration, slower: Duration) -> f64 {
    let slower_secs = slower.as_secs_f64();
    if slower_secs == 0.0 {
        return 0.0;
    }
    (slower_secs - faster.as_secs_f64()) / slower_secs * 100.0
}

/// Compare the aggregates for one operation.
///
/// Aggregates for other operations are ignored. The ranking is ascending by
/// mean duration with zero-success aggregates sorted last; among equals the
/// input (registration) order is kept, which makes the report deterministic.
pub fn compare(operation: Operation, aggregates: &[Aggregate]) -> ComparisonResult {
    let mut ranking: Vec<Aggregate> = aggregates
        .iter()
        .filter(|a| a.operation == operation)
        .cloned()
        .collect();

    ranking.sort_by(|a, b| match (a.mean_duration, b.mean_duration) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    let verdict = decide(&ranking);

    ComparisonResult {
        operation,
        ranking,
        verdict,
    }
}

/// Compare every requested operation against one aggregate set.
pub fn compare_all(operations: &[Operation], aggregates: &[Aggregate]) -> Vec<ComparisonResult> {
    operations
        .iter()
        .map(|&operation| compare(operation, aggregates))
        .collect()
}

fn decide(ranking: &[Aggregate]) -> Verdict {
    let eligible: Vec<&Aggregate> = ranking.iter().filter(|a| a.is_eligible()).collect();

    let Some(best_mean) = eligible.first().and_then(|a| a.mean_duration) else {
        return Verdict::Indeterminate;
    };

    let tied: Vec<String> = eligible
        .iter()
        .filter(|a| a.mean_duration == Some(best_mean))
        .map(|a| a.implementation.clone())
        .collect();

    if tied.len() > 1 {
        return Verdict::Tie { implementations: tied };
    }

    let improvement = eligible
        .get(1)
        .and_then(|runner_up| runner_up.mean_duration)
        .map(|slower| improvement_percent(best_mean, slower));

    Verdict::Winner {
        implementation: eligible[0].implementation.clone(),
        improvement_percent: improvement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(name: &str, mean_millis: Option<u64>, successes: usize) -> Aggregate {
        let mean = mean_millis.map(Duration::from_millis);
        Aggregate {
            implementation: name.to_string(),
            operation: Operation::ExtractLinks,
            count: 2,
            success_count: successes,
            failure_count: 2 - successes,
            total_duration: mean.map(|m| m * successes as u32).unwrap_or_default(),
            mean_duration: mean,
        }
    }

    #[test]
    fn faster_mean_wins_with_expected_improvement() {
        // A: [10ms, 10ms], B: [5ms, 5ms]
        let aggregates = vec![aggregate("a", Some(10), 2), aggregate("b", Some(5), 2)];
        let result = compare(Operation::ExtractLinks, &aggregates);

        assert_eq!(result.ranking[0].implementation, "b");
        match result.verdict {
            Verdict::Winner {
                ref implementation,
                improvement_percent: Some(pct),
            } => {
                assert_eq!(implementation, "b");
                assert!((pct - 50.0).abs() < 1e-9);
            }
            ref other => panic!("expected winner verdict, got {other:?}"),
        }
    }

    #[test]
    fn equal_means_are_a_tie_not_a_pick() {
        let aggregates = vec![aggregate("a", Some(8), 2), aggregate("b", Some(8), 2)];
        let result = compare(Operation::ExtractLinks, &aggregates);

        assert_eq!(
            result.verdict,
            Verdict::Tie {
                implementations: vec!["a".to_string(), "b".to_string()]
            }
        );
    }

    #[test]
    fn all_failed_pair_is_reported_but_cannot_win() {
        // A: [fail, fail], B: [4ms]
        let mut failed = aggregate("a", None, 0);
        failed.count = 2;
        failed.failure_count = 2;
        let mut succeeded = aggregate("b", Some(4), 1);
        succeeded.count = 1;
        succeeded.failure_count = 0;

        let result = compare(Operation::ExtractLinks, &[failed, succeeded]);

        // zero-success aggregate is last but still present
        assert_eq!(result.ranking.len(), 2);
        assert_eq!(result.ranking[0].implementation, "b");
        assert_eq!(result.ranking[1].implementation, "a");
        assert_eq!(result.ranking[1].success_count, 0);

        match result.verdict {
            Verdict::Winner {
                ref implementation,
                improvement_percent,
            } => {
                assert_eq!(implementation, "b");
                assert_eq!(improvement_percent, None);
            }
            ref other => panic!("expected winner verdict, got {other:?}"),
        }
    }

    #[test]
    fn no_successes_anywhere_is_indeterminate() {
        let aggregates = vec![aggregate("a", None, 0), aggregate("b", None, 0)];
        let result = compare(Operation::ExtractLinks, &aggregates);

        assert_eq!(result.verdict, Verdict::Indeterminate);
        assert_eq!(result.ranking.len(), 2);
    }

    #[test]
    fn improvement_is_bounded_for_positive_unequal_means() {
        let cases = [(1u64, 2u64), (3, 400), (999, 1000)];
        for (fast, slow) in cases {
            let pct = improvement_percent(Duration::from_millis(fast), Duration::from_millis(slow));
            assert!(pct > 0.0, "({fast}, {slow}) gave {pct}");
            assert!(pct < 100.0, "({fast}, {slow}) gave {pct}");
        }
    }

    #[test]
    fn three_way_ranking_is_ascending() {
        let aggregates = vec![
            aggregate("slowest", Some(30), 2),
            aggregate("fastest", Some(5), 2),
            aggregate("middle", Some(12), 2),
        ];
        let result = compare(Operation::ExtractLinks, &aggregates);

        let names: Vec<_> = result.ranking.iter().map(|a| a.implementation.as_str()).collect();
        assert_eq!(names, vec!["fastest", "middle", "slowest"]);

        match result.verdict {
            Verdict::Winner {
                improvement_percent: Some(pct),
                ..
            } => {
                // against the 12ms runner-up: (12 - 5) / 12 * 100
                assert!((pct - 58.333333333333336).abs() < 1e-9);
            }
            ref other => panic!("expected winner verdict, got {other:?}"),
        }
    }

    #[test]
    fn other_operations_are_ignored() {
        let mut fetch_only = aggregate("a", Some(10), 2);
        fetch_only.operation = Operation::Fetch;

        let result = compare(Operation::ExtractLinks, &[fetch_only]);
        assert!(result.ranking.is_empty());
        assert_eq!(result.verdict, Verdict::Indeterminate);
    }
}
