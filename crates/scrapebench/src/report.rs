//! Textual report rendering.
//!
//! The report is deterministic for a given set of comparison results: one
//! block per operation, one line per implementation in ranking order, then
//! the verdict line.

use crate::types::{ComparisonResult, Verdict};

/// Render the human-readable report for a set of comparison results.
pub fn render(results: &[ComparisonResult]) -> String {
    let mut out = String::new();

    for (index, result) in results.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!("== {} ==\n", result.operation));

        for aggregate in &result.ranking {
            match aggregate.mean_duration {
                Some(mean) => out.push_str(&format!(
                    "{} Average Time: {:.6} (Successful: {})\n",
                    aggregate.implementation,
                    mean.as_secs_f64(),
                    aggregate.success_count
                )),
                None => out.push_str(&format!(
                    "{} Average Time: N/A (Successful: 0)\n",
                    aggregate.implementation
                )),
            }
        }

        out.push_str(&render_verdict(&result.verdict));
    }

    out
}

fn render_verdict(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Winner {
            implementation,
            improvement_percent: Some(pct),
        } => format!("Winner: {implementation} ({pct:.2}% faster than the runner-up)\n"),
        Verdict::Winner {
            implementation,
            improvement_percent: None,
        } => format!("Winner: {implementation}\n"),
        Verdict::Tie { implementations } => format!("Tie: {}\n", implementations.join(", ")),
        Verdict::Indeterminate => "Indeterminate: no implementation completed a successful call\n".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Aggregate, Operation};
    use std::time::Duration;

    fn aggregate(name: &str, mean_millis: Option<u64>, successes: usize) -> Aggregate {
        Aggregate {
            implementation: name.to_string(),
            operation: Operation::ExtractLinks,
            count: successes.max(1),
            success_count: successes,
            failure_count: successes.max(1) - successes,
            total_duration: Duration::default(),
            mean_duration: mean_millis.map(Duration::from_millis),
        }
    }

    #[test]
    fn renders_ranking_lines_and_winner() {
        let result = ComparisonResult {
            operation: Operation::ExtractLinks,
            ranking: vec![aggregate("tl", Some(5), 10), aggregate("scraper", Some(10), 10)],
            verdict: Verdict::Winner {
                implementation: "tl".to_string(),
                improvement_percent: Some(50.0),
            },
        };

        let report = render(&[result]);
        assert!(report.contains("== extract-links ==\n"));
        assert!(report.contains("tl Average Time: 0.005000 (Successful: 10)\n"));
        assert!(report.contains("scraper Average Time: 0.010000 (Successful: 10)\n"));
        assert!(report.contains("Winner: tl (50.00% faster than the runner-up)\n"));
    }

    #[test]
    fn renders_na_for_zero_success_aggregates() {
        let result = ComparisonResult {
            operation: Operation::ExtractLinks,
            ranking: vec![aggregate("broken", None, 0)],
            verdict: Verdict::Indeterminate,
        };

        let report = render(&[result]);
        assert!(report.contains("broken Average Time: N/A (Successful: 0)\n"));
        assert!(report.contains("Indeterminate: no implementation completed a successful call\n"));
    }

    #[test]
    fn renders_tie_with_all_names() {
        let result = ComparisonResult {
            operation: Operation::ExtractLinks,
            ranking: vec![aggregate("a", Some(8), 2), aggregate("b", Some(8), 2)],
            verdict: Verdict::Tie {
                implementations: vec!["a".to_string(), "b".to_string()],
            },
        };

        let report = render(&[result]);
        assert!(report.contains("Tie: a, b\n"));
    }

    #[test]
    fn blocks_are_separated_by_blank_lines() {
        let block = |operation| ComparisonResult {
            operation,
            ranking: vec![],
            verdict: Verdict::Indeterminate,
        };

        let report = render(&[block(Operation::Fetch), block(Operation::ExtractLinks)]);
        assert!(report.contains("\n\n== extract-links ==\n"));
    }
}
