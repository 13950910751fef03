//! Reduction of measurements into per-pair aggregates.
//!
//! Aggregation is a pure function of the measurement set: recomputing over
//! the same measurements, in any order, yields the same aggregate. Means use
//! integer nanosecond division so identical inputs produce bit-exact
//! identical means, which is what makes tie detection meaningful.

use crate::types::{Aggregate, Measurement, Operation};

/// Reduce the measurements belonging to one (implementation, operation)
/// pair into an [`Aggregate`].
///
/// Measurements for other pairs are ignored, so the full run output can be
/// passed directly. `total_duration` sums successful calls only and
/// `mean_duration` is `None` when nothing succeeded.
pub fn aggregate_pair(implementation: &str, operation: Operation, measurements: &[Measurement]) -> Aggregate {
    let mut count = 0;
    let mut success_count = 0;
    let mut total_duration = std::time::Duration::ZERO;

    for m in measurements {
        if m.implementation != implementation || m.operation != operation {
            continue;
        }
        count += 1;
        if m.succeeded {
            success_count += 1;
            total_duration += m.duration;
        }
    }

    let mean_duration = if success_count > 0 {
        Some(total_duration / success_count as u32)
    } else {
        None
    };

    Aggregate {
        implementation: implementation.to_string(),
        operation,
        count,
        success_count,
        failure_count: count - success_count,
        total_duration,
        mean_duration,
    }
}

/// Aggregate every (implementation, operation) pair present in
/// `measurements`, in first-seen order.
pub fn aggregate_all(measurements: &[Measurement]) -> Vec<Aggregate> {
    let mut pairs: Vec<(&str, Operation)> = Vec::new();
    for m in measurements {
        let key = (m.implementation.as_str(), m.operation);
        if !pairs.contains(&key) {
            pairs.push(key);
        }
    }

    pairs
        .into_iter()
        .map(|(implementation, operation)| aggregate_pair(implementation, operation, measurements))
        .collect()
}
