// src/schedule/computer.rs

//! Earliest-start computation via longest-path propagation.

use std::collections::BTreeMap;

use tracing::debug;

use crate::graph::{Adjacency, TaskId};

/// Earliest-start time per task, keyed in adjacency (identifier) order.
pub type Schedule = BTreeMap<TaskId, i64>;

/// Computes earliest-start times in a single ascending pass over the
/// adjacency view.
///
/// A neighbor sorting before the current task is treated as a predecessor;
/// direction is inferred from identifier order, not from the stored edge
/// direction. Each task starts at the maximum of `duration + start` over
/// its predecessor-like neighbors, or 0 with none.
///
/// CONSTRAINT: the single pass is numerically correct only when identifier
/// order is a valid topological order of the directed edges. The pass does
/// not verify this and silently produces wrong numbers otherwise.
pub fn earliest_starts(adjacency: &Adjacency, durations: &BTreeMap<TaskId, i64>) -> Schedule {
    let mut starts: Schedule = BTreeMap::new();

    for (task, neighbors) in adjacency {
        let mut start = 0;

        for n in neighbors {
            if n.as_str() >= task.as_str() {
                continue;
            }
            let candidate =
                durations.get(n).copied().unwrap_or(0) + starts.get(n).copied().unwrap_or(0);
            if candidate > start {
                start = candidate;
            }
        }

        debug!(task = %task, start, "earliest start computed");
        starts.insert(task.clone(), start);
    }

    starts
}
