// src/schedule/critical.rs

//! Critical path extraction.

use tracing::debug;

use crate::errors::{CritdagError, Result};
use crate::graph::{Adjacency, TaskId};
use crate::schedule::computer::Schedule;

/// Walks the schedule greedily from its first key to its last.
///
/// At each step the walk advances to the successor-like neighbor (one that
/// sorts after the current task) with the strictly largest earliest-start
/// time; ties resolve to the first entry of the sorted neighbor list, i.e.
/// the smallest identifier. The resulting path is strictly increasing in
/// identifier order, so the walk always terminates.
///
/// A schedule with a single key yields a one-element path. If the walk gets
/// stuck before reaching the last key it fails with
/// [`CritdagError::DeadEnd`] instead of returning a truncated path.
pub fn critical_path(adjacency: &Adjacency, schedule: &Schedule) -> Result<Vec<TaskId>> {
    let (Some(first), Some(target)) = (schedule.keys().next(), schedule.keys().next_back())
    else {
        return Ok(Vec::new());
    };

    let mut path = vec![first.clone()];
    let mut current = first;

    while current != target {
        let next = next_task(current, adjacency, schedule).ok_or_else(|| CritdagError::DeadEnd {
            at: current.clone(),
            target: target.clone(),
        })?;
        debug!(from = %current, to = %next, "critical path step");
        path.push(next.clone());
        current = next;
    }

    Ok(path)
}

/// Successor-like neighbor of `task` with the largest earliest start, or
/// `None` at a dead end.
fn next_task<'a>(
    task: &TaskId,
    adjacency: &'a Adjacency,
    schedule: &Schedule,
) -> Option<&'a TaskId> {
    let mut best: Option<(&TaskId, i64)> = None;

    for n in adjacency.get(task)? {
        if n.as_str() <= task.as_str() {
            continue;
        }
        let start = schedule.get(n).copied().unwrap_or(0);
        match best {
            Some((_, best_start)) if start <= best_start => {}
            _ => best = Some((n, start)),
        }
    }

    best.map(|(n, _)| n)
}
