// src/schedule/report.rs

//! The combined schedule report and its rendering hand-offs.
//!
//! The report is plain data: the core has no rendering side effects, and a
//! caller that wants a node-link diagram or a Gantt chart feeds the
//! hand-off payloads to an external drawing collaborator.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::graph::{TaskGraph, TaskId};
use crate::schedule::computer::Schedule;

/// Per-task scheduled interval (`end = start + duration`).
#[derive(Debug, Clone, Serialize)]
pub struct TaskInterval {
    pub task: TaskId,
    pub start: i64,
    pub end: i64,
}

/// Hand-off for a node-link renderer: every input edge plus the critical
/// path, so the renderer can highlight exactly the edges formed by
/// consecutive path pairs.
#[derive(Debug, Clone, Serialize)]
pub struct GraphHandoff {
    pub edges: Vec<(TaskId, TaskId)>,
    pub critical_path: Vec<TaskId>,
}

/// Hand-off for a Gantt renderer: path members with their durations in path
/// order, for contiguous bars sized by cumulative duration offset.
#[derive(Debug, Clone, Serialize)]
pub struct GanttHandoff {
    pub tasks: Vec<TaskId>,
    pub durations: Vec<i64>,
}

/// Combined output of the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleReport {
    /// Critical path in ascending identifier order (the walk produces a
    /// strictly increasing sequence, so this is also traversal order).
    pub critical_path: Vec<TaskId>,
    /// Per-task intervals in schedule (identifier) order.
    pub intervals: Vec<TaskInterval>,
    /// Literally the last interval's end in schedule order, or 0 with no
    /// scheduled tasks. Coincides with the critical path's end on
    /// well-formed single-component graphs.
    pub total_duration: i64,
    pub graph_handoff: GraphHandoff,
    pub gantt_handoff: GanttHandoff,
}

impl ScheduleReport {
    /// Assembles the report from the computed schedule and path.
    pub fn assemble(
        graph: &TaskGraph,
        durations: &BTreeMap<TaskId, i64>,
        schedule: &Schedule,
        critical_path: Vec<TaskId>,
    ) -> Self {
        let intervals: Vec<TaskInterval> = schedule
            .iter()
            .map(|(task, &start)| TaskInterval {
                task: task.clone(),
                start,
                end: start + durations.get(task).copied().unwrap_or(0),
            })
            .collect();

        let total_duration = intervals.last().map(|i| i.end).unwrap_or(0);

        let path_durations: Vec<i64> = critical_path
            .iter()
            .map(|t| durations.get(t).copied().unwrap_or(0))
            .collect();

        Self {
            graph_handoff: GraphHandoff {
                edges: graph.edges().to_vec(),
                critical_path: critical_path.clone(),
            },
            gantt_handoff: GanttHandoff {
                tasks: critical_path.clone(),
                durations: path_durations,
            },
            critical_path,
            intervals,
            total_duration,
        }
    }

    /// Renders the three-line textual report.
    pub fn to_text(&self) -> String {
        let path = self.critical_path.join(" -> ");
        let intervals = self
            .intervals
            .iter()
            .map(|i| format!("{} ({}-{})", i.task, i.start, i.end))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Critical path: {path}\nTask schedule: {intervals}\nTotal duration: {}\n",
            self.total_duration
        )
    }
}
