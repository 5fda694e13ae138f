// src/graph/model.rs

use std::collections::BTreeMap;

use crate::input::InputDoc;

/// Task identifier. Lexicographic order doubles as the schedule sort key.
pub type TaskId = String;

/// Undirected neighbor view keyed in ascending identifier order.
pub type Adjacency = BTreeMap<TaskId, Vec<TaskId>>;

/// Immutable task graph: declared durations plus the directed edge list.
///
/// Built once from the input document; later stages consume derived views
/// (`adjacency`, `completed_durations`) and never mutate the graph itself.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    /// Durations exactly as declared in the input. No sign validation.
    durations: BTreeMap<TaskId, i64>,
    /// Directed precedence pairs exactly as declared in the input.
    edges: Vec<(TaskId, TaskId)>,
}

impl TaskGraph {
    pub fn new(durations: BTreeMap<TaskId, i64>, edges: Vec<(TaskId, TaskId)>) -> Self {
        Self { durations, edges }
    }

    pub fn from_input(doc: InputDoc) -> Self {
        Self::new(doc.nodes, doc.edges)
    }

    /// Directed edge list, used for cycle detection and the graph hand-off.
    pub fn edges(&self) -> &[(TaskId, TaskId)] {
        &self.edges
    }

    /// Durations as declared in the input document.
    pub fn declared_durations(&self) -> &BTreeMap<TaskId, i64> {
        &self.durations
    }

    /// Undirected adjacency view: for every edge `(u, v)`, `v` joins `u`'s
    /// neighbor list and `u` joins `v`'s, so both endpoints exist as keys.
    ///
    /// Neighbor lists are sorted by identifier, which makes the critical
    /// path walk's "first seen wins" tie-break resolve to the smallest
    /// identifier. Parallel edges stay as duplicate neighbors. A declared
    /// task that appears in no edge is absent from the view (and therefore
    /// from the schedule).
    pub fn adjacency(&self) -> Adjacency {
        let mut adj: Adjacency = BTreeMap::new();

        for (u, v) in &self.edges {
            adj.entry(u.clone()).or_default().push(v.clone());
            adj.entry(v.clone()).or_default().push(u.clone());
        }

        for neighbors in adj.values_mut() {
            neighbors.sort();
        }

        adj
    }

    /// Duration for every adjacency key, in the same order.
    ///
    /// Identifiers that appear only in edges carry no declared cost and
    /// default to 0.
    pub fn completed_durations(&self, adjacency: &Adjacency) -> BTreeMap<TaskId, i64> {
        adjacency
            .keys()
            .map(|k| (k.clone(), self.durations.get(k).copied().unwrap_or(0)))
            .collect()
    }
}
