// src/graph/acyclic.rs

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::graph::model::TaskId;

/// Returns some task involved in a cycle, or `None` if the edge list is
/// acyclic.
///
/// The reduction is Kahn-style: repeatedly strip nodes whose in-degree has
/// reached zero; the graph is acyclic iff nothing with outgoing edges
/// survives with positive in-degree. Only tasks with at least one outgoing
/// edge can ever be reported, since a pure sink or an isolated task cannot
/// close a cycle. Parallel edges collapse without affecting the verdict.
pub fn cycle_task(edges: &[(TaskId, TaskId)]) -> Option<TaskId> {
    // A self-loop is a cycle by definition; catch it before the graph
    // reduction, which only sees deduplicated pairs of distinct nodes.
    for (u, v) in edges {
        if u == v {
            return Some(u.clone());
        }
    }

    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
    for (u, v) in edges {
        graph.add_edge(u.as_str(), v.as_str(), ());
    }

    // A topological sort fails exactly when there is a cycle.
    match toposort(&graph, None) {
        Ok(_order) => None,
        Err(cycle) => Some(cycle.node_id().to_string()),
    }
}

/// Whether the directed edge list forms a DAG. Never errors.
pub fn is_acyclic(edges: &[(TaskId, TaskId)]) -> bool {
    cycle_task(edges).is_none()
}
