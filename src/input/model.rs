// src/input/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

/// Input document as read from JSON:
///
/// ```json
/// {
///   "nodes": { "A": 3, "B": 2, "C": 4 },
///   "edges": [ ["A", "B"], ["B", "C"] ]
/// }
/// ```
///
/// `nodes` maps task identifiers to durations; `edges` lists precedence
/// pairs `[predecessor, successor]`. Both fields are required, and a
/// document missing either fails deserialization. Beyond the shape, no
/// further validation happens here: durations are taken as-is (negative
/// values are accepted and propagate arithmetically), and identifiers that
/// appear only in `edges` get duration 0 when the graph is built.
#[derive(Debug, Clone, Deserialize)]
pub struct InputDoc {
    /// Task durations keyed by identifier.
    ///
    /// Keys iterate in ascending identifier order, which is the sort key
    /// used throughout scheduling.
    pub nodes: BTreeMap<String, i64>,

    /// Directed precedence pairs: the first task must complete before the
    /// second starts. Self-loops and parallel edges are accepted as input;
    /// a self-loop makes the graph cyclic.
    pub edges: Vec<(String, String)>,
}
