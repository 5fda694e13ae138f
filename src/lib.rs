// src/lib.rs

pub mod cli;
pub mod errors;
pub mod graph;
pub mod input;
pub mod logging;
pub mod schedule;

use anyhow::Context;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::errors::{CritdagError, Result};
use crate::graph::TaskGraph;
use crate::schedule::ScheduleReport;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - input loading (file or stdin)
/// - the acyclicity gate
/// - earliest-start computation
/// - critical-path extraction
/// - report output (text or JSON)
pub fn run(args: CliArgs) -> Result<()> {
    let doc = if args.input == "-" {
        input::load_from_stdin()?
    } else {
        input::load_from_path(&args.input)?
    };

    let graph = TaskGraph::from_input(doc);

    if args.check {
        // The gate still applies: a cyclic graph fails the check.
        if let Some(task) = graph::cycle_task(graph.edges()) {
            return Err(CritdagError::CyclicGraph(task));
        }
        print_check_summary(&graph);
        return Ok(());
    }

    let report = schedule_graph(&graph)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .context("serializing schedule report")?;
        println!("{json}");
    } else {
        print!("{}", report.to_text());
    }

    Ok(())
}

/// Runs the algorithmic pipeline on a task graph.
///
/// Stages run strictly in order, each consuming only the previous stage's
/// output: acyclicity gate, adjacency + completed durations, earliest
/// starts, critical path, report assembly. A cyclic graph aborts before any
/// scheduling happens.
pub fn schedule_graph(graph: &TaskGraph) -> Result<ScheduleReport> {
    if let Some(task) = graph::cycle_task(graph.edges()) {
        return Err(CritdagError::CyclicGraph(task));
    }

    let adjacency = graph.adjacency();
    let durations = graph.completed_durations(&adjacency);

    let starts = schedule::earliest_starts(&adjacency, &durations);
    let path = schedule::critical_path(&adjacency, &starts)?;

    info!(
        tasks = starts.len(),
        path_len = path.len(),
        "schedule computed"
    );

    Ok(ScheduleReport::assemble(graph, &durations, &starts, path))
}

/// `--check` output: the validated task list and edges, no scheduling.
fn print_check_summary(graph: &TaskGraph) {
    let adjacency = graph.adjacency();

    println!("critdag check: graph is acyclic");

    println!("declared tasks ({}):", graph.declared_durations().len());
    for (task, duration) in graph.declared_durations() {
        println!("  - {task} (duration {duration})");
    }

    println!("edges ({}):", graph.edges().len());
    for (u, v) in graph.edges() {
        println!("  - {u} -> {v}");
    }

    println!("schedulable tasks (edge-connected): {}", adjacency.len());

    debug!("check complete (no scheduling)");
}
