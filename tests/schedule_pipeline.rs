use std::collections::BTreeMap;
use std::error::Error;

use critdag::errors::CritdagError;
use critdag::graph::TaskGraph;
use critdag::schedule_graph;

type TestResult = Result<(), Box<dyn Error>>;

fn graph(nodes: &[(&str, i64)], edges: &[(&str, &str)]) -> TaskGraph {
    let durations: BTreeMap<String, i64> = nodes
        .iter()
        .map(|(k, v)| (k.to_string(), *v))
        .collect();
    let edges = edges
        .iter()
        .map(|(u, v)| (u.to_string(), v.to_string()))
        .collect();
    TaskGraph::new(durations, edges)
}

#[test]
fn chain_schedules_sequentially() -> TestResult {
    let g = graph(&[("A", 3), ("B", 2), ("C", 4)], &[("A", "B"), ("B", "C")]);
    let report = schedule_graph(&g)?;

    let intervals: Vec<(&str, i64, i64)> = report
        .intervals
        .iter()
        .map(|i| (i.task.as_str(), i.start, i.end))
        .collect();
    assert_eq!(intervals, vec![("A", 0, 3), ("B", 3, 5), ("C", 5, 9)]);

    assert_eq!(report.critical_path, vec!["A", "B", "C"]);
    assert_eq!(report.total_duration, 9);
    Ok(())
}

#[test]
fn diamond_follows_the_longer_branch() -> TestResult {
    let g = graph(
        &[("A", 2), ("B", 3), ("C", 1), ("D", 4)],
        &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
    );
    let report = schedule_graph(&g)?;

    let intervals: Vec<(&str, i64, i64)> = report
        .intervals
        .iter()
        .map(|i| (i.task.as_str(), i.start, i.end))
        .collect();
    assert_eq!(
        intervals,
        vec![("A", 0, 2), ("B", 2, 5), ("C", 2, 3), ("D", 5, 9)]
    );

    assert_eq!(report.critical_path, vec!["A", "B", "D"]);
    assert_eq!(report.total_duration, 9);
    Ok(())
}

#[test]
fn declared_task_without_edges_is_not_scheduled() -> TestResult {
    // "X" has a duration but no edges: it never enters the adjacency view,
    // so the schedule skips it entirely.
    let g = graph(&[("A", 3), ("B", 2), ("X", 5)], &[("A", "B")]);
    let report = schedule_graph(&g)?;

    let scheduled: Vec<&str> = report.intervals.iter().map(|i| i.task.as_str()).collect();
    assert_eq!(scheduled, vec!["A", "B"]);
    assert_eq!(report.total_duration, 5);
    Ok(())
}

#[test]
fn edge_only_task_defaults_to_zero_duration() -> TestResult {
    let g = graph(&[("A", 3)], &[("A", "B")]);
    let report = schedule_graph(&g)?;

    let intervals: Vec<(&str, i64, i64)> = report
        .intervals
        .iter()
        .map(|i| (i.task.as_str(), i.start, i.end))
        .collect();
    assert_eq!(intervals, vec![("A", 0, 3), ("B", 3, 3)]);
    assert_eq!(report.total_duration, 3);
    Ok(())
}

#[test]
fn disconnected_components_dead_end_the_walk() -> TestResult {
    let g = graph(
        &[("A", 1), ("B", 1), ("C", 1), ("D", 1)],
        &[("A", "B"), ("C", "D")],
    );

    match schedule_graph(&g) {
        Err(CritdagError::DeadEnd { at, target }) => {
            assert_eq!(at, "B");
            assert_eq!(target, "D");
        }
        other => panic!("expected DeadEnd, got {other:?}"),
    }
    Ok(())
}

#[test]
fn handoffs_carry_edges_and_path_durations() -> TestResult {
    let g = graph(&[("A", 3), ("B", 2), ("C", 4)], &[("A", "B"), ("B", "C")]);
    let report = schedule_graph(&g)?;

    // The graph hand-off carries every input edge plus the path, so a
    // renderer can highlight exactly the consecutive-pair edges.
    assert_eq!(
        report.graph_handoff.edges,
        vec![
            ("A".to_string(), "B".to_string()),
            ("B".to_string(), "C".to_string())
        ]
    );
    assert_eq!(report.graph_handoff.critical_path, vec!["A", "B", "C"]);

    // The Gantt hand-off pairs path members with their durations in order.
    assert_eq!(report.gantt_handoff.tasks, vec!["A", "B", "C"]);
    assert_eq!(report.gantt_handoff.durations, vec![3, 2, 4]);
    Ok(())
}

#[test]
fn total_duration_covers_every_scheduled_task() -> TestResult {
    let g = graph(
        &[("A", 2), ("B", 3), ("C", 1), ("D", 4)],
        &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
    );
    let report = schedule_graph(&g)?;

    let max_end = report.intervals.iter().map(|i| i.end).max().unwrap();
    assert!(report.total_duration >= max_end);
    Ok(())
}

#[test]
fn pipeline_is_deterministic() -> TestResult {
    let g = graph(
        &[("A", 2), ("B", 3), ("C", 1), ("D", 4)],
        &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
    );

    let first = schedule_graph(&g)?;
    let second = schedule_graph(&g)?;

    assert_eq!(first.critical_path, second.critical_path);
    assert_eq!(first.total_duration, second.total_duration);
    let starts_a: Vec<i64> = first.intervals.iter().map(|i| i.start).collect();
    let starts_b: Vec<i64> = second.intervals.iter().map(|i| i.start).collect();
    assert_eq!(starts_a, starts_b);
    Ok(())
}

#[test]
fn report_renders_the_three_text_lines() -> TestResult {
    let g = graph(&[("A", 3), ("B", 2), ("C", 4)], &[("A", "B"), ("B", "C")]);
    let report = schedule_graph(&g)?;

    assert_eq!(
        report.to_text(),
        "Critical path: A -> B -> C\n\
         Task schedule: A (0-3), B (3-5), C (5-9)\n\
         Total duration: 9\n"
    );
    Ok(())
}
