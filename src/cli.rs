// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `critdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "critdag",
    version,
    about = "Compute a critical-path schedule from a task dependency graph.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the input JSON document, or `-` to read from stdin.
    ///
    /// The document has two fields: `nodes` (task identifier -> duration)
    /// and `edges` (list of `[predecessor, successor]` pairs).
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: String,

    /// Emit the full schedule report as JSON instead of the textual report.
    ///
    /// The JSON form includes the graph and Gantt hand-off payloads for
    /// external renderers.
    #[arg(long)]
    pub json: bool,

    /// Parse + validate the task graph, print a summary, but don't schedule.
    #[arg(long)]
    pub check: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CRITDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
