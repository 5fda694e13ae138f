// src/errors.rs

//! Crate-wide error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CritdagError {
    #[error("cycle detected in task graph involving task '{0}'")]
    CyclicGraph(String),

    #[error("critical path walk dead-ended at task '{at}' before reaching '{target}'")]
    DeadEnd { at: String, target: String },

    #[error("malformed input document: {0}")]
    MalformedInput(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, CritdagError>;
