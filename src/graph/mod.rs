// src/graph/mod.rs

//! Task graph representation and the acyclicity gate.
//!
//! - [`model`] holds the immutable task graph and its derived views.
//! - [`acyclic`] decides whether the directed edge list forms a DAG.

pub mod acyclic;
pub mod model;

pub use acyclic::{cycle_task, is_acyclic};
pub use model::{Adjacency, TaskGraph, TaskId};
