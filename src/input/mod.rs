// src/input/mod.rs

//! Input document handling: the serde model of the task graph document and
//! the loader that reads it from a file or stdin.

pub mod loader;
pub mod model;

pub use loader::{load_from_path, load_from_stdin, load_from_str};
pub use model::InputDoc;
