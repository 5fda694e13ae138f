// src/input/loader.rs

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::Context;

use crate::errors::Result;
use crate::input::model::InputDoc;

/// Parse an input document from raw JSON text.
///
/// Shape errors (missing `nodes`/`edges`, wrong types, bad JSON) surface as
/// [`crate::errors::CritdagError::MalformedInput`].
pub fn load_from_str(contents: &str) -> Result<InputDoc> {
    let doc: InputDoc = serde_json::from_str(contents)?;
    Ok(doc)
}

/// Load an input document from a given path.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<InputDoc> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading input document at {:?}", path))?;
    load_from_str(&contents)
}

/// Read the whole of stdin until EOF, then parse.
pub fn load_from_stdin() -> Result<InputDoc> {
    let mut contents = String::new();
    std::io::stdin().read_to_string(&mut contents)?;
    load_from_str(&contents)
}
