use std::fmt;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::prelude::*;

/// Read and parse the prospect JSON file.
///
/// The whole file is read before anything is rendered, so a missing file or
/// malformed JSON aborts the run before any output exists.
pub fn read_document(path: &Path) -> Result<Value> {
    log::debug!("Reading prospect data from {}", path.display());

    let raw = fs::read_to_string(path)
        .with_context(|| f!("Failed to read input file {}", path.display()))?;

    parse_document(&raw).with_context(|| f!("Failed to parse JSON from {}", path.display()))
}

pub fn parse_document(raw: &str) -> Result<Value> {
    Ok(serde_json::from_str(raw)?)
}

/// Record counts of a prospect document, for verbose output and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSummary {
    pub persons: usize,
    pub companies: usize,
}

impl InputSummary {
    pub fn of(document: &Value) -> Self {
        let count = |key: &str| document.get(key).and_then(Value::as_array).map_or(0, Vec::len);

        Self {
            persons: count("persons"),
            companies: count("companies"),
        }
    }
}

impl fmt::Display for InputSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} persons, {} companies", self.persons, self.companies)
    }
}
