//! JSON report: the input document re-serialized with 2-space indentation.
//!
//! Works on the untyped document, so unknown keys survive and key order
//! follows the input.

use serde_json::Value;

use crate::Error;

pub fn render(document: &Value) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(document)?)
}
