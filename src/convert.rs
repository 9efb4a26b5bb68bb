//! Purpose: Parse → render → write pipeline for one JSON document.
//! Exports: `convert_str`, `ConvertReport`.
//! Role: The only entry point the binary calls; composes `json::parse` and `module`.
//! Invariants: The document is parsed and fully rendered before the output file is opened,
//! so malformed input never creates or modifies the target.
//! Invariants: No retries; the first error is returned as-is.
use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::{Error, ErrorKind, Result};
use crate::json::parse;
use crate::module::{ModuleTarget, render_module, write_module};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConvertReport {
    pub path: PathBuf,
    pub bytes_written: u64,
    /// Keys for an object, items for an array, zero for scalars.
    pub top_level_entries: usize,
}

pub fn convert_str(input: &str, target: &ModuleTarget) -> Result<ConvertReport> {
    let value = parse_document(input)?;
    let module = render_module(&value, target.const_name())?;
    let bytes_written = write_module(target.path(), &module)?;

    let report = ConvertReport {
        path: target.path().to_path_buf(),
        bytes_written,
        top_level_entries: top_level_entries(&value),
    };
    info!(
        path = %report.path.display(),
        bytes = report.bytes_written,
        entries = report.top_level_entries,
        "module written"
    );
    Ok(report)
}

fn parse_document(input: &str) -> Result<Value> {
    debug!(bytes = input.len(), "parsing document");
    parse::from_str::<Value>(input).map_err(|err| {
        let hint = parse::hint_for_error(&err, "embedded curriculum document");
        Error::new(ErrorKind::MalformedInput)
            .with_message(format!("invalid JSON: {err}"))
            .with_position(err.line(), err.column())
            .with_hint(hint)
            .with_source(err)
    })
}

fn top_level_entries(value: &Value) -> usize {
    match value {
        Value::Object(map) => map.len(),
        Value::Array(items) => items.len(),
        _ => 0,
    }
}
