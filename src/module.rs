//! Purpose: Render a JSON value as an ES module constant and write it to disk.
//! Exports: `ModuleTarget`, `render_module`, `write_module`, `extract_json`.
//! Role: Output half of the conversion pipeline.
//! Invariants: Rendered text is `export const NAME = <json>;\n` with 2-space indentation.
//! Invariants: Object keys are emitted in the order they were parsed.
//! Invariants: `write_module` truncates existing files; nothing from a longer previous
//! output survives.
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use crate::error::{Error, ErrorKind, Result};

pub const CURRICULUM_CONST: &str = "CURRICULUM_DATA";
pub const CURRICULUM_FILE: &str = "CurriculumData.js";

const INDENT: &[u8] = b"  ";

// Reserved words that cannot name a `const` binding in a module.
const RESERVED: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// The exported constant name and the file it is written to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ModuleTarget {
    const_name: String,
    path: PathBuf,
}

impl ModuleTarget {
    pub fn new(const_name: impl Into<String>, path: impl Into<PathBuf>) -> Result<Self> {
        let const_name = const_name.into();
        validate_identifier(&const_name)?;
        Ok(Self {
            const_name,
            path: path.into(),
        })
    }

    /// `CURRICULUM_DATA` written to `CurriculumData.js` in the working directory.
    pub fn curriculum() -> Self {
        Self {
            const_name: CURRICULUM_CONST.to_string(),
            path: PathBuf::from(CURRICULUM_FILE),
        }
    }

    pub fn const_name(&self) -> &str {
        &self.const_name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Same constant name, different output location.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }
}

fn validate_identifier(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$');
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if !valid_start || !valid_rest {
        return Err(Error::new(ErrorKind::Usage)
            .with_message(format!("`{name}` is not a valid JavaScript identifier"))
            .with_hint("Use letters, digits, `_` or `$`, not starting with a digit."));
    }
    if RESERVED.contains(&name) {
        return Err(Error::new(ErrorKind::Usage)
            .with_message(format!("`{name}` is a reserved word in JavaScript modules")));
    }
    Ok(())
}

fn prefix(const_name: &str) -> String {
    format!("export const {const_name} = ")
}

/// Render `value` as the full module text, including the trailing newline.
pub fn render_module(value: &Value, const_name: &str) -> Result<String> {
    let mut buffer = prefix(const_name).into_bytes();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("failed to encode document")
            .with_source(err)
    })?;
    buffer.extend_from_slice(b";\n");

    String::from_utf8(buffer).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("encoded document is not UTF-8")
            .with_source(err)
    })
}

/// Create or truncate `path` and write `contents`. Returns the number of bytes written.
pub fn write_module(path: &Path, contents: &str) -> Result<u64> {
    debug!(path = %path.display(), bytes = contents.len(), "writing module");
    let mut file = File::create(path).map_err(|err| Error::from_io(err, path))?;
    file.write_all(contents.as_bytes())
        .map_err(|err| Error::from_io(err, path))?;
    file.flush().map_err(|err| Error::from_io(err, path))?;
    Ok(contents.len() as u64)
}

/// Return the JSON payload of a module produced by `render_module`.
pub fn extract_json<'a>(module: &'a str, const_name: &str) -> Option<&'a str> {
    module
        .strip_prefix(prefix(const_name).as_str())?
        .strip_suffix(";\n")
}
