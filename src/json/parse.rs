//! Purpose: Decode JSON text and classify decode failures.
//! Exports: `from_str`, `ParseFailureCategory`, `categorize_error`, `hint_for_error`.
//! Role: Parser boundary over serde_json; keeps object key order as written.
//! Invariants: Decoding is pure; no partial values escape on failure.
//! Invariants: Category labels are stable strings used in diagnostics.
//! Notes: Mapping into `crate::error::Error` is done by callers so context stays explicit.

use serde::de::DeserializeOwned;
use serde_json::error::Category;

pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(input)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseFailureCategory {
    Syntax,
    Eof,
    Data,
    Io,
}

impl ParseFailureCategory {
    pub fn label(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::Eof => "unexpected-eof",
            ParseFailureCategory::Data => "data",
            ParseFailureCategory::Io => "io",
        }
    }
}

pub fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    match err.classify() {
        Category::Syntax => ParseFailureCategory::Syntax,
        Category::Eof => ParseFailureCategory::Eof,
        Category::Data => ParseFailureCategory::Data,
        Category::Io => ParseFailureCategory::Io,
    }
}

pub fn hint_for_error(err: &serde_json::Error, context: &str) -> String {
    let category = categorize_error(err);
    let advice = match category {
        ParseFailureCategory::Syntax => "fix the JSON near the reported position",
        ParseFailureCategory::Eof => "the document is truncated; check for a missing closing bracket",
        ParseFailureCategory::Data => "the document does not match the expected shape",
        ParseFailureCategory::Io => "the input could not be read",
    };
    format!(
        "parse category: {}; context: {context}; {advice}",
        category.label()
    )
}
