//! Purpose: JSON decoding boundary for the embedded curriculum document.
//! Exports: `parse` module with decode and failure-classification helpers.
//! Role: Single seam for parser behavior so callers avoid ad hoc decode logic.
//! Invariants: All document decoding goes through this module.

pub mod parse;
