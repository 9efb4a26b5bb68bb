//! Purpose: Library crate behind the `curriculum-export` binary.
//! Exports: `convert` (pipeline), `module` (render/write), `json` (parse boundary), `error`.
//! Role: Turns a JSON document into an ES module exporting it as a constant.
//! Invariants: Modules take explicit inputs (text, target) and hold no global state.
pub mod convert;
pub mod error;
pub mod json;
pub mod module;

pub use convert::{ConvertReport, convert_str};
pub use error::{Error, ErrorKind, Result, to_exit_code};
pub use module::ModuleTarget;
