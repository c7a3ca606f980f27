// crates/ignorelist/src/lib.rs
//! Workspace ignore lists in the `.bazelignore` format.
//!
//! An ignore list is a sequence of workspace-relative path prefixes. A path
//! is ignored when it equals one of the prefixes or lives underneath it.
#![deny(unsafe_op_in_unsafe_fn, rust_2018_idioms)]

pub mod classify;
pub mod clean;
pub mod error;
pub mod parser;
pub mod prefixes;

pub use classify::{relative_slash_path, should_ignore};
pub use clean::clean_path;
pub use error::IgnoreError;
pub use parser::{IGNORE_FILE_NAME, IgnoreFile, Rejected, load, parse, parse_file, read, read_file};
pub use prefixes::IgnorePrefixes;
