// crates/walk/src/lib.rs
//! Discovery of BUILD files in a workspace tree, honoring `.bazelignore`.
#![deny(unsafe_op_in_unsafe_fn, rust_2018_idioms)]

pub mod expand;
pub mod finder;
pub mod names;

pub use expand::{ExpandError, ExpandOptions, expand_paths};
pub use finder::{Found, Finder, WalkStats, find_build_files};
pub use names::{BUILD_FILE_NAMES, FileKind, is_build_file, is_starlark_file};
