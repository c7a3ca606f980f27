// crates/ignorelist/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the strict ignore file readers.
///
/// The lenient [`load`](crate::load) never returns these; it treats every
/// failure as an empty list.
#[derive(Debug, Error)]
pub enum IgnoreError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: absolute path entry {entry:?} is not allowed", path.display())]
    AbsoluteEntry {
        path: PathBuf,
        line: usize,
        entry: String,
    },
}

impl IgnoreError {
    /// Whether the error means the ignore file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
