// crates/ignorelist/src/parser.rs

//! Reading and parsing `.bazelignore` files.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::clean::clean_path;
use crate::error::IgnoreError;
use crate::prefixes::IgnorePrefixes;

/// Name of the ignore file looked up directly under a workspace root.
pub const IGNORE_FILE_NAME: &str = ".bazelignore";

/// An absolute entry dropped while parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejected {
    /// 1-based line number within the file.
    pub line: usize,
    pub entry: String,
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: absolute path entry {:?}", self.line, self.entry)
    }
}

/// Parsed ignore file along with the lines that were rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IgnoreFile {
    pub prefixes: IgnorePrefixes,
    pub rejected: Vec<Rejected>,
}

impl IgnoreFile {
    /// Fails on the first rejected entry, reporting it against `path`.
    pub fn check(self, path: &Path) -> Result<IgnorePrefixes, IgnoreError> {
        match self.rejected.into_iter().next() {
            Some(Rejected { line, entry }) => Err(IgnoreError::AbsoluteEntry {
                path: path.to_path_buf(),
                line,
                entry,
            }),
            None => Ok(self.prefixes),
        }
    }
}

enum Line<'a> {
    Skip,
    Absolute(&'a str),
    Prefix(String),
}

fn classify_line(raw: &str) -> Line<'_> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        Line::Skip
    } else if line.starts_with('/') || Path::new(line).is_absolute() {
        Line::Absolute(line)
    } else {
        Line::Prefix(clean_path(line))
    }
}

/// Parses ignore file `content`, recording absolute lines as rejected.
pub fn parse_file(content: &str) -> IgnoreFile {
    let mut out = IgnoreFile::default();
    for (idx, raw) in content.lines().enumerate() {
        match classify_line(raw) {
            Line::Skip => {}
            Line::Absolute(entry) => {
                tracing::trace!(target: "ignore", line = idx + 1, entry, "skipping absolute entry");
                out.rejected.push(Rejected {
                    line: idx + 1,
                    entry: entry.to_string(),
                });
            }
            Line::Prefix(prefix) => out.prefixes.push(prefix),
        }
    }
    out
}

/// Parses ignore file `content` into its prefix list.
///
/// Blank lines, `#` comments and absolute entries contribute nothing; every
/// other line is trimmed and path-cleaned, keeping file order.
pub fn parse(content: &str) -> IgnorePrefixes {
    parse_file(content).prefixes
}

/// Reads `root/.bazelignore`, surfacing I/O failures.
pub fn read(root: &Path) -> Result<IgnoreFile, IgnoreError> {
    read_file(&root.join(IGNORE_FILE_NAME))
}

/// Reads and parses the ignore file at `path`.
pub fn read_file(path: &Path) -> Result<IgnoreFile, IgnoreError> {
    let data = fs::read(path).map_err(|source| IgnoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_file(&String::from_utf8_lossy(&data)))
}

/// Loads the ignore prefixes of the workspace at `root`.
///
/// A missing or unreadable ignore file yields an empty list.
pub fn load(root: &Path) -> IgnorePrefixes {
    match read(root) {
        Ok(file) => {
            tracing::debug!(
                target: "ignore",
                root = %root.display(),
                prefixes = file.prefixes.len(),
                rejected = file.rejected.len(),
                "loaded ignore file"
            );
            file.prefixes
        }
        Err(err) => {
            if !err.is_not_found() {
                tracing::debug!(target: "ignore", "{err}; ignoring nothing");
            }
            IgnorePrefixes::new()
        }
    }
}
