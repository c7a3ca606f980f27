// crates/walk/src/expand.rs

use std::fs;
use std::path::{Path, PathBuf};

use ignorelist::{IgnorePrefixes, load};
use thiserror::Error;

use crate::finder::Finder;
use crate::names::FileKind;

#[derive(Debug, Error)]
pub enum ExpandError {
    #[error("{}: {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ExpandOptions {
    /// Honor each directory argument's `.bazelignore`.
    pub respect_ignore: bool,
    pub kind: FileKind,
    /// Log [`WalkStats`](crate::WalkStats) for every directory walked.
    pub report: bool,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            respect_ignore: true,
            kind: FileKind::Build,
            report: false,
        }
    }
}

/// Expands path arguments into the files they denote.
///
/// Files are passed through untouched. Each directory is treated as a
/// workspace root and replaced by the sorted list of matching files found
/// beneath it. Arguments that cannot be stat'ed are an error.
pub fn expand_paths<I, P>(args: I, opts: ExpandOptions) -> Result<Vec<PathBuf>, ExpandError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut out = Vec::new();
    for arg in args {
        let arg = arg.as_ref();
        let meta = fs::metadata(arg).map_err(|source| ExpandError::Stat {
            path: arg.to_path_buf(),
            source,
        })?;
        if !meta.is_dir() {
            out.push(arg.to_path_buf());
            continue;
        }

        let prefixes = if opts.respect_ignore {
            load(arg)
        } else {
            IgnorePrefixes::new()
        };
        let found = Finder::new(arg).prefixes(&prefixes).kind(opts.kind).run();
        if opts.report {
            found.report();
        }
        let mut files = found.files;
        files.sort();
        tracing::debug!(target: "walk", dir = %arg.display(), files = files.len(), "expanded directory");
        out.extend(files);
    }
    Ok(out)
}
