// crates/walk/src/finder.rs

use std::fs;
use std::path::{Path, PathBuf};

use ignorelist::should_ignore;

use crate::names::FileKind;

/// Counters gathered during one walk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub dirs_listed: usize,
    pub pruned: usize,
    /// Directories whose listing failed and were skipped.
    pub unreadable: Vec<PathBuf>,
}

/// Result of [`Finder::run`].
#[derive(Clone, Debug, Default)]
pub struct Found {
    /// Matching files in traversal order.
    pub files: Vec<PathBuf>,
    pub stats: WalkStats,
}

impl Found {
    pub fn report(&self) {
        tracing::info!(
            target: "walk",
            files = self.files.len(),
            dirs = self.stats.dirs_listed,
            pruned = self.stats.pruned,
            unreadable = self.stats.unreadable.len(),
        );
    }
}

/// Ignore-aware search for BUILD (or Starlark) files beneath a root.
///
/// The tree is walked with an explicit stack, so depth is not bounded by the
/// call stack. Entries under an ignored prefix are skipped before they are
/// looked at: an ignored directory is never listed. Symlinks are not
/// followed. Directories that cannot be listed are skipped and noted in
/// [`WalkStats::unreadable`].
#[derive(Clone, Debug)]
pub struct Finder<'a> {
    root: PathBuf,
    prefixes: &'a [String],
    kind: FileKind,
}

impl<'a> Finder<'a> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            prefixes: &[],
            kind: FileKind::default(),
        }
    }

    pub fn prefixes(mut self, prefixes: &'a [String]) -> Self {
        self.prefixes = prefixes;
        self
    }

    pub fn kind(mut self, kind: FileKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn run(&self) -> Found {
        let mut found = Found::default();
        let mut pending = vec![self.root.clone()];

        while let Some(dir) = pending.pop() {
            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::debug!(target: "walk", dir = %dir.display(), "skipping unreadable directory: {err}");
                    found.stats.unreadable.push(dir);
                    continue;
                }
            };
            found.stats.dirs_listed += 1;

            for entry in entries {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        tracing::debug!(target: "walk", dir = %dir.display(), "skipping entry: {err}");
                        continue;
                    }
                };
                let path = entry.path();

                if should_ignore(&path, &self.root, self.prefixes) {
                    tracing::trace!(target: "walk", path = %path.display(), "ignored");
                    found.stats.pruned += 1;
                    continue;
                }

                let Ok(file_type) = entry.file_type() else {
                    continue;
                };
                if file_type.is_dir() {
                    pending.push(path);
                } else if self.kind.matches(&entry.file_name()) {
                    found.files.push(path);
                }
            }
        }

        found
    }
}

/// Returns every BUILD file beneath `root` that is not under one of
/// `prefixes`.
///
/// Order is unspecified; sort the result if a stable order matters.
pub fn find_build_files(root: &Path, prefixes: &[String]) -> Vec<PathBuf> {
    Finder::new(root).prefixes(prefixes).run().files
}
