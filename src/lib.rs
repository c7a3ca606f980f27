// src/lib.rs
//! Ignore-aware discovery of BUILD files.
//!
//! The building blocks live in the workspace crates and are re-exported
//! here: [`ignorelist`] parses `.bazelignore` and classifies paths, [`walk`]
//! finds the files.

use std::path::{Path, PathBuf};

mod run;

pub use buildscan_cli::{CliError, ExitCode, Mode, OutputFormat, ScanConfig};
pub use ignorelist::{
    IGNORE_FILE_NAME, IgnoreError, IgnorePrefixes, clean_path, load as load_ignore_list,
    should_ignore,
};
pub use run::scan_with_config;
pub use walk::{
    BUILD_FILE_NAMES, ExpandError, ExpandOptions, FileKind, Finder, Found, WalkStats,
    expand_paths, find_build_files,
};

/// Returns the BUILD files of the workspace at `root`, sorted, skipping
/// everything excluded by its `.bazelignore`.
///
/// # Examples
///
/// ```
/// use std::fs;
/// use buildscan::find_workspace_build_files;
/// # use tempfile::tempdir;
/// # let dir = tempdir().unwrap();
/// # let root = dir.path();
/// fs::create_dir_all(root.join("vendor/lib")).unwrap();
/// fs::write(root.join("BUILD"), b"").unwrap();
/// fs::write(root.join("vendor/lib/BUILD"), b"").unwrap();
/// fs::write(root.join(".bazelignore"), b"vendor\n").unwrap();
/// assert_eq!(find_workspace_build_files(root), vec![root.join("BUILD")]);
/// ```
pub fn find_workspace_build_files(root: &Path) -> Vec<PathBuf> {
    let prefixes = ignorelist::load(root);
    let mut files = find_build_files(root, &prefixes);
    files.sort();
    files
}
