// crates/walk/src/names.rs

use std::ffi::OsStr;

/// Possible names for BUILD files.
pub const BUILD_FILE_NAMES: [&str; 3] = ["BUILD.bazel", "BUILD", "BUCK"];

/// Workspace-level Starlark files that are not BUILD files.
pub const WORKSPACE_FILE_NAMES: [&str; 4] = [
    "WORKSPACE",
    "WORKSPACE.bazel",
    "WORKSPACE.bzlmod",
    "MODULE.bazel",
];

/// Extensions of Starlark source files.
pub const STARLARK_EXTENSIONS: [&str; 3] = ["bzl", "sky", "star"];

/// Which files a walk collects.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FileKind {
    /// Only files named in [`BUILD_FILE_NAMES`].
    #[default]
    Build,
    /// BUILD files, workspace files and Starlark sources.
    Starlark,
}

impl FileKind {
    pub fn matches(self, name: &OsStr) -> bool {
        match self {
            FileKind::Build => is_build_file(name),
            FileKind::Starlark => is_starlark_file(name),
        }
    }
}

pub fn is_build_file(name: &OsStr) -> bool {
    BUILD_FILE_NAMES.iter().any(|n| name == *n)
}

pub fn is_starlark_file(name: &OsStr) -> bool {
    if is_build_file(name) || WORKSPACE_FILE_NAMES.iter().any(|n| name == *n) {
        return true;
    }
    let Some(name) = name.to_str() else {
        return false;
    };
    match name.rsplit_once('.') {
        Some((stem, ext)) => !stem.is_empty() && STARLARK_EXTENSIONS.contains(&ext),
        None => false,
    }
}
