// crates/ignorelist/src/classify.rs

//! Prefix classification of candidate paths.

use std::path::{Component, Path};

/// Decides whether `path` is excluded by `prefixes`, relative to `root`.
///
/// A prefix matches itself and every path beneath it, but never a sibling
/// that only shares leading characters: `foo` matches `foo` and `foo/bar`,
/// not `foobar`. Paths that cannot be expressed relative to `root` are never
/// ignored.
pub fn should_ignore<S: AsRef<str>>(path: &Path, root: &Path, prefixes: &[S]) -> bool {
    if prefixes.is_empty() {
        return false;
    }

    let Some(rel) = relative_slash_path(path, root) else {
        return false;
    };

    prefixes.iter().any(|prefix| {
        let prefix = prefix.as_ref();
        rel == prefix
            || rel
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

/// Returns `path` relative to `root` joined with `/`.
///
/// `None` when `path` does not live under `root`. `root` itself maps to `.`.
pub fn relative_slash_path(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let mut parts = Vec::new();
    for comp in rel.components() {
        match comp {
            Component::Normal(seg) => parts.push(seg.to_string_lossy()),
            Component::CurDir => {}
            Component::ParentDir => parts.push("..".into()),
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    if parts.is_empty() {
        Some(".".to_string())
    } else {
        Some(parts.join("/"))
    }
}
