// crates/ignorelist/src/prefixes.rs

use std::ops::Deref;
use std::path::Path;

use crate::classify::should_ignore;

/// Ordered list of cleaned, workspace-relative ignore prefixes.
///
/// Never holds an absolute entry. Dereferences to `[String]` so it can be
/// handed to anything taking a plain prefix slice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IgnorePrefixes {
    prefixes: Vec<String>,
}

impl IgnorePrefixes {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, prefix: String) {
        self.prefixes.push(prefix);
    }

    /// Whether `path` falls under any prefix, interpreted relative to `root`.
    pub fn is_ignored(&self, path: &Path, root: &Path) -> bool {
        should_ignore(path, root, &self.prefixes)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.prefixes
    }
}

impl Deref for IgnorePrefixes {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.prefixes
    }
}

impl AsRef<[String]> for IgnorePrefixes {
    fn as_ref(&self) -> &[String] {
        &self.prefixes
    }
}

impl<'a> IntoIterator for &'a IgnorePrefixes {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.prefixes.iter()
    }
}

impl From<IgnorePrefixes> for Vec<String> {
    fn from(list: IgnorePrefixes) -> Self {
        list.prefixes
    }
}
