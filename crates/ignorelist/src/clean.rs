// crates/ignorelist/src/clean.rs

//! Lexical cleaning of `/`-separated paths.

/// Returns the shortest path equivalent to `path` by purely lexical
/// processing.
///
/// Repeated separators collapse to one, `.` segments are dropped and each
/// `..` removes the segment before it. A `..` that would climb above the
/// start of a relative path is kept, while one at the start of a rooted path
/// is dropped. Trailing separators are removed. An empty result becomes `.`.
pub fn clean_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();
    for seg in path.split('/') {
        match seg {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}
