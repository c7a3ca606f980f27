// crates/ignorelist/tests/classify.rs
use ignorelist::{parse, should_ignore};
use proptest::prelude::*;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn exact_match() {
    let tmp = tempdir().unwrap();
    assert!(should_ignore(&tmp.path().join("foo"), tmp.path(), &["foo"]));
}

#[test]
fn subdirectory() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("foo").join("bar");
    assert!(should_ignore(&path, tmp.path(), &["foo"]));
}

#[test]
fn similar_prefix_but_not_directory() {
    let tmp = tempdir().unwrap();
    assert!(!should_ignore(&tmp.path().join("foobar"), tmp.path(), &["foo"]));
}

#[test]
fn matched_with_multiple_prefixes() {
    let tmp = tempdir().unwrap();
    let prefixes = ["foo2", "foobar", "baz"];
    assert!(should_ignore(&tmp.path().join("foobar"), tmp.path(), &prefixes));
}

#[test]
fn no_match() {
    let tmp = tempdir().unwrap();
    assert!(!should_ignore(&tmp.path().join("bar"), tmp.path(), &["foo", "baz"]));
}

#[test]
fn loaded_prefixes_classify() {
    let tmp = tempdir().unwrap();
    let list = parse("vendor/\n# generated code\nout/gen\n");
    assert!(list.is_ignored(&tmp.path().join("vendor/lib/BUILD"), tmp.path()));
    assert!(list.is_ignored(&tmp.path().join("out/gen"), tmp.path()));
    assert!(!list.is_ignored(&tmp.path().join("out/other"), tmp.path()));
    assert!(!list.is_ignored(&tmp.path().join("vendored"), tmp.path()));
}

proptest! {
    #[test]
    fn empty_list_never_ignores(segs in proptest::collection::vec("[a-zA-Z0-9_.-]{1,8}", 0..6)) {
        let root = Path::new("/ws");
        let path = segs.iter().fold(root.to_path_buf(), |p, s| p.join(s));
        let none: [&str; 0] = [];
        prop_assert!(!should_ignore(&path, root, &none));
    }

    #[test]
    fn prefix_never_matches_textual_extension(base in "[a-z]{1,8}", tail in "[a-z0-9]{1,8}") {
        let root = Path::new("/ws");
        let path = root.join(format!("{base}{tail}"));
        prop_assert!(!should_ignore(&path, root, &[base.as_str()]));
    }

    #[test]
    fn prefix_matches_every_descendant(
        base in "[a-z]{1,8}",
        rest in proptest::collection::vec("[a-z0-9]{1,8}", 0..5),
    ) {
        let root = Path::new("/ws");
        let path = rest.iter().fold(root.join(&base), |p, s| p.join(s));
        prop_assert!(should_ignore(&path, root, &[base.as_str()]));
    }
}
