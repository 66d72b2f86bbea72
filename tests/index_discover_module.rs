use std::fs;
use sunny::index::scan_application_roots;

#[test]
fn index_discover_module_finds_bundles_and_nested_helpers() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();

    fs::create_dir_all(root.join("Google Chrome.app/Contents/Frameworks/Google Chrome Helper.app"))
        .expect("mkdir chrome");
    fs::create_dir_all(root.join("Notes.app")).expect("mkdir notes");

    let entries = scan_application_roots(&[root]);
    assert!(entries.contains_key("google chrome"));
    assert!(entries.contains_key("google chrome helper"));
    assert!(entries.contains_key("notes"));
    assert!(entries["google chrome helper"].contains(".app/Contents/"));
}

#[test]
fn index_discover_module_ignores_non_bundle_entries() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();

    fs::create_dir_all(root.join("Documents")).expect("mkdir plain dir");
    fs::write(root.join("Fake.app"), b"not a directory").expect("write file");

    let entries = scan_application_roots(&[root]);
    assert!(entries.is_empty());
}

#[test]
fn index_discover_module_skips_missing_roots_and_keeps_first_path() {
    let temp = tempfile::tempdir().expect("tempdir");
    let first = temp.path().join("a");
    let second = temp.path().join("b");
    fs::create_dir_all(first.join("Safari.app")).expect("mkdir a");
    fs::create_dir_all(second.join("Safari.app")).expect("mkdir b");

    let missing = temp.path().join("does-not-exist");
    let entries = scan_application_roots(&[missing, first.clone(), second]);
    assert_eq!(entries.len(), 1);
    assert!(entries["safari"].starts_with(first.to_str().expect("utf8 path")));
}
