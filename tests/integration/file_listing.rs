//! Listing asset directories by extension

use buildutil::list_files_by_extension;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_lists_only_matching_immediate_entries() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    for name in ["a.txt", "b.md", "c.txt", "notes.txt.bak"] {
        fs::write(root.join(name), name).unwrap();
    }
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub").join("d.txt"), "").unwrap();

    let found: HashSet<PathBuf> = list_files_by_extension(root, "txt")
        .unwrap()
        .into_iter()
        .collect();
    let expected: HashSet<PathBuf> = [root.join("a.txt"), root.join("c.txt")].into_iter().collect();
    assert_eq!(found, expected);
}

#[test]
fn test_matching_directory_names_are_listed() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("bundle.app")).unwrap();

    let found = list_files_by_extension(temp_dir.path(), "app").unwrap();
    assert_eq!(found, vec![temp_dir.path().join("bundle.app")]);
}

#[test]
fn test_empty_directory_lists_nothing() {
    let temp_dir = TempDir::new().unwrap();
    assert!(list_files_by_extension(temp_dir.path(), "js").unwrap().is_empty());
}

#[test]
fn test_missing_directory_propagates_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let err = list_files_by_extension(&temp_dir.path().join("gone"), "js").unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
