//! Project root resolution

use buildutil::project::{module_dir, project_root, root_from_module_dir};
use std::path::Path;

#[test]
fn test_root_is_two_levels_above_module() {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    assert_eq!(module_dir(), manifest_dir);

    let expected = manifest_dir
        .parent()
        .and_then(Path::parent)
        .unwrap_or(manifest_dir);
    assert_eq!(project_root(), expected);
}

#[test]
fn test_relative_module_dir_is_made_absolute() {
    let root = root_from_module_dir(Path::new("tools/build"));
    assert!(root.is_absolute());
    assert_eq!(root, std::env::current_dir().unwrap());
}
