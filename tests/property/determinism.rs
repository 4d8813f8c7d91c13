//! Property-based tests for determinism guarantees

use buildutil::digest::hash_bytes;
use buildutil::{hash_of_file, list_files_by_extension};
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;

proptest! {
    /// Hashing a file is stable and agrees with hashing its bytes directly
    #[test]
    fn file_hash_is_deterministic(content in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("blob.bin");
        fs::write(&file, &content).unwrap();

        let first = hash_of_file(&file).unwrap();
        let second = hash_of_file(&file).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &hash_bytes(&content));
        prop_assert_eq!(first.len(), 40);
    }

    /// Listing returns exactly the names with the requested suffix
    #[test]
    fn listing_matches_suffix_filter(
        stems in proptest::collection::btree_set("[a-z]{1,8}", 1..12),
        exts in proptest::collection::vec(prop_oneof![Just("txt"), Just("md"), Just("txt.bak")], 12),
    ) {
        let temp_dir = TempDir::new().unwrap();
        let mut expected = BTreeSet::new();
        for (stem, ext) in stems.iter().zip(exts.iter()) {
            let name = format!("{}.{}", stem, ext);
            fs::write(temp_dir.path().join(&name), "").unwrap();
            if *ext == "txt" {
                expected.insert(temp_dir.path().join(&name));
            }
        }

        let found: BTreeSet<_> = list_files_by_extension(temp_dir.path(), "txt")
            .unwrap()
            .into_iter()
            .collect();
        prop_assert_eq!(found, expected);
    }
}
