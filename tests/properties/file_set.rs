//! Property tests for FileSet ordering and override semantics.

use proptest::prelude::*;

use forge::domain::entities::{FileEntry, FileSet};
use forge::domain::value_objects::SourceLayer;

fn path() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-c]{1,2}(/[a-c]{1,2})?").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Paths are unique and keep first-insertion order.
    #[test]
    fn property_first_seen_order(paths in proptest::collection::vec(path(), 0..24)) {
        let mut set = FileSet::new();
        for p in &paths {
            set.add(FileEntry::new(p.as_str(), p.as_str(), SourceLayer::Blueprint, false));
        }

        let mut expected: Vec<&str> = Vec::new();
        for p in &paths {
            if !expected.contains(&p.as_str()) {
                expected.push(p);
            }
        }
        prop_assert_eq!(set.paths().collect::<Vec<_>>(), expected);
    }

    /// PROPERTY: The last add for a path wins.
    #[test]
    fn property_last_add_wins(paths in proptest::collection::vec(path(), 1..24)) {
        let mut set = FileSet::new();
        for (i, p) in paths.iter().enumerate() {
            let abs = format!("/layer{i}/{p}");
            set.add(FileEntry::new(abs, p.as_str(), SourceLayer::Blueprint, false));
        }

        for p in &paths {
            let last = paths.iter().rposition(|q| q == p).unwrap();
            let entry = set.get(p).unwrap();
            prop_assert_eq!(entry.abs_path.clone(), std::path::PathBuf::from(format!("/layer{last}/{p}")));
        }
    }

    /// PROPERTY: Removal only ever shrinks the set.
    #[test]
    fn property_remove_where_subtracts(
        paths in proptest::collection::vec(path(), 0..24),
        prefix in "[a-c]",
    ) {
        let mut set = FileSet::new();
        for p in &paths {
            set.add(FileEntry::new(p.as_str(), p.as_str(), SourceLayer::Blueprint, false));
        }
        let before = set.len();

        let removed = set.remove_where(|p| p.starts_with(prefix.as_str()));

        prop_assert_eq!(set.len() + removed.len(), before);
        prop_assert!(set.paths().all(|p| !p.starts_with(prefix.as_str())));
    }
}
