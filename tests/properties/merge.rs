//! Property tests for the position-aligned three-way merge.

use proptest::prelude::*;

use forge::domain::services::{count_conflict_blocks, merge};

fn line() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9 ]{0,8}").unwrap()
}

fn text() -> impl Strategy<Value = String> {
    proptest::collection::vec(line(), 0..8).prop_map(|lines| {
        let mut s = lines.join("\n");
        if !lines.is_empty() {
            s.push('\n');
        }
        s
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Unchanged upstream returns the local bytes verbatim.
    #[test]
    fn property_unchanged_remote_keeps_local(base in text(), local in text()) {
        let result = merge(base.as_bytes(), local.as_bytes(), base.as_bytes());
        prop_assert_eq!(result.content, local.into_bytes());
        prop_assert!(result.conflicts.is_empty());
    }

    /// PROPERTY: Unchanged local returns the remote bytes verbatim.
    #[test]
    fn property_unchanged_local_takes_remote(base in text(), remote in text()) {
        let result = merge(base.as_bytes(), base.as_bytes(), remote.as_bytes());
        prop_assert_eq!(result.content, remote.into_bytes());
        prop_assert!(result.conflicts.is_empty());
    }

    /// PROPERTY: Identical edits on both sides never conflict.
    #[test]
    fn property_identical_sides_never_conflict(base in text(), both in text()) {
        let result = merge(base.as_bytes(), both.as_bytes(), both.as_bytes());
        prop_assert!(result.conflicts.is_empty());
    }

    /// PROPERTY: One marker block is emitted per reported conflict.
    #[test]
    fn property_marker_blocks_match_conflicts(
        base in text(),
        local in text(),
        remote in text(),
    ) {
        let result = merge(base.as_bytes(), local.as_bytes(), remote.as_bytes());
        let blocks = count_conflict_blocks(&String::from_utf8_lossy(&result.content));
        prop_assert_eq!(blocks, result.conflicts.len());
    }

    /// PROPERTY: Merge is deterministic and never panics on arbitrary bytes.
    #[test]
    fn property_merge_is_deterministic(
        base in proptest::collection::vec(any::<u8>(), 0..64),
        local in proptest::collection::vec(any::<u8>(), 0..64),
        remote in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let first = merge(&base, &local, &remote);
        let second = merge(&base, &local, &remote);
        prop_assert_eq!(first, second);
    }
}
