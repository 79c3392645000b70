//! Property tests for conflict marker stripping.

use proptest::prelude::*;

use forge::domain::services::{count_conflict_blocks, merge, strip_markers, ConflictSide};

fn lines() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        proptest::string::string_regex("[a-z]{1,6}").unwrap(),
        1..6,
    )
}

fn join(lines: &[String]) -> String {
    let mut s = lines.join("\n");
    s.push('\n');
    s
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Stripping either side leaves no markers behind.
    #[test]
    fn property_strip_removes_all_markers(
        base in lines(),
        local in lines(),
        remote in lines(),
    ) {
        let merged = merge(join(&base).as_bytes(), join(&local).as_bytes(), join(&remote).as_bytes());
        let content = String::from_utf8_lossy(&merged.content).into_owned();

        for side in [ConflictSide::Local, ConflictSide::Remote] {
            let stripped = strip_markers(&content, side);
            prop_assert_eq!(count_conflict_blocks(&stripped), 0);
        }
    }

    /// PROPERTY: Equal-length inputs resolve to exactly one side when stripped.
    #[test]
    fn property_equal_length_strip_recovers_side(
        base in lines(),
        edits in proptest::collection::vec(any::<bool>(), 6),
    ) {
        // Local suffixes every line; remote suffixes the lines `edits` selects.
        let local: Vec<String> = base.iter().map(|l| format!("{l}-l")).collect();
        let remote: Vec<String> = base
            .iter()
            .zip(edits.iter().cycle())
            .map(|(l, e)| if *e { format!("{l}-r") } else { l.clone() })
            .collect();

        let merged = merge(join(&base).as_bytes(), join(&local).as_bytes(), join(&remote).as_bytes());
        let content = String::from_utf8_lossy(&merged.content).into_owned();

        prop_assert_eq!(strip_markers(&content, ConflictSide::Local), join(&local));
    }

    /// PROPERTY: Text without markers passes through untouched.
    #[test]
    fn property_clean_text_is_unchanged(text in "[a-z\n=<> ]{0,128}") {
        prop_assume!(count_conflict_blocks(&text) == 0);
        prop_assert_eq!(strip_markers(&text, ConflictSide::Remote), text.clone());
    }
}
