#![no_main]

use libfuzzer_sys::fuzz_target;

use forge::domain::services::{strip_markers, ConflictSide};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let local = strip_markers(content, ConflictSide::Local);
        let remote = strip_markers(content, ConflictSide::Remote);
        assert!(local.len() <= content.len());
        assert!(remote.len() <= content.len());
    }
});
