#![no_main]

use libfuzzer_sys::fuzz_target;

use forge::domain::services::{count_conflict_blocks, merge};

fuzz_target!(|data: &[u8]| {
    // Split input into base, local and remote on 0xFF separators
    let mut parts = data.splitn(3, |b| *b == 0xFF);
    let base = parts.next().unwrap_or_default();
    let local = parts.next().unwrap_or_default();
    let remote = parts.next().unwrap_or_default();

    let result = merge(base, local, remote);
    if result.conflicts.is_empty() {
        return;
    }
    let content = String::from_utf8_lossy(&result.content);
    assert!(count_conflict_blocks(&content) >= result.conflicts.len());
});
