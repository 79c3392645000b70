#![no_main]

use libfuzzer_sys::fuzz_target;

use forge::Lockfile;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Lockfile YAML parsing should never panic
        if let Ok(lockfile) = serde_yaml_ng::from_str::<Lockfile>(content) {
            let _ = lockfile.tracked_files().count();
        }
    }
});
