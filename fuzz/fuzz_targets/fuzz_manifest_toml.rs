#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

use capreq::{read_manifest_str, ReaderOptions};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Reading in either mode must never panic, and every record it
        // yields must render and hash
        for strict in [false, true] {
            if let Ok(report) =
                read_manifest_str(content, Path::new("fuzz.toml"), ReaderOptions { strict })
            {
                for record in &report.records {
                    let _ = record.hash_code();
                    let _ = record.detail();
                    assert!(record.equals(record.into()));
                }
            }
        }
    }
});
