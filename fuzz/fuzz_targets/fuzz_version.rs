#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(version) = capreq::Version::parse(text) {
            let reparsed = capreq::Version::parse(&version.to_string());
            assert_eq!(reparsed.ok(), Some(version));
        }
    }
});
