#![no_main]

use libfuzzer_sys::fuzz_target;
use tripane_core::location;

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary bytes to the address parser.
    // Loading must never panic regardless of what the address bar holds.
    if let Ok(path) = std::str::from_utf8(data) {
        let fragments = location::parse_path(path);

        // Whatever was recovered must serialize and parse back unchanged.
        let reparsed = location::parse_path(&location::location_path(&fragments));
        assert_eq!(fragments, reparsed);
    }
});
