//! Fuzz test for multi-segment key joining
//!
//! Joins arbitrary string segments with arbitrary delimiters to find
//! panics, and checks that joining is reversible whenever no segment
//! contains the delimiter.
//!
//! Run with: cargo +nightly fuzz run key_fuzz -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;
use strata_core::{Key, Segment};

fuzz_target!(|input: (Vec<String>, String)| {
    let (segments, delimiter) = input;
    if segments.is_empty() || delimiter.is_empty() {
        return;
    }

    let key = Key::new(segments.iter().cloned().map(Segment::Str).collect());
    let joined = key.join(&delimiter);

    if segments.iter().all(|s| !s.contains(&delimiter)) {
        let parts: Vec<&str> = joined.split(delimiter.as_str()).collect();
        assert_eq!(parts.len(), segments.len());
        for (part, segment) in parts.iter().zip(&segments) {
            assert_eq!(part, segment);
        }
    }
});
