//! Fuzz test for the expiration envelope unwrap path
//!
//! Feeds arbitrary byte sequences through JSON parsing into `unwrap`
//! to find panics or misclassifications. Any parseable JSON value
//! must unwrap cleanly in both raw and non-raw mode at any instant.
//!
//! Run with: cargo +nightly fuzz run envelope_fuzz -- -max_total_time=60

#![no_main]

use chrono::{TimeZone, Utc};
use libfuzzer_sys::fuzz_target;
use strata_core::{unwrap, Unwrapped};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(value) = serde_json::from_str::<serde_json::Value>(input) else {
        return;
    };

    for millis in [0i64, 1, 1_000_000_000_000, 100_000_000_000_000] {
        let now = Utc
            .timestamp_millis_opt(millis)
            .single()
            .expect("fuzz instants are valid timestamps");

        // Raw mode never inspects shape or expiry: any present value
        // is live and returned unchanged.
        match unwrap(Some(value.clone()), true, now) {
            Unwrapped::Live(v) => assert_eq!(v, value),
            other => panic!("raw unwrap must be live, got {other:?}"),
        }

        // Non-raw mode must classify without panicking; Expired is
        // only legal for a well-formed envelope with a numeric expiry
        // in the past.
        if let Unwrapped::Expired = unwrap(Some(value.clone()), false, now) {
            let expires = value
                .get("expires")
                .and_then(|e| e.as_i64())
                .expect("expired entries carry a numeric expiry");
            assert!(millis > expires, "expired entry must be past its expiry");
        }
    }

    // Absent input is always a miss.
    assert_eq!(
        unwrap(None, false, Utc::now()),
        Unwrapped::Missing
    );
});
