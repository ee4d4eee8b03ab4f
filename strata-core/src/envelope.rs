//! Expiration envelope.
//!
//! Converts a logical value into its storable form and back, enforcing
//! TTL semantics independent of any tier's native capabilities. In raw
//! mode the value passes through unchanged in both directions and no
//! expiry ever applies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Milliseconds in one day.
pub const MS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// Default TTL, in days, applied to non-raw writes.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// The stored form of a non-raw value: the logical value plus an
/// absolute expiry timestamp in epoch milliseconds (`null` meaning
/// no expiry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub value: Value,
    #[serde(default)]
    pub expires: Option<i64>,
}

/// Outcome of unwrapping a stored entry.
///
/// `Expired` is distinct from `Missing` so the caller can evict the
/// entry from the tier it was found expired in.
#[derive(Debug, Clone, PartialEq)]
pub enum Unwrapped {
    /// A live value. Note that JSON `null` is a legal live value at
    /// this layer; the engine above maps it to a miss (see the
    /// documented null quirk in `strata-storage`).
    Live(Value),
    /// Present but past its expiry timestamp.
    Expired,
    /// Absent, or not shaped like an envelope in non-raw mode.
    Missing,
}

/// Wrap a logical value for storage.
///
/// Raw mode returns the value unchanged. Otherwise the value is
/// wrapped with an absolute expiry of `now + expire_days` days.
/// `expire_days` must be non-negative; validation happens at the
/// options layer. A TTL too large to represent saturates to the far
/// future instead of overflowing.
pub fn wrap(value: Value, expire_days: f64, raw: bool, now: DateTime<Utc>) -> Value {
    if raw {
        return value;
    }
    let ttl_ms = (expire_days * MS_PER_DAY as f64) as i64;
    let expires = now.timestamp_millis().saturating_add(ttl_ms);
    serde_json::json!({ "value": value, "expires": expires })
}

/// Unwrap a stored entry read from a driver.
///
/// Raw mode performs no expiry check and assumes no shape: any present
/// value is returned as-is. Non-raw mode expects an [`Envelope`]; a
/// stored value that does not parse as one (for example a value
/// written in raw mode) is reported as `Missing`.
pub fn unwrap(stored: Option<Value>, raw: bool, now: DateTime<Utc>) -> Unwrapped {
    let Some(stored) = stored else {
        return Unwrapped::Missing;
    };
    if raw {
        return Unwrapped::Live(stored);
    }

    let Ok(envelope) = serde_json::from_value::<Envelope>(stored) else {
        return Unwrapped::Missing;
    };
    if let Some(expires) = envelope.expires {
        if now.timestamp_millis() > expires {
            return Unwrapped::Expired;
        }
    }
    Unwrapped::Live(envelope.value)
}
