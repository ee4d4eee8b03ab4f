//! Storage tier identifiers.
//!
//! A tier names one underlying storage backend. The set is closed:
//! dispatch from a tier to its driver is a direct lookup over this
//! enum, never open-ended polymorphism.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One underlying storage backend kind.
///
/// Ordering among tiers is significant and caller-configurable: it
/// defines fallback priority for reads and participation order for
/// writes and removals. The declaration order here is the default
/// priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Durable storage that survives process restarts.
    Persistent,
    /// Cookie-backed storage (small, string-valued, shared with HTTP).
    Cookie,
    /// Storage scoped to the current session.
    Session,
    /// In-process memory, lost when the process exits.
    Volatile,
}

impl Tier {
    /// All tiers in default priority order.
    pub const ALL: [Tier; 4] = [Tier::Persistent, Tier::Cookie, Tier::Session, Tier::Volatile];

    /// Stable lowercase name for this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Persistent => "persistent",
            Tier::Cookie => "cookie",
            Tier::Session => "session",
            Tier::Volatile => "volatile",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
