//! Strata Storage - Cascading Multi-Tier Key/Value Store
//!
//! A unified key/value facade over multiple storage tiers (persistent,
//! cookie, session, volatile) in a configurable priority order, with a
//! uniform expiration policy layered on top of tiers that have no
//! native TTL support.
//!
//! Writes go through to every available configured tier; reads fall
//! back across tiers in priority order, evicting expired entries as
//! they are touched. Tier backends are pluggable through the
//! [`StorageDriver`] trait; bundled drivers cover in-memory and
//! file-backed stores.
//!
//! # Example
//!
//! ```
//! use strata_core::{Overrides, Tier};
//! use strata_storage::{CascadeStore, DriverSet};
//! use strata_storage::drivers::MemoryDriver;
//!
//! let drivers = DriverSet::builder()
//!     .session(MemoryDriver::new())
//!     .build();
//! let store = CascadeStore::with_drivers(
//!     drivers,
//!     Overrides::new().with_tiers(vec![Tier::Session, Tier::Volatile]),
//! )?;
//!
//! store.set(["user", "name"], &"alice", None)?;
//! assert_eq!(
//!     store.get::<String>("user.name", None)?.as_deref(),
//!     Some("alice"),
//! );
//! # Ok::<(), strata_core::StrataError>(())
//! ```

pub mod cascade;
pub mod clock;
pub mod driver;
pub mod drivers;

pub use cascade::CascadeStore;
pub use clock::{Clock, ManualClock, SystemClock};
pub use driver::{DriverOptions, DriverSet, DriverSetBuilder, StorageDriver};
pub use drivers::{FileDriver, MemoryDriver, UnsupportedDriver};

// Re-export the core types callers need to drive the engine.
pub use strata_core::{
    ConfigError, DriverError, Key, Overrides, Segment, StoreOptions, StrataError, StrataResult,
    Tier,
};
