//! Cascade engine: write-through, read-with-fallback, lazy expiration.
//!
//! The engine orchestrates an ordered list of tiers behind one
//! key/value surface. Writes go through to every available configured
//! tier; reads fall back across tiers in priority order, with the
//! first live value winning; entries found expired on any read path
//! are evicted from the tier they were found in. There is no
//! background sweep, by design: expiry is only enforced when a key is
//! touched by `get`, `keys` or `keys_map`.
//!
//! The engine itself is stateless across calls except for its
//! options; all data state lives in the bound drivers.
//!
//! # Null quirk
//!
//! Storing a logical JSON `null` is accepted, but on the read side a
//! live envelope value of `null` is indistinguishable from an absent
//! entry: `get` reports a miss and `keys`/`keys_map` exclude the key.
//! This lossy behavior is documented and kept deliberately, not
//! treated as a bug. Raw mode is the exception: it makes no shape
//! assumptions, so a present `null` stored raw is returned as
//! `Some(Value::Null)` and the key counts as live.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use strata_core::{unwrap, wrap, Key, Overrides, StoreOptions, StrataResult, Tier, Unwrapped};

use crate::clock::{Clock, SystemClock};
use crate::driver::{DriverOptions, DriverSet};

/// Cascading multi-tier key/value store.
///
/// # Example
///
/// ```
/// use strata_core::{Overrides, Tier};
/// use strata_storage::CascadeStore;
///
/// let store = CascadeStore::new(
///     Overrides::new().with_tiers(vec![Tier::Session, Tier::Volatile]),
/// )?;
///
/// store.set("name", &"alice", None)?;
/// assert_eq!(store.get::<String>("name", None)?.as_deref(), Some("alice"));
/// # Ok::<(), strata_core::StrataError>(())
/// ```
pub struct CascadeStore {
    options: StoreOptions,
    drivers: DriverSet,
    clock: Arc<dyn Clock>,
}

impl CascadeStore {
    /// Create a store with in-memory drivers bound to every tier.
    ///
    /// `overrides` are applied over the built-in defaults and become
    /// the instance options.
    pub fn new(overrides: Overrides) -> StrataResult<Self> {
        Self::with_drivers(DriverSet::default(), overrides)
    }

    /// Create a store over an explicit tier-to-driver binding.
    pub fn with_drivers(drivers: DriverSet, overrides: Overrides) -> StrataResult<Self> {
        let options = overrides.apply(&StoreOptions::default());
        options.validate()?;
        Ok(Self {
            options,
            drivers,
            clock: Arc::new(SystemClock),
        })
    }

    /// Replace the time source. Production code keeps the default
    /// [`SystemClock`]; tests inject a manual clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Apply `overrides` to the stored options and return the store,
    /// for call chaining.
    pub fn init(&mut self, overrides: Overrides) -> StrataResult<&mut Self> {
        self.set_options(overrides)?;
        Ok(self)
    }

    /// Apply `overrides` to the stored options, affecting all
    /// subsequent calls.
    pub fn set_options(&mut self, overrides: Overrides) -> StrataResult<()> {
        let merged = overrides.apply(&self.options);
        merged.validate()?;
        self.options = merged;
        Ok(())
    }

    /// The current instance options.
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Whether a tier is currently usable. Delegates to the bound
    /// driver, uncached: availability can change at runtime.
    pub fn check(&self, tier: Tier) -> bool {
        self.drivers.driver(tier).available()
    }

    /// Whether the runtime supports a tier kind at all.
    pub fn support(&self, tier: Tier) -> bool {
        self.drivers.driver(tier).supported()
    }

    /// Store a value under a key in every available configured tier.
    ///
    /// The stored envelope is computed once and written identically
    /// to each participating tier. Returns `true` iff at least one
    /// tier accepted the write. No atomicity is guaranteed across
    /// tiers: a driver fault propagates after earlier tiers already
    /// accepted.
    pub fn set<T: Serialize>(
        &self,
        key: impl Into<Key>,
        value: &T,
        overrides: Option<&Overrides>,
    ) -> StrataResult<bool> {
        let cfg = self.resolve(overrides)?;
        let flat = key.into().join(&cfg.key_delimiter);
        let data = wrap(
            serde_json::to_value(value)?,
            cfg.expire_days,
            cfg.raw,
            self.clock.now(),
        );
        let driver_opts = DriverOptions {
            namespace: &cfg.namespace,
        };

        let mut stored_somewhere = false;
        for &tier in &cfg.tiers {
            let driver = self.drivers.driver(tier);
            if !driver.available() {
                continue;
            }
            let stored = driver.set(&flat, &data, &driver_opts)?;
            tracing::trace!(key = %flat, tier = %tier, accepted = stored, "write-through");
            stored_somewhere = stored_somewhere || stored;
        }
        Ok(stored_somewhere)
    }

    /// Read a value, falling back across configured tiers in order.
    ///
    /// The first tier yielding a live value wins and short-circuits
    /// the rest. An entry found expired along the way is evicted from
    /// that tier before the search continues. Returns `Ok(None)` when
    /// no tier holds a live value.
    pub fn get<T: DeserializeOwned>(
        &self,
        key: impl Into<Key>,
        overrides: Option<&Overrides>,
    ) -> StrataResult<Option<T>> {
        let cfg = self.resolve(overrides)?;
        let flat = key.into().join(&cfg.key_delimiter);
        for &tier in &cfg.tiers {
            if let Some(value) = self.read_live(tier, &flat, &cfg)? {
                return Ok(Some(serde_json::from_value(value)?));
            }
        }
        Ok(None)
    }

    /// Remove a key from every available configured tier. Removing an
    /// absent key is not an error.
    pub fn remove(&self, key: impl Into<Key>, overrides: Option<&Overrides>) -> StrataResult<()> {
        let cfg = self.resolve(overrides)?;
        let flat = key.into().join(&cfg.key_delimiter);
        let driver_opts = DriverOptions {
            namespace: &cfg.namespace,
        };
        for &tier in &cfg.tiers {
            let driver = self.drivers.driver(tier);
            if driver.available() {
                driver.remove(&flat, &driver_opts)?;
            }
        }
        Ok(())
    }

    /// Clear every key under the configured namespace in every
    /// available configured tier.
    pub fn reset(&self, overrides: Option<&Overrides>) -> StrataResult<()> {
        let cfg = self.resolve(overrides)?;
        let driver_opts = DriverOptions {
            namespace: &cfg.namespace,
        };
        for &tier in &cfg.tiers {
            let driver = self.drivers.driver(tier);
            if driver.available() {
                driver.reset(&driver_opts)?;
            }
        }
        tracing::debug!(namespace = %cfg.namespace, "reset");
        Ok(())
    }

    /// All live keys across the configured tiers, deduplicated,
    /// first-seen order.
    ///
    /// Uses the same check-and-evict path as [`get`](Self::get), so a
    /// key reported here is never one `get` would miss.
    pub fn keys(&self, overrides: Option<&Overrides>) -> StrataResult<Vec<String>> {
        let cfg = self.resolve(overrides)?;
        let driver_opts = DriverOptions {
            namespace: &cfg.namespace,
        };

        let mut seen = HashSet::new();
        let mut union = Vec::new();
        for &tier in &cfg.tiers {
            let driver = self.drivers.driver(tier);
            if !driver.available() {
                continue;
            }
            for key in driver.keys(&driver_opts)? {
                if seen.insert(key.clone()) {
                    union.push(key);
                }
            }
        }

        let mut live = Vec::new();
        for key in union {
            for &tier in &cfg.tiers {
                if self.read_live(tier, &key, &cfg)?.is_some() {
                    live.push(key);
                    break;
                }
            }
        }
        Ok(live)
    }

    /// Map every live key to the ordered subset of configured tiers
    /// currently holding a live copy.
    ///
    /// Re-checks expiry per tier (evicting as it goes), so the result
    /// is a complete audit view of where every key actually lives, in
    /// tier-priority order. Keys with no live tier are omitted.
    pub fn keys_map(
        &self,
        overrides: Option<&Overrides>,
    ) -> StrataResult<BTreeMap<String, Vec<Tier>>> {
        let cfg = self.resolve(overrides)?;
        let mut map = BTreeMap::new();
        for key in self.keys(overrides)? {
            let mut tiers = Vec::new();
            for &tier in &cfg.tiers {
                if self.read_live(tier, &key, &cfg)?.is_some() {
                    tiers.push(tier);
                }
            }
            if !tiers.is_empty() {
                map.insert(key, tiers);
            }
        }
        Ok(map)
    }

    /// Resolve effective options for one call: per-call overrides win
    /// over the instance options, which won over the built-in
    /// defaults at construction. The stored options are never
    /// mutated here.
    fn resolve(&self, overrides: Option<&Overrides>) -> StrataResult<StoreOptions> {
        let cfg = match overrides {
            Some(overrides) => overrides.apply(&self.options),
            None => self.options.clone(),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read one tier and enforce expiry.
    ///
    /// Returns the live value, or `None` for an unavailable tier, an
    /// absent entry, an expired entry (which is evicted from the tier
    /// as a side effect) or a live `null` (the null quirk).
    fn read_live(&self, tier: Tier, flat: &str, cfg: &StoreOptions) -> StrataResult<Option<Value>> {
        let driver = self.drivers.driver(tier);
        if !driver.available() {
            return Ok(None);
        }
        let driver_opts = DriverOptions {
            namespace: &cfg.namespace,
        };
        let stored = driver.get(flat, &driver_opts)?;
        match unwrap(stored, cfg.raw, self.clock.now()) {
            Unwrapped::Live(Value::Null) if !cfg.raw => Ok(None),
            Unwrapped::Live(value) => Ok(Some(value)),
            Unwrapped::Expired => {
                driver.remove(flat, &driver_opts)?;
                tracing::debug!(key = %flat, tier = %tier, "evicted expired entry");
                Ok(None)
            }
            Unwrapped::Missing => Ok(None),
        }
    }
}
