//! Storage driver contract and the fixed tier-to-driver binding.
//!
//! A driver owns exactly one tier's raw storage. The cascade engine
//! never touches a tier directly; it resolves the tier to its bound
//! driver through [`DriverSet`] and delegates.

use serde_json::Value;
use strata_core::{StrataResult, Tier};

use crate::drivers::MemoryDriver;

/// Per-operation context passed down to a driver.
///
/// Drivers must scope every operation to `namespace`: `keys` returns
/// un-namespaced flat keys and `reset` clears only that namespace.
#[derive(Debug, Clone, Copy)]
pub struct DriverOptions<'a> {
    pub namespace: &'a str,
}

/// The contract a tier's storage backend must satisfy.
///
/// All operations are synchronous and side-effecting in place; no
/// operation returns a pending result. Absence is `Ok(None)`, never
/// an error. `Err` is reserved for faults outside the engine's
/// control (I/O failure, corrupt data, quota exhaustion), which the
/// engine propagates unmasked.
pub trait StorageDriver: Send + Sync {
    /// Whether writing to this tier is currently usable. Re-evaluated
    /// per call; availability can change at runtime.
    fn available(&self) -> bool;

    /// Whether the runtime environment supports this tier kind at all.
    fn supported(&self) -> bool;

    /// Read the raw stored value for a flat key, or `None` if absent.
    fn get(&self, key: &str, opts: &DriverOptions<'_>) -> StrataResult<Option<Value>>;

    /// Store a raw value under a flat key. Returns `true` iff the
    /// tier accepted the write.
    fn set(&self, key: &str, value: &Value, opts: &DriverOptions<'_>) -> StrataResult<bool>;

    /// Remove a flat key. Removing an absent key is not an error.
    fn remove(&self, key: &str, opts: &DriverOptions<'_>) -> StrataResult<()>;

    /// All flat keys currently present under the namespace.
    fn keys(&self, opts: &DriverOptions<'_>) -> StrataResult<Vec<String>>;

    /// Clear every key under the namespace.
    fn reset(&self, opts: &DriverOptions<'_>) -> StrataResult<()>;
}

/// Fixed binding from each tier kind to one driver instance.
///
/// Dispatch is a direct lookup over the closed [`Tier`] enum. The
/// binding is established at construction and never changes; which
/// tiers actually participate in an operation is decided by the
/// resolved options, not by this set.
pub struct DriverSet {
    persistent: Box<dyn StorageDriver>,
    cookie: Box<dyn StorageDriver>,
    session: Box<dyn StorageDriver>,
    volatile: Box<dyn StorageDriver>,
}

impl DriverSet {
    /// Start building a driver set. Tiers left unset are bound to
    /// isolated in-memory drivers.
    pub fn builder() -> DriverSetBuilder {
        DriverSetBuilder::default()
    }

    /// Look up the driver bound to a tier.
    pub fn driver(&self, tier: Tier) -> &dyn StorageDriver {
        match tier {
            Tier::Persistent => self.persistent.as_ref(),
            Tier::Cookie => self.cookie.as_ref(),
            Tier::Session => self.session.as_ref(),
            Tier::Volatile => self.volatile.as_ref(),
        }
    }
}

impl Default for DriverSet {
    /// Bind an isolated [`MemoryDriver`] to every tier.
    fn default() -> Self {
        DriverSetBuilder::default().build()
    }
}

/// Builder assigning a driver per tier.
#[derive(Default)]
pub struct DriverSetBuilder {
    persistent: Option<Box<dyn StorageDriver>>,
    cookie: Option<Box<dyn StorageDriver>>,
    session: Option<Box<dyn StorageDriver>>,
    volatile: Option<Box<dyn StorageDriver>>,
}

impl DriverSetBuilder {
    /// Bind the persistent tier.
    pub fn persistent(mut self, driver: impl StorageDriver + 'static) -> Self {
        self.persistent = Some(Box::new(driver));
        self
    }

    /// Bind the cookie tier.
    pub fn cookie(mut self, driver: impl StorageDriver + 'static) -> Self {
        self.cookie = Some(Box::new(driver));
        self
    }

    /// Bind the session tier.
    pub fn session(mut self, driver: impl StorageDriver + 'static) -> Self {
        self.session = Some(Box::new(driver));
        self
    }

    /// Bind the volatile tier.
    pub fn volatile(mut self, driver: impl StorageDriver + 'static) -> Self {
        self.volatile = Some(Box::new(driver));
        self
    }

    /// Finish, binding unset tiers to isolated in-memory drivers.
    pub fn build(self) -> DriverSet {
        DriverSet {
            persistent: self.persistent.unwrap_or_else(|| Box::new(MemoryDriver::new())),
            cookie: self.cookie.unwrap_or_else(|| Box::new(MemoryDriver::new())),
            session: self.session.unwrap_or_else(|| Box::new(MemoryDriver::new())),
            volatile: self.volatile.unwrap_or_else(|| Box::new(MemoryDriver::new())),
        }
    }
}
