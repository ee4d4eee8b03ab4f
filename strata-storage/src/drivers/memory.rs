//! In-memory storage driver.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;
use strata_core::StrataResult;

use crate::driver::{DriverOptions, StorageDriver};

type Namespaces = HashMap<String, HashMap<String, Value>>;

/// In-process map-backed driver.
///
/// Always supported and available. Data is lost when the instance is
/// dropped, which makes it the natural binding for the `volatile`,
/// `session` and `cookie` tiers in non-browser embeddings, and for
/// every tier in tests.
#[derive(Debug, Default)]
pub struct MemoryDriver {
    data: RwLock<Namespaces>,
}

impl MemoryDriver {
    /// Create an empty in-memory driver.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Namespaces> {
        // A poisoned lock still holds a consistent map; every writer
        // mutates a single entry before releasing the guard.
        self.data.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Namespaces> {
        self.data.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StorageDriver for MemoryDriver {
    fn available(&self) -> bool {
        true
    }

    fn supported(&self) -> bool {
        true
    }

    fn get(&self, key: &str, opts: &DriverOptions<'_>) -> StrataResult<Option<Value>> {
        Ok(self
            .read()
            .get(opts.namespace)
            .and_then(|entries| entries.get(key))
            .cloned())
    }

    fn set(&self, key: &str, value: &Value, opts: &DriverOptions<'_>) -> StrataResult<bool> {
        self.write()
            .entry(opts.namespace.to_string())
            .or_default()
            .insert(key.to_string(), value.clone());
        Ok(true)
    }

    fn remove(&self, key: &str, opts: &DriverOptions<'_>) -> StrataResult<()> {
        if let Some(entries) = self.write().get_mut(opts.namespace) {
            entries.remove(key);
        }
        Ok(())
    }

    fn keys(&self, opts: &DriverOptions<'_>) -> StrataResult<Vec<String>> {
        Ok(self
            .read()
            .get(opts.namespace)
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default())
    }

    fn reset(&self, opts: &DriverOptions<'_>) -> StrataResult<()> {
        self.write().remove(opts.namespace);
        Ok(())
    }
}
