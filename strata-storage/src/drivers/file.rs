//! File-backed storage driver for the persistent tier.
//!
//! The whole store is one JSON document on disk, shaped
//! `{"<namespace>": {"<key>": <value>}}`. Every operation is a
//! read-modify-write of that document; the driver keeps no in-memory
//! state, so two instances pointed at the same file observe each
//! other's writes with last-write-wins semantics.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use strata_core::{DriverError, StrataResult, Tier};

use crate::driver::{DriverOptions, StorageDriver};

type Document = BTreeMap<String, BTreeMap<String, Value>>;

/// JSON-file-backed driver.
pub struct FileDriver {
    path: PathBuf,
    tier: Tier,
}

impl FileDriver {
    /// Create a driver persisting to `path`. The file is created on
    /// first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            tier: Tier::Persistent,
        }
    }

    /// Create a driver reporting faults against a specific tier, for
    /// embeddings that back more than one tier with files.
    pub fn for_tier(path: impl Into<PathBuf>, tier: Tier) -> Self {
        Self {
            path: path.into(),
            tier,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StrataResult<Document> {
        if !self.path.exists() {
            return Ok(Document::new());
        }
        let contents = fs::read_to_string(&self.path).map_err(|e| DriverError::Io {
            tier: self.tier,
            reason: e.to_string(),
        })?;
        if contents.trim().is_empty() {
            return Ok(Document::new());
        }
        serde_json::from_str(&contents).map_err(|e| {
            DriverError::Corrupt {
                tier: self.tier,
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn save(&self, document: &Document) -> StrataResult<()> {
        let contents = serde_json::to_string(document).map_err(|e| DriverError::Corrupt {
            tier: self.tier,
            reason: e.to_string(),
        })?;
        fs::write(&self.path, contents).map_err(|e| {
            DriverError::Io {
                tier: self.tier,
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl StorageDriver for FileDriver {
    fn available(&self) -> bool {
        // Probe writability without disturbing existing contents.
        fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .is_ok()
    }

    fn supported(&self) -> bool {
        true
    }

    fn get(&self, key: &str, opts: &DriverOptions<'_>) -> StrataResult<Option<Value>> {
        Ok(self
            .load()?
            .get(opts.namespace)
            .and_then(|entries| entries.get(key))
            .cloned())
    }

    fn set(&self, key: &str, value: &Value, opts: &DriverOptions<'_>) -> StrataResult<bool> {
        let mut document = self.load()?;
        document
            .entry(opts.namespace.to_string())
            .or_default()
            .insert(key.to_string(), value.clone());
        self.save(&document)?;
        Ok(true)
    }

    fn remove(&self, key: &str, opts: &DriverOptions<'_>) -> StrataResult<()> {
        let mut document = self.load()?;
        if let Some(entries) = document.get_mut(opts.namespace) {
            entries.remove(key);
            if entries.is_empty() {
                document.remove(opts.namespace);
            }
            self.save(&document)?;
        }
        Ok(())
    }

    fn keys(&self, opts: &DriverOptions<'_>) -> StrataResult<Vec<String>> {
        Ok(self
            .load()?
            .get(opts.namespace)
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default())
    }

    fn reset(&self, opts: &DriverOptions<'_>) -> StrataResult<()> {
        let mut document = self.load()?;
        if document.remove(opts.namespace).is_some() {
            self.save(&document)?;
        }
        Ok(())
    }
}
