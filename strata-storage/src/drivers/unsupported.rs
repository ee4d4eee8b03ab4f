//! Always-unsupported stand-in driver.

use serde_json::Value;
use strata_core::StrataResult;

use crate::driver::{DriverOptions, StorageDriver};

/// Driver for a tier kind the embedding has no backing store for.
///
/// Reports unsupported and unavailable; every operation is a clean
/// no-op. Binding this keeps the tier in the configured order without
/// ever participating, matching the contract that an unusable tier is
/// skipped rather than an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedDriver;

impl StorageDriver for UnsupportedDriver {
    fn available(&self) -> bool {
        false
    }

    fn supported(&self) -> bool {
        false
    }

    fn get(&self, _key: &str, _opts: &DriverOptions<'_>) -> StrataResult<Option<Value>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &Value, _opts: &DriverOptions<'_>) -> StrataResult<bool> {
        Ok(false)
    }

    fn remove(&self, _key: &str, _opts: &DriverOptions<'_>) -> StrataResult<()> {
        Ok(())
    }

    fn keys(&self, _opts: &DriverOptions<'_>) -> StrataResult<Vec<String>> {
        Ok(Vec::new())
    }

    fn reset(&self, _opts: &DriverOptions<'_>) -> StrataResult<()> {
        Ok(())
    }
}
