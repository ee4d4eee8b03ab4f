//! Store options and the per-call override merge.
//!
//! Effective options for any operation are resolved by an explicit
//! three-way merge with precedence per-call > instance > built-in
//! default. Built-in defaults live in [`StoreOptions::default`]; the
//! instance options are the base; an [`Overrides`] value wins
//! field-wise. Per-call overrides never persist beyond the call.

use crate::envelope::DAYS_PER_YEAR;
use crate::error::ConfigError;
use crate::tier::Tier;

/// Default namespace scoping keys that never set one explicitly.
pub const DEFAULT_NAMESPACE: &str = "57r474";

/// Default delimiter joining key segments into a flat key.
pub const DEFAULT_KEY_DELIMITER: &str = ".";

/// Fully resolved options for the cascade engine.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreOptions {
    /// Scopes all keys to avoid collisions with unrelated data
    /// sharing a tier.
    pub namespace: String,
    /// Tiers to use, in fallback/participation order. Duplicates are
    /// not meaningful.
    pub tiers: Vec<Tier>,
    /// Default TTL in days applied to non-raw writes.
    pub expire_days: f64,
    /// String joining a multi-segment key into one flat string key.
    pub key_delimiter: String,
    /// When true, bypasses the expiration envelope entirely.
    pub raw: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            tiers: Tier::ALL.to_vec(),
            expire_days: DAYS_PER_YEAR,
            key_delimiter: DEFAULT_KEY_DELIMITER.to_string(),
            raw: false,
        }
    }
}

impl StoreOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the tier order.
    pub fn with_tiers(mut self, tiers: Vec<Tier>) -> Self {
        self.tiers = tiers;
        self
    }

    /// Set the default TTL in days.
    pub fn with_expire_days(mut self, days: f64) -> Self {
        self.expire_days = days;
        self
    }

    /// Set the key delimiter.
    pub fn with_key_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.key_delimiter = delimiter.into();
        self
    }

    /// Enable or disable raw mode.
    pub fn with_raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    /// Validate option values.
    ///
    /// Returns `Ok(())` if valid, `Err(ConfigError::InvalidValue)` if
    /// invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.namespace.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "namespace".to_string(),
                value: String::new(),
                reason: "namespace must not be empty".to_string(),
            });
        }
        if !self.expire_days.is_finite() || self.expire_days < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "expire_days".to_string(),
                value: self.expire_days.to_string(),
                reason: "expire_days must be a non-negative finite number".to_string(),
            });
        }
        if self.key_delimiter.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "key_delimiter".to_string(),
                value: String::new(),
                reason: "key_delimiter must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Partial options overriding a [`StoreOptions`] base.
///
/// Used both at construction (over the built-in defaults) and per
/// call (over the instance options).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub namespace: Option<String>,
    pub tiers: Option<Vec<Tier>>,
    pub expire_days: Option<f64>,
    pub key_delimiter: Option<String>,
    pub raw: Option<bool>,
}

impl Overrides {
    /// Create an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Override the tier order.
    pub fn with_tiers(mut self, tiers: Vec<Tier>) -> Self {
        self.tiers = Some(tiers);
        self
    }

    /// Override the TTL in days.
    pub fn with_expire_days(mut self, days: f64) -> Self {
        self.expire_days = Some(days);
        self
    }

    /// Override the key delimiter.
    pub fn with_key_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.key_delimiter = Some(delimiter.into());
        self
    }

    /// Override raw mode.
    pub fn with_raw(mut self, raw: bool) -> Self {
        self.raw = Some(raw);
        self
    }

    /// Apply these overrides on top of `base`, field-wise.
    ///
    /// `base` is not modified; the caller decides whether the result
    /// replaces the stored options (`set_options`) or lives only for
    /// one call.
    pub fn apply(&self, base: &StoreOptions) -> StoreOptions {
        StoreOptions {
            namespace: self.namespace.clone().unwrap_or_else(|| base.namespace.clone()),
            tiers: self.tiers.clone().unwrap_or_else(|| base.tiers.clone()),
            expire_days: self.expire_days.unwrap_or(base.expire_days),
            key_delimiter: self
                .key_delimiter
                .clone()
                .unwrap_or_else(|| base.key_delimiter.clone()),
            raw: self.raw.unwrap_or(base.raw),
        }
    }
}
