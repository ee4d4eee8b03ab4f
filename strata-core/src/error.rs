//! Error types for strata operations.
//!
//! The taxonomy is intentionally narrow: "key not found", "tier
//! unavailable" and "value expired" are all normal return values,
//! never errors. Only driver-level faults outside the engine's
//! control and invalid configuration propagate as `Err`.

use crate::Tier;
use thiserror::Error;

/// Faults raised by a storage driver.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DriverError {
    #[error("I/O failure in {tier} tier: {reason}")]
    Io { tier: Tier, reason: String },

    #[error("Corrupt data in {tier} tier: {reason}")]
    Corrupt { tier: Tier, reason: String },

    #[error("Quota exceeded in {tier} tier")]
    QuotaExceeded { tier: Tier },
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {value} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Master error type for all strata errors.
#[derive(Debug, Clone, Error)]
pub enum StrataError {
    #[error("Driver error: {0}")]
    Driver(#[from] DriverError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StrataError {
    fn from(err: serde_json::Error) -> Self {
        StrataError::Serialization(err.to_string())
    }
}

/// Convenience result alias used throughout the workspace.
pub type StrataResult<T> = Result<T, StrataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_error_display_names_tier() {
        let err = DriverError::Io {
            tier: Tier::Persistent,
            reason: "disk full".to_string(),
        };
        assert_eq!(err.to_string(), "I/O failure in persistent tier: disk full");
    }

    #[test]
    fn test_master_error_wraps_driver_error() {
        let err: StrataError = DriverError::QuotaExceeded { tier: Tier::Cookie }.into();
        assert!(matches!(err, StrataError::Driver(_)));
        assert!(err.to_string().contains("cookie"));
    }

    #[test]
    fn test_serde_error_converts() {
        let bad = serde_json::from_str::<serde_json::Value>("{");
        let err: StrataError = bad.expect_err("must fail").into();
        assert!(matches!(err, StrataError::Serialization(_)));
    }
}
