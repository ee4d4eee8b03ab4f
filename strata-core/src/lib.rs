//! Strata Core - Domain Types
//!
//! Shared types for the strata cascading key/value store: tier
//! identifiers, multi-segment keys, the expiration envelope, option
//! resolution and the error taxonomy. This crate contains no driver
//! or engine logic; that lives in `strata-storage`.

pub mod envelope;
pub mod error;
pub mod key;
pub mod options;
pub mod tier;

pub use envelope::{unwrap, wrap, Envelope, Unwrapped, DAYS_PER_YEAR, MS_PER_DAY};
pub use error::{ConfigError, DriverError, StrataError, StrataResult};
pub use key::{Key, Segment};
pub use options::{Overrides, StoreOptions, DEFAULT_KEY_DELIMITER, DEFAULT_NAMESPACE};
pub use tier::Tier;
