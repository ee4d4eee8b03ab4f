//! Bundled storage drivers.
//!
//! One driver per backing store kind. Embedders with native tiers
//! (browser storage, cookie jars, ...) supply their own
//! [`StorageDriver`](crate::driver::StorageDriver) implementations
//! instead.

pub mod file;
pub mod memory;
pub mod unsupported;

pub use file::FileDriver;
pub use memory::MemoryDriver;
pub use unsupported::UnsupportedDriver;
