//! Opaque key-value persistence
//!
//! Values are already-serialized strings; the store never inspects them.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Get/set-by-key persistence capability
///
/// Implementations must be usable from a shared handle, so every method
/// takes `&self`.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// Returns `Ok(None)` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value stored under `key`
    ///
    /// Returns `Ok(true)` if a value was removed.
    fn remove(&self, key: &str) -> Result<bool>;
}
