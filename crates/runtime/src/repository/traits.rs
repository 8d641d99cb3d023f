//! Repository contract for saving and loading mutable runtime state.

use crate::repository::Result;

/// Durable string key-value store.
///
/// Values are opaque serialized text; interpreting them is the caller's job.
/// A read of an absent key is `Ok(None)`, never an error.
pub trait StateRepository: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<()>;

    /// Check if a value exists under `key`.
    fn exists(&self, key: &str) -> bool;
}
