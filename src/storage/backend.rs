//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait, a durable string-keyed key-value
//! store. Preferences and the wishlist are layered on top of it as plain keys,
//! so any backend that can get and set strings can persist the browser state.

use crate::domain::error::Result;

/// Abstraction over durable key-value storage.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON file with atomic writes (default)
/// - [`MemoryStorage`](crate::storage::MemoryStorage): in-process map, nothing persisted
///
/// # Examples
///
/// ```no_run
/// use shelfwise::storage::{JsonStorage, Storage};
/// use std::path::PathBuf;
///
/// let mut storage = JsonStorage::new(PathBuf::from("/tmp/shelfwise.json"))?;
/// storage.set("searchPreference", "whale")?;
/// assert_eq!(storage.get("searchPreference")?.as_deref(), Some("whale"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Storage: Send {
    /// Reads the value stored under `key`, `Ok(None)` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
