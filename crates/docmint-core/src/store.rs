//! Local store boundary trait.
//!
//! Defines the interface for the on-device key-value persistence
//! capability the document lifecycle depends on.

use crate::error::Result;
use async_trait::async_trait;

/// The single store key holding the JSON-serialized array of all saved
/// documents across all templates.
pub const DOCUMENTS_KEY: &str = "documents";

/// An abstract asynchronous string-keyed store.
///
/// This trait decouples the document lifecycle from the concrete
/// storage mechanism (a JSON file directory, an in-memory map, a mobile
/// key-value bridge). Implementations must treat a missing key as
/// `Ok(None)`, not as an error.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))`: Key present
    /// - `Ok(None)`: Key absent
    /// - `Err(_)`: Store unavailable or unreadable
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Value written durably
    /// - `Err(_)`: Store unavailable or the write failed
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
