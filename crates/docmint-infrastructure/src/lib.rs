//! Docmint infrastructure: concrete adapters for the core boundary
//! traits.
//!
//! Provides the file-backed local store used by the application and an
//! in-memory store for tests and embedders.

pub mod file_store;
pub mod memory_store;

pub use crate::file_store::FileKeyValueStore;
pub use crate::memory_store::MemoryKeyValueStore;
