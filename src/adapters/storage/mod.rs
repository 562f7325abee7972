//! Storage Adapters
//!
//! Implementations of the client-local storage ports.
//!
//! ## Available Adapters
//!
//! - **FileKeyValueStore** - Persists key-value state as a YAML file on disk
//! - **InMemoryKeyValueStore** - Keeps key-value state in memory (testing/ephemeral sessions)
//! - **LocalMediaStorage** - Writes editor uploads to a media directory
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
//!
//! // Persisted across sessions
//! let store = FileKeyValueStore::new("./data/client_state.yaml");
//!
//! // Testing: in-memory storage
//! let store = InMemoryKeyValueStore::new();
//! ```

mod file_key_value_store;
mod in_memory_key_value_store;
mod local_media_storage;

pub use file_key_value_store::FileKeyValueStore;
pub use in_memory_key_value_store::InMemoryKeyValueStore;
pub use local_media_storage::LocalMediaStorage;
