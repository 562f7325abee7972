//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST API client and billing routes (reqwest)
//! - `billing` - Mock billing provider for tests and demos
//! - `platform` - Mock platform API for tests and demos
//! - `storage` - Key-value stores and media storage
//! - `dataset` - Dataset file output

pub mod billing;
pub mod dataset;
pub mod http;
pub mod platform;
pub mod storage;

pub use billing::MockBillingProvider;
pub use dataset::FileDatasetSink;
pub use http::{HttpBillingProvider, RestApiClient};
pub use platform::MockPlatformApi;
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore, LocalMediaStorage};
