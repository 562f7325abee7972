//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Platform API Ports
//!
//! - `DashboardApi` - Dashboard, profile and subscription endpoints
//! - `PostApi` - Post listing, authoring and engagement
//! - `AuthApi` - Login and registration
//!
//! ## Billing Ports
//!
//! - `BillingProvider` - Checkout, billing portal and payment confirmation
//!
//! ## Storage Ports
//!
//! - `KeyValueStore` - Client-local persisted state (tier, auth token)
//! - `MediaStorage` - Editor image and file uploads
//! - `DatasetSink` - Generated dataset files

mod billing_provider;
mod dataset_sink;
mod key_value_store;
mod media_storage;
mod platform_api;

pub use billing_provider::{BillingError, BillingProvider};
pub use dataset_sink::{DatasetError, DatasetSink};
pub use key_value_store::{KeyValueStore, StorageError, TOKEN_STORAGE_KEY};
pub use media_storage::{MediaStorage, MediaUpload};
pub use platform_api::{
    ApiError, AuthApi, Credentials, DashboardApi, LoginResponse, MessageResponse, NewPost,
    PostApi, PostEnvelope, PostUpdate, RegisterResponse, Registration,
};
