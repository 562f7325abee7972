//! Platform API Adapters
//!
//! - **MockPlatformApi** - In-process backend for tests and offline demos
//!
//! The reqwest client lives in `adapters::http`.

mod mock_platform_api;

pub use mock_platform_api::{MethodCall, MockPlatformApi};
