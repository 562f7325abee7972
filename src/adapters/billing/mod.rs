//! Billing Adapters
//!
//! - **MockBillingProvider** - Configurable in-process provider for tests and demos
//!
//! The HTTP implementation lives in `adapters::http`.

mod mock_billing_provider;

pub use mock_billing_provider::{MethodCall, MockBillingProvider};
