//! HTTP adapters - clients for the platform REST API and billing routes.

mod billing;
mod rest_api_client;

pub use billing::HttpBillingProvider;
pub use rest_api_client::RestApiClient;
