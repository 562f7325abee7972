//! Billing configuration

use std::time::Duration;

use serde::Deserialize;

use super::error::{require_http_url, ValidationError};

/// Billing collaborator endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct BillingConfig {
    /// Origin serving the billing routes
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Checkout session route; confirmations are read from `{checkout_path}/{id}`
    #[serde(default = "default_checkout_path")]
    pub checkout_path: String,

    /// Billing portal route
    #[serde(default = "default_portal_path")]
    pub portal_path: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl BillingConfig {
    pub fn checkout_url(&self) -> String {
        format!("{}{}", self.base_url, self.checkout_path)
    }

    pub fn portal_url(&self) -> String {
        format!("{}{}", self.base_url, self.portal_path)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate billing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_http_url("NEXORA__BILLING__BASE_URL", &self.base_url)?;
        if !self.checkout_path.starts_with('/') {
            return Err(ValidationError::InvalidPath("NEXORA__BILLING__CHECKOUT_PATH"));
        }
        if !self.portal_path.starts_with('/') {
            return Err(ValidationError::InvalidPath("NEXORA__BILLING__PORTAL_PATH"));
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            checkout_path: default_checkout_path(),
            portal_path: default_portal_path(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_checkout_path() -> String {
    "/api/billing/checkout".to_string()
}

fn default_portal_path() -> String {
    "/api/billing/portal".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
