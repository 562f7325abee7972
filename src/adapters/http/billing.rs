//! HTTP billing provider adapter.
//!
//! Talks to the billing routes served next to the web client:
//!
//! - `POST {base}{checkout_path}` returns `{ "url": ... }`
//! - `POST {base}{portal_path}` returns `{ "url": ... }`
//! - `GET {base}{checkout_path}/{session_id}` returns `{ "paid": bool, "tier": ... }`
//!
//! A response without a usable `url` is an error; callers must never treat
//! it as a completed checkout.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::BillingConfig;
use crate::domain::membership::{CheckoutConfirmation, CheckoutSessionId, RedirectUrl};
use crate::ports::{BillingError, BillingProvider};

#[derive(Debug, Deserialize)]
struct RedirectResponse {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Billing provider backed by the billing HTTP routes.
pub struct HttpBillingProvider {
    config: BillingConfig,
    http_client: reqwest::Client,
}

impl HttpBillingProvider {
    /// Create a provider whose requests give up after `config.timeout()`.
    pub fn new(config: BillingConfig) -> Result<Self, BillingError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| BillingError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// `{checkout_url}/{session_id}` with the id encoded as a single path segment.
    fn confirmation_url(&self, session_id: &CheckoutSessionId) -> Result<reqwest::Url, BillingError> {
        let invalid = || BillingError::Network(format!("Invalid billing URL: {}", self.config.checkout_url()));
        let mut url = reqwest::Url::parse(&self.config.checkout_url()).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .push(session_id.as_str());
        Ok(url)
    }

    /// Maps a non-2xx response to a provider error, keeping the body message.
    async fn provider_error(route: &str, response: reqwest::Response) -> BillingError {
        let status = response.status().as_u16();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message.or(body.error))
            .unwrap_or_else(|| format!("HTTP error! status: {}", status));

        tracing::error!(route, status, error = %message, "Billing request failed");
        BillingError::Provider { status, message }
    }

    async fn request_redirect(&self, route: &str, url: String) -> Result<RedirectUrl, BillingError> {
        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!(route, error = %e, "Billing service unreachable");
                BillingError::Network(e.to_string())
            })?;

        if !response.status().is_success() {
            return Err(Self::provider_error(route, response).await);
        }

        let body: RedirectResponse = response.json().await.map_err(|e| {
            tracing::error!(route, error = %e, "Failed to parse billing response");
            BillingError::Decode(e.to_string())
        })?;

        let redirect = body
            .url
            .filter(|u| !u.trim().is_empty())
            .ok_or(BillingError::MissingRedirectUrl)?;

        RedirectUrl::new(redirect).map_err(|e| BillingError::Decode(e.to_string()))
    }
}

#[async_trait]
impl BillingProvider for HttpBillingProvider {
    async fn create_checkout_session(&self) -> Result<RedirectUrl, BillingError> {
        self.request_redirect("checkout", self.config.checkout_url())
            .await
    }

    async fn create_portal_session(&self) -> Result<RedirectUrl, BillingError> {
        self.request_redirect("portal", self.config.portal_url())
            .await
    }

    async fn get_checkout_confirmation(
        &self,
        session_id: &CheckoutSessionId,
    ) -> Result<CheckoutConfirmation, BillingError> {
        let url = self.confirmation_url(session_id)?;

        let response = self.http_client.get(url).send().await.map_err(|e| {
            tracing::error!(session_id = %session_id, error = %e, "Billing service unreachable");
            BillingError::Network(e.to_string())
        })?;

        if !response.status().is_success() {
            return Err(Self::provider_error("checkout_confirmation", response).await);
        }

        response.json().await.map_err(|e| {
            tracing::error!(session_id = %session_id, error = %e, "Failed to parse checkout confirmation");
            BillingError::Decode(e.to_string())
        })
    }
}
