//! Mock billing provider for testing.
//!
//! Provides a configurable mock implementation of `BillingProvider` for unit
//! and integration tests. Supports:
//! - Pre-configured redirect URLs and confirmations
//! - Error injection
//! - Call tracking

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::membership::{CheckoutConfirmation, CheckoutSessionId, MembershipTier, RedirectUrl};
use crate::ports::{BillingError, BillingProvider};

const DEFAULT_CHECKOUT_URL: &str = "https://billing.mock/checkout/session";
const DEFAULT_PORTAL_URL: &str = "https://billing.mock/portal/session";

/// Mock billing provider for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockBillingProvider::new();
///
/// // Configure a paid session
/// mock.confirm_session("cs_123", MembershipTier::Member);
///
/// // Inject errors
/// mock.set_method_error("create_checkout_session", BillingError::MissingRedirectUrl);
/// ```
#[derive(Default)]
pub struct MockBillingProvider {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Checkout URL to return; a default one when unset.
    checkout_url: Option<RedirectUrl>,

    /// Portal URL to return; a default one when unset.
    portal_url: Option<RedirectUrl>,

    /// Confirmations by checkout session id. Unknown sessions are unpaid.
    confirmations: HashMap<String, CheckoutConfirmation>,

    /// Error to return on the next call to any method (consumed).
    next_error: Option<BillingError>,

    /// Errors returned every time a given method is called.
    method_errors: HashMap<String, BillingError>,

    call_log: Vec<MethodCall>,
}

/// Recorded method call for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodCall {
    pub method: String,
    pub args: Vec<String>,
}

impl MockBillingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider whose every call fails with `error`.
    pub fn failing(error: BillingError) -> Self {
        let mock = Self::new();
        for method in [
            "create_checkout_session",
            "create_portal_session",
            "get_checkout_confirmation",
        ] {
            mock.set_method_error(method, error.clone());
        }
        mock
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        // A panicking test thread must not poison the mock for the others.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    pub fn set_checkout_url(&self, url: RedirectUrl) {
        self.state().checkout_url = Some(url);
    }

    pub fn set_portal_url(&self, url: RedirectUrl) {
        self.state().portal_url = Some(url);
    }

    /// Marks a checkout session as paid for `tier`.
    pub fn confirm_session(&self, session_id: &str, tier: MembershipTier) {
        self.state().confirmations.insert(
            session_id.to_string(),
            CheckoutConfirmation { paid: true, tier },
        );
    }

    /// Registers a session that exists but has not been paid.
    pub fn pending_session(&self, session_id: &str) {
        self.state().confirmations.insert(
            session_id.to_string(),
            CheckoutConfirmation {
                paid: false,
                tier: MembershipTier::Member,
            },
        );
    }

    /// Set an error to return on the next call to any method.
    pub fn set_error(&self, error: BillingError) {
        self.state().next_error = Some(error);
    }

    /// Set an error for a specific method.
    pub fn set_method_error(&self, method: &str, error: BillingError) {
        self.state().method_errors.insert(method.to_string(), error);
    }

    pub fn clear_errors(&self) {
        let mut state = self.state();
        state.next_error = None;
        state.method_errors.clear();
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    pub fn calls(&self) -> Vec<MethodCall> {
        self.state().call_log.clone()
    }

    pub fn was_called(&self, method: &str) -> bool {
        self.state().call_log.iter().any(|c| c.method == method)
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.state()
            .call_log
            .iter()
            .filter(|c| c.method == method)
            .count()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Internal Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn record_call(&self, method: &str, args: Vec<String>) {
        self.state().call_log.push(MethodCall {
            method: method.to_string(),
            args,
        });
    }

    fn check_error(&self, method: &str) -> Result<(), BillingError> {
        let mut state = self.state();

        if let Some(error) = state.method_errors.get(method) {
            return Err(error.clone());
        }

        if let Some(error) = state.next_error.take() {
            return Err(error);
        }

        Ok(())
    }

    fn default_url(url: &str) -> Result<RedirectUrl, BillingError> {
        RedirectUrl::new(url).map_err(|e| BillingError::Decode(e.to_string()))
    }
}

impl Clone for MockBillingProvider {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl BillingProvider for MockBillingProvider {
    async fn create_checkout_session(&self) -> Result<RedirectUrl, BillingError> {
        self.record_call("create_checkout_session", vec![]);
        self.check_error("create_checkout_session")?;

        match self.state().checkout_url.clone() {
            Some(url) => Ok(url),
            None => Self::default_url(DEFAULT_CHECKOUT_URL),
        }
    }

    async fn create_portal_session(&self) -> Result<RedirectUrl, BillingError> {
        self.record_call("create_portal_session", vec![]);
        self.check_error("create_portal_session")?;

        match self.state().portal_url.clone() {
            Some(url) => Ok(url),
            None => Self::default_url(DEFAULT_PORTAL_URL),
        }
    }

    async fn get_checkout_confirmation(
        &self,
        session_id: &CheckoutSessionId,
    ) -> Result<CheckoutConfirmation, BillingError> {
        self.record_call("get_checkout_confirmation", vec![session_id.to_string()]);
        self.check_error("get_checkout_confirmation")?;

        Ok(self
            .state()
            .confirmations
            .get(session_id.as_str())
            .copied()
            .unwrap_or(CheckoutConfirmation {
                paid: false,
                tier: MembershipTier::Member,
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_default_urls() {
        let mock = MockBillingProvider::new();
        let checkout = mock.create_checkout_session().await.unwrap();
        let portal = mock.create_portal_session().await.unwrap();
        assert_eq!(checkout.as_str(), DEFAULT_CHECKOUT_URL);
        assert_eq!(portal.as_str(), DEFAULT_PORTAL_URL);
    }

    #[tokio::test]
    async fn configured_url_is_returned() {
        let mock = MockBillingProvider::new();
        mock.set_checkout_url(RedirectUrl::new("https://pay.example.com/cs_9").unwrap());
        assert_eq!(
            mock.create_checkout_session().await.unwrap().as_str(),
            "https://pay.example.com/cs_9"
        );
    }

    #[tokio::test]
    async fn global_error_is_consumed_once() {
        let mock = MockBillingProvider::new();
        mock.set_error(BillingError::Network("down".into()));
        assert!(mock.create_portal_session().await.is_err());
        assert!(mock.create_portal_session().await.is_ok());
    }

    #[tokio::test]
    async fn method_error_persists() {
        let mock = MockBillingProvider::failing(BillingError::MissingRedirectUrl);
        assert_eq!(
            mock.create_checkout_session().await,
            Err(BillingError::MissingRedirectUrl)
        );
        assert_eq!(
            mock.create_checkout_session().await,
            Err(BillingError::MissingRedirectUrl)
        );
        mock.clear_errors();
        assert!(mock.create_checkout_session().await.is_ok());
    }

    #[tokio::test]
    async fn unknown_sessions_are_unpaid() {
        let mock = MockBillingProvider::new();
        mock.confirm_session("cs_paid", MembershipTier::Creator);

        let paid = mock
            .get_checkout_confirmation(&CheckoutSessionId::new("cs_paid").unwrap())
            .await
            .unwrap();
        let unknown = mock
            .get_checkout_confirmation(&CheckoutSessionId::new("cs_other").unwrap())
            .await
            .unwrap();

        assert_eq!(paid.granted_tier(), Some(MembershipTier::Creator));
        assert_eq!(unknown.granted_tier(), None);
    }

    #[tokio::test]
    async fn tracks_calls() {
        let mock = MockBillingProvider::new();
        let clone = mock.clone();
        clone.create_checkout_session().await.unwrap();
        clone
            .get_checkout_confirmation(&CheckoutSessionId::new("cs_1").unwrap())
            .await
            .unwrap();

        assert!(mock.was_called("create_checkout_session"));
        assert_eq!(mock.call_count("create_portal_session"), 0);
        assert_eq!(mock.calls()[1].args, vec!["cs_1".to_string()]);
    }
}
