//! StartCheckoutHandler - Command handler for starting a membership checkout.

use std::sync::Arc;

use super::{CheckoutError, MembershipState};
use crate::domain::membership::RedirectUrl;
use crate::ports::BillingProvider;

/// Handler for the "Upgrade" button.
///
/// Asks the billing collaborator for a checkout session and returns the URL
/// to navigate to. The tier is never touched here: it only changes once the
/// payment is confirmed (see `ConfirmCheckoutHandler`).
pub struct StartCheckoutHandler {
    billing: Arc<dyn BillingProvider>,
    membership: Arc<MembershipState>,
}

impl StartCheckoutHandler {
    pub fn new(billing: Arc<dyn BillingProvider>, membership: Arc<MembershipState>) -> Self {
        Self {
            billing,
            membership,
        }
    }

    pub async fn handle(&self) -> Result<RedirectUrl, CheckoutError> {
        let current = self.membership.tier();
        if current.is_paid() {
            return Err(CheckoutError::AlreadySubscribed(current));
        }

        match self.billing.create_checkout_session().await {
            Ok(url) => {
                tracing::info!(url = %url, "Checkout session created");
                Ok(url)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Checkout session could not be created");
                Err(CheckoutError::Billing(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::billing::MockBillingProvider;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::domain::membership::{MembershipTier, TIER_STORAGE_KEY};
    use crate::ports::BillingError;

    async fn setup(tier: MembershipTier) -> (StartCheckoutHandler, MockBillingProvider, Arc<MembershipState>) {
        let store = InMemoryKeyValueStore::with_entries([(TIER_STORAGE_KEY, tier.as_str())]);
        let membership = Arc::new(MembershipState::load(Arc::new(store)).await.unwrap());
        let billing = MockBillingProvider::new();
        let handler = StartCheckoutHandler::new(Arc::new(billing.clone()), membership.clone());
        (handler, billing, membership)
    }

    #[tokio::test]
    async fn returns_checkout_url_without_changing_tier() {
        let (handler, billing, membership) = setup(MembershipTier::Free).await;
        billing.set_checkout_url(RedirectUrl::new("https://pay.example.com/cs_1").unwrap());

        let url = handler.handle().await.unwrap();

        assert_eq!(url.as_str(), "https://pay.example.com/cs_1");
        assert_eq!(membership.tier(), MembershipTier::Free);
    }

    #[tokio::test]
    async fn billing_failure_is_returned_and_grants_nothing() {
        let (handler, billing, membership) = setup(MembershipTier::Free).await;
        billing.set_error(BillingError::Provider {
            status: 500,
            message: "Stripe is down".into(),
        });

        let result = handler.handle().await;

        assert!(matches!(result, Err(CheckoutError::Billing(BillingError::Provider { status: 500, .. }))));
        assert_eq!(membership.tier(), MembershipTier::Free);
    }

    #[tokio::test]
    async fn missing_url_is_an_error() {
        let (handler, billing, membership) = setup(MembershipTier::Free).await;
        billing.set_error(BillingError::MissingRedirectUrl);

        assert_eq!(
            handler.handle().await,
            Err(CheckoutError::Billing(BillingError::MissingRedirectUrl))
        );
        assert!(!membership.is_paid_member());
    }

    #[tokio::test]
    async fn paid_member_cannot_start_another_checkout() {
        let (handler, billing, _) = setup(MembershipTier::Member).await;

        assert_eq!(
            handler.handle().await,
            Err(CheckoutError::AlreadySubscribed(MembershipTier::Member))
        );
        assert!(!billing.was_called("create_checkout_session"));
    }
}
