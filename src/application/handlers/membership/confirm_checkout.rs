//! ConfirmCheckoutHandler - Command handler for the checkout return page.

use std::sync::Arc;

use super::{MembershipError, MembershipState};
use crate::domain::membership::{CheckoutSessionId, MembershipTier};
use crate::ports::{BillingError, BillingProvider};

/// Command to confirm a finished checkout.
#[derive(Debug, Clone)]
pub struct ConfirmCheckoutCommand {
    pub session_id: CheckoutSessionId,
}

/// Handler that grants the purchased tier once the payment is confirmed.
pub struct ConfirmCheckoutHandler {
    billing: Arc<dyn BillingProvider>,
    membership: Arc<MembershipState>,
}

impl ConfirmCheckoutHandler {
    pub fn new(billing: Arc<dyn BillingProvider>, membership: Arc<MembershipState>) -> Self {
        Self {
            billing,
            membership,
        }
    }

    /// Returns the tier now in effect.
    ///
    /// # Errors
    ///
    /// - `Billing(NotConfirmed)` when the session exists but was not paid
    /// - `Billing(..)` when the lookup itself failed
    /// - `Persistence` when the new tier could not be stored
    ///
    /// In every error case the tier is unchanged.
    pub async fn handle(&self, cmd: ConfirmCheckoutCommand) -> Result<MembershipTier, MembershipError> {
        let confirmation = self
            .billing
            .get_checkout_confirmation(&cmd.session_id)
            .await?;

        let Some(tier) = confirmation.granted_tier() else {
            tracing::warn!(session_id = %cmd.session_id, "Checkout session not paid");
            return Err(BillingError::NotConfirmed(cmd.session_id.to_string()).into());
        };

        self.membership.set_tier(tier).await?;
        tracing::info!(session_id = %cmd.session_id, tier = tier.as_str(), "Checkout confirmed");
        Ok(tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::billing::MockBillingProvider;
    use crate::adapters::storage::InMemoryKeyValueStore;

    async fn setup() -> (ConfirmCheckoutHandler, MockBillingProvider, Arc<MembershipState>) {
        let store = InMemoryKeyValueStore::new();
        let membership = Arc::new(MembershipState::load(Arc::new(store)).await.unwrap());
        let billing = MockBillingProvider::new();
        let handler = ConfirmCheckoutHandler::new(Arc::new(billing.clone()), membership.clone());
        (handler, billing, membership)
    }

    fn command(id: &str) -> ConfirmCheckoutCommand {
        ConfirmCheckoutCommand {
            session_id: CheckoutSessionId::new(id).unwrap(),
        }
    }

    #[tokio::test]
    async fn paid_session_upgrades_to_member() {
        let (handler, billing, membership) = setup().await;
        billing.confirm_session("cs_paid", MembershipTier::Member);

        let tier = handler.handle(command("cs_paid")).await.unwrap();

        assert_eq!(tier, MembershipTier::Member);
        assert!(membership.is_paid_member());
    }

    #[tokio::test]
    async fn unpaid_session_is_not_confirmed() {
        let (handler, billing, membership) = setup().await;
        billing.pending_session("cs_pending");

        let result = handler.handle(command("cs_pending")).await;

        assert_eq!(
            result,
            Err(MembershipError::Billing(BillingError::NotConfirmed("cs_pending".into())))
        );
        assert_eq!(membership.tier(), MembershipTier::Free);
    }

    #[tokio::test]
    async fn lookup_failure_leaves_tier_unchanged() {
        let (handler, billing, membership) = setup().await;
        billing.confirm_session("cs_paid", MembershipTier::Member);
        billing.set_error(BillingError::Network("timeout".into()));

        assert!(handler.handle(command("cs_paid")).await.is_err());
        assert_eq!(membership.tier(), MembershipTier::Free);
    }
}
