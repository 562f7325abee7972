//! BecomeCreatorHandler - Command handler for "Become a creator".

use std::sync::Arc;

use super::{MembershipError, MembershipState};
use crate::domain::membership::MembershipTier;
use crate::ports::DashboardApi;

/// Promotes the user to creator on the backend, then locally.
pub struct BecomeCreatorHandler {
    api: Arc<dyn DashboardApi>,
    membership: Arc<MembershipState>,
}

impl BecomeCreatorHandler {
    pub fn new(api: Arc<dyn DashboardApi>, membership: Arc<MembershipState>) -> Self {
        Self { api, membership }
    }

    /// Returns the backend's acknowledgement message.
    ///
    /// An API failure leaves the local tier unchanged.
    pub async fn handle(&self) -> Result<String, MembershipError> {
        let response = self.api.upgrade_to_creator().await?;
        self.membership.upgrade_to_creator().await?;

        tracing::info!(tier = MembershipTier::Creator.as_str(), "User upgraded to creator");
        Ok(response.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::platform::MockPlatformApi;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::ports::ApiError;

    async fn setup() -> (BecomeCreatorHandler, MockPlatformApi, Arc<MembershipState>) {
        let membership = Arc::new(
            MembershipState::load(Arc::new(InMemoryKeyValueStore::new()))
                .await
                .unwrap(),
        );
        let api = MockPlatformApi::new();
        let handler = BecomeCreatorHandler::new(Arc::new(api.clone()), membership.clone());
        (handler, api, membership)
    }

    #[tokio::test]
    async fn upgrades_backend_then_local_tier() {
        let (handler, api, membership) = setup().await;

        let message = handler.handle().await.unwrap();

        assert_eq!(message, "Upgraded to creator");
        assert!(api.was_called("upgrade_to_creator"));
        assert_eq!(membership.tier(), MembershipTier::Creator);
    }

    #[tokio::test]
    async fn api_failure_leaves_tier_unchanged() {
        let (handler, api, membership) = setup().await;
        api.set_error(ApiError::from_status(403, Some("Not allowed".into())));

        let result = handler.handle().await;

        assert!(matches!(result, Err(MembershipError::Api(_))));
        assert_eq!(membership.tier(), MembershipTier::Free);
    }
}
