//! OpenBillingPortalHandler - Command handler for the "Manage billing" button.

use std::sync::Arc;

use crate::domain::membership::RedirectUrl;
use crate::ports::{BillingError, BillingProvider};

/// Handler returning the billing portal URL for the signed-in customer.
///
/// A failure is returned as is; nothing about the membership changes.
pub struct OpenBillingPortalHandler {
    billing: Arc<dyn BillingProvider>,
}

impl OpenBillingPortalHandler {
    pub fn new(billing: Arc<dyn BillingProvider>) -> Self {
        Self { billing }
    }

    pub async fn handle(&self) -> Result<RedirectUrl, BillingError> {
        self.billing.create_portal_session().await.map_err(|e| {
            tracing::warn!(error = %e, "Billing portal session could not be created");
            e
        })
    }
}
