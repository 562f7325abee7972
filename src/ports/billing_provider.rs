//! Billing provider port.
//!
//! The billing collaborator issues checkout and portal redirect URLs and
//! reports whether a checkout session has been paid. No payment is ever
//! processed by the client itself.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::membership::{CheckoutConfirmation, CheckoutSessionId, RedirectUrl};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingError {
    #[error("Billing service unreachable: {0}")]
    Network(String),

    #[error("Billing service returned {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("Billing response did not contain a redirect URL")]
    MissingRedirectUrl,

    #[error("Failed to decode billing response: {0}")]
    Decode(String),

    #[error("Payment for checkout session {0} is not confirmed")]
    NotConfirmed(String),
}

impl BillingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            BillingError::NotConfirmed(_) => ErrorCode::PaymentNotConfirmed,
            BillingError::Network(_) => ErrorCode::NetworkError,
            BillingError::Provider { status: 404, .. } => ErrorCode::NotFound,
            BillingError::Provider { .. }
            | BillingError::MissingRedirectUrl
            | BillingError::Decode(_) => ErrorCode::BillingUnavailable,
        }
    }
}

impl From<BillingError> for DomainError {
    fn from(err: BillingError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

/// Port for the external billing collaborator.
#[async_trait]
pub trait BillingProvider: Send + Sync {
    /// Requests a checkout session for the monthly membership.
    async fn create_checkout_session(&self) -> Result<RedirectUrl, BillingError>;

    /// Requests a billing portal session for the signed-in customer.
    async fn create_portal_session(&self) -> Result<RedirectUrl, BillingError>;

    /// Looks up whether a checkout session has been paid.
    async fn get_checkout_confirmation(
        &self,
        session_id: &CheckoutSessionId,
    ) -> Result<CheckoutConfirmation, BillingError>;
}
