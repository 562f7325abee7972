//! Membership handler errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::membership::MembershipTier;
use crate::ports::{ApiError, BillingError, StorageError};

/// Errors from changing the membership tier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MembershipError {
    /// The tier could not be written, so it was not changed.
    #[error("Failed to persist membership tier: {0}")]
    Persistence(#[from] StorageError),

    #[error(transparent)]
    Billing(#[from] BillingError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl MembershipError {
    pub fn code(&self) -> ErrorCode {
        match self {
            MembershipError::Persistence(e) => e.code(),
            MembershipError::Billing(e) => e.code(),
            MembershipError::Api(e) => e.code(),
        }
    }
}

impl From<MembershipError> for DomainError {
    fn from(err: MembershipError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

/// Why a checkout could not be started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Already on the {0} plan")]
    AlreadySubscribed(MembershipTier),

    #[error("Checkout failed: {0}")]
    Billing(#[from] BillingError),
}

impl CheckoutError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CheckoutError::AlreadySubscribed(_) => ErrorCode::InvalidStateTransition,
            CheckoutError::Billing(e) => e.code(),
        }
    }
}

impl From<CheckoutError> for DomainError {
    fn from(err: CheckoutError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
