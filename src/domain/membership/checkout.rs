//! Billing value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::MembershipTier;
use crate::domain::foundation::ValidationError;

/// An absolute URL the client should navigate to (checkout or billing portal).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RedirectUrl(String);

impl RedirectUrl {
    /// Creates a redirect URL, requiring an http(s) scheme.
    pub fn new(url: impl Into<String>) -> Result<Self, ValidationError> {
        let url = url.into();
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("url"));
        }
        if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
            return Err(ValidationError::invalid_format(
                "url",
                format!("expected an http(s) URL, got '{}'", trimmed),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RedirectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RedirectUrl {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RedirectUrl> for String {
    fn from(url: RedirectUrl) -> Self {
        url.0
    }
}

/// Identifier of a checkout session issued by the billing collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckoutSessionId(String);

impl CheckoutSessionId {
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("session_id"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CheckoutSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a checkout session as reported by the billing collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutConfirmation {
    /// Whether the payment has been captured.
    pub paid: bool,

    /// Tier purchased by the session.
    #[serde(default = "default_purchased_tier")]
    pub tier: MembershipTier,
}

fn default_purchased_tier() -> MembershipTier {
    MembershipTier::Member
}

impl CheckoutConfirmation {
    /// Returns the tier to grant, if the payment went through.
    pub fn granted_tier(&self) -> Option<MembershipTier> {
        if self.paid && self.tier.is_paid() {
            Some(self.tier)
        } else {
            None
        }
    }
}
