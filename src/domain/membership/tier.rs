//! Membership tier definitions.
//!
//! Represents the membership levels available on Nexora.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Membership tier.
///
/// Determines whether premium content is revealed in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipTier {
    /// Free tier - premium stories show a preview and an upgrade prompt.
    #[default]
    Free,

    /// Monthly paid membership.
    Member,

    /// Creator - paid membership plus creator tools.
    Creator,
}

impl MembershipTier {
    /// Returns true if this tier is a paid tier.
    pub fn is_paid(&self) -> bool {
        matches!(self, MembershipTier::Member | MembershipTier::Creator)
    }

    /// Returns the string stored in client-local storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipTier::Free => "free",
            MembershipTier::Member => "member",
            MembershipTier::Creator => "creator",
        }
    }

    /// Restores a tier from its persisted form.
    ///
    /// Only the exact strings `member` and `creator` are honoured; absence or
    /// any other value falls back to `Free`.
    pub fn from_persisted(stored: Option<&str>) -> Self {
        match stored {
            Some("member") => MembershipTier::Member,
            Some("creator") => MembershipTier::Creator,
            _ => MembershipTier::Free,
        }
    }

    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            MembershipTier::Free => "Free",
            MembershipTier::Member => "Premium",
            MembershipTier::Creator => "Creator",
        }
    }
}

impl std::fmt::Display for MembershipTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for MembershipTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(MembershipTier::Free),
            "member" => Ok(MembershipTier::Member),
            "creator" => Ok(MembershipTier::Creator),
            other => Err(format!("unknown membership tier: {}", other)),
        }
    }
}
