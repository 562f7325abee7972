//! Membership domain module.
//!
//! Handles the reader's membership tier and the value objects exchanged
//! with the billing collaborator.
//!
//! # Module Structure
//!
//! - `tier` - MembershipTier levels and their persisted form
//! - `checkout` - Redirect URLs and payment confirmations

mod checkout;
mod tier;

pub use checkout::{CheckoutConfirmation, CheckoutSessionId, RedirectUrl};
pub use tier::MembershipTier;

/// Client-local storage key holding the persisted tier.
pub const TIER_STORAGE_KEY: &str = "membership:tier";
