//! Membership handlers.
//!
//! ## State
//! - `MembershipState` - the client's persisted tier and its local transitions
//!
//! ## Commands
//! - Starting a checkout and opening the billing portal
//! - Confirming a paid checkout
//! - Becoming a creator

mod become_creator;
mod confirm_checkout;
mod errors;
mod membership_state;
mod open_billing_portal;
mod start_checkout;

pub use become_creator::BecomeCreatorHandler;
pub use confirm_checkout::{ConfirmCheckoutCommand, ConfirmCheckoutHandler};
pub use errors::{CheckoutError, MembershipError};
pub use membership_state::MembershipState;
pub use open_billing_portal::OpenBillingPortalHandler;
pub use start_checkout::StartCheckoutHandler;
