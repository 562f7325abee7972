//! Opening a post for reading.

use crate::application::handlers::membership::MembershipState;
use crate::domain::content::{Post, ReadablePost};

/// Gates `post` by the current membership.
///
/// Free posts are always shown in full; premium posts are cut to a preview
/// unless the member is on a paid tier.
pub fn open_post(post: &Post, membership: &MembershipState) -> ReadablePost {
    ReadablePost::open(post, membership.is_paid_member())
}
