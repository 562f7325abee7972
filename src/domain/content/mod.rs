//! Content domain module.
//!
//! Posts, users and subscriptions fetched from the platform API, and the
//! premium gate applied before a post is shown to a reader.

mod gate;
pub(crate) mod post;
mod subscription;
mod user;

pub use gate::{ContentGate, GatedContent, ReadablePost, UpgradePrompt, MIN_PREVIEW_CHARS};
pub use post::{Attachment, Post, PostStatus, WORDS_PER_MINUTE};
pub use subscription::{Subscription, SubscriptionPlan, SubscriptionStatus};
pub use user::{Bookmark, DashboardData, ProfileUpdate, Role, User};
