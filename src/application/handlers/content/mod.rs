//! Content handlers.
//!
//! - Opening a post through the membership gate
//! - Liking and deleting posts, merged into the latest feed state

mod action_error;
mod delete_post;
mod like_post;
mod open_post;

pub use action_error::ActionError;
pub use delete_post::DeletePostHandler;
pub use like_post::LikePostHandler;
pub use open_post::open_post;
