//! Post collections that action results are merged into.

use crate::domain::content::Post;
use crate::domain::foundation::PostId;

/// A dashboard holding a mutable list of posts.
///
/// Action handlers call these after the network call resolved, against the
/// latest state of the collection.
pub trait PostFeed {
    /// Records a successful like. Returns false if the post is not in the feed.
    fn apply_like(&mut self, post_id: &PostId) -> bool;

    /// Drops a deleted post. Returns false if it was not in the feed.
    fn remove_post(&mut self, post_id: &PostId) -> bool;
}

/// Increments the like counter of `post_id` in `posts`.
pub(crate) fn increment_likes(posts: &mut [Post], post_id: &PostId) -> bool {
    match posts.iter_mut().find(|p| &p.id == post_id) {
        Some(post) => {
            post.likes += 1;
            true
        }
        None => false,
    }
}

pub(crate) fn remove_by_id(posts: &mut Vec<Post>, post_id: &PostId) -> bool {
    let before = posts.len();
    posts.retain(|p| &p.id != post_id);
    posts.len() != before
}
