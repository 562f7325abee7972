//! Reader dashboard view.

use serde::Serialize;
use std::collections::HashSet;

use super::feed::{increment_likes, remove_by_id, PostFeed};
use crate::domain::content::{Bookmark, DashboardData, Post, Subscription};
use crate::domain::foundation::PostId;

/// Reading statistics shown in the reader's summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReaderStats {
    pub total_posts: usize,
    pub total_reading_minutes: u64,
    pub bookmarks: usize,
    pub subscriptions: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReaderDashboard {
    pub profile: DashboardData,
    pub posts: Vec<Post>,
    pub subscriptions: Vec<Subscription>,
    bookmarks: Vec<PostId>,
    liked: HashSet<PostId>,
}

impl ReaderDashboard {
    pub fn new(profile: DashboardData, posts: Vec<Post>, subscriptions: Vec<Subscription>) -> Self {
        Self {
            profile,
            posts,
            subscriptions,
            bookmarks: Vec::new(),
            liked: HashSet::new(),
        }
    }

    /// Seeds the bookmark list from bookmarks saved on the server.
    pub fn with_bookmarks(mut self, saved: &[Bookmark]) -> Self {
        for bookmark in saved {
            if !self.bookmarks.contains(&bookmark.id) {
                self.bookmarks.push(bookmark.id.clone());
            }
        }
        self
    }

    pub fn stats(&self) -> ReaderStats {
        ReaderStats {
            total_posts: self.posts.len(),
            total_reading_minutes: self.posts.iter().map(Post::reading_minutes).sum(),
            bookmarks: self.bookmarks.len(),
            subscriptions: self.subscriptions.len(),
        }
    }

    /// Adds or removes a bookmark. Returns whether the post is now bookmarked.
    pub fn toggle_bookmark(&mut self, post_id: &PostId) -> bool {
        if let Some(index) = self.bookmarks.iter().position(|id| id == post_id) {
            self.bookmarks.remove(index);
            false
        } else {
            self.bookmarks.push(post_id.clone());
            true
        }
    }

    pub fn is_bookmarked(&self, post_id: &PostId) -> bool {
        self.bookmarks.contains(post_id)
    }

    /// Bookmarked posts present in the feed, in bookmark order.
    pub fn bookmarked_posts(&self) -> Vec<&Post> {
        self.bookmarks
            .iter()
            .filter_map(|id| self.posts.iter().find(|p| &p.id == id))
            .collect()
    }

    pub fn is_liked(&self, post_id: &PostId) -> bool {
        self.liked.contains(post_id)
    }

    /// Bumps the post's like counter and toggles the liked marker.
    /// Unknown posts leave the marker untouched.
    pub fn record_like(&mut self, post_id: &PostId) -> bool {
        if !increment_likes(&mut self.posts, post_id) {
            return false;
        }
        if !self.liked.remove(post_id) {
            self.liked.insert(post_id.clone());
        }
        true
    }
}

impl PostFeed for ReaderDashboard {
    fn apply_like(&mut self, post_id: &PostId) -> bool {
        self.record_like(post_id)
    }

    fn remove_post(&mut self, post_id: &PostId) -> bool {
        self.bookmarks.retain(|id| id != post_id);
        self.liked.remove(post_id);
        remove_by_id(&mut self.posts, post_id)
    }
}
