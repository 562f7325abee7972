//! Creator dashboard view.
//!
//! All statistics are reductions over the fetched post list; nothing is
//! fetched separately.

use serde::Serialize;

use super::feed::{increment_likes, remove_by_id, PostFeed};
use super::RevenueSplit;
use crate::domain::content::{DashboardData, Post, PostStatus, User};
use crate::domain::foundation::{Money, PostId};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorAnalytics {
    pub total_views: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub total_earnings: Money,
    /// (likes + comments) / views, as a percentage. Zero without views.
    pub engagement_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCounts {
    pub total: usize,
    pub published: usize,
    pub premium: usize,
    pub drafts: usize,
}

/// Creator share earned by a single premium post.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostEarnings {
    pub post_id: PostId,
    pub title: String,
    pub price: Money,
    pub creator_share: Money,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatorDashboard {
    pub profile: DashboardData,
    pub posts: Vec<Post>,
    pub subscribers: Vec<User>,
}

impl CreatorDashboard {
    pub fn new(profile: DashboardData, posts: Vec<Post>, subscribers: Vec<User>) -> Self {
        Self {
            profile,
            posts,
            subscribers,
        }
    }

    pub fn analytics(&self) -> CreatorAnalytics {
        let total_views: u64 = self.posts.iter().map(|p| p.views).sum();
        let total_likes: u64 = self.posts.iter().map(|p| p.likes).sum();
        let total_comments: u64 = self.posts.iter().map(|p| p.comments).sum();
        let total_earnings: Money = self
            .earnings_by_post()
            .into_iter()
            .map(|e| e.creator_share)
            .sum();

        let engagement_rate = if total_views == 0 {
            0.0
        } else {
            (total_likes + total_comments) as f64 / total_views as f64 * 100.0
        };

        CreatorAnalytics {
            total_views,
            total_likes,
            total_comments,
            total_earnings,
            engagement_rate,
        }
    }

    pub fn post_counts(&self) -> PostCounts {
        PostCounts {
            total: self.posts.len(),
            published: self
                .posts
                .iter()
                .filter(|p| p.status == PostStatus::Published)
                .count(),
            premium: self.posts.iter().filter(|p| p.is_premium).count(),
            drafts: self
                .posts
                .iter()
                .filter(|p| p.status == PostStatus::Draft)
                .count(),
        }
    }

    /// Earnings of every premium post that has a price, in feed order.
    pub fn earnings_by_post(&self) -> Vec<PostEarnings> {
        self.posts
            .iter()
            .filter_map(|post| {
                let price = post.premium_price()?;
                Some(PostEarnings {
                    post_id: post.id.clone(),
                    title: post.title.clone(),
                    price,
                    creator_share: RevenueSplit::of(price).creator,
                })
            })
            .collect()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn record_like(&mut self, post_id: &PostId) -> bool {
        increment_likes(&mut self.posts, post_id)
    }
}

impl PostFeed for CreatorDashboard {
    fn apply_like(&mut self, post_id: &PostId) -> bool {
        self.record_like(post_id)
    }

    fn remove_post(&mut self, post_id: &PostId) -> bool {
        remove_by_id(&mut self.posts, post_id)
    }
}
