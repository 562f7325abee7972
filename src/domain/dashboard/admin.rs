//! Admin dashboard view.

use serde::Serialize;

use super::RevenueSplit;
use crate::domain::content::{DashboardData, Post, Subscription, User};
use crate::domain::foundation::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub total_users: usize,
    pub total_posts: usize,
    pub total_subscriptions: usize,
    /// Platform share of every active subscription.
    pub platform_revenue: Money,
    /// Creator share of the same subscriptions.
    pub creator_earnings: Money,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminDashboard {
    pub profile: DashboardData,
    pub posts: Vec<Post>,
    pub subscriptions: Vec<Subscription>,
    pub users: Vec<User>,
}

impl AdminDashboard {
    pub fn new(
        profile: DashboardData,
        posts: Vec<Post>,
        subscriptions: Vec<Subscription>,
        users: Vec<User>,
    ) -> Self {
        Self {
            profile,
            posts,
            subscriptions,
            users,
        }
    }

    pub fn platform_stats(&self) -> PlatformStats {
        let (platform_revenue, creator_earnings) = self
            .subscriptions
            .iter()
            .filter(|s| s.is_active())
            .map(|s| RevenueSplit::of(s.price))
            .fold((Money::ZERO, Money::ZERO), |(platform, creator), split| {
                (platform + split.platform, creator + split.creator)
            });

        PlatformStats {
            total_users: self.users.len(),
            total_posts: self.posts.len(),
            total_subscriptions: self.subscriptions.len(),
            platform_revenue,
            creator_earnings,
        }
    }
}
