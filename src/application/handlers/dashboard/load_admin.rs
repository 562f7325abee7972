//! LoadAdminDashboardHandler - Query handler for the admin dashboard.

use std::sync::Arc;

use super::load_error::collect;
use super::DashboardLoadError;
use crate::domain::dashboard::AdminDashboard;
use crate::ports::{DashboardApi, PostApi};

/// Fetches profile, posts, subscriptions and users concurrently.
///
/// The backend exposes no user listing; the subscriber listing stands in
/// for the platform's users.
pub struct LoadAdminDashboardHandler {
    dashboard_api: Arc<dyn DashboardApi>,
    post_api: Arc<dyn PostApi>,
}

impl LoadAdminDashboardHandler {
    pub fn new(dashboard_api: Arc<dyn DashboardApi>, post_api: Arc<dyn PostApi>) -> Self {
        Self {
            dashboard_api,
            post_api,
        }
    }

    pub async fn handle(&self) -> Result<AdminDashboard, DashboardLoadError> {
        let (profile, posts, subscriptions, users) = futures::join!(
            self.dashboard_api.get_dashboard(),
            self.post_api.list_posts(None),
            self.dashboard_api.get_subscriptions(),
            self.dashboard_api.get_subscribers(),
        );

        let mut failures = Vec::new();
        let profile = collect("dashboard", profile, &mut failures);
        let posts = collect("posts", posts, &mut failures);
        let subscriptions = collect("subscriptions", subscriptions, &mut failures);
        let users = collect("users", users, &mut failures);

        match (profile, posts, subscriptions, users) {
            (Some(profile), Some(posts), Some(subscriptions), Some(users)) => {
                tracing::info!(
                    posts = posts.len(),
                    subscriptions = subscriptions.len(),
                    users = users.len(),
                    "Admin dashboard loaded"
                );
                Ok(AdminDashboard::new(profile, posts, subscriptions, users))
            }
            _ => Err(DashboardLoadError { failures }),
        }
    }
}
