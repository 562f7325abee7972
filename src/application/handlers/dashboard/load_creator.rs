//! LoadCreatorDashboardHandler - Query handler for the creator dashboard.

use std::sync::Arc;

use super::load_error::collect;
use super::DashboardLoadError;
use crate::domain::dashboard::CreatorDashboard;
use crate::ports::{DashboardApi, PostApi};

/// Fetches the creator's profile, posts and subscribers concurrently.
pub struct LoadCreatorDashboardHandler {
    dashboard_api: Arc<dyn DashboardApi>,
    post_api: Arc<dyn PostApi>,
}

impl LoadCreatorDashboardHandler {
    pub fn new(dashboard_api: Arc<dyn DashboardApi>, post_api: Arc<dyn PostApi>) -> Self {
        Self {
            dashboard_api,
            post_api,
        }
    }

    pub async fn handle(&self) -> Result<CreatorDashboard, DashboardLoadError> {
        let (profile, posts, subscribers) = futures::join!(
            self.dashboard_api.get_dashboard(),
            self.post_api.list_posts(None),
            self.dashboard_api.get_subscribers(),
        );

        let mut failures = Vec::new();
        let profile = collect("dashboard", profile, &mut failures);
        let posts = collect("posts", posts, &mut failures);
        let subscribers = collect("subscribers", subscribers, &mut failures);

        match (profile, posts, subscribers) {
            (Some(profile), Some(posts), Some(subscribers)) => {
                tracing::info!(
                    posts = posts.len(),
                    subscribers = subscribers.len(),
                    "Creator dashboard loaded"
                );
                Ok(CreatorDashboard::new(profile, posts, subscribers))
            }
            _ => Err(DashboardLoadError { failures }),
        }
    }
}
