//! LoadReaderDashboardHandler - Query handler for the reader dashboard.

use std::sync::Arc;

use super::load_error::collect;
use super::DashboardLoadError;
use crate::domain::dashboard::ReaderDashboard;
use crate::ports::{DashboardApi, PostApi};

/// Fetches the reader's profile, feed, subscriptions and bookmarks concurrently.
pub struct LoadReaderDashboardHandler {
    dashboard_api: Arc<dyn DashboardApi>,
    post_api: Arc<dyn PostApi>,
}

impl LoadReaderDashboardHandler {
    pub fn new(dashboard_api: Arc<dyn DashboardApi>, post_api: Arc<dyn PostApi>) -> Self {
        Self {
            dashboard_api,
            post_api,
        }
    }

    pub async fn handle(&self) -> Result<ReaderDashboard, DashboardLoadError> {
        let (profile, posts, subscriptions, bookmarks) = futures::join!(
            self.dashboard_api.get_dashboard(),
            self.post_api.list_posts(None),
            self.dashboard_api.get_subscriptions(),
            self.dashboard_api.get_bookmarks(),
        );

        let mut failures = Vec::new();
        let profile = collect("dashboard", profile, &mut failures);
        let posts = collect("posts", posts, &mut failures);
        let subscriptions = collect("subscriptions", subscriptions, &mut failures);
        let bookmarks = collect("bookmarks", bookmarks, &mut failures);

        match (profile, posts, subscriptions, bookmarks) {
            (Some(profile), Some(posts), Some(subscriptions), Some(bookmarks)) => {
                tracing::info!(posts = posts.len(), "Reader dashboard loaded");
                Ok(ReaderDashboard::new(profile, posts, subscriptions).with_bookmarks(&bookmarks))
            }
            _ => Err(DashboardLoadError { failures }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::platform::MockPlatformApi;
    use crate::domain::content::post::test_support::post;
    use crate::domain::content::{Bookmark, DashboardData};
    use crate::domain::foundation::{PostId, Timestamp};
    use crate::ports::ApiError;

    fn profile() -> DashboardData {
        DashboardData {
            username: "naw".into(),
            profile_pic: None,
            bio: None,
            role: "user".into(),
            subscriptions: None,
            subscribers: None,
        }
    }

    fn handler(api: &MockPlatformApi) -> LoadReaderDashboardHandler {
        LoadReaderDashboardHandler::new(Arc::new(api.clone()), Arc::new(api.clone()))
    }

    #[tokio::test]
    async fn loads_every_collection() {
        let api = MockPlatformApi::new()
            .with_dashboard(profile())
            .with_posts(vec![post("p1", &"word ".repeat(450)), post("p2", "short")])
            .with_bookmarks(vec![Bookmark {
                id: PostId::new("p2").unwrap(),
                title: "Post p2".into(),
                author: "author-1".into(),
                created_at: Timestamp::now(),
            }]);

        let dashboard = handler(&api).handle().await.unwrap();
        let stats = dashboard.stats();

        assert_eq!(stats.total_posts, 2);
        assert_eq!(stats.total_reading_minutes, 4);
        assert_eq!(stats.bookmarks, 1);
        assert_eq!(stats.subscriptions, 0);
        assert!(api.was_called("get_subscriptions"));
    }

    #[tokio::test]
    async fn every_failed_fetch_is_reported() {
        let api = MockPlatformApi::new().with_dashboard(profile());
        api.set_method_error("list_posts", ApiError::from_status(500, None));
        api.set_method_error("get_bookmarks", ApiError::Network("reset".into()));

        let err = handler(&api).handle().await.unwrap_err();

        assert_eq!(err.failures.len(), 2);
        assert!(err.failed("posts"));
        assert!(err.failed("bookmarks"));
        assert!(!err.failed("dashboard"));
    }

    #[tokio::test]
    async fn retry_succeeds_once_backend_recovers() {
        let api = MockPlatformApi::new().with_dashboard(profile());
        api.set_error(ApiError::from_status(503, None));
        let handler = handler(&api);

        assert!(handler.handle().await.is_err());
        assert!(handler.handle().await.is_ok());
    }
}
