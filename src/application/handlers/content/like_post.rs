//! LikePostHandler - Command handler for the like button.

use std::sync::Arc;

use tokio::sync::RwLock;

use super::ActionError;
use crate::application::in_flight::InFlightActions;
use crate::domain::dashboard::PostFeed;
use crate::domain::foundation::PostId;
use crate::ports::PostApi;

const ACTION: &str = "like";

/// Likes a post and merges the result into the feed once the call resolved.
pub struct LikePostHandler {
    api: Arc<dyn PostApi>,
    in_flight: InFlightActions,
}

impl LikePostHandler {
    pub fn new(api: Arc<dyn PostApi>, in_flight: InFlightActions) -> Self {
        Self { api, in_flight }
    }

    /// Returns whether the post was found in the feed.
    ///
    /// A second like for the same post while the first is still running is
    /// rejected with `ActionError::InFlight`.
    pub async fn handle<F>(&self, feed: &RwLock<F>, post_id: &PostId) -> Result<bool, ActionError>
    where
        F: PostFeed + Send + Sync,
    {
        let _guard = self
            .in_flight
            .begin(ACTION, post_id.as_str())
            .ok_or_else(|| ActionError::InFlight {
                action: ACTION,
                resource: post_id.to_string(),
            })?;

        self.api.like_post(post_id).await.map_err(|source| {
            tracing::warn!(post_id = %post_id, error = %source, "Like failed");
            ActionError::Api {
                action: ACTION,
                resource: post_id.to_string(),
                source,
            }
        })?;

        let applied = feed.write().await.apply_like(post_id);
        tracing::debug!(post_id = %post_id, applied, "Like recorded");
        Ok(applied)
    }
}
