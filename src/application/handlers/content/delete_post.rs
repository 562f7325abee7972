//! DeletePostHandler - Command handler for deleting a post from a dashboard.

use std::sync::Arc;

use tokio::sync::RwLock;

use super::ActionError;
use crate::application::in_flight::InFlightActions;
use crate::domain::dashboard::PostFeed;
use crate::domain::foundation::PostId;
use crate::ports::PostApi;

const ACTION: &str = "delete";

/// Deletes a post, then drops it from the latest feed state.
pub struct DeletePostHandler {
    api: Arc<dyn PostApi>,
    in_flight: InFlightActions,
}

impl DeletePostHandler {
    pub fn new(api: Arc<dyn PostApi>, in_flight: InFlightActions) -> Self {
        Self { api, in_flight }
    }

    /// Returns whether the post was still in the feed.
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

        self.api.delete_post(post_id).await.map_err(|source| {
            tracing::warn!(post_id = %post_id, error = %source, "Delete failed");
            ActionError::Api {
                action: ACTION,
                resource: post_id.to_string(),
                source,
            }
        })?;

        let removed = feed.write().await.remove_post(post_id);
        tracing::info!(post_id = %post_id, "Post deleted");
        Ok(removed)
    }
}
