//! PublishDocumentHandler - Command handler for the editor's "Publish" button.

use std::sync::Arc;

use thiserror::Error;

use crate::application::in_flight::InFlightActions;
use crate::domain::content::{Post, PostStatus};
use crate::domain::editor::{Document, EditorError};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, ValidationError};
use crate::ports::{ApiError, NewPost, PostApi};

const ACTION: &str = "publish";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublishError {
    #[error("Document is already published")]
    AlreadyPublished,

    #[error("This document is already being published")]
    InFlight,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to publish post: {0}")]
    Api(#[from] ApiError),
}

impl From<EditorError> for PublishError {
    fn from(err: EditorError) -> Self {
        match err {
            EditorError::AlreadyPublished => PublishError::AlreadyPublished,
        }
    }
}

impl PublishError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PublishError::AlreadyPublished | PublishError::InFlight => {
                ErrorCode::InvalidStateTransition
            }
            PublishError::Validation(_) => ErrorCode::ValidationFailed,
            PublishError::Api(e) => e.code(),
        }
    }
}

impl From<PublishError> for DomainError {
    fn from(err: PublishError) -> Self {
        match err {
            PublishError::Validation(e) => e.into(),
            other => DomainError::new(other.code(), other.to_string()),
        }
    }
}

/// Sends a finished document to the backend as a published post.
///
/// The document only becomes published once the backend accepted it; on
/// any failure it stays an editable draft.
pub struct PublishDocumentHandler {
    api: Arc<dyn PostApi>,
    in_flight: InFlightActions,
}

impl PublishDocumentHandler {
    pub fn new(api: Arc<dyn PostApi>, in_flight: InFlightActions) -> Self {
        Self { api, in_flight }
    }

    pub async fn handle(&self, document: &mut Document) -> Result<Post, PublishError> {
        if document.is_published() {
            return Err(PublishError::AlreadyPublished);
        }
        Self::validate(document)?;

        // Identical content counts as the same submission.
        let checksum = document.checksum();
        let _guard = self
            .in_flight
            .begin(ACTION, checksum.clone())
            .ok_or(PublishError::InFlight)?;

        let mut finalized = document.clone();
        finalized.publish(Timestamp::now())?;

        let envelope = self
            .api
            .create_post(&Self::new_post(&finalized))
            .await
            .map_err(|e| {
                tracing::error!(checksum = %checksum, error = %e, "Publish failed");
                PublishError::Api(e)
            })?;

        *document = finalized;
        tracing::info!(post_id = %envelope.post.id, checksum = %checksum, "Post published");
        Ok(envelope.post)
    }

    fn validate(document: &Document) -> Result<(), ValidationError> {
        if document.title().trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if document.is_premium() {
            if let Some(price) = document.price() {
                if price.is_zero() {
                    return Err(ValidationError::invalid_format(
                        "price",
                        "premium price must be greater than zero",
                    ));
                }
            }
        }
        Ok(())
    }

    fn new_post(document: &Document) -> NewPost {
        NewPost {
            title: document.title().trim().to_string(),
            content: document.plain_text(),
            subtitle: document.subtitle().trim().to_string(),
            cover_image: document.cover_image().map(str::to_string),
            tags: document.tags().to_vec(),
            attachments: document.attachments().to_vec(),
            is_premium: document.is_premium(),
            price: if document.is_premium() {
                document.price()
            } else {
                None
            },
            status: PostStatus::Published,
        }
    }
}
