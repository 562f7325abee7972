//! Errors from post actions (like, delete).

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ApiError;

/// A failed post action, naming the action and the post it was for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("{action} is already in progress for post {resource}")]
    InFlight {
        action: &'static str,
        resource: String,
    },

    #[error("{action} failed for post {resource}: {source}")]
    Api {
        action: &'static str,
        resource: String,
        source: ApiError,
    },
}

impl ActionError {
    pub fn action(&self) -> &'static str {
        match self {
            ActionError::InFlight { action, .. } | ActionError::Api { action, .. } => action,
        }
    }

    pub fn resource(&self) -> &str {
        match self {
            ActionError::InFlight { resource, .. } | ActionError::Api { resource, .. } => resource,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ActionError::InFlight { .. } => ErrorCode::InvalidStateTransition,
            ActionError::Api { source, .. } => source.code(),
        }
    }
}

impl From<ActionError> for DomainError {
    fn from(err: ActionError) -> Self {
        DomainError::new(err.code(), err.to_string())
            .with_detail("action", err.action())
            .with_detail("resource", err.resource())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_failure_keeps_action_and_resource() {
        let err = ActionError::Api {
            action: "delete",
            resource: "p1".into(),
            source: ApiError::from_status(404, Some("Post not found".into())),
        };
        assert_eq!(err.to_string(), "delete failed for post p1: Post not found");

        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::NotFound);
        assert_eq!(domain.details.get("action").map(String::as_str), Some("delete"));
        assert_eq!(domain.details.get("resource").map(String::as_str), Some("p1"));
    }
}
