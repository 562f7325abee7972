//! Platform API ports.
//!
//! Typed contracts for the Nexora REST backend. The backend owns posts,
//! users and subscriptions; the client only reads them and issues the
//! mutations listed here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::content::{
    Attachment, Bookmark, DashboardData, Post, PostStatus, ProfileUpdate, Subscription, User,
};
use crate::domain::foundation::{DomainError, ErrorCode, Money, PostId, UserId};

/// Errors returned by the platform API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response. `message` is the body's `message` field, or
    /// `HTTP error! status: {status}` when there is none.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// A 2xx response whose body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds the error for a non-2xx response from its optional body message.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP error! status: {}", status));
        ApiError::Http { status, message }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ApiError::Network(_) => ErrorCode::NetworkError,
            ApiError::Http { status: 401 | 403, .. } => ErrorCode::Unauthorized,
            ApiError::Http { status: 404, .. } => ErrorCode::NotFound,
            ApiError::Http { status: 400 | 422, .. } => ErrorCode::ValidationFailed,
            ApiError::Http { .. } | ApiError::Decode(_) => ErrorCode::InternalError,
        }
    }
}

impl From<ApiError> for DomainError {
    fn from(err: ApiError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            ApiError::Http { status, .. } => domain.with_detail("status", status.to_string()),
            _ => domain,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Request and response bodies
// ════════════════════════════════════════════════════════════════════════════════

/// Acknowledgement body returned by most mutations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Body returned by post create and edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostEnvelope {
    #[serde(default)]
    pub message: String,
    pub post: Post,
}

/// A post submitted from the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    pub is_premium: bool,
    /// Only sent for premium posts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
    pub status: PostStatus,
}

/// Fields changed when editing a post. Unset fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
    pub user: User,
}

// ════════════════════════════════════════════════════════════════════════════════
// Ports
// ════════════════════════════════════════════════════════════════════════════════

/// Dashboard, profile and subscription endpoints.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// `GET /private/dashboard`
    async fn get_dashboard(&self) -> Result<DashboardData, ApiError>;

    /// `PATCH /private/dashboard`
    async fn update_dashboard(&self, update: &ProfileUpdate) -> Result<DashboardData, ApiError>;

    /// `GET /private/creator/subscribed`
    async fn get_subscriptions(&self) -> Result<Vec<Subscription>, ApiError>;

    /// `GET /private/subscriber`
    async fn get_subscribers(&self) -> Result<Vec<User>, ApiError>;

    /// `GET /private/bookmarks`
    async fn get_bookmarks(&self) -> Result<Vec<Bookmark>, ApiError>;

    /// `PATCH /private/upgrade`
    async fn upgrade_to_creator(&self) -> Result<MessageResponse, ApiError>;

    /// `POST /private/subscribe/{creator_id}`
    async fn subscribe_to_creator(&self, creator_id: &UserId) -> Result<MessageResponse, ApiError>;
}

/// Post endpoints.
#[async_trait]
pub trait PostApi: Send + Sync {
    /// `GET /private/post`, or `GET /private/post/{creator_id}` for one creator.
    async fn list_posts(&self, creator: Option<&UserId>) -> Result<Vec<Post>, ApiError>;

    /// `POST /private/post`
    async fn create_post(&self, post: &NewPost) -> Result<PostEnvelope, ApiError>;

    /// `PATCH /private/post/{id}`
    async fn edit_post(&self, id: &PostId, update: &PostUpdate) -> Result<PostEnvelope, ApiError>;

    /// `DELETE /private/post/{id}`
    async fn delete_post(&self, id: &PostId) -> Result<MessageResponse, ApiError>;

    /// `POST /private/post/{id}/like`
    async fn like_post(&self, id: &PostId) -> Result<MessageResponse, ApiError>;
}

/// Session issuance.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /auth/login`
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// `POST /auth/register`
    async fn register(&self, registration: &Registration) -> Result<RegisterResponse, ApiError>;
}
