//! REST client for the Nexora backend.
//!
//! Implements `DashboardApi`, `PostApi` and `AuthApi` over `reqwest`.
//!
//! Every request goes to `base_url + endpoint` with a JSON content type. The
//! bearer token is read from the key-value store on each call so that a login
//! or logout takes effect immediately.
//!
//! # Configuration
//!
//! ```ignore
//! let store = Arc::new(FileKeyValueStore::new(&config.storage.state_file));
//! let client = RestApiClient::from_config(&config.api, store)?;
//! let posts = client.list_posts(None).await?;
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::domain::content::{Bookmark, DashboardData, Post, ProfileUpdate, Subscription, User};
use crate::domain::foundation::{PostId, UserId};
use crate::ports::{
    ApiError, AuthApi, Credentials, DashboardApi, KeyValueStore, LoginResponse, MessageResponse,
    NewPost, PostApi, PostEnvelope, PostUpdate, RegisterResponse, Registration, TOKEN_STORAGE_KEY,
};

/// Shape of an error body. Anything else is treated as "no message".
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the platform API.
pub struct RestApiClient {
    http_client: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn KeyValueStore>,
}

impl RestApiClient {
    /// Create a client for `base_url` with a per-request timeout.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        tokens: Arc<dyn KeyValueStore>,
    ) -> Result<Self, ApiError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens,
        })
    }

    /// Create a client from the `api` configuration section.
    pub fn from_config(config: &ApiConfig, tokens: Arc<dyn KeyValueStore>) -> Result<Self, ApiError> {
        Self::new(config.base_url.clone(), config.timeout(), tokens)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Reads the current bearer token. A storage failure means no token.
    async fn bearer_token(&self) -> Option<SecretString> {
        match self.tokens.get(TOKEN_STORAGE_KEY).await {
            Ok(token) => token.filter(|t| !t.is_empty()).map(SecretString::new),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read auth token, sending request unauthenticated");
                None
            }
        }
    }

    /// Sends a request and decodes the JSON response.
    async fn request<B, T>(&self, method: Method, endpoint: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let mut request = self
            .http_client
            .request(method.clone(), self.url(endpoint))
            .header("Content-Type", "application/json");

        if let Some(token) = self.bearer_token().await {
            request = request.bearer_auth(token.expose_secret());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(%method, endpoint, error = %e, "API request failed");
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message);
            let error = ApiError::from_status(status.as_u16(), message);
            tracing::error!(%method, endpoint, status = status.as_u16(), error = %error, "API request failed");
            return Err(error);
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!(%method, endpoint, error = %e, "API response could not be decoded");
            ApiError::Decode(e.to_string())
        })
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request::<(), T>(Method::GET, endpoint, None).await
    }

    async fn send_empty<T: DeserializeOwned>(&self, method: Method, endpoint: &str) -> Result<T, ApiError> {
        self.request::<(), T>(method, endpoint, None).await
    }
}

#[async_trait]
impl DashboardApi for RestApiClient {
    async fn get_dashboard(&self) -> Result<DashboardData, ApiError> {
        self.get("/private/dashboard").await
    }

    async fn update_dashboard(&self, update: &ProfileUpdate) -> Result<DashboardData, ApiError> {
        self.request(Method::PATCH, "/private/dashboard", Some(update))
            .await
    }

    async fn get_subscriptions(&self) -> Result<Vec<Subscription>, ApiError> {
        self.get("/private/creator/subscribed").await
    }

    async fn get_subscribers(&self) -> Result<Vec<User>, ApiError> {
        self.get("/private/subscriber").await
    }

    async fn get_bookmarks(&self) -> Result<Vec<Bookmark>, ApiError> {
        self.get("/private/bookmarks").await
    }

    async fn upgrade_to_creator(&self) -> Result<MessageResponse, ApiError> {
        self.send_empty(Method::PATCH, "/private/upgrade").await
    }

    async fn subscribe_to_creator(&self, creator_id: &UserId) -> Result<MessageResponse, ApiError> {
        self.send_empty(Method::POST, &format!("/private/subscribe/{}", creator_id))
            .await
    }
}

#[async_trait]
impl PostApi for RestApiClient {
    async fn list_posts(&self, creator: Option<&UserId>) -> Result<Vec<Post>, ApiError> {
        match creator {
            Some(creator_id) => self.get(&format!("/private/post/{}", creator_id)).await,
            None => self.get("/private/post").await,
        }
    }

    async fn create_post(&self, post: &NewPost) -> Result<PostEnvelope, ApiError> {
        self.request(Method::POST, "/private/post", Some(post)).await
    }

    async fn edit_post(&self, id: &PostId, update: &PostUpdate) -> Result<PostEnvelope, ApiError> {
        self.request(Method::PATCH, &format!("/private/post/{}", id), Some(update))
            .await
    }

    async fn delete_post(&self, id: &PostId) -> Result<MessageResponse, ApiError> {
        self.send_empty(Method::DELETE, &format!("/private/post/{}", id))
            .await
    }

    async fn like_post(&self, id: &PostId) -> Result<MessageResponse, ApiError> {
        self.send_empty(Method::POST, &format!("/private/post/{}/like", id))
            .await
    }
}

#[async_trait]
impl AuthApi for RestApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.request(Method::POST, "/auth/login", Some(credentials))
            .await
    }

    async fn register(&self, registration: &Registration) -> Result<RegisterResponse, ApiError> {
        self.request(Method::POST, "/auth/register", Some(registration))
            .await
    }
}
