//! Mock platform API for testing.
//!
//! An in-process stand-in for the REST backend implementing `DashboardApi`,
//! `PostApi` and `AuthApi`. Supports:
//! - Seeded dashboard, posts, subscriptions, subscribers and bookmarks
//! - Error injection (global one-shot or per method)
//! - Call tracking
//! - An artificial response delay, to hold actions in flight

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::content::{
    Bookmark, DashboardData, Post, ProfileUpdate, Role, Subscription, User,
};
use crate::domain::foundation::{PostId, Timestamp, UserId};
use crate::ports::{
    ApiError, AuthApi, Credentials, DashboardApi, LoginResponse, MessageResponse, NewPost,
    PostApi, PostEnvelope, PostUpdate, RegisterResponse, Registration,
};

/// Mock platform API.
///
/// # Example
///
/// ```ignore
/// let api = MockPlatformApi::new().with_posts(vec![post]);
/// api.set_method_error("like_post", ApiError::from_status(500, None));
/// ```
#[derive(Default)]
pub struct MockPlatformApi {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    dashboard: Option<DashboardData>,
    posts: Vec<Post>,
    subscriptions: Vec<Subscription>,
    subscribers: Vec<User>,
    bookmarks: Vec<Bookmark>,

    /// Token and user handed out by `login`. Unset means every login fails.
    session: Option<(String, User)>,

    /// Author stamped on created posts.
    author: Option<UserId>,

    next_post_number: u64,

    delay: Option<Duration>,

    /// Error to return on the next call to any method (consumed).
    next_error: Option<ApiError>,

    /// Errors returned every time a given method is called.
    method_errors: HashMap<String, ApiError>,

    call_log: Vec<MethodCall>,
}

/// Recorded method call for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodCall {
    pub method: String,
    pub args: Vec<String>,
}

impl MockPlatformApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    pub fn with_dashboard(self, dashboard: DashboardData) -> Self {
        self.state().dashboard = Some(dashboard);
        self
    }

    pub fn with_posts(self, posts: Vec<Post>) -> Self {
        self.state().posts = posts;
        self
    }

    pub fn with_subscriptions(self, subscriptions: Vec<Subscription>) -> Self {
        self.state().subscriptions = subscriptions;
        self
    }

    pub fn with_subscribers(self, subscribers: Vec<User>) -> Self {
        self.state().subscribers = subscribers;
        self
    }

    pub fn with_bookmarks(self, bookmarks: Vec<Bookmark>) -> Self {
        self.state().bookmarks = bookmarks;
        self
    }

    /// Accept logins, returning `token` and `user`.
    pub fn with_session(self, token: impl Into<String>, user: User) -> Self {
        let mut state = self.state();
        state.author = Some(user.id.clone());
        state.session = Some((token.into(), user));
        drop(state);
        self
    }

    /// Delay every response, so that concurrent calls overlap.
    pub fn set_delay(&self, delay: Duration) {
        self.state().delay = Some(delay);
    }

    /// Set an error to return on the next call to any method.
    pub fn set_error(&self, error: ApiError) {
        self.state().next_error = Some(error);
    }

    /// Set an error for a specific method.
    pub fn set_method_error(&self, method: &str, error: ApiError) {
        self.state().method_errors.insert(method.to_string(), error);
    }

    pub fn clear_errors(&self) {
        let mut state = self.state();
        state.next_error = None;
        state.method_errors.clear();
    }

    /// Posts currently held by the mock backend.
    pub fn posts(&self) -> Vec<Post> {
        self.state().posts.clone()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    pub fn calls(&self) -> Vec<MethodCall> {
        self.state().call_log.clone()
    }

    pub fn was_called(&self, method: &str) -> bool {
        self.state().call_log.iter().any(|c| c.method == method)
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.state()
            .call_log
            .iter()
            .filter(|c| c.method == method)
            .count()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Internal Helpers
    // ════════════════════════════════════════════════════════════════════════════

    /// Records the call, waits out the delay, then applies any injected error.
    async fn enter(&self, method: &str, args: Vec<String>) -> Result<(), ApiError> {
        let delay = {
            let mut state = self.state();
            state.call_log.push(MethodCall {
                method: method.to_string(),
                args,
            });
            state.delay
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.state();
        if let Some(error) = state.method_errors.get(method) {
            return Err(error.clone());
        }
        if let Some(error) = state.next_error.take() {
            return Err(error);
        }
        Ok(())
    }

    fn not_found(what: &str) -> ApiError {
        ApiError::from_status(404, Some(format!("{} not found", what)))
    }

    fn acknowledged(message: &str) -> MessageResponse {
        MessageResponse {
            message: message.to_string(),
        }
    }
}

impl Clone for MockPlatformApi {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl DashboardApi for MockPlatformApi {
    async fn get_dashboard(&self) -> Result<DashboardData, ApiError> {
        self.enter("get_dashboard", vec![]).await?;
        self.state()
            .dashboard
            .clone()
            .ok_or_else(|| Self::not_found("Dashboard"))
    }

    async fn update_dashboard(&self, update: &ProfileUpdate) -> Result<DashboardData, ApiError> {
        self.enter("update_dashboard", vec![]).await?;

        let mut state = self.state();
        let dashboard = state
            .dashboard
            .as_mut()
            .ok_or_else(|| Self::not_found("Dashboard"))?;
        if let Some(username) = &update.username {
            dashboard.username = username.clone();
        }
        if let Some(bio) = &update.bio {
            dashboard.bio = Some(bio.clone());
        }
        if let Some(pic) = &update.profile_pic {
            dashboard.profile_pic = Some(pic.clone());
        }
        Ok(dashboard.clone())
    }

    async fn get_subscriptions(&self) -> Result<Vec<Subscription>, ApiError> {
        self.enter("get_subscriptions", vec![]).await?;
        Ok(self.state().subscriptions.clone())
    }

    async fn get_subscribers(&self) -> Result<Vec<User>, ApiError> {
        self.enter("get_subscribers", vec![]).await?;
        Ok(self.state().subscribers.clone())
    }

    async fn get_bookmarks(&self) -> Result<Vec<Bookmark>, ApiError> {
        self.enter("get_bookmarks", vec![]).await?;
        Ok(self.state().bookmarks.clone())
    }

    async fn upgrade_to_creator(&self) -> Result<MessageResponse, ApiError> {
        self.enter("upgrade_to_creator", vec![]).await?;
        if let Some(dashboard) = self.state().dashboard.as_mut() {
            dashboard.role = "creator".to_string();
        }
        Ok(Self::acknowledged("Upgraded to creator"))
    }

    async fn subscribe_to_creator(&self, creator_id: &UserId) -> Result<MessageResponse, ApiError> {
        self.enter("subscribe_to_creator", vec![creator_id.to_string()])
            .await?;
        Ok(Self::acknowledged("Subscribed"))
    }
}

#[async_trait]
impl PostApi for MockPlatformApi {
    async fn list_posts(&self, creator: Option<&UserId>) -> Result<Vec<Post>, ApiError> {
        let args = creator.map(|c| vec![c.to_string()]).unwrap_or_default();
        self.enter("list_posts", args).await?;

        let state = self.state();
        Ok(state
            .posts
            .iter()
            .filter(|p| creator.map_or(true, |c| &p.author == c))
            .cloned()
            .collect())
    }

    async fn create_post(&self, post: &NewPost) -> Result<PostEnvelope, ApiError> {
        self.enter("create_post", vec![post.title.clone()]).await?;

        let mut state = self.state();
        state.next_post_number += 1;
        let id = PostId::new(format!("post-{}", state.next_post_number))
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let author = match state.author.clone() {
            Some(author) => author,
            None => UserId::new("creator-1").map_err(|e| ApiError::Decode(e.to_string()))?,
        };

        let now = Timestamp::now();
        let created = Post {
            id,
            title: post.title.clone(),
            content: post.content.clone(),
            author,
            attachments: post.attachments.clone(),
            is_premium: post.is_premium,
            price: post.price,
            status: post.status,
            created_at: now,
            updated_at: now,
            likes: 0,
            views: 0,
            comments: 0,
        };
        state.posts.push(created.clone());

        Ok(PostEnvelope {
            message: "Post created".to_string(),
            post: created,
        })
    }

    async fn edit_post(&self, id: &PostId, update: &PostUpdate) -> Result<PostEnvelope, ApiError> {
        self.enter("edit_post", vec![id.to_string()]).await?;

        let mut state = self.state();
        let post = state
            .posts
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| Self::not_found("Post"))?;

        if let Some(title) = &update.title {
            post.title = title.clone();
        }
        if let Some(content) = &update.content {
            post.content = content.clone();
        }
        if let Some(is_premium) = update.is_premium {
            post.is_premium = is_premium;
        }
        if update.price.is_some() {
            post.price = update.price;
        }
        if let Some(status) = update.status {
            post.status = status;
        }
        post.updated_at = Timestamp::now();

        Ok(PostEnvelope {
            message: "Post updated".to_string(),
            post: post.clone(),
        })
    }

    async fn delete_post(&self, id: &PostId) -> Result<MessageResponse, ApiError> {
        self.enter("delete_post", vec![id.to_string()]).await?;

        let mut state = self.state();
        let before = state.posts.len();
        state.posts.retain(|p| &p.id != id);
        if state.posts.len() == before {
            return Err(Self::not_found("Post"));
        }
        Ok(Self::acknowledged("Post deleted"))
    }

    async fn like_post(&self, id: &PostId) -> Result<MessageResponse, ApiError> {
        self.enter("like_post", vec![id.to_string()]).await?;

        let mut state = self.state();
        let post = state
            .posts
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| Self::not_found("Post"))?;
        post.likes += 1;
        Ok(Self::acknowledged("Post liked"))
    }
}

#[async_trait]
impl AuthApi for MockPlatformApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.enter("login", vec![credentials.email.clone()]).await?;

        let state = self.state();
        match &state.session {
            Some((token, user)) if user.email == credentials.email => Ok(LoginResponse {
                message: "Login successful".to_string(),
                token: token.clone(),
                user: user.clone(),
            }),
            _ => Err(ApiError::from_status(401, Some("Invalid credentials".to_string()))),
        }
    }

    async fn register(&self, registration: &Registration) -> Result<RegisterResponse, ApiError> {
        self.enter("register", vec![registration.email.clone()])
            .await?;

        let id = UserId::new(format!("user-{}", registration.username))
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(RegisterResponse {
            message: "User registered".to_string(),
            user: User {
                id,
                username: registration.username.clone(),
                email: registration.email.clone(),
                role: Role::User,
                profile_pic: None,
                bio: None,
                bookmarks: Vec::new(),
            },
        })
    }
}
