//! Integration tests for the HTTP adapters against a local stub backend.
//!
//! Each test starts an `axum` server on an ephemeral port and points the
//! adapter at it.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use nexora::adapters::{HttpBillingProvider, InMemoryKeyValueStore, RestApiClient};
use nexora::config::BillingConfig;
use nexora::domain::content::PostStatus;
use nexora::domain::foundation::PostId;
use nexora::domain::membership::{CheckoutSessionId, MembershipTier};
use nexora::ports::{
    ApiError, BillingError, BillingProvider, DashboardApi, KeyValueStore, NewPost, PostApi,
    TOKEN_STORAGE_KEY,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn post_json(id: &str, title: &str) -> Value {
    json!({
        "_id": id,
        "title": title,
        "content": "Body",
        "author": "creator-1",
        "isPremium": false,
        "status": "published",
        "createdAt": "2024-01-15T10:30:00.000Z",
        "updatedAt": "2024-01-15T10:30:00.000Z",
        "likes": 3
    })
}

async fn dashboard(headers: HeaderMap) -> impl IntoResponse {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == "Bearer abc123")
        .unwrap_or(false);

    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Not authorized, token failed" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({ "username": "ada", "role": "reader" })),
    )
}

async fn list_posts() -> Json<Value> {
    Json(json!([post_json("p1", "First"), post_json("p2", "Second")]))
}

async fn create_post(Json(body): Json<Value>) -> impl IntoResponse {
    let mut created = post_json("p9", body["title"].as_str().unwrap_or_default());
    created["status"] = body["status"].clone();
    (
        StatusCode::CREATED,
        Json(json!({ "message": "Post created", "post": created })),
    )
}

async fn like_missing(Path(_id): Path<String>) -> StatusCode {
    StatusCode::NOT_FOUND
}

fn platform_router() -> Router {
    Router::new()
        .route("/api/private/dashboard", get(dashboard))
        .route("/api/private/post", get(list_posts).post(create_post))
        .route("/api/private/post/:id/like", post(like_missing))
}

async fn api_client(token: Option<&str>) -> RestApiClient {
    let base = spawn(platform_router()).await;
    let store = InMemoryKeyValueStore::new();
    if let Some(token) = token {
        store.set(TOKEN_STORAGE_KEY, token).await.unwrap();
    }
    RestApiClient::new(format!("{}/api", base), Duration::from_secs(5), Arc::new(store)).unwrap()
}

// =============================================================================
// REST client
// =============================================================================

#[tokio::test]
async fn bearer_token_from_store_is_sent() {
    let client = api_client(Some("abc123")).await;

    let dashboard = client.get_dashboard().await.unwrap();

    assert_eq!(dashboard.username, "ada");
    assert_eq!(dashboard.role, "reader");
}

#[tokio::test]
async fn missing_token_surfaces_body_message() {
    let client = api_client(None).await;

    let err = client.get_dashboard().await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Http {
            status: 401,
            message: "Not authorized, token failed".to_string()
        }
    );
}

#[tokio::test]
async fn error_without_body_falls_back_to_status_message() {
    let client = api_client(Some("abc123")).await;

    let err = client
        .like_post(&PostId::new("gone").unwrap())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "HTTP error! status: 404");
}

#[tokio::test]
async fn posts_are_decoded() {
    let client = api_client(Some("abc123")).await;

    let posts = client.list_posts(None).await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id.as_str(), "p1");
    assert_eq!(posts[0].likes, 3);
}

#[tokio::test]
async fn created_post_is_returned_in_envelope() {
    let client = api_client(Some("abc123")).await;
    let new_post = NewPost {
        title: "Hello".to_string(),
        content: "Body".to_string(),
        subtitle: String::new(),
        cover_image: None,
        tags: vec![],
        attachments: vec![],
        is_premium: false,
        price: None,
        status: PostStatus::Published,
    };

    let envelope = client.create_post(&new_post).await.unwrap();

    assert_eq!(envelope.message, "Post created");
    assert_eq!(envelope.post.title, "Hello");
    assert_eq!(envelope.post.status, PostStatus::Published);
}

// =============================================================================
// Billing adapter
// =============================================================================

async fn billing_provider() -> HttpBillingProvider {
    let app = Router::new()
        .route(
            "/api/billing/checkout",
            post(|| async { Json(json!({ "url": "https://pay.example/cs_1" })) }),
        )
        .route("/api/billing/portal", post(|| async { Json(json!({})) }))
        .route(
            "/api/billing/checkout/:id",
            get(|Path(id): Path<String>| async move {
                if id == "cs_paid" {
                    (StatusCode::OK, Json(json!({ "paid": true, "tier": "member" })))
                } else {
                    (StatusCode::NOT_FOUND, Json(json!({ "error": "No such session" })))
                }
            }),
        );
    let base = spawn(app).await;
    HttpBillingProvider::new(BillingConfig {
        base_url: base,
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn checkout_returns_redirect_url() {
    let provider = billing_provider().await;

    let url = provider.create_checkout_session().await.unwrap();

    assert_eq!(url.as_str(), "https://pay.example/cs_1");
}

#[tokio::test]
async fn portal_without_url_is_an_error() {
    let provider = billing_provider().await;

    let result = provider.create_portal_session().await;

    assert_eq!(result, Err(BillingError::MissingRedirectUrl));
}

#[tokio::test]
async fn paid_session_is_confirmed() {
    let provider = billing_provider().await;

    let confirmation = provider
        .get_checkout_confirmation(&CheckoutSessionId::new("cs_paid").unwrap())
        .await
        .unwrap();

    assert!(confirmation.paid);
    assert_eq!(confirmation.tier, MembershipTier::Member);
}

#[tokio::test]
async fn unknown_session_uses_error_field() {
    let provider = billing_provider().await;

    let result = provider
        .get_checkout_confirmation(&CheckoutSessionId::new("cs_unknown").unwrap())
        .await;

    assert_eq!(
        result,
        Err(BillingError::Provider {
            status: 404,
            message: "No such session".to_string()
        })
    );
}
