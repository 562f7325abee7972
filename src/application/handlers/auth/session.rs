//! AuthSession - login, logout and the stored bearer token.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::content::User;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{
    ApiError, AuthApi, Credentials, KeyValueStore, Registration, StorageError, TOKEN_STORAGE_KEY,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Failed to store session: {0}")]
    Storage(#[from] StorageError),
}

impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Api(e) => e.into(),
            AuthError::Storage(e) => DomainError::new(ErrorCode::StorageError, e.to_string()),
        }
    }
}

/// Issues and clears the session the REST client authenticates with.
pub struct AuthSession {
    api: Arc<dyn AuthApi>,
    store: Arc<dyn KeyValueStore>,
}

impl AuthSession {
    pub fn new(api: Arc<dyn AuthApi>, store: Arc<dyn KeyValueStore>) -> Self {
        Self { api, store }
    }

    /// Logs in and stores the returned token for later requests.
    pub async fn login(&self, credentials: Credentials) -> Result<User, AuthError> {
        let response = self.api.login(&credentials).await?;
        self.store.set(TOKEN_STORAGE_KEY, &response.token).await?;

        tracing::info!(user_id = %response.user.id, "Logged in");
        Ok(response.user)
    }

    /// Registers a new account. Does not log in.
    pub async fn register(&self, registration: Registration) -> Result<User, AuthError> {
        let response = self.api.register(&registration).await?;
        tracing::info!(user_id = %response.user.id, "Registered");
        Ok(response.user)
    }

    /// Forgets the stored token.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.store.remove(TOKEN_STORAGE_KEY).await?;
        tracing::info!("Logged out");
        Ok(())
    }

    pub async fn is_authenticated(&self) -> Result<bool, AuthError> {
        let token = self.store.get(TOKEN_STORAGE_KEY).await?;
        Ok(token.is_some_and(|t| !t.is_empty()))
    }
}
