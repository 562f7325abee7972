//! Dataset sink port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("Failed to write dataset file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to serialize dataset record: {0}")]
    Serialization(String),
}

impl From<DatasetError> for DomainError {
    fn from(err: DatasetError) -> Self {
        let code = match err {
            DatasetError::Io { .. } => ErrorCode::StorageError,
            DatasetError::Serialization(_) => ErrorCode::InternalError,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Destination for generated dataset files.
#[async_trait]
pub trait DatasetSink: Send + Sync {
    /// Writes `contents` to the file `name`, replacing it. Returns where it went.
    async fn write(&self, name: &str, contents: &str) -> Result<String, DatasetError>;
}
