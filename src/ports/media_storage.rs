//! Media storage port for editor uploads.

use async_trait::async_trait;

use super::StorageError;
use crate::domain::content::Attachment;

/// A file picked in the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl MediaUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Port for storing uploaded media and handing back a public URL.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Stores the upload. The returned attachment carries its URL and public id.
    async fn store(&self, upload: MediaUpload) -> Result<Attachment, StorageError>;
}
