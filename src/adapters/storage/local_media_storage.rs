//! Local Media Storage Adapter
//!
//! Writes editor uploads under a media directory and serves them from a
//! configured base URL.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::domain::content::Attachment;
use crate::ports::{MediaStorage, MediaUpload, StorageError};

#[derive(Debug, Clone)]
pub struct LocalMediaStorage {
    media_dir: PathBuf,
    base_url: String,
}

impl LocalMediaStorage {
    pub fn new<P: AsRef<Path>>(media_dir: P, base_url: impl Into<String>) -> Self {
        Self {
            media_dir: media_dir.as_ref().to_path_buf(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Generated public id: a UUID plus the upload's extension, if it has a safe one.
    fn public_id(file_name: &str) -> String {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(|e| e.to_ascii_lowercase());

        match extension {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        }
    }
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn store(&self, upload: MediaUpload) -> Result<Attachment, StorageError> {
        fs::create_dir_all(&self.media_dir)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        let public_id = Self::public_id(&upload.file_name);
        fs::write(self.media_dir.join(&public_id), &upload.bytes)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        tracing::debug!(file = %upload.file_name, public_id = %public_id, "Stored media upload");

        Ok(Attachment {
            url: format!("{}/{}", self.base_url, public_id),
            public_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn stores_file_and_returns_public_url() {
        let dir = TempDir::new().unwrap();
        let storage = LocalMediaStorage::new(dir.path().join("media"), "/media/");

        let attachment = storage
            .store(MediaUpload::new("Sunset.PNG", b"png-bytes".to_vec()))
            .await
            .unwrap();

        assert!(attachment.public_id.ends_with(".png"));
        assert_eq!(attachment.url, format!("/media/{}", attachment.public_id));
        let written = std::fs::read(dir.path().join("media").join(&attachment.public_id)).unwrap();
        assert_eq!(written, b"png-bytes");
    }

    #[test]
    fn unsafe_extensions_are_dropped() {
        let id = LocalMediaStorage::public_id("notes.t/xt");
        assert!(!id.contains('/'));
        let id = LocalMediaStorage::public_id("README");
        assert!(!id.contains('.'));
    }
}
