//! UploadMediaHandler - image and file uploads from the editor toolbar.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::content::Attachment;
use crate::domain::editor::{Block, BlockKind, Document, EditorError};
use crate::domain::foundation::{BlockId, DomainError};
use crate::ports::{MediaStorage, MediaUpload, StorageError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error("Upload failed: {0}")]
    Storage(#[from] StorageError),
}

impl From<UploadError> for DomainError {
    fn from(err: UploadError) -> Self {
        let code = match &err {
            UploadError::Editor(e) => e.code(),
            UploadError::Storage(e) => e.code(),
        };
        DomainError::new(code, err.to_string())
    }
}

/// Stores uploads and places them in the document.
///
/// The document is only modified after the upload succeeded.
pub struct UploadMediaHandler {
    storage: Arc<dyn MediaStorage>,
}

impl UploadMediaHandler {
    pub fn new(storage: Arc<dyn MediaStorage>) -> Self {
        Self { storage }
    }

    /// Uploads an image and inserts an image block after the focused block,
    /// or at the end. The file name becomes the alt text.
    pub async fn attach_image(
        &self,
        document: &mut Document,
        upload: MediaUpload,
    ) -> Result<BlockId, UploadError> {
        if document.is_published() {
            return Err(EditorError::AlreadyPublished.into());
        }

        let file_name = upload.file_name.clone();
        let attachment = self.storage.store(upload).await.map_err(|e| {
            tracing::warn!(file = %file_name, error = %e, "Image upload failed");
            e
        })?;

        let mut block = Block::new(BlockKind::Image);
        block.content = attachment.url;
        block.metadata.alt = Some(file_name);

        let after = document.focused();
        Ok(document.insert_block(block, after.as_ref())?)
    }

    /// Uploads a file and adds it to the document's attachments.
    pub async fn attach_file(
        &self,
        document: &mut Document,
        upload: MediaUpload,
    ) -> Result<Attachment, UploadError> {
        if document.is_published() {
            return Err(EditorError::AlreadyPublished.into());
        }

        let file_name = upload.file_name.clone();
        let attachment = self.storage.store(upload).await.map_err(|e| {
            tracing::warn!(file = %file_name, error = %e, "File upload failed");
            e
        })?;

        document.attach(attachment.clone())?;
        Ok(attachment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::LocalMediaStorage;
    use async_trait::async_trait;
    use tempfile::TempDir;

    struct BrokenStorage;

    #[async_trait]
    impl MediaStorage for BrokenStorage {
        async fn store(&self, _upload: MediaUpload) -> Result<Attachment, StorageError> {
            Err(StorageError::Io("disk full".into()))
        }
    }

    fn local(dir: &TempDir) -> UploadMediaHandler {
        UploadMediaHandler::new(Arc::new(LocalMediaStorage::new(dir.path(), "/media")))
    }

    #[tokio::test]
    async fn image_is_inserted_after_focused_block() {
        let dir = TempDir::new().unwrap();
        let mut doc = Document::new();
        let first = doc.blocks()[0].id;
        doc.add_block(BlockKind::Heading1, None).unwrap();
        doc.focus_block(&first).unwrap();

        let id = local(&dir)
            .attach_image(&mut doc, MediaUpload::new("cat.png", b"png".to_vec()))
            .await
            .unwrap();

        let kinds: Vec<_> = doc.blocks().iter().map(|b| b.kind).collect();
        assert_eq!(kinds, vec![BlockKind::Paragraph, BlockKind::Image, BlockKind::Heading1]);

        let image = doc.block(&id).unwrap();
        assert!(image.content.starts_with("/media/"));
        assert_eq!(image.metadata.alt.as_deref(), Some("cat.png"));
        assert_eq!(doc.focused(), Some(id));
    }

    #[tokio::test]
    async fn image_is_appended_without_focus() {
        let dir = TempDir::new().unwrap();
        let mut doc = Document::new();

        local(&dir)
            .attach_image(&mut doc, MediaUpload::new("a.jpg", vec![1, 2, 3]))
            .await
            .unwrap();

        assert_eq!(doc.blocks().last().map(|b| b.kind), Some(BlockKind::Image));
    }

    #[tokio::test]
    async fn file_becomes_attachment() {
        let dir = TempDir::new().unwrap();
        let mut doc = Document::new();

        let attachment = local(&dir)
            .attach_file(&mut doc, MediaUpload::new("notes.pdf", b"%PDF".to_vec()))
            .await
            .unwrap();

        assert_eq!(doc.attachments(), &[attachment]);
    }

    #[tokio::test]
    async fn failed_upload_leaves_document_untouched() {
        let handler = UploadMediaHandler::new(Arc::new(BrokenStorage));
        let mut doc = Document::new();
        let before = doc.clone();

        let err = handler
            .attach_image(&mut doc, MediaUpload::new("x.png", vec![]))
            .await
            .unwrap_err();

        assert_eq!(err, UploadError::Storage(StorageError::Io("disk full".into())));
        assert_eq!(doc, before);
    }
}
