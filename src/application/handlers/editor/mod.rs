//! Editor handlers.
//!
//! - Publishing a document as a post
//! - Uploading images and attachments

mod publish_document;
mod upload_media;

pub use publish_document::{PublishDocumentHandler, PublishError};
pub use upload_media::{UploadError, UploadMediaHandler};
