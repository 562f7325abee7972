//! Writes generated dataset files into a directory.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{DatasetError, DatasetSink};

#[derive(Debug, Clone)]
pub struct FileDatasetSink {
    dir: PathBuf,
}

impl FileDatasetSink {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl DatasetSink for FileDatasetSink {
    async fn write(&self, name: &str, contents: &str) -> Result<String, DatasetError> {
        let io_error = |path: &Path, e: std::io::Error| DatasetError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| io_error(&self.dir, e))?;

        let path = self.dir.join(name);
        fs::write(&path, contents)
            .await
            .map_err(|e| io_error(&path, e))?;

        tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote dataset file");
        Ok(path.display().to_string())
    }
}
