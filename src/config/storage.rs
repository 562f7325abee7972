//! Client-local storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where client-local state and uploaded media live
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// YAML file holding the membership tier and auth token
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,

    /// Directory editor uploads are written to
    #[serde(default = "default_media_dir")]
    pub media_dir: PathBuf,

    /// URL prefix uploads are served from
    #[serde(default = "default_media_base_url")]
    pub media_base_url: String,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.state_file.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("NEXORA__STORAGE__STATE_FILE"));
        }
        if self.media_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("NEXORA__STORAGE__MEDIA_DIR"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            media_dir: default_media_dir(),
            media_base_url: default_media_base_url(),
        }
    }
}

fn default_state_file() -> PathBuf {
    PathBuf::from("./data/client_state.yaml")
}

fn default_media_dir() -> PathBuf {
    PathBuf::from("./data/media")
}

fn default_media_base_url() -> String {
    "/media".to_string()
}
