//! Dataset generator configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Settings for the Q/A dataset generator
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// Directory the dataset files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Minimum number of training pairs
    #[serde(default = "default_train_min_pairs")]
    pub train_min_pairs: usize,

    /// Exact number of validation pairs
    #[serde(default = "default_val_pairs")]
    pub val_pairs: usize,

    /// Brand substituted into every seed pair
    #[serde(default = "default_brand")]
    pub brand: String,
}

impl DatasetConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.train_min_pairs == 0 {
            return Err(ValidationError::ZeroCount("NEXORA__DATASET__TRAIN_MIN_PAIRS"));
        }
        if self.val_pairs == 0 {
            return Err(ValidationError::ZeroCount("NEXORA__DATASET__VAL_PAIRS"));
        }
        if self.brand.trim().is_empty() {
            return Err(ValidationError::MissingRequired("NEXORA__DATASET__BRAND"));
        }
        Ok(())
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            train_min_pairs: default_train_min_pairs(),
            val_pairs: default_val_pairs(),
            brand: default_brand(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_train_min_pairs() -> usize {
    520
}

fn default_val_pairs() -> usize {
    60
}

fn default_brand() -> String {
    "Nexora".to_string()
}
