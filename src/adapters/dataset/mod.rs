//! Dataset Adapters
//!
//! - **FileDatasetSink** - Writes generated dataset files to a local directory

mod file_dataset_sink;

pub use file_dataset_sink::FileDatasetSink;
