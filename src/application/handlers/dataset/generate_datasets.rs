//! GenerateDatasetsHandler - writes the chatbot training and validation sets.

use std::sync::Arc;

use crate::domain::dataset::{generate_pairs, to_jsonl, to_text, QaPair};
use crate::ports::{DatasetError, DatasetSink};

/// Command to generate one brand's dataset files.
#[derive(Debug, Clone)]
pub struct GenerateDatasetsCommand {
    pub brand: String,
    /// Minimum training pairs; the canonical pairs are always included.
    pub train_min: usize,
    pub val_count: usize,
}

/// Where the files went and how many records each holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetReport {
    pub train_count: usize,
    pub val_count: usize,
    pub files: Vec<String>,
}

pub struct GenerateDatasetsHandler {
    sink: Arc<dyn DatasetSink>,
}

impl GenerateDatasetsHandler {
    pub fn new(sink: Arc<dyn DatasetSink>) -> Self {
        Self { sink }
    }

    pub async fn handle(&self, cmd: GenerateDatasetsCommand) -> Result<DatasetReport, DatasetError> {
        let source = cmd.brand.to_lowercase();

        let train = generate_pairs(&cmd.brand, cmd.train_min);
        let mut val = generate_pairs(&cmd.brand, cmd.val_count);
        val.truncate(cmd.val_count);

        let mut files = Vec::with_capacity(4);
        for (split, pairs) in [("train", &train), ("val", &val)] {
            files.push(self.write_split(&source, split, "txt", to_text(pairs)).await?);
        }
        for (split, pairs) in [("train", &train), ("val", &val)] {
            let jsonl = Self::jsonl(pairs, &source)?;
            files.push(self.write_split(&source, split, "jsonl", jsonl).await?);
        }

        tracing::info!(
            brand = %cmd.brand,
            train = train.len(),
            val = val.len(),
            "Datasets generated"
        );

        Ok(DatasetReport {
            train_count: train.len(),
            val_count: val.len(),
            files,
        })
    }

    fn jsonl(pairs: &[QaPair], source: &str) -> Result<String, DatasetError> {
        to_jsonl(pairs, source).map_err(|e| DatasetError::Serialization(e.to_string()))
    }

    async fn write_split(
        &self,
        source: &str,
        split: &str,
        extension: &str,
        contents: String,
    ) -> Result<String, DatasetError> {
        let name = format!("{}_{}.{}", source, split, extension);
        self.sink.write(&name, &contents).await
    }
}
