//! nexora-datasets - generates the support chatbot's Q/A datasets.
//!
//! ```text
//! nexora-datasets --output-dir data --train-min 520 --val-count 60
//! ```
//!
//! Flags override the `NEXORA__DATASET__*` environment settings.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nexora::adapters::FileDatasetSink;
use nexora::application::{GenerateDatasetsCommand, GenerateDatasetsHandler};
use nexora::config::{AppConfig, DatasetConfig};
use nexora::domain::foundation::DomainError;

#[derive(Debug, Parser)]
#[command(name = "nexora-datasets", about = "Generate Q/A training and validation datasets")]
struct Cli {
    /// Directory the dataset files are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Minimum number of training pairs
    #[arg(long)]
    train_min: Option<usize>,

    /// Number of validation pairs
    #[arg(long)]
    val_count: Option<usize>,
}

impl Cli {
    fn apply(self, dataset: &mut DatasetConfig) {
        if let Some(dir) = self.output_dir {
            dataset.output_dir = dir;
        }
        if let Some(train_min) = self.train_min {
            dataset.train_min_pairs = train_min;
        }
        if let Some(val_count) = self.val_count {
            dataset.val_pairs = val_count;
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    cli.apply(&mut config.dataset);

    if let Err(e) = config.dataset.validate() {
        tracing::error!(error = %e, "Invalid dataset configuration");
        return ExitCode::FAILURE;
    }

    let dataset = config.dataset;
    let sink = Arc::new(FileDatasetSink::new(&dataset.output_dir));
    let handler = GenerateDatasetsHandler::new(sink);

    let command = GenerateDatasetsCommand {
        brand: dataset.brand,
        train_min: dataset.train_min_pairs,
        val_count: dataset.val_pairs,
    };

    match handler.handle(command).await {
        Ok(report) => {
            for file in &report.files {
                tracing::info!(path = %file, "Wrote dataset file");
            }
            tracing::info!(
                train = report.train_count,
                val = report.val_count,
                "Dataset generation complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            let err = DomainError::from(e);
            tracing::error!(code = %err.code, error = %err.message, "Dataset generation failed");
            ExitCode::FAILURE
        }
    }
}
