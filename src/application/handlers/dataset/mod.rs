//! Dataset handlers.

mod generate_datasets;

pub use generate_datasets::{DatasetReport, GenerateDatasetsCommand, GenerateDatasetsHandler};
