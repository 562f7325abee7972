//! Dataset generation written through the file sink.

use std::sync::Arc;

use tempfile::TempDir;

use nexora::adapters::FileDatasetSink;
use nexora::application::{GenerateDatasetsCommand, GenerateDatasetsHandler};
use nexora::domain::dataset::{ChatRecord, BRAND_PLACEHOLDER, CANONICAL};

fn read(dir: &TempDir, name: &str) -> String {
    std::fs::read_to_string(dir.path().join(name)).unwrap()
}

fn questions(text: &str) -> Vec<&str> {
    text.lines()
        .filter_map(|line| line.strip_prefix("Q: "))
        .collect()
}

async fn generate(dir: &TempDir, train_min: usize, val_count: usize) {
    let handler = GenerateDatasetsHandler::new(Arc::new(FileDatasetSink::new(dir.path())));
    let report = handler
        .handle(GenerateDatasetsCommand {
            brand: "Nexora".to_string(),
            train_min,
            val_count,
        })
        .await
        .unwrap();
    assert_eq!(report.files.len(), 4);
}

#[tokio::test]
async fn default_run_writes_520_training_and_60_validation_records() {
    let dir = TempDir::new().unwrap();
    generate(&dir, 520, 60).await;

    let train_txt = read(&dir, "nexora_train.txt");
    let train_jsonl = read(&dir, "nexora_train.jsonl");
    assert_eq!(questions(&train_txt).len(), 520);
    assert_eq!(train_jsonl.lines().count(), 520);

    assert_eq!(questions(&read(&dir, "nexora_val.txt")).len(), 60);
    assert_eq!(read(&dir, "nexora_val.jsonl").lines().count(), 60);
}

#[tokio::test]
async fn training_set_starts_with_canonical_pairs() {
    let dir = TempDir::new().unwrap();
    generate(&dir, 520, 60).await;

    let records: Vec<ChatRecord> = read(&dir, "nexora_train.jsonl")
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    for (record, seed) in records.iter().zip(CANONICAL.iter()) {
        assert_eq!(
            record.messages[0].content,
            seed.question.replace(BRAND_PLACEHOLDER, "Nexora")
        );
        assert_eq!(
            record.messages[1].content,
            seed.answer.replace(BRAND_PLACEHOLDER, "Nexora")
        );
        assert_eq!(record.source, "nexora");
        assert_eq!(record.kind, "qa");
    }
}

#[tokio::test]
async fn text_file_uses_blank_line_separated_records() {
    let dir = TempDir::new().unwrap();
    generate(&dir, 13, 2).await;

    let text = read(&dir, "nexora_val.txt");

    assert!(text.starts_with("Q: What is Nexora?\nA: "));
    assert!(text.ends_with('\n'));
    assert_eq!(text.matches("\n\nQ: ").count(), 1);
}

#[tokio::test]
async fn output_directory_is_created() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("out").join("datasets");
    let handler = GenerateDatasetsHandler::new(Arc::new(FileDatasetSink::new(&nested)));

    handler
        .handle(GenerateDatasetsCommand {
            brand: "Acme".to_string(),
            train_min: 20,
            val_count: 5,
        })
        .await
        .unwrap();

    assert!(nested.join("acme_train.jsonl").exists());
    assert!(nested.join("acme_val.txt").exists());
}
