//! Deterministic Q/A pair generation and serialization.

use serde::{Deserialize, Serialize};

use super::seed::{BRAND_PLACEHOLDER, CANONICAL, TOPICS};

/// A single question and answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

/// Chat message inside a JSONL record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// One line of the JSONL output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRecord {
    pub messages: Vec<ChatMessage>,
    pub source: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ChatRecord {
    pub fn from_pair(pair: &QaPair, source: &str) -> Self {
        Self {
            messages: vec![
                ChatMessage {
                    role: "user".to_string(),
                    content: pair.question.clone(),
                },
                ChatMessage {
                    role: "assistant".to_string(),
                    content: pair.answer.clone(),
                },
            ],
            source: source.to_string(),
            kind: "qa".to_string(),
        }
    }
}

fn brand_text(template: &str, brand: &str) -> String {
    template.replace(BRAND_PLACEHOLDER, brand)
}

/// Generates at least `min_count` pairs.
///
/// The canonical pairs always come first, so fewer than `min_count` never
/// truncates them. Topic pairs follow round-robin; from the second pass over
/// the topics on, questions get a `(vN)` suffix and answers a `(Details N).`
/// suffix so no pair repeats.
pub fn generate_pairs(brand: &str, min_count: usize) -> Vec<QaPair> {
    let mut pairs: Vec<QaPair> = CANONICAL
        .iter()
        .map(|seed| QaPair {
            question: brand_text(seed.question, brand),
            answer: brand_text(seed.answer, brand),
        })
        .collect();

    let mut i = 0usize;
    while pairs.len() < min_count {
        let topic = &TOPICS[i % TOPICS.len()];
        let question = brand_text(topic.questions[i % topic.questions.len()], brand);
        let answer = brand_text(topic.answers[i % topic.answers.len()], brand);
        let variant = i / TOPICS.len() + 1;

        pairs.push(if variant > 1 {
            QaPair {
                question: format!("{} (v{})", question, variant),
                answer: format!("{} (Details {}).", answer, variant),
            }
        } else {
            QaPair { question, answer }
        });
        i += 1;
    }

    pairs
}

/// `Q:`/`A:` records separated by blank lines, with a trailing newline.
pub fn to_text(pairs: &[QaPair]) -> String {
    let body = pairs
        .iter()
        .map(|p| format!("Q: {}\nA: {}", p.question, p.answer))
        .collect::<Vec<_>>()
        .join("\n\n");
    body + "\n"
}

/// One JSON chat record per line.
pub fn to_jsonl(pairs: &[QaPair], source: &str) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    for pair in pairs {
        out.push_str(&serde_json::to_string(&ChatRecord::from_pair(pair, source))?);
        out.push('\n');
    }
    Ok(out)
}
