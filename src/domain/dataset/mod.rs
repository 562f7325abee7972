//! Dataset domain module.
//!
//! Offline generator of Q/A pairs used to fine-tune the support chatbot.
//! Output is fully deterministic for a given brand and pair count.

mod generator;
mod seed;

pub use generator::{generate_pairs, to_jsonl, to_text, ChatMessage, ChatRecord, QaPair};
pub use seed::{SeedPair, Topic, BRAND_PLACEHOLDER, CANONICAL, TOPICS};
