// src/core/types.rs
use serde::{Deserialize, Serialize};

/// The number of times a word has been accepted.
/// Kept wide on purpose: sustained ingestion must never overflow it.
pub type Count = u64;

/// A single entry of the frequency report: a normalized word together
/// with its running count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: Count,
}

impl WordCount {
    pub fn new(word: &str, count: Count) -> Self {
        Self {
            word: word.to_string(),
            count,
        }
    }
}
