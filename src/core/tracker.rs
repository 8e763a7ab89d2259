// File: src/core/tracker.rs
use crate::core::normalize::normalize;
use crate::core::types::{Count, WordCount};
use crate::error::TrackerError;
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

/// The tracker capability: feed words in one at a time, read the ranked
/// report back out. Implementations differ only in storage strategy; the
/// observable behavior is identical, so any of them can sit behind the
/// same suite of checks.
pub trait WordStatistics {
    /// Accepts one word. `None` is an invalid call and leaves the state
    /// untouched; an empty or whitespace-only word is a valid no-op.
    fn add_word(&mut self, word: Option<&str>) -> Result<(), TrackerError>;

    /// Snapshot of every tracked word with its current count, ordered by
    /// count descending, ties broken by word ascending (code-point
    /// order). Never mutates the tracker.
    fn statistics(&self) -> Vec<WordCount>;
}

/// The default tracker: hash-map counts, ranked on demand.
#[derive(Debug, Clone, Default)]
pub struct WordTracker {
    counts: HashMap<String, Count>,
}

impl WordTracker {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

impl WordStatistics for WordTracker {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), TrackerError> {
        let raw = word.ok_or(TrackerError::MissingWord)?;
        if let Some(key) = normalize(raw) {
            *self.counts.entry(key).or_insert(0) += 1;
        }
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        let mut entries: Vec<WordCount> = self
            .counts
            .iter()
            .map(|(word, &count)| WordCount::new(word, count))
            .collect();
        entries.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        entries
    }
}

/// Alternate strategy: ordered-map counts. Iteration is already
/// word-ascending, so ranking only needs a stable sort by count.
#[derive(Debug, Clone, Default)]
pub struct OrderedWordTracker {
    counts: BTreeMap<String, Count>,
}

impl OrderedWordTracker {
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }
}

impl WordStatistics for OrderedWordTracker {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), TrackerError> {
        let raw = word.ok_or(TrackerError::MissingWord)?;
        if let Some(key) = normalize(raw) {
            *self.counts.entry(key).or_insert(0) += 1;
        }
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        let mut entries: Vec<WordCount> = self
            .counts
            .iter()
            .map(|(word, &count)| WordCount::new(word, count))
            .collect();
        // Stable sort keeps the alphabetical order within equal counts.
        entries.sort_by_key(|entry| Reverse(entry.count));
        entries
    }
}
