// File: src/core/normalize.rs
use caseless::default_case_fold_str;

/// Maximum length of a tracked word, in code points. Longer inputs keep
/// only their prefix and are counted under the shortened key.
pub const MAX_WORD_LEN: usize = 10;

/// Produces the canonical key for an input word, or `None` when the input
/// is empty after trimming and must be ignored.
///
/// The pipeline runs in a fixed order: trim surrounding whitespace, apply
/// full Unicode case folding (one-to-many mappings included, so "ẞ"
/// becomes "ss"), then truncate to `MAX_WORD_LEN` code points. Truncation
/// happens after folding, so a fold expansion counts toward the limit.
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut folded = default_case_fold_str(trimmed);
    if let Some((cut, _)) = folded.char_indices().nth(MAX_WORD_LEN) {
        folded.truncate(cut);
    }
    Some(folded)
}
