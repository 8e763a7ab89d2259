// File: src/error.rs
use thiserror::Error;

/// The tracker's only failure mode. A caller must always pass a concrete
/// word value; an empty or whitespace-only word is valid and ignored,
/// but a missing one is not a word at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackerError {
    #[error("word value is required")]
    MissingWord,
}
