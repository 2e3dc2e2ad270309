//! Error types for the wordsieve library

use thiserror::Error;

/// Errors that can occur when building or feeding a filter
///
/// The taxonomy is deliberately narrow: the filter itself is pure and
/// in-memory, so the only failure sources are construction-time
/// configuration, the dictionary collaborator's I/O, and state
/// serialization. False positives are a quantified property of the data
/// structure, not an error.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid digest slice width: {width} (must be between 1 and 31)")]
    InvalidSliceWidth { width: u32 },

    #[error("dictionary read error: {0}")]
    Dictionary(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}
