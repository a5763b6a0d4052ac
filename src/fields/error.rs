//! Field error types.

use thiserror::Error;

use crate::vocab::VocabError;

/// Field errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Label length and sequence length don't match: {labels} and {sequence}")]
    LengthMismatch { labels: usize, sequence: usize },

    #[error("Field must be indexed before it can be converted to an array")]
    Unindexed,

    #[error("Padding length {available} is shorter than field length {required}")]
    InsufficientPadding { required: usize, available: usize },

    #[error("Missing padding length: {0}")]
    MissingPaddingKey(String),

    #[error("Vocabulary error: {0}")]
    Vocab(#[from] VocabError),
}

/// Result type for field operations
pub type Result<T> = std::result::Result<T, FieldError>;
