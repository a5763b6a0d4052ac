//! Vocabulary error types.

use thiserror::Error;

/// Vocabulary errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabError {
    #[error("Unknown token '{token}' in non-padded namespace '{namespace}'")]
    UnknownToken { token: String, namespace: String },

    #[error("Unknown vocabulary namespace: {0}")]
    UnknownNamespace(String),
}

/// Result type for vocabulary operations
pub type Result<T> = std::result::Result<T, VocabError>;
