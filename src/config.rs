//! Vocabulary configuration types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse vocabulary config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Vocabulary config must list at least one non-padded namespace suffix")]
    EmptyNamespaceSuffixes,

    #[error("Padding and OOV tokens must differ, both are '{0}'")]
    DuplicateSpecialTokens(String),
}

/// Vocabulary configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Namespaces ending with any of these suffixes get no padding or OOV entries
    pub non_padded_suffixes: Vec<String>,
    /// Padding token, id 0 in padded namespaces
    pub padding_token: String,
    /// Out-of-vocabulary token, id 1 in padded namespaces
    pub oov_token: String,
    /// Minimum count for a counted token to enter the vocabulary
    pub min_count: usize,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            non_padded_suffixes: vec!["labels".to_string(), "tags".to_string()],
            padding_token: "@@PADDING@@".to_string(),
            oov_token: "@@UNKNOWN@@".to_string(),
            min_count: 1,
        }
    }
}

impl VocabularyConfig {
    /// Parse a config from YAML, filling missing keys with defaults
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.non_padded_suffixes.is_empty() {
            return Err(ConfigError::EmptyNamespaceSuffixes);
        }
        if self.padding_token == self.oov_token {
            return Err(ConfigError::DuplicateSpecialTokens(self.oov_token.clone()));
        }
        Ok(())
    }

    /// Set the non-padded namespace suffixes
    pub fn with_non_padded_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.non_padded_suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the padding token
    pub fn with_padding_token(mut self, token: impl Into<String>) -> Self {
        self.padding_token = token.into();
        self
    }

    /// Set the OOV token
    pub fn with_oov_token(mut self, token: impl Into<String>) -> Self {
        self.oov_token = token.into();
        self
    }

    /// Set the minimum token count
    pub fn with_min_count(mut self, min_count: usize) -> Self {
        self.min_count = min_count;
        self
    }

    /// Whether `namespace` skips padding and OOV reservation
    pub fn is_non_padded(&self, namespace: &str) -> bool {
        self.non_padded_suffixes
            .iter()
            .any(|suffix| namespace.ends_with(suffix.as_str()))
    }
}
