//! Token sequence field.

use ndarray::Array1;

use super::error::{FieldError, Result};
use super::sequence_label::NUM_TOKENS_KEY;
use super::traits::{Field, PaddingLengths, SequenceField};
use crate::util::pad_sequence_to_length;
use crate::vocab::{LabelId, VocabCounter, VocabLookup, PADDING_INDEX};

/// Namespace used for tokens when none is given
pub const DEFAULT_TOKEN_NAMESPACE: &str = "tokens";

/// An ordered sequence of string tokens, typically the words of a sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<String>,
    namespace: String,
    ids: Option<Vec<LabelId>>,
}

impl TokenSequence {
    /// Create a token sequence in the `"tokens"` namespace
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_namespace(tokens, DEFAULT_TOKEN_NAMESPACE)
    }

    /// Create a token sequence in `namespace`
    pub fn with_namespace<I, S>(tokens: I, namespace: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            namespace: namespace.into(),
            ids: None,
        }
    }

    /// Tokens in order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Vocabulary namespace of the tokens
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Token IDs, if indexed
    pub fn ids(&self) -> Option<&[LabelId]> {
        self.ids.as_deref()
    }
}

impl SequenceField for TokenSequence {
    fn sequence_length(&self) -> usize {
        self.tokens.len()
    }
}

impl Field for TokenSequence {
    fn count_vocab_items(&self, counter: &mut VocabCounter) {
        let namespace_counts = counter.entry(self.namespace.clone()).or_default();
        for token in &self.tokens {
            *namespace_counts.entry(token.clone()).or_insert(0) += 1;
        }
    }

    fn index(&mut self, vocab: &dyn VocabLookup) -> Result<()> {
        if self.ids.is_some() {
            return Ok(());
        }
        let ids = self
            .tokens
            .iter()
            .map(|token| vocab.get_token_index(token, &self.namespace))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        self.ids = Some(ids);
        Ok(())
    }

    fn get_padding_lengths(&self) -> PaddingLengths {
        PaddingLengths::from([(NUM_TOKENS_KEY.to_string(), self.tokens.len())])
    }

    fn as_array(&self, padding_lengths: &PaddingLengths) -> Result<Array1<LabelId>> {
        let ids = self.ids.as_ref().ok_or(FieldError::Unindexed)?;
        let desired = *padding_lengths
            .get(NUM_TOKENS_KEY)
            .ok_or_else(|| FieldError::MissingPaddingKey(NUM_TOKENS_KEY.to_string()))?;
        if desired < ids.len() {
            return Err(FieldError::InsufficientPadding {
                required: ids.len(),
                available: desired,
            });
        }
        Ok(Array1::from(pad_sequence_to_length(ids, desired, PADDING_INDEX)))
    }

    fn empty_field(&self) -> Self {
        Self {
            tokens: Vec::new(),
            namespace: self.namespace.clone(),
            ids: Some(Vec::new()),
        }
    }
}
