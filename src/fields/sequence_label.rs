//! Per-element categorical labels aligned with a companion sequence.

use ndarray::Array1;
use tracing::{debug, warn};

use super::error::{FieldError, Result};
use super::traits::{Field, PaddingLengths, SequenceField};
use crate::config::VocabularyConfig;
use crate::util::pad_sequence_to_length;
use crate::vocab::{LabelId, VocabCounter, VocabLookup, PADDING_INDEX};

/// Namespace used when none is given
pub const DEFAULT_LABEL_NAMESPACE: &str = "labels";

/// Padding key reported by sequence-shaped fields
pub const NUM_TOKENS_KEY: &str = "num_tokens";

/// Namespace suffixes that keep padding and OOV entries out of a vocabulary
/// built with `VocabularyConfig::default()`. Fields resolved against a
/// vocabulary with other suffixes should use
/// [`SequenceLabelField::with_vocab_config`].
const LABEL_NAMESPACE_SUFFIXES: [&str; 2] = ["tags", "labels"];

/// Raw labels as given at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Labels {
    /// Label strings, resolved through a vocabulary
    Strings(Vec<String>),
    /// Pre-resolved label IDs, never looked up
    Ids(Vec<LabelId>),
}

impl Labels {
    /// Number of labels
    pub fn len(&self) -> usize {
        match self {
            Labels::Strings(labels) => labels.len(),
            Labels::Ids(ids) => ids.len(),
        }
    }

    /// Whether there are no labels
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<String>> for Labels {
    fn from(labels: Vec<String>) -> Self {
        Labels::Strings(labels)
    }
}

impl From<Vec<&str>> for Labels {
    fn from(labels: Vec<&str>) -> Self {
        Labels::Strings(labels.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Labels {
    fn from(labels: [&str; N]) -> Self {
        Labels::Strings(labels.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<LabelId>> for Labels {
    fn from(ids: Vec<LabelId>) -> Self {
        Labels::Ids(ids)
    }
}

impl<const N: usize> From<[LabelId; N]> for Labels {
    fn from(ids: [LabelId; N]) -> Self {
        Labels::Ids(ids.to_vec())
    }
}

/// Indexing state. `Resolved` is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indexing {
    Unresolved,
    Resolved(Vec<LabelId>),
}

/// A categorical label for every element of a companion [`SequenceField`].
///
/// String labels are counted into a vocabulary, resolved to IDs once by
/// [`Field::index`], then padded to a batch length by [`Field::as_array`].
/// Integer labels skip the vocabulary entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceLabelField {
    labels: Labels,
    namespace: String,
    indexing: Indexing,
}

impl SequenceLabelField {
    /// Label `sequence` in the default `"labels"` namespace
    pub fn new<S>(labels: impl Into<Labels>, sequence: &S) -> Result<Self>
    where
        S: SequenceField + ?Sized,
    {
        Self::with_namespace(labels, sequence, DEFAULT_LABEL_NAMESPACE)
    }

    /// Label `sequence` in `namespace`.
    ///
    /// Warns when `namespace` does not end with `"tags"` or `"labels"`, the
    /// non-padded suffixes of the default vocabulary config.
    ///
    /// # Errors
    ///
    /// [`FieldError::LengthMismatch`] if the label count differs from
    /// `sequence.sequence_length()`.
    pub fn with_namespace<S>(
        labels: impl Into<Labels>,
        sequence: &S,
        namespace: impl Into<String>,
    ) -> Result<Self>
    where
        S: SequenceField + ?Sized,
    {
        let namespace = namespace.into();
        let non_padded = has_label_namespace_suffix(&namespace);
        Self::build(labels.into(), sequence, namespace, non_padded)
    }

    /// Label `sequence` in `namespace`, checking the namespace against the
    /// non-padded suffixes of the vocabulary config the labels will be
    /// resolved with.
    pub fn with_vocab_config<S>(
        labels: impl Into<Labels>,
        sequence: &S,
        namespace: impl Into<String>,
        config: &VocabularyConfig,
    ) -> Result<Self>
    where
        S: SequenceField + ?Sized,
    {
        let namespace = namespace.into();
        let non_padded = config.is_non_padded(&namespace);
        Self::build(labels.into(), sequence, namespace, non_padded)
    }

    fn build<S>(labels: Labels, sequence: &S, namespace: String, non_padded: bool) -> Result<Self>
    where
        S: SequenceField + ?Sized,
    {
        if !non_padded {
            warn!(
                namespace = namespace.as_str(),
                "sequence label namespace is padded in the vocabulary, so unseen labels \
                 map to the OOV id instead of failing"
            );
        }

        let sequence_length = sequence.sequence_length();
        if labels.len() != sequence_length {
            return Err(FieldError::LengthMismatch {
                labels: labels.len(),
                sequence: sequence_length,
            });
        }

        let indexing = match &labels {
            Labels::Ids(ids) => Indexing::Resolved(ids.clone()),
            Labels::Strings(strings) if strings.is_empty() => Indexing::Resolved(Vec::new()),
            Labels::Strings(_) => Indexing::Unresolved,
        };

        Ok(Self {
            labels,
            namespace,
            indexing,
        })
    }

    /// Raw labels as given at construction
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Vocabulary namespace of the labels
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Current indexing state
    pub fn indexing(&self) -> &Indexing {
        &self.indexing
    }

    /// Resolved IDs, if indexing has completed
    pub fn resolved_ids(&self) -> Option<&[LabelId]> {
        match &self.indexing {
            Indexing::Resolved(ids) => Some(ids),
            Indexing::Unresolved => None,
        }
    }

    /// Whether labels have been resolved to IDs
    pub fn is_indexed(&self) -> bool {
        matches!(self.indexing, Indexing::Resolved(_))
    }

    /// Number of labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the field has no labels
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Field for SequenceLabelField {
    fn count_vocab_items(&self, counter: &mut VocabCounter) {
        if let (Indexing::Unresolved, Labels::Strings(labels)) = (&self.indexing, &self.labels) {
            let namespace_counts = counter.entry(self.namespace.clone()).or_default();
            for label in labels {
                *namespace_counts.entry(label.clone()).or_insert(0) += 1;
            }
        }
    }

    fn index(&mut self, vocab: &dyn VocabLookup) -> Result<()> {
        let Labels::Strings(labels) = &self.labels else {
            return Ok(());
        };
        if self.is_indexed() {
            return Ok(());
        }

        let ids = labels
            .iter()
            .map(|label| vocab.get_token_index(label, &self.namespace))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        debug!(
            namespace = self.namespace.as_str(),
            num_labels = ids.len(),
            "indexed sequence labels"
        );
        self.indexing = Indexing::Resolved(ids);
        Ok(())
    }

    fn get_padding_lengths(&self) -> PaddingLengths {
        PaddingLengths::from([(NUM_TOKENS_KEY.to_string(), self.len())])
    }

    fn as_array(&self, padding_lengths: &PaddingLengths) -> Result<Array1<LabelId>> {
        let Indexing::Resolved(ids) = &self.indexing else {
            return Err(FieldError::Unindexed);
        };
        let desired = *padding_lengths
            .get(NUM_TOKENS_KEY)
            .ok_or_else(|| FieldError::MissingPaddingKey(NUM_TOKENS_KEY.to_string()))?;
        if desired < ids.len() {
            return Err(FieldError::InsufficientPadding {
                required: ids.len(),
                available: desired,
            });
        }
        Ok(Array1::from(pad_sequence_to_length(
            ids,
            desired,
            PADDING_INDEX,
        )))
    }

    fn empty_field(&self) -> Self {
        Self {
            labels: Labels::Strings(Vec::new()),
            namespace: self.namespace.clone(),
            indexing: Indexing::Resolved(Vec::new()),
        }
    }
}

fn has_label_namespace_suffix(namespace: &str) -> bool {
    LABEL_NAMESPACE_SUFFIXES
        .iter()
        .any(|suffix| namespace.ends_with(suffix))
}
