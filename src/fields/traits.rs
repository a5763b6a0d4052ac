//! Field trait definitions.

use std::collections::HashMap;

use ndarray::Array1;

use super::error::Result;
use crate::vocab::{LabelId, VocabCounter, VocabLookup};

/// Padding key -> length
pub type PaddingLengths = HashMap<String, usize>;

/// Anything with a length that other fields can align against
pub trait SequenceField {
    /// Number of elements in the sequence
    fn sequence_length(&self) -> usize;
}

/// A single piece of an example that can be indexed and padded
pub trait Field: Sized {
    /// Add this field's raw strings to the corpus frequency table
    fn count_vocab_items(&self, counter: &mut VocabCounter);

    /// Resolve raw strings to IDs. Calling it again is a no-op.
    fn index(&mut self, vocab: &dyn VocabLookup) -> Result<()>;

    /// Lengths this field needs, keyed by padding dimension
    fn get_padding_lengths(&self) -> PaddingLengths;

    /// Render the field as a padded ID array
    fn as_array(&self, padding_lengths: &PaddingLengths) -> Result<Array1<LabelId>>;

    /// Zero-length stand-in used when padding batches
    fn empty_field(&self) -> Self;
}
