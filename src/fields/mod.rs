//! Fields
//!
//! A field is one piece of a training example. Fields take part in a two-pass
//! protocol: a corpus scan counts their raw strings into a
//! [`VocabCounter`](crate::vocab::VocabCounter), then each field is indexed
//! against the finished vocabulary and padded into a fixed-length ID array.
//!
//! [`SequenceLabelField`] attaches one label per element of a companion
//! [`SequenceField`], such as a [`TokenSequence`].

mod error;
mod sequence_label;
mod tokens;
mod traits;

pub use error::{FieldError, Result};
pub use sequence_label::{
    Indexing, Labels, SequenceLabelField, DEFAULT_LABEL_NAMESPACE, NUM_TOKENS_KEY,
};
pub use tokens::{TokenSequence, DEFAULT_TOKEN_NAMESPACE};
pub use traits::{Field, PaddingLengths, SequenceField};
