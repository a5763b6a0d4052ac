//! Sequence Label Fields
//!
//! Per-element categorical labels for ordered sequences (a POS tag per token,
//! a BIO tag per token) that defer string-to-id mapping and padding to later
//! pipeline stages.
//!
//! # Lifecycle
//!
//! ```text
//! construct ──► count_vocab_items ──► Vocabulary::from_counter ──► index ──► as_array
//!     │                                                              ▲
//!     └── integer labels are resolved immediately ───────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use seqlabel::{Field, SequenceLabelField, TokenSequence, VocabCounter, Vocabulary, VocabularyConfig};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let tokens = TokenSequence::new(["John", "Smith", "spoke"]);
//!     let mut tags = SequenceLabelField::new(["B-PER", "I-PER", "O"], &tokens)?;
//!
//!     let mut counter = VocabCounter::new();
//!     tags.count_vocab_items(&mut counter);
//!     let vocab = Vocabulary::from_counter(&counter, VocabularyConfig::default());
//!
//!     tags.index(&vocab)?;
//!     let padded = tags.as_array(&tags.get_padding_lengths())?;
//!     assert_eq!(padded.len(), 3);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod config;
pub mod fields;
pub mod util;
pub mod vocab;

pub use config::{ConfigError, VocabularyConfig};
pub use fields::{
    Field, FieldError, Indexing, Labels, PaddingLengths, Result, SequenceField,
    SequenceLabelField, TokenSequence, DEFAULT_LABEL_NAMESPACE, NUM_TOKENS_KEY,
};
pub use util::pad_sequence_to_length;
pub use vocab::{LabelId, VocabCounter, VocabError, VocabLookup, Vocabulary, PADDING_INDEX};
