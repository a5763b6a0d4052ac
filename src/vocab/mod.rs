//! Namespaced Vocabulary
//!
//! Maps `(token, namespace)` pairs to dense integer ids. Namespaces keep
//! unrelated id spaces apart, so the tag `"O"` and the word `"O"` never share
//! an id.
//!
//! Fields only see the [`VocabLookup`] capability; [`Vocabulary`] is the
//! in-memory implementation built from a [`VocabCounter`] filled during a
//! corpus scan.

mod error;
mod traits;
mod vocabulary;

pub use error::{Result, VocabError};
pub use traits::{LabelId, VocabCounter, VocabLookup, PADDING_INDEX};
pub use vocabulary::Vocabulary;
