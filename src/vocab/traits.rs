//! Vocabulary capability trait.

use std::collections::HashMap;

use super::error::Result;

/// Label / token ID type
pub type LabelId = usize;

/// ID written into padded array positions and reserved for the padding token
pub const PADDING_INDEX: LabelId = 0;

/// Frequency table filled during a corpus scan: `namespace -> token -> count`
pub type VocabCounter = HashMap<String, HashMap<String, usize>>;

/// Read-only vocabulary lookup
pub trait VocabLookup {
    /// Get the ID of `token` within `namespace`
    fn get_token_index(&self, token: &str, namespace: &str) -> Result<LabelId>;

    /// Get the token for `id` within `namespace`
    fn get_token_from_index(&self, id: LabelId, namespace: &str) -> Option<&str>;
}
