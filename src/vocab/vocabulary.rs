//! In-memory namespaced vocabulary.

use std::collections::HashMap;

use tracing::debug;

use super::error::{Result, VocabError};
use super::traits::{LabelId, VocabCounter, VocabLookup, PADDING_INDEX};
use crate::config::VocabularyConfig;

#[derive(Debug, Clone)]
struct NamespaceVocab {
    token_to_id: HashMap<String, LabelId>,
    id_to_token: Vec<String>,
    /// Set only for padded namespaces
    oov_id: Option<LabelId>,
}

impl NamespaceVocab {
    fn non_padded() -> Self {
        Self {
            token_to_id: HashMap::new(),
            id_to_token: Vec::new(),
            oov_id: None,
        }
    }

    fn padded(config: &VocabularyConfig) -> Self {
        let mut vocab = Self::non_padded();
        vocab.insert(&config.padding_token);
        vocab.oov_id = Some(vocab.insert(&config.oov_token));
        vocab
    }

    fn insert(&mut self, token: &str) -> LabelId {
        if let Some(&id) = self.token_to_id.get(token) {
            return id;
        }
        let id = self.id_to_token.len();
        self.id_to_token.push(token.to_string());
        self.token_to_id.insert(token.to_string(), id);
        id
    }
}

/// Namespaced vocabulary.
///
/// Padded namespaces reserve id 0 for padding and id 1 for unknown tokens.
/// Non-padded namespaces (labels, tags) start at id 0 and reject unknown
/// tokens.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    config: VocabularyConfig,
    namespaces: HashMap<String, NamespaceVocab>,
    /// Reserved entries every padded namespace starts from
    padded_template: NamespaceVocab,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(VocabularyConfig::default())
    }
}

impl Vocabulary {
    /// Create an empty vocabulary
    pub fn new(config: VocabularyConfig) -> Self {
        let padded_template = NamespaceVocab::padded(&config);
        Self {
            config,
            namespaces: HashMap::new(),
            padded_template,
        }
    }

    /// Build a vocabulary from corpus counts.
    ///
    /// Tokens below `min_count` are dropped. Within a namespace, ids follow
    /// descending count with ties broken lexicographically.
    pub fn from_counter(counter: &VocabCounter, config: VocabularyConfig) -> Self {
        let min_count = config.min_count;
        let mut vocab = Self::new(config);

        let mut namespaces: Vec<&String> = counter.keys().collect();
        namespaces.sort();

        for namespace in namespaces {
            let mut tokens: Vec<(&String, usize)> = counter[namespace]
                .iter()
                .map(|(token, count)| (token, *count))
                .filter(|(_, count)| *count >= min_count)
                .collect();
            tokens.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

            for (token, _) in tokens {
                vocab.add_token_to_namespace(token, namespace);
            }

            debug!(
                namespace = namespace.as_str(),
                size = vocab.get_vocab_size(namespace),
                padded = vocab.is_padded(namespace),
                "built vocabulary namespace"
            );
        }

        vocab
    }

    /// Add `token` to `namespace`, returning its ID (existing or new)
    pub fn add_token_to_namespace(&mut self, token: &str, namespace: &str) -> LabelId {
        let padded = self.is_padded(namespace);
        let template = &self.padded_template;
        self.namespaces
            .entry(namespace.to_string())
            .or_insert_with(|| {
                if padded {
                    template.clone()
                } else {
                    NamespaceVocab::non_padded()
                }
            })
            .insert(token)
    }

    /// Number of IDs in `namespace`, including reserved entries
    pub fn get_vocab_size(&self, namespace: &str) -> usize {
        match self.namespaces.get(namespace) {
            Some(vocab) => vocab.id_to_token.len(),
            None if self.is_padded(namespace) => self.padded_template.id_to_token.len(),
            None => 0,
        }
    }

    /// Whether `namespace` reserves padding and OOV ids
    pub fn is_padded(&self, namespace: &str) -> bool {
        !self.config.is_non_padded(namespace)
    }

    /// Namespaces that hold at least one entry, sorted
    pub fn namespaces(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.namespaces.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Configuration this vocabulary was built with
    pub fn config(&self) -> &VocabularyConfig {
        &self.config
    }

    /// Padding ID for padded namespaces
    pub fn padding_index(&self) -> LabelId {
        PADDING_INDEX
    }
}

impl VocabLookup for Vocabulary {
    fn get_token_index(&self, token: &str, namespace: &str) -> Result<LabelId> {
        match self.namespaces.get(namespace) {
            Some(vocab) => match (vocab.token_to_id.get(token), vocab.oov_id) {
                (Some(&id), _) => Ok(id),
                (None, Some(oov_id)) => Ok(oov_id),
                (None, None) => Err(VocabError::UnknownToken {
                    token: token.to_string(),
                    namespace: namespace.to_string(),
                }),
            },
            None => match self.padded_template.oov_id {
                Some(oov_id) if self.is_padded(namespace) => Ok(oov_id),
                _ => Err(VocabError::UnknownNamespace(namespace.to_string())),
            },
        }
    }

    fn get_token_from_index(&self, id: LabelId, namespace: &str) -> Option<&str> {
        self.namespaces
            .get(namespace)?
            .id_to_token
            .get(id)
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OOV_ID: LabelId = 1;

    fn counter(entries: &[(&str, &str, usize)]) -> VocabCounter {
        let mut counter = VocabCounter::new();
        for &(namespace, token, count) in entries {
            *counter
                .entry(namespace.to_string())
                .or_default()
                .entry(token.to_string())
                .or_insert(0) += count;
        }
        counter
    }

    #[test]
    fn test_padded_namespace_reserves_ids() {
        let mut vocab = Vocabulary::default();
        let id = vocab.add_token_to_namespace("hello", "tokens");
        assert_eq!(id, 2);
        assert_eq!(vocab.get_token_from_index(0, "tokens"), Some("@@PADDING@@"));
        assert_eq!(vocab.get_token_from_index(1, "tokens"), Some("@@UNKNOWN@@"));
        assert_eq!(vocab.get_vocab_size("tokens"), 3);
    }

    #[test]
    fn test_non_padded_namespace_starts_at_zero() {
        let mut vocab = Vocabulary::default();
        assert_eq!(vocab.add_token_to_namespace("NN", "pos_tags"), 0);
        assert_eq!(vocab.add_token_to_namespace("VB", "pos_tags"), 1);
        assert_eq!(vocab.add_token_to_namespace("NN", "pos_tags"), 0);
        assert_eq!(vocab.get_vocab_size("pos_tags"), 2);
    }

    #[test]
    fn test_unknown_token_padded_maps_to_oov() {
        let mut vocab = Vocabulary::default();
        vocab.add_token_to_namespace("hello", "tokens");
        assert_eq!(vocab.get_token_index("world", "tokens"), Ok(OOV_ID));
        assert_eq!(vocab.get_token_index("world", "chars"), Ok(OOV_ID));
    }

    #[test]
    fn test_unknown_token_non_padded_errors() {
        let mut vocab = Vocabulary::default();
        vocab.add_token_to_namespace("O", "labels");
        assert_eq!(
            vocab.get_token_index("B-PER", "labels"),
            Err(VocabError::UnknownToken {
                token: "B-PER".to_string(),
                namespace: "labels".to_string(),
            })
        );
        assert_eq!(
            vocab.get_token_index("O", "ner_tags"),
            Err(VocabError::UnknownNamespace("ner_tags".to_string()))
        );
    }

    #[test]
    fn test_namespaces_do_not_collide() {
        let mut vocab = Vocabulary::default();
        vocab.add_token_to_namespace("O", "tokens");
        vocab.add_token_to_namespace("O", "labels");
        assert_eq!(vocab.get_token_index("O", "tokens"), Ok(2));
        assert_eq!(vocab.get_token_index("O", "labels"), Ok(0));
    }

    #[test]
    fn test_from_counter_orders_by_count_then_token() {
        let counter = counter(&[
            ("labels", "O", 10),
            ("labels", "B-PER", 3),
            ("labels", "I-PER", 3),
            ("labels", "B-LOC", 1),
        ]);
        let vocab = Vocabulary::from_counter(&counter, VocabularyConfig::default());
        assert_eq!(vocab.get_token_index("O", "labels"), Ok(0));
        assert_eq!(vocab.get_token_index("B-PER", "labels"), Ok(1));
        assert_eq!(vocab.get_token_index("I-PER", "labels"), Ok(2));
        assert_eq!(vocab.get_token_index("B-LOC", "labels"), Ok(3));
    }

    #[test]
    fn test_from_counter_min_count() {
        let counter = counter(&[("tokens", "the", 5), ("tokens", "rare", 1)]);
        let config = VocabularyConfig::default().with_min_count(2);
        let vocab = Vocabulary::from_counter(&counter, config);
        assert_eq!(vocab.get_token_index("the", "tokens"), Ok(2));
        assert_eq!(vocab.get_token_index("rare", "tokens"), Ok(OOV_ID));
        assert_eq!(vocab.get_vocab_size("tokens"), 3);
    }

    #[test]
    fn test_namespaces_listed_sorted() {
        let counter = counter(&[("tokens", "a", 1), ("labels", "O", 1)]);
        let vocab = Vocabulary::from_counter(&counter, VocabularyConfig::default());
        assert_eq!(vocab.namespaces(), vec!["labels", "tokens"]);
    }

    #[test]
    fn test_shared_padding_and_oov_never_alias_real_tokens() {
        let config = VocabularyConfig::default()
            .with_padding_token("<x>")
            .with_oov_token("<x>");
        let mut vocab = Vocabulary::new(config);
        let the = vocab.add_token_to_namespace("the", "tokens");
        let unseen = vocab.get_token_index("zebra", "tokens").unwrap();
        assert_ne!(the, unseen);
        assert_eq!(vocab.get_token_from_index(unseen, "tokens"), Some("<x>"));
        assert_eq!(vocab.get_token_index("zebra", "words"), Ok(unseen));
        assert_eq!(vocab.get_vocab_size("words"), 1);
    }

    #[test]
    fn test_vocab_size_unseen_namespace() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.get_vocab_size("tokens"), 2);
        assert_eq!(vocab.get_vocab_size("labels"), 0);
        assert_eq!(vocab.padding_index(), 0);
    }
}
