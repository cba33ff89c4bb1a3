//! The document corpus.
//!
//! A [`Corpus`] owns its documents in insertion order and the single
//! [`Trie`] every document feeds for autocomplete. It is the entry point for
//! ingestion and for all queries.
//!
//! # Example
//!
//! ```
//! use docsearch::index::corpus::Corpus;
//! use docsearch::query::Hit;
//!
//! let mut corpus = Corpus::new();
//! corpus.add_text("a", "the cat sat").unwrap();
//! corpus.add_text("b", "the dog sat").unwrap();
//!
//! let mut cursor = corpus.find("the dog").unwrap().unwrap();
//! assert_eq!(cursor.get_content().unwrap(), &["the", "dog", "sat"]);
//! assert_eq!(cursor.get_content_length(), Some(3));
//! assert_eq!(cursor.next_hit(), Some(Hit::phrase(0, 2)));
//! assert_eq!(cursor.next_hit(), None);
//!
//! assert_eq!(corpus.autocomplete("cat"), Some("cat"));
//! ```

use std::fmt;
use std::sync::Arc;

use ahash::AHashSet;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::{split_query, tokenize};
use crate::config::CorpusConfig;
use crate::error::{DocSearchError, Result};
use crate::index::document::Document;
use crate::index::trie::Trie;
use crate::query::{self, ResultCursor};

/// Summary counts for a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    /// Number of documents.
    pub documents: usize,
    /// Words across all documents, duplicates included.
    pub total_tokens: usize,
    /// Distinct case-folded words across all documents.
    pub unique_terms: usize,
    /// Distinct words offered for completion.
    pub trie_words: usize,
}

/// An in-memory collection of searchable documents.
pub struct Corpus {
    config: CorpusConfig,
    tokenizer: Arc<dyn Tokenizer>,
    documents: Vec<Document>,
    trie: Trie,
}

impl fmt::Debug for Corpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Corpus")
            .field("config", &self.config)
            .field("tokenizer", &self.tokenizer.name())
            .field("documents", &self.documents.len())
            .field("trie_words", &self.trie.len())
            .finish()
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::new()
    }
}

impl Corpus {
    /// Create an empty corpus with the default configuration.
    pub fn new() -> Self {
        Self::from_valid_config(CorpusConfig::default())
    }

    /// Create an empty corpus with `config`.
    pub fn with_config(config: CorpusConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: CorpusConfig) -> Self {
        Corpus {
            tokenizer: config.tokenizer.build(),
            trie: Trie::with_min_prefix_len(config.min_prefix_len),
            documents: Vec::new(),
            config,
        }
    }

    /// Add a document made of `words`, in order, and return its id.
    ///
    /// Words are searchable case-insensitively. Words made only of ASCII
    /// letters also become autocomplete candidates; others are skipped for
    /// completion without failing the document. On error the corpus is left
    /// as it was.
    pub fn add_document<N: Into<String>>(&mut self, name: N, words: Vec<String>) -> Result<usize> {
        self.documents
            .try_reserve(1)
            .map_err(|e| DocSearchError::allocation("document list", e))?;

        let (document, new_words) =
            Document::build(name.into(), words, self.config.num_buckets, &mut self.trie)?;
        debug!(
            "indexed {:?}: {} words, {} new completion words",
            document.name(),
            document.size(),
            new_words
        );

        let id = self.documents.len();
        self.documents.push(document);
        Ok(id)
    }

    /// Tokenize `text` with the corpus tokenizer and add it as a document.
    pub fn add_text<N: Into<String>>(&mut self, name: N, text: &str) -> Result<usize> {
        let words = tokenize(self.tokenizer.as_ref(), text)?;
        self.add_document(name, words)
    }

    /// Run a query.
    ///
    /// The query is split with the corpus tokenizer. One word is a word
    /// lookup, several are a phrase. A query with no words finds nothing.
    pub fn find(&self, query: &str) -> Result<Option<ResultCursor<'_>>> {
        let words = split_query(self.tokenizer.as_ref(), query)?;
        trace!("query {query:?} split into {words:?}");

        match words.as_slice() {
            [] => Ok(None),
            [word] => self.find_word(word),
            _ => self.find_phrase(&words),
        }
    }

    /// Find a single word, case-insensitively.
    pub fn find_word(&self, word: &str) -> Result<Option<ResultCursor<'_>>> {
        query::find_word(&self.documents, word)
    }

    /// Find the words as a phrase at consecutive positions.
    pub fn find_phrase<S: AsRef<str>>(&self, words: &[S]) -> Result<Option<ResultCursor<'_>>> {
        query::find_phrase(&self.documents, words)
    }

    /// Whether every word occurs somewhere in the corpus.
    pub fn contains_all<S: AsRef<str>>(&self, words: &[S]) -> bool {
        query::contains_all(&self.documents, words)
    }

    /// Suggest a completion for `prefix`.
    ///
    /// Suggestions are case-folded. Prefixes shorter than the configured
    /// minimum never complete.
    pub fn autocomplete(&self, prefix: &str) -> Option<&str> {
        self.trie.find_completion(prefix)
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether no document was added yet.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// All documents in insertion order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// The document with id `id`.
    pub fn document(&self, id: usize) -> Option<&Document> {
        self.documents.get(id)
    }

    /// The first document named `name`.
    pub fn document_by_name(&self, name: &str) -> Option<&Document> {
        self.documents.iter().find(|document| document.name() == name)
    }

    /// The shared completion trie.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// The configuration this corpus was built with.
    pub fn config(&self) -> &CorpusConfig {
        &self.config
    }

    /// The tokenizer used for documents and queries.
    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    pub fn stats(&self) -> CorpusStats {
        let unique_terms = self
            .documents
            .iter()
            .flat_map(|document| document.word_map().keys())
            .collect::<AHashSet<_>>()
            .len();

        CorpusStats {
            documents: self.documents.len(),
            total_tokens: self.documents.iter().map(Document::size).sum(),
            unique_terms,
            trie_words: self.trie.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::TokenizerKind;
    use crate::query::{Hit, VisitState};

    fn scenario() -> Corpus {
        let mut corpus = Corpus::new();
        corpus.add_text("A", "the cat sat").unwrap();
        corpus.add_text("B", "the dog sat").unwrap();
        corpus
    }

    #[test]
    fn test_add_document_ids() {
        let mut corpus = Corpus::new();
        assert!(corpus.is_empty());
        assert_eq!(corpus.add_text("a", "one").unwrap(), 0);
        assert_eq!(corpus.add_text("b", "two").unwrap(), 1);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.document(1).unwrap().name(), "b");
        assert_eq!(corpus.document_by_name("a").unwrap().tokens(), &["one"]);
        assert!(corpus.document(2).is_none());
    }

    #[test]
    fn test_find_single_word_across_documents() {
        let corpus = scenario();
        let cursor = corpus.find("SAT").unwrap().unwrap();
        assert_eq!(
            cursor.hits().collect::<Vec<_>>(),
            vec![("A", Hit::word(2)), ("B", Hit::word(2))]
        );
    }

    #[test]
    fn test_find_phrase_in_one_document() {
        let corpus = scenario();

        let cursor = corpus.find("the cat").unwrap().unwrap();
        assert_eq!(cursor.hits().collect::<Vec<_>>(), vec![("A", Hit::phrase(0, 2))]);

        let cursor = corpus.find("The Dog").unwrap().unwrap();
        assert_eq!(cursor.hits().collect::<Vec<_>>(), vec![("B", Hit::phrase(0, 2))]);

        assert!(corpus.find("cat dog").unwrap().is_none());
        assert!(corpus.find("the bird").unwrap().is_none());
    }

    #[test]
    fn test_empty_queries_find_nothing() {
        let corpus = scenario();
        assert!(corpus.find("").unwrap().is_none());
        assert!(corpus.find("   ").unwrap().is_none());
        assert!(corpus.find("?!").unwrap().is_none());
    }

    #[test]
    fn test_query_uses_corpus_tokenizer() {
        let config = CorpusConfig::builder()
            .tokenizer(TokenizerKind::Whitespace)
            .build()
            .unwrap();
        let mut corpus = Corpus::with_config(config).unwrap();
        corpus.add_text("a", "hello, world").unwrap();

        assert!(corpus.find("hello").unwrap().is_none());
        assert!(corpus.find("hello, world").unwrap().is_some());
    }

    #[test]
    fn test_short_query_splits_like_long_document() {
        let config = CorpusConfig::builder()
            .tokenizer(TokenizerKind::Whitespace)
            .build()
            .unwrap();
        let mut corpus = Corpus::with_config(config).unwrap();
        corpus
            .add_text("a", "foo\x0Bbar padding padding padding words")
            .unwrap();

        let cursor = corpus.find("foo").unwrap().unwrap();
        assert_eq!(cursor.hits().collect::<Vec<_>>(), vec![("a", Hit::word(0))]);

        let cursor = corpus.find("foo\x0Bbar").unwrap().unwrap();
        assert_eq!(cursor.hits().collect::<Vec<_>>(), vec![("a", Hit::phrase(0, 2))]);
    }

    #[test]
    fn test_autocomplete() {
        let corpus = scenario();
        assert_eq!(corpus.autocomplete("ca"), None);
        assert_eq!(corpus.autocomplete("cat"), Some("cat"));
        assert_eq!(corpus.autocomplete("Do"), None);
        assert_eq!(corpus.autocomplete("DOG"), Some("dog"));
        assert_eq!(corpus.autocomplete("xyz"), None);
    }

    #[test]
    fn test_autocomplete_min_prefix_len_from_config() {
        let config = CorpusConfig::builder().min_prefix_len(4).build().unwrap();
        let mut corpus = Corpus::with_config(config).unwrap();
        corpus.add_text("a", "zest").unwrap();

        assert_eq!(corpus.autocomplete("zes"), None);
        assert_eq!(corpus.autocomplete("zest"), Some("zest"));

        let config = CorpusConfig {
            min_prefix_len: 1,
            ..CorpusConfig::default()
        };
        assert!(matches!(
            Corpus::with_config(config),
            Err(DocSearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_cursor_is_query_local() {
        let corpus = scenario();
        let mut first = corpus.find("sat").unwrap().unwrap();
        first.get_content();
        first.get_content_length();
        first.next_hit();

        let second = corpus.find("sat").unwrap().unwrap();
        assert_eq!(second.state(0), Some(VisitState::Created));
        assert_eq!(second.remaining_hits(), 2);
    }

    #[test]
    fn test_stats() {
        let corpus = scenario();
        assert_eq!(
            corpus.stats(),
            CorpusStats {
                documents: 2,
                total_tokens: 6,
                unique_terms: 4,
                trie_words: 4,
            }
        );
    }

    #[test]
    fn test_with_config_validates() {
        let config = CorpusConfig {
            num_buckets: 0,
            ..CorpusConfig::default()
        };
        assert!(matches!(
            Corpus::with_config(config),
            Err(DocSearchError::InvalidConfig(_))
        ));
    }
}
