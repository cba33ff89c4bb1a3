//! Indexing: the completion trie, per-document word maps, and the corpus
//! that ties them together.

pub mod corpus;
pub mod document;
pub mod shared;
pub mod trie;
pub mod word_map;

pub use corpus::{Corpus, CorpusStats};
pub use document::Document;
pub use shared::SharedCorpus;
pub use trie::Trie;
pub use word_map::WordMap;
