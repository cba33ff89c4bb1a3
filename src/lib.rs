//! # docsearch
//!
//! A small in-memory document search engine.
//!
//! ## Features
//!
//! - Case-insensitive single-word lookup over per-document word maps
//! - Phrase queries matched by position alignment
//! - Prefix autocomplete from a trie shared by the whole corpus
//! - Lazy result cursors that hand out content, length and hits on demand
//!
//! ## Example
//!
//! ```
//! use docsearch::prelude::*;
//!
//! let mut corpus = Corpus::new();
//! corpus.add_text("a", "the cat sat").unwrap();
//! corpus.add_text("b", "the dog sat").unwrap();
//!
//! let mut cursor = corpus.find("sat").unwrap().unwrap();
//! let mut found = Vec::new();
//! while cursor.get_content().is_some() {
//!     cursor.get_content_length();
//!     while let Some(hit) = cursor.next_hit() {
//!         found.push(hit.location);
//!     }
//! }
//! assert_eq!(found, vec![2, 2]);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod query;
pub mod util;

pub mod prelude {
    pub use crate::analysis::TokenizerKind;
    pub use crate::config::CorpusConfig;
    pub use crate::error::{DocSearchError, Result};
    pub use crate::index::{Corpus, CorpusStats, SharedCorpus};
    pub use crate::query::{Hit, ResultCursor, VisitState};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
