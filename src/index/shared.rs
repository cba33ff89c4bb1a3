//! A corpus shared between threads.
//!
//! Ingestion takes a write lock and is serialized. Queries run under a read
//! lock, so any number of threads can search at once.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::error::Result;
use crate::index::corpus::Corpus;

/// A cloneable handle to a [`Corpus`] behind a read-write lock.
///
/// # Example
///
/// ```
/// use docsearch::index::corpus::Corpus;
/// use docsearch::index::shared::SharedCorpus;
///
/// let shared = SharedCorpus::new(Corpus::new());
/// shared.add_text("a", "the cat sat").unwrap();
///
/// let corpus = shared.read();
/// assert!(corpus.find("cat").unwrap().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct SharedCorpus {
    inner: Arc<RwLock<Corpus>>,
}

impl SharedCorpus {
    pub fn new(corpus: Corpus) -> Self {
        SharedCorpus {
            inner: Arc::new(RwLock::new(corpus)),
        }
    }

    /// Add a pre-tokenized document under the write lock.
    pub fn add_document<N: Into<String>>(&self, name: N, words: Vec<String>) -> Result<usize> {
        self.inner.write().add_document(name, words)
    }

    /// Tokenize and add a document under the write lock.
    pub fn add_text<N: Into<String>>(&self, name: N, text: &str) -> Result<usize> {
        self.inner.write().add_text(name, text)
    }

    /// Lock the corpus for reading. Cursors borrow from the guard.
    pub fn read(&self) -> RwLockReadGuard<'_, Corpus> {
        self.inner.read()
    }

    /// Autocomplete without holding on to the lock.
    pub fn autocomplete(&self, prefix: &str) -> Option<String> {
        self.inner.read().autocomplete(prefix).map(str::to_string)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Take the corpus back if this is the last handle.
    pub fn into_inner(self) -> std::result::Result<Corpus, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| SharedCorpus { inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_readers() {
        let shared = SharedCorpus::new(Corpus::new());
        shared.add_text("a", "the cat sat on the mat").unwrap();
        shared.add_text("b", "the cat ran").unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let corpus = shared.read();
                    let cursor = corpus.find("the cat").unwrap().unwrap();
                    cursor.remaining_hits()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2);
        }
        assert_eq!(shared.autocomplete("mat"), Some("mat".to_string()));
    }

    #[test]
    fn test_into_inner() {
        let shared = SharedCorpus::new(Corpus::new());
        shared.add_text("a", "hello").unwrap();

        let other = shared.clone();
        let shared = shared.into_inner().unwrap_err();
        drop(other);

        let corpus = shared.into_inner().unwrap();
        assert_eq!(corpus.len(), 1);
    }
}
