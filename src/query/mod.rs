//! Query evaluation over a corpus.
//!
//! - [`term`] answers single-word queries.
//! - [`phrase`] answers multi-word queries by aligning per-word positions.
//! - [`cursor`] is the lazy result view both of them return.

pub mod cursor;
pub mod phrase;
pub mod term;

use serde::{Deserialize, Serialize};

pub use self::cursor::{ResultCursor, VisitState};
pub use self::phrase::{align, contains_all, find_phrase};
pub use self::term::find_word;

/// One occurrence of a word or phrase in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hit {
    /// Token position of the occurrence (the first word, for phrases).
    pub location: usize,
    /// 0 for a single-word hit, otherwise the number of words in the phrase.
    pub len: usize,
}

impl Hit {
    /// A single-word hit at `location`.
    pub fn word(location: usize) -> Self {
        Hit { location, len: 0 }
    }

    /// A phrase hit of `len` words starting at `location`.
    pub fn phrase(location: usize, len: usize) -> Self {
        Hit { location, len }
    }

    /// Number of tokens covered by this hit.
    pub fn span(&self) -> usize {
        self.len.max(1)
    }
}
