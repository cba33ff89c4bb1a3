//! Multi-word (phrase) queries.
//!
//! A phrase matches where its words occur at consecutive positions in one
//! document. The hit list of the first word is narrowed word by word with
//! [`align`], keeping only the positions the next word continues.

use std::borrow::Cow;
use std::cmp::Ordering;

use ahash::AHashSet;
use log::trace;

use crate::error::{DocSearchError, Result};
use crate::index::document::Document;
use crate::query::cursor::{ResultCursor, Stage};
use crate::query::term::find_word;
use crate::query::Hit;
use crate::util::ascii::fold_case;

/// Find every occurrence of the phrase `words` across `documents`.
///
/// One word is the same as [`find_word`]. For more, each returned hit is a
/// phrase hit at the position of the first word whose `len` is the number
/// of words in the phrase. Documents without a match are left out of the
/// cursor; `Ok(None)` means no document matched.
pub fn find_phrase<'a, S: AsRef<str>>(
    documents: &'a [Document],
    words: &[S],
) -> Result<Option<ResultCursor<'a>>> {
    match words {
        [] => return Ok(None),
        [word] => return find_word(documents, word.as_ref()),
        _ => {}
    }

    let folded: Vec<String> = words.iter().map(|w| fold_case(w.as_ref())).collect();
    if !contains_all(documents, &folded) {
        trace!("phrase {folded:?}: some word occurs in no document");
        return Ok(None);
    }

    let phrase_len = folded.len();
    let mut stages = Vec::new();

    for document in documents {
        let Some(hits) = phrase_hits(document, &folded, phrase_len) else {
            continue;
        };
        if let Some(stage) = Stage::new(document, Cow::Owned(hits)) {
            stages
                .try_reserve(1)
                .map_err(|e| DocSearchError::allocation("result cursor", e))?;
            stages.push(stage);
        }
    }

    trace!("phrase {folded:?} found in {} document(s)", stages.len());
    Ok(ResultCursor::from_stages(stages))
}

/// Phrase hits for one document, or `None` when a word is missing from it.
fn phrase_hits(document: &Document, words: &[String], phrase_len: usize) -> Option<Vec<Hit>> {
    let (first, rest) = words.split_first()?;
    let mut main = document.hits(first)?.to_vec();

    for (offset, word) in rest.iter().enumerate() {
        let sub = document.hits(word)?;
        main = align(&main, sub, offset + 1, phrase_len);
        if main.is_empty() {
            break;
        }
    }

    Some(main)
}

/// Whether every word occurs in at least one of `documents`.
///
/// Duplicate words are checked once. Words are matched case-insensitively.
pub fn contains_all<S: AsRef<str>>(documents: &[Document], words: &[S]) -> bool {
    let distinct: AHashSet<String> = words.iter().map(|w| fold_case(w.as_ref())).collect();
    distinct
        .iter()
        .all(|word| documents.iter().any(|document| document.contains(word)))
}

/// Keep the hits of `main` that `sub` continues at distance `offset`.
///
/// Both lists must be strictly ascending by location. A hit `m` of `main`
/// survives when `sub` holds a hit at `m.location + offset`; it is emitted as
/// a phrase hit of `phrase_len` words at `m.location`. Each list is walked
/// once: a `sub` hit that lies ahead of the current `main` hit is held and
/// compared again against the next one.
pub fn align(main: &[Hit], sub: &[Hit], offset: usize, phrase_len: usize) -> Vec<Hit> {
    let mut aligned = Vec::new();
    let mut sub = sub.iter().peekable();

    for m in main {
        let target = m.location + offset;
        while let Some(s) = sub.peek() {
            match s.location.cmp(&target) {
                Ordering::Less => {
                    sub.next();
                }
                Ordering::Greater => break,
                Ordering::Equal => {
                    aligned.push(Hit::phrase(m.location, phrase_len));
                    sub.next();
                    break;
                }
            }
        }
    }

    aligned
}
