//! Lazy, stateful view over query results.
//!
//! A [`ResultCursor`] holds one stage per matching document, in document
//! order. Each stage moves through [`VisitState`] as the caller asks for the
//! document's content, then its length, then its hits one at a time:
//!
//! ```text
//! Created --get_content--> ContentRead --get_content_length--> LengthRead --next_hit*--> HitsExhausted
//! ```
//!
//! Each accessor acts on the first stage in the state it expects and passes
//! over the others, so a caller can interleave the three per document
//! without any result being materialized ahead of time.

use std::borrow::Cow;

use crate::index::document::Document;
use crate::query::Hit;

/// Progress of one stage through the accessor protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VisitState {
    Created,
    ContentRead,
    LengthRead,
    HitsExhausted,
}

/// The hits found in one document.
#[derive(Debug, Clone)]
pub(crate) struct Stage<'a> {
    document: &'a Document,
    hits: Cow<'a, [Hit]>,
    next: usize,
    state: VisitState,
}

impl<'a> Stage<'a> {
    /// A stage over `hits`, or `None` when there are none to report.
    pub(crate) fn new(document: &'a Document, hits: Cow<'a, [Hit]>) -> Option<Self> {
        if hits.is_empty() {
            return None;
        }
        Some(Stage {
            document,
            hits,
            next: 0,
            state: VisitState::Created,
        })
    }

    fn remaining(&self) -> usize {
        self.hits.len() - self.next
    }
}

/// The answer to one query: a chain of per-document stages.
///
/// A cursor is never empty; queries with no matches return `None` instead.
/// It borrows the documents it reports on and never mutates them.
#[derive(Debug, Clone)]
pub struct ResultCursor<'a> {
    stages: Vec<Stage<'a>>,
}

impl<'a> ResultCursor<'a> {
    pub(crate) fn from_stages(stages: Vec<Stage<'a>>) -> Option<Self> {
        if stages.is_empty() {
            None
        } else {
            Some(ResultCursor { stages })
        }
    }

    /// Token array of the next document whose content has not been read.
    ///
    /// Returns `None` once every stage is past `Created`.
    pub fn get_content(&mut self) -> Option<&'a [String]> {
        let stage = self
            .stages
            .iter_mut()
            .find(|stage| stage.state == VisitState::Created)?;
        stage.state = VisitState::ContentRead;
        Some(stage.document.tokens())
    }

    /// Size of the first document whose content was read but whose length
    /// was not.
    pub fn get_content_length(&mut self) -> Option<usize> {
        let stage = self
            .stages
            .iter_mut()
            .find(|stage| stage.state == VisitState::ContentRead)?;
        stage.state = VisitState::LengthRead;
        Some(stage.document.size())
    }

    /// Next hit from the first stage in `LengthRead`.
    ///
    /// A stage that runs out of hits moves to `HitsExhausted` and the search
    /// continues with the stages after it. Stages that have not reached
    /// `LengthRead` yet are passed over.
    pub fn next_hit(&mut self) -> Option<Hit> {
        for stage in &mut self.stages {
            if stage.state != VisitState::LengthRead {
                continue;
            }
            if let Some(hit) = stage.hits.get(stage.next).copied() {
                stage.next += 1;
                return Some(hit);
            }
            stage.state = VisitState::HitsExhausted;
        }
        None
    }

    /// Name of the document whose hits `next_hit` would draw from, if any.
    pub fn current_document(&self) -> Option<&'a str> {
        self.stages
            .iter()
            .find(|stage| stage.state == VisitState::LengthRead && stage.remaining() > 0)
            .map(|stage| stage.document.name())
    }

    /// Names of the matching documents, in chain order.
    pub fn documents(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.stages.iter().map(|stage| stage.document.name())
    }

    /// Number of matching documents.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always false for a cursor returned by a query.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Hits not yet returned by `next_hit`, across all stages.
    pub fn remaining_hits(&self) -> usize {
        self.stages
            .iter()
            .filter(|stage| stage.state != VisitState::HitsExhausted)
            .map(Stage::remaining)
            .sum()
    }

    /// State of the stage at `index`.
    pub fn state(&self, index: usize) -> Option<VisitState> {
        self.stages.get(index).map(|stage| stage.state)
    }

    /// Every hit of every stage, in chain order, without advancing the cursor.
    pub fn hits(&self) -> impl Iterator<Item = (&'a str, Hit)> + '_ {
        self.stages.iter().flat_map(|stage| {
            let name = stage.document.name();
            stage.hits.iter().map(move |hit| (name, *hit))
        })
    }
}
