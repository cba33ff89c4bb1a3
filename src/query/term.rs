//! Single-word queries.

use std::borrow::Cow;

use log::trace;

use crate::error::{DocSearchError, Result};
use crate::index::document::Document;
use crate::query::cursor::{ResultCursor, Stage};
use crate::util::ascii::fold_case;

/// Find every occurrence of `word` across `documents`.
///
/// The match is case-insensitive. The cursor has one stage per document that
/// contains the word, in document order, each borrowing that document's hit
/// list. Returns `Ok(None)` when no document contains it.
pub fn find_word<'a>(documents: &'a [Document], word: &str) -> Result<Option<ResultCursor<'a>>> {
    let folded = fold_case(word);
    let mut stages = Vec::new();

    for document in documents {
        let Some(hits) = document.hits(&folded) else {
            continue;
        };
        if let Some(stage) = Stage::new(document, Cow::Borrowed(hits)) {
            stages
                .try_reserve(1)
                .map_err(|e| DocSearchError::allocation("result cursor", e))?;
            stages.push(stage);
        }
    }

    trace!("word {folded:?} found in {} document(s)", stages.len());
    Ok(ResultCursor::from_stages(stages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::trie::Trie;
    use crate::query::Hit;

    fn corpus(texts: &[&str]) -> Vec<Document> {
        let mut trie = Trie::new();
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let words = text.split_whitespace().map(str::to_string).collect();
                Document::build(format!("doc{i}"), words, 32, &mut trie)
                    .unwrap()
                    .0
            })
            .collect()
    }

    #[test]
    fn test_find_word_chains_documents_in_order() {
        let docs = corpus(&["the cat sat", "no match here", "The dog sat on the mat"]);
        let cursor = find_word(&docs, "THE").unwrap().unwrap();

        assert_eq!(cursor.documents().collect::<Vec<_>>(), vec!["doc0", "doc2"]);
        let hits: Vec<_> = cursor.hits().collect();
        assert_eq!(
            hits,
            vec![
                ("doc0", Hit::word(0)),
                ("doc2", Hit::word(0)),
                ("doc2", Hit::word(4)),
            ]
        );
    }

    #[test]
    fn test_find_word_missing() {
        let docs = corpus(&["the cat sat"]);
        assert!(find_word(&docs, "dog").unwrap().is_none());
        assert!(find_word(&[], "dog").unwrap().is_none());
    }
}
