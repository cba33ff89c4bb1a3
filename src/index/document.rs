//! A single indexed document.

use log::debug;

use crate::error::{DocSearchError, Result};
use crate::index::trie::Trie;
use crate::index::word_map::WordMap;
use crate::query::Hit;
use crate::util::ascii::fold_case;

/// One ingested document: its words in order and the word map over them.
///
/// `tokens()[i]` is the original-case word at position `i`.
#[derive(Debug, Clone)]
pub struct Document {
    name: String,
    tokens: Vec<String>,
    word_map: WordMap,
}

impl Document {
    /// Index `words` as a new document.
    ///
    /// Each word is stored in the token array and recorded in the word map
    /// under its folded form. The first time a folded word appears in this
    /// document it is also offered to the shared `trie`; words the trie
    /// rejects are still searchable, they just never show up as completions.
    ///
    /// Returns the document and how many words were new to the trie. Every
    /// allocation is reserved before the trie is touched, so an error leaves
    /// the trie unchanged.
    pub(crate) fn build(
        name: String,
        words: Vec<String>,
        num_buckets: usize,
        trie: &mut Trie,
    ) -> Result<(Self, usize)> {
        let mut tokens = Vec::new();
        tokens
            .try_reserve_exact(words.len())
            .map_err(|e| DocSearchError::allocation("document tokens", e))?;
        let mut word_map = WordMap::new(num_buckets)?;
        let mut new_words = 0;

        for (position, word) in words.into_iter().enumerate() {
            let folded = fold_case(&word);

            if !word_map.has(&folded) {
                let known = trie.contains(&folded);
                match trie.insert(&folded) {
                    Ok(()) if !known => new_words += 1,
                    Ok(()) => {}
                    Err(e) => debug!("{name}: not offering {word:?} for completion: {e}"),
                }
            }

            word_map.put(&folded, Hit::word(position));
            tokens.push(word);
        }

        Ok((
            Document {
                name,
                tokens,
                word_map,
            },
            new_words,
        ))
    }

    /// The document name given at ingestion.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The document's words in position order, original case.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of words in the document.
    pub fn size(&self) -> usize {
        self.tokens.len()
    }

    /// The document's word map.
    pub fn word_map(&self) -> &WordMap {
        &self.word_map
    }

    /// Ascending positions of `word` (case-insensitive) in this document.
    pub fn hits(&self, word: &str) -> Option<&[Hit]> {
        self.word_map.get(word)
    }

    /// Whether `word` occurs anywhere in this document.
    pub fn contains(&self, word: &str) -> bool {
        self.word_map.has(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_build_records_positions() {
        let mut trie = Trie::new();
        let (doc, new_words) =
            Document::build("a.txt".into(), words("The cat saw the Cat"), 64, &mut trie)
                .unwrap();

        assert_eq!(doc.name(), "a.txt");
        assert_eq!(doc.size(), 5);
        assert_eq!(doc.tokens()[4], "Cat");
        assert_eq!(
            doc.hits("cat").unwrap(),
            &[Hit::word(1), Hit::word(4)]
        );
        assert_eq!(doc.hits("THE").unwrap(), &[Hit::word(0), Hit::word(3)]);
        assert_eq!(new_words, 3);
        assert_eq!(trie.len(), 3);
        assert!(trie.contains("saw"));
    }

    #[test]
    fn test_rejected_trie_words_still_indexed() {
        let mut trie = Trie::new();
        let (doc, new_words) =
            Document::build("b".into(), words("route 66 rocks"), 64, &mut trie).unwrap();

        assert_eq!(doc.hits("66").unwrap(), &[Hit::word(1)]);
        assert_eq!(new_words, 2);
        assert!(!trie.contains("66"));
    }

    #[test]
    fn test_shared_trie_counts_only_new_words() {
        let mut trie = Trie::new();
        Document::build("a".into(), words("the cat sat"), 64, &mut trie).unwrap();
        let (_, new_words) =
            Document::build("b".into(), words("the dog sat"), 64, &mut trie).unwrap();

        assert_eq!(new_words, 1);
        assert_eq!(trie.len(), 4);
    }

    #[test]
    fn test_empty_document() {
        let mut trie = Trie::new();
        let (doc, new_words) = Document::build("empty".into(), Vec::new(), 8, &mut trie).unwrap();

        assert_eq!(doc.size(), 0);
        assert!(doc.word_map().is_empty());
        assert_eq!(new_words, 0);
    }
}
