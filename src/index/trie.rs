//! Radix-26 prefix tree used for word completion.
//!
//! One [`Trie`] is shared by every document of a corpus. Each node has one
//! child slot per lowercase ASCII letter, an optional terminal key (the word
//! that ends at that node) and an optional "remaining characters" annotation.
//!
//! The annotation is last-writer-wins: every insertion overwrites it on each
//! node it passes through with the number of characters of *that* word still
//! to come, and clears it on the node where the word ends. Completion relies
//! on these values as a hint for the shortest continuation, so the suggestion
//! returned for a prefix depends on insertion order. That behavior is
//! observable through [`Trie::find_completion`] and is kept as is.
//!
//! # Examples
//!
//! ```
//! use docsearch::index::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("cargo").unwrap();
//! trie.insert("carpet").unwrap();
//!
//! assert_eq!(trie.find_completion("car"), Some("cargo"));
//! assert_eq!(trie.find_completion("ca"), None);
//! assert!(trie.insert("car2").is_err());
//! ```

use crate::error::{DocSearchError, Result};
use crate::util::ascii::{ALPHABET_SIZE, is_alphabetic_word, letter_index};

/// Default minimum prefix length for completion lookups.
pub const DEFAULT_MIN_PREFIX_LEN: usize = 3;

/// Value standing in for an absent child when picking the smallest annotation.
const ABSENT: usize = usize::MAX;

#[derive(Debug, Default)]
struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    key: Option<String>,
    remaining: Option<usize>,
}

impl TrieNode {
    fn with_remaining(remaining: usize) -> Self {
        TrieNode {
            remaining: Some(remaining),
            ..TrieNode::default()
        }
    }

    fn child(&self, index: usize) -> Option<&TrieNode> {
        self.children.get(index)?.as_deref()
    }

    fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }
}

/// A 26-ary prefix tree over case-folded ASCII words.
#[derive(Debug)]
pub struct Trie {
    root: TrieNode,
    words: usize,
    min_prefix_len: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Create an empty trie with the default minimum completion prefix.
    pub fn new() -> Self {
        Self::with_min_prefix_len(DEFAULT_MIN_PREFIX_LEN)
    }

    /// Create an empty trie that refuses completions for prefixes shorter
    /// than `min_prefix_len` bytes.
    ///
    /// Values below [`DEFAULT_MIN_PREFIX_LEN`] are raised to it: prefixes of
    /// one or two letters never complete.
    pub fn with_min_prefix_len(min_prefix_len: usize) -> Self {
        Trie {
            root: TrieNode::default(),
            words: 0,
            min_prefix_len: min_prefix_len.max(DEFAULT_MIN_PREFIX_LEN),
        }
    }

    /// Insert a word.
    ///
    /// Words containing anything other than ASCII letters are rejected with
    /// [`DocSearchError::InvalidKey`] and leave the trie untouched. The word is
    /// stored as given at its terminal node; the path is case-insensitive.
    pub fn insert(&mut self, word: &str) -> Result<()> {
        if !is_alphabetic_word(word) {
            return Err(DocSearchError::invalid_key(word));
        }

        let len = word.len();
        let mut node = &mut self.root;

        for (depth, c) in word.chars().enumerate() {
            let index = letter_index(c).ok_or_else(|| DocSearchError::invalid_key(word))?;
            let remaining = len - depth;

            node.remaining = Some(remaining);
            node = node.children[index]
                .get_or_insert_with(|| Box::new(TrieNode::with_remaining(remaining)))
                .as_mut();
        }

        if node.key.is_none() {
            self.words += 1;
        }
        node.key = Some(word.to_string());
        node.remaining = None;

        Ok(())
    }

    /// Whether `word` was inserted (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.find_node(word).is_some_and(|node| node.key.is_some())
    }

    /// Number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Whether no word has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// The configured minimum prefix length.
    pub fn min_prefix_len(&self) -> usize {
        self.min_prefix_len
    }

    /// Suggest a completion for `prefix`.
    ///
    /// Returns `None` when the prefix is shorter than the minimum length or no
    /// path exists for it. Otherwise:
    ///
    /// 1. If any child of the prefix node ends a word, the first such child in
    ///    alphabetical order wins.
    /// 2. If the prefix node is itself a finished word with nothing annotated
    ///    below it, that word is returned.
    /// 3. Otherwise the search descends into the child with the smallest
    ///    remaining-characters annotation and scans forward through child
    ///    slots, stepping into the first present child until one ends a word.
    ///
    /// Step 3 never backtracks, so this is a heuristic, not a guaranteed
    /// shortest completion.
    pub fn find_completion(&self, prefix: &str) -> Option<&str> {
        if prefix.len() < self.min_prefix_len {
            return None;
        }

        let current = self.find_node(prefix)?;

        let mut remaining = [ABSENT; ALPHABET_SIZE];
        for (index, child) in current.children.iter().enumerate() {
            if let Some(child) = child {
                if let Some(key) = &child.key {
                    return Some(key.as_str());
                }
                remaining[index] = child.remaining.unwrap_or(ABSENT);
            }
        }

        if current.remaining.is_none()
            && let Some(key) = &current.key
        {
            return Some(key.as_str());
        }

        let chosen = current.child(min_index(&remaining))?;
        Self::scan_forward(chosen)
    }

    /// Walk child slots left to right from `node`, descending into the first
    /// present child found after slot 0 and restarting the scan there.
    ///
    /// A node whose slot 0 is occupied ends the scan without a result, as does
    /// running off the end of the alphabet.
    fn scan_forward(mut node: &TrieNode) -> Option<&str> {
        let mut index = 0;

        while node.children[index].is_none() {
            index += 1;
            if index == ALPHABET_SIZE {
                return None;
            }

            if let Some(child) = node.child(index) {
                if let Some(key) = &child.key {
                    return Some(key.as_str());
                }
                node = child;
                index = 0;
            }
        }

        None
    }

    fn find_node(&self, word: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in word.chars() {
            node = node.child(letter_index(c)?)?;
        }
        Some(node)
    }

    /// Whether the node reached by `prefix` has no children.
    pub fn is_leaf(&self, prefix: &str) -> bool {
        self.find_node(prefix).is_some_and(TrieNode::is_leaf)
    }
}

/// Index of the smallest value; ties go to the lowest index.
fn min_index(values: &[usize; ALPHABET_SIZE]) -> usize {
    let mut min = 0;
    for (index, value) in values.iter().enumerate() {
        if values[min] > *value {
            min = index;
        }
    }
    min
}
