//! ASCII helpers shared by the word map, the trie and the tokenizers.
//!
//! Case folding in docsearch is ASCII-only: `A..=Z` map to `a..=z` and every
//! other byte is left untouched. Hashing, key comparison and trie indexing all
//! go through the functions in this module so they agree on what "the same
//! word" means.

/// Number of letters in the trie alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// Fold a word to its case-insensitive key form.
///
/// ASCII bytes never occur inside a multi-byte UTF-8 sequence, so folding
/// byte-wise keeps non-ASCII text intact.
///
/// # Examples
///
/// ```
/// use docsearch::util::ascii::fold_case;
///
/// assert_eq!(fold_case("The"), "the");
/// assert_eq!(fold_case("Ærø"), "Ærø");
/// ```
pub fn fold_case(input: &str) -> String {
    input.to_ascii_lowercase()
}

/// Case-insensitive comparison consistent with [`fold_case`].
#[inline]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Map a character to its slot in a 26-ary trie node.
///
/// Returns `None` for anything outside `a..=z` / `A..=Z`.
#[inline]
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_lowercase() as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Whether every character of `word` is an ASCII letter.
///
/// The empty string is not considered a word.
pub fn is_alphabetic_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Whether `byte` is an ASCII character that [`char::is_whitespace`] accepts.
///
/// Unlike [`u8::is_ascii_whitespace`] this includes vertical tab, so byte scans
/// split exactly where a `char` scan would.
#[inline]
pub fn is_space(byte: u8) -> bool {
    byte.is_ascii() && char::from(byte).is_whitespace()
}

/// Find the first whitespace byte (see [`is_space`]), processing 8 bytes at a time.
pub fn find_whitespace(input: &[u8]) -> Option<usize> {
    if input.len() < 8 {
        return input.iter().position(|&b| is_space(b));
    }

    let mut chunks = input.chunks_exact(8);
    let mut chunk_idx = 0;

    for chunk in &mut chunks {
        if let Some(byte_idx) = chunk.iter().position(|&b| is_space(b)) {
            return Some(chunk_idx * 8 + byte_idx);
        }
        chunk_idx += 1;
    }

    let base_offset = chunk_idx * 8;
    chunks
        .remainder()
        .iter()
        .position(|&b| is_space(b))
        .map(|pos| base_offset + pos)
}
