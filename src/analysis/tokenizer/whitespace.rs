//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;
use crate::util::ascii;

/// A tokenizer that splits text on whitespace.
///
/// Punctuation stays attached to the word it touches, so `"cat."` and `"cat"`
/// are different words under this tokenizer.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        if text.is_ascii() && text.len() >= 32 {
            self.tokenize_ascii(text)
        } else {
            self.tokenize_fallback(text)
        }
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

impl WhitespaceTokenizer {
    /// Chunked scan for ASCII text.
    fn tokenize_ascii(&self, text: &str) -> Result<TokenStream> {
        let bytes = text.as_bytes();
        let mut tokens = Vec::new();
        let mut position = 0;
        let mut start = 0;

        while start < bytes.len() && ascii::is_space(bytes[start]) {
            start += 1;
        }

        while start < bytes.len() {
            let word_end = match ascii::find_whitespace(&bytes[start..]) {
                Some(offset) => start + offset,
                None => bytes.len(),
            };

            if word_end > start {
                tokens.push(Token::with_offsets(
                    &text[start..word_end],
                    position,
                    start,
                    word_end,
                ));
                position += 1;
            }

            start = word_end;
            while start < bytes.len() && ascii::is_space(bytes[start]) {
                start += 1;
            }
        }

        Ok(Box::new(tokens.into_iter()))
    }

    /// Fallback for non-ASCII or short text.
    fn tokenize_fallback(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut word_start: Option<usize> = None;

        for (offset, c) in text.char_indices() {
            match (c.is_whitespace(), word_start) {
                (true, Some(start)) => {
                    tokens.push(Token::with_offsets(
                        &text[start..offset],
                        tokens.len(),
                        start,
                        offset,
                    ));
                    word_start = None;
                }
                (false, None) => word_start = Some(offset),
                _ => {}
            }
        }

        if let Some(start) = word_start {
            tokens.push(Token::with_offsets(
                &text[start..],
                tokens.len(),
                start,
                text.len(),
            ));
        }

        Ok(Box::new(tokens.into_iter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello  world\ttest").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
        assert_eq!(tokens[2].position, 2);
        assert_eq!(tokens[1].start_offset, 7);
    }

    #[test]
    fn test_long_ascii_matches_fallback() {
        let tokenizer = WhitespaceTokenizer::new();
        let text = "  the quick brown fox jumps over the lazy dog  ";
        let fast: Vec<Token> = tokenizer.tokenize_ascii(text).unwrap().collect();
        let slow: Vec<Token> = tokenizer.tokenize_fallback(text).unwrap().collect();

        assert_eq!(fast, slow);
        assert_eq!(fast.len(), 9);
        assert_eq!(fast[8].text, "dog");
    }

    #[test]
    fn test_vertical_tab_splits_regardless_of_length() {
        let tokenizer = WhitespaceTokenizer::new();
        let short: Vec<String> = tokenizer
            .tokenize("foo\x0Bbar")
            .unwrap()
            .map(Token::into_text)
            .collect();
        assert_eq!(short, vec!["foo", "bar"]);

        let text = "foo\x0Bbar padding padding padding words";
        let fast: Vec<Token> = tokenizer.tokenize_ascii(text).unwrap().collect();
        let slow: Vec<Token> = tokenizer.tokenize_fallback(text).unwrap().collect();
        assert_eq!(fast, slow);

        let long: Vec<String> = tokenizer.tokenize(text).unwrap().map(Token::into_text).collect();
        assert_eq!(long[..2], ["foo", "bar"]);
        assert_eq!(long.len(), 6);
    }

    #[test]
    fn test_punctuation_kept() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("Hi, there.").unwrap().collect();

        assert_eq!(tokens[0].text, "Hi,");
        assert_eq!(tokens[1].text, "there.");
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
