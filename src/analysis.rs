//! Text analysis for docsearch.
//!
//! Documents and queries are turned into ordered word sequences here. The
//! two entry points are [`tokenize`], used at ingestion time, and
//! [`split_query`], used to break a multi-word query into its words. Both take
//! the same tokenizer so query segmentation always matches ingestion.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;

pub mod token;
pub mod tokenizer;

/// Which tokenizer a corpus uses, selectable from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    /// [`WhitespaceTokenizer`]
    Whitespace,
    /// [`UnicodeWordTokenizer`]
    #[default]
    UnicodeWord,
}

impl TokenizerKind {
    /// Build the tokenizer this kind names.
    pub fn build(self) -> Arc<dyn Tokenizer> {
        match self {
            TokenizerKind::Whitespace => Arc::new(WhitespaceTokenizer::new()),
            TokenizerKind::UnicodeWord => Arc::new(UnicodeWordTokenizer::new()),
        }
    }
}

impl fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizerKind::Whitespace => write!(f, "whitespace"),
            TokenizerKind::UnicodeWord => write!(f, "unicode_word"),
        }
    }
}

/// Tokenize raw document text into its ordered words, original case preserved.
///
/// # Examples
///
/// ```
/// use docsearch::analysis::tokenize;
/// use docsearch::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
///
/// let words = tokenize(&UnicodeWordTokenizer::new(), "The cat, the hat.").unwrap();
/// assert_eq!(words, vec!["The", "cat", "the", "hat"]);
/// ```
pub fn tokenize(tokenizer: &dyn Tokenizer, text: &str) -> Result<Vec<String>> {
    Ok(tokenizer.tokenize(text)?.map(|token| token.into_text()).collect())
}

/// Split a query into its words.
///
/// Queries go through the same tokenizer as documents, so a query is
/// segmented exactly like the text it is matched against.
pub fn split_query(tokenizer: &dyn Tokenizer, query: &str) -> Result<Vec<String>> {
    tokenize(tokenizer, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizer_kind_build() {
        assert_eq!(TokenizerKind::Whitespace.build().name(), "whitespace");
        assert_eq!(TokenizerKind::UnicodeWord.build().name(), "unicode_word");
        assert_eq!(TokenizerKind::default(), TokenizerKind::UnicodeWord);
    }

    #[test]
    fn test_tokenizer_kind_serde() {
        let json = serde_json::to_string(&TokenizerKind::UnicodeWord).unwrap();
        assert_eq!(json, "\"unicode_word\"");

        let kind: TokenizerKind = serde_json::from_str("\"whitespace\"").unwrap();
        assert_eq!(kind, TokenizerKind::Whitespace);
    }

    #[test]
    fn test_split_query_matches_tokenize() {
        let tokenizer = TokenizerKind::UnicodeWord.build();
        let text = "The quick, brown fox";

        assert_eq!(
            split_query(tokenizer.as_ref(), text).unwrap(),
            tokenize(tokenizer.as_ref(), text).unwrap()
        );
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = TokenizerKind::Whitespace.build();
        assert!(split_query(tokenizer.as_ref(), "   ").unwrap().is_empty());
    }
}
