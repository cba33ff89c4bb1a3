//! Tokenizer implementations.
//!
//! Tokenizers split raw text into an ordered stream of words. The same
//! tokenizer instance is used when documents are ingested and when phrase
//! queries are split into words, so both sides agree on segmentation.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//! - [`unicode_word::UnicodeWordTokenizer`] - Uses Unicode word boundaries
//!
//! # Examples
//!
//! ```
//! use docsearch::analysis::tokenizer::Tokenizer;
//! use docsearch::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a corpus holding a tokenizer can be
/// shared between reader threads.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use docsearch::analysis::token::{Token, TokenStream};
/// use docsearch::analysis::tokenizer::Tokenizer;
/// use docsearch::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .map(str::trim)
///             .filter(|s| !s.is_empty())
///             .enumerate()
///             .map(|(i, s)| Token::new(s, i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    ///
    /// Token positions must be contiguous and start at zero.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod unicode_word;
pub mod whitespace;
