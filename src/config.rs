//! Corpus configuration.
//!
//! A [`CorpusConfig`] fixes, for the lifetime of a corpus, the word map
//! bucket count, the shortest prefix autocomplete will answer for, and the
//! tokenizer shared by ingestion and query splitting.
//!
//! # Example
//!
//! ```
//! use docsearch::analysis::TokenizerKind;
//! use docsearch::config::CorpusConfig;
//!
//! let config = CorpusConfig::builder()
//!     .num_buckets(1024)
//!     .tokenizer(TokenizerKind::Whitespace)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.num_buckets, 1024);
//! assert_eq!(config.min_prefix_len, 3);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::TokenizerKind;
use crate::error::{DocSearchError, Result};
use crate::index::trie::DEFAULT_MIN_PREFIX_LEN;
use crate::index::word_map::DEFAULT_NUM_BUCKETS;

/// Settings for a [`Corpus`](crate::index::corpus::Corpus).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Buckets in every document's word map. Never resized.
    pub num_buckets: usize,
    /// Shortest prefix autocomplete answers for.
    pub min_prefix_len: usize,
    /// Tokenizer used for both documents and queries.
    pub tokenizer: TokenizerKind,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        CorpusConfig {
            num_buckets: DEFAULT_NUM_BUCKETS,
            min_prefix_len: DEFAULT_MIN_PREFIX_LEN,
            tokenizer: TokenizerKind::default(),
        }
    }
}

impl CorpusConfig {
    /// Create a new builder for CorpusConfig.
    pub fn builder() -> CorpusConfigBuilder {
        CorpusConfigBuilder::new()
    }

    /// Parse a JSON configuration. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CorpusConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    /// Check that every setting is usable.
    pub fn validate(&self) -> Result<()> {
        if self.num_buckets == 0 {
            return Err(DocSearchError::invalid_config(
                "num_buckets must be greater than zero",
            ));
        }
        if self.min_prefix_len < DEFAULT_MIN_PREFIX_LEN {
            return Err(DocSearchError::invalid_config(format!(
                "min_prefix_len must be at least {DEFAULT_MIN_PREFIX_LEN}"
            )));
        }
        Ok(())
    }
}

/// Builder for CorpusConfig.
///
/// Unset fields take the [`CorpusConfig::default`] values.
#[derive(Debug, Default)]
pub struct CorpusConfigBuilder {
    num_buckets: Option<usize>,
    min_prefix_len: Option<usize>,
    tokenizer: Option<TokenizerKind>,
}

impl CorpusConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the word map bucket count.
    ///
    /// Default: 10,000
    pub fn num_buckets(mut self, num_buckets: usize) -> Self {
        self.num_buckets = Some(num_buckets);
        self
    }

    /// Set the shortest prefix autocomplete answers for.
    ///
    /// Must be at least 3. Default: 3
    pub fn min_prefix_len(mut self, min_prefix_len: usize) -> Self {
        self.min_prefix_len = Some(min_prefix_len);
        self
    }

    /// Set the tokenizer.
    pub fn tokenizer(mut self, tokenizer: TokenizerKind) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<CorpusConfig> {
        let defaults = CorpusConfig::default();
        let config = CorpusConfig {
            num_buckets: self.num_buckets.unwrap_or(defaults.num_buckets),
            min_prefix_len: self.min_prefix_len.unwrap_or(defaults.min_prefix_len),
            tokenizer: self.tokenizer.unwrap_or(defaults.tokenizer),
        };
        config.validate()?;
        Ok(config)
    }
}
