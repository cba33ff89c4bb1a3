//! Per-document word map.
//!
//! A fixed-size chained hash table from case-folded words to the ordered list
//! of positions where the word occurs. Keys are hashed with djb2 over their
//! ASCII-lowercased bytes and compared case-insensitively, so `"The"` and
//! `"the"` land on the same entry. The bucket array is allocated once and never
//! resized; there is no removal.

use crate::error::{DocSearchError, Result};
use crate::query::Hit;
use crate::util::ascii::{eq_ignore_case, fold_case};

/// Default number of buckets per word map.
pub const DEFAULT_NUM_BUCKETS: usize = 10_000;

/// djb2 over ASCII-lowercased bytes: `hash = hash * 33 + lower(c)`, seeded at 5381.
///
/// # Examples
///
/// ```
/// use docsearch::index::word_map::djb2;
///
/// assert_eq!(djb2(""), 5381);
/// assert_eq!(djb2("Cat"), djb2("cAT"));
/// ```
pub fn djb2(key: &str) -> u64 {
    key.bytes().fold(5381u64, |hash, byte| {
        hash.wrapping_mul(33)
            .wrapping_add(u64::from(byte.to_ascii_lowercase()))
    })
}

#[derive(Debug, Clone)]
struct Entry {
    key: String,
    hits: Vec<Hit>,
}

/// Case-insensitive map from word to its hits within one document.
#[derive(Debug, Clone)]
pub struct WordMap {
    buckets: Vec<Vec<Entry>>,
    len: usize,
}

impl WordMap {
    /// Create a map with `num_buckets` buckets.
    ///
    /// Fails with [`DocSearchError::InvalidConfig`] for zero buckets and with
    /// [`DocSearchError::ResourceExhausted`] if the bucket array cannot be
    /// allocated.
    pub fn new(num_buckets: usize) -> Result<Self> {
        if num_buckets == 0 {
            return Err(DocSearchError::invalid_config(
                "word map needs at least one bucket",
            ));
        }

        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(num_buckets)
            .map_err(|e| DocSearchError::allocation("word map buckets", e))?;
        buckets.resize_with(num_buckets, Vec::new);

        Ok(WordMap { buckets, len: 0 })
    }

    fn bucket_of(&self, key: &str) -> usize {
        (djb2(key) % self.buckets.len() as u64) as usize
    }

    fn entry(&self, key: &str) -> Option<&Entry> {
        self.buckets[self.bucket_of(key)]
            .iter()
            .find(|entry| eq_ignore_case(&entry.key, key))
    }

    /// Append `hit` to the hits of `key`, creating the entry on first use.
    ///
    /// Hits keep insertion order, so inserting positions left to right keeps
    /// every list ascending.
    pub fn put(&mut self, key: &str, hit: Hit) {
        let bucket = self.bucket_of(key);
        let chain = &mut self.buckets[bucket];

        match chain.iter_mut().find(|entry| eq_ignore_case(&entry.key, key)) {
            Some(entry) => entry.hits.push(hit),
            None => {
                chain.push(Entry {
                    key: fold_case(key),
                    hits: vec![hit],
                });
                self.len += 1;
            }
        }
    }

    /// The hits recorded for `key`, in insertion order.
    pub fn get(&self, key: &str) -> Option<&[Hit]> {
        self.entry(key).map(|entry| entry.hits.as_slice())
    }

    /// Whether `key` has been put at least once.
    pub fn has(&self, key: &str) -> bool {
        self.entry(key).is_some()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the map holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The fixed bucket count.
    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// All keys in bucket order (folded form).
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(|entry| entry.key.as_str()))
    }
}
