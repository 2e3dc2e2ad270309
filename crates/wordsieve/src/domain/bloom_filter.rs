//! Core Bloom filter implementation
//!
//! A Bloom filter composes one [`BitArray`] with one hash strategy. The
//! strategy dictates the bit-array size and how words map to bit
//! positions; the filter owns the only mutable state and exposes
//! insert/lookup/saturation.
//!
//! No false negatives: once a word has been inserted, `lookup` returns
//! true for it for the lifetime of the instance. Bits are only ever set,
//! never cleared, so the property is monotonic. False positives are an
//! accepted, quantifiable property, not a failure mode.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::bit_array::BitArray;
use super::strategy::HashStrategy;
use crate::error::FilterError;

/// Probabilistic set-membership structure over a fixed hash strategy.
///
/// The strategy is chosen at construction and fixed for the instance's
/// lifetime; dispatch is static.
///
/// # Examples
///
/// ```
/// use wordsieve::{BloomFilter, CharCodeHash};
///
/// let mut filter = BloomFilter::new(CharCodeHash);
/// filter.insert("foo");
///
/// assert!(filter.lookup("foo"));
/// assert!(!filter.lookup("quux"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BloomFilter<S> {
    /// Bit array sized to the strategy's map size
    bits: BitArray,
    /// Hash strategy, fixed for the instance's lifetime
    strategy: S,
    /// Number of insert calls (observability only; duplicates count)
    words_inserted: usize,
}

impl<S: HashStrategy> BloomFilter<S> {
    /// Create an empty filter driven by `strategy`.
    pub fn new(strategy: S) -> Self {
        let bits = BitArray::new(strategy.map_size());
        Self {
            bits,
            strategy,
            words_inserted: 0,
        }
    }

    /// Insert a word.
    ///
    /// Sets every bit position the strategy produces for the word.
    /// Idempotent at the bit level: inserting the same word twice leaves
    /// the bit array unchanged.
    pub fn insert(&mut self, word: &str) {
        for position in self.strategy.hash_positions(word) {
            self.bits.set(position);
        }
        self.words_inserted += 1;
    }

    /// Test whether a word might have been inserted.
    ///
    /// Returns true iff every bit position the strategy produces for the
    /// word is set. An empty position sequence is vacuously true. A
    /// `false` result is definite; a `true` result may be a false
    /// positive.
    pub fn lookup(&self, word: &str) -> bool {
        self.strategy
            .hash_positions(word)
            .iter()
            .all(|&position| self.bits.test(position))
    }

    /// Insert every word of an in-memory sequence. Returns the count.
    ///
    /// Defined as repeated [`insert`](Self::insert); no batching, no
    /// transactional semantics.
    pub fn insert_all<I, W>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut inserted = 0;
        for word in words {
            self.insert(word.as_ref());
            inserted += 1;
        }
        inserted
    }

    /// Percentage of bits set, truncating: `count_set() * 100 / map_size`.
    ///
    /// Monotonically non-decreasing across inserts. Observability only;
    /// never used for correctness decisions.
    pub fn saturation(&self) -> usize {
        self.bits.count_set() * 100 / self.bits.len()
    }

    /// Number of bits currently set.
    pub fn count_set(&self) -> usize {
        self.bits.count_set()
    }

    /// Filter capacity in bits, as dictated by the strategy.
    pub fn map_size(&self) -> usize {
        self.bits.len()
    }

    /// The strategy driving this filter.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Number of insert calls so far (duplicates included).
    pub fn words_inserted(&self) -> usize {
        self.words_inserted
    }
}

impl<S: HashStrategy + Default> Default for BloomFilter<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: HashStrategy + Serialize + DeserializeOwned> BloomFilter<S> {
    /// Serialize the filter state to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        bincode::serialize(self).unwrap_or_default()
    }

    /// Restore a filter from bytes produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FilterError> {
        bincode::deserialize(bytes).map_err(|e| FilterError::Serialization(e.to_string()))
    }
}
