//! # Wordsieve
//!
//! Probabilistic word-list membership filters with pluggable hash
//! strategies.
//!
//! A Bloom filter answers "was this word inserted?" with no false
//! negatives and a tunable false-positive rate, backed by a fixed-size
//! bit array and several hash-derived bit positions per word. Wordsieve
//! makes the hash derivation the interesting part: the filter is generic
//! over a [`HashStrategy`], chosen at construction and dispatched
//! statically.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - [`BloomFilter`]: the composed filter (insert / lookup / saturation)
//!   - [`BitArray`]: fixed-size bit storage, the only mutable state
//!   - [`CharCodeHash`]: one position per byte; collides on any word with
//!     the same set of distinct bytes (hand-analyzable fixture hash)
//!   - [`CharPairHash`]: big-endian byte pairs; 65536 bits
//!   - [`DigestSliceHash`]: slices a 128-bit digest into `width`-bit
//!     positions; the production strategy with a tunable map size
//!   - [`Digest128`]: injected digest capability ([`Murmur3Digest`] by
//!     default)
//!
//! - **Analytics** (`analytics`): empirical false-positive measurement
//!   over caller-supplied probe words
//!
//! - **Dictionary** (`dictionary`): line-oriented word sources and bulk
//!   loading, the only place I/O happens
//!
//! ## Usage Example
//!
//! ```
//! use wordsieve::{BloomFilter, DigestSliceHash};
//!
//! let strategy = DigestSliceHash::new(16)?;
//! let mut filter = BloomFilter::new(strategy);
//!
//! filter.insert("foo");
//! filter.insert("bazification");
//!
//! assert!(filter.lookup("foo"));
//! assert!(!filter.lookup("notindict"));
//! assert!(filter.saturation() <= 100);
//! # Ok::<(), wordsieve::FilterError>(())
//! ```
//!
//! ## Concurrency
//!
//! Single owner, synchronous. Inserts and lookups are CPU-bound over
//! in-memory state and unconditionally terminate. The filter makes no
//! internal provision for concurrent mutation; "no concurrent insert and
//! lookup" is a caller-level discipline.

pub mod analytics;
pub mod dictionary;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use analytics::{measure_false_positives, FalsePositiveReport};
pub use dictionary::DictionaryLoader;
pub use domain::{
    BitArray, BloomFilter, CharCodeHash, CharPairHash, Digest128, DigestSliceHash, HashStrategy,
    Murmur3Digest, MAX_SLICE_WIDTH,
};
pub use error::FilterError;
