//! Digest-slicing hash strategy
//!
//! The production-quality strategy. A word is digested to 128 bits and the
//! digest is partitioned into consecutive non-overlapping groups of
//! `width` bits, high-order bits first; each group read as an unsigned
//! integer is one bit position. When 128 is not a multiple of `width` the
//! final group is short and zero-padded on the low end.
//!
//! Under the assumption that the digest behaves as a pseudo-random
//! function of the word, positions are uniformly distributed over
//! `[0, 2^width)`, which is what makes the false-positive rate tunable
//! through `width`.
//!
//! Bias correction: a short trailing group is disproportionately likely to
//! come out zero. When the final produced position is exactly zero it is
//! dropped from the sequence. The rule is on by default and switchable via
//! [`DigestSliceHash::keep_trailing_zero`]; it is a distribution tweak,
//! not a correctness requirement.

use serde::{Deserialize, Serialize};

use super::digest::{Digest128, Murmur3Digest};
use super::strategy::HashStrategy;
use crate::error::FilterError;

/// Widest allowed slice. Keeps every position below `2^31`, the bound the
/// bit-array addressing is sized for on 32-bit and 64-bit targets alike.
pub const MAX_SLICE_WIDTH: u32 = 31;

/// Number of bits in the digest being sliced.
const DIGEST_BITS: u32 = 128;

/// Slices a 128-bit digest into `width`-bit positions.
///
/// Rejects widths outside `1..=31` at construction, before any instance
/// is usable. The digest provider is injected so the slicing logic
/// depends only on "deterministic 128-bit output", not on a particular
/// algorithm.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DigestSliceHash<D = Murmur3Digest> {
    width: u32,
    drop_trailing_zero: bool,
    digest: D,
}

impl DigestSliceHash<Murmur3Digest> {
    /// Create a strategy over the default digest provider.
    pub fn new(width: u32) -> Result<Self, FilterError> {
        Self::with_digest(width, Murmur3Digest::default())
    }
}

impl<D: Digest128> DigestSliceHash<D> {
    /// Create a strategy with an injected digest provider.
    pub fn with_digest(width: u32, digest: D) -> Result<Self, FilterError> {
        if !(1..=MAX_SLICE_WIDTH).contains(&width) {
            return Err(FilterError::InvalidSliceWidth { width });
        }
        Ok(Self {
            width,
            drop_trailing_zero: true,
            digest,
        })
    }

    /// Disable the drop-final-zero bias correction.
    pub fn keep_trailing_zero(mut self) -> Self {
        self.drop_trailing_zero = false;
        self
    }

    /// Slice width in bits.
    pub fn width(&self) -> u32 {
        self.width
    }
}

impl<D: Digest128> HashStrategy for DigestSliceHash<D> {
    fn map_size(&self) -> usize {
        1usize << self.width
    }

    fn name(&self) -> &'static str {
        "digest-slice"
    }

    fn hash_positions(&self, word: &str) -> Vec<usize> {
        let mut positions = slice_digest(self.digest.digest(word.as_bytes()), self.width);
        if self.drop_trailing_zero && positions.last() == Some(&0) {
            positions.pop();
        }
        positions
    }
}

/// Partition a 128-bit digest into `width`-bit groups, high bits first.
///
/// A short final group (`128 % width != 0`) is zero-padded on the low
/// end, so every returned value lies in `[0, 2^width)`. Concatenating the
/// groups reconstructs the digest whenever `128 % width == 0`.
///
/// `width` must already be validated to `1..=31`.
pub fn slice_digest(digest: u128, width: u32) -> Vec<usize> {
    debug_assert!((1..=MAX_SLICE_WIDTH).contains(&width));

    let mut groups = Vec::with_capacity(DIGEST_BITS.div_ceil(width) as usize);
    let mut consumed = 0;
    while consumed < DIGEST_BITS {
        let take = width.min(DIGEST_BITS - consumed);
        let shift = DIGEST_BITS - consumed - take;
        let group = (digest >> shift) & ((1u128 << take) - 1);
        // a short final group keeps its bits in the high end
        groups.push((group << (width - take)) as usize);
        consumed += take;
    }
    groups
}
