//! Character-pair hash strategy
//!
//! The second hand-analyzable strategy: bytes are consumed in
//! non-overlapping pairs, each pair combined big-endian into a 16-bit
//! position. A trailing unpaired byte contributes its own single-byte
//! position. Collisions require sharing whole pairs (or the trailing
//! byte), so they are rarer than with `CharCodeHash` but still easy to
//! construct on purpose: "rso" hits the "rs" pair of "bars" and the
//! trailing "o" of "foo".

use serde::{Deserialize, Serialize};

use super::strategy::HashStrategy;

/// One position per non-overlapping byte pair, big-endian.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharPairHash;

impl CharPairHash {
    /// Addressable bits: one per possible 16-bit pair value.
    pub const MAP_SIZE: usize = 65536;
}

impl HashStrategy for CharPairHash {
    fn map_size(&self) -> usize {
        Self::MAP_SIZE
    }

    fn name(&self) -> &'static str {
        "char-pair"
    }

    fn hash_positions(&self, word: &str) -> Vec<usize> {
        let bytes = word.as_bytes();
        let mut positions = Vec::with_capacity(bytes.len().div_ceil(2));
        for pair in bytes.chunks(2) {
            let position = match pair {
                &[hi, lo] => (usize::from(hi) << 8) | usize::from(lo),
                &[single] => usize::from(single),
                _ => unreachable!("chunks(2) yields one or two bytes"),
            };
            positions.push(position);
        }
        positions
    }
}
