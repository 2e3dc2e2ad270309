//! Per-character-code hash strategy
//!
//! Intentionally weak: one bit position per byte of the word, so the
//! collision structure can be reasoned about by hand. Two words produce
//! the same position set iff they contain the same set of distinct bytes,
//! regardless of multiplicity or order ("foo" and "roof" collide). Useful
//! for constructing deterministic false-positive fixtures.

use serde::{Deserialize, Serialize};

use super::strategy::HashStrategy;

/// One position per byte: the byte's own value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharCodeHash;

impl CharCodeHash {
    /// Addressable bits: one per possible byte value.
    pub const MAP_SIZE: usize = 256;
}

impl HashStrategy for CharCodeHash {
    fn map_size(&self) -> usize {
        Self::MAP_SIZE
    }

    fn name(&self) -> &'static str {
        "char-code"
    }

    fn hash_positions(&self, word: &str) -> Vec<usize> {
        word.bytes().map(usize::from).collect()
    }
}
