//! Fixed-size bit storage for membership filters
//!
//! The only mutable state in a filter lives here. Bits are packed into a
//! `bitvec` array of exactly `map_size` bits, all zero at creation, and a
//! bit can only ever be switched on. There is no reset operation and the
//! array never resizes.
//!
//! Index range is a contract, not a runtime check: hash strategies are
//! defined to only emit indices in `[0, map_size)`, so this layer performs
//! no defensive bounds checking of its own. An out-of-range index is a bug
//! in a strategy implementation and panics via the underlying `bitvec`
//! indexing.

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

/// Dense, fixed-capacity array of bits addressed by `usize` index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BitArray {
    /// Bit storage, exactly `map_size` bits long
    #[serde(with = "bitvec_serde")]
    bits: BitVec<u8, Lsb0>,
}

/// Serde support for BitVec
mod bitvec_serde {
    use bitvec::prelude::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(bits: &BitVec<u8, Lsb0>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let bytes: Vec<u8> = bits.as_raw_slice().to_vec();
        (bytes, bits.len()).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BitVec<u8, Lsb0>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (bytes, len): (Vec<u8>, usize) = Deserialize::deserialize(deserializer)?;
        let mut bits = BitVec::<u8, Lsb0>::from_vec(bytes);
        bits.truncate(len);
        Ok(bits)
    }
}

impl BitArray {
    /// Create an all-zero bit array of `map_size` bits.
    pub fn new(map_size: usize) -> Self {
        Self {
            bits: bitvec![u8, Lsb0; 0; map_size],
        }
    }

    /// Mark the bit at `index` as present.
    ///
    /// Permanent for the lifetime of the instance: nothing clears bits.
    pub fn set(&mut self, index: usize) {
        self.bits.set(index, true);
    }

    /// True iff the bit at `index` was previously set. Pure read.
    pub fn test(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Number of bits currently set. Used for saturation reporting.
    pub fn count_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Capacity in bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True iff no bit has been set yet.
    pub fn is_empty(&self) -> bool {
        self.count_set() == 0
    }
}
