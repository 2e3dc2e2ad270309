//! Hash strategy capability
//!
//! A strategy maps a word to the sequence of bit positions that represent
//! it in a filter of `map_size` bits. The filter is generic over the
//! strategy and dispatches statically; a strategy is chosen at
//! construction and fixed for the instance's lifetime.

/// A hash strategy maps a word to bit positions in `[0, map_size())`.
///
/// Implementations are pure function objects: no internal mutable state,
/// no randomness. For a fixed instance, `hash_positions` returns the
/// identical sequence on every call. This determinism is what makes
/// lookups well-defined relative to earlier inserts.
///
/// Every produced position MUST lie in `[0, map_size())`. The bit storage
/// relies on this contract instead of bounds-checking each access, so an
/// out-of-range position is a bug in the strategy, not a recoverable
/// condition.
///
/// Words are hashed as byte sequences (`str::bytes`).
pub trait HashStrategy {
    /// Number of bits a filter driven by this strategy addresses.
    fn map_size(&self) -> usize;

    /// Human-readable name for debugging and reporting.
    fn name(&self) -> &'static str;

    /// Bit positions representing `word`. Non-empty for non-empty words.
    fn hash_positions(&self, word: &str) -> Vec<usize>;
}
