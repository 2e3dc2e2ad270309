//! End-to-end filter scenarios
//!
//! Each module drives the public API the way an embedding application
//! would: build a filter over a strategy, feed it a word list, then probe
//! it for members, non-members, and constructed false positives.


/// Reference word list shared by the digest-filter scenarios.
///
/// Small enough to reason about, large enough to saturate an 8-bit-wide
/// filter noticeably.
pub const REFERENCE_WORDS: &[&str] = &[
    "abacus", "banter", "cobalt", "dapper", "ember", "fathom", "gossamer", "harbor", "icicle",
    "jovial", "kestrel", "lantern", "meadow", "nimbus", "orchard", "plinth", "quarry", "rampart",
    "saffron", "tundra", "umbral", "vesper", "willow", "xylem", "yonder", "zephyr", "anvil",
    "bramble", "cinder", "drizzle", "eddy", "flint", "grotto", "hollow", "ingot", "juniper",
    "knoll", "lichen", "marrow", "nectar", "onyx", "pumice", "quiver", "russet", "sextant",
    "thicket", "updraft", "vellum", "warble", "yarrow",
];
