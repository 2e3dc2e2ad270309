//! # Wordsieve Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # End-to-end filter scenarios
//!     ├── weak_hash_scenarios.rs   # Hand-analyzable collision fixtures
//!     ├── digest_filters.rs        # Digest-sliced filters, FP comparison
//!     └── dictionary_loading.rs    # File-backed loading and state round-trips
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p wordsieve-tests
//!
//! # By category
//! cargo test -p wordsieve-tests integration::
//!
//! # Benchmarks
//! cargo bench -p wordsieve-tests
//! ```

#![allow(dead_code)]

pub mod integration;
