//! Parley - natural-language command matching.
//!
//! This crate re-exports all layers of the Parley system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: parley_matcher    — Tokenizer, backtracking matcher, intent library
//! Layer 1: parley_grammar    — Grammar trees, pattern language, stopper index
//! Layer 0: parley_foundation — Error types, stemmer seam
//! ```

pub use parley_foundation as foundation;
pub use parley_grammar as grammar;
pub use parley_matcher as matcher;
