//! Utterance tokenizer and backtracking grammar matcher for Parley.
//!
//! This crate turns a normalized utterance into tokens and matches them
//! against a library of compiled grammars:
//!
//! ```text
//! "set a timer for twenty two minutes"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → [set, a, timer, for, Number(22, "twenty two"), minutes]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ GRAMMAR         │  → per candidate: fresh attempt, backtracking walk,
//! │ SELECTION LOOP  │    full-consumption check
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ RECOGNITION     │  → intent "timer.set", numbers { n: 22 }
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert a normalized utterance to a token stream
//! - [`numbers`] - Written-number lexicon and positional combination
//! - [`fuzzy`] - Stemmed, edit-distance-tolerant word comparison
//! - [`matcher`] - The backtracking match attempt over one grammar
//! - [`library`] - Ordered intent library and the selection loop

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod fuzzy;
pub mod library;
pub mod matcher;
pub mod numbers;
pub mod tokenizer;

pub use library::{IntentLibrary, Recognition};
pub use matcher::{MatchAttempt, MatchOptions, MatchOutput};
pub use numbers::NumberLexicon;
pub use tokenizer::{Token, TokenKind, Tokenizer};
