//! Grammar trees and the pattern language for Parley.
//!
//! A grammar describes one command pattern, for example:
//!
//! ```text
//! set (a|the) timer for <n:#> (minute|minutes)
//! ```
//!
//! The textual pattern language supports:
//!
//! - whitespace-separated sequences of literal words
//! - `(a|b)` alternation
//! - `[x]` optional groups
//! - `{a b}` all-of groups for morphological alternatives
//! - `+` bounded wildcards and `*` trailing unbounded wildcards
//! - `#` numeric slots, `<name:#>` named numeric slots
//! - `<name:...>` named capturing entities
//!
//! # Modules
//!
//! - [`tree`] - The [`GrammarNode`] tree and leaf counting
//! - [`lexer`] - Character scanner for the pattern language
//! - [`parser`] - Recursive descent parser producing grammar trees
//! - [`stopper`] - Precomputed stop signals for bounded wildcards
//! - [`compile`] - The compiled, matcher-ready [`Grammar`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compile;
pub mod lexer;
pub mod parser;
pub mod stopper;
pub mod tree;

pub use compile::Grammar;
pub use stopper::StopperIndex;
pub use tree::{DEFAULT_MAX_SKIP, GrammarNode, WildcardId};
