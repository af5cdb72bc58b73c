//! Error types and shared seams for Parley.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`Result`] - Crate-wide result alias
//! - [`MatchLimit`] - Kill-switch descriptors for runaway match attempts
//! - [`Stem`] - The seam trait for an optional external stemmer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod stem;

pub use error::{Error, ErrorContext, ErrorKind, MatchLimit, Result};
pub use stem::{NoStem, Stem};
