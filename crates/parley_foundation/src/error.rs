//! Error types for the Parley system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Expected match failures (a word that does not fit, a wildcard with no
//! stop signal) never appear here: they are plain `Ok(false)` returns inside
//! the matcher. This module covers the hard failures only - unusable input,
//! malformed patterns, exhausted grammar libraries, and tripped kill
//! switches.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout Parley.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Parley operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a tokenization error for an unclassifiable token.
    #[must_use]
    pub fn tokenization(text: impl Into<String>) -> Self {
        Self::new(ErrorKind::Tokenization { text: text.into() })
    }

    /// Creates a pattern parse error.
    #[must_use]
    pub fn pattern(message: impl Into<String>, column: usize) -> Self {
        Self::new(ErrorKind::Pattern {
            message: message.into(),
            column,
        })
    }

    /// Creates a grammar exhaustion error.
    #[must_use]
    pub fn no_matching_grammar() -> Self {
        Self::new(ErrorKind::NoMatchingGrammar)
    }

    /// Creates a match limit exceeded error.
    #[must_use]
    pub fn limit_exceeded(limit: MatchLimit) -> Self {
        Self::new(ErrorKind::LimitExceeded(limit))
    }

    /// Creates an internal invariant violation error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A token passed neither word nor number classification.
    #[error("unclassifiable token: {text:?}")]
    Tokenization {
        /// The offending token text.
        text: String,
    },

    /// A grammar pattern string could not be parsed.
    #[error("pattern error at column {column}: {message}")]
    Pattern {
        /// Description of the parse error.
        message: String,
        /// Column number in the pattern (1-indexed).
        column: usize,
    },

    /// No candidate grammar fully matched the utterance.
    #[error("no matching grammar")]
    NoMatchingGrammar,

    /// A match limit was exceeded (kill switch triggered).
    #[error("limit exceeded: {0}")]
    LimitExceeded(MatchLimit),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Match limits (kill switches) that can be exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchLimit {
    /// Maximum matcher steps per attempt exceeded.
    MaxSteps {
        /// The configured limit.
        limit: u64,
    },
}

impl fmt::Display for MatchLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxSteps { limit } => {
                write!(f, "max matcher steps ({limit}) exceeded")
            }
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The intent or pattern being processed when the error occurred.
    pub source: Option<String>,
    /// The utterance being matched, if any.
    pub utterance: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the intent or pattern source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the utterance.
    #[must_use]
    pub fn with_utterance(mut self, utterance: impl Into<String>) -> Self {
        self.utterance = Some(utterance.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if let Some(utterance) = &self.utterance {
            if self.source.is_some() {
                write!(f, " ")?;
            }
            write!(f, "while matching {utterance:?}")?;
        }
        Ok(())
    }
}
