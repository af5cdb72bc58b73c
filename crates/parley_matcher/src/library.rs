//! The intent library and grammar selection loop.
//!
//! Callers register grammars in priority order, each under an opaque intent
//! identifier. Recognition tokenizes the utterance once, then tries each
//! grammar in registration order with a fresh match attempt; the first
//! grammar that consumes the whole token sequence wins.

use parley_foundation::{Error, ErrorContext, ErrorKind, Result};
use parley_grammar::Grammar;

use crate::matcher::{MatchAttempt, MatchOptions, MatchOutput};
use crate::tokenizer::{Token, Tokenizer};

/// One registered grammar with its intent identifier.
#[derive(Clone, Debug)]
pub struct IntentGrammar {
    /// Opaque intent identifier supplied by the caller.
    pub intent: String,
    /// The compiled grammar.
    pub grammar: Grammar,
}

/// A successful recognition.
#[derive(Clone, Debug)]
pub struct Recognition {
    /// The winning grammar's intent identifier.
    pub intent: String,
    /// Captured entities and numbers.
    pub output: MatchOutput,
}

/// An ordered library of intent grammars.
///
/// Registration order is match order: the first registered grammar that
/// fully matches an utterance wins, so more specific commands should be
/// registered before catch-alls.
#[derive(Debug, Default)]
pub struct IntentLibrary {
    entries: Vec<IntentGrammar>,
    tokenizer: Tokenizer,
    options: MatchOptions,
}

impl IntentLibrary {
    /// Creates an empty library with default tokenizer and options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the match options.
    #[must_use]
    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces the tokenizer.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Parses a pattern and registers it under an intent.
    ///
    /// # Errors
    /// Returns a pattern error if the pattern is malformed.
    pub fn register(&mut self, intent: impl Into<String>, pattern: &str) -> Result<()> {
        let intent = intent.into();
        let grammar = Grammar::parse(pattern).map_err(|err| {
            let context = ErrorContext::new().with_source(intent.clone());
            err.with_context(context)
        })?;
        self.register_grammar(intent, grammar);
        Ok(())
    }

    /// Registers an already-compiled grammar under an intent.
    pub fn register_grammar(&mut self, intent: impl Into<String>, grammar: Grammar) {
        self.entries.push(IntentGrammar {
            intent: intent.into(),
            grammar,
        });
    }

    /// Returns the number of registered grammars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no grammar is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recognizes a normalized utterance.
    ///
    /// # Errors
    /// Returns a tokenization error for unusable input, a no-matching-
    /// grammar error when every candidate fails, or a limit error if an
    /// attempt exceeds its step budget.
    pub fn recognize(&self, utterance: &str) -> Result<Recognition> {
        let tokens = self.tokenizer.tokenize(utterance)?;
        self.recognize_tokens(&tokens).map_err(|err| {
            if matches!(err.kind, ErrorKind::NoMatchingGrammar) && err.context.is_none() {
                err.with_context(ErrorContext::new().with_utterance(utterance))
            } else {
                err
            }
        })
    }

    /// Recognizes an already-tokenized utterance.
    ///
    /// Each candidate gets a fresh attempt, so captures from earlier failed
    /// attempts cannot leak into the winner.
    ///
    /// # Errors
    /// Returns a no-matching-grammar error when every candidate fails, or a
    /// limit error if an attempt exceeds its step budget.
    pub fn recognize_tokens(&self, tokens: &[Token]) -> Result<Recognition> {
        for entry in &self.entries {
            if let Some(output) = MatchAttempt::run(&entry.grammar, tokens, &self.options)? {
                return Ok(Recognition {
                    intent: entry.intent.clone(),
                    output,
                });
            }
        }
        Err(Error::no_matching_grammar())
    }
}
