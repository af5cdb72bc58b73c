//! The backtracking match attempt.
//!
//! One [`MatchAttempt`] walks a compiled grammar tree against a token
//! sequence depth-first, consuming tokens and rewinding on failure. All
//! mutable state - the read index, the matched fragment list, the capture
//! trail, the step counter - lives on the attempt; the grammar itself is
//! never touched, so one grammar can serve concurrent attempts.
//!
//! Expected failures (a word that does not fit, a number slot over a plain
//! word) are `Ok(false)` returns that unwind with index restoration at every
//! sequence boundary. The `Err` path is reserved for the step-budget kill
//! switch and internal invariant violations.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parley_foundation::{Error, MatchLimit, Result, Stem};
use parley_grammar::{Grammar, GrammarNode};

use crate::fuzzy;
use crate::tokenizer::{Token, TokenKind};

/// Default step budget per match attempt.
pub const DEFAULT_MAX_STEPS: u64 = 100_000;

/// Configuration shared by all attempts in a library.
#[derive(Clone)]
pub struct MatchOptions {
    /// Optional stemmer applied to both sides of every word comparison.
    pub stemmer: Option<Arc<dyn Stem>>,
    /// Minimum stemmed-literal length for edit-distance leniency.
    pub fuzzy_min_len: usize,
    /// Node-visit budget per attempt; exceeding it aborts the attempt.
    pub max_steps: u64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            stemmer: None,
            fuzzy_min_len: fuzzy::FUZZY_MIN_LEN,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl fmt::Debug for MatchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchOptions")
            .field("stemmer", &self.stemmer.as_ref().map(|_| "<dyn Stem>"))
            .field("fuzzy_min_len", &self.fuzzy_min_len)
            .field("max_steps", &self.max_steps)
            .finish()
    }
}

/// Captured data from a successful match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchOutput {
    entities: HashMap<String, String>,
    numbers: HashMap<String, i64>,
}

impl MatchOutput {
    /// Returns a captured entity's text.
    #[must_use]
    pub fn entity(&self, name: &str) -> Option<&str> {
        self.entities.get(name).map(String::as_str)
    }

    /// Returns a captured number slot's value.
    #[must_use]
    pub fn number(&self, slot: &str) -> Option<i64> {
        self.numbers.get(slot).copied()
    }

    /// All captured entities, keyed by name.
    #[must_use]
    pub const fn entities(&self) -> &HashMap<String, String> {
        &self.entities
    }

    /// All captured number slots, keyed by name.
    #[must_use]
    pub const fn numbers(&self) -> &HashMap<String, i64> {
        &self.numbers
    }
}

/// One capture recorded on the trail.
///
/// The trail is truncated on backtrack, so captures written by a failed
/// subtree never leak into the result.
#[derive(Clone, Debug)]
enum Capture {
    Entity { name: String, text: String },
    Number { slot: String, value: i64 },
}

/// Saved attempt state for rewinding.
#[derive(Clone, Copy, Debug)]
struct Mark {
    index: usize,
    fragments: usize,
    trail: usize,
}

/// One in-flight match of a grammar against a token sequence.
pub struct MatchAttempt<'a> {
    /// The utterance tokens; never mutated, only indexed.
    tokens: &'a [Token],
    options: &'a MatchOptions,
    /// Current read index into `tokens`.
    index: usize,
    /// Per consumed token, the literal text used for the match. Grammar
    /// literals are recorded for word matches (so a fuzzy match records the
    /// grammar's spelling), raw token text for numbers and wildcard skips.
    fragments: Vec<String>,
    /// Captures recorded so far, truncated on backtrack.
    trail: Vec<Capture>,
    /// Node visits so far, checked against the step budget.
    steps: u64,
}

impl<'a> MatchAttempt<'a> {
    /// Matches a grammar against a full token sequence.
    ///
    /// Returns `Ok(Some(output))` only if the root matches **and** every
    /// token was consumed; a partial match is no match.
    ///
    /// # Errors
    /// Returns an error if the step budget is exceeded.
    pub fn run(
        grammar: &Grammar,
        tokens: &'a [Token],
        options: &'a MatchOptions,
    ) -> Result<Option<MatchOutput>> {
        let mut attempt = Self {
            tokens,
            options,
            index: 0,
            fragments: Vec::new(),
            trail: Vec::new(),
            steps: 0,
        };
        let matched = attempt.match_node(grammar.root(), grammar)?;
        if matched && attempt.index == tokens.len() {
            Ok(Some(attempt.into_output()))
        } else {
            Ok(None)
        }
    }

    /// Evaluates one grammar node at the current read index.
    fn match_node(&mut self, node: &GrammarNode, grammar: &Grammar) -> Result<bool> {
        self.steps += 1;
        if self.steps > self.options.max_steps {
            return Err(Error::limit_exceeded(MatchLimit::MaxSteps {
                limit: self.options.max_steps,
            }));
        }

        match node {
            GrammarNode::Sequence(children) | GrammarNode::AllOf(children) => {
                let mark = self.mark();
                if self.match_conjunction(children, grammar)? {
                    Ok(true)
                } else {
                    self.rewind(mark);
                    Ok(false)
                }
            }
            GrammarNode::Optional(children) => {
                // Attempted for side effects only; absence is not failure.
                for child in children {
                    let _ = self.match_node(child, grammar)?;
                }
                Ok(true)
            }
            GrammarNode::OneOf(children) => {
                for child in children {
                    let mark = self.mark();
                    if self.match_node(child, grammar)? {
                        return Ok(true);
                    }
                    self.rewind(mark);
                }
                Ok(false)
            }
            GrammarNode::Word(literal) => {
                let Some(token) = self.tokens.get(self.index) else {
                    return Ok(false);
                };
                if fuzzy::words_match(
                    literal,
                    &token.text,
                    self.options.stemmer.as_deref(),
                    self.options.fuzzy_min_len,
                ) {
                    self.consume(literal.clone())?;
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
            GrammarNode::Number { slot } => {
                let Some(token) = self.tokens.get(self.index) else {
                    return Ok(false);
                };
                let TokenKind::Number(value) = token.kind else {
                    return Ok(false);
                };
                let text = token.text.clone();
                self.consume(text)?;
                if let Some(slot) = slot {
                    self.trail.push(Capture::Number {
                        slot: slot.clone(),
                        value,
                    });
                }
                Ok(true)
            }
            GrammarNode::Entity { name, children } => {
                let mark = self.mark();
                let fragment_start = self.fragments.len();
                if self.match_conjunction(children, grammar)? {
                    let text = self.fragments[fragment_start..].join(" ");
                    self.trail.push(Capture::Entity {
                        name: name.clone(),
                        text,
                    });
                    Ok(true)
                } else {
                    self.rewind(mark);
                    Ok(false)
                }
            }
            GrammarNode::ShortWildcard { max_skip, id } => {
                // A wildcard with nothing after it can never stop skipping.
                let Some(stopper) = grammar.stopper(*id) else {
                    return Ok(false);
                };
                let mut skipped = 0;
                while !self.probe(stopper, grammar)? {
                    if skipped >= *max_skip || self.index >= self.tokens.len() {
                        // Out of skip budget or tokens: stop here and let
                        // the following sibling decide the sequence's fate.
                        break;
                    }
                    let text = self.tokens[self.index].text.clone();
                    self.consume(text)?;
                    skipped += 1;
                }
                Ok(true)
            }
            GrammarNode::LongWildcard => {
                // Must absorb at least one token; a zero-length greedy
                // match is treated as failure.
                if self.index >= self.tokens.len() {
                    return Ok(false);
                }
                while self.index < self.tokens.len() {
                    let text = self.tokens[self.index].text.clone();
                    self.consume(text)?;
                }
                Ok(true)
            }
        }
    }

    /// Matches children in order; any failure fails the whole conjunction.
    ///
    /// The caller rewinds on failure.
    fn match_conjunction(&mut self, children: &[GrammarNode], grammar: &Grammar) -> Result<bool> {
        for child in children {
            if !self.match_node(child, grammar)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Checks whether a wildcard's stop signal matches at the current
    /// index, discarding all side effects of the check.
    fn probe(&mut self, stopper: &GrammarNode, grammar: &Grammar) -> Result<bool> {
        let mut scratch = MatchAttempt {
            tokens: self.tokens,
            options: self.options,
            index: self.index,
            fragments: Vec::new(),
            trail: Vec::new(),
            steps: self.steps,
        };
        let matched = scratch.match_node(stopper, grammar)?;
        // Probe work still counts against the shared step budget.
        self.steps = scratch.steps;
        Ok(matched)
    }

    /// Consumes the current token, recording the fragment text used for it.
    fn consume(&mut self, fragment: String) -> Result<()> {
        if self.index >= self.tokens.len() {
            return Err(Error::internal("consume past end of token sequence"));
        }
        self.fragments.push(fragment);
        self.index += 1;
        Ok(())
    }

    /// Saves the rewindable parts of the attempt state.
    const fn mark(&self) -> Mark {
        Mark {
            index: self.index,
            fragments: self.fragments.len(),
            trail: self.trail.len(),
        }
    }

    /// Restores the attempt to a saved mark.
    fn rewind(&mut self, mark: Mark) {
        self.index = mark.index;
        self.fragments.truncate(mark.fragments);
        self.trail.truncate(mark.trail);
    }

    /// Drains the capture trail into the final output maps.
    fn into_output(self) -> MatchOutput {
        let mut output = MatchOutput::default();
        for capture in self.trail {
            match capture {
                Capture::Entity { name, text } => {
                    output.entities.insert(name, text);
                }
                Capture::Number { slot, value } => {
                    output.numbers.insert(slot, value);
                }
            }
        }
        output
    }
}
