//! Utterance tokenization.
//!
//! Converts a normalized utterance into a stream of typed tokens. Input is
//! expected lower-cased with contractions already expanded by a
//! language-specific collaborator; this stage only splits, classifies, and
//! merges written numbers.

use parley_foundation::{Error, Result};

use crate::numbers::{self, NumberLexicon, NumberWord};

/// A token from a normalized utterance.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// The source text of this token. For merged written numbers this is
    /// the space-joined run of words ("twenty two").
    pub text: String,
    /// Word or number classification.
    pub kind: TokenKind,
}

impl Token {
    /// Creates a word token.
    #[must_use]
    pub fn word(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Word,
        }
    }

    /// Creates a number token.
    #[must_use]
    pub fn number(text: impl Into<String>, value: i64) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Number(value),
        }
    }

    /// Returns the numeric value if this is a number token.
    #[must_use]
    pub const fn value(&self) -> Option<i64> {
        match self.kind {
            TokenKind::Number(value) => Some(value),
            TokenKind::Word => None,
        }
    }
}

/// Token classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// A plain word.
    Word,
    /// A number with its parsed value.
    Number(i64),
}

/// Tokenizes normalized utterances.
#[derive(Clone, Debug, Default)]
pub struct Tokenizer {
    lexicon: NumberLexicon,
}

impl Tokenizer {
    /// Creates a tokenizer with the default English number lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tokenizer with a custom number lexicon.
    #[must_use]
    pub fn with_lexicon(lexicon: NumberLexicon) -> Self {
        Self { lexicon }
    }

    /// Tokenizes an utterance.
    ///
    /// Letters and digits accumulate into a buffer; any other character
    /// flushes it as one token. Digit runs become numbers, written number
    /// words merge with their neighbors into a single number token, and
    /// everything else is a word. Empty input yields an empty sequence.
    ///
    /// # Errors
    /// Returns a tokenization error for a digit run that does not fit an
    /// `i64`, or a written-number run whose combination overflows.
    pub fn tokenize(&self, utterance: &str) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        // Pending run of written number words awaiting merge.
        let mut run_words: Vec<String> = Vec::new();
        let mut run_parts: Vec<NumberWord> = Vec::new();
        let mut buffer = String::new();

        let flush =
            |buffer: &mut String,
             run_words: &mut Vec<String>,
             run_parts: &mut Vec<NumberWord>,
             tokens: &mut Vec<Token>|
             -> Result<()> {
                if buffer.is_empty() {
                    return Ok(());
                }
                let word = std::mem::take(buffer);
                if let Some(part) = self.lexicon.lookup(&word) {
                    run_words.push(word);
                    run_parts.push(part);
                    return Ok(());
                }
                Self::flush_number_run(run_words, run_parts, tokens)?;
                if word.chars().all(|c| c.is_ascii_digit()) {
                    let value = word
                        .parse::<i64>()
                        .map_err(|_| Error::tokenization(word.clone()))?;
                    tokens.push(Token::number(word, value));
                } else {
                    tokens.push(Token::word(word));
                }
                Ok(())
            };

        for c in utterance.chars() {
            if c.is_alphanumeric() {
                buffer.push(c);
            } else {
                flush(&mut buffer, &mut run_words, &mut run_parts, &mut tokens)?;
            }
        }
        flush(&mut buffer, &mut run_words, &mut run_parts, &mut tokens)?;
        Self::flush_number_run(&mut run_words, &mut run_parts, &mut tokens)?;

        Ok(tokens)
    }

    /// Emits the pending written-number run as a single merged token.
    fn flush_number_run(
        run_words: &mut Vec<String>,
        run_parts: &mut Vec<NumberWord>,
        tokens: &mut Vec<Token>,
    ) -> Result<()> {
        if run_parts.is_empty() {
            return Ok(());
        }
        let words = std::mem::take(run_words);
        let parts = std::mem::take(run_parts);
        let text = words.join(" ");
        let value = numbers::combine(&parts).ok_or_else(|| Error::tokenization(text.clone()))?;
        tokens.push(Token::number(text, value));
        Ok(())
    }
}
