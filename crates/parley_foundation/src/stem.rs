//! Stemming seam.
//!
//! The matcher compares grammar literals against utterance words through an
//! optional stemmer so that "timers" can satisfy the literal "timer". The
//! stemmer itself is a language-specific collaborator; this crate only
//! defines the seam.

/// Reduces a word to a stemmed form for fuzzy comparison.
///
/// Implementations must be deterministic: the matcher stems both sides of
/// every word comparison and relies on equal inputs producing equal outputs.
pub trait Stem: Send + Sync {
    /// Returns the stemmed form of `word`.
    fn stem(&self, word: &str) -> String;
}

/// The identity stemmer, used when no stemmer is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoStem;

impl Stem for NoStem {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }
}

impl<F> Stem for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn stem(&self, word: &str) -> String {
        self(word)
    }
}
