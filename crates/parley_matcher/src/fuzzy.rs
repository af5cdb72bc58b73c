//! Fuzzy word comparison.
//!
//! Grammar literals are compared against utterance words through an
//! optional stemmer and a bounded edit distance, so "timer" tolerates
//! "timers" without a grammar author spelling out every form. Short
//! literals get no edit-distance leniency: at three characters or fewer a
//! single edit reaches an unrelated word ("tim" vs "tom").

use parley_foundation::Stem;

/// Minimum stemmed-literal length for edit-distance leniency.
pub const FUZZY_MIN_LEN: usize = 4;

/// Maximum tolerated edit distance between literal and token.
pub const MAX_EDIT_DISTANCE: usize = 1;

/// Compares a grammar literal against a token word.
///
/// Both sides are stemmed (identity when no stemmer is configured). An
/// exact match always succeeds; otherwise an edit distance of at most
/// [`MAX_EDIT_DISTANCE`] is allowed when the stemmed literal has at least
/// `min_len` characters.
#[must_use]
pub fn words_match(
    literal: &str,
    word: &str,
    stemmer: Option<&dyn Stem>,
    min_len: usize,
) -> bool {
    let (literal, word) = match stemmer {
        Some(stemmer) => (stemmer.stem(literal), stemmer.stem(word)),
        None => (literal.to_string(), word.to_string()),
    };

    if literal == word {
        return true;
    }
    if literal.chars().count() < min_len {
        return false;
    }
    edit_distance(&literal, &word) <= MAX_EDIT_DISTANCE
}

/// Levenshtein distance with unit insert/delete/substitute costs.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Single rolling row of the distance matrix.
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, &ca) in a.iter().enumerate() {
        let mut previous_diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = previous_diagonal + usize::from(ca != cb);
            previous_diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(row[j + 1] + 1);
        }
    }
    row[b.len()]
}
