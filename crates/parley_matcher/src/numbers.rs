//! Written-number lexicon.
//!
//! Maps written number words ("five", "twenty", "hundred") to values and
//! combines runs of them into a single number following positional numeral
//! rules: units and tens add onto the current group, "hundred" and
//! "thousand" multiply the group accumulated so far.

use std::collections::HashMap;

/// A word's role in a written number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberWord {
    /// A plain value: units, teens, tens.
    Value(i64),
    /// A positional multiplier such as hundred or thousand.
    Multiplier(i64),
}

/// A configurable table of written number words.
///
/// The default table covers English: zero through nineteen, the tens, and
/// the hundred/thousand multipliers. Hosts for other languages supply their
/// own table.
#[derive(Clone, Debug)]
pub struct NumberLexicon {
    words: HashMap<String, NumberWord>,
}

impl NumberLexicon {
    /// Creates an empty lexicon.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            words: HashMap::new(),
        }
    }

    /// Creates the default English lexicon.
    #[must_use]
    pub fn english() -> Self {
        let mut lexicon = Self::empty();
        let units = [
            ("zero", 0),
            ("one", 1),
            ("two", 2),
            ("three", 3),
            ("four", 4),
            ("five", 5),
            ("six", 6),
            ("seven", 7),
            ("eight", 8),
            ("nine", 9),
            ("ten", 10),
            ("eleven", 11),
            ("twelve", 12),
            ("thirteen", 13),
            ("fourteen", 14),
            ("fifteen", 15),
            ("sixteen", 16),
            ("seventeen", 17),
            ("eighteen", 18),
            ("nineteen", 19),
            ("twenty", 20),
            ("thirty", 30),
            ("forty", 40),
            ("fifty", 50),
            ("sixty", 60),
            ("seventy", 70),
            ("eighty", 80),
            ("ninety", 90),
        ];
        for (word, value) in units {
            lexicon.add_value(word, value);
        }
        lexicon.add_multiplier("hundred", 100);
        lexicon.add_multiplier("thousand", 1000);
        lexicon
    }

    /// Registers a plain value word.
    pub fn add_value(&mut self, word: impl Into<String>, value: i64) {
        self.words.insert(word.into(), NumberWord::Value(value));
    }

    /// Registers a multiplier word.
    pub fn add_multiplier(&mut self, word: impl Into<String>, value: i64) {
        self.words
            .insert(word.into(), NumberWord::Multiplier(value));
    }

    /// Looks up a word's number role, if it has one.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<NumberWord> {
        self.words.get(word).copied()
    }

    /// Returns true if the word is a written number word.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }
}

impl Default for NumberLexicon {
    fn default() -> Self {
        Self::english()
    }
}

/// Combines a run of number words into a single value.
///
/// Values accumulate into the current group; a multiplier scales the group
/// (an empty group counts as one, so "hundred" alone is 100) and "thousand"
/// additionally banks the group into the running total so "one thousand
/// five hundred" combines to 1500.
///
/// Returns `None` on arithmetic overflow.
#[must_use]
pub fn combine(parts: &[NumberWord]) -> Option<i64> {
    let mut total: i64 = 0;
    let mut group: i64 = 0;
    for part in parts {
        match part {
            NumberWord::Value(value) => {
                group = group.checked_add(*value)?;
            }
            NumberWord::Multiplier(multiplier) => {
                let base = if group == 0 { 1 } else { group };
                if *multiplier >= 1000 {
                    total = total.checked_add(base.checked_mul(*multiplier)?)?;
                    group = 0;
                } else {
                    group = base.checked_mul(*multiplier)?;
                }
            }
        }
    }
    total.checked_add(group)
}
