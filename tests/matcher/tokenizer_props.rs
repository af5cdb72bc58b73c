//! Property tests for the tokenizer.

use parley::matcher::{TokenKind, Tokenizer};
use proptest::prelude::*;

proptest! {
    /// Tokenization classifies every input without panicking; the only
    /// failure mode is a numeric overflow error.
    #[test]
    fn tokenize_is_total(input in ".*") {
        let _ = Tokenizer::new().tokenize(&input);
    }

    /// Alphabetic input that contains no number words yields only word
    /// tokens, one per whitespace-separated chunk.
    #[test]
    fn plain_words_pass_through(words in proptest::collection::vec("[bcdfgjkmpqrvxz]{1,8}", 1..8)) {
        let input = words.join(" ");
        let tokens = Tokenizer::new().tokenize(&input).unwrap();
        prop_assert_eq!(tokens.len(), words.len());
        for (token, word) in tokens.iter().zip(&words) {
            prop_assert_eq!(&token.text, word);
            prop_assert_eq!(token.kind, TokenKind::Word);
        }
    }

    /// Any digit run that fits in an i64 becomes a single number token
    /// with the parsed value.
    #[test]
    fn digit_runs_parse(value in 0i64..=i64::MAX) {
        let input = value.to_string();
        let tokens = Tokenizer::new().tokenize(&input).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number(value));
    }

    /// Tokenizing the same input twice yields identical token sequences.
    #[test]
    fn tokenize_is_deterministic(input in ".*") {
        let tokenizer = Tokenizer::new();
        let first = tokenizer.tokenize(&input);
        let second = tokenizer.tokenize(&input);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "divergent results for identical input"),
        }
    }
}
