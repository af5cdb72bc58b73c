//! Tokenizer tests.

use parley::matcher::{NumberLexicon, Token, Tokenizer};

fn tokenize(utterance: &str) -> Vec<Token> {
    Tokenizer::new()
        .tokenize(utterance)
        .expect("utterance should tokenize")
}

#[test]
fn splits_on_whitespace_and_punctuation() {
    assert_eq!(
        tokenize("turn off the lights, please"),
        vec![
            Token::word("turn"),
            Token::word("off"),
            Token::word("the"),
            Token::word("lights"),
            Token::word("please"),
        ]
    );
}

#[test]
fn digits_become_numbers() {
    assert_eq!(
        tokenize("channel 42"),
        vec![Token::word("channel"), Token::number("42", 42)]
    );
}

#[test]
fn written_numbers_merge() {
    assert_eq!(
        tokenize("twenty two"),
        vec![Token::number("twenty two", 22)]
    );
    assert_eq!(
        tokenize("two hundred fifty six"),
        vec![Token::number("two hundred fifty six", 256)]
    );
}

#[test]
fn merge_stops_at_plain_words() {
    assert_eq!(
        tokenize("five big dogs"),
        vec![
            Token::number("five", 5),
            Token::word("big"),
            Token::word("dogs"),
        ]
    );
}

#[test]
fn digit_tokens_never_merge() {
    assert_eq!(
        tokenize("4 7"),
        vec![Token::number("4", 4), Token::number("7", 7)]
    );
}

#[test]
fn empty_and_separator_only_inputs() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" ,.!? ").is_empty());
}

#[test]
fn custom_lexicon_changes_merging() {
    let mut lexicon = NumberLexicon::empty();
    lexicon.add_value("dos", 2);
    let tokenizer = Tokenizer::with_lexicon(lexicon);
    assert_eq!(
        tokenizer.tokenize("dos cervezas").expect("should tokenize"),
        vec![Token::number("dos", 2), Token::word("cervezas")]
    );
    // "five" is no longer a number word under the custom lexicon.
    assert_eq!(
        tokenizer.tokenize("five").expect("should tokenize"),
        vec![Token::word("five")]
    );
}

#[test]
fn overflowing_digit_run_is_a_hard_error() {
    assert!(Tokenizer::new().tokenize("12345678901234567890123").is_err());
}
