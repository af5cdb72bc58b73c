//! Match semantics tests, one per grammar construct.

use parley::grammar::Grammar;
use parley::matcher::{MatchAttempt, MatchOptions, MatchOutput, Tokenizer};

fn attempt(pattern: &str, utterance: &str) -> Option<MatchOutput> {
    let grammar = Grammar::parse(pattern).expect("pattern should parse");
    let tokens = Tokenizer::new()
        .tokenize(utterance)
        .expect("utterance should tokenize");
    MatchAttempt::run(&grammar, &tokens, &MatchOptions::default())
        .expect("attempt should not hit a limit")
}

#[test]
fn exact_literal_match_consumes_everything() {
    let output = attempt("set a timer", "set a timer").expect("should match");
    assert!(output.entities().is_empty());
    assert!(output.numbers().is_empty());
}

#[test]
fn partial_consumption_is_no_match() {
    assert!(attempt("set a timer", "set a timer please").is_none());
}

#[test]
fn greedy_disambiguation_prefers_longer_alternative() {
    // With alternatives sorted by leaf count, "very very" is tried first
    // and the third "very" is left for the trailing literal.
    assert!(attempt("(very|very very) very", "very very very").is_some());
}

#[test]
fn optional_group_matches_with_and_without_content() {
    assert!(attempt("test [please]", "test").is_some());
    assert!(attempt("test [please]", "test please").is_some());
    assert!(attempt("test [please]", "test now").is_none());
}

#[test]
fn short_wildcard_bounded_stop() {
    assert!(attempt("start + stop", "start a b stop").is_some());
    assert!(attempt("start + stop", "start a b c d e f stop").is_none());
}

#[test]
fn short_wildcard_stops_before_optional_tail() {
    let output =
        attempt("find <what:+> [the] file", "find my latest the file").expect("should match");
    assert_eq!(output.entity("what"), Some("my latest"));
}

#[test]
fn long_wildcard_only_matches_nonempty_tail() {
    assert!(attempt("play *", "play something loud").is_some());
    assert!(attempt("play *", "play").is_none());
}

#[test]
fn fuzzy_tolerance_thresholds() {
    // Edit distance 1 on a long enough literal.
    assert!(attempt("timer", "timers").is_some());
    assert!(attempt("minutes", "minute").is_some());
    // Short literals receive no leniency.
    assert!(attempt("tim", "tom").is_none());
    // Two edits are too many at any length.
    assert!(attempt("timer", "toners").is_none());
}

#[test]
fn number_slot_matches_digit_and_written_tokens() {
    let digits = attempt("wait <n:#> minutes", "wait 5 minutes").expect("should match");
    assert_eq!(digits.number("n"), Some(5));

    let written = attempt("wait <n:#> minutes", "wait five minutes").expect("should match");
    assert_eq!(written.number("n"), Some(5));

    let merged = attempt("wait <n:#> minutes", "wait twenty two minutes").expect("should match");
    assert_eq!(merged.number("n"), Some(22));
}

#[test]
fn number_slot_rejects_plain_words() {
    assert!(attempt("wait <n:#> minutes", "wait several minutes").is_none());
}

#[test]
fn all_of_group_is_a_conjunction() {
    assert!(attempt("{good morning} sunshine", "good morning sunshine").is_some());
    assert!(attempt("{good morning} sunshine", "good sunshine").is_none());
}

#[test]
fn alternation_backtracks_cleanly() {
    // The longer alternative consumes "turn on" then fails on "radio";
    // the index must rewind before "turn off" style alternatives run.
    let output = attempt(
        "(turn on the lights|turn on the radio)",
        "turn on the radio",
    );
    assert!(output.is_some());
}
