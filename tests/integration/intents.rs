//! Assistant-style scenarios exercising the full pipeline: tokenization,
//! grammar selection, backtracking match, and capture extraction.

use parley::foundation::{ErrorKind, Stem};
use parley::matcher::{IntentLibrary, MatchOptions, Recognition};
use std::sync::Arc;

fn assistant() -> IntentLibrary {
    let mut library = IntentLibrary::new();
    library
        .register("timer.set", "set [a] timer for <n:#> (minute|minutes|hour|hours)")
        .expect("pattern should parse");
    library
        .register("timer.cancel", "cancel [the] (timer|timers)")
        .expect("pattern should parse");
    library
        .register("light.level", "[please] (set|dim) the <room:+> (light|lights) to <level:#> [percent]")
        .expect("pattern should parse");
    library
        .register("light.switch", "turn (on|off) the <room:+> (light|lights)")
        .expect("pattern should parse");
    library
        .register("music.play", "play [me] [some] <what:*>")
        .expect("pattern should parse");
    library
}

fn recognize(library: &IntentLibrary, utterance: &str) -> Recognition {
    library
        .recognize(utterance)
        .unwrap_or_else(|err| panic!("{utterance:?} should recognize: {err}"))
}

#[test]
fn timer_with_digit_duration() {
    let library = assistant();
    let recognition = recognize(&library, "set a timer for 25 minutes");
    assert_eq!(recognition.intent, "timer.set");
    assert_eq!(recognition.output.number("n"), Some(25));
}

#[test]
fn timer_with_written_duration() {
    let library = assistant();
    let recognition = recognize(&library, "set timer for forty five minutes");
    assert_eq!(recognition.intent, "timer.set");
    assert_eq!(recognition.output.number("n"), Some(45));
}

#[test]
fn optional_words_may_be_absent() {
    let library = assistant();
    let recognition = recognize(&library, "cancel timer");
    assert_eq!(recognition.intent, "timer.cancel");
}

#[test]
fn wildcard_room_name_spans_several_tokens() {
    let library = assistant();
    let recognition = recognize(&library, "turn off the guest bedroom lights");
    assert_eq!(recognition.intent, "light.switch");
    assert_eq!(recognition.output.entity("room"), Some("guest bedroom"));
}

#[test]
fn two_captures_in_one_command() {
    let library = assistant();
    let recognition = recognize(&library, "dim the kitchen lights to 30 percent");
    assert_eq!(recognition.intent, "light.level");
    assert_eq!(recognition.output.entity("room"), Some("kitchen"));
    assert_eq!(recognition.output.number("level"), Some(30));
}

#[test]
fn specific_grammar_beats_catch_all_by_order() {
    let library = assistant();
    let recognition = recognize(&library, "play me some quiet jazz");
    assert_eq!(recognition.intent, "music.play");
    assert_eq!(recognition.output.entity("what"), Some("quiet jazz"));
}

#[test]
fn unknown_command_exhausts_the_library() {
    let library = assistant();
    let err = library
        .recognize("order a pizza")
        .expect_err("no grammar should match");
    assert!(matches!(err.kind, ErrorKind::NoMatchingGrammar));
}

#[test]
fn recognition_is_stable_after_a_failure() {
    let library = assistant();
    assert!(library.recognize("order a pizza").is_err());
    let recognition = recognize(&library, "set a timer for 5 minutes");
    assert_eq!(recognition.intent, "timer.set");
    assert_eq!(recognition.output.number("n"), Some(5));
}

#[test]
fn stemmer_lets_inflected_words_match() {
    let stemmer: Arc<dyn Stem> = Arc::new(|word: &str| word.trim_end_matches('s').to_string());
    let options = MatchOptions {
        stemmer: Some(stemmer),
        ..MatchOptions::default()
    };
    let mut library = IntentLibrary::new().with_options(options);
    library
        .register("timer.cancel", "cancel the timer")
        .expect("pattern should parse");
    let recognition = recognize(&library, "cancel the timers");
    assert_eq!(recognition.intent, "timer.cancel");
}

#[test]
fn near_miss_word_recognizes_via_edit_distance() {
    let library = assistant();
    // "minutez" is one substitution away from "minutes".
    let recognition = recognize(&library, "set a timer for 10 minutez");
    assert_eq!(recognition.intent, "timer.set");
    assert_eq!(recognition.output.number("n"), Some(10));
}
