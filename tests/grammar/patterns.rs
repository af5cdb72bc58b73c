//! Pattern language tests.

use parley::foundation::ErrorKind;
use parley::grammar::{DEFAULT_MAX_SKIP, Grammar, GrammarNode};

#[test]
fn parse_full_command_pattern() {
    let grammar = Grammar::parse("set [a] timer for <n:#> (minute|minutes)")
        .expect("pattern should parse");
    assert_eq!(grammar.leaf_count(), 6);
}

#[test]
fn parse_entity_with_nested_alternation() {
    let grammar =
        Grammar::parse("turn <state:(on|off)> the lights").expect("pattern should parse");
    let GrammarNode::Sequence(children) = grammar.root() else {
        panic!("root should be a sequence");
    };
    assert!(matches!(children[1], GrammarNode::Entity { .. }));
}

#[test]
fn named_number_is_a_slot_not_an_entity() {
    let grammar = Grammar::parse("wait <n:#>").expect("pattern should parse");
    let GrammarNode::Sequence(children) = grammar.root() else {
        panic!("root should be a sequence");
    };
    assert_eq!(
        children[1],
        GrammarNode::Number {
            slot: Some("n".to_string())
        }
    );
}

#[test]
fn plus_uses_default_max_skip() {
    let grammar = Grammar::parse("find + now").expect("pattern should parse");
    let GrammarNode::Sequence(children) = grammar.root() else {
        panic!("root should be a sequence");
    };
    assert_eq!(
        children[1],
        GrammarNode::ShortWildcard {
            max_skip: DEFAULT_MAX_SKIP,
            id: 0
        }
    );
}

#[test]
fn alternatives_sorted_by_specificity() {
    let grammar = Grammar::parse("(a|a b c|a b)").expect("pattern should parse");
    let GrammarNode::Sequence(children) = grammar.root() else {
        panic!("root should be a sequence");
    };
    let GrammarNode::OneOf(alternatives) = &children[0] else {
        panic!("child should be an alternation");
    };
    let counts: Vec<usize> = alternatives.iter().map(GrammarNode::leaf_count).collect();
    assert_eq!(counts, vec![3, 2, 1]);
}

#[test]
fn malformed_patterns_report_position() {
    for (pattern, expected_column) in [("(a|b", 5), ("<x>", 3), ("a ]", 3)] {
        let err = Grammar::parse(pattern).expect_err("pattern should not parse");
        match err.kind {
            ErrorKind::Pattern { column, .. } => assert_eq!(
                column, expected_column,
                "wrong column for pattern {pattern:?}"
            ),
            kind => panic!("unexpected error kind: {kind:?}"),
        }
    }
}

#[test]
fn empty_pattern_is_rejected() {
    assert!(Grammar::parse("").is_err());
    assert!(Grammar::parse("   ").is_err());
}
