use pretty_assertions::assert_eq;

use super::*;

const SIMPLE: &str = "\
non-terminals: S A
terminals: a b
start: S
S -> A A
A -> a A
A -> b
";

#[test]
fn parses_simple_grammar() {
    let grammar = parse_grammar(SIMPLE).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(grammar.name(grammar.start()), "S");
    assert_eq!(grammar.non_terminals().len(), 2);
    assert_eq!(grammar.terminals().len(), 2);
    assert_eq!(
        grammar.render_productions("A").ok(),
        Some("A -> a A\nA -> b".to_owned())
    );
    // Two alternatives for A, one for S, plus the augmented production.
    assert_eq!(grammar.productions().len(), 4);
}

#[test]
fn blank_lines_and_padding_are_ignored() {
    let source = "\n  non-terminals:  S \n\nterminals: x\nstart:S\n\n   S  ->   x  x \n";
    let grammar = parse_grammar(source).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(grammar.render_productions("S").ok(), Some("S -> x x".to_owned()));
}

#[test]
fn empty_right_hand_side() {
    let source = "non-terminals: S\nterminals: a\nstart: S\nS -> a S\nS ->\n";
    let grammar = parse_grammar(source).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(
        grammar.render_productions("S").ok(),
        Some("S -> a S\nS -> ε".to_owned())
    );
}

#[test]
fn colon_terminal_survives_header_split() {
    let source = "non-terminals: S\nterminals: : ;\nstart: S\nS -> : ;\n";
    let grammar = parse_grammar(source).unwrap_or_else(|e| panic!("{e}"));
    let terminals: Vec<&str> = grammar.terminals().iter().map(|&t| grammar.name(t)).collect();
    assert_eq!(terminals, vec![":", ";"]);
}

#[test]
fn missing_arrow_is_reported_with_line() {
    let source = "non-terminals: S\nterminals: a\nstart: S\nS a\n";
    assert_eq!(
        parse_grammar(source).err(),
        Some(GrammarError::Syntax {
            line: 4,
            message: "expected `lhs -> symbols`, found `S a`".to_owned(),
        })
    );
}

#[test]
fn header_without_colon() {
    let source = "non-terminals S\nterminals: a\nstart: S\n";
    assert!(matches!(
        parse_grammar(source),
        Err(GrammarError::Syntax { line: 1, .. })
    ));
}

#[test]
fn missing_headers() {
    assert!(matches!(
        parse_grammar("non-terminals: S\n"),
        Err(GrammarError::Syntax { line: 0, .. })
    ));
}

#[test]
fn start_must_be_single_symbol() {
    let source = "non-terminals: S\nterminals: a\nstart: S T\nS -> a\n";
    assert!(matches!(
        parse_grammar(source),
        Err(GrammarError::Syntax { line: 3, .. })
    ));
    let source = "non-terminals: S\nterminals: a\nstart:\nS -> a\n";
    assert!(matches!(
        parse_grammar(source),
        Err(GrammarError::Syntax { line: 3, .. })
    ));
}

#[test]
fn multi_symbol_lhs_is_rejected() {
    let source = "non-terminals: S\nterminals: a\nstart: S\nS T -> a\n";
    assert!(matches!(
        parse_grammar(source),
        Err(GrammarError::Syntax { line: 4, .. })
    ));
}

#[test]
fn header_label_must_match_position() {
    let source = "terminals: a b\nnon-terminals: S\nstart: S\nS -> a\n";
    assert_eq!(
        parse_grammar(source).err(),
        Some(GrammarError::Syntax {
            line: 1,
            message: "expected `non-terminals: ...`, found `terminals: a b`".to_owned(),
        })
    );

    let source = "non-terminals: S\nterminals: a\nbegin: S\nS -> a\n";
    assert!(matches!(
        parse_grammar(source),
        Err(GrammarError::Syntax { line: 3, .. })
    ));
}
