use lrt_grammar::parse_grammar;
use pretty_assertions::assert_eq;

use super::*;

fn two_a() -> Grammar {
    parse_grammar("non-terminals: S A\nterminals: a b\nstart: S\nS -> A A\nA -> a A\nA -> b\n")
        .unwrap_or_else(|e| panic!("{e}"))
}

fn symbol(grammar: &Grammar, name: &str) -> Symbol {
    grammar
        .symbol(name)
        .unwrap_or_else(|| panic!("`{name}` is interned"))
}

#[test]
fn two_a_grammar_has_seven_states() {
    let grammar = two_a();
    let automaton = Automaton::build(&grammar);
    assert_eq!(automaton.len(), 7);
    assert!(!automaton.is_empty());
}

#[test]
fn initial_state_is_closure_of_start_item() {
    let grammar = two_a();
    let automaton = Automaton::build(&grammar);
    let expected = closure(&grammar, [Lr0Item::new(grammar.augmented_production(), 0)]);
    assert_eq!(automaton.state(StateId::INITIAL), Some(&expected));
}

#[test]
fn states_are_numbered_in_discovery_order() {
    let grammar = two_a();
    let automaton = Automaton::build(&grammar);
    let from_initial: Vec<(String, u32)> = ["A", "a", "b", "S"]
        .iter()
        .filter_map(|&name| {
            automaton
                .transition(StateId::INITIAL, symbol(&grammar, name))
                .map(|to| (name.to_owned(), to.raw()))
        })
        .collect();
    assert_eq!(
        from_initial,
        vec![
            ("A".to_owned(), 1),
            ("a".to_owned(), 2),
            ("b".to_owned(), 3),
            ("S".to_owned(), 4),
        ]
    );
}

#[test]
fn no_two_states_are_equal() {
    let grammar = two_a();
    let automaton = Automaton::build(&grammar);
    let states = automaton.states();
    for (i, left) in states.iter().enumerate() {
        for right in &states[i + 1..] {
            assert_ne!(left, right);
        }
    }
}

#[test]
fn transitions_agree_with_goto() {
    let grammar = two_a();
    let automaton = Automaton::build(&grammar);
    for (from, symbol, to) in automaton.transitions() {
        let Some(items) = automaton.state(from) else {
            panic!("state {from} exists");
        };
        let target = goto(&grammar, items, symbol);
        assert_eq!(automaton.state_id(&target), Some(to));
    }
}

#[test]
fn loops_back_to_existing_states() {
    let grammar = two_a();
    let automaton = Automaton::build(&grammar);
    let a = symbol(&grammar, "a");
    let after_a = automaton.transition(StateId::INITIAL, a);
    let after_aa = after_a.and_then(|state| automaton.transition(state, a));
    assert_eq!(after_a, after_aa);
}

#[test]
fn dump_states_lists_items() {
    let grammar = two_a();
    let automaton = Automaton::build(&grammar);
    let dump = automaton.dump_states(&grammar);
    assert!(dump.starts_with("State 0:\n"));
    assert!(dump.contains("    S' -> . S\n"));
    assert!(dump.contains("State 6:\n"));
    assert!(dump.contains("    A -> a A .\n"));
    assert!(!dump.contains("State 7:"));
}
