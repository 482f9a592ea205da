use lrt_grammar::parse_grammar;
use pretty_assertions::assert_eq;

use super::*;

fn grammar(source: &str) -> Grammar {
    parse_grammar(source).unwrap_or_else(|e| panic!("{e}"))
}

fn two_a() -> Grammar {
    grammar("non-terminals: S A\nterminals: a b\nstart: S\nS -> A A\nA -> a A\nA -> b\n")
}

fn sums() -> Grammar {
    grammar("non-terminals: E\nterminals: + id\nstart: E\nE -> E + E\nE -> id\n")
}

fn symbol(grammar: &Grammar, name: &str) -> Symbol {
    grammar
        .symbol(name)
        .unwrap_or_else(|| panic!("`{name}` is interned"))
}

fn table(grammar: &Grammar, config: TableConfig) -> (Automaton, ParsingTable) {
    let automaton = Automaton::build(grammar);
    let table = ParsingTable::build(grammar, &automaton, config);
    (automaton, table)
}

#[test]
fn lr0_grammar_has_no_conflicts() {
    let grammar = two_a();
    let (automaton, table) = table(&grammar, TableConfig::default());
    assert!(!table.has_conflicts());
    assert!(table.deny_conflicts().is_ok());
    assert_eq!(table.state_count(), automaton.len());
}

#[test]
fn shifts_follow_transitions() {
    let grammar = two_a();
    let (automaton, table) = table(&grammar, TableConfig::default());
    for (from, symbol, to) in automaton.transitions() {
        if grammar.is_non_terminal(symbol) {
            assert_eq!(table.goto(from, symbol), Some(to));
        } else {
            assert_eq!(table.action(from, symbol), Some(Action::Shift(to)));
        }
    }
}

#[test]
fn accept_on_end_after_start_symbol() {
    let grammar = two_a();
    let (automaton, table) = table(&grammar, TableConfig::default());
    let after_start = automaton.transition(StateId::INITIAL, grammar.start());
    let Some(after_start) = after_start else {
        panic!("state 0 has a transition on the start symbol");
    };
    assert_eq!(table.action(after_start, Symbol::END), Some(Action::Accept));
    let accepts = table
        .actions()
        .into_iter()
        .filter(|&(_, _, action)| action == Action::Accept)
        .count();
    assert_eq!(accepts, 1);
}

#[test]
fn complete_item_reduces_on_every_terminal_by_default() {
    let grammar = two_a();
    let (automaton, table) = table(&grammar, TableConfig::default());
    let b = symbol(&grammar, "b");
    let Some(after_b) = automaton.transition(StateId::INITIAL, b) else {
        panic!("state 0 shifts b");
    };
    let Some(Action::Reduce(production)) = table.action(after_b, Symbol::END) else {
        panic!("state {after_b} reduces on $");
    };
    assert_eq!(grammar.render_production(production), "A -> b");
    for name in ["a", "b"] {
        assert_eq!(
            table.action(after_b, symbol(&grammar, name)),
            Some(Action::Reduce(production))
        );
    }
}

#[test]
fn end_of_input_policy_reduces_only_on_end() {
    let grammar = two_a();
    let config = TableConfig::new().with_reduce_policy(ReducePolicy::EndOfInputOnly);
    let (automaton, table) = table(&grammar, config);
    assert_eq!(table.config(), config);
    let Some(after_b) = automaton.transition(StateId::INITIAL, symbol(&grammar, "b")) else {
        panic!("state 0 shifts b");
    };
    assert!(matches!(
        table.action(after_b, Symbol::END),
        Some(Action::Reduce(_))
    ));
    assert_eq!(table.action(after_b, symbol(&grammar, "a")), None);
    assert_eq!(table.action(after_b, symbol(&grammar, "b")), None);
}

#[test]
fn ambiguous_sum_has_one_shift_reduce_conflict() {
    let grammar = sums();
    let (_, table) = table(&grammar, TableConfig::default());
    let plus = symbol(&grammar, "+");

    assert_eq!(table.conflicts().len(), 1);
    let conflict = table.conflicts()[0];
    assert_eq!(conflict.kind(), ConflictKind::ShiftReduce);
    assert_eq!(conflict.symbol, plus);
    assert_eq!(conflict.state, StateId::new(4));
    assert_eq!(conflict.kept, Action::Shift(StateId::new(3)));
    assert_eq!(table.action(conflict.state, plus), Some(conflict.kept));
    assert_eq!(
        conflict.render(&grammar),
        "state 4, symbol '+': shift 3 / reduce E -> E + E"
    );
}

#[test]
fn ambiguous_sum_is_conflict_free_when_reducing_on_end_only() {
    let grammar = sums();
    let config = TableConfig::new().with_reduce_policy(ReducePolicy::EndOfInputOnly);
    let (_, table) = table(&grammar, config);
    assert!(!table.has_conflicts());
}

#[test]
fn reduce_reduce_conflict() {
    let grammar = grammar(
        "non-terminals: S A B\nterminals: a\nstart: S\nS -> A\nS -> B\nA -> a\nB -> a\n",
    );
    let (_, table) = table(&grammar, TableConfig::default());
    assert!(table.has_conflicts());
    assert!(table
        .conflicts()
        .iter()
        .all(|conflict| conflict.kind() == ConflictKind::ReduceReduce));
    let on_end = table
        .conflicts()
        .iter()
        .find(|conflict| conflict.symbol == Symbol::END);
    let Some(on_end) = on_end else {
        panic!("a conflict on $ is recorded");
    };
    assert_eq!(
        on_end.render(&grammar),
        format!(
            "state {}, symbol '$': reduce A -> a / reduce B -> a",
            on_end.state
        )
    );
}

#[test]
fn accept_reduce_conflict() {
    let grammar = grammar("non-terminals: S\nterminals: a\nstart: S\nS -> S\nS -> a\n");
    let (_, table) = table(&grammar, TableConfig::default());
    let accept = table
        .conflicts()
        .iter()
        .find(|conflict| conflict.kind() == ConflictKind::AcceptReduce);
    let Some(accept) = accept else {
        panic!("accept collides with reduce S -> S");
    };
    assert_eq!(accept.symbol, Symbol::END);
    assert_eq!(accept.rejected, Action::Accept);
}

#[test]
fn deny_conflicts_reports_every_conflict() {
    let grammar = sums();
    let (_, table) = table(&grammar, TableConfig::default());
    let Err(error) = table.deny_conflicts() else {
        panic!("E -> E + E is not LR(0)");
    };
    assert_eq!(error.conflicts, table.conflicts());
    assert_eq!(
        error.to_string(),
        "parsing table has 1 conflict(s); the grammar is not LR(0)"
    );
}

#[test]
fn dump_table_lists_actions_and_gotos() {
    let grammar = two_a();
    let (_, table) = table(&grammar, TableConfig::default());
    let dump = table.dump_table(&grammar);
    assert!(dump.starts_with("Action Table:\n"));
    assert!(dump.contains("    State 0, Symbol 'a': shift 2\n"));
    assert!(dump.contains("    State 0, Symbol 'b': shift 3\n"));
    assert!(dump.contains("    State 3, Symbol '$': reduce A -> b\n"));
    assert!(dump.contains("    State 4, Symbol '$': accept\n"));
    assert!(dump.contains("Goto Table:\n    State 0, Symbol 'S': 4\n    State 0, Symbol 'A': 1\n"));
    assert!(!dump.contains("Conflicts:"));
}

#[test]
fn dump_table_appends_conflicts() {
    let grammar = sums();
    let (_, table) = table(&grammar, TableConfig::default());
    let dump = table.dump_table(&grammar);
    assert!(dump.ends_with("Conflicts:\n    state 4, symbol '+': shift 3 / reduce E -> E + E\n"));
}

#[test]
fn action_render() {
    let grammar = two_a();
    assert_eq!(Action::Shift(StateId::new(2)).render(&grammar), "shift 2");
    assert_eq!(Action::Accept.render(&grammar), "accept");
    let Some(&first) = grammar.alternatives(symbol(&grammar, "A")).first() else {
        panic!("A has alternatives");
    };
    assert_eq!(Action::Reduce(first).render(&grammar), "reduce A -> a A");
}
