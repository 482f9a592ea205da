//! Table-driven shift-reduce loop.
//!
//! Two stacks move in lockstep: states (starting at state 0) and tree nodes
//! (one per grammar symbol recognized so far, always one shorter than the
//! state stack). The input gets a virtual end marker `$` after its last
//! token.
//!
//! Reduces between two shifts are capped at the stack depth plus one empty
//! reduce per (state, production) pair. A table whose first-seen actions
//! cycle through empty productions hits the cap and fails with
//! [`ParseError::ReduceLoop`] instead of spinning.

use lrt_automaton::{Action, ParsingTable, StateId};
use lrt_grammar::{Grammar, Symbol};

use crate::{ParseError, ParseTree, Token};


/// Parses token streams with a prebuilt table.
///
/// Cheap to construct; holds only borrows. Each call owns its stacks.
#[derive(Copy, Clone, Debug)]
pub struct ShiftReduceParser<'a> {
    grammar: &'a Grammar,
    table: &'a ParsingTable,
}

impl<'a> ShiftReduceParser<'a> {
    /// `table` must have been built from `grammar`.
    pub fn new(grammar: &'a Grammar, table: &'a ParsingTable) -> Self {
        ShiftReduceParser { grammar, table }
    }

    /// Parse whitespace-separated symbol names, e.g. `"a a b"`.
    pub fn parse_symbols(&self, input: &str) -> Result<ParseTree, ParseError> {
        let tokens: Vec<Token> = input.split_whitespace().map(Token::new).collect();
        self.parse_tokens(&tokens)
    }

    /// Parse typed tokens. Only [`Token::kind`] drives the table.
    #[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
    pub fn parse_tokens(&self, tokens: &[Token]) -> Result<ParseTree, ParseError> {
        let result = self.run(tokens);
        if let Err(error) = &result {
            tracing::debug!(%error, "parse failed");
        }
        result
    }

    fn run(&self, tokens: &[Token]) -> Result<ParseTree, ParseError> {
        let grammar = self.grammar;
        let mut tree = ParseTree::new();
        let mut states: Vec<StateId> = vec![StateId::INITIAL];
        let mut nodes = Vec::new();
        let mut position = 0;
        let empty_reduce_budget = self
            .table
            .state_count()
            .saturating_mul(grammar.productions().len());
        let mut reduce_budget = states.len().saturating_add(empty_reduce_budget);

        loop {
            let state = states.last().copied().unwrap_or(StateId::INITIAL);
            let token = tokens.get(position);
            let symbol = match token {
                None => Some(Symbol::END),
                Some(token) => grammar.symbol(&token.kind),
            };
            let action = symbol.and_then(|symbol| self.table.action(state, symbol));

            match action {
                Some(Action::Shift(next)) => {
                    let (symbol, token) = match (symbol, token) {
                        (Some(symbol), Some(token)) => (symbol, token),
                        // The virtual end marker is never shifted.
                        _ => return Err(malformed(state, "shift on the end marker")),
                    };
                    tracing::trace!(state = state.raw(), symbol = %token.kind, next = next.raw(), "shift");
                    nodes.push(tree.add_leaf(symbol, token.text()));
                    states.push(next);
                    position += 1;
                    reduce_budget = states.len().saturating_add(empty_reduce_budget);
                }
                Some(Action::Reduce(id)) => {
                    let Some(production) = grammar.productions().get(id.index()) else {
                        return Err(malformed(
                            state,
                            format!("reduce by unknown production {}", id.raw()),
                        ));
                    };
                    if reduce_budget == 0 {
                        return Err(ParseError::ReduceLoop { state, position });
                    }
                    reduce_budget -= 1;
                    let lhs = production.lhs();
                    let arity = production.len();
                    if arity > nodes.len() || arity >= states.len() {
                        return Err(malformed(
                            state,
                            format!("stack underflow reducing '{}'", grammar.name(lhs)),
                        ));
                    }
                    let children = nodes.split_off(nodes.len() - arity);
                    states.truncate(states.len() - arity);
                    let top = states.last().copied().unwrap_or(StateId::INITIAL);
                    let Some(next) = self.table.goto(top, lhs) else {
                        return Err(malformed(top, format!("no goto on '{}'", grammar.name(lhs))));
                    };
                    tracing::trace!(
                        state = state.raw(),
                        lhs = grammar.name(lhs),
                        arity,
                        next = next.raw(),
                        "reduce"
                    );
                    nodes.push(tree.add_parent(lhs, &children));
                    states.push(next);
                }
                Some(Action::Accept) => {
                    let Some(&root) = nodes.last() else {
                        return Err(malformed(state, "accept with an empty stack"));
                    };
                    // A literal `$` token accepts early; anything after it is left over.
                    let consumed = (position + 1).min(tokens.len());
                    if consumed < tokens.len() {
                        return Err(ParseError::IncompleteParse {
                            position: consumed,
                            remaining: tokens.len() - consumed,
                        });
                    }
                    tracing::trace!(state = state.raw(), nodes = tree.len(), "accept");
                    tree.set_root(root);
                    return Ok(tree);
                }
                None => {
                    return Err(ParseError::UnexpectedSymbol {
                        state,
                        symbol: token.map_or_else(
                            || grammar.name(Symbol::END).to_owned(),
                            |token| token.kind.clone(),
                        ),
                        value: token.and_then(|token| token.value.clone()),
                        position,
                    });
                }
            }
        }
    }
}

fn malformed(state: StateId, reason: impl Into<String>) -> ParseError {
    ParseError::MalformedTable {
        state,
        reason: reason.into(),
    }
}
