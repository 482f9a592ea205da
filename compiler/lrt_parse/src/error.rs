//! Parse-time errors.

use lrt_automaton::StateId;
use thiserror::Error;

/// Why a parse stopped.
///
/// Every variant aborts only the current parse; the grammar and table are
/// left untouched.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    /// The table has no action for the current state and input symbol.
    #[error("unexpected symbol '{symbol}' at position {position} in state {state}{}", value_suffix(.value.as_deref()))]
    UnexpectedSymbol {
        state: StateId,
        symbol: String,
        value: Option<String>,
        position: usize,
    },

    /// The table disagrees with the grammar: a reduce names an unknown
    /// production, finds no GOTO entry, or runs out of stack.
    #[error("malformed parsing table in state {state}: {reason}")]
    MalformedTable { state: StateId, reason: String },

    /// The table kept reducing without consuming input.
    #[error("parser stopped making progress at position {position} in state {state}")]
    ReduceLoop { state: StateId, position: usize },

    /// Accept was reached before the whole input was consumed.
    #[error("input accepted at position {position} with {remaining} symbol(s) left over")]
    IncompleteParse { position: usize, remaining: usize },

    /// A PIF entry points at a symbol-table index that does not exist.
    #[error("token {position} refers to missing symbol table entry {index}")]
    UnresolvedToken { position: usize, index: usize },
}

fn value_suffix(value: Option<&str>) -> String {
    value.map_or_else(String::new, |value| format!(" (value '{value}')"))
}
