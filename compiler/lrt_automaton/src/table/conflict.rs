//! ACTION conflicts.

use lrt_grammar::{Grammar, Symbol};
use thiserror::Error;

use super::Action;
use crate::StateId;

/// Kind of collision between two actions on one key.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ConflictKind {
    ShiftReduce,
    ReduceReduce,
    /// Accept collides with a reduce on the end marker.
    AcceptReduce,
}

/// Two different actions written for the same `(state, symbol)` key.
///
/// `kept` is the action the table holds; `rejected` was only recorded.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Conflict {
    pub state: StateId,
    pub symbol: Symbol,
    pub kept: Action,
    pub rejected: Action,
}

impl Conflict {
    pub fn kind(&self) -> ConflictKind {
        match (self.kept, self.rejected) {
            (Action::Accept, _) | (_, Action::Accept) => ConflictKind::AcceptReduce,
            (Action::Reduce(_), Action::Reduce(_)) => ConflictKind::ReduceReduce,
            _ => ConflictKind::ShiftReduce,
        }
    }

    /// Render as `state 4, symbol '+': shift 3 / reduce E -> E + E`.
    pub fn render(&self, grammar: &Grammar) -> String {
        format!(
            "state {}, symbol '{}': {} / {}",
            self.state,
            grammar.name(self.symbol),
            self.kept.render(grammar),
            self.rejected.render(grammar),
        )
    }
}

/// Conflicts promoted to an error by
/// [`ParsingTable::deny_conflicts`](crate::ParsingTable::deny_conflicts).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("parsing table has {} conflict(s); the grammar is not LR(0)", .conflicts.len())]
pub struct TableConflicts {
    pub conflicts: Vec<Conflict>,
}
