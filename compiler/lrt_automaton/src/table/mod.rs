//! ACTION/GOTO table construction with conflict recording.
//!
//! For each state and each item:
//!
//! | Item | Entry |
//! |------|-------|
//! | `A -> α . x β`, `x` terminal | `ACTION[s, x] = shift goto(s, x)` |
//! | `A -> α . B β`, `B` non-terminal | `GOTO[s, B] = goto(s, B)` |
//! | `S' -> S .` | `ACTION[s, $] = accept` |
//! | `A -> α .` | `ACTION[s, $] = reduce A -> α`, plus every terminal under [`ReducePolicy::EveryTerminal`] |
//!
//! The first action written for a key wins. A later, different action for
//! the same key is appended to the conflict list instead of replacing it.

mod config;
mod conflict;

use lrt_grammar::{Grammar, ProductionId, Symbol};
use rustc_hash::FxHashMap;
use std::fmt::Write as _;

use crate::{Automaton, StateId};

pub use config::{ReducePolicy, TableConfig};
pub use conflict::{Conflict, ConflictKind, TableConflicts};

#[cfg(test)]
mod tests;

/// A parser action for one `(state, symbol)` key.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Action {
    /// Consume the symbol and enter the state.
    Shift(StateId),
    /// Replace the production's right-hand side on the stack by its left-hand side.
    Reduce(ProductionId),
    Accept,
}

impl Action {
    /// Render as `shift 3`, `reduce A -> a A`, or `accept`.
    pub fn render(&self, grammar: &Grammar) -> String {
        match self {
            Action::Shift(state) => format!("shift {state}"),
            Action::Reduce(production) => {
                format!("reduce {}", grammar.render_production(*production))
            }
            Action::Accept => "accept".to_owned(),
        }
    }
}

/// ACTION and GOTO tables plus the conflicts found while building them.
///
/// Immutable once built. When [`has_conflicts`](Self::has_conflicts) is true
/// the table still answers lookups with the first-seen action per key.
#[derive(Clone, Debug)]
pub struct ParsingTable {
    actions: FxHashMap<(StateId, Symbol), Action>,
    gotos: FxHashMap<(StateId, Symbol), StateId>,
    conflicts: Vec<Conflict>,
    config: TableConfig,
    states: usize,
}

impl ParsingTable {
    /// Build the table for `automaton`, which must come from `grammar`.
    pub fn build(grammar: &Grammar, automaton: &Automaton, config: TableConfig) -> Self {
        TableBuilder::new(grammar, automaton).config(config).build()
    }

    pub fn action(&self, state: StateId, symbol: Symbol) -> Option<Action> {
        self.actions.get(&(state, symbol)).copied()
    }

    pub fn goto(&self, state: StateId, non_terminal: Symbol) -> Option<StateId> {
        self.gotos.get(&(state, non_terminal)).copied()
    }

    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// Conflicts in the order they were detected.
    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    /// Fail if any conflict was recorded.
    pub fn deny_conflicts(&self) -> Result<(), TableConflicts> {
        if self.conflicts.is_empty() {
            Ok(())
        } else {
            Err(TableConflicts {
                conflicts: self.conflicts.clone(),
            })
        }
    }

    pub fn config(&self) -> TableConfig {
        self.config
    }

    /// Number of automaton states the table was built from.
    pub fn state_count(&self) -> usize {
        self.states
    }

    /// ACTION entries sorted by state, then symbol.
    pub fn actions(&self) -> Vec<(StateId, Symbol, Action)> {
        let mut actions: Vec<_> = self
            .actions
            .iter()
            .map(|(&(state, symbol), &action)| (state, symbol, action))
            .collect();
        actions.sort_unstable_by_key(|&(state, symbol, _)| (state, symbol));
        actions
    }

    /// GOTO entries sorted by state, then non-terminal.
    pub fn gotos(&self) -> Vec<(StateId, Symbol, StateId)> {
        let mut gotos: Vec<_> = self
            .gotos
            .iter()
            .map(|(&(state, symbol), &target)| (state, symbol, target))
            .collect();
        gotos.sort_unstable();
        gotos
    }

    /// Render both tables and any conflicts.
    pub fn dump_table(&self, grammar: &Grammar) -> String {
        let mut out = String::from("Action Table:\n");
        for (state, symbol, action) in self.actions() {
            let _ = writeln!(
                out,
                "    State {state}, Symbol '{}': {}",
                grammar.name(symbol),
                action.render(grammar)
            );
        }
        out.push_str("Goto Table:\n");
        for (state, symbol, target) in self.gotos() {
            let _ = writeln!(
                out,
                "    State {state}, Symbol '{}': {target}",
                grammar.name(symbol)
            );
        }
        if self.has_conflicts() {
            out.push_str("Conflicts:\n");
            for conflict in &self.conflicts {
                let _ = writeln!(out, "    {}", conflict.render(grammar));
            }
        }
        out
    }
}

/// Walks an automaton and fills a [`ParsingTable`].
pub struct TableBuilder<'a> {
    grammar: &'a Grammar,
    automaton: &'a Automaton,
    config: TableConfig,
}

impl<'a> TableBuilder<'a> {
    pub fn new(grammar: &'a Grammar, automaton: &'a Automaton) -> Self {
        TableBuilder {
            grammar,
            automaton,
            config: TableConfig::default(),
        }
    }

    #[must_use]
    pub fn config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    #[tracing::instrument(level = "debug", skip_all, fields(states = self.automaton.len()))]
    pub fn build(self) -> ParsingTable {
        let grammar = self.grammar;
        let mut table = ParsingTable {
            actions: FxHashMap::default(),
            gotos: FxHashMap::default(),
            conflicts: Vec::new(),
            config: self.config,
            states: self.automaton.len(),
        };

        for (state, items) in self.automaton.iter() {
            for item in items.iter() {
                if let Some(symbol) = item.next_symbol(grammar) {
                    let Some(target) = self.automaton.transition(state, symbol) else {
                        continue;
                    };
                    if grammar.is_non_terminal(symbol) {
                        table.gotos.insert((state, symbol), target);
                    } else {
                        record(grammar, &mut table, state, symbol, Action::Shift(target));
                    }
                } else if item.production() == grammar.augmented_production() {
                    record(grammar, &mut table, state, Symbol::END, Action::Accept);
                } else {
                    let reduce = Action::Reduce(item.production());
                    record(grammar, &mut table, state, Symbol::END, reduce);
                    if self.config.reduce_policy == ReducePolicy::EveryTerminal {
                        for &terminal in grammar.terminals() {
                            record(grammar, &mut table, state, terminal, reduce);
                        }
                    }
                }
            }
        }

        tracing::debug!(
            actions = table.actions.len(),
            gotos = table.gotos.len(),
            conflicts = table.conflicts.len(),
            "parsing table built"
        );
        table
    }
}

/// Write `action` unless the key is taken; a different occupant is a conflict.
fn record(
    grammar: &Grammar,
    table: &mut ParsingTable,
    state: StateId,
    symbol: Symbol,
    action: Action,
) {
    match table.actions.get(&(state, symbol)) {
        None => {
            table.actions.insert((state, symbol), action);
        }
        Some(&kept) if kept == action => {}
        Some(&kept) => {
            let conflict = Conflict {
                state,
                symbol,
                kept,
                rejected: action,
            };
            tracing::warn!(conflict = %conflict.render(grammar), "table conflict");
            table.conflicts.push(conflict);
        }
    }
}
