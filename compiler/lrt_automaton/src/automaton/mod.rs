//! Canonical collection of LR(0) states.
//!
//! State 0 is the closure of `S' -> . S`. States are explored in discovery
//! order; for every distinct symbol after a dot, `goto` yields the successor,
//! which is either an existing state (matched by item-set equality) or a new
//! one appended to the collection. Exploration stops when every discovered
//! state has been expanded, which happens because the number of distinct
//! item sets over a finite grammar is finite.

use lrt_grammar::{Grammar, Symbol};
use rustc_hash::FxHashMap;
use std::fmt::Write as _;

use crate::{closure, goto, ItemSet, Lr0Item, StateId};

#[cfg(test)]
mod tests;

/// The LR(0) automaton: states plus their goto transitions.
#[derive(Clone, Debug)]
pub struct Automaton {
    states: Vec<ItemSet>,
    index: FxHashMap<ItemSet, StateId>,
    transitions: FxHashMap<(StateId, Symbol), StateId>,
}

impl Automaton {
    /// Build the canonical collection for an augmented grammar.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn build(grammar: &Grammar) -> Self {
        let mut automaton = Automaton {
            states: Vec::new(),
            index: FxHashMap::default(),
            transitions: FxHashMap::default(),
        };

        let start = Lr0Item::new(grammar.augmented_production(), 0);
        automaton.intern(closure(grammar, [start]));

        let mut cursor = 0;
        while cursor < automaton.states.len() {
            let from = state_id(cursor);
            for symbol in automaton.states[cursor].next_symbols(grammar) {
                let target = goto(grammar, &automaton.states[cursor], symbol);
                let (to, fresh) = automaton.intern(target);
                if fresh {
                    tracing::trace!(
                        from = from.raw(),
                        symbol = grammar.name(symbol),
                        state = to.raw(),
                        "discovered state"
                    );
                }
                automaton.transitions.insert((from, symbol), to);
            }
            cursor += 1;
        }

        tracing::debug!(
            states = automaton.states.len(),
            transitions = automaton.transitions.len(),
            "canonical collection built"
        );
        automaton
    }

    /// Return the id of `items`, adding it as a new state if unseen.
    fn intern(&mut self, items: ItemSet) -> (StateId, bool) {
        if let Some(&id) = self.index.get(&items) {
            return (id, false);
        }
        let id = state_id(self.states.len());
        self.index.insert(items.clone(), id);
        self.states.push(items);
        (id, true)
    }

    /// All states, indexed by [`StateId::index`].
    pub fn states(&self) -> &[ItemSet] {
        &self.states
    }

    pub fn state(&self, id: StateId) -> Option<&ItemSet> {
        self.states.get(id.index())
    }

    /// Iterate over states with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, &ItemSet)> + '_ {
        self.states
            .iter()
            .enumerate()
            .map(|(index, items)| (state_id(index), items))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Never true for a built automaton: state 0 always exists.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Find the state holding exactly `items`.
    pub fn state_id(&self, items: &ItemSet) -> Option<StateId> {
        self.index.get(items).copied()
    }

    /// Successor of `from` on `symbol`.
    pub fn transition(&self, from: StateId, symbol: Symbol) -> Option<StateId> {
        self.transitions.get(&(from, symbol)).copied()
    }

    /// All transitions sorted by source state, then symbol.
    pub fn transitions(&self) -> Vec<(StateId, Symbol, StateId)> {
        let mut transitions: Vec<_> = self
            .transitions
            .iter()
            .map(|(&(from, symbol), &to)| (from, symbol, to))
            .collect();
        transitions.sort_unstable();
        transitions
    }

    /// Render every state with its items, one item per line.
    pub fn dump_states(&self, grammar: &Grammar) -> String {
        let mut out = String::new();
        for (id, items) in self.iter() {
            let _ = writeln!(out, "State {id}:");
            for item in items.iter() {
                let _ = writeln!(out, "    {}", item.display(grammar));
            }
        }
        out
    }
}

fn state_id(index: usize) -> StateId {
    StateId::new(u32::try_from(index).unwrap_or(u32::MAX))
}
