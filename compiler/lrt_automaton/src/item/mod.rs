//! LR(0) items, item sets, and state ids.

use lrt_grammar::{Grammar, ProductionId, Symbol};
use std::fmt;


/// A production with a dot marking how much of it has been matched.
///
/// Items refer to their production by id. Grammars deduplicate productions,
/// so equality here is equality of `(lhs, rhs, dot)`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Debug)]
pub struct Lr0Item {
    production: ProductionId,
    dot: u32,
}

impl Lr0Item {
    #[inline]
    pub const fn new(production: ProductionId, dot: u32) -> Self {
        Lr0Item { production, dot }
    }

    #[inline]
    pub const fn production(self) -> ProductionId {
        self.production
    }

    #[inline]
    pub const fn dot(self) -> usize {
        self.dot as usize
    }

    pub fn lhs(self, grammar: &Grammar) -> Symbol {
        grammar.production(self.production).lhs()
    }

    pub fn rhs(self, grammar: &Grammar) -> &[Symbol] {
        grammar.production(self.production).rhs()
    }

    /// The symbol right after the dot, or `None` when the item is complete.
    pub fn next_symbol(self, grammar: &Grammar) -> Option<Symbol> {
        self.rhs(grammar).get(self.dot()).copied()
    }

    pub fn is_complete(self, grammar: &Grammar) -> bool {
        self.dot() >= self.rhs(grammar).len()
    }

    /// The same item with the dot moved one symbol to the right.
    #[inline]
    #[must_use]
    pub const fn advance(self) -> Self {
        Lr0Item {
            production: self.production,
            dot: self.dot + 1,
        }
    }

    /// Display as `A -> a . A`.
    pub fn display(self, grammar: &Grammar) -> ItemDisplay<'_> {
        ItemDisplay {
            item: self,
            grammar,
        }
    }
}

/// [`Lr0Item`] paired with the grammar that names its symbols.
pub struct ItemDisplay<'g> {
    item: Lr0Item,
    grammar: &'g Grammar,
}

impl fmt::Display for ItemDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grammar = self.grammar;
        write!(f, "{} ->", grammar.name(self.item.lhs(grammar)))?;
        for (position, &symbol) in self.item.rhs(grammar).iter().enumerate() {
            if position == self.item.dot() {
                write!(f, " .")?;
            }
            write!(f, " {}", grammar.name(symbol))?;
        }
        if self.item.is_complete(grammar) {
            write!(f, " .")?;
        }
        Ok(())
    }
}

/// A set of items in canonical (sorted, deduplicated) order.
///
/// Two sets holding the same items compare and hash equal regardless of the
/// order they were built in, which is what state deduplication relies on.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ItemSet {
    items: Vec<Lr0Item>,
}

impl ItemSet {
    pub fn new(items: impl IntoIterator<Item = Lr0Item>) -> Self {
        let mut items: Vec<Lr0Item> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        ItemSet { items }
    }

    pub fn items(&self) -> &[Lr0Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = Lr0Item> + '_ {
        self.items.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: Lr0Item) -> bool {
        self.items.binary_search(&item).is_ok()
    }

    /// Distinct symbols that appear right after a dot, in item order.
    pub fn next_symbols(&self, grammar: &Grammar) -> Vec<Symbol> {
        let mut symbols = Vec::new();
        for item in self.iter() {
            if let Some(symbol) = item.next_symbol(grammar) {
                if !symbols.contains(&symbol) {
                    symbols.push(symbol);
                }
            }
        }
        symbols
    }
}

impl FromIterator<Lr0Item> for ItemSet {
    fn from_iter<I: IntoIterator<Item = Lr0Item>>(iter: I) -> Self {
        ItemSet::new(iter)
    }
}

/// Index of a state in the canonical collection.
///
/// Assigned in first-discovery order; state 0 is the initial state.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct StateId(u32);

impl StateId {
    /// The initial state.
    pub const INITIAL: StateId = StateId(0);

    #[inline]
    pub const fn new(index: u32) -> Self {
        StateId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateId({})", self.0)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
