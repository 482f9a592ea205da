//! Closure and goto over LR(0) item sets.
//!
//! # Algorithm
//!
//! Closure is a worklist fixed point: every item whose next symbol is a
//! non-terminal `B` pulls in `B -> . γ` for each production of `B`. Each
//! non-terminal is expanded at most once, and the result only grows, so the
//! loop terminates after at most one visit per item of the finite item
//! universe.
//!
//! Both functions are pure: the output depends only on the grammar and the
//! input set, never on the order items were supplied in.

use lrt_grammar::{Grammar, Symbol};
use rustc_hash::FxHashSet;

use crate::{ItemSet, Lr0Item};


/// Close `kernel` under non-terminal expansion.
pub fn closure(grammar: &Grammar, kernel: impl IntoIterator<Item = Lr0Item>) -> ItemSet {
    let mut items: FxHashSet<Lr0Item> = FxHashSet::default();
    let mut worklist: Vec<Lr0Item> = Vec::new();
    for item in kernel {
        if items.insert(item) {
            worklist.push(item);
        }
    }

    let mut expanded: FxHashSet<Symbol> = FxHashSet::default();
    while let Some(item) = worklist.pop() {
        let Some(next) = item.next_symbol(grammar) else {
            continue;
        };
        if !expanded.insert(next) {
            continue;
        }
        // Terminals have no alternatives.
        for &production in grammar.alternatives(next) {
            let fresh = Lr0Item::new(production, 0);
            if items.insert(fresh) {
                worklist.push(fresh);
            }
        }
    }

    ItemSet::new(items)
}

/// Advance the dot over `symbol` in every item that allows it, then close.
///
/// Returns an empty set when no item in `items` has `symbol` after its dot.
pub fn goto(grammar: &Grammar, items: &ItemSet, symbol: Symbol) -> ItemSet {
    let kernel = items
        .iter()
        .filter(|item| item.next_symbol(grammar) == Some(symbol))
        .map(Lr0Item::advance);
    closure(grammar, kernel)
}
