//! LR(0) automaton and parsing-table construction.
//!
//! # Pipeline
//!
//! ```text
//! Grammar ──► closure / goto ──► Automaton ──► ParsingTable
//!             (item sets)        (states,      (ACTION, GOTO,
//!                                 transitions)  conflicts)
//! ```
//!
//! Items and item sets are value types with structural equality, so states
//! are deduplicated by content. Both the automaton and the table are
//! immutable once built and can be shared across parses.
//!
//! Table construction never fails: colliding ACTION entries keep the first
//! action and are recorded as [`Conflict`]s for the caller to inspect.

mod automaton;
mod closure;
mod item;
mod table;

pub use automaton::Automaton;
pub use closure::{closure, goto};
pub use item::{ItemDisplay, ItemSet, Lr0Item, StateId};
pub use table::{
    Action, Conflict, ConflictKind, ParsingTable, ReducePolicy, TableBuilder, TableConfig,
    TableConflicts,
};
