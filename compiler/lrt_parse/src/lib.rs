//! Shift-reduce parsing over a prebuilt LR(0) table.
//!
//! # Pipeline
//!
//! ```text
//! PIF + symbol table ──► resolve_tokens ──┐
//!                                         ├──► ShiftReduceParser ──► ParseTree
//! "a a b" (raw symbols) ──────────────────┘
//! ```
//!
//! The parser borrows a [`Grammar`](lrt_grammar::Grammar) and a
//! [`ParsingTable`](lrt_automaton::ParsingTable) and owns nothing but its
//! per-call stacks, so one table serves any number of parses.

mod engine;
mod error;
mod token;
mod tree;

pub use engine::ShiftReduceParser;
pub use error::ParseError;
pub use token::{resolve_tokens, PifEntry, SymbolTable, Token};
pub use tree::{Node, NodeId, ParseTree, Preorder, TreeRow};
