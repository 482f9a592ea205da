//! Grammar model for the lrt LR(0) parser generator.
//!
//! A [`Grammar`] holds interned symbols, the ordered productions of every
//! non-terminal, and the declared terminal and non-terminal sets. Building a
//! grammar always augments it with a synthetic start production
//! `S' -> S`, which the automaton uses to detect acceptance.
//!
//! # Construction
//!
//! ```text
//! GrammarBuilder ──┐
//!                  ├──► Grammar (immutable, augmented)
//! parse_grammar ───┘
//! ```
//!
//! Grammars are built either programmatically through [`GrammarBuilder`] or
//! from the line-oriented text format accepted by [`parse_grammar`].

mod error;
mod grammar;
mod production;
mod symbol;
mod text;

pub use error::GrammarError;
pub use grammar::{Grammar, GrammarBuilder};
pub use production::{Production, ProductionId};
pub use symbol::{Symbol, SymbolKind, Vocabulary};
pub use text::parse_grammar;
