//! Grammar construction and lookup errors.

use thiserror::Error;

/// Errors reported by the grammar model.
///
/// `NotContextFree` is advisory: it is produced by
/// [`Grammar::check_context_free`](crate::Grammar::check_context_free) and
/// never prevents a grammar from being built.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum GrammarError {
    /// A non-terminal was looked up that has no productions.
    #[error("unknown symbol `{name}`: no productions are defined for it")]
    UnknownSymbol { name: String },

    /// A production's left-hand side is not a declared non-terminal.
    #[error("grammar is not context-free: left-hand side `{symbol}` is not a declared non-terminal")]
    NotContextFree { symbol: String },

    /// No start symbol was given.
    #[error("grammar has no start symbol")]
    MissingStartSymbol,

    /// A grammar symbol collides with the end-of-input marker.
    #[error("`{name}` is reserved for the end-of-input marker")]
    ReservedSymbol { name: String },

    /// Malformed grammar text.
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },
}
