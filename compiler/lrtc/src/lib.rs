//! lrt driver.
//!
//! Ties the pipeline together:
//!
//! ```text
//! grammar text ──► Grammar ──► Automaton ──► ParsingTable ──► ShiftReduceParser
//! ```
//!
//! [`CompiledGrammar`] owns every stage so callers can compile once and
//! parse many inputs.

use std::sync::Once;

mod compiled;

pub use compiled::CompiledGrammar;
pub use lrt_automaton::{Conflict, ConflictKind, ReducePolicy, TableConfig, TableConflicts};
pub use lrt_grammar::{Grammar, GrammarError};
pub use lrt_parse::{ParseError, ParseTree, PifEntry, SymbolTable, Token};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber for the lrt crates.
///
/// Does nothing unless `RUST_LOG` is set, and only the first call has any
/// effect. Enable with `RUST_LOG=lrt_automaton=debug` or
/// `RUST_LOG=lrt_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A subscriber installed by the host application wins.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
