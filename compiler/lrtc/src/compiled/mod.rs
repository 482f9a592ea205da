//! Compiled grammar: grammar, automaton and table built together.

use lrt_automaton::{Automaton, Conflict, ParsingTable, TableConfig, TableConflicts};
use lrt_grammar::{parse_grammar, Grammar, GrammarError};
use lrt_parse::{resolve_tokens, ParseError, ParseTree, PifEntry, ShiftReduceParser, SymbolTable, Token};


/// A grammar with its LR(0) automaton and parsing table.
///
/// Immutable after construction; share it freely between parses.
#[derive(Clone, Debug)]
pub struct CompiledGrammar {
    grammar: Grammar,
    automaton: Automaton,
    table: ParsingTable,
}

impl CompiledGrammar {
    /// Build the automaton and table for `grammar`.
    ///
    /// Conflicts do not fail compilation; inspect [`conflicts`](Self::conflicts)
    /// or call [`deny_conflicts`](Self::deny_conflicts).
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn new(grammar: Grammar, config: TableConfig) -> Self {
        let automaton = Automaton::build(&grammar);
        let table = ParsingTable::build(&grammar, &automaton, config);
        tracing::debug!(
            states = automaton.len(),
            conflicts = table.conflicts().len(),
            "grammar compiled"
        );
        CompiledGrammar {
            grammar,
            automaton,
            table,
        }
    }

    /// Parse grammar text and compile it with the default table options.
    pub fn from_text(source: &str) -> Result<Self, GrammarError> {
        Self::from_text_with(source, TableConfig::default())
    }

    pub fn from_text_with(source: &str, config: TableConfig) -> Result<Self, GrammarError> {
        Ok(Self::new(parse_grammar(source)?, config))
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn table(&self) -> &ParsingTable {
        &self.table
    }

    pub fn parser(&self) -> ShiftReduceParser<'_> {
        ShiftReduceParser::new(&self.grammar, &self.table)
    }

    /// Parse whitespace-separated symbol names.
    pub fn parse_str(&self, input: &str) -> Result<ParseTree, ParseError> {
        self.parser().parse_symbols(input)
    }

    pub fn parse_tokens(&self, tokens: &[Token]) -> Result<ParseTree, ParseError> {
        self.parser().parse_tokens(tokens)
    }

    /// Resolve a scanner's PIF against its symbol table, then parse.
    pub fn parse_pif<T>(&self, pif: &[PifEntry], symbols: &T) -> Result<ParseTree, ParseError>
    where
        T: SymbolTable + ?Sized,
    {
        let tokens = resolve_tokens(pif, symbols)?;
        self.parse_tokens(&tokens)
    }

    pub fn conflicts(&self) -> &[Conflict] {
        self.table.conflicts()
    }

    pub fn deny_conflicts(&self) -> Result<(), TableConflicts> {
        self.table.deny_conflicts()
    }

    pub fn dump_states(&self) -> String {
        self.automaton.dump_states(&self.grammar)
    }

    pub fn dump_table(&self) -> String {
        self.table.dump_table(&self.grammar)
    }
}
