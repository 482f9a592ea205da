//! The augmented grammar and its builder.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use std::fmt;

use crate::{GrammarError, Production, ProductionId, Symbol, SymbolKind, Vocabulary};


/// Marker appended to the start symbol to name the augmented start symbol.
const AUGMENT_MARKER: char = '\'';

/// An augmented context-free grammar.
///
/// Immutable once built. Productions keep declaration order; the synthetic
/// production `S' -> S` is always the last one.
#[derive(Clone, Debug)]
pub struct Grammar {
    vocabulary: Vocabulary,
    productions: Vec<Production>,
    /// Productions of each non-terminal, in declaration order.
    alternatives: FxHashMap<Symbol, Vec<ProductionId>>,
    /// Declared terminals followed by implicit ones (undeclared RHS symbols).
    terminals: Vec<Symbol>,
    /// Declared non-terminals, in declaration order.
    non_terminals: Vec<Symbol>,
    /// Left-hand sides in first-appearance order.
    lhs_order: Vec<Symbol>,
    start: Symbol,
    augmented_start: Symbol,
    augmented_production: ProductionId,
}

impl Grammar {
    /// Start building a grammar.
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::default()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Look up a symbol by name.
    pub fn symbol(&self, name: &str) -> Option<Symbol> {
        self.vocabulary.lookup(name)
    }

    /// Name of a symbol.
    pub fn name(&self, symbol: Symbol) -> &str {
        self.vocabulary.name(symbol)
    }

    pub fn kind(&self, symbol: Symbol) -> SymbolKind {
        self.vocabulary.kind(symbol)
    }

    #[inline]
    pub fn is_non_terminal(&self, symbol: Symbol) -> bool {
        self.kind(symbol) == SymbolKind::NonTerminal
    }

    #[inline]
    pub fn is_terminal(&self, symbol: Symbol) -> bool {
        self.kind(symbol).is_terminal()
    }

    /// All productions, including the augmented one.
    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    /// Iterate over production ids with their productions.
    pub fn production_ids(&self) -> impl Iterator<Item = (ProductionId, &Production)> + '_ {
        self.productions.iter().enumerate().map(|(index, production)| {
            let index = u32::try_from(index).unwrap_or(u32::MAX);
            (ProductionId::new(index), production)
        })
    }

    /// Get a production by id.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this grammar.
    pub fn production(&self, id: ProductionId) -> &Production {
        &self.productions[id.index()]
    }

    /// Production ids of a non-terminal; empty for terminals and for
    /// non-terminals without productions.
    pub fn alternatives(&self, symbol: Symbol) -> &[ProductionId] {
        self.alternatives
            .get(&symbol)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Ordered productions of the named non-terminal.
    pub fn productions_for(&self, non_terminal: &str) -> Result<Vec<&Production>, GrammarError> {
        let ids = self
            .symbol(non_terminal)
            .and_then(|symbol| self.alternatives.get(&symbol))
            .ok_or_else(|| GrammarError::UnknownSymbol {
                name: non_terminal.to_owned(),
            })?;
        Ok(ids.iter().map(|&id| self.production(id)).collect())
    }

    /// Declared and implicit terminals. Never contains the end marker.
    pub fn terminals(&self) -> &[Symbol] {
        &self.terminals
    }

    /// Declared non-terminals.
    pub fn non_terminals(&self) -> &[Symbol] {
        &self.non_terminals
    }

    /// The declared start symbol.
    pub fn start(&self) -> Symbol {
        self.start
    }

    /// The synthetic start symbol `S'`.
    pub fn augmented_start(&self) -> Symbol {
        self.augmented_start
    }

    /// The synthetic production `S' -> S`.
    pub fn augmented_production(&self) -> ProductionId {
        self.augmented_production
    }

    /// Check that every left-hand side is a declared non-terminal.
    ///
    /// Reports the first offending left-hand side in declaration order.
    pub fn check_context_free(&self) -> Result<(), GrammarError> {
        match self
            .lhs_order
            .iter()
            .find(|lhs| !self.non_terminals.contains(lhs))
        {
            Some(&lhs) => Err(GrammarError::NotContextFree {
                symbol: self.name(lhs).to_owned(),
            }),
            None => Ok(()),
        }
    }

    pub fn is_context_free(&self) -> bool {
        self.check_context_free().is_ok()
    }

    /// Render one production as `lhs -> rhs`.
    pub fn render_production(&self, id: ProductionId) -> String {
        let production = self.production(id);
        let mut out = format!("{} ->", self.name(production.lhs()));
        if production.is_empty() {
            out.push_str(" ε");
        }
        for &symbol in production.rhs() {
            out.push(' ');
            out.push_str(self.name(symbol));
        }
        out
    }

    /// Render all productions of the named non-terminal, one per line.
    pub fn render_productions(&self, non_terminal: &str) -> Result<String, GrammarError> {
        let symbol = self.symbol(non_terminal);
        let ids = symbol
            .and_then(|symbol| self.alternatives.get(&symbol))
            .ok_or_else(|| GrammarError::UnknownSymbol {
                name: non_terminal.to_owned(),
            })?;
        let lines: Vec<String> = ids.iter().map(|&id| self.render_production(id)).collect();
        Ok(lines.join("\n"))
    }

    fn join_names(&self, symbols: &[Symbol]) -> String {
        let names: Vec<&str> = symbols.iter().map(|&symbol| self.name(symbol)).collect();
        names.join(" ")
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "non-terminals: {}", self.join_names(&self.non_terminals))?;
        writeln!(f, "terminals: {}", self.join_names(&self.terminals))?;
        writeln!(f, "productions:")?;
        for (id, _) in self.production_ids() {
            if id != self.augmented_production {
                writeln!(f, "    {}", self.render_production(id))?;
            }
        }
        write!(f, "start: {}", self.name(self.start))
    }
}

/// Builder for [`Grammar`].
///
/// # Example
///
/// ```text
/// let grammar = Grammar::builder()
///     .non_terminals(["S", "A"])
///     .terminals(["a", "b"])
///     .start("S")
///     .production("S", ["A", "A"])
///     .production("A", ["a", "A"])
///     .production("A", ["b"])
///     .build()?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct GrammarBuilder {
    non_terminals: Vec<String>,
    terminals: Vec<String>,
    start: Option<String>,
    productions: Vec<(String, Vec<String>)>,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn non_terminal(mut self, name: impl Into<String>) -> Self {
        self.non_terminals.push(name.into());
        self
    }

    #[must_use]
    pub fn non_terminals<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.non_terminals.extend(names.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn terminal(mut self, name: impl Into<String>) -> Self {
        self.terminals.push(name.into());
        self
    }

    #[must_use]
    pub fn terminals<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.terminals.extend(names.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn start(mut self, name: impl Into<String>) -> Self {
        self.start = Some(name.into());
        self
    }

    /// Add one alternative `lhs -> rhs`. An empty `rhs` is an empty production.
    #[must_use]
    pub fn production<I, S>(mut self, lhs: impl Into<String>, rhs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.productions
            .push((lhs.into(), rhs.into_iter().map(Into::into).collect()));
        self
    }

    /// Build and augment the grammar.
    ///
    /// Advisory problems (undeclared left-hand sides, duplicate productions,
    /// undeclared right-hand-side symbols) are logged and do not fail the build.
    #[tracing::instrument(level = "debug", skip_all, fields(productions = self.productions.len()))]
    pub fn build(self) -> Result<Grammar, GrammarError> {
        let start_name = self.start.ok_or(GrammarError::MissingStartSymbol)?;
        if start_name.trim().is_empty() {
            return Err(GrammarError::MissingStartSymbol);
        }

        let all_names = self
            .non_terminals
            .iter()
            .chain(&self.terminals)
            .chain(std::iter::once(&start_name))
            .chain(
                self.productions
                    .iter()
                    .flat_map(|(lhs, rhs)| std::iter::once(lhs).chain(rhs)),
            );
        for name in all_names {
            if name == Vocabulary::END_NAME {
                return Err(GrammarError::ReservedSymbol { name: name.clone() });
            }
        }

        let mut vocabulary = Vocabulary::new();

        // Non-terminals: declared, then undeclared left-hand sides, then the start.
        let mut non_terminals = Vec::with_capacity(self.non_terminals.len());
        for name in &self.non_terminals {
            let symbol = vocabulary.intern(name, SymbolKind::NonTerminal);
            if !non_terminals.contains(&symbol) {
                non_terminals.push(symbol);
            }
        }
        let mut lhs_order = Vec::new();
        for (lhs, _) in &self.productions {
            let symbol = vocabulary.intern(lhs, SymbolKind::NonTerminal);
            if !lhs_order.contains(&symbol) {
                lhs_order.push(symbol);
            }
        }
        let start = vocabulary.intern(&start_name, SymbolKind::NonTerminal);

        let mut terminals = Vec::with_capacity(self.terminals.len());
        for name in &self.terminals {
            let symbol = vocabulary.intern(name, SymbolKind::Terminal);
            if vocabulary.kind(symbol) != SymbolKind::Terminal {
                tracing::warn!(symbol = %name, "declared terminal is also a non-terminal");
            } else if !terminals.contains(&symbol) {
                terminals.push(symbol);
            }
        }

        let mut productions: Vec<Production> = Vec::with_capacity(self.productions.len() + 1);
        let mut alternatives: FxHashMap<Symbol, Vec<ProductionId>> = FxHashMap::default();
        let mut seen: FxHashSet<Production> = FxHashSet::default();

        for (lhs, rhs) in &self.productions {
            let lhs = vocabulary.intern(lhs, SymbolKind::NonTerminal);
            let mut symbols: SmallVec<[Symbol; 4]> = SmallVec::with_capacity(rhs.len());
            for name in rhs {
                let symbol = match vocabulary.lookup(name) {
                    Some(symbol) => symbol,
                    None => {
                        tracing::warn!(symbol = %name, "undeclared symbol treated as a terminal");
                        let symbol = vocabulary.intern(name, SymbolKind::Terminal);
                        terminals.push(symbol);
                        symbol
                    }
                };
                symbols.push(symbol);
            }

            let production = Production::new(lhs, symbols);
            if !seen.insert(production.clone()) {
                tracing::warn!(
                    lhs = %vocabulary.name(lhs),
                    "duplicate production dropped"
                );
                continue;
            }
            let id = push_production(&mut productions, production);
            alternatives.entry(lhs).or_default().push(id);
        }

        let mut augmented_name = format!("{start_name}{AUGMENT_MARKER}");
        while vocabulary.lookup(&augmented_name).is_some() {
            augmented_name.push(AUGMENT_MARKER);
        }
        let augmented_start = vocabulary.intern(&augmented_name, SymbolKind::NonTerminal);
        let augmented_production =
            push_production(&mut productions, Production::new(augmented_start, [start]));
        alternatives
            .entry(augmented_start)
            .or_default()
            .push(augmented_production);

        let grammar = Grammar {
            vocabulary,
            productions,
            alternatives,
            terminals,
            non_terminals,
            lhs_order,
            start,
            augmented_start,
            augmented_production,
        };

        if let Err(advisory) = grammar.check_context_free() {
            tracing::warn!(%advisory, "grammar check failed");
        }
        tracing::debug!(
            symbols = grammar.vocabulary.len(),
            terminals = grammar.terminals.len(),
            productions = grammar.productions.len(),
            augmented = %grammar.name(augmented_start),
            "grammar built"
        );

        Ok(grammar)
    }
}

fn push_production(productions: &mut Vec<Production>, production: Production) -> ProductionId {
    let id = ProductionId::new(u32::try_from(productions.len()).unwrap_or(u32::MAX));
    productions.push(production);
    id
}
