//! Interned grammar symbols.
//!
//! Every terminal and non-terminal is interned once into a [`Vocabulary`]
//! and referred to by a 4-byte [`Symbol`] id afterwards. Index 0 is
//! pre-interned as the end-of-input marker `$`.

use rustc_hash::FxHashMap;
use std::fmt;


/// Index into a [`Vocabulary`].
///
/// Comparison and hashing are plain integer operations, so symbols are cheap
/// to store in items, table keys and tree nodes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Symbol(u32);

impl Symbol {
    /// The end-of-input marker, pre-interned in every vocabulary.
    pub const END: Symbol = Symbol(0);

    /// Create a symbol from a raw index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        Symbol(index)
    }

    /// Get the index into the vocabulary.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is the end-of-input marker.
    #[inline]
    pub const fn is_end(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_end() {
            write!(f, "Symbol::END")
        } else {
            write!(f, "Symbol({})", self.0)
        }
    }
}

/// Classification of a symbol.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SymbolKind {
    Terminal,
    NonTerminal,
    /// The end-of-input marker `$`.
    End,
}

impl SymbolKind {
    /// Terminals and the end marker can appear as ACTION keys.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, SymbolKind::Terminal | SymbolKind::End)
    }
}

/// Name and kind storage for the symbols of one grammar.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    names: Vec<Box<str>>,
    kinds: Vec<SymbolKind>,
    map: FxHashMap<Box<str>, Symbol>,
}

impl Vocabulary {
    /// Spelling of the end-of-input marker.
    pub const END_NAME: &'static str = "$";

    /// Create a vocabulary holding only the end marker.
    pub fn new() -> Self {
        let mut vocabulary = Vocabulary {
            names: Vec::new(),
            kinds: Vec::new(),
            map: FxHashMap::default(),
        };
        vocabulary.push(Self::END_NAME, SymbolKind::End);
        vocabulary
    }

    fn push(&mut self, name: &str, kind: SymbolKind) -> Symbol {
        let index = u32::try_from(self.names.len()).unwrap_or(u32::MAX);
        let symbol = Symbol::new(index);
        self.names.push(name.into());
        self.kinds.push(kind);
        self.map.insert(name.into(), symbol);
        symbol
    }

    /// Intern `name` with `kind`, returning the existing symbol if already known.
    ///
    /// The kind of an existing symbol is left unchanged.
    pub fn intern(&mut self, name: &str, kind: SymbolKind) -> Symbol {
        match self.map.get(name) {
            Some(&symbol) => symbol,
            None => self.push(name, kind),
        }
    }

    /// Look up a symbol by name.
    pub fn lookup(&self, name: &str) -> Option<Symbol> {
        self.map.get(name).copied()
    }

    /// Name of a symbol.
    pub fn name(&self, symbol: Symbol) -> &str {
        self.names
            .get(symbol.index())
            .map_or("<invalid>", |name| &**name)
    }

    /// Kind of a symbol. Ids from a foreign vocabulary read as terminals.
    pub fn kind(&self, symbol: Symbol) -> SymbolKind {
        self.kinds
            .get(symbol.index())
            .copied()
            .unwrap_or(SymbolKind::Terminal)
    }

    /// Number of interned symbols, including the end marker.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false: the end marker is pre-interned.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over all symbols in interning order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> + '_ {
        self.names.iter().enumerate().map(|(index, name)| {
            let index = u32::try_from(index).unwrap_or(u32::MAX);
            (Symbol::new(index), &**name)
        })
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}
