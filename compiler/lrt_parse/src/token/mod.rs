//! Parser input tokens and PIF resolution.
//!
//! A scanner produces a program internal form (PIF): one entry per lexeme,
//! holding the token type and, for identifiers and constants, an index into
//! its symbol table. [`resolve_tokens`] pairs every entry with its lexeme so
//! the parser can carry values into leaf nodes and error reports.

use rustc_hash::FxHashMap;

use crate::ParseError;

#[cfg(test)]
mod tests;

/// One input token. Only `kind` drives table lookups.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: String,
    pub value: Option<String>,
}

impl Token {
    pub fn new(kind: impl Into<String>) -> Self {
        Token {
            kind: kind.into(),
            value: None,
        }
    }

    pub fn with_value(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Token {
            kind: kind.into(),
            value: Some(value.into()),
        }
    }

    /// Text shown for this token: its value, or the kind when it has none.
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.kind)
    }
}

/// A PIF entry: token type plus an optional symbol-table index.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PifEntry {
    pub kind: String,
    pub index: Option<usize>,
}

impl PifEntry {
    pub fn new(kind: impl Into<String>, index: Option<usize>) -> Self {
        PifEntry {
            kind: kind.into(),
            index,
        }
    }
}

/// Index-to-lexeme lookup for a scanner's symbol table.
pub trait SymbolTable {
    fn lookup(&self, index: usize) -> Option<&str>;
}

impl SymbolTable for [String] {
    fn lookup(&self, index: usize) -> Option<&str> {
        self.get(index).map(String::as_str)
    }
}

impl SymbolTable for Vec<String> {
    fn lookup(&self, index: usize) -> Option<&str> {
        self.as_slice().lookup(index)
    }
}

impl SymbolTable for FxHashMap<usize, String> {
    fn lookup(&self, index: usize) -> Option<&str> {
        self.get(&index).map(String::as_str)
    }
}

/// Turn PIF entries into tokens, looking up each index in `table`.
///
/// Entries without an index become tokens without a value.
pub fn resolve_tokens<T>(pif: &[PifEntry], table: &T) -> Result<Vec<Token>, ParseError>
where
    T: SymbolTable + ?Sized,
{
    pif.iter()
        .enumerate()
        .map(|(position, entry)| {
            let value = match entry.index {
                None => None,
                Some(index) => {
                    let lexeme = table
                        .lookup(index)
                        .ok_or(ParseError::UnresolvedToken { position, index })?;
                    Some(lexeme.to_owned())
                }
            };
            Ok(Token {
                kind: entry.kind.clone(),
                value,
            })
        })
        .collect()
}
