//! Line-oriented grammar text format.
//!
//! ```text
//! non-terminals: S A
//! terminals: a b
//! start: S
//! S -> A A
//! A -> a A
//! A -> b
//! ```
//!
//! The three header lines are `non-terminals:`, `terminals:` and `start:`, in
//! that order, each followed by a space-separated list.
//! Every following non-blank line is one alternative `lhs -> symbols`;
//! repeating a left-hand side appends alternatives in order, and an empty
//! right-hand side declares an empty production.

use crate::{Grammar, GrammarError};

#[cfg(test)]
mod tests;

/// Parse grammar text and build the augmented grammar.
pub fn parse_grammar(source: &str) -> Result<Grammar, GrammarError> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let non_terminals = header(lines.next(), "non-terminals")?;
    let terminals = header(lines.next(), "terminals")?;
    let (start_line, start) = header_line(lines.next(), "start")?;
    let mut start_symbols = start.split_whitespace();
    let start = match (start_symbols.next(), start_symbols.next()) {
        (Some(symbol), None) => symbol,
        _ => {
            return Err(GrammarError::Syntax {
                line: start_line,
                message: "expected exactly one start symbol".to_owned(),
            })
        }
    };

    let mut builder = Grammar::builder()
        .non_terminals(non_terminals.split_whitespace())
        .terminals(terminals.split_whitespace())
        .start(start);

    for (line, text) in lines {
        let Some((lhs, rhs)) = text.split_once("->") else {
            return Err(GrammarError::Syntax {
                line,
                message: format!("expected `lhs -> symbols`, found `{text}`"),
            });
        };
        let mut lhs_symbols = lhs.split_whitespace();
        let lhs = match (lhs_symbols.next(), lhs_symbols.next()) {
            (Some(symbol), None) => symbol,
            _ => {
                return Err(GrammarError::Syntax {
                    line,
                    message: "expected a single left-hand-side symbol".to_owned(),
                })
            }
        };
        builder = builder.production(lhs, rhs.split_whitespace());
    }

    builder.build()
}

fn header<'a>(line: Option<(usize, &'a str)>, what: &str) -> Result<&'a str, GrammarError> {
    header_line(line, what).map(|(_, list)| list)
}

/// Split a header line at its first colon, check its label and return the list part.
fn header_line<'a>(
    line: Option<(usize, &'a str)>,
    what: &str,
) -> Result<(usize, &'a str), GrammarError> {
    let Some((number, text)) = line else {
        return Err(GrammarError::Syntax {
            line: 0,
            message: format!("missing {what} line"),
        });
    };
    match text.split_once(':') {
        Some((label, list)) if label.trim() == what => Ok((number, list.trim())),
        _ => Err(GrammarError::Syntax {
            line: number,
            message: format!("expected `{what}: ...`, found `{text}`"),
        }),
    }
}
